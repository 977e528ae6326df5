// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod engine;
pub mod error;
pub mod log;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod store;

pub use data::{Dataset, Record};
pub use engine::{Statistics, aggregate};
pub use error::{AggregateError, ExtractError, RunError, StoreError};

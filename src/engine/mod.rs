// src/engine/mod.rs
mod engine;
pub mod types;

pub use engine::aggregate;
pub use types::{EntityKind, EntityRollup, Extreme, NoneOfAboveSummary, Statistics};

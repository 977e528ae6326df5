// src/core/mod.rs

pub mod html;
pub mod net;
pub mod ordered;
pub mod sanitize;

pub use net::{Fetcher, HttpFetcher};
pub use ordered::OrderedMap;

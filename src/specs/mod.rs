// src/specs/mod.rs
//! # Page specs
//!
//! One module per crawl stage. Each knows which page(s) the stage reads, which
//! selectors locate the table, and how a row of the previous stage points at
//! the next page.
//!
//! ## What lives here
//! - Page URLs and the link rewrite between stages.
//! - Selector choice per page (`consts::*_SEL`).
//! - The stage's policy for an absent page: skip (overview, parties) or abort
//!   (units).
//!
//! ## What does **not** live here
//! - Table parsing: `core::html::extract` is generic and page-agnostic.
//! - Persistence and stage sequencing: see `store` and `runner`.
//! - Aggregation: see `engine`.
//!
//! ## Typical call chain
//! ```text
//! runner → specs::<stage>::collect() → core::net::Fetcher::fetch()
//!                                    ↘ core::html::extract()
//!        → store::Store::persist()
//! ```
pub mod overview;
pub mod parties;
pub mod units;

use url::Url;

use crate::core::{Fetcher, html};
use crate::data::Record;
use crate::error::ExtractError;

/// Selector pair locating one table.
#[derive(Clone, Copy, Debug)]
pub struct TableSpec {
    pub header: &'static str,
    pub body: &'static str,
}

/// Fetch `url` and extract its table. `Ok(None)` when the page is absent.
pub fn read_table(
    fetcher: &dyn Fetcher,
    url: &str,
    spec: TableSpec,
    base: &Url,
) -> Result<Option<Vec<Record>>, ExtractError> {
    match fetcher.fetch(url) {
        Some(markup) => html::extract(&markup, spec.header, spec.body, base).map(Some),
        None => Ok(None),
    }
}

// src/specs/overview.rs
//! Overview page: one row per party with its seat count and a link to the
//! party's list of winning candidates.

use tracing::error;
use url::Url;

use super::{TableSpec, read_table};
use crate::config::consts::{INDEX_PAGE, OVERVIEW_BODY_SEL, OVERVIEW_HEADER_SEL};
use crate::core::Fetcher;
use crate::data::Record;
use crate::error::RunError;

pub const TABLE: TableSpec = TableSpec { header: OVERVIEW_HEADER_SEL, body: OVERVIEW_BODY_SEL };

pub fn index_url(base: &Url) -> Result<Url, RunError> {
    base.join(INDEX_PAGE).map_err(|source| RunError::BaseUrl { url: s!(base.as_str()), source })
}

/// `None` when the index page could not be retrieved.
pub fn collect(fetcher: &dyn Fetcher, base: &Url) -> Result<Option<Vec<Record>>, RunError> {
    let url = index_url(base)?;
    let rows = read_table(fetcher, url.as_str(), TABLE, base)?;
    if rows.is_none() {
        error!("Failed to retrieve HTML.");
    }
    Ok(rows)
}

// src/specs/parties.rs
//! Party pages: for every overview row, the party's winning candidates, each
//! linking to that candidate's constituency.
//!
//! A party page that cannot be fetched is logged and left out.

use tracing::{error, warn};
use url::Url;

use super::{TableSpec, read_table};
use crate::config::consts::{DETAIL_BODY_SEL, DETAIL_HEADER_SEL, PARTY_COLUMN};
use crate::config::options::Stage;
use crate::core::Fetcher;
use crate::data::{Dataset, Record};
use crate::error::RunError;
use crate::progress::Progress;

pub const TABLE: TableSpec = TableSpec { header: DETAIL_HEADER_SEL, body: DETAIL_BODY_SEL };

pub fn collect(
    fetcher: &dyn Fetcher,
    base: &Url,
    overview: &[Record],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Dataset, RunError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Stage::Parties, overview.len());
    }

    let mut out = Dataset::new();
    for (i, row) in overview.iter().enumerate() {
        let party = row.get(PARTY_COLUMN).unwrap_or_default();
        let Some(url) = row.next() else {
            warn!("Overview row {}: '{party}' has no link, skipping", i + 1);
            continue;
        };

        match read_table(fetcher, url, TABLE, base)? {
            Some(rows) => {
                out.insert(party, rows);
                if let Some(p) = progress.as_deref_mut() { p.item_done(party); }
            }
            None => {
                error!("Failed to retrieve HTML.");
                if let Some(p) = progress.as_deref_mut() { p.item_failed(party); }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(out)
}

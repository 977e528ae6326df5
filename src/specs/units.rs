// src/specs/units.rs
//! Constituency pages: the full vote table of every constituency a party won.
//!
//! Seeds are all party-page rows, flattened in party order. The aggregation
//! needs every constituency, so an unreachable page or a seed without a link
//! aborts the stage. Each table is stored best-placed candidate first.

use tracing::{debug, error};
use url::Url;

use super::{TableSpec, read_table};
use crate::config::consts::{
    CANDIDATE_LINK_PREFIX, DETAIL_BODY_SEL, DETAIL_HEADER_SEL, UNIT_COLUMN, UNIT_LINK_PREFIX,
};
use crate::config::options::{Labels, Stage};
use crate::core::Fetcher;
use crate::core::sanitize::parse_percent;
use crate::data::{self, Dataset, Record};
use crate::error::RunError;
use crate::progress::Progress;

pub const TABLE: TableSpec = TableSpec { header: DETAIL_HEADER_SEL, body: DETAIL_BODY_SEL };

/// Candidate-list link → constituency vote-table link.
///
/// `.../candidateswise-S015.htm` → `.../ConstituencywiseS015.htm`
pub fn unit_link(candidate_link: &str) -> String {
    candidate_link.replacen(CANDIDATE_LINK_PREFIX, UNIT_LINK_PREFIX, 1)
}

/// Stable sort, highest vote share first; unparseable shares go last.
fn rank_by_share(rows: &mut [Record], percent_column: &str) {
    let share = |r: &Record| r.get(percent_column).and_then(parse_percent).unwrap_or(f64::NEG_INFINITY);
    rows.sort_by(|a, b| share(b).total_cmp(&share(a)));
}

pub fn collect(
    fetcher: &dyn Fetcher,
    base: &Url,
    parties: &Dataset,
    labels: &Labels,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Dataset, RunError> {
    let seeds = data::flatten(parties);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Stage::Units, seeds.len());
    }

    let mut out = Dataset::new();
    for seed in seeds {
        let Some(link) = seed.next() else {
            let group = s!(seed.get(UNIT_COLUMN).unwrap_or_default());
            return Err(RunError::MissingLink { group });
        };
        let url = unit_link(link);
        debug!("fetching... {url}");

        let Some(unit) = seed.get(UNIT_COLUMN) else {
            return Err(RunError::MissingSeedColumn { column: s!(UNIT_COLUMN), url });
        };

        let Some(mut rows) = read_table(fetcher, &url, TABLE, base)? else {
            error!("Failed to retrieve HTML.");
            if let Some(p) = progress.as_deref_mut() { p.item_failed(unit); }
            return Err(RunError::DocumentUnavailable { url });
        };

        rank_by_share(&mut rows, &labels.percent);
        out.insert(unit, rows);
        if let Some(p) = progress.as_deref_mut() { p.item_done(unit); }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(out)
}

// src/engine/types.rs
use serde::{Deserialize, Serialize};

use crate::config::options::Labels;
use crate::core::OrderedMap;

/// What a party name stands for in the rollup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Contesting,
    Independent,
    NoneOfAbove,
}

impl EntityKind {
    pub fn of_party(party: &str, labels: &Labels) -> Self {
        if party == labels.independent {
            EntityKind::Independent
        } else if party == labels.nota_party {
            EntityKind::NoneOfAbove
        } else {
            EntityKind::Contesting
        }
    }
}

/// Accumulated figures for one party across all units.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRollup {
    /// Sums of the per-channel vote columns, in `Labels::channels` order.
    pub channels: OrderedMap<i64>,
    pub total_votes: i64,
    pub total_candidates: u32,
    pub won: u32,
    pub units_won: Vec<String>,
}

/// A unit holding the highest or lowest none-of-the-above count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extreme {
    pub unit: String,
    pub count: i64,
    /// `None` when the unit total is unknown or zero.
    pub percentage_of_unit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading_entity: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoneOfAboveSummary {
    pub rollup: Option<EntityRollup>,
    pub total: i64,
    pub percentage_of_total: Option<f64>,
    pub highest: Option<Extreme>,
    pub lowest: Option<Extreme>,
}

/// Final artifact of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub distinct_entity_count: usize,
    pub total_votes: i64,
    pub total_candidates: u64,
    pub unit_count: usize,
    /// `None` marks a unit whose vote column did not parse.
    pub per_unit_totals: OrderedMap<Option<i64>>,
    pub none_of_above_summary: NoneOfAboveSummary,
    pub independent_summary: Option<EntityRollup>,
    /// Contesting parties only.
    pub per_entity_rollup: OrderedMap<EntityRollup>,
}

impl Statistics {
    /// Winner count of `party`, zero if it never appeared.
    pub fn wins(&self, party: &str) -> u32 {
        self.per_entity_rollup.get(party).map_or(0, |e| e.won)
    }
}

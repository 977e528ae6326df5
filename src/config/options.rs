// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// One crawl/aggregate step. Each step reads the previous step's artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Overview,
    Parties,
    Units,
    Stats,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Overview, Stage::Parties, Stage::Units, Stage::Stats];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Overview => "overview",
            Stage::Parties => "parties",
            Stage::Units => "units",
            Stage::Stats => "stats",
        }
    }
}

/// Column names and pseudo-entity labels the aggregation reads.
///
/// Defaults match the results portal. The independent and none-of-the-above
/// labels are party names; `nota_candidate` is the candidate name that marks
/// the none-of-the-above row inside a constituency table.
#[derive(Clone, Debug, PartialEq)]
pub struct Labels {
    pub party: String,
    pub candidate: String,
    pub total_votes: String,
    pub percent: String,
    /// Per-channel vote columns summed into each party's rollup.
    pub channels: Vec<String>,
    pub independent: String,
    pub nota_party: String,
    pub nota_candidate: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            party: s!("Party"),
            candidate: s!("Candidate"),
            total_votes: s!("Total Votes"),
            percent: s!("% of Votes"),
            channels: vec![s!("EVM Votes"), s!("Postal Votes")],
            independent: s!("Independent"),
            nota_party: s!("None of the Above"),
            nota_candidate: s!("NOTA"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    /// Stages to run, in pipeline order.
    pub stages: Vec<Stage>,
    pub dataset_dir: PathBuf,
    pub base_url: String,
    pub labels: Labels,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            stages: Stage::ALL.to_vec(),
            dataset_dir: PathBuf::from(DATASET_DIR),
            base_url: s!(BASE_URL),
            labels: Labels::default(),
        }
    }
}

impl RunOptions {
    /// Replace the stage list, deduplicated and in pipeline order.
    pub fn set_stages(&mut self, stages: impl IntoIterator<Item = Stage>) {
        let mut v: Vec<Stage> = stages.into_iter().collect();
        v.sort_unstable();
        v.dedup();
        self.stages = v;
    }

    pub fn runs(&self, stage: Stage) -> bool {
        self.stages.contains(&stage)
    }
}

// src/runner.rs
use std::path::PathBuf;

use tracing::{info, warn};
use url::Url;

use crate::{
    config::consts::{OVERVIEW_FILE, PARTIES_FILE, STATS_FILE, UNITS_FILE},
    config::options::{RunOptions, Stage},
    core::Fetcher,
    data::{Dataset, Record},
    engine::{self, Statistics},
    error::RunError,
    progress::Progress,
    specs,
    store::Store,
};

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub statistics: Option<Statistics>,
}

/// Run the selected stages in pipeline order.
///
/// A stage hands its output to the next one in memory; a stage whose
/// predecessor did not run in this invocation loads the predecessor's
/// artifact from the dataset directory instead. If the overview stage ran
/// but found no index page, later stages stop rather than reuse an older
/// artifact.
pub fn run(
    opts: &RunOptions,
    fetcher: &dyn Fetcher,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let base = Url::parse(&opts.base_url)
        .map_err(|source| RunError::BaseUrl { url: opts.base_url.clone(), source })?;
    let store = Store::new(&opts.dataset_dir);
    let mut summary = RunSummary::default();

    // `Some(None)`: the overview stage ran here but the index page was absent.
    let mut overview: Option<Option<Vec<Record>>> = None;
    let mut parties: Option<Dataset> = None;
    let mut units: Option<Dataset> = None;

    for &stage in &opts.stages {
        info!("stage {} starting", stage.name());
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Running stage: {}", stage.name()));
        }

        match stage {
            Stage::Overview => {
                let rows = specs::overview::collect(fetcher, &base)?;
                if let Some(rows) = &rows {
                    summary.files_written.extend(store.persist_logged(rows, OVERVIEW_FILE));
                }
                overview = Some(rows);
            }
            Stage::Parties => {
                let seeds = match overview.take() {
                    Some(Some(rows)) => rows,
                    Some(None) => {
                        let url = specs::overview::index_url(&base)?;
                        warn!("No overview data from this run, not falling back to {OVERVIEW_FILE}");
                        return Err(RunError::DocumentUnavailable { url: s!(url.as_str()) });
                    }
                    None => store.load(OVERVIEW_FILE)?,
                };
                let ds = specs::parties::collect(fetcher, &base, &seeds, progress.as_deref_mut())?;
                summary.files_written.extend(store.persist_logged(&ds, PARTIES_FILE));
                parties = Some(ds);
            }
            Stage::Units => {
                let seeds = match parties.take() {
                    Some(ds) => ds,
                    None => store.load(PARTIES_FILE)?,
                };
                let ds = specs::units::collect(fetcher, &base, &seeds, &opts.labels, progress.as_deref_mut())?;
                summary.files_written.extend(store.persist_logged(&ds, UNITS_FILE));
                units = Some(ds);
            }
            Stage::Stats => {
                let ds = match units.take() {
                    Some(ds) => ds,
                    None => store.load(UNITS_FILE)?,
                };
                let stats = engine::aggregate(&ds, &opts.labels)?;
                summary.files_written.extend(store.persist_logged(&stats, STATS_FILE));
                summary.statistics = Some(stats);
            }
        }
        info!("stage {} done", stage.name());
    }

    Ok(summary)
}

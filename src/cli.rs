// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::{BASE_URL, DATASET_DIR};
use crate::config::options::{RunOptions, Stage};
use crate::core::HttpFetcher;
use crate::progress::Progress;

#[derive(Parser, Debug)]
#[command(version, about = "Scrape published results tables and aggregate them into statistics")]
pub struct Args {
    /// Stage(s) to run; repeat the flag to run several, in pipeline order.
    #[arg(short, long, value_enum, default_value = "all")]
    pub stage: Vec<StageArg>,

    /// Directory holding each stage's JSON artifact.
    #[arg(short = 'd', long, default_value = DATASET_DIR)]
    pub dataset_dir: PathBuf,

    /// Portal root; relative links in the tables resolve against it.
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StageArg {
    Overview,
    Parties,
    Units,
    Stats,
    All,
}

impl Args {
    pub fn to_options(&self) -> RunOptions {
        let mut opts = RunOptions {
            dataset_dir: self.dataset_dir.clone(),
            base_url: self.base_url.clone(),
            ..RunOptions::default()
        };
        opts.set_stages(self.stage.iter().flat_map(|s| match s {
            StageArg::Overview => vec![Stage::Overview],
            StageArg::Parties => vec![Stage::Parties],
            StageArg::Units => vec![Stage::Units],
            StageArg::Stats => vec![Stage::Stats],
            StageArg::All => Stage::ALL.to_vec(),
        }));
        opts
    }
}

/// Prints one line per page to stdout.
#[derive(Default)]
struct ConsoleProgress {
    stage: Option<Stage>,
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, stage: Stage, total: usize) {
        self.stage = Some(stage);
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, key: &str) {
        self.done += 1;
        println!("[{}/{}] {key}", self.done, self.total);
    }

    fn item_failed(&mut self, key: &str) {
        self.done += 1;
        println!("[{}/{}] {key} (failed)", self.done, self.total);
    }

    fn finish(&mut self) {
        if let Some(stage) = self.stage.take() {
            println!("{}: {} of {} pages", stage.name(), self.done, self.total);
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    crate::log::init(args.verbose);

    let opts = args.to_options();
    let fetcher = HttpFetcher::new().wrap_err("building HTTP client")?;
    let mut progress = ConsoleProgress::default();

    let summary = crate::runner::run(&opts, &fetcher, Some(&mut progress))?;
    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    if let Some(stats) = &summary.statistics {
        println!(
            "{} units, {} parties, {} candidates, {} votes",
            stats.unit_count, stats.distinct_entity_count, stats.total_candidates, stats.total_votes
        );
    }
    Ok(())
}

// src/error.rs
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid CSS selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error on {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("unit '{unit}' row {row}: missing column '{column}'")]
    MissingColumn { unit: String, row: usize, column: String },
    #[error("mismatch in party count: rollup has {rollup} parties, fold saw {distinct}")]
    EntityCountMismatch { rollup: usize, distinct: usize },
}

/// Anything that aborts a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error("failed to retrieve document: {url}")]
    DocumentUnavailable { url: String },
    #[error("record '{group}' has no follow-up link")]
    MissingLink { group: String },
    #[error("rows from {url} have no '{column}' column")]
    MissingSeedColumn { column: String, url: String },
    #[error("invalid base URL '{url}': {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

// src/progress.rs
use crate::config::options::Stage;

/// Progress reporting for the crawl stages.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called when a stage starts, with the number of pages it will fetch.
    fn begin(&mut self, _stage: Stage, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page fetched and extracted; `key` is the group it was stored under.
    fn item_done(&mut self, _key: &str) {}

    /// One page could not be fetched.
    fn item_failed(&mut self, _key: &str) {}

    /// Called when a stage ends.
    fn finish(&mut self) {}
}

// src/core/net.rs
//! Document fetching.
//!
//! A fetch either yields the page body or nothing. Ordinary HTTP failures are
//! logged here and surface as `None`; callers decide whether a missing page is
//! skippable or fatal.

use std::time::Duration;

use tracing::{debug, error};

pub trait Fetcher {
    fn fetch(&self, url: &str) -> Option<String>;
}

/// Blocking HTTP GET, one request at a time.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("results_scrape/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client.get(url).send()?.error_for_status()?.text()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Option<String> {
        debug!("GET {url}");
        match self.get(url) {
            Ok(body) => Some(body),
            Err(e) => {
                error!("Error fetching data from URL: {e}");
                None
            }
        }
    }
}

// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;

use results_scrape::core::Fetcher;
use results_scrape::data::{Dataset, Record};

pub const BASE: &str = "https://results.example.org/Gen2024/";

/// A `<table>` with one `<th>` per line in the header row, the way the portal
/// renders it.
pub fn table(headers: &[&str], rows: &[&[&str]]) -> String {
    let mut s = String::from("<table>\n<thead>\n<tr>\n");
    for h in headers {
        s.push_str(&format!("<th>{h}</th>\n"));
    }
    s.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        s.push_str("<tr>");
        for cell in *row {
            s.push_str(&format!("<td>{cell}</td>"));
        }
        s.push_str("</tr>\n");
    }
    s.push_str("</tbody>\n</table>");
    s
}

pub fn document(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>t</title></head><body>{body}</body></html>")
}

pub fn link(href: &str, text: &str) -> String {
    format!(r#"<a href="{href}">{text}</a>"#)
}

pub fn candidate(party: &str, name: &str, votes: &str, pct: &str) -> Record {
    [
        ("Candidate", name),
        ("Party", party),
        ("EVM Votes", votes),
        ("Postal Votes", "0"),
        ("Total Votes", votes),
        ("% of Votes", pct),
    ]
    .into_iter()
    .collect()
}

pub fn dataset(units: Vec<(&str, Vec<Record>)>) -> Dataset {
    units.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Serves canned pages keyed by absolute URL; anything else is absent.
#[derive(Default)]
pub struct Pages(pub HashMap<String, String>);

impl Pages {
    pub fn with(mut self, page: &str, markup: String) -> Self {
        self.0.insert(format!("{BASE}{page}"), markup);
        self
    }
}

impl Fetcher for Pages {
    fn fetch(&self, url: &str) -> Option<String> {
        self.0.get(url).cloned()
    }
}

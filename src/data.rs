// src/data.rs
//
// Extracted table data.
//
// - Record:  one body row, keyed by the column names derived from the header,
//            plus an optional `next` link to the page the row points at.
// - Dataset: group key (party, constituency, ...) → that group's records.
//            One crawl stage's Dataset seeds the next stage.

use serde::{Deserialize, Serialize};

use crate::core::OrderedMap;

/// Reserved key holding a row's resolved follow-up URL.
pub const NEXT_KEY: &str = "next";

/// One table row. Keys are header text, values are trimmed cell text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: OrderedMap<String>,
}

impl Record {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column, value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Follow-up URL, if any cell in the row carried a link.
    pub fn next(&self) -> Option<&str> { self.get(NEXT_KEY) }

    pub fn set_next(&mut self, url: impl Into<String>) {
        self.insert(NEXT_KEY, url);
    }

    /// Number of keys, `next` included.
    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k, v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut r = Record::new();
        for (k, v) in iter {
            r.insert(k, v);
        }
        r
    }
}

/// Grouped records, in the order the groups were crawled.
pub type Dataset = OrderedMap<Vec<Record>>;

/// Concatenate every group's records in group order.
pub fn flatten(ds: &Dataset) -> Vec<&Record> {
    ds.values().flat_map(|rows| rows.iter()).collect()
}

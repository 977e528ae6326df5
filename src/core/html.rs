// src/core/html.rs
//! Generic table → record extraction.
//!
//! The column schema is rebuilt from whatever the header selector matches:
//! each match's text is trimmed, the pieces are joined with a space, and the
//! result is split on line breaks. Header rows that render as one line per
//! `<th>` thus become one column per `<th>`, without the extractor knowing
//! anything about the table's shape.
//!
//! Body rows are positional: the n-th direct `<td>` of a row is the value of
//! the n-th column. Rows whose cell count disagrees with the column count are
//! logged and dropped.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;
use url::Url;

use crate::data::Record;
use crate::error::ExtractError;

pub fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::Selector {
        selector: s!(selector),
        reason: format!("{e:?}"),
    })
}

/// Extract every conforming body row of `markup` as a [`Record`].
///
/// Links found in a cell are resolved against `base` and stored under
/// [`crate::data::NEXT_KEY`]; when several cells link, the last one wins.
pub fn extract(
    markup: &str,
    header_selector: &str,
    body_selector: &str,
    base: &Url,
) -> Result<Vec<Record>, ExtractError> {
    let header_sel = parse_selector(header_selector)?;
    let body_sel = parse_selector(body_selector)?;
    let anchor_sel = parse_selector("a")?;

    let doc = Html::parse_document(markup);
    let columns = derive_columns(&doc, &header_sel);

    let mut out = Vec::new();
    for (idx, row) in doc.select(&body_sel).enumerate() {
        let cells = data_cells(row);
        if cells.len() != columns.len() {
            warn!(
                expected = columns.len(),
                found = cells.len(),
                "Row {} does not match the expected number of columns.",
                idx + 1
            );
            continue;
        }

        let mut record = Record::new();
        for (column, cell) in columns.iter().zip(cells) {
            if let Some(href) = cell
                .select(&anchor_sel)
                .next()
                .and_then(|a| a.value().attr("href"))
            {
                match base.join(href) {
                    Ok(link) => record.set_next(link.as_str()),
                    Err(e) => warn!("Row {}: unresolvable link '{href}': {e}", idx + 1),
                }
            }
            record.insert(column.as_str(), visible_text(cell));
        }
        out.push(record);
    }

    Ok(out)
}

/// Column names from the header matches. No matches yields `[""]`.
pub fn derive_columns(doc: &Html, header_sel: &Selector) -> Vec<String> {
    let joined = doc
        .select(header_sel)
        .map(visible_text)
        .collect::<Vec<_>>()
        .join(" ");
    joined.split('\n').map(|t| s!(t.trim())).collect()
}

/// Direct `<td>` children only; nested tables don't leak cells upward.
fn data_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .collect()
}

fn visible_text(el: ElementRef<'_>) -> String {
    s!(el.text().collect::<String>().trim())
}

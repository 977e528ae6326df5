// tests/extract.rs
mod common;

use common::{BASE, document, link, table};
use results_scrape::core::html::extract;
use results_scrape::error::ExtractError;
use url::Url;

const HEAD: &str = "table thead tr";
const BODY: &str = "table tbody tr";

fn base() -> Url {
    Url::parse(BASE).unwrap()
}

#[test]
fn rows_become_records_keyed_by_header() {
    let doc = document(&table(
        &["Party", "Won", "Leading"],
        &[&["Alpha Party", "240", "0"], &["Beta Party", "99", "1"]],
    ));

    let out = extract(&doc, HEAD, BODY, &base()).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].get("Party"), Some("Alpha Party"));
    assert_eq!(out[0].get("Won"), Some("240"));
    assert_eq!(out[1].get("Leading"), Some("1"));
    assert_eq!(out[1].next(), None);
    let keys: Vec<_> = out[0].iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["Party", "Won", "Leading"]);
}

#[test]
fn mismatched_rows_are_dropped_not_repaired() {
    let doc = document(&table(
        &["Party", "Won"],
        &[&["Alpha", "1"], &["short"], &["Beta", "2", "extra"], &["Gamma", "3"]],
    ));

    let out = extract(&doc, HEAD, BODY, &base()).unwrap();

    let parties: Vec<_> = out.iter().map(|r| r.get("Party").unwrap()).collect();
    assert_eq!(parties, ["Alpha", "Gamma"]);
    assert!(out.iter().all(|r| r.len() == 2));
}

#[test]
fn cell_links_resolve_against_base() {
    let cell = link("partywise-369.htm", "240");
    let doc = document(&table(&["Party", "Won"], &[&["Alpha", cell.as_str()]]));

    let out = extract(&doc, HEAD, BODY, &base()).unwrap();

    assert_eq!(out[0].get("Won"), Some("240"));
    assert_eq!(out[0].next(), Some("https://results.example.org/Gen2024/partywise-369.htm"));
}

#[test]
fn last_link_in_row_wins() {
    let first = link("first.htm", "a");
    let second = link("https://elsewhere.example/second.htm", "b");
    let doc = document(&table(&["One", "Two"], &[&[first.as_str(), second.as_str()]]));

    let out = extract(&doc, HEAD, BODY, &base()).unwrap();

    assert_eq!(out[0].next(), Some("https://elsewhere.example/second.htm"));
    assert_eq!(out[0].get("One"), Some("a"));
}

#[test]
fn header_cells_are_not_data_cells() {
    let doc = document(
        "<table>\n<thead>\n<tr>\n<th>Name</th>\n<th>Votes</th>\n</tr>\n</thead>\n\
         <tbody><tr><th>1</th><td>A</td><td>10</td></tr></tbody></table>",
    );

    let out = extract(&doc, HEAD, BODY, &base()).unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].get("Name"), Some("A"));
    assert_eq!(out[0].get("Votes"), Some("10"));
}

#[test]
fn no_header_means_one_unnamed_column() {
    let doc = document(&table(&["ignored"], &[&["solo"], &["a", "b"]]));

    let out = extract(&doc, ".no-such-header", BODY, &base()).unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].get(""), Some("solo"));
}

#[test]
fn cell_text_is_trimmed() {
    let doc = document(&table(&["Party", "Won"], &[&["  <b>Alpha</b>\n ", " 7 "]]));

    let out = extract(&doc, HEAD, BODY, &base()).unwrap();

    assert_eq!(out[0].get("Party"), Some("Alpha"));
    assert_eq!(out[0].get("Won"), Some("7"));
}

#[test]
fn extraction_is_idempotent() {
    let cell = link("x.htm", "X");
    let doc = document(&table(&["A", "B"], &[&[cell.as_str(), "1"], &["bad"], &["Y", "2"]]));

    let first = extract(&doc, HEAD, BODY, &base()).unwrap();
    let second = extract(&doc, HEAD, BODY, &base()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn scoped_selectors_pick_the_results_table() {
    let other = table(&["Noise"], &[&["zzz"]]);
    let wanted = format!(
        r#"<div class="rslt-table">{}</div>"#,
        table(&["Party", "Won"], &[&["Alpha", "5"]])
    );
    let doc = document(&format!("{other}{wanted}"));

    let out = extract(
        &doc,
        ".rslt-table table thead tr",
        ".rslt-table table tbody tr",
        &base(),
    )
    .unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].get("Party"), Some("Alpha"));
}

#[test]
fn bad_selector_is_an_error() {
    let err = extract("<p></p>", "table[[", BODY, &base()).unwrap_err();
    let ExtractError::Selector { selector, .. } = err;
    assert_eq!(selector, "table[[");
}

#[test]
fn records_serialize_in_column_order_with_next() {
    let cell = link("p.htm", "Alpha");
    let doc = document(&table(&["Party", "Won"], &[&[cell.as_str(), "3"]]));

    let out = extract(&doc, HEAD, BODY, &base()).unwrap();
    let json = serde_json::to_string(&out).unwrap();

    assert_eq!(
        json,
        r#"[{"next":"https://results.example.org/Gen2024/p.htm","Party":"Alpha","Won":"3"}]"#
    );
}

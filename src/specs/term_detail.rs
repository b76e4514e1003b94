// src/specs/term_detail.rs
//! Scraping *spec* for one term's definition page.
//!
//! Shape of the page (only the parts we read):
//! ```text
//! <table class="definition-table">
//!   <thead>…</thead>
//!   <tbody>
//!     <tr class="supertype"><th colspan=3>Properties from <a>Thing</a></th></tr>
//!     <tr>
//!       <th class="prop-nam"><code><a href="/address">address</a></code></th>
//!       <td class="prop-ect"><a>PostalAddress</a>&nbsp; or <br/> <a>Text</a></td>
//!       <td class="prop-desc">Physical address of the item.</td>
//!     </tr>
//! ```
//! Every body row becomes one `PropertyEntry`:
//! - name = text of the first `code` in the row's `th` (empty if none);
//! - types = text nodes of the `td.prop-ect` cell with all whitespace removed,
//!   keeping only tokens that contain an uppercase letter.
//!
//! Header rows like the supertype banner above come through as `("", [])`;
//! rows are read independently and never dropped.

use crate::config::Markers;
use crate::core::html::{Document, Element};
use crate::core::sanitize::{has_uppercase, strip_ws};
use crate::error::ScrapeError;
use crate::model::{PropertyEntry, TermRecord};

/// Parse a term page with the default markers.
pub fn extract_term_record(term: &str, raw: impl AsRef<[u8]>) -> Result<TermRecord, ScrapeError> {
    extract_term_record_with(term, raw, &Markers::default())
}

pub fn extract_term_record_with(
    term: &str,
    raw: impl AsRef<[u8]>,
    markers: &Markers,
) -> Result<TermRecord, ScrapeError> {
    let doc = Document::from_bytes(raw.as_ref())?;
    Ok(term_record_from(term, &doc, markers))
}

pub fn term_record_from(term: &str, doc: &Document, markers: &Markers) -> TermRecord {
    let Some(table) = doc.find(|e| e.is("table") && e.has_class(&markers.definition_table_class))
    else {
        logd!("{term}: no table.{} on page", markers.definition_table_class);
        return TermRecord::empty(term);
    };

    let properties: Vec<PropertyEntry> = body_rows(table)
        .into_iter()
        .map(|tr| property_entry(tr, &markers.type_cell_class))
        .collect();

    logd!("{term}: {} property rows", properties.len());
    TermRecord::new(term, properties)
}

/// `tr` children of each `tbody`, plus bare `tr` children of the table itself.
/// `thead`/`tfoot` rows and rows of nested tables are not body rows.
fn body_rows(table: &Element) -> Vec<&Element> {
    let mut rows = Vec::new();
    for child in table.child_elements() {
        if child.is("tbody") {
            rows.extend(child.child_elements().filter(|e| e.is("tr")));
        } else if child.is("tr") {
            rows.push(child);
        }
    }
    rows
}

fn property_entry(tr: &Element, type_cell_class: &str) -> PropertyEntry {
    let name = tr
        .child_elements()
        .find(|e| e.is("th"))
        .and_then(|th| th.find(|e| e.is("code")))
        .map(Element::text)
        .unwrap_or_default();

    let expected_types = tr
        .child_elements()
        .find(|e| e.is("td") && e.has_class(type_cell_class))
        .map(|td| type_tokens(&td.text_nodes()))
        .unwrap_or_default();

    PropertyEntry::new(name, expected_types)
}

/// Whitespace-stripped text nodes that look like type names.
pub fn type_tokens(text_nodes: &[&str]) -> Vec<String> {
    text_nodes
        .iter()
        .map(|t| strip_ws(t))
        .filter(|t| has_uppercase(t))
        .collect()
}

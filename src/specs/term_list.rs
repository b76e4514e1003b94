// src/specs/term_list.rs
//! Term index: `#thing_tree a[href]` → `href` minus one leading `/`.

use crate::config::Markers;
use crate::core::html::Document;
use crate::error::ScrapeError;

/// Parse an index page with the default markers.
pub fn extract_term_list(raw: impl AsRef<[u8]>) -> Result<Vec<String>, ScrapeError> {
    extract_term_list_with(raw, &Markers::default())
}

pub fn extract_term_list_with(
    raw: impl AsRef<[u8]>,
    markers: &Markers,
) -> Result<Vec<String>, ScrapeError> {
    let doc = Document::from_bytes(raw.as_ref())?;
    Ok(term_list_from(&doc, markers))
}

/// Every linked term under the tree container, in document order.
/// No container, or no links in it, yields an empty list.
pub fn term_list_from(doc: &Document, markers: &Markers) -> Vec<String> {
    let Some(tree) = doc.element_by_id(&markers.term_tree_id) else {
        logd!("term list: no #{} container", markers.term_tree_id);
        return Vec::new();
    };

    let terms: Vec<String> = tree
        .descendants()
        .filter(|e| e.is("a"))
        .filter_map(|a| a.attr("href"))
        .map(|href| s!(href.strip_prefix('/').unwrap_or(href)))
        .collect();

    logd!("term list: {} terms", terms.len());
    terms
}

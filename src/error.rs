// src/error.rs
use std::io;

use thiserror::Error;

/// Failures surfaced by the scraper.
///
/// A missing container/table or a row without identifier or types is not an
/// error: extraction degrades to empty results for those.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("document could not be parsed at byte {offset}: {reason}")]
    DocumentUnparseable { offset: usize, reason: String },
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("render failed: {0}")]
    Render(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ScrapeError {
    pub(crate) fn unparseable(offset: usize, reason: impl Into<String>) -> Self {
        ScrapeError::DocumentUnparseable { offset, reason: reason.into() }
    }

    pub(crate) fn fetch(url: &str, reason: impl ToString) -> Self {
        ScrapeError::Fetch { url: s!(url), reason: reason.to_string() }
    }

    pub fn is_unparseable(&self) -> bool {
        matches!(self, ScrapeError::DocumentUnparseable { .. })
    }
}

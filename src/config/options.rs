// src/config/options.rs
use std::fmt;
use std::str::FromStr;

use super::consts::*;

/// Everything a run needs, decided once up front and passed down by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub mode: OutputMode,
    pub verbose: bool,
    pub terms: TermSelector,
    pub list_terms: bool,
    pub workers: usize,
    /// Pause after each request, per worker (plus a small per-term jitter).
    pub request_pause_ms: u64,
    pub source: SourceOptions,
    pub markers: Markers,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: OutputMode::Pp,
            verbose: false,
            terms: TermSelector::All,
            list_terms: false,
            workers: WORKERS,
            request_pause_ms: REQUEST_PAUSE_MS,
            source: SourceOptions::default(),
            markers: Markers::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Nested structural dump of the record.
    #[default]
    Pp,
    /// `create table` approximation.
    Sql,
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pp" | "text" => Ok(OutputMode::Pp),
            "sql" | "schema" => Ok(OutputMode::Sql),
            "json" => Ok(OutputMode::Json),
            other => Err(format!("Unknown output mode: {other} (expected pp, sql or json)")),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputMode::Pp => "pp",
            OutputMode::Sql => "sql",
            OutputMode::Json => "json",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TermSelector {
    /// Every term listed by the index page.
    All,
    Named(Vec<String>),
}

impl TermSelector {
    pub fn from_list(terms: Vec<String>) -> Self {
        if terms.is_empty() { TermSelector::All } else { TermSelector::Named(terms) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub base_url: String,
    pub index_path: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { base_url: s!(BASE_URL), index_path: s!(INDEX_PATH) }
    }
}

impl SourceOptions {
    pub fn index_url(&self) -> String {
        join!(self.base_url.trim_end_matches('/'), &self.index_path)
    }

    pub fn term_url(&self, term: &str) -> String {
        join!(self.base_url.trim_end_matches('/'), "/", term)
    }
}

/// Structural markers the extractors look for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    /// `id` of the element holding the term tree on the index page.
    pub term_tree_id: String,
    /// Class of the definition table on a term page.
    pub definition_table_class: String,
    /// Class of the expected-types cell in each definition row.
    pub type_cell_class: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            term_tree_id: s!(TERM_TREE_ID),
            definition_table_class: s!(DEFINITION_TABLE_CLASS),
            type_cell_class: s!(TYPE_CELL_CLASS),
        }
    }
}

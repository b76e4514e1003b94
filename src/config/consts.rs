// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://schema.org";
pub const INDEX_PATH: &str = "/docs/full.html";
pub const USER_AGENT: &str = "schema_scrape/0.1";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Page markers
pub const TERM_TREE_ID: &str = "thing_tree";
pub const DEFINITION_TABLE_CLASS: &str = "definition-table";
pub const TYPE_CELL_CLASS: &str = "prop-ect";

// Markup reader
pub const MAX_DEPTH: usize = 512; // open elements, deeper pages are rejected

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

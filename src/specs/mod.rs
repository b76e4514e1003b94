//! # Scraping “specs” module
//!
//! Page-specific extraction for the vocabulary site. Each spec knows *where the
//! ground truth lives in the markup* of one kind of page and how to read it.
//!
//! ## What lives here
//! - **Pure extraction** over an already-fetched document (`core::html::Document`).
//! - **Marker choice** (container id, table/cell classes), taken from
//!   `config::Markers` so a site change is a config change.
//! - **Tolerant shaping** into `Vec<String>` (index) or `model::TermRecord` (term page).
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`), **iteration over terms** and **output** (`runner`).
//! - **Rendering** (`render`).
//!
//! ## Conventions & invariants
//! - A missing container/table or a half-empty row is *not* an error: the spec
//!   returns empty-but-valid results and logs at debug level.
//! - Only markup that cannot be read at all fails (`ScrapeError::DocumentUnparseable`).
//! - Source order is preserved; nothing is deduplicated.
//!
//! ## Current specs
//! - `term_list` – every term identifier linked from the index tree.
//! - `term_detail` – the property rows of one term's definition table.
pub mod term_detail;
pub mod term_list;

pub use term_detail::{extract_term_record, extract_term_record_with, term_record_from};
pub use term_list::{extract_term_list, extract_term_list_with, term_list_from};

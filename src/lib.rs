// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod normalize;
pub mod progress;
pub mod render;
pub mod runner;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use error::ScrapeError;
pub use model::{PropertyEntry, TermRecord};
pub use normalize::normalize;
pub use render::{render, render_json, render_schema_text, render_text};
pub use specs::{extract_term_list, extract_term_record};

// src/render/mod.rs
//! Output notations for a `TermRecord`. Renderers only read the record.

mod json;
mod schema;
mod text;

pub use json::render_json;
pub use schema::render_schema_text;
pub use text::render_text;

use crate::config::OutputMode;
use crate::error::ScrapeError;
use crate::model::TermRecord;

pub fn render(record: &TermRecord, mode: OutputMode) -> Result<String, ScrapeError> {
    match mode {
        OutputMode::Pp => Ok(render_text(record)),
        OutputMode::Sql => Ok(render_schema_text(record)),
        OutputMode::Json => render_json(record),
    }
}

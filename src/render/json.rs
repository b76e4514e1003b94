// src/render/json.rs
use crate::error::ScrapeError;
use crate::model::TermRecord;

/// `{"term": …, "properties": [{"name": …, "expected_types": […]}]}`
pub fn render_json(record: &TermRecord) -> Result<String, ScrapeError> {
    Ok(serde_json::to_string_pretty(record)?)
}

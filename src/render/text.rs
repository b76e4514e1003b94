// src/render/text.rs
use std::fmt::Write;

use crate::model::TermRecord;

/// Structural echo of the record, no normalization or filtering:
/// ```text
/// "Person" {
///     "additionalName" => ["Text"],
///     "address" => ["PostalAddress", "Text"],
/// }
/// ```
pub fn render_text(record: &TermRecord) -> String {
    if record.is_empty() {
        return format!("{:?} {{}}", record.term());
    }

    let mut out = format!("{:?} {{\n", record.term());
    for p in record.properties() {
        let _ = writeln!(out, "    {:?} => {:?},", p.name, p.expected_types);
    }
    out.push('}');
    out
}

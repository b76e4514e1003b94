// src/model.rs
use serde::Serialize;

/// One row of a term's definition table: a property and the types its values
/// are expected to have, in source order. `expected_types` may be empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyEntry {
    pub name: String,
    pub expected_types: Vec<String>,
}

impl PropertyEntry {
    pub fn new(name: impl Into<String>, expected_types: Vec<String>) -> Self {
        Self { name: name.into(), expected_types }
    }

    pub fn first_type(&self) -> Option<&str> {
        self.expected_types.first().map(String::as_str)
    }
}

/// A term and its ordered properties, as read from one definition page.
/// Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TermRecord {
    term: String,
    properties: Vec<PropertyEntry>,
}

impl TermRecord {
    pub fn new(term: impl Into<String>, properties: Vec<PropertyEntry>) -> Self {
        Self { term: term.into(), properties }
    }

    pub fn empty(term: impl Into<String>) -> Self {
        Self::new(term, Vec::new())
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn properties(&self) -> &[PropertyEntry] {
        &self.properties
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

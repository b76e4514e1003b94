// src/normalize.rs
//! Identifier normalization: `additionalName` → `additional_name`.
//!
//! Applied in a fixed order:
//! 1. `::` → `/`
//! 2. acronym boundary, `([A-Z]+)([A-Z][a-z])` → `$1_$2` (`XMLHttp` → `XML_Http`)
//! 3. camelCase boundary, `([a-z0-9])([A-Z])` → `$1_$2`
//! 4. `-` → `_`
//! 5. lowercase
//!
//! The acronym rule is applied literally; it is a heuristic, not a word splitter.

use std::sync::LazyLock;

use regex::Regex;

static ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("static regex must compile"));
static CAMEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("static regex must compile"));

pub fn normalize(identifier: &str) -> String {
    let s = identifier.replace("::", "/");
    let s = ACRONYM.replace_all(&s, "${1}_${2}");
    let s = CAMEL.replace_all(&s, "${1}_${2}");
    s.replace('-', "_").to_lowercase()
}

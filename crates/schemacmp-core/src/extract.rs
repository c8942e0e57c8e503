//! Pattern-based extraction of schema element names.
//!
//! Each category has one case-insensitive pattern matching a single DDL
//! shape. Anything else (other quoting styles, other schemas, statements
//! split in unusual places) is skipped without error.

use crate::model::{Category, SchemaElementSet};
use crate::{log_op_end, log_op_start};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::time::Instant;

/// Pattern source per category. Capture group 1 is the element name.
pub const PATTERN_SOURCES: [(Category, &str); 6] = [
    (
        Category::Tables,
        r"(?i)CREATE TABLE (?:IF NOT EXISTS )?(?:public\.)?(\w+)",
    ),
    (
        Category::Functions,
        r"(?i)CREATE (?:OR REPLACE )?FUNCTION (?:public\.)?(\w+)\s*\(",
    ),
    (
        Category::Indexes,
        r"(?i)CREATE (?:UNIQUE )?INDEX (?:IF NOT EXISTS )?(\w+)",
    ),
    (Category::Policies, r#"(?i)CREATE POLICY "([^"]+)""#),
    (Category::Constraints, r"(?i)CONSTRAINT (\w+)"),
    (Category::Triggers, r"(?i)CREATE TRIGGER (\w+)"),
];

static PATTERNS: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    PATTERN_SOURCES
        .iter()
        .map(|(category, source)| {
            // Sources are literals covered by the tests below.
            let regex = Regex::new(source).expect("extraction pattern must compile");
            (*category, regex)
        })
        .collect()
});

fn pattern(category: Category) -> Option<&'static Regex> {
    PATTERNS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, regex)| regex)
}

/// Names captured by one category's pattern, left to right, non-overlapping.
pub fn extract_category(sql: &str, category: Category) -> BTreeSet<String> {
    let Some(regex) = pattern(category) else {
        return BTreeSet::new();
    };
    regex
        .captures_iter(sql)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Run all six extraction passes over one schema text.
pub fn extract_schema_elements(sql: &str) -> SchemaElementSet {
    let start = Instant::now();
    log_op_start!("extract_schema_elements", bytes = sql.len() as u64);

    let mut elements = SchemaElementSet::new();
    for category in Category::ALL {
        for name in extract_category(sql, category) {
            elements.insert(category, name);
        }
        tracing::debug!(
            op = "extract_schema_elements",
            category = category.name(),
            element_count = elements.len(category) as u64,
        );
    }

    log_op_end!(
        "extract_schema_elements",
        duration_ms = start.elapsed().as_millis() as u64,
        element_count = elements.total_len() as u64,
    );
    elements
}

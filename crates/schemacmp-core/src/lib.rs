//! schemacmp core - extract-then-diff kernel for SQL schema dumps
//!
//! This crate provides everything needed to compare a local schema dump
//! against a hand-authored setup script:
//! - Loading both dumps from disk with side-aware error reporting
//! - Pattern-based extraction of six schema element categories
//! - Per-category, per-side filter rules for known-acceptable discrepancies
//! - Set-based comparison and the human-readable report
//!
//! Extraction is a lenient heuristic: statements that do not match a
//! pattern contribute nothing rather than failing the run.

pub mod diff;
pub mod errors;
pub mod extract;
pub mod filter;
pub mod loader;
pub mod logging_facility;
pub mod model;

#[doc(hidden)]
pub mod __macro_support {
    pub use schemacmp_core_types::schema;
    pub use tracing;
}

// Re-export commonly used types
pub use diff::{compare_elements, compare_files, compare_texts, render_report, ComparisonReport};
pub use errors::{ExError, ExErrorKind, Result, SchemaCmpError};
pub use extract::extract_schema_elements;
pub use filter::{ElementFilter, FilterRule, FilterSet, NoFilter};
pub use loader::{DEFAULT_COMPLETE_SCHEMA, DEFAULT_LOCAL_SCHEMA};
pub use model::{Category, SchemaElementSet, Side};

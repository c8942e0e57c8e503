//! Schema comparison engine.
//!
//! Compares the element sets of a local schema dump and a reference setup
//! script category by category and produces a [`ComparisonReport`].
//!
//! ## Entry point
//!
//! ```no_run
//! use schemacmp_core::diff::{compare_files, render_report};
//! use schemacmp_core::filter::FilterSet;
//! use std::path::Path;
//!
//! let report = compare_files(
//!     Path::new("current-local-schema.sql"),
//!     Path::new("complete-database-setup.sql"),
//!     &FilterSet::default(),
//! )?;
//! print!("{}", render_report(&report));
//! # Ok::<(), schemacmp_core::ExError>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: categories are reported in a fixed order and every
//!   name list is sorted.
//! - **Symmetric extraction**: both inputs go through the same extractor;
//!   only the configured filters may treat the sides differently.
//! - **Pure filtering**: filters produce new sets and never mutate the
//!   extracted elements.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compare_category, compare_elements, compare_files, compare_texts};
pub use human_summary::{render_banner, render_error, render_report};
pub use model::{CategoryComparison, ComparisonReport, Verdict};

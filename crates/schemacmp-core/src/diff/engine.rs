//! Schema comparison computation engine.
//!
//! The core entry point is [`compare_elements`], which accepts the extracted
//! element sets for both sides and produces a [`ComparisonReport`].
//! [`compare_files`] chains loading and extraction in front of it.

use crate::diff::model::{CategoryComparison, ComparisonReport};
use crate::errors::Result;
use crate::extract::extract_schema_elements;
use crate::filter::ElementFilter;
use crate::loader::load_pair;
use crate::model::{Category, SchemaElementSet, Side};
use crate::{log_op_end, log_op_error, log_op_start};
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

/// Set algebra for one category on already-filtered sets.
pub fn compare_category(
    category: Category,
    local: &BTreeSet<String>,
    complete: &BTreeSet<String>,
) -> CategoryComparison {
    CategoryComparison {
        category,
        only_in_local: local.difference(complete).cloned().collect(),
        only_in_complete: complete.difference(local).cloned().collect(),
        common: local.intersection(complete).cloned().collect(),
    }
}

/// Filter both sides and compare every category, in processing order.
pub fn compare_elements(
    local: &SchemaElementSet,
    complete: &SchemaElementSet,
    filter: &dyn ElementFilter,
) -> ComparisonReport {
    let start = Instant::now();
    log_op_start!("compare_elements");

    let categories: Vec<CategoryComparison> = Category::ALL
        .iter()
        .map(|&category| {
            let local_kept = filter.filter_set(category, Side::Local, local.get(category));
            let complete_kept =
                filter.filter_set(category, Side::Complete, complete.get(category));
            let comparison = compare_category(category, &local_kept, &complete_kept);
            tracing::debug!(
                op = "compare_elements",
                category = category.name(),
                common_len = comparison.common.len() as u64,
                only_local_len = comparison.only_in_local.len() as u64,
                only_complete_len = comparison.only_in_complete.len() as u64,
            );
            comparison
        })
        .collect();

    let report = ComparisonReport::new(categories);
    log_op_end!(
        "compare_elements",
        duration_ms = start.elapsed().as_millis() as u64,
        differences_found = report.differences_found,
    );
    report
}

/// Extract both texts with the same extractor, then compare.
pub fn compare_texts(
    local_sql: &str,
    complete_sql: &str,
    filter: &dyn ElementFilter,
) -> ComparisonReport {
    let local = extract_schema_elements(local_sql);
    let complete = extract_schema_elements(complete_sql);
    compare_elements(&local, &complete, filter)
}

/// Load both schema files, extract, and compare.
///
/// Nothing is extracted or compared unless both files load.
///
/// # Errors
///
/// - `MissingFile` — either path does not exist; the error names the side
/// - `Io` — either file exists but cannot be read as UTF-8
pub fn compare_files(
    local_path: &Path,
    complete_path: &Path,
    filter: &dyn ElementFilter,
) -> Result<ComparisonReport> {
    let start = Instant::now();
    log_op_start!(
        "compare_files",
        local = %local_path.display(),
        complete = %complete_path.display(),
    );

    let (local_sql, complete_sql) = match load_pair(local_path, complete_path) {
        Ok(pair) => pair,
        Err(e) => {
            log_op_error!(
                "compare_files",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
            );
            return Err(e);
        }
    };

    let report = compare_texts(&local_sql, &complete_sql, filter);
    log_op_end!(
        "compare_files",
        duration_ms = start.elapsed().as_millis() as u64,
        differences_found = report.differences_found,
    );
    Ok(report)
}

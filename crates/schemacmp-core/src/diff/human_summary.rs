//! Human-readable report renderer for schema comparisons.

use crate::diff::model::{CategoryComparison, ComparisonReport};
use crate::errors::{ExError, ExErrorKind};
use crate::loader::DEFAULT_COMPLETE_SCHEMA;
use std::collections::BTreeSet;
use std::path::Path;

const RULE: &str = "==================================================";

/// Render the run header naming both input paths.
pub fn render_banner(local: &Path, complete: &Path) -> String {
    let mut out = String::new();
    out.push_str("🔄 Comparing Local Docker Supabase Schema with Complete Setup\n");
    out.push_str(&format!("Local schema: {}\n", local.display()));
    out.push_str(&format!("Complete setup: {}\n", complete.display()));
    out.push('\n');
    out
}

/// Render the per-category results and the summary block.
pub fn render_report(report: &ComparisonReport) -> String {
    let mut out = String::new();

    out.push_str("🔍 SCHEMA COMPARISON RESULTS\n");
    out.push_str(RULE);
    out.push('\n');

    for comparison in &report.categories {
        render_category(&mut out, comparison);
    }

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');

    if report.differences_found {
        out.push_str("❌ SCHEMAS ARE DIFFERENT\n");
        out.push_str("\nRecommendations:\n");
        out.push_str("1. Check if missing elements in local are intentional\n");
        out.push_str(&format!(
            "2. Consider updating {} if local has newer changes\n",
            DEFAULT_COMPLETE_SCHEMA
        ));
        out.push_str("3. Run migrations to sync schemas if needed\n");
    } else {
        out.push_str("✅ SCHEMAS ARE IDENTICAL\n");
        out.push_str(&format!(
            "Local schema matches {} perfectly!\n",
            DEFAULT_COMPLETE_SCHEMA
        ));
    }

    out
}

/// Render the line shown when a comparison aborts before producing a report.
pub fn render_error(err: &ExError) -> String {
    let path = err
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    match err.kind() {
        ExErrorKind::MissingFile => format!("❌ Error: {} not found\n", path),
        ExErrorKind::Io => format!("❌ Error: {} could not be read: {}\n", path, err.message()),
        ExErrorKind::InvalidConfig => format!("❌ Error: {}\n", err.message()),
    }
}

fn render_category(out: &mut String, comparison: &CategoryComparison) {
    out.push_str(&format!("\n📊 {}:\n", comparison.category.label()));
    out.push_str(&format!("   Common: {} items\n", comparison.common.len()));

    if !comparison.only_in_local.is_empty() {
        out.push_str(&format!(
            "   ⚠️  Only in LOCAL: {}\n",
            name_list(&comparison.only_in_local)
        ));
    }
    if !comparison.only_in_complete.is_empty() {
        out.push_str(&format!(
            "   ⚠️  Only in COMPLETE: {}\n",
            name_list(&comparison.only_in_complete)
        ));
    }
    if comparison.is_perfect_match() {
        out.push_str("   ✅ Perfect match!\n");
    }
}

/// `['a', 'b']`, sorted.
fn name_list(names: &BTreeSet<String>) -> String {
    let quoted: Vec<String> = names.iter().map(|n| quote_name(n)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Quote a name the way a Python list repr does: single quotes unless the
/// name holds a `'` and no `"`, with control characters escaped.
fn quote_name(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

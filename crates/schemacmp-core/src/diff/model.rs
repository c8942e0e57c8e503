//! Comparison output types.
//!
//! Name collections are `BTreeSet`s so every list renders sorted.

use crate::model::Category;
use std::collections::BTreeSet;

/// Outcome of a completed comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No category shows a difference after filtering
    Identical,
    /// At least one category has names on one side only
    Different,
}

/// Set algebra for one category, computed after filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryComparison {
    pub category: Category,
    /// Names in local but not in complete
    pub only_in_local: BTreeSet<String>,
    /// Names in complete but not in local
    pub only_in_complete: BTreeSet<String>,
    /// Names on both sides
    pub common: BTreeSet<String>,
}

impl CategoryComparison {
    pub fn has_differences(&self) -> bool {
        !self.only_in_local.is_empty() || !self.only_in_complete.is_empty()
    }

    pub fn is_perfect_match(&self) -> bool {
        !self.has_differences()
    }
}

/// The result of comparing two schemas across all categories.
///
/// `categories` is always in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub categories: Vec<CategoryComparison>,
    pub differences_found: bool,
}

impl ComparisonReport {
    /// Build a report, accumulating the differences flag over `categories`.
    pub fn new(categories: Vec<CategoryComparison>) -> Self {
        let differences_found = categories
            .iter()
            .fold(false, |found, c| found || c.has_differences());
        Self {
            categories,
            differences_found,
        }
    }

    pub fn verdict(&self) -> Verdict {
        if self.differences_found {
            Verdict::Different
        } else {
            Verdict::Identical
        }
    }

    pub fn is_identical(&self) -> bool {
        self.verdict() == Verdict::Identical
    }

    pub fn category(&self, category: Category) -> Option<&CategoryComparison> {
        self.categories.iter().find(|c| c.category == category)
    }
}

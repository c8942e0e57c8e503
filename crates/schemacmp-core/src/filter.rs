//! Per-category, per-side filter rules.
//!
//! Some objects are expected on one side only: tables provisioned by the
//! local platform, system-provided functions, and indexes that do not follow
//! the `idx_` naming convention. A [`FilterSet`] lists those exceptions
//! explicitly so they can be inspected, tested and overridden.
//!
//! The local-only table and function exclusions are never applied to the
//! complete side.
//!
//! ## Overriding from TOML
//!
//! ```toml
//! [tables.local]
//! exclude_prefixes = ["_"]
//! exclude_names = ["extensions", "tenants", "schema_migrations", "audit_log"]
//!
//! [indexes.complete]
//! require_prefix = "idx_"
//! ```
//!
//! A side given in the file replaces that side's default rule; anything not
//! mentioned keeps its default.

use crate::errors::{Result, SchemaCmpError};
use crate::model::{Category, Side};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Tables provisioned by the local platform that the setup script never declares.
pub const LOCAL_ONLY_TABLES: [&str; 3] = ["extensions", "tenants", "schema_migrations"];

/// Functions provided by the local platform that the setup script never declares.
pub const LOCAL_ONLY_FUNCTIONS: [&str; 1] = ["get_auth"];

/// Prefix marking internal tables on both sides.
pub const INTERNAL_TABLE_PREFIX: &str = "_";

/// Naming convention for indexes that are compared.
pub const COMPARED_INDEX_PREFIX: &str = "idx_";

/// Decides whether a name takes part in the comparison.
pub trait ElementFilter {
    /// `true` if `name`, found on `side` under `category`, should be compared.
    fn keeps(&self, category: Category, side: Side, name: &str) -> bool;

    /// A new set holding only the names this filter keeps.
    fn filter_set(
        &self,
        category: Category,
        side: Side,
        names: &BTreeSet<String>,
    ) -> BTreeSet<String> {
        names
            .iter()
            .filter(|name| self.keeps(category, side, name))
            .cloned()
            .collect()
    }
}

/// Filter that keeps every name (literal comparison).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl ElementFilter for NoFilter {
    fn keeps(&self, _category: Category, _side: Side, _name: &str) -> bool {
        true
    }
}

/// Predicate over element names for one category and side.
///
/// A name is kept when it starts with `require_prefix` (if set), starts
/// with none of `exclude_prefixes`, and is not listed in `exclude_names`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterRule {
    pub exclude_prefixes: Vec<String>,
    pub require_prefix: Option<String>,
    pub exclude_names: Vec<String>,
}

impl FilterRule {
    /// A rule that keeps every name.
    pub fn keep_all() -> Self {
        Self::default()
    }

    pub fn excluding_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.exclude_prefixes.push(prefix.into());
        self
    }

    pub fn requiring_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.require_prefix = Some(prefix.into());
        self
    }

    pub fn excluding_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_keep_all(&self) -> bool {
        self.exclude_prefixes.is_empty()
            && self.require_prefix.is_none()
            && self.exclude_names.is_empty()
    }

    pub fn keeps(&self, name: &str) -> bool {
        if let Some(required) = &self.require_prefix {
            if !name.starts_with(required.as_str()) {
                return false;
            }
        }
        if self
            .exclude_prefixes
            .iter()
            .any(|p| name.starts_with(p.as_str()))
        {
            return false;
        }
        !self.exclude_names.iter().any(|n| n == name)
    }

    /// A new set holding only the names this rule keeps.
    pub fn apply(&self, names: &BTreeSet<String>) -> BTreeSet<String> {
        names.iter().filter(|n| self.keeps(n)).cloned().collect()
    }
}

/// Local and complete rules for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    pub local: FilterRule,
    pub complete: FilterRule,
}

impl CategoryFilter {
    /// Same rule on both sides.
    pub fn symmetric(rule: FilterRule) -> Self {
        Self {
            local: rule.clone(),
            complete: rule,
        }
    }

    pub fn rule(&self, side: Side) -> &FilterRule {
        match side {
            Side::Local => &self.local,
            Side::Complete => &self.complete,
        }
    }
}

/// The full filter configuration: one [`CategoryFilter`] per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    rules: BTreeMap<Category, CategoryFilter>,
}

impl FilterSet {
    /// Every category keeps every name on both sides.
    pub fn unfiltered() -> Self {
        Self {
            rules: Category::ALL
                .iter()
                .map(|c| (*c, CategoryFilter::default()))
                .collect(),
        }
    }

    /// The known-acceptable discrepancies of the local deployment.
    pub fn deployment_defaults() -> Self {
        let mut set = Self::unfiltered();
        set.set_category(
            Category::Tables,
            CategoryFilter {
                local: FilterRule::keep_all()
                    .excluding_prefix(INTERNAL_TABLE_PREFIX)
                    .excluding_names(LOCAL_ONLY_TABLES),
                complete: FilterRule::keep_all().excluding_prefix(INTERNAL_TABLE_PREFIX),
            },
        );
        set.set_category(
            Category::Indexes,
            CategoryFilter::symmetric(FilterRule::keep_all().requiring_prefix(COMPARED_INDEX_PREFIX)),
        );
        set.set_category(
            Category::Functions,
            CategoryFilter {
                local: FilterRule::keep_all().excluding_names(LOCAL_ONLY_FUNCTIONS),
                complete: FilterRule::keep_all(),
            },
        );
        set
    }

    pub fn category(&self, category: Category) -> Option<&CategoryFilter> {
        self.rules.get(&category)
    }

    pub fn set_category(&mut self, category: Category, filter: CategoryFilter) {
        self.rules.insert(category, filter);
    }

    /// The rule applied to `category` on `side`.
    pub fn rule(&self, category: Category, side: Side) -> Option<&FilterRule> {
        self.category(category).map(|f| f.rule(side))
    }

    /// Deployment defaults with the overrides from a TOML document applied.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` — the document is not valid TOML, names an unknown
    ///   category, or uses an unknown rule field
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let overrides: FilterOverrides = toml::from_str(content).map_err(|e| {
            SchemaCmpError::InvalidFilterConfig {
                path: None,
                reason: e.to_string(),
            }
        })?;
        let mut set = Self::deployment_defaults();
        overrides.apply_to(&mut set);
        Ok(set)
    }

    /// Like [`FilterSet::from_toml_str`], reading the document from a file.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` — the file cannot be read or its content is rejected
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| SchemaCmpError::InvalidFilterConfig {
                path: Some(path.to_path_buf()),
                reason: format!("failed to read filter file: {}", e),
            })?;
        Self::from_toml_str(&content).map_err(|e| e.with_path(path))
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::deployment_defaults()
    }
}

impl ElementFilter for FilterSet {
    fn keeps(&self, category: Category, side: Side, name: &str) -> bool {
        self.rule(category, side).map_or(true, |r| r.keeps(name))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SideOverrides {
    local: Option<FilterRule>,
    complete: Option<FilterRule>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FilterOverrides {
    tables: Option<SideOverrides>,
    functions: Option<SideOverrides>,
    indexes: Option<SideOverrides>,
    policies: Option<SideOverrides>,
    constraints: Option<SideOverrides>,
    triggers: Option<SideOverrides>,
}

impl FilterOverrides {
    fn apply_to(self, set: &mut FilterSet) {
        let entries = [
            (Category::Tables, self.tables),
            (Category::Functions, self.functions),
            (Category::Indexes, self.indexes),
            (Category::Policies, self.policies),
            (Category::Constraints, self.constraints),
            (Category::Triggers, self.triggers),
        ];
        for (category, overrides) in entries {
            let Some(overrides) = overrides else {
                continue;
            };
            let mut filter = set.category(category).cloned().unwrap_or_default();
            if let Some(local) = overrides.local {
                filter.local = local;
            }
            if let Some(complete) = overrides.complete {
                filter.complete = complete;
            }
            set.set_category(category, filter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_tables_local_drops_infrastructure() {
        let filters = FilterSet::default();
        for name in ["extensions", "tenants", "schema_migrations", "_internal"] {
            assert!(!filters.keeps(Category::Tables, Side::Local, name), "{name}");
        }
        assert!(filters.keeps(Category::Tables, Side::Local, "users"));
    }

    #[test]
    fn test_default_tables_complete_only_drops_underscore() {
        let filters = FilterSet::default();
        assert!(!filters.keeps(Category::Tables, Side::Complete, "_internal"));
        for name in LOCAL_ONLY_TABLES {
            assert!(filters.keeps(Category::Tables, Side::Complete, name), "{name}");
        }
    }

    #[test]
    fn test_default_indexes_require_prefix_on_both_sides() {
        let filters = FilterSet::default();
        for side in [Side::Local, Side::Complete] {
            assert!(filters.keeps(Category::Indexes, side, "idx_users_email"));
            assert!(!filters.keeps(Category::Indexes, side, "users_email_key"));
        }
    }

    #[test]
    fn test_default_functions_drop_get_auth_locally_only() {
        let filters = FilterSet::default();
        assert!(!filters.keeps(Category::Functions, Side::Local, "get_auth"));
        assert!(filters.keeps(Category::Functions, Side::Complete, "get_auth"));
    }

    #[test]
    fn test_unfiltered_categories_keep_everything() {
        let filters = FilterSet::default();
        for category in [Category::Policies, Category::Constraints, Category::Triggers] {
            let filter = filters.category(category).unwrap();
            assert!(filter.local.is_keep_all());
            assert!(filter.complete.is_keep_all());
        }
    }

    #[test]
    fn test_rule_apply_returns_new_set() {
        let rule = FilterRule::keep_all().requiring_prefix("idx_");
        let input = names(&["idx_a", "b"]);
        let output = rule.apply(&input);
        assert_eq!(output, names(&["idx_a"]));
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn test_toml_override_replaces_one_side() {
        let toml = r#"
            [tables.local]
            exclude_names = ["audit_log"]
        "#;
        let filters = FilterSet::from_toml_str(toml).unwrap();
        assert!(!filters.keeps(Category::Tables, Side::Local, "audit_log"));
        assert!(filters.keeps(Category::Tables, Side::Local, "tenants"));
        // complete side untouched
        assert!(!filters.keeps(Category::Tables, Side::Complete, "_internal"));
        // other categories untouched
        assert!(!filters.keeps(Category::Functions, Side::Local, "get_auth"));
    }

    #[test]
    fn test_toml_unknown_category_rejected() {
        let err = FilterSet::from_toml_str("[views.local]\nexclude_names = []\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    }

    #[test]
    fn test_toml_unknown_rule_field_rejected() {
        let err = FilterSet::from_toml_str("[tables.local]\nexclude = [\"x\"]\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    }

    #[test]
    fn test_empty_toml_is_defaults() {
        assert_eq!(FilterSet::from_toml_str("").unwrap(), FilterSet::default());
    }
}

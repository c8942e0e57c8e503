//! Schema element model.
//!
//! A [`SchemaElementSet`] holds, for each [`Category`], the set of object
//! names found in one schema dump. Sets are `BTreeSet`s so iteration and
//! rendering are deterministic; the ordering itself carries no meaning.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The kind of named schema object being compared.
///
/// Variant order is the processing and reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Tables,
    Functions,
    Indexes,
    Policies,
    Constraints,
    Triggers,
}

impl Category {
    /// All categories, in processing order.
    pub const ALL: [Category; 6] = [
        Category::Tables,
        Category::Functions,
        Category::Indexes,
        Category::Policies,
        Category::Constraints,
        Category::Triggers,
    ];

    /// Lowercase name, as used in filter configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Tables => "tables",
            Category::Functions => "functions",
            Category::Indexes => "indexes",
            Category::Policies => "policies",
            Category::Constraints => "constraints",
            Category::Triggers => "triggers",
        }
    }

    /// Uppercase label used as the report section heading.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Tables => "TABLES",
            Category::Functions => "FUNCTIONS",
            Category::Indexes => "INDEXES",
            Category::Policies => "POLICIES",
            Category::Constraints => "CONSTRAINTS",
            Category::Triggers => "TRIGGERS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which of the two compared inputs a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// The dump of the current working database
    Local,
    /// The reference setup script
    Complete,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Local => "local",
            Side::Complete => "complete",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static EMPTY: BTreeSet<String> = BTreeSet::new();

/// Named schema objects extracted from one dump, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaElementSet {
    elements: BTreeMap<Category, BTreeSet<String>>,
}

impl SchemaElementSet {
    /// Create a set with every category present and empty.
    pub fn new() -> Self {
        Self {
            elements: Category::ALL
                .iter()
                .map(|c| (*c, BTreeSet::new()))
                .collect(),
        }
    }

    /// Record a name under a category. Duplicates collapse.
    ///
    /// Returns `true` if the name was not already present.
    pub fn insert(&mut self, category: Category, name: impl Into<String>) -> bool {
        self.elements
            .entry(category)
            .or_default()
            .insert(name.into())
    }

    /// Names recorded under a category.
    pub fn get(&self, category: Category) -> &BTreeSet<String> {
        self.elements.get(&category).unwrap_or(&EMPTY)
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.get(category).contains(name)
    }

    /// Number of names recorded under a category.
    pub fn len(&self, category: Category) -> usize {
        self.get(category).len()
    }

    /// Number of names across all categories.
    pub fn total_len(&self) -> usize {
        self.elements.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Iterate categories in processing order with their names.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &BTreeSet<String>)> {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}

impl Default for SchemaElementSet {
    fn default() -> Self {
        Self::new()
    }
}

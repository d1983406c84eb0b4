//! Package categories.
//!
//! Categories are a fixed lookup table attached to the package definitions.
//! They are never inferred from provides/requires.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::PackageDefinition;

/// A human-meaningful package group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    System,
    Development,
    Network,
    Media,
    Utilities,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::System,
        Category::Development,
        Category::Network,
        Category::Media,
        Category::Utilities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::System => "system",
            Category::Development => "development",
            Category::Network => "network",
            Category::Media => "media",
            Category::Utilities => "utilities",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a category string that names no category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Static classification of packages into categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    /// Members of each category, in definition order
    members: BTreeMap<Category, Vec<String>>,
}

impl CategoryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        CategoryIndex {
            members: BTreeMap::new(),
        }
    }

    /// The category table of the builtin package universe.
    pub fn builtin() -> Self {
        CategoryIndex::from_definitions(&crate::core::builtin::definitions())
    }

    /// Build the index from package definitions.
    pub fn from_definitions(definitions: &[PackageDefinition]) -> Self {
        let mut index = CategoryIndex::new();
        for def in definitions {
            for &category in &def.categories {
                index.insert(category, &def.name);
            }
        }
        index
    }

    /// Add a package to a category. Repeated inserts are ignored.
    pub fn insert(&mut self, category: Category, name: &str) {
        let names = self.members.entry(category).or_default();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    /// Categories a package belongs to. Empty for unknown packages.
    pub fn category_for(&self, name: &str) -> BTreeSet<Category> {
        self.members
            .iter()
            .filter(|(_, names)| names.iter().any(|n| n == name))
            .map(|(category, _)| *category)
            .collect()
    }

    /// Members of a category, in definition order.
    pub fn names_in(&self, category: Category) -> &[String] {
        self.members
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over non-empty categories.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.members
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(category, names)| (*category, names.as_slice()))
    }
}

//! PackageCatalog - every package of one architecture.
//!
//! A catalog is built once from definitions and never mutated afterwards.
//! Lookups of unknown names or categories return empty results; only
//! construction can fail.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::core::builtin::{self, DEFAULT_VERSION, KNOWN_ARCHITECTURES};
use crate::core::errors::CatalogError;
use crate::core::{Category, CategoryIndex, PackageDefinition, PackageDescriptor, PackageSet};
use crate::util::hash::Fingerprint;

static PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.+]*$").expect("package name pattern is valid")
});

static ARCHITECTURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("architecture pattern is valid"));

/// All package descriptors of one architecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCatalog {
    architecture: String,
    packages: BTreeMap<String, PackageDescriptor>,
    core: BTreeSet<String>,
    categories: CategoryIndex,
}

impl PackageCatalog {
    /// Build the builtin catalog for an architecture.
    pub fn for_architecture(architecture: &str) -> Result<Self, CatalogError> {
        CatalogBuilder::new(architecture)
            .definitions(builtin::definitions())
            .build()
    }

    /// The architecture all descriptors belong to.
    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    /// All descriptors, keyed and ordered by name.
    pub fn all_packages(&self) -> &BTreeMap<String, PackageDescriptor> {
        &self.packages
    }

    /// Look up a descriptor. Unknown names are absent, not an error.
    pub fn get(&self, name: &str) -> Option<&PackageDescriptor> {
        self.packages.get(name)
    }

    /// Whether a package with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Iterate over package names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Packages mandatory for a minimal system image.
    pub fn core_names(&self) -> BTreeSet<String> {
        self.core.clone()
    }

    /// All packages that are not core.
    pub fn optional_names(&self) -> BTreeSet<String> {
        self.packages
            .keys()
            .filter(|name| !self.core.contains(*name))
            .cloned()
            .collect()
    }

    /// Packages in a category given by name.
    ///
    /// Unknown categories yield an empty sequence.
    pub fn names_in_category(&self, category: &str) -> Vec<String> {
        match category.parse::<Category>() {
            Ok(category) => self.names_in(category),
            Err(_) => Vec::new(),
        }
    }

    /// Packages in a category, in definition order.
    pub fn names_in(&self, category: Category) -> Vec<String> {
        self.categories
            .names_in(category)
            .iter()
            .filter(|name| self.contains(name))
            .cloned()
            .collect()
    }

    /// The category table of this catalog.
    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    /// A SHA-256 fingerprint of the full catalog content.
    ///
    /// Equal catalogs have equal fingerprints.
    pub fn fingerprint(&self) -> String {
        let mut fp = Fingerprint::new();
        fp.update_str(&self.architecture);

        for desc in self.packages.values() {
            fp.update_str(desc.name())
                .update_str(desc.version())
                .update_bool(self.core.contains(desc.name()));
            fp.update_strs(desc.provides().iter().map(|c| c.to_string()));
            fp.update_str("requires");
            fp.update_strs(desc.requires().iter().map(|c| c.to_string()));

            let meta = desc.metadata();
            fp.update_opt(meta.summary.as_deref())
                .update_opt(meta.description.as_deref())
                .update_opt(meta.vendor.as_deref())
                .update_opt(meta.packager.as_deref());
            fp.update_strs(meta.copyrights.iter().cloned());
            fp.update_strs(meta.licenses.iter().cloned());
        }

        for (category, names) in self.categories.iter() {
            fp.update_str(category.as_str());
            fp.update_strs(names.iter().cloned());
        }

        fp.finish()
    }
}

/// Builds a [`PackageCatalog`] from definitions.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    architecture: String,
    version: String,
    definitions: Vec<PackageDefinition>,
    package_set: Option<(String, PackageSet)>,
}

impl CatalogBuilder {
    /// Create a builder with no definitions.
    pub fn new(architecture: impl Into<String>) -> Self {
        CatalogBuilder {
            architecture: architecture.into(),
            version: DEFAULT_VERSION.to_string(),
            definitions: Vec::new(),
            package_set: None,
        }
    }

    /// Version for definitions that do not carry their own.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Base definitions.
    pub fn definitions(mut self, definitions: Vec<PackageDefinition>) -> Self {
        self.definitions = definitions;
        self
    }

    /// A package set to merge into or replace the base definitions.
    pub fn package_set(mut self, source_name: impl Into<String>, set: PackageSet) -> Self {
        self.package_set = Some((source_name.into(), set));
        self
    }

    /// Validate the definitions and build the catalog.
    pub fn build(self) -> Result<PackageCatalog, CatalogError> {
        let architecture = self.architecture;

        if !ARCHITECTURE.is_match(&architecture) {
            return Err(CatalogError::InvalidArchitecture { architecture });
        }
        if !KNOWN_ARCHITECTURES.contains(&architecture.as_str()) {
            tracing::warn!("building catalog for unknown architecture `{}`", architecture);
        }

        check_unique(&self.definitions, &architecture)?;

        let definitions = match &self.package_set {
            Some((source_name, set)) => {
                check_unique(&set.packages, &architecture)?;
                tracing::debug!(
                    "applying package set {} ({:?}, {} packages)",
                    source_name,
                    set.mode,
                    set.packages.len()
                );
                set.apply(self.definitions)
            }
            None => self.definitions,
        };

        let mut packages = BTreeMap::new();
        let mut core = BTreeSet::new();

        for def in &definitions {
            if !PACKAGE_NAME.is_match(&def.name) {
                return Err(CatalogError::InvalidPackageName {
                    name: def.name.clone(),
                });
            }

            if def.core {
                core.insert(def.name.clone());
            }
            packages.insert(def.name.clone(), def.instantiate(&architecture, &self.version));
        }

        tracing::debug!(
            "built catalog for {}: {} packages, {} core",
            architecture,
            packages.len(),
            core.len()
        );

        Ok(PackageCatalog {
            architecture,
            packages,
            core,
            categories: CategoryIndex::from_definitions(&definitions),
        })
    }
}

fn check_unique(definitions: &[PackageDefinition], architecture: &str) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for def in definitions {
        if !seen.insert(def.name.as_str()) {
            return Err(CatalogError::DuplicatePackage {
                name: def.name.clone(),
                architecture: architecture.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OverrideMode;

    #[test]
    fn test_all_packages_idempotent() {
        let a = PackageCatalog::for_architecture("x86_64").unwrap();
        let b = PackageCatalog::for_architecture("x86_64").unwrap();

        assert_eq!(a.all_packages(), b.all_packages());
        assert_eq!(a, b);
    }

    #[test]
    fn test_get_unknown_is_absent() {
        let catalog = PackageCatalog::for_architecture("x86_64").unwrap();

        assert!(catalog.get("unknown_pkg").is_none());
        assert!(!catalog.contains("unknown_pkg"));
        assert!(catalog.get("haiku").is_some());
    }

    #[test]
    fn test_descriptors_scoped_to_architecture() {
        let catalog = PackageCatalog::for_architecture("riscv64").unwrap();

        for desc in catalog.all_packages().values() {
            assert_eq!(desc.architecture(), "riscv64");
        }
        let devel = catalog.get("haiku_devel").unwrap();
        assert_eq!(devel.requires()[0].to_string(), "haiku=riscv64");
    }

    #[test]
    fn test_partition_complete_for_every_architecture() {
        for arch in KNOWN_ARCHITECTURES {
            let catalog = PackageCatalog::for_architecture(arch).unwrap();
            let core = catalog.core_names();
            let optional = catalog.optional_names();

            assert!(core.is_disjoint(&optional), "{arch}: overlap");

            let union: BTreeSet<_> = core.union(&optional).cloned().collect();
            let all: BTreeSet<_> = catalog.all_packages().keys().cloned().collect();
            assert_eq!(union, all, "{arch}: partition incomplete");
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = PackageCatalog::for_architecture("x86_64").unwrap();

        assert!(catalog.names_in_category("nonexistent").is_empty());
        assert_eq!(
            catalog.names_in_category("development"),
            vec!["haiku_devel", "haiku_source", "makefile_engine"]
        );
    }

    #[test]
    fn test_duplicate_names_fail() {
        let result = CatalogBuilder::new("x86_64")
            .definitions(vec![
                PackageDefinition::new("haiku"),
                PackageDefinition::new("haiku"),
            ])
            .build();

        assert!(matches!(
            result,
            Err(CatalogError::DuplicatePackage { ref name, .. }) if name == "haiku"
        ));
    }

    #[test]
    fn test_duplicates_inside_package_set_fail() {
        let set = PackageSet {
            mode: OverrideMode::Merge,
            packages: vec![
                PackageDefinition::new("netfs"),
                PackageDefinition::new("netfs"),
            ],
        };

        let result = CatalogBuilder::new("x86_64")
            .definitions(builtin::definitions())
            .package_set("test.toml", set)
            .build();

        assert!(matches!(result, Err(CatalogError::DuplicatePackage { .. })));
    }

    #[test]
    fn test_invalid_names_fail() {
        let result = CatalogBuilder::new("x86_64")
            .definitions(vec![PackageDefinition::new("bad name")])
            .build();
        assert!(matches!(result, Err(CatalogError::InvalidPackageName { .. })));

        let result = PackageCatalog::for_architecture("");
        assert!(matches!(result, Err(CatalogError::InvalidArchitecture { .. })));

        let result = PackageCatalog::for_architecture("x86-64");
        assert!(matches!(result, Err(CatalogError::InvalidArchitecture { .. })));
    }

    #[test]
    fn test_merge_override() {
        let set = PackageSet {
            mode: OverrideMode::Merge,
            packages: vec![
                PackageDefinition::new("netfs").version("2.0"),
                PackageDefinition::new("haiku_webkit")
                    .requires(["haiku=${arch}"])
                    .categories(&[Category::Network]),
            ],
        };

        let catalog = CatalogBuilder::new("x86_64")
            .definitions(builtin::definitions())
            .package_set("profile.toml", set)
            .build()
            .unwrap();

        assert_eq!(catalog.get("netfs").unwrap().version(), "2.0");
        assert!(catalog.get("netfs").unwrap().requires().is_empty());
        assert!(catalog.contains("haiku_webkit"));
        assert!(catalog.contains("haiku"));
        assert!(catalog
            .names_in(Category::Network)
            .contains(&"haiku_webkit".to_string()));
        // netfs lost its builtin categories along with its builtin definition
        assert!(!catalog.names_in(Category::Network).contains(&"netfs".to_string()));
    }

    #[test]
    fn test_replace_override() {
        let set = PackageSet {
            mode: OverrideMode::Replace,
            packages: vec![PackageDefinition::new("haiku").core(true)],
        };

        let catalog = CatalogBuilder::new("arm")
            .definitions(builtin::definitions())
            .package_set("minimal.toml", set)
            .build()
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.core_names().len(), 1);
        assert!(catalog.optional_names().is_empty());
    }

    #[test]
    fn test_fingerprint() {
        let a = PackageCatalog::for_architecture("x86_64").unwrap();
        let b = PackageCatalog::for_architecture("x86_64").unwrap();
        let c = PackageCatalog::for_architecture("arm64").unwrap();

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }

    #[test]
    fn test_profile_version() {
        let catalog = CatalogBuilder::new("x86_64")
            .version("r1~beta6")
            .definitions(builtin::definitions())
            .build()
            .unwrap();

        assert_eq!(catalog.get("haiku").unwrap().version(), "r1~beta6");
    }
}

//! Dependency resolution.
//!
//! The resolver computes direct and transitive dependency references over a
//! borrowed catalog. It is pure and deterministic: no I/O, no caching, and
//! unknown packages resolve to empty results.

pub mod graph;

pub use graph::DependencyGraph;

use std::collections::BTreeSet;

use crate::core::{CapabilityRef, PackageCatalog};

/// Computes dependency closures over a catalog's `requires` relation.
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver<'a> {
    catalog: &'a PackageCatalog,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(catalog: &'a PackageCatalog) -> Self {
        DependencyResolver { catalog }
    }

    pub fn catalog(&self) -> &'a PackageCatalog {
        self.catalog
    }

    /// The package's `requires` list, verbatim. Empty if the package is absent.
    pub fn direct_dependencies(&self, name: &str) -> Vec<CapabilityRef> {
        self.requires(name).to_vec()
    }

    /// The package's `provides` list, verbatim. Empty if the package is absent.
    pub fn provided_capabilities(&self, name: &str) -> Vec<CapabilityRef> {
        self.catalog
            .get(name)
            .map(|desc| desc.provides().to_vec())
            .unwrap_or_default()
    }

    /// All references reachable from the package's `requires`.
    ///
    /// Every direct reference is in the result. Each reference is expanded
    /// through its stripped package name at most once, so cycles terminate.
    /// References naming unknown packages stay in the result as leaves.
    pub fn transitive_dependencies(&self, name: &str) -> BTreeSet<CapabilityRef> {
        let mut result = BTreeSet::new();
        let mut worklist = Vec::new();

        for dep in self.requires(name) {
            if result.insert(dep.clone()) {
                worklist.push(dep);
            }
        }

        while let Some(current) = worklist.pop() {
            for dep in self.requires(current.package_name()) {
                if result.insert(dep.clone()) {
                    worklist.push(dep);
                }
            }
        }

        result
    }

    /// Package names needed to install `roots`.
    ///
    /// Includes the roots themselves and every transitively referenced
    /// package present in the catalog. Unknown roots are skipped.
    pub fn closure_of<I, S>(&self, roots: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = BTreeSet::new();

        for root in roots {
            let root = root.as_ref();
            if !self.catalog.contains(root) {
                tracing::debug!("skipping unknown root package `{}`", root);
                continue;
            }
            names.insert(root.to_string());

            for dep in self.transitive_dependencies(root) {
                if self.catalog.contains(dep.package_name()) {
                    names.insert(dep.package_name().to_string());
                }
            }
        }

        names
    }

    /// Transitive references that name no package in the catalog.
    pub fn unresolved_references(&self, name: &str) -> Vec<CapabilityRef> {
        self.transitive_dependencies(name)
            .into_iter()
            .filter(|dep| !self.catalog.contains(dep.package_name()))
            .collect()
    }

    fn requires(&self, name: &str) -> &'a [CapabilityRef] {
        self.catalog
            .get(name)
            .map(|desc| desc.requires())
            .unwrap_or(&[])
    }
}

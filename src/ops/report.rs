//! Dependency closure report for a whole catalog.

use rayon::prelude::*;
use serde::Serialize;

use crate::core::PackageCatalog;
use crate::resolver::DependencyResolver;

/// Closure information for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosureEntry {
    pub name: String,
    /// `requires`, in declaration order
    pub direct: Vec<String>,
    /// Transitive references, sorted
    pub transitive: Vec<String>,
    /// Transitive references naming no package, sorted
    pub unresolved: Vec<String>,
}

/// Compute closures for every package, in parallel.
///
/// Entries are sorted by package name.
pub fn closure_report(catalog: &PackageCatalog) -> Vec<ClosureEntry> {
    let resolver = DependencyResolver::new(catalog);
    let names: Vec<&str> = catalog.names().collect();

    let mut entries: Vec<ClosureEntry> = names
        .par_iter()
        .map(|&name| {
            let transitive = resolver.transitive_dependencies(name);
            let unresolved = transitive
                .iter()
                .filter(|dep| !catalog.contains(dep.package_name()))
                .map(|dep| dep.to_string())
                .collect();

            ClosureEntry {
                name: name.to_string(),
                direct: resolver
                    .direct_dependencies(name)
                    .iter()
                    .map(|dep| dep.to_string())
                    .collect(),
                transitive: transitive.iter().map(|dep| dep.to_string()).collect(),
                unresolved,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    for entry in &entries {
        if !entry.unresolved.is_empty() {
            tracing::debug!(
                "{} has unresolved references: {}",
                entry.name,
                entry.unresolved.join(", ")
            );
        }
    }

    entries
}

//! Intersecting optional packages with what the host can build.

use std::collections::BTreeSet;

use crate::core::PackageCatalog;

/// Optional packages that are also in `available`.
///
/// `None` means feature detection supplied nothing, and every optional
/// package is offered.
pub fn available_optional(
    catalog: &PackageCatalog,
    available: Option<&BTreeSet<String>>,
) -> Vec<String> {
    let optional = catalog.optional_names();

    match available {
        None => optional.into_iter().collect(),
        Some(available) => {
            for name in available {
                if !catalog.contains(name) {
                    tracing::warn!("available package `{}` is not in the catalog", name);
                }
            }
            optional.intersection(available).cloned().collect()
        }
    }
}

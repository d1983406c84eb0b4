//! Synthetic catalogs for resolver and graph tests.

use crate::core::{CatalogBuilder, PackageCatalog, PackageDefinition};

/// Architecture used by all synthetic catalogs.
pub const TEST_ARCH: &str = "x86_64";

/// Build an x86_64 catalog from `(name, requires)` pairs.
///
/// Every package provides only its self-capability.
pub fn catalog_from(packages: Vec<(&str, Vec<&str>)>) -> PackageCatalog {
    let definitions = packages
        .into_iter()
        .map(|(name, requires)| PackageDefinition::new(name).requires(requires))
        .collect();

    CatalogBuilder::new(TEST_ARCH)
        .version("1.0")
        .definitions(definitions)
        .build()
        .expect("synthetic catalog is valid")
}

/// haiku <- haiku_devel <- haiku_debugger, with the debugger also
/// requiring haiku directly.
pub fn debugger_catalog() -> PackageCatalog {
    catalog_from(vec![
        ("haiku", vec![]),
        ("haiku_devel", vec!["haiku=x86_64"]),
        ("haiku_debugger", vec!["haiku=x86_64", "haiku_devel=x86_64"]),
    ])
}

/// A requires B and B requires A.
pub fn cycle_catalog() -> PackageCatalog {
    catalog_from(vec![("A", vec!["B=x86_64"]), ("B", vec!["A=x86_64"])])
}

/// A package set that adds one package and replaces `netfs`.
pub const MERGE_PACKAGE_SET: &str = r#"
mode = "merge"

[[package]]
name = "netfs"
version = "2.0"
requires = ["haiku=${arch}"]
categories = ["network"]

[[package]]
name = "haiku_webkit"
version = "1.9.9"
requires = ["haiku=${arch}"]
provides = ["haiku_webkit=${arch}", "lib:libWebKitLegacy=${arch}"]
categories = ["network", "media"]
summary = "WebKit for Haiku"
"#;

/// A package set that replaces the builtin universe with two packages.
pub const REPLACE_PACKAGE_SET: &str = r#"
mode = "replace"

[[package]]
name = "haiku"
core = true
categories = ["system"]

[[package]]
name = "haiku_devel"
requires = ["haiku=${arch}"]
categories = ["development"]
"#;

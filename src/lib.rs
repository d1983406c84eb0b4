//! jampkg - package catalog and dependency registry for Haiku build profiles
//!
//! This crate provides the core library functionality for jampkg,
//! including the per-architecture package catalog, dependency closure
//! queries, and package categories.

pub mod core;
pub mod ops;
pub mod resolver;
pub mod util;

/// Test utilities for jampkg unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides synthetic catalogs and temporary project directories.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    capability::CapabilityRef, catalog::PackageCatalog, category::Category,
    category::CategoryIndex, descriptor::PackageDescriptor, errors::CatalogError,
};

pub use resolver::{DependencyGraph, DependencyResolver};
pub use util::context::GlobalContext;

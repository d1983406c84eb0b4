//! Core data structures for jampkg.
//!
//! This module contains the foundational types used throughout jampkg:
//! - Capability references and package descriptors
//! - Package definitions and package-set overrides
//! - The per-architecture catalog and its category table

pub mod builtin;
pub mod capability;
pub mod catalog;
pub mod category;
pub mod definition;
pub mod descriptor;
pub mod errors;

pub use capability::CapabilityRef;
pub use catalog::{CatalogBuilder, PackageCatalog};
pub use category::{Category, CategoryIndex, UnknownCategory};
pub use definition::{OverrideMode, PackageDefinition, PackageSet};
pub use descriptor::{PackageDescriptor, PackageMetadata};
pub use errors::CatalogError;

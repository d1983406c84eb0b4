//! High-level operations.
//!
//! This module contains the operations behind the jampkg commands.

pub mod available;
pub mod cache;
pub mod package_info;
pub mod profile;
pub mod report;

pub use available::available_optional;
pub use cache::CatalogCache;
pub use package_info::render_package_info;
pub use profile::BuildProfile;
pub use report::{closure_report, ClosureEntry};

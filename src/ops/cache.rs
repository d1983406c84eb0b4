//! Per-architecture catalog cache.
//!
//! Catalogs are pure functions of (profile, architecture), so a cache entry
//! never goes stale. Two threads racing to populate the same architecture
//! both build a catalog; the first insert wins and the other is dropped.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::core::{CatalogError, PackageCatalog};
use crate::ops::profile::BuildProfile;

/// Populate-once, read-many cache of catalogs keyed by architecture.
#[derive(Debug)]
pub struct CatalogCache {
    profile: BuildProfile,
    catalogs: RwLock<HashMap<String, Arc<PackageCatalog>>>,
}

impl CatalogCache {
    /// Create an empty cache for a profile.
    pub fn new(profile: BuildProfile) -> Self {
        CatalogCache {
            profile,
            catalogs: RwLock::new(HashMap::new()),
        }
    }

    pub fn profile(&self) -> &BuildProfile {
        &self.profile
    }

    /// The catalog for an architecture, building it on first use.
    ///
    /// Construction errors are returned and nothing is cached.
    pub fn get(&self, architecture: &str) -> Result<Arc<PackageCatalog>, CatalogError> {
        // Fast path: already built (read lock only)
        {
            let catalogs = self.catalogs.read().unwrap_or_else(|e| e.into_inner());
            if let Some(catalog) = catalogs.get(architecture) {
                return Ok(Arc::clone(catalog));
            }
        }

        // Build outside any lock
        let built = Arc::new(self.profile.build_catalog_for(architecture)?);

        let mut catalogs = self.catalogs.write().unwrap_or_else(|e| e.into_inner());
        let catalog = catalogs
            .entry(architecture.to_string())
            .or_insert_with(|| {
                tracing::debug!("cached catalog for {}", architecture);
                built
            });

        Ok(Arc::clone(catalog))
    }

    /// The catalog for the profile's own architecture.
    pub fn default_catalog(&self) -> Result<Arc<PackageCatalog>, CatalogError> {
        self.get(self.profile.architecture())
    }

    /// Number of cached architectures.
    pub fn len(&self) -> usize {
        self.catalogs.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

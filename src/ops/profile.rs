//! Build profiles - which catalog to build for this invocation.
//!
//! A profile is what the external profile selector hands us: an
//! architecture, a default version, an optional package-set override and an
//! optional list of packages the host can build.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::builtin::{self, DEFAULT_ARCHITECTURE, DEFAULT_VERSION};
use crate::core::{CatalogBuilder, CatalogError, PackageCatalog, PackageSet};
use crate::util::config::ProfileConfig;

/// Everything needed to build catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildProfile {
    architecture: String,
    version: String,
    package_set: Option<(PathBuf, PackageSet)>,
    available: Option<BTreeSet<String>>,
}

impl BuildProfile {
    /// The builtin profile for an architecture.
    pub fn new(architecture: impl Into<String>) -> Self {
        BuildProfile {
            architecture: architecture.into(),
            version: DEFAULT_VERSION.to_string(),
            package_set: None,
            available: None,
        }
    }

    /// Build a profile from configuration, loading the package-set file.
    pub fn from_config(config: &ProfileConfig) -> Result<Self> {
        let mut profile = BuildProfile::new(
            config
                .architecture
                .as_deref()
                .unwrap_or(DEFAULT_ARCHITECTURE),
        );

        if let Some(version) = &config.version {
            profile.version = version.clone();
        }
        if let Some(path) = &config.packages {
            profile = profile.with_package_set_file(path)?;
        }
        if let Some(available) = &config.available {
            profile.available = Some(available.iter().cloned().collect());
        }

        Ok(profile)
    }

    /// Replace the architecture.
    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = architecture.into();
        self
    }

    /// Use an already-parsed package set.
    pub fn with_package_set(mut self, source: impl Into<PathBuf>, set: PackageSet) -> Self {
        self.package_set = Some((source.into(), set));
        self
    }

    /// Load and use a package-set file.
    pub fn with_package_set_file(self, path: &Path) -> Result<Self> {
        let set = PackageSet::load(path).map_err(|e| CatalogError::InvalidOverride {
            source_name: path.display().to_string(),
            message: format!("{:#}", e),
        })?;
        Ok(self.with_package_set(path, set))
    }

    /// Restrict optional packages to those the host can build.
    pub fn with_available<I, S>(mut self, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available = Some(available.into_iter().map(Into::into).collect());
        self
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Path of the package-set override, if any.
    pub fn package_set_path(&self) -> Option<&Path> {
        self.package_set.as_ref().map(|(path, _)| path.as_path())
    }

    /// Host-available packages, if feature detection supplied any.
    pub fn available(&self) -> Option<&BTreeSet<String>> {
        self.available.as_ref()
    }

    /// Build the catalog for the profile's architecture.
    pub fn build_catalog(&self) -> Result<PackageCatalog, CatalogError> {
        self.build_catalog_for(&self.architecture)
    }

    /// Build the catalog for another architecture with the same settings.
    pub fn build_catalog_for(&self, architecture: &str) -> Result<PackageCatalog, CatalogError> {
        let mut builder = CatalogBuilder::new(architecture)
            .version(&self.version)
            .definitions(builtin::definitions());

        if let Some((path, set)) = &self.package_set {
            builder = builder.package_set(path.display().to_string(), set.clone());
        }

        builder.build()
    }
}

impl Default for BuildProfile {
    fn default() -> Self {
        BuildProfile::new(DEFAULT_ARCHITECTURE)
    }
}

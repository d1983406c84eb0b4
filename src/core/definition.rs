//! Package definitions - the architecture-independent source of descriptors.
//!
//! A definition is a template: its provides/requires entries may contain
//! `${arch}`, which expands to the target architecture when the catalog is
//! built. Definitions come from the builtin table or from a package-set
//! override file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{CapabilityRef, Category, PackageDescriptor, PackageMetadata};

/// Placeholder replaced by the target architecture.
pub const ARCH_PLACEHOLDER: &str = "${arch}";

/// A package definition, parameterized by architecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageDefinition {
    /// Package name
    pub name: String,

    /// Version; the profile version is used when absent
    #[serde(default)]
    pub version: Option<String>,

    /// Provided capabilities; defaults to `name=${arch}`
    #[serde(default)]
    pub provides: Option<Vec<String>>,

    /// Required capability references
    #[serde(default)]
    pub requires: Vec<String>,

    /// Categories this package belongs to
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Part of the minimal system image
    #[serde(default)]
    pub core: bool,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub vendor: Option<String>,

    #[serde(default)]
    pub packager: Option<String>,

    #[serde(default)]
    pub copyrights: Vec<String>,

    #[serde(default)]
    pub licenses: Vec<String>,
}

impl PackageDefinition {
    /// Create a definition with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        PackageDefinition {
            name: name.into(),
            version: None,
            provides: None,
            requires: Vec::new(),
            categories: Vec::new(),
            core: false,
            summary: None,
            description: None,
            vendor: None,
            packager: None,
            copyrights: Vec::new(),
            licenses: Vec::new(),
        }
    }

    pub fn requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = requires.into_iter().map(Into::into).collect();
        self
    }

    pub fn provides<I, S>(mut self, provides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provides = Some(provides.into_iter().map(Into::into).collect());
        self
    }

    pub fn categories(mut self, categories: &[Category]) -> Self {
        self.categories = categories.to_vec();
        self
    }

    pub fn core(mut self, core: bool) -> Self {
        self.core = core;
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Expand this definition into a descriptor for one architecture.
    pub fn instantiate(&self, architecture: &str, default_version: &str) -> PackageDescriptor {
        let expand = |raw: &str| CapabilityRef::parse(&raw.replace(ARCH_PLACEHOLDER, architecture));

        let provides = match &self.provides {
            Some(provides) => provides.iter().map(|p| expand(p.as_str())).collect(),
            None => vec![CapabilityRef::qualified(&self.name, architecture)],
        };
        let requires = self.requires.iter().map(|r| expand(r.as_str())).collect();

        let version = self.version.as_deref().unwrap_or(default_version);

        PackageDescriptor::new(&self.name, version, architecture, provides, requires).with_metadata(
            PackageMetadata {
                summary: self.summary.clone(),
                description: self.description.clone(),
                vendor: self.vendor.clone(),
                packager: self.packager.clone(),
                copyrights: self.copyrights.clone(),
                licenses: self.licenses.clone(),
            },
        )
    }
}

/// How a package set combines with the builtin definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideMode {
    /// Same-named definitions replace builtin ones; new ones are added
    #[default]
    Merge,
    /// Only the package set's definitions are used
    Replace,
}

/// A package-set override, as supplied by the build profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageSet {
    #[serde(default)]
    pub mode: OverrideMode,

    #[serde(default, rename = "package")]
    pub packages: Vec<PackageDefinition>,
}

impl PackageSet {
    /// Parse a package set from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse package set")
    }

    /// Load a package set from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read package set: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse package set: {}", path.display()))
    }

    /// Combine with a base list of definitions.
    ///
    /// Duplicate detection happens when the catalog is built, so duplicates
    /// inside `packages` survive this step.
    pub fn apply(&self, base: Vec<PackageDefinition>) -> Vec<PackageDefinition> {
        match self.mode {
            OverrideMode::Replace => self.packages.clone(),
            OverrideMode::Merge => {
                let mut merged: Vec<PackageDefinition> = base
                    .into_iter()
                    .filter(|def| !self.packages.iter().any(|p| p.name == def.name))
                    .collect();
                merged.extend(self.packages.iter().cloned());
                merged
            }
        }
    }
}

//! PackageDescriptor - one package of one architecture.
//!
//! A descriptor carries just enough for dependency queries (name,
//! provides, requires) plus the metadata the archive builder needs.
//! It is immutable and cheap to clone.

use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::core::CapabilityRef;

/// Archive metadata attached to a descriptor.
///
/// None of these fields take part in resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packager: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub copyrights: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,
}

/// An immutable package descriptor.
///
/// Descriptors are Arc-wrapped internally for cheap cloning.
#[derive(Clone)]
pub struct PackageDescriptor {
    inner: Arc<DescriptorInner>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct DescriptorInner {
    name: String,
    version: String,
    architecture: String,
    provides: Vec<CapabilityRef>,
    requires: Vec<CapabilityRef>,
    #[serde(flatten)]
    metadata: PackageMetadata,
}

impl PackageDescriptor {
    /// Create a new descriptor with empty metadata.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        architecture: impl Into<String>,
        provides: Vec<CapabilityRef>,
        requires: Vec<CapabilityRef>,
    ) -> Self {
        PackageDescriptor {
            inner: Arc::new(DescriptorInner {
                name: name.into(),
                version: version.into(),
                architecture: architecture.into(),
                provides,
                requires,
                metadata: PackageMetadata::default(),
            }),
        }
    }

    /// Attach archive metadata.
    pub fn with_metadata(mut self, metadata: PackageMetadata) -> Self {
        let inner = Arc::make_mut(&mut self.inner);
        inner.metadata = metadata;
        self
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn version(&self) -> &str {
        &self.inner.version
    }

    pub fn architecture(&self) -> &str {
        &self.inner.architecture
    }

    /// Provided capabilities, in declaration order.
    pub fn provides(&self) -> &[CapabilityRef] {
        &self.inner.provides
    }

    /// Required capability references, in declaration order.
    pub fn requires(&self) -> &[CapabilityRef] {
        &self.inner.requires
    }

    pub fn metadata(&self) -> &PackageMetadata {
        &self.inner.metadata
    }

    /// Get a display string like "name r1~beta5 (x86_64)"
    pub fn display_name(&self) -> String {
        format!(
            "{} {} ({})",
            self.inner.name, self.inner.version, self.inner.architecture
        )
    }
}

impl std::fmt::Debug for PackageDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageDescriptor")
            .field("name", &self.inner.name)
            .field("version", &self.inner.version)
            .field("architecture", &self.inner.architecture)
            .field("provides", &self.inner.provides.len())
            .field("requires", &self.inner.requires.len())
            .finish()
    }
}

impl std::fmt::Display for PackageDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl PartialEq for PackageDescriptor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl Eq for PackageDescriptor {}

impl Serialize for PackageDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn haiku_devel() -> PackageDescriptor {
        PackageDescriptor::new(
            "haiku_devel",
            "r1~beta5_1",
            "x86_64",
            vec![CapabilityRef::parse("haiku_devel=x86_64")],
            vec![CapabilityRef::parse("haiku=x86_64")],
        )
    }

    #[test]
    fn test_descriptor_accessors() {
        let desc = haiku_devel();

        assert_eq!(desc.name(), "haiku_devel");
        assert_eq!(desc.version(), "r1~beta5_1");
        assert_eq!(desc.architecture(), "x86_64");
        assert_eq!(desc.requires()[0].to_string(), "haiku=x86_64");
        assert_eq!(desc.display_name(), "haiku_devel r1~beta5_1 (x86_64)");
    }

    #[test]
    fn test_descriptor_cheap_clone() {
        let a = haiku_devel();
        let b = a.clone();

        assert!(Arc::ptr_eq(&a.inner, &b.inner));
    }

    #[test]
    fn test_descriptor_equality_is_structural() {
        assert_eq!(haiku_devel(), haiku_devel());

        let with_meta = haiku_devel().with_metadata(PackageMetadata {
            vendor: Some("Haiku Project".into()),
            ..Default::default()
        });
        assert_ne!(with_meta, haiku_devel());
    }

    #[test]
    fn test_descriptor_json() {
        let desc = haiku_devel().with_metadata(PackageMetadata {
            summary: Some("Development files".into()),
            ..Default::default()
        });
        let json = serde_json::to_value(&desc).unwrap();

        assert_eq!(json["name"], "haiku_devel");
        assert_eq!(json["requires"][0], "haiku=x86_64");
        assert_eq!(json["summary"], "Development files");
        assert!(json.get("vendor").is_none());
    }
}

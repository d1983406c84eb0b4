//! Capability references - WHAT a package provides or requires.
//!
//! On the wire (PackageInfo files, package-set overrides) a capability
//! reference is a flat string, `capability` or `capability=architecture`.
//! Inside the crate it is the structured [`CapabilityRef`]; the flat form only
//! appears at the boundaries.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `capability=architecture`, split on the first `=`. The capability must be
/// non-empty and free of version operators; the suffix is taken verbatim.
static QUALIFIED_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<cap>[^=<>!\s]+)=(?P<arch>.*)$")
        .expect("capability reference pattern is valid")
});

/// A reference to a capability, optionally qualified with an architecture.
///
/// Parsing never fails. Everything after the first `=` is the architecture
/// suffix, even when it is not a well-formed architecture tag. A reference
/// whose capability part is empty or carries a version operator is kept as
/// an opaque capability with no architecture. Display always reproduces the
/// parsed input.
///
/// Equality, hashing and ordering all follow the flat string form.
#[derive(Debug, Clone)]
pub struct CapabilityRef {
    capability: String,
    architecture: Option<String>,
}

impl CapabilityRef {
    /// Parse a flat capability reference.
    pub fn parse(s: &str) -> Self {
        match QUALIFIED_REF.captures(s) {
            Some(caps) => CapabilityRef {
                capability: caps["cap"].to_string(),
                architecture: Some(caps["arch"].to_string()),
            },
            None => {
                if s.contains('=') {
                    tracing::debug!("treating `{}` as an opaque capability", s);
                }
                CapabilityRef::unqualified(s)
            }
        }
    }

    /// A reference with no architecture suffix.
    pub fn unqualified(capability: impl Into<String>) -> Self {
        CapabilityRef {
            capability: capability.into(),
            architecture: None,
        }
    }

    /// A reference qualified with an architecture.
    pub fn qualified(capability: impl Into<String>, architecture: impl Into<String>) -> Self {
        CapabilityRef {
            capability: capability.into(),
            architecture: Some(architecture.into()),
        }
    }

    /// The capability, without any architecture suffix.
    pub fn capability(&self) -> &str {
        &self.capability
    }

    /// The architecture suffix, if the reference carries one.
    pub fn architecture(&self) -> Option<&str> {
        self.architecture.as_deref()
    }

    /// The package name this reference points at during closure expansion.
    ///
    /// This is the capability with the architecture stripped. It may not
    /// name any package in the catalog.
    pub fn package_name(&self) -> &str {
        &self.capability
    }

    /// Whether this reference carries an architecture suffix.
    pub fn is_qualified(&self) -> bool {
        self.architecture.is_some()
    }

    /// Bytes of the flat string form, without allocating it.
    fn flat_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        let suffix = self
            .architecture
            .as_deref()
            .map(|arch| std::iter::once(b'=').chain(arch.bytes()));
        self.capability.bytes().chain(suffix.into_iter().flatten())
    }
}

impl fmt::Display for CapabilityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.architecture {
            Some(arch) => write!(f, "{}={}", self.capability, arch),
            None => f.write_str(&self.capability),
        }
    }
}

impl FromStr for CapabilityRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CapabilityRef::parse(s))
    }
}

impl From<&str> for CapabilityRef {
    fn from(s: &str) -> Self {
        CapabilityRef::parse(s)
    }
}

impl PartialEq for CapabilityRef {
    fn eq(&self, other: &Self) -> bool {
        self.flat_bytes().eq(other.flat_bytes())
    }
}

impl Eq for CapabilityRef {}

impl Hash for CapabilityRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.flat_bytes() {
            state.write_u8(byte);
        }
        state.write_u8(0xff);
    }
}

impl PartialOrd for CapabilityRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CapabilityRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.flat_bytes().cmp(other.flat_bytes())
    }
}

impl Serialize for CapabilityRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CapabilityRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CapabilityRef::parse(&s))
    }
}

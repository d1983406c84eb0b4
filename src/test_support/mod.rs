//! Test utilities for jampkg unit tests.
//!
//! Provides synthetic catalogs and a throwaway project directory with
//! configuration and package-set files.
//!
//! # Example
//!
//! ```rust,ignore
//! use jampkg::test_support::{TestProject, MERGE_PACKAGE_SET};
//!
//! #[test]
//! fn test_example() {
//!     let project = TestProject::new();
//!     project.write("packages.toml", MERGE_PACKAGE_SET);
//!     project.write_config("[profile]\npackages = \"../packages.toml\"\n");
//! }
//! ```

pub mod fixtures;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

// Re-export fixtures for convenience
pub use fixtures::*;

/// A temporary project directory.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create an empty project directory.
    pub fn new() -> Self {
        TestProject {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write(&self, relative: impl AsRef<Path>, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// Write `.jampkg/config.toml`.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write(".jampkg/config.toml", contents)
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_write() {
        let project = TestProject::new();
        let path = project.write_config("[profile]\n");

        assert!(path.ends_with(".jampkg/config.toml"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[profile]\n");
    }

    #[test]
    fn test_fixture_catalogs() {
        assert_eq!(debugger_catalog().len(), 3);
        assert_eq!(cycle_catalog().len(), 2);
    }
}

//! Configuration file support for jampkg.
//!
//! jampkg supports two configuration file locations:
//! - Global: `~/.jampkg/config.toml` - User-wide defaults
//! - Project: `.jampkg/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. Relative paths in a
//! config file are resolved against the directory that contains its
//! `.jampkg` directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the per-project and per-user configuration directory.
pub const CONFIG_DIR: &str = ".jampkg";

/// Name of the configuration file inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable that replaces `~/.jampkg` as the global directory.
pub const HOME_ENV: &str = "JAMPKG_HOME";

/// jampkg configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build profile settings
    pub profile: ProfileConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// The build profile: which catalog to build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Target architecture (e.g., x86_64)
    pub architecture: Option<String>,

    /// Version for packages that do not declare one
    pub version: Option<String>,

    /// Package-set override file
    pub packages: Option<PathBuf>,

    /// Packages the host can actually build; None means all
    pub available: Option<Vec<String>>,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored diagnostics (None = auto)
    pub color: Option<bool>,
}

impl OutputConfig {
    /// Decide whether diagnostics are colored.
    ///
    /// `--no-color` always wins; otherwise an explicit `output.color` beats
    /// terminal detection.
    pub fn use_color(&self, no_color: bool, is_terminal: bool) -> bool {
        if no_color {
            return false;
        }
        self.color.unwrap_or(is_terminal)
    }
}

impl Config {
    /// Load configuration from a file.
    ///
    /// Relative `profile.packages` paths are made absolute.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;

        if let Some(packages) = config.profile.packages.take() {
            config.profile.packages = Some(resolve_relative(path, packages));
        }

        Ok(config)
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.profile.architecture.is_some() {
            self.profile.architecture = other.profile.architecture;
        }
        if other.profile.version.is_some() {
            self.profile.version = other.profile.version;
        }
        if other.profile.packages.is_some() {
            self.profile.packages = other.profile.packages;
        }
        if other.profile.available.is_some() {
            self.profile.available = other.profile.available;
        }
        if other.output.color.is_some() {
            self.output.color = other.output.color;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.jampkg/config.toml)
/// 2. Global config (~/.jampkg/config.toml)
/// 3. Defaults
///
/// Missing files are skipped; unreadable or malformed files are errors.
pub fn load_config(global_path: Option<&Path>, project_path: Option<&Path>) -> Result<Config> {
    let mut config = Config::default();

    for path in [global_path, project_path].into_iter().flatten() {
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            config.merge(Config::load(path)?);
        }
    }

    Ok(config)
}

/// Get the global jampkg config directory (`$JAMPKG_HOME` or ~/.jampkg).
pub fn global_config_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Some(PathBuf::from(home));
    }
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR))
}

/// Get the global config path.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Get the project config path (.jampkg/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Find the nearest project root (a directory containing
/// `.jampkg/config.toml`) at or above `start`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| project_config_path(dir).is_file())
        .map(Path::to_path_buf)
}

fn resolve_relative(config_path: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }

    // config.toml -> .jampkg -> base
    let base = config_path
        .parent()
        .and_then(Path::parent)
        .unwrap_or(Path::new("."));
    base.join(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestProject;

    #[test]
    fn test_load_profile() {
        let project = TestProject::new();
        let path = project.write_config(
            r#"
[profile]
architecture = "arm64"
version = "r1~beta6"
packages = "packages.toml"
available = ["netfs"]

[output]
color = false
"#,
        );

        let config = Config::load(&path).unwrap();

        assert_eq!(config.profile.architecture.as_deref(), Some("arm64"));
        assert_eq!(config.profile.version.as_deref(), Some("r1~beta6"));
        assert_eq!(
            config.profile.packages,
            Some(project.root().join("packages.toml"))
        );
        assert_eq!(config.profile.available, Some(vec!["netfs".to_string()]));
        assert_eq!(config.output.color, Some(false));
    }

    #[test]
    fn test_project_overrides_global() {
        let global = TestProject::new();
        let global_path = global.write_config(
            "[profile]\narchitecture = \"x86\"\nversion = \"r1\"\n",
        );
        let project = TestProject::new();
        let project_path = project.write_config("[profile]\narchitecture = \"riscv64\"\n");

        let config = load_config(Some(&global_path), Some(&project_path)).unwrap();

        assert_eq!(config.profile.architecture.as_deref(), Some("riscv64"));
        assert_eq!(config.profile.version.as_deref(), Some("r1"));
    }

    #[test]
    fn test_color_precedence() {
        let auto = OutputConfig::default();
        assert!(auto.use_color(false, true));
        assert!(!auto.use_color(false, false));

        let forced = OutputConfig { color: Some(true) };
        assert!(forced.use_color(false, false));
        assert!(!forced.use_color(true, true));

        let off = OutputConfig { color: Some(false) };
        assert!(!off.use_color(false, true));
    }

    #[test]
    fn test_missing_files_use_defaults() {
        let project = TestProject::new();
        let missing = project.root().join("nope.toml");

        let config = load_config(Some(&missing), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_config_is_error() {
        let project = TestProject::new();
        let path = project.write_config("[profile\n");

        assert!(load_config(None, Some(&path)).is_err());
    }

    #[test]
    fn test_find_project_root_walks_up() {
        let project = TestProject::new();
        project.write_config("");
        let nested = project.root().join("src").join("kits");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(project.root().to_path_buf()));
    }
}

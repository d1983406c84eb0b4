//! Global context for jampkg operations.
//!
//! Provides centralized access to the working directory and the merged
//! configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::config::{self, Config};

/// Working directory, project root and configuration for one invocation.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    cwd: PathBuf,
    project_root: Option<PathBuf>,
    config: Config,
}

impl GlobalContext {
    /// Create a context for the process working directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Self::with_cwd(cwd)
    }

    /// Create a context rooted at `cwd`, loading global and project config.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Result<Self> {
        let cwd = cwd.into();
        let project_root = config::find_project_root(&cwd);

        let global_path = config::global_config_path();
        let project_path = project_root.as_deref().map(config::project_config_path);

        let config = config::load_config(global_path.as_deref(), project_path.as_deref())?;

        Ok(GlobalContext {
            cwd,
            project_root,
            config,
        })
    }

    /// Create a context with an explicit configuration and no files.
    pub fn with_config(cwd: impl Into<PathBuf>, config: Config) -> Self {
        GlobalContext {
            cwd: cwd.into(),
            project_root: None,
            config,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// The nearest directory with a `.jampkg/config.toml`, if any.
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a command-line path against the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

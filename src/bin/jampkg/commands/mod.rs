//! Command implementations

pub mod categories;
pub mod completions;
pub mod deps;
pub mod info;
pub mod list;
pub mod order;
pub mod show;
pub mod tree;

use anyhow::Result;

use crate::GlobalOptions;
use jampkg::ops::BuildProfile;
use jampkg::util::diagnostic::{suggestions, Diagnostic};
use jampkg::PackageCatalog;

/// Load the build profile from config files and command-line overrides.
pub fn load_profile(opts: &GlobalOptions) -> Result<BuildProfile> {
    let mut config = opts.ctx.config().clone();

    if let Some(arch) = &opts.profile.arch {
        config.profile.architecture = Some(arch.clone());
    }
    if let Some(packages) = &opts.profile.packages {
        config.profile.packages = Some(opts.ctx.resolve_path(packages));
    }

    BuildProfile::from_config(&config.profile)
}

/// Load the profile and build its catalog.
pub fn load_catalog(opts: &GlobalOptions) -> Result<(BuildProfile, PackageCatalog)> {
    let profile = load_profile(opts)?;
    let catalog = profile.build_catalog()?;
    Ok((profile, catalog))
}

/// Warn that a package is unknown. Queries on unknown packages are empty,
/// not failures.
pub fn warn_unknown(opts: &GlobalOptions, catalog: &PackageCatalog, name: &str) {
    let diag = Diagnostic::warning(format!(
        "package `{}` is not in the {} catalog",
        name,
        catalog.architecture()
    ))
    .with_context(suggestions::PACKAGE_NOT_FOUND);
    opts.emit(&diag);
}

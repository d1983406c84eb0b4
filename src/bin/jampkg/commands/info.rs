//! `jampkg info` command

use anyhow::Result;
use serde::Serialize;

use crate::cli::InfoArgs;
use crate::commands::load_catalog;
use crate::GlobalOptions;
use jampkg::DependencyGraph;

#[derive(Serialize)]
struct CatalogInfo {
    architecture: String,
    version: String,
    package_set: Option<String>,
    packages: usize,
    core: usize,
    optional: usize,
    has_cycle: bool,
    fingerprint: String,
}

pub fn execute(args: InfoArgs, opts: &GlobalOptions) -> Result<()> {
    let (profile, catalog) = load_catalog(opts)?;

    let info = CatalogInfo {
        architecture: catalog.architecture().to_string(),
        version: profile.version().to_string(),
        package_set: profile
            .package_set_path()
            .map(|p| p.display().to_string()),
        packages: catalog.len(),
        core: catalog.core_names().len(),
        optional: catalog.optional_names().len(),
        has_cycle: DependencyGraph::new(&catalog).has_cycle(),
        fingerprint: catalog.fingerprint(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("architecture: {}", info.architecture);
    println!("version:      {}", info.version);
    if let Some(package_set) = &info.package_set {
        println!("package set:  {}", package_set);
    }
    println!(
        "packages:     {} ({} core, {} optional)",
        info.packages, info.core, info.optional
    );
    if info.has_cycle {
        println!("cycles:       yes");
    }
    println!("fingerprint:  {}", info.fingerprint);

    Ok(())
}

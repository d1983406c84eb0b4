//! `jampkg deps` command

use anyhow::Result;

use crate::cli::DepsArgs;
use crate::commands::{load_catalog, warn_unknown};
use crate::GlobalOptions;
use jampkg::ops::closure_report;
use jampkg::DependencyResolver;

pub fn execute(args: DepsArgs, opts: &GlobalOptions) -> Result<()> {
    let (_, catalog) = load_catalog(opts)?;

    if args.all {
        let report = closure_report(&catalog);

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        for entry in &report {
            let deps = if args.transitive {
                &entry.transitive
            } else {
                &entry.direct
            };
            println!("{}: {}", entry.name, deps.join(" "));
        }
        return Ok(());
    }

    let name = args.name.unwrap_or_default();
    if !catalog.contains(&name) {
        warn_unknown(opts, &catalog, &name);
    }

    let resolver = DependencyResolver::new(&catalog);
    let deps: Vec<String> = if args.transitive {
        resolver
            .transitive_dependencies(&name)
            .iter()
            .map(|c| c.to_string())
            .collect()
    } else {
        resolver
            .direct_dependencies(&name)
            .iter()
            .map(|c| c.to_string())
            .collect()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&deps)?);
    } else {
        for dep in &deps {
            println!("{}", dep);
        }
    }

    Ok(())
}

//! `jampkg tree` command

use std::collections::HashSet;

use anyhow::Result;

use crate::cli::TreeArgs;
use crate::commands::{load_catalog, warn_unknown};
use crate::GlobalOptions;
use jampkg::{CapabilityRef, DependencyResolver};

pub fn execute(args: TreeArgs, opts: &GlobalOptions) -> Result<()> {
    let (_, catalog) = load_catalog(opts)?;

    let Some(root) = catalog.get(&args.name) else {
        warn_unknown(opts, &catalog, &args.name);
        return Ok(());
    };

    let resolver = DependencyResolver::new(&catalog);

    println!("{}", root.display_name());

    let mut seen = HashSet::new();
    seen.insert(root.name().to_string());

    for dep in resolver.direct_dependencies(root.name()) {
        print_tree(
            &resolver,
            &dep,
            1,
            args.depth.unwrap_or(usize::MAX),
            &mut seen,
        );
    }

    Ok(())
}

fn print_tree(
    resolver: &DependencyResolver<'_>,
    dep: &CapabilityRef,
    depth: usize,
    max_depth: usize,
    seen: &mut HashSet<String>,
) {
    if depth > max_depth {
        return;
    }

    let prefix = format!("{}├── ", "│   ".repeat(depth - 1));

    let name = dep.package_name();
    if !resolver.catalog().contains(name) {
        println!("{}{} (unresolved)", prefix, dep);
        return;
    }

    // Each package's subtree is printed once
    let is_duplicate = !seen.insert(name.to_string());
    let dup_marker = if is_duplicate { " (*)" } else { "" };

    println!("{}{}{}", prefix, dep, dup_marker);

    if is_duplicate {
        return;
    }

    for child in resolver.direct_dependencies(name) {
        print_tree(resolver, &child, depth + 1, max_depth, seen);
    }
}

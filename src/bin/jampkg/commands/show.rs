//! `jampkg show` command

use anyhow::Result;

use crate::cli::ShowArgs;
use crate::commands::load_catalog;
use crate::GlobalOptions;
use jampkg::ops::render_package_info;
use jampkg::util::diagnostic::{suggestions, Diagnostic};

pub fn execute(args: ShowArgs, opts: &GlobalOptions) -> Result<()> {
    let (_, catalog) = load_catalog(opts)?;

    let Some(desc) = catalog.get(&args.name) else {
        return Err(Diagnostic::error(format!("package `{}` not found", args.name))
            .with_context(format!("architecture: {}", catalog.architecture()))
            .with_context(suggestions::PACKAGE_NOT_FOUND)
            .into());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(desc)?);
        return Ok(());
    }

    if args.package_info {
        print!("{}", render_package_info(desc));
        return Ok(());
    }

    let core = if catalog.core_names().contains(desc.name()) {
        "core"
    } else {
        "optional"
    };
    let categories: Vec<_> = catalog
        .categories()
        .category_for(desc.name())
        .iter()
        .map(|c| c.as_str())
        .collect();

    println!("{} ({})", desc.display_name(), core);
    if let Some(summary) = &desc.metadata().summary {
        println!("  {}", summary);
    }
    if !categories.is_empty() {
        println!("  categories: {}", categories.join(", "));
    }

    println!("  provides:");
    for cap in desc.provides() {
        println!("    {}", cap);
    }

    if !desc.requires().is_empty() {
        println!("  requires:");
        for cap in desc.requires() {
            let marker = if catalog.contains(cap.package_name()) {
                ""
            } else {
                " (unresolved)"
            };
            println!("    {}{}", cap, marker);
        }
    }

    Ok(())
}

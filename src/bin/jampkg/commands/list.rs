//! `jampkg list` command

use anyhow::Result;

use crate::cli::ListArgs;
use crate::commands::load_catalog;
use crate::GlobalOptions;
use jampkg::ops::available_optional;
use jampkg::util::diagnostic::{suggestions, Diagnostic};
use jampkg::Category;

pub fn execute(args: ListArgs, opts: &GlobalOptions) -> Result<()> {
    let (profile, catalog) = load_catalog(opts)?;

    let names: Vec<String> = if args.core {
        catalog.core_names().into_iter().collect()
    } else if args.optional {
        available_optional(&catalog, profile.available())
    } else if let Some(category) = &args.category {
        if category.parse::<Category>().is_err() {
            let diag = Diagnostic::warning(format!("unknown category `{}`", category))
                .with_context(suggestions::CATEGORY_NOT_FOUND);
            opts.emit(&diag);
        }
        catalog.names_in_category(category)
    } else {
        catalog.names().map(str::to_string).collect()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    for name in &names {
        match catalog.get(name) {
            Some(desc) => println!("{} {}", desc.name(), desc.version()),
            None => println!("{}", name),
        }
    }

    Ok(())
}

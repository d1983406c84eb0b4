//! `jampkg categories` command

use anyhow::Result;

use crate::cli::CategoriesArgs;
use crate::commands::{load_catalog, warn_unknown};
use crate::GlobalOptions;
use jampkg::Category;

pub fn execute(args: CategoriesArgs, opts: &GlobalOptions) -> Result<()> {
    let (_, catalog) = load_catalog(opts)?;

    if let Some(name) = &args.name {
        if !catalog.contains(name) {
            warn_unknown(opts, &catalog, name);
            return Ok(());
        }
        for category in catalog.categories().category_for(name) {
            println!("{}", category);
        }
        return Ok(());
    }

    for category in Category::ALL {
        let names = catalog.names_in(category);
        if names.is_empty() {
            continue;
        }
        println!("{}: {}", category, names.join(", "));
    }

    Ok(())
}

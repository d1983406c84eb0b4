//! `jampkg order` command

use anyhow::Result;

use crate::cli::OrderArgs;
use crate::commands::{load_catalog, warn_unknown};
use crate::GlobalOptions;
use jampkg::DependencyGraph;

pub fn execute(args: OrderArgs, opts: &GlobalOptions) -> Result<()> {
    let (_, catalog) = load_catalog(opts)?;

    for name in &args.names {
        if !catalog.contains(name) {
            warn_unknown(opts, &catalog, name);
        }
    }

    let graph = DependencyGraph::new(&catalog);
    if graph.has_cycle() {
        tracing::debug!("catalog has dependency cycles; cycle members are grouped");
    }

    for name in graph.install_order(&args.names) {
        println!("{}", name);
    }

    Ok(())
}

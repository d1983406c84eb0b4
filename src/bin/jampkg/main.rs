//! jampkg CLI - Haiku package catalog and dependency registry

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jampkg::util::diagnostic::{self, Diagnostic};
use jampkg::util::GlobalContext;
use jampkg::CatalogError;

mod cli;
mod commands;

use cli::{Cli, Commands, ProfileArgs};

/// State shared by every command: the loaded configuration, the profile
/// overrides from the command line, and whether diagnostics are colored.
pub struct GlobalOptions {
    pub ctx: GlobalContext,
    pub profile: ProfileArgs,
    pub color: bool,
}

impl GlobalOptions {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let ctx = GlobalContext::new()?;
        let color = ctx
            .config()
            .output
            .use_color(cli.no_color, std::io::stderr().is_terminal());

        Ok(GlobalOptions {
            ctx,
            profile: cli.profile.clone(),
            color,
        })
    }

    /// Print a diagnostic to stderr.
    pub fn emit(&self, diag: &Diagnostic) {
        diagnostic::emit(diag, self.color);
    }
}

fn main() {
    let cli = Cli::parse();
    let terminal_color = !cli.no_color && std::io::stderr().is_terminal();
    init_logging(cli.verbose, terminal_color);

    let opts = match GlobalOptions::from_cli(&cli) {
        Ok(opts) => opts,
        Err(e) => {
            report(&e, terminal_color);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &opts) {
        report(&e, opts.color);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool, ansi: bool) {
    let filter = if verbose {
        EnvFilter::new("jampkg=debug")
    } else {
        EnvFilter::new("jampkg=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .init();
}

fn report(e: &anyhow::Error, color: bool) {
    if let Some(diag) = e.downcast_ref::<Diagnostic>() {
        diagnostic::emit(diag, color);
    } else if let Some(catalog_err) = e.downcast_ref::<CatalogError>() {
        diagnostic::emit(&catalog_err.to_diagnostic(), color);
    } else {
        eprintln!("error: {:#}", e);
    }
}

fn run(command: Commands, opts: &GlobalOptions) -> Result<()> {
    match command {
        Commands::List(args) => commands::list::execute(args, opts),
        Commands::Show(args) => commands::show::execute(args, opts),
        Commands::Deps(args) => commands::deps::execute(args, opts),
        Commands::Tree(args) => commands::tree::execute(args, opts),
        Commands::Order(args) => commands::order::execute(args, opts),
        Commands::Categories(args) => commands::categories::execute(args, opts),
        Commands::Info(args) => commands::info::execute(args, opts),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

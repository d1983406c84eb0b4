//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// jampkg - Haiku package catalog and dependency registry
#[derive(Parser)]
#[command(name = "jampkg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub profile: ProfileArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Build profile overrides shared by all commands.
#[derive(Args, Clone, Default)]
pub struct ProfileArgs {
    /// Target architecture (defaults to profile.architecture or x86_64)
    #[arg(long, global = true, env = "JAMPKG_ARCH")]
    pub arch: Option<String>,

    /// Package-set override file (TOML)
    #[arg(long, global = true)]
    pub packages: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List packages
    List(ListArgs),

    /// Show one package
    Show(ShowArgs),

    /// Show the dependencies of a package
    Deps(DepsArgs),

    /// Display the dependency tree of a package
    Tree(TreeArgs),

    /// Show the install order for packages (dependencies first)
    Order(OrderArgs),

    /// Show the category table
    Categories(CategoriesArgs),

    /// Show catalog summary and fingerprint
    Info(InfoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Only core packages
    #[arg(long, conflicts_with_all = ["optional", "category"])]
    pub core: bool,

    /// Only optional packages the host can build
    #[arg(long, conflicts_with = "category")]
    pub optional: bool,

    /// Only packages in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Package name
    pub name: String,

    /// Output as JSON
    #[arg(long, conflicts_with = "package_info")]
    pub json: bool,

    /// Output as a .PackageInfo file
    #[arg(long)]
    pub package_info: bool,
}

#[derive(Args)]
pub struct DepsArgs {
    /// Package name
    #[arg(required_unless_present = "all")]
    pub name: Option<String>,

    /// Include transitive dependencies
    #[arg(short, long)]
    pub transitive: bool,

    /// Report closures for every package
    #[arg(long, conflicts_with = "name")]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct TreeArgs {
    /// Package to show the tree for
    pub name: String,

    /// Maximum depth to display
    #[arg(short, long)]
    pub depth: Option<usize>,
}

#[derive(Args)]
pub struct OrderArgs {
    /// Root packages
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Args)]
pub struct CategoriesArgs {
    /// Show the categories of one package
    pub name: Option<String>,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

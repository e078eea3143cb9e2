//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Ferry - migrates legacy spm 2.x packages to the standard convention
#[derive(Parser)]
#[command(name = "ferry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Migrate a legacy package into a new directory
    Migrate(MigrateArgs),

    /// Print the module-load targets a package references
    Scan(ScanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct MigrateArgs {
    /// Legacy package root (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Destination directory for the migrated package
    #[arg(short, long)]
    pub dest: PathBuf,

    /// Keep versions verbatim instead of minor-bumping them
    #[arg(long)]
    pub no_bump: bool,

    /// Route dev aliases into `dependencies` instead of `devDependencies`
    #[arg(long)]
    pub merge_dev_aliases: bool,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Package root (defaults to the current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

//! Ferry CLI - a migrator for legacy spm 2.x packages

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("ferry=debug")
    } else {
        EnvFilter::new("ferry=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Migrate(args) => commands::migrate::execute(args),
        Commands::Scan(args) => commands::scan::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

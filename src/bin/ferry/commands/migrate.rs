//! `ferry migrate` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::MigrateArgs;
use ferry::ops::{migrate_package, MigrateError, MigrateOptions, MigrationPolicy};
use ferry::util::diagnostic;

pub fn execute(args: MigrateArgs) -> Result<()> {
    let source = args.path.unwrap_or_else(|| PathBuf::from("."));

    let policy = MigrationPolicy {
        bump_versions: !args.no_bump,
        merge_dev_aliases: args.merge_dev_aliases,
    };

    let opts = MigrateOptions {
        source,
        dest: args.dest,
        policy,
    };

    match migrate_package(&opts) {
        Ok(summary) => {
            eprintln!(
                "    Migrated {} ({} rewritten, {} copied) -> {}",
                opts.source.display(),
                summary.rewritten,
                summary.copied,
                opts.dest.display()
            );
            Ok(())
        }
        Err(e) => {
            if let Some(err) = e.downcast_ref::<MigrateError>() {
                diagnostic::emit(&err.to_diagnostic(), true);
                std::process::exit(1);
            }
            Err(e)
        }
    }
}

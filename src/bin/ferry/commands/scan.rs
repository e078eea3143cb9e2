//! `ferry scan` command
//!
//! Diagnostic view of what the migration would see: the module-load
//! targets referenced under `src/` and `tests/`, and the local source
//! module set.

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::ScanArgs;
use ferry::ops::{local_modules, SourceInventory};

pub fn execute(args: ScanArgs) -> Result<()> {
    let root = args.path.unwrap_or_else(|| PathBuf::from("."));

    let inventory = SourceInventory::scan(&root)?;
    println!("require targets ({}):", inventory.len());
    for id in inventory.iter() {
        println!("  {}", id);
    }

    let locals = local_modules(&root.join("src"))?;
    println!("local modules ({}):", locals.len());
    for name in &locals {
        println!("  {}", name);
    }

    Ok(())
}

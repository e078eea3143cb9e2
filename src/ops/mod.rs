//! High-level operations.
//!
//! This module contains the implementation of Ferry commands.

pub mod inventory;
pub mod migrate_manifest;
pub mod migrate_package;

pub use inventory::{local_modules, SourceInventory};
pub use migrate_manifest::{migrate_manifest, MigrateError, MigrationPolicy};
pub use migrate_package::{migrate_package, MigrateOptions, MigrateSummary};

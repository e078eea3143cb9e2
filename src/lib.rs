//! Ferry - a migrator for legacy spm 2.x packages
//!
//! This crate provides the core library functionality for Ferry:
//! short-identifier resolution, module-load call rewriting, and manifest
//! migration.

pub mod core;
pub mod ops;
pub mod resolver;
pub mod rewrite;
pub mod util;

/// Test fixtures for Ferry unit tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{alias::AliasTable, location::LegacyLocation, manifest::Manifest};
pub use resolver::Resolver;
pub use rewrite::rewrite_source;

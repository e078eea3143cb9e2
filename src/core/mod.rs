//! Core data structures for Ferry.
//!
//! This module contains the foundational types used throughout Ferry:
//! - Legacy module locations and their canonical names
//! - Alias tables
//! - The `package.json` manifest schema

pub mod alias;
pub mod location;
pub mod manifest;

pub use alias::AliasTable;
pub use location::LegacyLocation;
pub use manifest::{Manifest, SpmSection};

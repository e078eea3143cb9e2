//! Command implementations for the Ferry CLI.

pub mod completions;
pub mod migrate;
pub mod scan;

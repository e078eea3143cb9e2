//! Test utilities for Ferry unit tests.
//!
//! This module is only compiled for tests. It provides on-disk fixtures
//! for legacy package trees.

pub mod fixtures;

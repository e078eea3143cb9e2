//! Implementation of `ferry migrate`.
//!
//! Whole-package orchestration: the inventory, local module set, and
//! alias table are computed up front (a one-time barrier), then the
//! manifest is migrated once and every source file is rewritten once.
//! Any per-file error aborts the entire run; there is no partial-success
//! mode.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::core::alias::AliasTable;
use crate::core::manifest::Manifest;
use crate::ops::inventory::{local_modules, SourceInventory};
use crate::ops::migrate_manifest::{migrate_manifest, MigrationPolicy};
use crate::resolver::Resolver;
use crate::rewrite::rewriter::rewrite_source;
use crate::util::fs;

/// Directories never carried into the migrated tree.
const SKIP_DIRS: &[&str] = &["dist", "_site", "sea-modules"];

/// The fixed CI configuration for migrated packages. Substituted
/// verbatim whenever the legacy package already has one; content is
/// never derived from the legacy file.
const TRAVIS_TEMPLATE: &str = "language: node_js
node_js:
  - \"0.10\"
before_install:
  - npm install -g spm@2.x
script:
  - spm test
";

/// Options for a package migration.
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    /// Legacy package root.
    pub source: PathBuf,

    /// Destination root for the migrated tree.
    pub dest: PathBuf,

    /// Variant policy.
    pub policy: MigrationPolicy,
}

/// Outcome of a package migration.
#[derive(Debug, Default)]
pub struct MigrateSummary {
    /// Source files whose module-load calls were rewritten.
    pub rewritten: usize,

    /// Files carried over byte-for-byte.
    pub copied: usize,
}

/// Migrate a whole package tree into `opts.dest`.
pub fn migrate_package(opts: &MigrateOptions) -> Result<MigrateSummary> {
    let manifest = Manifest::load(&opts.source.join("package.json"))?;

    // One-time barrier: everything the per-file passes read.
    let inventory = SourceInventory::scan(&opts.source)?;
    let locals = local_modules(&opts.source.join("src"))?;
    let alias = AliasTable::from_manifest(&manifest);
    let resolver = Resolver::new(alias, locals);

    let migrated = migrate_manifest(&manifest, &inventory, &opts.policy)?;

    let mut summary = MigrateSummary::default();
    let walker = WalkDir::new(&opts.source)
        .into_iter()
        .filter_entry(|e| !is_skipped(e));
    for entry in walker {
        let entry =
            entry.with_context(|| format!("failed to walk {}", opts.source.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = fs::relative_path(&opts.source, entry.path());
        let out = opts.dest.join(&rel);

        if rel == Path::new("package.json") {
            fs::write_string(&out, &migrated.to_json_pretty()?)?;
        } else if rel == Path::new(".travis.yml") {
            fs::write_string(&out, TRAVIS_TEMPLATE)?;
        } else if is_rewritable(&rel) {
            let code = fs::read_to_string(entry.path())?;
            fs::write_string(&out, &rewrite_source(&code, &resolver))?;
            summary.rewritten += 1;
            tracing::debug!("rewrote {}", rel.display());
        } else {
            fs::copy_file(entry.path(), &out)?;
            summary.copied += 1;
        }
    }

    Ok(summary)
}

/// Entries dropped from the migrated tree: generated directories at any
/// depth, and the legacy build entry point at the root.
fn is_skipped(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if entry.file_type().is_dir() && SKIP_DIRS.contains(&name.as_ref()) {
        return true;
    }
    entry.depth() == 1 && entry.file_type().is_file() && name == "Makefile"
}

/// Module-load rewriting applies to source files under `src/` and
/// `tests/` only.
fn is_rewritable(rel: &Path) -> bool {
    let first = rel
        .components()
        .next()
        .map(|c| c.as_os_str().to_string_lossy().to_string());
    matches!(first.as_deref(), Some("src") | Some("tests"))
        && rel.extension().map_or(false, |e| e == "js")
}

//! Source identifier inventory.
//!
//! Collects the full set of distinct module-load targets referenced
//! anywhere under a package's `src/` and `tests/` trees, plus the set of
//! local source modules. Both are computed once per run, before any
//! rewriting or manifest migration begins, and only read afterwards.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::rewrite::extract::extract_require_calls;
use crate::util::fs;

/// Glob patterns selecting the scannable source trees.
const SOURCE_PATTERNS: &[&str] = &["src/**/*.js", "tests/**/*.js"];

/// The deduplicated set of module-load targets referenced by a package.
#[derive(Debug, Clone, Default)]
pub struct SourceInventory {
    targets: BTreeSet<String>,
}

impl SourceInventory {
    /// Scan a package root. File-access errors are fatal; a partial
    /// inventory is never returned.
    pub fn scan(package_root: &Path) -> Result<Self> {
        let patterns: Vec<String> = SOURCE_PATTERNS.iter().map(|p| p.to_string()).collect();
        let files = fs::glob_files(package_root, &patterns)?;

        let mut targets = BTreeSet::new();
        for file in &files {
            let code = fs::read_to_string(file)?;
            for call in extract_require_calls(&code) {
                targets.insert(call.target);
            }
        }

        tracing::debug!(
            "inventory: {} distinct targets across {} files",
            targets.len(),
            files.len()
        );
        Ok(SourceInventory { targets })
    }

    /// Whether the package references this target anywhere.
    pub fn contains(&self, id: &str) -> bool {
        self.targets.contains(id)
    }

    /// Whether any referenced target carries the given file extension.
    pub fn contains_ext(&self, ext: &str) -> bool {
        self.targets
            .iter()
            .any(|t| Path::new(t).extension().map_or(false, |e| e == ext))
    }

    /// Iterate targets in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Base names (extension stripped) of the direct files in `src_dir`.
///
/// Used to distinguish "refers to a sibling local module" from "must be
/// resolved through the alias table". Subdirectories are not descended.
pub fn local_modules(src_dir: &Path) -> Result<BTreeSet<String>> {
    let mut modules = BTreeSet::new();

    let entries = std::fs::read_dir(src_dir)
        .with_context(|| format!("failed to read source directory: {}", src_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        let name = name.strip_suffix(".js").unwrap_or(&name).to_string();
        modules.insert(name);
    }

    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixtures::LegacyPackageFixture;
    use tempfile::TempDir;

    #[test]
    fn test_scan_collects_distinct_targets() {
        let tmp = TempDir::new().unwrap();
        LegacyPackageFixture::basic().write_to(tmp.path()).unwrap();

        let inventory = SourceInventory::scan(tmp.path()).unwrap();
        assert!(inventory.contains("$"));
        assert!(inventory.contains("base"));
        assert!(inventory.contains("expect"));
        // `base` is required from both src and tests but appears once.
        assert_eq!(inventory.iter().filter(|t| *t == "base").count(), 1);
    }

    #[test]
    fn test_scan_ignores_other_trees() {
        let tmp = TempDir::new().unwrap();
        LegacyPackageFixture::basic().write_to(tmp.path()).unwrap();
        std::fs::create_dir_all(tmp.path().join("docs")).unwrap();
        std::fs::write(
            tmp.path().join("docs/example.js"),
            "var x = require('doc-only');",
        )
        .unwrap();

        let inventory = SourceInventory::scan(tmp.path()).unwrap();
        assert!(!inventory.contains("doc-only"));
    }

    #[test]
    fn test_contains_ext() {
        let tmp = TempDir::new().unwrap();
        LegacyPackageFixture::basic()
            .with_file("src/render.js", "var tpl = require('./item.handlebars');")
            .write_to(tmp.path())
            .unwrap();

        let inventory = SourceInventory::scan(tmp.path()).unwrap();
        assert!(inventory.contains_ext("handlebars"));
        assert!(!inventory.contains_ext("mustache"));
    }

    #[test]
    fn test_local_modules_strips_extension() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        std::fs::create_dir_all(src.join("nested")).unwrap();
        std::fs::write(src.join("widget.js"), "").unwrap();
        std::fs::write(src.join("helper.js"), "").unwrap();
        std::fs::write(src.join("nested/deep.js"), "").unwrap();

        let modules = local_modules(&src).unwrap();
        assert!(modules.contains("widget"));
        assert!(modules.contains("helper"));
        // Direct files only.
        assert!(!modules.contains("deep"));
    }

    #[test]
    fn test_local_modules_missing_dir_is_fatal() {
        let tmp = TempDir::new().unwrap();
        assert!(local_modules(&tmp.path().join("src")).is_err());
    }
}

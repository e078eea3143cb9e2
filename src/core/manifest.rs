//! Legacy `package.json` parsing and schema.
//!
//! The manifest is read once from the package root, migrated into a fresh
//! structure, and written out; it is never patched in place. Fields the
//! migration does not know about are preserved through flattened extras.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The parsed `package.json` manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Package name
    pub name: String,

    /// Legacy group marker. Its presence is what identifies a migratable
    /// spm 2.x package; migrated manifests no longer carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    /// Package version (dotted-triple)
    pub version: String,

    /// Legacy test-runner configuration; dropped during migration in
    /// favor of the convention-based default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<Value>,

    /// The spm build section
    #[serde(default)]
    pub spm: SpmSection,

    /// Fields the migration passes through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The nested `spm` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpmSection {
    /// Short id -> legacy location string
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub alias: BTreeMap<String, String>,

    /// Development-only aliases
    #[serde(default, rename = "devAlias", skip_serializing_if = "Option::is_none")]
    pub dev_alias: Option<BTreeMap<String, String>>,

    /// Declared entry files; only the first becomes the migrated entry point
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<String>,

    /// Migrated entry point (`src/<first output>`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,

    /// Resolvable dependency entries (name -> version)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,

    /// Development-only dependency entries
    #[serde(
        default,
        rename = "devDependencies",
        skip_serializing_if = "Option::is_none"
    )]
    pub dev_dependencies: Option<BTreeMap<String, String>>,

    /// Runtime-loader engine declarations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engines: Option<BTreeMap<String, String>>,

    /// Extra arguments for the downstream build
    #[serde(default, rename = "buildArgs", skip_serializing_if = "Option::is_none")]
    pub build_args: Option<String>,

    /// Unknown spm fields, passed through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse manifest content.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).with_context(|| "failed to parse package.json")
    }

    /// Whether this manifest carries the legacy marker field.
    pub fn is_legacy(&self) -> bool {
        self.family.is_some()
    }

    /// Serialize the manifest as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).with_context(|| "failed to serialize package.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_manifest() {
        let content = r#"{
            "name": "widget",
            "family": "arale",
            "version": "1.2.0",
            "spm": {
                "alias": { "base": "arale/base/1.0.1" },
                "output": ["widget.js", "extra.js"]
            }
        }"#;

        let manifest = Manifest::parse(content).unwrap();
        assert_eq!(manifest.name, "widget");
        assert_eq!(manifest.family.as_deref(), Some("arale"));
        assert_eq!(manifest.version, "1.2.0");
        assert!(manifest.is_legacy());
        assert_eq!(manifest.spm.alias.len(), 1);
        assert_eq!(manifest.spm.output, vec!["widget.js", "extra.js"]);
        assert!(manifest.spm.dev_alias.is_none());
    }

    #[test]
    fn test_parse_without_family() {
        let content = r#"{
            "name": "widget",
            "version": "1.2.0",
            "spm": { "output": ["widget.js"] }
        }"#;

        let manifest = Manifest::parse(content).unwrap();
        assert!(!manifest.is_legacy());
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let content = r#"{
            "name": "widget",
            "family": "arale",
            "version": "1.2.0",
            "description": "a widget",
            "spm": {
                "output": ["widget.js"],
                "styleBox": true
            }
        }"#;

        let manifest = Manifest::parse(content).unwrap();
        assert_eq!(
            manifest.extra.get("description"),
            Some(&Value::String("a widget".to_string()))
        );
        assert_eq!(manifest.spm.extra.get("styleBox"), Some(&Value::Bool(true)));

        let out = manifest.to_json_pretty().unwrap();
        assert!(out.contains("\"description\""));
        assert!(out.contains("\"styleBox\""));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Manifest::parse("not json").is_err());
    }

    #[test]
    fn test_serialization_omits_empty_sections() {
        let content = r#"{
            "name": "widget",
            "family": "arale",
            "version": "1.2.0",
            "spm": { "output": ["widget.js"] }
        }"#;

        let manifest = Manifest::parse(content).unwrap();
        let out = manifest.to_json_pretty().unwrap();
        assert!(!out.contains("\"alias\""));
        assert!(!out.contains("\"devAlias\""));
        assert!(!out.contains("\"tests\""));
    }
}

//! Test fixtures for legacy packages.
//!
//! Builds complete on-disk spm 2.x package trees so ops tests exercise
//! the real scan/rewrite/migrate pipeline.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use serde_json::{json, Map, Value};

/// Fixture for a legacy package tree.
#[derive(Debug, Clone)]
pub struct LegacyPackageFixture {
    /// Package name.
    pub name: String,
    /// Legacy group marker; `None` builds a non-migratable package.
    pub family: Option<String>,
    /// Package version.
    pub version: String,
    /// `spm.alias` entries.
    pub alias: BTreeMap<String, String>,
    /// `spm.devAlias` entries.
    pub dev_alias: BTreeMap<String, String>,
    /// `spm.output` entries.
    pub output: Vec<String>,
    /// Files to write (path relative to the package root -> content).
    pub files: Vec<(String, String)>,
}

impl LegacyPackageFixture {
    /// A small but representative legacy widget package: jQuery and a
    /// namespaced alias in `src/`, a builtin-renamed assertion library
    /// and a local-module reference in `tests/`.
    pub fn basic() -> Self {
        let mut alias = BTreeMap::new();
        alias.insert("$".to_string(), "$".to_string());
        alias.insert("base".to_string(), "arale/base/1.0.1".to_string());

        let mut dev_alias = BTreeMap::new();
        dev_alias.insert("events".to_string(), "arale/events/1.1.0".to_string());

        let widget = r#"define(function(require, exports, module) {
  var $ = require('$');
  var Base = require('base');
  var helper = require('helper');
  module.exports = Base.extend({});
});
"#;

        let helper = r#"define(function(require, exports, module) {
  module.exports = {};
});
"#;

        let spec = r#"var expect = require('expect');
var Widget = require('widget');

describe('widget', function() {
  it('works', function() {
    expect(Widget).to.be.ok();
  });
});
"#;

        let files = vec![
            ("src/widget.js".to_string(), widget.to_string()),
            ("src/helper.js".to_string(), helper.to_string()),
            ("tests/widget-spec.js".to_string(), spec.to_string()),
        ];

        LegacyPackageFixture {
            name: "widget".to_string(),
            family: Some("arale".to_string()),
            version: "1.0.0".to_string(),
            alias,
            dev_alias,
            output: vec!["widget.js".to_string()],
            files,
        }
    }

    /// Drop the legacy marker field.
    pub fn without_family(mut self) -> Self {
        self.family = None;
        self
    }

    /// Add a file to the package tree.
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push((path.into(), content.into()));
        self
    }

    /// Add an alias entry.
    pub fn with_alias(mut self, id: impl Into<String>, location: impl Into<String>) -> Self {
        self.alias.insert(id.into(), location.into());
        self
    }

    /// Render the `package.json` content.
    pub fn manifest_json(&self) -> String {
        let mut spm = Map::new();
        spm.insert("alias".to_string(), json!(self.alias));
        if !self.dev_alias.is_empty() {
            spm.insert("devAlias".to_string(), json!(self.dev_alias));
        }
        spm.insert("output".to_string(), json!(self.output));

        let mut root = Map::new();
        root.insert("name".to_string(), json!(self.name));
        if let Some(ref family) = self.family {
            root.insert("family".to_string(), json!(family));
        }
        root.insert("version".to_string(), json!(self.version));
        root.insert("spm".to_string(), Value::Object(spm));

        serde_json::to_string_pretty(&Value::Object(root)).unwrap()
    }

    /// Write the package tree under `root`.
    pub fn write_to(&self, root: &Path) -> Result<()> {
        std::fs::create_dir_all(root)?;
        std::fs::write(root.join("package.json"), self.manifest_json())?;

        for (rel, content) in &self.files {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
        }

        // Every migratable package has a source tree.
        std::fs::create_dir_all(root.join("src"))?;

        Ok(())
    }
}

//! The individual resolution rules.

use std::collections::BTreeSet;

use crate::core::alias::AliasTable;
use crate::core::location::LegacyLocation;

/// A single resolution strategy: given a short id, maybe produce a
/// canonical id. Rules are tried in a fixed order; the first to answer
/// wins.
pub trait ResolveRule {
    /// Rule name, for the resolution log.
    fn name(&self) -> &'static str;

    /// Resolve `id`, or decline.
    fn apply(&self, id: &str) -> Option<String>;
}

/// Fixed renames for identifiers that predate the alias convention.
#[derive(Debug, Default)]
pub struct BuiltinRenameRule;

impl ResolveRule for BuiltinRenameRule {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn apply(&self, id: &str) -> Option<String> {
        match id {
            "$" => Some("jquery".to_string()),
            "expect" => Some("expect.js".to_string()),
            _ => None,
        }
    }
}

/// Handlebars ships under fixed names regardless of how it is aliased:
/// locations with a runtime subpath become `handlebars-runtime`, bare
/// handlebars locations become `handlebars`. Takes precedence over plain
/// alias derivation.
#[derive(Debug)]
pub struct HandlebarsRule {
    alias: AliasTable,
}

impl HandlebarsRule {
    pub fn new(alias: AliasTable) -> Self {
        HandlebarsRule { alias }
    }
}

impl ResolveRule for HandlebarsRule {
    fn name(&self) -> &'static str {
        "handlebars"
    }

    fn apply(&self, id: &str) -> Option<String> {
        let location = LegacyLocation::parse(self.alias.get(id)?);
        if location.is_handlebars_runtime() {
            return Some("handlebars-runtime".to_string());
        }
        if location.canonical_name() == "handlebars" {
            return Some("handlebars".to_string());
        }
        None
    }
}

/// Aliased identifiers become the canonical name of their legacy
/// location.
#[derive(Debug)]
pub struct AliasRule {
    alias: AliasTable,
}

impl AliasRule {
    pub fn new(alias: AliasTable) -> Self {
        AliasRule { alias }
    }
}

impl ResolveRule for AliasRule {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn apply(&self, id: &str) -> Option<String> {
        self.alias
            .get(id)
            .map(|location| LegacyLocation::parse(location).canonical_name())
    }
}

/// Identifiers naming a sibling source module become relative references
/// into the `src` directory.
#[derive(Debug)]
pub struct LocalModuleRule {
    modules: BTreeSet<String>,
}

impl LocalModuleRule {
    pub fn new(modules: BTreeSet<String>) -> Self {
        LocalModuleRule { modules }
    }
}

impl ResolveRule for LocalModuleRule {
    fn name(&self) -> &'static str {
        "local"
    }

    fn apply(&self, id: &str) -> Option<String> {
        if self.modules.contains(id) {
            Some(format!("../src/{}", id))
        } else {
            None
        }
    }
}

//! Short-identifier resolution.
//!
//! Resolution is an ordered chain of independent rules tried in a fixed
//! precedence order. The chain always terminates with some string;
//! identifiers no rule claims pass through unchanged.

mod rules;

pub use rules::{AliasRule, BuiltinRenameRule, HandlebarsRule, LocalModuleRule, ResolveRule};

use std::collections::BTreeSet;

use crate::core::alias::AliasTable;

/// Resolves short module identifiers to canonical identifiers.
pub struct Resolver {
    rules: Vec<Box<dyn ResolveRule>>,
}

impl Resolver {
    /// Build the standard rule chain over an alias table and the local
    /// source module set.
    pub fn new(alias: AliasTable, local_modules: BTreeSet<String>) -> Self {
        Resolver {
            rules: vec![
                Box::new(BuiltinRenameRule),
                Box::new(HandlebarsRule::new(alias.clone())),
                Box::new(AliasRule::new(alias)),
                Box::new(LocalModuleRule::new(local_modules)),
            ],
        }
    }

    /// Resolve a short identifier to its canonical form.
    pub fn resolve(&self, id: &str) -> String {
        for rule in &self.rules {
            if let Some(resolved) = rule.apply(id) {
                tracing::debug!("resolve {} -> {} ({})", id, resolved, rule.name());
                return resolved;
            }
        }
        tracing::debug!("resolve {} -> {} (identity)", id, id);
        id.to_string()
    }
}

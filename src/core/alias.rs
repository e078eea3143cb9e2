//! Alias tables from legacy manifests.

use std::collections::BTreeMap;

use crate::core::manifest::Manifest;

/// Mapping from short module identifiers to legacy location strings.
///
/// Built once per migration run as the merged view of `spm.alias` and
/// `spm.devAlias`; dev entries shadow prod entries on key collision.
/// Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    /// Build the merged alias table from a manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut entries = manifest.spm.alias.clone();
        if let Some(ref dev) = manifest.spm.dev_alias {
            for (id, location) in dev {
                entries.insert(id.clone(), location.clone());
            }
        }
        AliasTable { entries }
    }

    /// Look up the legacy location for a short identifier.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Whether the table has an entry for this identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

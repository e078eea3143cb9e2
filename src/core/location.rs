//! Legacy module location strings.
//!
//! A legacy location has the shape `group/name/version[/subpath]`, e.g.
//! `arale/base/1.0.1` or `gallery/jquery/1.7.2/jquery`. The resolver and
//! the manifest migrator both derive identity from this shape.

use std::fmt;

use regex::Regex;

/// Group whose packages publish under their bare name.
const GALLERY_GROUP: &str = "gallery";

/// A parsed legacy module location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyLocation {
    raw: String,
}

impl LegacyLocation {
    /// Parse a location string. Parsing never fails; a string with no
    /// `/` separators is a degenerate single-segment location.
    pub fn parse(raw: impl Into<String>) -> Self {
        LegacyLocation { raw: raw.into() }
    }

    /// The raw location string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The canonical namespaced name: `group-name`, bare `name` when the
    /// group is `gallery`, or the raw string when there is no group.
    pub fn canonical_name(&self) -> String {
        let segments: Vec<&str> = self.raw.split('/').collect();
        if segments.len() > 1 {
            if segments[0] == GALLERY_GROUP {
                segments[1].to_string()
            } else {
                format!("{}-{}", segments[0], segments[1])
            }
        } else {
            self.raw.clone()
        }
    }

    /// The declared version, i.e. the third path segment.
    pub fn version(&self) -> Option<&str> {
        self.raw.split('/').nth(2).filter(|s| !s.is_empty())
    }

    /// Whether this location points at the handlebars runtime build.
    pub fn is_handlebars_runtime(&self) -> bool {
        let re = Regex::new(r"handlebars/[0-9.]+/runtime").unwrap();
        re.is_match(&self.raw)
    }
}

impl fmt::Display for LegacyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

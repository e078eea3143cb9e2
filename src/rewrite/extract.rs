//! Module-load call extraction.
//!
//! A pure scan of source text for `require(<string literal>)` call
//! expressions, returning byte spans so the rewriter can reconstruct the
//! text in a single pass. Calls with computed or non-literal arguments
//! never match and are left alone.

use std::ops::Range;

use regex::Regex;

/// A module-load call found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireCall {
    /// Byte span of the whole call expression.
    pub span: Range<usize>,
    /// The string-literal argument.
    pub target: String,
}

/// Extract every `require(<string literal>)` call from `source`.
///
/// Spans are ascending and non-overlapping. Literals containing escapes
/// are not treated as plain targets and never match.
pub fn extract_require_calls(source: &str) -> Vec<RequireCall> {
    let re = Regex::new(r#"\brequire\s*\(\s*(?:'([^'\\]*)'|"([^"\\]*)")\s*\)"#).unwrap();

    let mut calls = Vec::new();
    for cap in re.captures_iter(source) {
        let whole = cap.get(0).expect("capture 0 always present");
        let target = cap
            .get(1)
            .or_else(|| cap.get(2))
            .map_or("", |m| m.as_str());

        calls.push(RequireCall {
            span: whole.start()..whole.end(),
            target: target.to_string(),
        });
    }
    calls
}

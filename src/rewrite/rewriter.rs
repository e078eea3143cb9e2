//! Call-site rewriting.

use crate::resolver::Resolver;
use crate::rewrite::extract::extract_require_calls;

/// Rewrite every module-load call in `source` through the resolver,
/// re-quoting the resolved identifier. All other text is preserved
/// verbatim.
///
/// Not idempotent: a second pass may re-resolve already-canonical
/// identifiers that collide with alias keys, so this runs exactly once
/// per migration.
pub fn rewrite_source(source: &str, resolver: &Resolver) -> String {
    let calls = extract_require_calls(source);
    if calls.is_empty() {
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for call in calls {
        out.push_str(&source[cursor..call.span.start]);
        out.push_str("require('");
        out.push_str(&resolver.resolve(&call.target));
        out.push_str("')");
        cursor = call.span.end;
    }
    out.push_str(&source[cursor..]);
    out
}

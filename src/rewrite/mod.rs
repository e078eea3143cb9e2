//! Call-site scanning and rewriting.
//!
//! Extraction is a pure function from source text to `(span, literal)`
//! pairs; rewriting is a single left-to-right reconstruction pass over
//! those spans. No scanner state is shared between files.

pub mod extract;
pub mod rewriter;

pub use extract::{extract_require_calls, RequireCall};
pub use rewriter::rewrite_source;

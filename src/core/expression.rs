//! Formula rewriting
//!
//! Formula spans are passed through syntactically. The only rewrite is
//! turning `[a, b, c]` array literals into `(list a b c)`.

use regex::Captures;

use super::context::ARRAY_LITERAL_PATTERN;

/// Replace every single-level `[ ... ]` span in `expr` with a list literal.
///
/// Spans run from a `[` to the nearest following `]`, so nested brackets are
/// not balanced. Output of the rewrite is not scanned again.
pub fn rewrite_arrays(expr: &str) -> String {
    let rewritten = ARRAY_LITERAL_PATTERN.replace_all(expr, |caps: &Captures| {
        let parts: Vec<&str> = caps[1].split(',').map(str::trim).collect();
        format!("(list {})", parts.join(" "))
    });
    tracing::trace!(original = expr, rewritten = %rewritten, "rewrote expression");
    rewritten.into_owned()
}

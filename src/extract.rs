//! Comment/declaration scanner for C-style headers.
//!
//! A single multi-line regex pairs each `/** ... */` block comment with
//! the declaration fragment that follows it. This is narrow pattern
//! matching, not a C parser: anything that fails to match (unterminated
//! comments, comments not followed by a declaration) is skipped.

use crate::model::{Decl, DeclMap};
use regex::Regex;
use std::sync::LazyLock;

/// A `/**` comment whose body cannot contain `*/`, closed by `*/`
/// immediately followed by a newline, then a declaration fragment running
/// to a `;` at end of line or to an opening `{`.
static RE_DOC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)/\*\*(?P<text>(?:[^*]|\*[^/])*)\*/\n(?P<decl>[^;{]*(?:;$|\{))").unwrap()
});

/// Extract all documented declarations from header text, in scan order.
pub fn extract(text: &str) -> DeclMap {
    let mut decls = DeclMap::default();
    for caps in RE_DOC.captures_iter(text) {
        if let Some(decl) = Decl::new(&caps["text"], &caps["decl"]) {
            decls.insert(decl);
        }
    }
    decls
}

//! Data model for extracted declarations — format-agnostic.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// Runs of non-identifier characters, for splitting.
static RE_NON_IDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Up to 4 leading spaces at the head of a line — one level of
/// conventional comment indentation.
static RE_COMMENT_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^ {1,4}").unwrap());

/// A single documented declaration from a header file.
#[derive(Debug, Clone)]
pub struct Decl {
    /// The identifier the comment documents.
    pub name: String,
    /// Declaration text, whitespace-collapsed, trailing `;`/`{` stripped.
    pub signature: String,
    /// Comment body with one level of leading indentation removed.
    pub comment: String,
}

impl Decl {
    /// Build a record from a raw (comment, declaration) pair.
    ///
    /// The name is the last identifier-shaped word before the opening
    /// parenthesis, or of the whole declaration when there is none.
    /// Returns `None` when the declaration contains no identifier at all.
    pub fn new(comment: &str, decl: &str) -> Option<Self> {
        let name_source = match decl.find('(') {
            Some(lp) => &decl[..lp],
            None => decl.trim_end_matches(';'),
        };
        let name = last_word(name_source)?.to_string();

        let signature = decl
            .trim_end_matches([';', '{'])
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        let comment = RE_COMMENT_INDENT
            .replace_all(comment.trim_end(), "")
            .into_owned();

        Some(Decl {
            name,
            signature,
            comment,
        })
    }
}

/// Returns the last identifier-shaped word in `s`.
fn last_word(s: &str) -> Option<&str> {
    RE_NON_IDENT.split(s.trim()).filter(|w| !w.is_empty()).last()
}

/// Insertion-ordered mapping from declaration name to record, one per
/// header file, built in file scan order.
///
/// Insertion is last-wins: a later declaration with an already-seen name
/// replaces the earlier record (keeping its original position). Shadowed
/// names are recorded so callers can surface a diagnostic.
#[derive(Debug, Default)]
pub struct DeclMap {
    decls: IndexMap<String, Decl>,
    shadowed: Vec<String>,
}

impl DeclMap {
    /// Insert a record under its derived name.
    pub fn insert(&mut self, decl: Decl) {
        let name = decl.name.clone();
        if self.decls.insert(name.clone(), decl).is_some() {
            self.shadowed.push(name);
        }
    }

    /// Look up a declaration by name.
    pub fn get(&self, name: &str) -> Option<&Decl> {
        self.decls.get(name)
    }

    /// All records, in header scan order.
    pub fn iter(&self) -> impl Iterator<Item = &Decl> {
        self.decls.values()
    }

    /// Names overwritten by a later declaration with the same name.
    pub fn shadowed(&self) -> &[String] {
        &self.shadowed
    }
}

//! Template expansion — splice rendered declarations into insertion
//! markers, copying everything else verbatim.

use crate::cache::HeaderCache;
use anyhow::{anyhow, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// An insertion marker: `{{insert "header.h" name ...}}`. The names are
/// optional; with none, every declaration in the header is inserted in
/// scan order.
static RE_INSERT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{insert "(?P<file>[^"]*)"(?P<names>(?:\s+\w+)+)?\s*\}\}"#).unwrap()
});

/// Expands insertion markers in a template, resolving each referenced
/// header through a per-run cache.
#[derive(Debug, Default)]
pub struct Expander {
    cache: HeaderCache,
}

impl Expander {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand every marker in `template` and return the full output
    /// document. Fails on an unreadable header or a name not present in
    /// its header's declarations.
    pub fn expand(&mut self, template: &str) -> Result<String> {
        let mut out = String::new();
        let mut pos = 0;

        for caps in RE_INSERT.captures_iter(template) {
            let marker = caps.get(0).unwrap();
            out.push_str(&template[pos..marker.start()]);
            pos = marker.end();

            let file = &caps["file"];
            let decls = self.cache.load(Path::new(file))?;

            out.push_str(&format!(
                "<!-- begin generated section from \"{}\", DO NOT EDIT -->\n",
                file
            ));
            match caps.name("names") {
                Some(names) => {
                    for name in names.as_str().split_whitespace() {
                        let decl = decls
                            .get(name)
                            .ok_or_else(|| anyhow!("no declaration named `{}` in {}", name, file))?;
                        out.push_str(&decl.markdown());
                        out.push('\n');
                    }
                }
                None => {
                    for decl in decls.iter() {
                        out.push_str(&decl.markdown());
                        out.push('\n');
                    }
                }
            }
            out.push_str("<!-- end generated section -->\n");
        }

        out.push_str(&template[pos..]);
        Ok(out)
    }
}

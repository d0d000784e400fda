//! Per-run memoization of parsed header files.

use crate::extract::extract;
use crate::model::DeclMap;
use anyhow::{Context, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maps header paths to their extracted declarations, so a header
/// referenced by several markers is read and scanned only once per run.
#[derive(Debug, Default)]
pub struct HeaderCache {
    parsed: HashMap<PathBuf, DeclMap>,
}

impl HeaderCache {
    /// Load declarations for `path`, reading and scanning the file on
    /// first reference. Warns once per duplicate declaration name found
    /// in the header.
    pub fn load(&mut self, path: &Path) -> Result<&DeclMap> {
        match self.parsed.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read header {}", path.display()))?;
                let decls = extract(&text);
                for name in decls.shadowed() {
                    eprintln!(
                        "warning: duplicate declaration name `{}` in {}, keeping the last",
                        name,
                        path.display()
                    );
                }
                Ok(entry.insert(decls))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_extracts_declarations() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"/** doc */\nint add(int a, int b);\n").unwrap();

        let mut cache = HeaderCache::default();
        let decls = cache.load(file.path()).unwrap();
        assert!(decls.get("add").is_some());
    }

    #[test]
    fn second_load_uses_the_cached_scan() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"/** doc */\nint add(int a, int b);\n").unwrap();

        let mut cache = HeaderCache::default();
        assert!(cache.load(file.path()).unwrap().get("add").is_some());

        // Rewriting the file must not be observable through the cache.
        fs::write(file.path(), "/** doc */\nint sub(int a, int b);\n").unwrap();
        let decls = cache.load(file.path()).unwrap();
        assert!(decls.get("add").is_some());
        assert!(decls.get("sub").is_none());
    }

    #[test]
    fn missing_header_reports_the_path() {
        let mut cache = HeaderCache::default();
        let err = cache.load(Path::new("no/such/header.h")).unwrap_err();
        assert!(err.to_string().contains("no/such/header.h"));
    }
}

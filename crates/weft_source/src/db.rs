//! The database of loaded source files.

use crate::file::SourceFile;
use crate::span::{FileId, ResolvedSpan, Span};
use std::io;
use std::path::{Path, PathBuf};

/// Owns every source file loaded during one front-end invocation and
/// resolves [`Span`]s for diagnostic rendering.
pub struct SourceDb {
    files: Vec<SourceFile>,
}

impl SourceDb {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Loads a file from disk, expanding a leading `~` to the home
    /// directory first.
    ///
    /// The stored path is the expanded one, so diagnostics show the path
    /// that was actually opened.
    pub fn load_file(&mut self, path: &Path) -> Result<FileId, io::Error> {
        let expanded = expand_home(path);
        let text = std::fs::read_to_string(&expanded)?;
        Ok(self.add_source(expanded, text))
    }

    /// Registers in-memory text under a label used in diagnostics.
    pub fn add_source(&mut self, label: impl Into<PathBuf>, text: String) -> FileId {
        let id = FileId::from_raw(self.files.len() as u32);
        self.files.push(SourceFile::new(id, label.into(), text));
        id
    }

    /// Returns the file registered under `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this database.
    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.as_raw() as usize]
    }

    /// Resolves a span to path and line/column coordinates.
    pub fn resolve(&self, span: Span) -> ResolvedSpan {
        let file = self.file(span.file);
        let (line, column) = file.line_col(span.start);
        ResolvedSpan {
            path: file.path.clone(),
            line,
            column,
        }
    }

    /// Returns the source text a span covers.
    pub fn snippet(&self, span: Span) -> &str {
        let file = self.file(span.file);
        &file.text[span.start as usize..span.end as usize]
    }
}

impl Default for SourceDb {
    fn default() -> Self {
        Self::new()
    }
}

/// Expands a leading `~` or `~/` path component to `$HOME`.
fn expand_home(path: &Path) -> PathBuf {
    let Some(rest) = path.to_str().and_then(|s| s.strip_prefix('~')) else {
        return path.to_path_buf();
    };
    if !rest.is_empty() && !rest.starts_with('/') {
        // `~user` expansion is not supported; leave it alone.
        return path.to_path_buf();
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest.trim_start_matches('/')),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn add_and_lookup() {
        let mut db = SourceDb::new();
        let id = db.add_source("a.blif", ".model a\n".to_string());
        assert_eq!(db.file(id).text, ".model a\n");
    }

    #[test]
    fn resolve_points_at_line() {
        let mut db = SourceDb::new();
        let id = db.add_source("top.blif", ".model top\n.inputs a\n".to_string());
        let span = Span::new(id, 11, 18); // ".inputs"
        let resolved = db.resolve(span);
        assert_eq!(resolved.path, PathBuf::from("top.blif"));
        assert_eq!(resolved.line, 2);
        assert_eq!(resolved.column, 1);
    }

    #[test]
    fn snippet_returns_covered_text() {
        let mut db = SourceDb::new();
        let id = db.add_source("top.blif", ".model top".to_string());
        assert_eq!(db.snippet(Span::new(id, 7, 10)), "top");
    }

    #[test]
    fn load_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ".model t\n.end\n").unwrap();

        let mut db = SourceDb::new();
        let id = db.load_file(file.path()).unwrap();
        assert_eq!(db.file(id).text, ".model t\n.end\n");
    }

    #[test]
    fn load_file_missing_is_io_error() {
        let mut db = SourceDb::new();
        assert!(db.load_file(Path::new("/nonexistent/missing.blif")).is_err());
    }

    #[test]
    fn expand_home_leading_tilde() {
        std::env::set_var("HOME", "/home/tester");
        assert_eq!(
            expand_home(Path::new("~/designs/top.blif")),
            PathBuf::from("/home/tester/designs/top.blif")
        );
        // `~user` forms pass through untouched.
        assert_eq!(
            expand_home(Path::new("~alice/top.blif")),
            PathBuf::from("~alice/top.blif")
        );
        assert_eq!(expand_home(Path::new("plain.blif")), PathBuf::from("plain.blif"));
    }
}

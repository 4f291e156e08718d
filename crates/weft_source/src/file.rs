//! One loaded source file with fast line/column lookup.

use crate::span::FileId;
use std::path::PathBuf;

/// A source file held by the [`SourceDb`](crate::SourceDb).
///
/// Line-start offsets are computed once at load time so that resolving a
/// byte offset to line/column is a binary search.
pub struct SourceFile {
    /// The id this file was registered under.
    pub id: FileId,
    /// Filesystem path, or a synthetic label for in-memory input.
    pub path: PathBuf,
    /// The complete file text.
    pub text: String,
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Wraps loaded text, indexing its line starts.
    pub fn new(id: FileId, path: PathBuf, text: String) -> Self {
        let line_starts = line_starts(&text);
        Self {
            id,
            path,
            text,
            line_starts,
        }
    }

    /// Converts a byte offset to 1-indexed (line, column).
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        (idx as u32 + 1, offset - self.line_starts[idx] + 1)
    }

    /// Returns the full text of the line containing `offset`.
    pub fn line_text(&self, offset: u32) -> &str {
        let offset = offset as usize;
        let start = self.text[..offset].rfind('\n').map_or(0, |p| p + 1);
        let end = self.text[offset..]
            .find('\n')
            .map_or(self.text.len(), |p| offset + p);
        &self.text[start..end]
    }
}

fn line_starts(text: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(text: &str) -> SourceFile {
        SourceFile::new(FileId::from_raw(0), PathBuf::from("t.blif"), text.to_string())
    }

    #[test]
    fn line_col_at_starts_and_middles() {
        let f = file(".model top\n.inputs a\n.end\n");
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_col(7), (1, 8));
        assert_eq!(f.line_col(11), (2, 1));
        assert_eq!(f.line_col(19), (2, 9));
        assert_eq!(f.line_col(21), (3, 1));
    }

    #[test]
    fn line_text_extraction() {
        let f = file(".model top\n.inputs a\n.end");
        assert_eq!(f.line_text(0), ".model top");
        assert_eq!(f.line_text(13), ".inputs a");
        assert_eq!(f.line_text(22), ".end");
    }

    #[test]
    fn empty_text() {
        let f = file("");
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_text(0), "");
    }
}

//! Source map - owns the text of every file loaded in a compilation.
//!
//! The compiler is single-file per invocation (see the driver's CLI
//! surface), but the map is kept general so snippet extraction and
//! line lookup have one obvious home.

use super::FileId;
use crate::error::{SourceMapError, SourceMapResult};

/// One loaded source file: its path and full text, plus a precomputed
/// table of line-start byte offsets for fast line/column lookups.
pub struct SourceFile {
    pub path: String,
    pub content: String,
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let mut line_starts = vec![0];
        for (i, b) in content.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            path: path.into(),
            content,
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the text of the given 1-based line number, without its
    /// trailing newline.
    pub fn line_text(&self, line: u32) -> SourceMapResult<&str> {
        let idx = line
            .checked_sub(1)
            .ok_or(SourceMapError::InvalidLineNumber {
                line: line as usize,
                max_lines: self.line_count(),
            })? as usize;
        let start = *self
            .line_starts
            .get(idx)
            .ok_or(SourceMapError::InvalidLineNumber {
                line: line as usize,
                max_lines: self.line_count(),
            })?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|&s| s.saturating_sub(1))
            .unwrap_or(self.content.len());
        Ok(self.content[start..end.max(start)].trim_end_matches('\r'))
    }
}

/// Owns every [`SourceFile`] loaded so far, keyed by [`FileId`].
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) -> FileId {
        let id = FileId::new(self.files.len());
        self.files.push(SourceFile::new(path, content));
        id
    }

    pub fn get(&self, id: FileId) -> SourceMapResult<&SourceFile> {
        self.files
            .get(id.index())
            .ok_or_else(|| SourceMapError::FileNotFound(format!("file id {}", id.0)))
    }
}

impl Default for SourceMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_text_splits_on_newlines() {
        let mut map = SourceMap::new();
        let id = map.add_file("t.ada", "line one\nline two\nline three");
        let file = map.get(id).unwrap();
        assert_eq!(file.line_text(1).unwrap(), "line one");
        assert_eq!(file.line_text(2).unwrap(), "line two");
        assert_eq!(file.line_text(3).unwrap(), "line three");
    }

    #[test]
    fn unknown_file_id_errors() {
        let map = SourceMap::new();
        assert!(map.get(FileId::new(0)).is_err());
    }
}

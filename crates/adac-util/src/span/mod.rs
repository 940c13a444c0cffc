//! Span module - source location tracking.
//!
//! A [`Span`] identifies a range of source text by byte offsets plus the
//! 1-based line/column of its start, so diagnostics can point at exact
//! source locations without re-scanning the file.

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// Identifies one source file loaded into a [`SourceMap`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    pub const DUMMY: FileId = FileId(0);

    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// A range in source code, with line/column recorded for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in the source file.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Line number of `start` (1-based).
    pub line: u32,
    /// Column number of `start` (1-based, in characters).
    pub column: u32,
    /// The file this span belongs to.
    pub file_id: FileId,
}

impl Span {
    /// A span carrying no useful location, for synthesized nodes and tests.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    #[inline]
    pub fn with_file(start: usize, end: usize, file_id: FileId, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id,
        }
    }

    /// A zero-width span at a single line/column, used when only the
    /// textual location (not the byte range) is known.
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Merge two spans from the same file into the range spanning both.
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line,
            column: self.column,
            file_id: self.file_id,
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_span_is_zeroed() {
        assert_eq!(Span::DUMMY.start, 0);
        assert_eq!(Span::DUMMY.end, 0);
    }

    #[test]
    fn to_spans_the_union() {
        let a = Span::new(0, 4, 1, 1);
        let b = Span::new(10, 14, 1, 11);
        let merged = a.to(b);
        assert_eq!(merged.start, 0);
        assert_eq!(merged.end, 14);
    }
}

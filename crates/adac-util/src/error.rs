//! Per-concern error types for the foundation crate.
//!
//! Each subsystem gets its own small `thiserror` enum rather than one
//! grab-bag error, so callers can match on exactly the failures their
//! subsystem can produce.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceMapError {
    #[error("no such source file: {0}")]
    FileNotFound(String),
    #[error("line {line} out of range (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("interned name index {0} out of range")]
    NotFound(u32),
}

pub type NameResult<T> = std::result::Result<T, NameError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexVecError {
    #[error("index {index} out of bounds (length {length})")]
    OutOfBounds { index: usize, length: usize },
}

pub type IndexVecResult<T> = std::result::Result<T, IndexVecError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticError {
    #[error("invalid diagnostic code: {0}")]
    InvalidCode(String),
}

pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

/// Zero-sized marker propagated with `?` once a phase has decided to stop.
///
/// Mirrors the original implementation's exception-based `stop_on_error`:
/// a phase that hits a fatal condition reports a proper [`crate::diagnostic::Diagnostic`]
/// to the [`crate::diagnostic::Handler`] first, then returns `Err(Fatal)` so the
/// caller unwinds without needing to inspect the diagnostic again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("a previously reported error is fatal to this phase")]
pub struct Fatal;

pub type FatalResult<T> = std::result::Result<T, Fatal>;

//! Driver-level error type.
//!
//! Everything below this layer reports through [`adac_util::Handler`] and
//! propagates `Fatal` with `?`; this enum only exists for failures the
//! driver itself causes (bad CLI usage, file I/O) before or after a
//! [`crate::Session`] has a handler to report into.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("cannot read input file {0}: {1}")]
    InputUnreadable(PathBuf, std::io::Error),

    #[error("cannot write {what} to {path}: {source}")]
    OutputUnwritable {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("compilation failed: {0} error(s) reported")]
    CompilationFailed(usize),

    #[error("code generation failed: {0}")]
    Generation(String),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type DriverResult<T> = std::result::Result<T, DriverError>;

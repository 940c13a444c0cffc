use thiserror::Error;

/// Failures a [`crate::SymbolTable`] can report on its own; lookup/duplicate
/// diagnostics that need source-span context are re-raised by the caller
/// (`adac-par`) through the shared [`adac_util::Handler`] instead of being
/// emitted here directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("'{name}' is already declared at depth {depth}")]
    Duplicate { name: String, depth: usize },
    #[error("'{name}' is not declared")]
    NotFound { name: String },
}

pub type SymbolResult<T> = std::result::Result<T, SymbolError>;

//! Foundation types shared by every phase of the compiler: source spans,
//! diagnostics, identifier interning, and typed-index arenas.
//!
//! Nothing in this crate knows about Ada syntax or semantics; it exists so
//! `adac-lex`, `adac-sym`, `adac-par`, `adac-tac`, and `adac-asm` all speak
//! the same small vocabulary of `Span`, `Name`, `Handler`, and `IndexVec`.

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::Fatal;
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceMap, Span};
pub use symbol::{Interner, Name};

//! Scoped symbol table: arena-backed symbols, a never-popped scope stack
//! for historical lookups, and string-literal interning.
//!
//! The scope stack never shrinks. [`SymbolTable::exit_scope`] only moves
//! `current_depth` back down; the `HashMap` for the scope being left
//! stays put in `scopes`. A nested procedure's declarations are therefore
//! still sitting at their depth after the parser has moved on to the
//! next sibling, which is what lets `adac-par` re-resolve a procedure
//! body's locals when generating its activation record.

mod error;
mod symbol;
mod table;

pub use error::{SymbolError, SymbolResult};
pub use symbol::{ConstData, ConstValue, ProcData, Symbol, SymbolKind, VarData};
pub use table::{SymbolId, SymbolTable};

//! TAC-to-assembly translation: activation records, per-opcode
//! instruction translators, place-to-addressing resolution, and
//! MASM-style text assembly.
//!
//! [`generate`] is the crate's single entry point: given the flat
//! instruction stream a parse produced (via [`adac_tac::TacGenerator`]
//! or read back with [`adac_tac::TacParser`]) and the symbol table that
//! populated it, it returns a complete `.MODEL`/`.STACK`/`.DATA`/`.CODE`
//! listing as text.

pub mod convention;
pub mod error;
pub mod operand;
pub mod procedure;
pub mod program;
mod translate;

pub use convention::{Convention, Frame};
pub use error::{AsmError, AsmResult};
pub use program::generate;

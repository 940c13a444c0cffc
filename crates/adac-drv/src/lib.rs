//! Driver: wires the lexer, parser (with its symbol-table and TAC-generator
//! collaborators), and assembly generator into one CLI-driven pipeline.
//!
//! This crate owns none of the compiler's interesting logic - it is the
//! "orchestrator" named throughout `adac-par`/`adac-tac`/`adac-asm`'s doc
//! comments: read a file, run the phases §5 says run sequentially with no
//! re-entry, print a summary, choose an exit code.

pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod summary;
pub mod tokens;

pub use config::{Config, Emit};
pub use error::{DriverError, DriverResult};
pub use session::Session;

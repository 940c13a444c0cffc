//! Lexical analysis: character stream to token stream.
//!
//! [`Lexer`] skips whitespace and `--` comments, matches tokens against a
//! fixed dispatch order, and reclassifies identifiers that collide with a
//! reserved word. Errors (unrecognized characters, over-length
//! identifiers, unterminated literals, malformed numerals) are reported
//! to the shared [`adac_util::Handler`] rather than aborting the scan,
//! unless `stop_on_error` is set.

pub mod cursor;
mod lexer;

pub use lexer::Lexer;

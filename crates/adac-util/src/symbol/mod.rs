//! Identifier interning.

mod interner;

pub use interner::{Interner, Name};

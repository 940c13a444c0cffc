//! Diagnostics - collecting and reporting compiler errors and warnings.
//!
//! A [`Handler`] accumulates [`Diagnostic`]s as the compiler runs; nothing
//! is printed until the driver asks for a summary, so phases can keep
//! going after a non-fatal error (mirroring this compiler's
//! report-and-continue error model) while still tracking counts.

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SubDiagnostic};
pub use codes::{
    DiagnosticCode, E_IO_INPUT_MISSING, E_IO_OUTPUT_UNWRITABLE, E_LEX_IDENT_TOO_LONG,
    E_LEX_INVALID_NUMBER, E_LEX_UNRECOGNIZED_CHAR, E_LEX_UNTERMINATED_CHAR,
    E_LEX_UNTERMINATED_STRING, E_PAR_EXPECTED_TOKEN, E_PAR_MISMATCHED_DELIM,
    E_PAR_UNEXPECTED_EOF, E_PAR_UNEXPECTED_TOKEN, E_SEM_ASSIGN_TO_CONSTANT,
    E_SEM_ASSIGN_TO_NON_VARIABLE, E_SEM_DUPLICATE_DECL, E_SEM_PARAM_COUNT_MISMATCH,
    E_SEM_PROC_NAME_MISMATCH, E_SEM_UNDECLARED_IDENT, E_SEM_UNKNOWN_TYPE,
    E_TAC_MISSING_PROGRAM_ENTRY, E_TAC_UNRESOLVABLE_PLACE, W_TAC_UNKNOWN_OPCODE,
};
pub use level::Level;

use std::cell::RefCell;
use std::fmt;

use crate::span::Span;

/// A single reported error, warning, note, or help message.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub code: Option<DiagnosticCode>,
    pub message: String,
    pub span: Option<Span>,
    pub children: Vec<SubDiagnostic>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.span, &self.code) {
            (Some(span), Some(code)) => write!(f, "{span}: {}: {} ({code})", self.level, self.message),
            (Some(span), None) => write!(f, "{span}: {}: {}", self.level, self.message),
            (None, Some(code)) => write!(f, "{}: {} ({code})", self.level, self.message),
            (None, None) => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Accumulates diagnostics for one compilation. Not `Sync`: every phase of
/// this compiler runs sequentially on one thread, so a `RefCell` is enough
/// and avoids paying for synchronization nothing needs.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    pub fn record(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn build_error(&self, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message)
    }

    pub fn build_warning(&self, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// A snapshot of everything recorded so far, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_errors_and_warnings_separately() {
        let handler = Handler::new();
        handler
            .build_error("duplicate declaration")
            .code(E_SEM_DUPLICATE_DECL)
            .emit(&handler);
        handler.build_warning("unused variable").emit(&handler);

        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 1);
        assert!(handler.has_errors());
    }

    #[test]
    fn emit_fatal_returns_err_and_still_records() {
        let handler = Handler::new();
        let result = handler
            .build_error("missing program entry")
            .code(E_TAC_MISSING_PROGRAM_ENTRY)
            .emit_fatal(&handler);

        assert!(result.is_err());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn display_includes_span_and_code() {
        let handler = Handler::new();
        handler
            .build_error("unexpected token")
            .code(E_PAR_UNEXPECTED_TOKEN)
            .span(Span::new(0, 1, 3, 5))
            .emit(&handler);

        let d = &handler.diagnostics()[0];
        let text = d.to_string();
        assert!(text.contains("3:5"));
        assert!(text.contains("unexpected token"));
    }
}

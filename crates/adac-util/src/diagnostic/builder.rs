use super::codes::DiagnosticCode;
use super::level::Level;
use super::{Diagnostic, Handler};
use crate::error::Fatal;
use crate::span::Span;

/// A note or help message attached to a [`Diagnostic`].
#[derive(Clone, Debug)]
pub struct SubDiagnostic {
    pub level: Level,
    pub message: String,
    pub span: Option<Span>,
}

/// Fluent builder for a [`Diagnostic`], mirroring the two-line call style
/// used throughout the parser and code generator: one line to start the
/// diagnostic, one to emit it.
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    code: Option<DiagnosticCode>,
    message: String,
    span: Option<Span>,
    children: Vec<SubDiagnostic>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            code: None,
            message: message.into(),
            span: None,
            children: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn note(mut self, message: impl Into<String>) -> Self {
        self.children.push(SubDiagnostic {
            level: Level::Note,
            message: message.into(),
            span: None,
        });
        self
    }

    pub fn help(mut self, message: impl Into<String>) -> Self {
        self.children.push(SubDiagnostic {
            level: Level::Help,
            message: message.into(),
            span: None,
        });
        self
    }

    fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            code: self.code,
            message: self.message,
            span: self.span,
            children: self.children,
        }
    }

    /// Record the diagnostic and return normally.
    pub fn emit(self, handler: &Handler) {
        handler.record(self.build());
    }

    /// Record the diagnostic and return `Err(Fatal)`, for call sites that
    /// cannot usefully continue once this condition is hit.
    pub fn emit_fatal(self, handler: &Handler) -> Result<(), Fatal> {
        handler.record(self.build());
        Err(Fatal)
    }
}

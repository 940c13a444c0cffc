//! Compilation summary: per-phase error counts plus, in debug mode, the
//! first few diagnostics of each phase with their location (spec.md §7).

use adac_util::{Diagnostic, Level};

/// How many diagnostics per phase debug mode shows before eliding the rest.
const DEBUG_SHOWN_PER_PHASE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Phase {
    Lexical,
    Syntactic,
    Semantic,
    Generation,
    Io,
    Other,
}

impl Phase {
    fn of(diag: &Diagnostic) -> Phase {
        match diag.code.map(|c| c.number / 1000) {
            Some(1) => Phase::Lexical,
            Some(2) => Phase::Syntactic,
            Some(3) => Phase::Semantic,
            Some(4) => Phase::Generation,
            Some(5) => Phase::Io,
            _ => Phase::Other,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Phase::Lexical => "lexical",
            Phase::Syntactic => "syntactic",
            Phase::Semantic => "semantic",
            Phase::Generation => "tac/asm generation",
            Phase::Io => "i/o",
            Phase::Other => "other",
        }
    }

    fn all() -> [Phase; 6] {
        [
            Phase::Lexical,
            Phase::Syntactic,
            Phase::Semantic,
            Phase::Generation,
            Phase::Io,
            Phase::Other,
        ]
    }
}

/// Prints the phase-by-phase error/warning breakdown, and (in debug mode)
/// up to [`DEBUG_SHOWN_PER_PHASE`] diagnostics per phase with their
/// location. Returns the total number of errors, so the caller can decide
/// the process exit code without re-scanning the list.
pub fn print(diagnostics: &[Diagnostic], debug: bool) -> usize {
    let mut total_errors = 0;
    let mut total_warnings = 0;

    println!("compilation summary:");
    for phase in Phase::all() {
        let in_phase: Vec<&Diagnostic> = diagnostics.iter().filter(|d| Phase::of(d) == phase).collect();
        if in_phase.is_empty() {
            continue;
        }
        let errors = in_phase.iter().filter(|d| d.level == Level::Error).count();
        let warnings = in_phase.iter().filter(|d| d.level == Level::Warning).count();
        total_errors += errors;
        total_warnings += warnings;
        println!("  {}: {} error(s), {} warning(s)", phase.label(), errors, warnings);

        if debug {
            for diag in in_phase.iter().take(DEBUG_SHOWN_PER_PHASE) {
                println!("    {diag}");
            }
            if in_phase.len() > DEBUG_SHOWN_PER_PHASE {
                println!("    ... {} more", in_phase.len() - DEBUG_SHOWN_PER_PHASE);
            }
        }
    }

    println!(
        "total: {total_errors} error(s), {total_warnings} warning(s)"
    );
    total_errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use adac_util::diagnostic::{E_LEX_UNRECOGNIZED_CHAR, E_SEM_UNDECLARED_IDENT};
    use adac_util::Handler;

    #[test]
    fn counts_errors_per_phase() {
        let handler = Handler::new();
        handler
            .build_error("bad char")
            .code(E_LEX_UNRECOGNIZED_CHAR)
            .emit(&handler);
        handler
            .build_error("undeclared")
            .code(E_SEM_UNDECLARED_IDENT)
            .emit(&handler);
        handler
            .build_error("undeclared again")
            .code(E_SEM_UNDECLARED_IDENT)
            .emit(&handler);

        let total = print(&handler.diagnostics(), false);
        assert_eq!(total, 3);
    }
}

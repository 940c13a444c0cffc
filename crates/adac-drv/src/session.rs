//! Phase orchestration: one [`Session`] per compilation unit, owning the
//! `Handler` every phase reports into and deciding, per §7's propagation
//! policy, whether a later phase's preconditions still hold.

use std::fs;
use std::path::Path;

use adac_lex::Lexer;
use adac_par::{Parser, ParserConfig};
use adac_sym::SymbolTable;
use adac_tac::{TacGenerator, TacParser};
use adac_util::diagnostic::{E_IO_INPUT_MISSING, E_IO_OUTPUT_UNWRITABLE};
use adac_util::Handler;

use crate::config::{Config, Emit};
use crate::error::{DriverError, DriverResult};
use crate::tokens;

/// `stop_on_error` is never set by the driver: the default CLI surface
/// reports every error it can find in one run rather than aborting on
/// the first (see spec.md §4.3 and §7). `panic_mode_recover` is always
/// on, so a syntax error does not cascade into a wall of follow-on
/// errors once it has already been reported once.
const PARSER_CONFIG: ParserConfig = ParserConfig {
    stop_on_error: false,
    panic_mode_recover: true,
};

pub struct Session {
    config: Config,
    handler: Handler,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            handler: Handler::new(),
        }
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Runs every phase the configured [`Emit`] requires. On success the
    /// requested output has been written; on failure the handler already
    /// holds every diagnostic that explains why, and the caller (the
    /// binary's `main`) is responsible for printing the summary and
    /// choosing the process exit code - diagnostic display always runs,
    /// per §7, even when this returns `Err`.
    pub fn compile(&mut self) -> DriverResult<()> {
        let source = fs::read_to_string(&self.config.input).map_err(|e| {
            self.handler
                .build_error(format!("cannot read {}: {e}", self.config.input.display()))
                .code(E_IO_INPUT_MISSING)
                .emit(&self.handler);
            DriverError::InputUnreadable(self.config.input.clone(), e)
        })?;

        let mut symbols = SymbolTable::new();
        let mut tac = TacGenerator::new();

        let tokens = Lexer::new(&source, &self.handler, PARSER_CONFIG.stop_on_error)
            .tokenize()
            .unwrap_or_default();

        if self.config.emit == Emit::Tokens {
            let listing = tokens::render(&tokens);
            return self.write_output(&listing, "token listing");
        }

        let mut parser = Parser::new(tokens, &self.handler, &mut symbols, &mut tac, PARSER_CONFIG);
        let _ = parser.parse_program();

        if self.handler.has_errors() {
            return Err(DriverError::CompilationFailed(self.handler.error_count()));
        }

        match self.config.emit {
            Emit::Tokens => unreachable!("handled above"),
            Emit::Tac => {
                let text = tac
                    .write_output()
                    .map_err(|e| DriverError::Generation(e.to_string()))?;
                self.write_output(&text, "TAC file")
            }
            Emit::Asm => {
                let text = tac
                    .write_output()
                    .map_err(|e| DriverError::Generation(e.to_string()))?;
                // Round-trips through the text format rather than handing
                // `tac.instructions()` straight to the generator: §2's
                // data flow treats the TAC file as the canonical
                // serialization between these two phases, and the ASM
                // generator should work identically whether it was fed
                // by a fresh parse or a hand-edited `.tac` file.
                let instructions = TacParser::parse(&text);
                let asm = adac_asm::generate(&instructions, &mut symbols, &self.handler)
                    .map_err(|e| DriverError::Generation(e.to_string()))?;
                self.write_output(&asm, "assembly file")
            }
        }
    }

    fn write_output(&self, contents: &str, what: &'static str) -> DriverResult<()> {
        let path = self.config.resolved_output();
        write_file(&path, contents).map_err(|e| {
            self.handler
                .build_error(format!("cannot write {} to {}: {e}", what, path.display()))
                .code(E_IO_OUTPUT_UNWRITABLE)
                .emit(&self.handler);
            DriverError::OutputUnwritable {
                what,
                path: path.clone(),
                source: e,
            }
        })
    }
}

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_source(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".ada").unwrap();
        write!(file, "{body}").unwrap();
        file
    }

    #[test]
    fn missing_input_file_is_a_fatal_io_error() {
        let config = Config::new("/nonexistent/does-not-exist.ada".into(), None, false, false, false, false);
        let mut session = Session::new(config);
        let err = session.compile().unwrap_err();
        assert!(matches!(err, DriverError::InputUnreadable(_, _)));
        assert_eq!(session.handler().error_count(), 1);
    }

    #[test]
    fn scenario_a_arithmetic_and_assignment_succeeds() {
        let src = write_source(
            "procedure one is a, b, c : integer; begin a := 1; b := a + 2; c := a * b; end one;",
        );
        let out = NamedTempFile::with_suffix(".tac").unwrap();
        let config = Config::new(
            src.path().to_path_buf(),
            Some(out.path().to_path_buf()),
            true,
            false,
            false,
            false,
        );
        let mut session = Session::new(config);
        session.compile().unwrap();
        assert_eq!(session.handler().error_count(), 0);

        let tac_text = fs::read_to_string(out.path()).unwrap();
        assert!(tac_text.contains("a = 1"));
        assert!(tac_text.contains("ADD"));
        assert!(tac_text.contains("MUL"));
        assert!(tac_text.trim_end().ends_with("start one"));
    }

    #[test]
    fn scenario_b_undeclared_variable_skips_tac_output() {
        let src = write_source("procedure u is begin y := 10; end u;");
        let out = NamedTempFile::with_suffix(".tac").unwrap();
        let out_path = out.path().to_path_buf();
        drop(out);
        let config = Config::new(src.path().to_path_buf(), Some(out_path.clone()), true, false, false, false);
        let mut session = Session::new(config);
        let err = session.compile().unwrap_err();
        assert!(matches!(err, DriverError::CompilationFailed(1)));
        assert!(!out_path.exists());
    }
}

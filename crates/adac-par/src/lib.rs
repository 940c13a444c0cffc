//! Single-pass recursive-descent parser.
//!
//! ============================================================================
//! WHY SINGLE-PASS
//! ============================================================================
//!
//! A conventional pipeline builds a parse tree first and walks it in a
//! second pass to resolve names and emit code. This parser does not: it
//! drives [`adac_sym::SymbolTable`] insertion, offset assignment, and
//! [`adac_tac::TacGenerator`] emission directly from inside each grammar
//! production, the same turn the production recognizes the construct.
//! There is no intermediate tree.
//!
//! That collapses naturally here because the grammar is small enough that
//! every semantic action (symbol lookup, offset bump, temp allocation) is
//! a pure function of "what production am I in and what have I already
//! seen", with no later pass that needs to revisit an earlier subtree
//! with more context than it had the first time. A language with
//! overload resolution or forward-referenced types would need the tree;
//! this one does not, so building one would only be overhead.
//!
//! ============================================================================
//! GRAMMAR
//! ============================================================================
//!
//! ```text
//! Program          -> Procedure { Procedure } EOF
//! Procedure        -> "procedure" Ident [ Args ] "is" DeclarativePart
//!                     { Procedure } "begin" SeqOfStatements "end" Ident ";"
//! Args             -> "(" ArgList ")"
//! ArgList          -> OneArgSpec { ";" OneArgSpec }
//! OneArgSpec       -> [ Mode ] IdentifierList ":" TypeMark
//! Mode             -> "in" | "out" | "in" "out"
//! DeclarativePart  -> { ObjectDeclaration | Procedure }
//! ObjectDeclaration-> IdentifierList ":" [ "constant" ] TypeMark
//!                     [ ":=" Expr ] ";"
//! SeqOfStatements  -> { Statement ";" }
//! Statement        -> AssignStat | ProcCall | IOStat | "null"
//! AssignStat       -> Ident ":=" Expr
//! ProcCall         -> Ident [ "(" Params ")" ]
//! IOStat           -> "get" "(" Ident ")"
//!                   | "put" "(" ( Literal | Expr ) ")"
//!                   | "putln" [ "(" ( Literal | Expr ) ")" ]
//! Expr             -> Relation
//! Relation         -> SimpleExpr
//! SimpleExpr       -> Term { addop Term }
//! Term             -> Factor { mulop Factor }
//! Factor           -> Ident | Number | "(" Expr ")" | "not" Factor
//!                   | signop Factor
//! ```
//!
//! `Relation` only ever forwards to `SimpleExpr`: the lexer tokenizes
//! relational operators (see [`adac_defs::TokenKind::Eq`] and friends)
//! because the TAC parser's `if_<cond>` form names them, but nothing in
//! this grammar produces an `if`/`while` statement yet. Extending
//! `Relation` to consume them and `Statement` to recognize `if`/`while`
//! is the natural next step, deliberately left undone (see
//! `DESIGN.md`).
//!
//! ============================================================================
//! ERROR RECOVERY
//! ============================================================================
//!
//! Two independent channels: syntax errors (structural - wrong token
//! where the grammar expected another) and semantic errors (duplicate
//! declaration, undeclared use, parameter count, assignment to a
//! constant, procedure end-name mismatch). Both funnel through the
//! shared [`adac_util::Handler`]; neither halts parsing by itself.
//!
//! `stop_on_error` turns the *first* error of either channel into a
//! fatal abort ([`adac_util::error::Fatal`], propagated with `?`).
//! Without it, a syntax error instead triggers `panic_mode_recover`
//! (when enabled): the parser skips tokens until it sees one in the
//! current production's synchronization set, then resumes. This mirrors
//! a hand-written parser's "report and keep going" error model without
//! the exception-based control flow the source language would use for
//! it - see `DESIGN.md`'s "exception-based control flow" note.

mod cursor;
mod decl;
mod error;
mod expr;
mod items;
mod stmt;

pub use error::{ParserConfig, SyntaxContext};

use adac_defs::{Token, TokenKind, VarType};
use adac_sym::SymbolTable;
use adac_tac::TacGenerator;
use adac_util::error::{Fatal, FatalResult};
use adac_util::{DiagnosticCode, Handler, Span};

use cursor::TokenCursor;

/// One procedure's parsing-time bookkeeping: the running offset
/// counters that make `§3`'s activation-record layout fall out of
/// ordinary declaration order instead of a second sizing pass.
struct ProcFrame {
    name: String,
    token: Token,
    symbol: adac_sym::SymbolId,
    /// Next offset a local or temporary will be assigned; starts at
    /// [`adac_defs::LOCAL_OFFSET_START`] and only ever decreases.
    next_local_offset: i32,
    size_of_locals: u16,
    params: Vec<adac_sym::SymbolId>,
    param_modes: indexmap::IndexMap<adac_util::Name, adac_defs::ParameterMode>,
    size_of_params: u16,
}

/// Drives the grammar above, the symbol table, and the TAC generator in
/// lock-step over one token stream.
pub struct Parser<'a> {
    tokens: TokenCursor,
    handler: &'a Handler,
    symbols: &'a mut SymbolTable,
    tac: &'a mut TacGenerator,
    config: ParserConfig,
    fatal: bool,
    /// Enclosing procedures, innermost last; `items.rs` pushes on
    /// `procedure` and pops on the matching `end`.
    frames: Vec<ProcFrame>,
}

impl<'a> Parser<'a> {
    pub fn new(
        tokens: Vec<Token>,
        handler: &'a Handler,
        symbols: &'a mut SymbolTable,
        tac: &'a mut TacGenerator,
        config: ParserConfig,
    ) -> Self {
        Self {
            tokens: TokenCursor::new(tokens),
            handler,
            symbols,
            tac,
            config,
            fatal: false,
            frames: Vec::new(),
        }
    }

    /// Parses the whole program: one or more top-level procedures,
    /// terminated by EOF. The last top-level procedure parsed becomes
    /// the program entry point (see `DESIGN.md`'s Open Question
    /// decision - the grammar allows several top-level procedures, but
    /// only one `start` line can appear in the TAC output).
    pub fn parse_program(&mut self) -> FatalResult<()> {
        let mut last_entry: Option<String> = None;
        while !self.at(TokenKind::Eof) {
            match items::parse_procedure(self, 0) {
                Ok(Some(name)) => last_entry = Some(name),
                Ok(None) => {}
                Err(Fatal) => return Err(Fatal),
            }
            if self.fatal {
                return Err(Fatal);
            }
        }
        if let Some(name) = last_entry {
            self.tac.emit_program_start(&name);
        }
        Ok(())
    }

    // -- token stream helpers shared by every grammar module --

    fn current(&self) -> &Token {
        self.tokens.current()
    }

    fn current_kind(&self) -> TokenKind {
        self.tokens.current().kind
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    fn advance(&mut self) -> Token {
        self.tokens.advance()
    }

    fn span_at_current(&self) -> Span {
        Span::point(self.current().line, self.current().column)
    }

    /// Consumes the current token if it matches `kind`, else records a
    /// syntax error and leaves the cursor where it is (so a caller's
    /// synchronization set still has a chance to match).
    fn expect(&mut self, kind: TokenKind) -> FatalResult<Token> {
        if self.at(kind) {
            return Ok(self.advance());
        }
        self.syntax_error(
            adac_util::diagnostic::E_PAR_EXPECTED_TOKEN,
            format!("expected {kind:?}, found {:?} ('{}')", self.current_kind(), self.current().lexeme),
        )?;
        Ok(self.current().clone())
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn syntax_error(&mut self, code: DiagnosticCode, message: impl Into<String>) -> FatalResult<()> {
        self.handler
            .build_error(message)
            .code(code)
            .span(self.span_at_current())
            .emit(self.handler);
        if self.config.stop_on_error {
            self.fatal = true;
            return Err(Fatal);
        }
        Ok(())
    }

    /// Semantic errors never set `fatal`: §4.3 lists duplicate
    /// declaration, undeclared use, parameter-count mismatch,
    /// assignment to a constant/procedure, and end-name mismatch as
    /// non-fatal by construction, regardless of `stop_on_error`.
    fn semantic_error(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        self.handler
            .build_error(message)
            .code(code)
            .span(self.span_at_current())
            .emit(self.handler);
    }

    /// Skips tokens until one in `sync` (or EOF) is seen, without
    /// consuming it. A no-op unless `panic_mode_recover` is enabled -
    /// otherwise the caller's own loop condition is left to notice the
    /// unexpected token on its next iteration.
    fn synchronize(&mut self, sync: &[TokenKind]) {
        if !self.config.panic_mode_recover {
            return;
        }
        while !self.at(TokenKind::Eof) && !sync.contains(&self.current_kind()) {
            self.advance();
        }
    }

    fn current_frame(&self) -> &ProcFrame {
        self.frames.last().expect("a declaration/statement was parsed outside any procedure")
    }

    fn current_frame_mut(&mut self) -> &mut ProcFrame {
        self.frames.last_mut().expect("a declaration/statement was parsed outside any procedure")
    }

    /// Allocates the next local/temporary slot of `var_type`, bumping
    /// the frame's running offset and `size_of_locals` in the same
    /// motion (§3: "locals begin at -2 and grow downward by size").
    fn alloc_local_offset(&mut self, var_type: VarType) -> i32 {
        let size = var_type.size();
        let frame = self.current_frame_mut();
        let offset = frame.next_local_offset;
        frame.next_local_offset -= size as i32;
        frame.size_of_locals += size;
        offset
    }
}

use adac_defs::{Token, TokenKind};
use adac_util::diagnostic::E_LEX_UNRECOGNIZED_CHAR;
use adac_util::error::{Fatal, FatalResult};
use adac_util::{Handler, Span};

use crate::cursor::Cursor;

use super::identifier::is_identifier_start;

/// Turns Ada source text into a token stream.
///
/// Implements [`Iterator`] so callers can stream tokens one at a time;
/// [`Lexer::tokenize`] is the convenience entry point the driver uses,
/// which also honors `stop_on_error`.
pub struct Lexer<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) handler: &'a Handler,
    pub(super) token_start: usize,
    pub(super) token_start_line: u32,
    pub(super) token_start_column: u32,
    stop_on_error: bool,
    fatal: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler, stop_on_error: bool) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            stop_on_error,
            fatal: false,
        }
    }

    /// Runs the lexer to completion, returning every token (including the
    /// trailing EOF sentinel) unless `stop_on_error` halted it early.
    pub fn tokenize(mut self) -> FatalResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let is_eof = tok.is_eof();
            tokens.push(tok);
            if self.fatal {
                return Err(Fatal);
            }
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    pub(super) fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    pub(super) fn span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    pub(super) fn make_token(&self, kind: TokenKind) -> Token {
        let lexeme = self.cursor.slice_from(self.token_start);
        Token::new(kind, lexeme, self.token_start_line, self.token_start_column)
    }

    pub(super) fn report_error(&mut self, code: adac_util::DiagnosticCode, message: impl Into<String>) {
        self.handler
            .build_error(message)
            .code(code)
            .span(self.span())
            .emit(self.handler);
        if self.stop_on_error {
            self.fatal = true;
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            self.cursor.skip_whitespace();
            if super::comment::at_comment_start(&self.cursor) {
                super::comment::skip_comment(&mut self.cursor);
                continue;
            }
            break;
        }
    }

    fn next_token(&mut self) -> Token {
        if self.fatal {
            return Token::new(TokenKind::Eof, "", self.cursor.line(), self.cursor.column());
        }

        self.skip_trivia();
        self.mark_token_start();

        if self.cursor.is_at_end() {
            return self.make_token(TokenKind::Eof);
        }

        let c = self.cursor.current_char();
        if is_identifier_start(c) {
            return super::identifier::lex_identifier(self);
        }
        if c.is_ascii_digit() {
            return super::number::lex_number(self);
        }
        if c == '"' {
            return super::string::lex_string(self);
        }
        if c == '\'' {
            return super::string::lex_char(self);
        }
        if let Some(tok) = super::operator::lex_operator(self) {
            return tok;
        }

        self.cursor.advance();
        self.report_error(
            E_LEX_UNRECOGNIZED_CHAR,
            format!("unrecognized character '{c}'"),
        );
        self.make_token(TokenKind::Invalid)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.fatal {
            return None;
        }
        Some(self.next_token())
    }
}

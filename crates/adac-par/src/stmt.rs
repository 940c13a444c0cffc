//! `SeqOfStatements`/`Statement` and its four shapes: assignment,
//! procedure call, I/O, and `null`.

use adac_defs::{ParameterMode, Token, TokenKind};
use adac_sym::SymbolKind;
use adac_util::diagnostic::{
    E_SEM_ASSIGN_TO_CONSTANT, E_SEM_ASSIGN_TO_NON_VARIABLE, E_SEM_PARAM_COUNT_MISMATCH,
    E_SEM_UNDECLARED_IDENT,
};
use adac_util::error::FatalResult;

use crate::error::{sync_set, SyntaxContext};
use crate::Parser;

impl<'a> Parser<'a> {
    /// `SeqOfStatements -> { Statement ";" }`, stopping as soon as
    /// `end` is seen (the only terminator a procedure body's statement
    /// list can have in this grammar - there is no nested block
    /// construct to also watch for).
    pub(crate) fn parse_seq_of_statements(&mut self) -> FatalResult<()> {
        while !self.at(TokenKind::End) && !self.at(TokenKind::Eof) {
            if self.parse_statement()?.is_none() {
                self.synchronize(sync_set(SyntaxContext::Statement));
            }
            if !self.match_kind(TokenKind::Semicolon) && !self.at(TokenKind::End) {
                self.syntax_error(
                    adac_util::diagnostic::E_PAR_EXPECTED_TOKEN,
                    "expected ';' after statement",
                )?;
                self.synchronize(sync_set(SyntaxContext::Statement));
                self.match_kind(TokenKind::Semicolon);
            }
        }
        Ok(())
    }

    /// Returns `Some(())` on a recognized statement (even one that
    /// failed semantically), `None` only when the leading token matches
    /// none of `Statement`'s alternatives - the caller resynchronizes
    /// in that case.
    fn parse_statement(&mut self) -> FatalResult<Option<()>> {
        self.tac.set_current_line(self.current().line);
        match self.current_kind() {
            TokenKind::Null => {
                self.advance();
                Ok(Some(()))
            }
            TokenKind::Get => {
                self.parse_get()?;
                Ok(Some(()))
            }
            TokenKind::Put => {
                self.parse_put(false)?;
                Ok(Some(()))
            }
            TokenKind::Putln => {
                self.parse_put(true)?;
                Ok(Some(()))
            }
            TokenKind::Identifier => {
                if self.tokens_peek_is_assign() {
                    self.parse_assign_stat()?;
                } else {
                    self.parse_proc_call()?;
                }
                Ok(Some(()))
            }
            _ => {
                self.syntax_error(
                    adac_util::diagnostic::E_PAR_UNEXPECTED_TOKEN,
                    format!("expected a statement, found '{}'", self.current().lexeme),
                )?;
                Ok(None)
            }
        }
    }

    fn tokens_peek_is_assign(&self) -> bool {
        self.tokens.peek_next().kind == TokenKind::Assign
    }

    fn parse_assign_stat(&mut self) -> FatalResult<()> {
        let name_tok = self.advance();
        self.expect(TokenKind::Assign)?;
        let rhs = self.parse_expr()?;

        match self.symbols.lookup(&name_tok.lexeme, false, None) {
            Ok(id) => {
                let symbol = self.symbols.get(id).clone();
                match &symbol.kind {
                    SymbolKind::Constant(_) => self.semantic_error(
                        E_SEM_ASSIGN_TO_CONSTANT,
                        format!("cannot assign to constant '{}'", name_tok.lexeme),
                    ),
                    SymbolKind::Procedure(_) | SymbolKind::Function(_) => self.semantic_error(
                        E_SEM_ASSIGN_TO_NON_VARIABLE,
                        format!("cannot assign to procedure or function '{}'", name_tok.lexeme),
                    ),
                    _ => {
                        let dest = adac_tac::resolve_place(&symbol, &name_tok.lexeme, self.handler);
                        self.tac.emit_assignment(dest, rhs.place);
                    }
                }
            }
            Err(_) => self.semantic_error(
                E_SEM_UNDECLARED_IDENT,
                format!("'{}' is not declared", name_tok.lexeme),
            ),
        }
        Ok(())
    }

    /// `ProcCall -> Ident ["(" Params ")"]`.
    ///
    /// Pushes are emitted in REVERSE declaration order: rightmost
    /// actual first, leftmost last, so the leftmost actual is the one
    /// immediately preceding `CALL`. This does not line up with
    /// `items.rs::assign_param_offsets`'s own right-to-left offset
    /// walk (which hands `_BP+4` to the rightmost formal, not the
    /// leftmost) - a quirk reproduced exactly because it is how the
    /// system this was distilled from pairs the two, not a
    /// stack-mechanics-consistent convention. `OUT`/`INOUT` actuals
    /// push the operand's address instead of its value.
    fn parse_proc_call(&mut self) -> FatalResult<()> {
        let name_tok = self.advance();
        let mut actual_places = Vec::new();
        let mut actual_tokens = Vec::new();
        if self.match_kind(TokenKind::LParen) {
            if !self.at(TokenKind::RParen) {
                loop {
                    let tok = self.current().clone();
                    let value = self.parse_expr()?;
                    actual_places.push(value.place);
                    actual_tokens.push(tok);
                    if !self.match_kind(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RParen)?;
        }

        let Some(proc_id) = self.symbols.get_procedure_definition(&name_tok.lexeme) else {
            self.semantic_error(
                E_SEM_UNDECLARED_IDENT,
                format!("'{}' is not a declared procedure", name_tok.lexeme),
            );
            return Ok(());
        };
        let proc_data = match &self.symbols.get(proc_id).kind {
            SymbolKind::Procedure(d) | SymbolKind::Function(d) => d.clone(),
            _ => unreachable!("get_procedure_definition only ever returns Procedure/Function ids"),
        };

        if proc_data.params.len() != actual_places.len() {
            self.semantic_error(
                E_SEM_PARAM_COUNT_MISMATCH,
                format!(
                    "'{}' expects {} argument(s), found {}",
                    name_tok.lexeme,
                    proc_data.params.len(),
                    actual_places.len()
                ),
            );
            return Ok(());
        }

        for (formal_id, (actual_place, actual_tok)) in proc_data
            .params
            .iter()
            .zip(actual_places.into_iter().zip(actual_tokens.into_iter()))
            .rev()
        {
            let formal = self.symbols.get(*formal_id).clone();
            let mode = proc_data
                .param_modes
                .get(&formal.name)
                .copied()
                .unwrap_or(ParameterMode::In);

            let push_place = match mode {
                ParameterMode::In => actual_place,
                ParameterMode::Out | ParameterMode::InOut => {
                    // OUT/INOUT pass the variable's address: the actual
                    // must itself resolve to an addressable place, not
                    // whatever a full expression evaluated to.
                    match self.symbols.lookup(&actual_tok.lexeme, false, None) {
                        Ok(actual_id) => {
                            let actual_symbol = self.symbols.get(actual_id).clone();
                            adac_tac::resolve_place(&actual_symbol, &actual_tok.lexeme, self.handler)
                        }
                        Err(_) => actual_place,
                    }
                }
            };
            self.tac.emit_push(push_place, mode);
        }
        self.tac.emit_call(&name_tok.lexeme);
        Ok(())
    }

    fn parse_get(&mut self) -> FatalResult<()> {
        self.advance();
        self.expect(TokenKind::LParen)?;
        let name_tok = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::RParen)?;

        match self.symbols.lookup(&name_tok.lexeme, false, None) {
            Ok(id) => {
                let symbol = self.symbols.get(id).clone();
                let dest = adac_tac::resolve_place(&symbol, &name_tok.lexeme, self.handler);
                self.tac.emit_read(dest);
            }
            Err(_) => self.semantic_error(
                E_SEM_UNDECLARED_IDENT,
                format!("'{}' is not declared", name_tok.lexeme),
            ),
        }
        Ok(())
    }

    /// `put(...)`/`putln(...)`/bare `putln`. A string literal argument
    /// is interned once (§4.2's `add_string_literal`) and written with
    /// `wrs`; anything else is evaluated as an `Expr` and written with
    /// `wri`. `putln` appends `wrln`; with no argument at all it is
    /// just `wrln`.
    fn parse_put(&mut self, is_putln: bool) -> FatalResult<()> {
        self.advance();
        let has_args = self.match_kind(TokenKind::LParen);
        if has_args {
            if self.at(TokenKind::StringLiteral) {
                let tok: Token = self.advance();
                let text = tok.string_value.clone().unwrap_or_default();
                let label = self.symbols.add_string_literal(&text, tok);
                let label_text = self.symbols.resolve_name(label).to_string();
                let value_text = self
                    .symbols
                    .string_literal_text(label)
                    .unwrap_or_default()
                    .to_string();
                self.tac.add_string_definition(&label_text, &value_text);
                self.tac.emit_write_string_by_label(&label_text);
            } else {
                let value = self.parse_expr()?;
                self.tac.emit_write(value.place);
            }
            self.expect(TokenKind::RParen)?;
        }
        if is_putln {
            self.tac.emit_new_line();
        } else if !has_args {
            // bare `put` with no parens at all is not in the grammar;
            // `put` always takes an argument, only `putln` may not.
            self.syntax_error(
                adac_util::diagnostic::E_PAR_EXPECTED_TOKEN,
                "expected '(' after 'put'",
            )?;
        }
        Ok(())
    }
}

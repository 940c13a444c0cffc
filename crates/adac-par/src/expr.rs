//! `Expr` through `Factor`: the bottom-up expression evaluator.
//!
//! Every production returns an [`ExprValue`] - the [`Place`] the
//! subexpression evaluates to, plus the [`VarType`] used only to size
//! the next temporary (this subset has no type-checking pass; a
//! mismatched-operand expression still lowers, it just may not make
//! sense to a downstream assembler, same as the source it was
//! distilled from).

use adac_defs::{addop_to_tac, mulop_to_tac, Token, TokenKind, VarType};
use adac_tac::Place;
use adac_util::diagnostic::E_SEM_UNDECLARED_IDENT;

use crate::Parser;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ExprValue {
    pub place: Place,
    pub var_type: VarType,
}

impl ExprValue {
    fn new(place: Place, var_type: VarType) -> Self {
        Self { place, var_type }
    }
}

/// The wider of two operand types, so `int ADD float` sizes its temp
/// like a `float`. Not spelled out in §4.3's operator mapping (which
/// only names the TAC mnemonic); a narrower-than-either result would
/// truncate a `FLOAT` operand's value when it lands in the temp.
fn promote(a: VarType, b: VarType) -> VarType {
    if a == VarType::Float || b == VarType::Float {
        VarType::Float
    } else {
        a
    }
}

impl<'a> Parser<'a> {
    pub(crate) fn parse_expr(&mut self) -> adac_util::error::FatalResult<ExprValue> {
        self.parse_simple_expr()
    }

    fn parse_simple_expr(&mut self) -> adac_util::error::FatalResult<ExprValue> {
        let mut left = self.parse_term()?;
        loop {
            let lexeme = self.current().lexeme.clone();
            let is_addop = matches!(self.current_kind(), TokenKind::Plus | TokenKind::Minus | TokenKind::Or);
            if !is_addop {
                break;
            }
            self.advance();
            let right = self.parse_term()?;
            let op = addop_to_tac(&lexeme).expect("is_addop guarantees a mapping");
            let result_type = promote(left.var_type, right.var_type);
            let dest = self.alloc_temp(result_type);
            self.tac.emit_binary_op(op, dest.clone(), left.place, right.place);
            left = ExprValue::new(dest, result_type);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> adac_util::error::FatalResult<ExprValue> {
        let mut left = self.parse_factor()?;
        loop {
            let lexeme = self.current().lexeme.clone();
            let is_mulop = matches!(
                self.current_kind(),
                TokenKind::Star | TokenKind::Slash | TokenKind::Mod | TokenKind::Rem | TokenKind::And
            );
            if !is_mulop {
                break;
            }
            self.advance();
            let right = self.parse_factor()?;
            let op = mulop_to_tac(&lexeme).expect("is_mulop guarantees a mapping");
            let result_type = promote(left.var_type, right.var_type);
            let dest = self.alloc_temp(result_type);
            self.tac.emit_binary_op(op, dest.clone(), left.place, right.place);
            left = ExprValue::new(dest, result_type);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> adac_util::error::FatalResult<ExprValue> {
        match self.current_kind() {
            TokenKind::Not => {
                self.advance();
                let operand = self.parse_factor()?;
                let dest = self.alloc_temp(operand.var_type);
                self.tac
                    .emit_unary_op(adac_defs::TacOp::Not, dest.clone(), operand.place);
                Ok(ExprValue::new(dest, operand.var_type))
            }
            TokenKind::Minus => {
                self.advance();
                let operand = self.parse_factor()?;
                let dest = self.alloc_temp(operand.var_type);
                self.tac
                    .emit_unary_op(adac_defs::TacOp::UMinus, dest.clone(), operand.place);
                Ok(ExprValue::new(dest, operand.var_type))
            }
            TokenKind::Plus => {
                self.advance();
                self.parse_factor()
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::IntegerLiteral => {
                let tok = self.advance();
                Ok(ExprValue::new(Place::Int(tok.int_value.unwrap_or(0)), VarType::Int))
            }
            TokenKind::RealLiteral => {
                let tok = self.advance();
                Ok(ExprValue::new(Place::Real(tok.real_value.unwrap_or(0.0)), VarType::Float))
            }
            TokenKind::Identifier => self.parse_identifier_factor(),
            _ => {
                self.syntax_error(
                    adac_util::diagnostic::E_PAR_UNEXPECTED_TOKEN,
                    format!("expected an expression, found '{}'", self.current().lexeme),
                )?;
                Ok(ExprValue::new(Place::Error, VarType::Int))
            }
        }
    }

    fn parse_identifier_factor(&mut self) -> adac_util::error::FatalResult<ExprValue> {
        let tok: Token = self.advance();
        match self.symbols.lookup(&tok.lexeme, false, None) {
            Ok(id) => {
                let symbol = self.symbols.get(id).clone();
                let var_type = symbol
                    .kind
                    .as_var_data()
                    .map(|d| d.var_type)
                    .or_else(|| match &symbol.kind {
                        adac_sym::SymbolKind::Constant(c) => Some(c.var_type),
                        _ => None,
                    })
                    .unwrap_or(VarType::Int);
                let place = adac_tac::resolve_place(&symbol, &tok.lexeme, self.handler);
                Ok(ExprValue::new(place, var_type))
            }
            Err(_) => {
                self.semantic_error(
                    E_SEM_UNDECLARED_IDENT,
                    format!("'{}' is not declared", tok.lexeme),
                );
                Ok(ExprValue::new(Place::Error, VarType::Int))
            }
        }
    }

    /// Allocates a fresh TAC temp and backs it with an internal
    /// `VARIABLE` symbol in the current scope, at the next local
    /// offset - so it is counted in `size_of_locals` exactly like a
    /// declared local (§4.3).
    pub(crate) fn alloc_temp(&mut self, var_type: VarType) -> Place {
        let place = self.tac.new_temp();
        let offset = self.alloc_local_offset(var_type);
        let name = place.to_string();
        let token = Token::new(TokenKind::Identifier, name.clone(), self.current().line, self.current().column);
        let _ = self.symbols.insert(
            self.handler,
            &name,
            token,
            adac_sym::SymbolKind::Variable(adac_sym::VarData {
                var_type,
                offset,
                size: var_type.size(),
            }),
        );
        place
    }
}

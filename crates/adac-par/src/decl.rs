//! `OneArgSpec`/`ObjectDeclaration`/`TypeMark`: everything that turns
//! declared names into symbols with an assigned offset.

use adac_defs::{ParameterMode, Token, TokenKind, VarType};
use adac_sym::{ConstData, ConstValue, SymbolKind, VarData};
use adac_util::diagnostic::E_SEM_UNKNOWN_TYPE;
use adac_util::error::FatalResult;

use crate::Parser;

/// One (possibly still type-less) identifier collected from an
/// `IdentifierList`, carrying the token it was declared with for
/// diagnostics.
pub(crate) struct DeclaredName {
    pub text: String,
    pub token: Token,
}

/// A fully-typed formal parameter, before offsets are assigned. §3's
/// offset rule needs every parameter's size up front (it walks the list
/// right-to-left), so `OneArgSpec`s are collected into a flat list
/// first and only assigned offsets once the whole `ArgList` is known.
pub(crate) struct ParamSpec {
    pub name: DeclaredName,
    pub var_type: VarType,
    pub mode: ParameterMode,
}

impl<'a> Parser<'a> {
    fn parse_identifier_list(&mut self) -> FatalResult<Vec<DeclaredName>> {
        let mut names = Vec::new();
        loop {
            let tok = self.expect(TokenKind::Identifier)?;
            names.push(DeclaredName {
                text: tok.lexeme.clone(),
                token: tok,
            });
            if !self.match_kind(TokenKind::Comma) {
                break;
            }
        }
        Ok(names)
    }

    fn parse_basic_type(&mut self) -> FatalResult<VarType> {
        let kind = self.current_kind();
        if let Some(ty) = VarType::from_keyword(kind) {
            self.advance();
            return Ok(ty);
        }
        self.syntax_error(
            E_SEM_UNKNOWN_TYPE,
            format!("expected a type mark, found '{}'", self.current().lexeme),
        )?;
        Ok(VarType::Int)
    }

    fn parse_mode(&mut self) -> ParameterMode {
        match self.current_kind() {
            TokenKind::Out => {
                self.advance();
                ParameterMode::Out
            }
            TokenKind::In => {
                self.advance();
                if self.match_kind(TokenKind::Out) {
                    ParameterMode::InOut
                } else {
                    ParameterMode::In
                }
            }
            _ => ParameterMode::In,
        }
    }

    /// `Args -> "(" ArgList ")"`, flattened to one [`ParamSpec`] per
    /// identifier (a `OneArgSpec` sharing a mode/type across several
    /// names expands to that many specs, preserving declaration order).
    pub(crate) fn parse_args(&mut self) -> FatalResult<Vec<ParamSpec>> {
        let mut specs = Vec::new();
        if !self.match_kind(TokenKind::LParen) {
            return Ok(specs);
        }
        if self.at(TokenKind::RParen) {
            self.advance();
            return Ok(specs);
        }
        loop {
            let mode = self.parse_mode();
            let names = self.parse_identifier_list()?;
            self.expect(TokenKind::Colon)?;
            let var_type = self.parse_basic_type()?;
            for name in names {
                specs.push(ParamSpec { name, var_type, mode });
            }
            if !self.match_kind(TokenKind::Semicolon) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(specs)
    }

    /// Parses a (possibly signed) numeric literal into its value and
    /// inferred type, for a `constant`'s initializer.
    fn parse_literal_value(&mut self) -> FatalResult<(ConstValue, VarType)> {
        let negate = match self.current_kind() {
            TokenKind::Minus => {
                self.advance();
                true
            }
            TokenKind::Plus => {
                self.advance();
                false
            }
            _ => false,
        };
        match self.current_kind() {
            TokenKind::IntegerLiteral => {
                let tok = self.advance();
                let mut v = tok.int_value.unwrap_or(0);
                if negate {
                    v = -v;
                }
                Ok((ConstValue::Int(v), VarType::Int))
            }
            TokenKind::RealLiteral => {
                let tok = self.advance();
                let mut v = tok.real_value.unwrap_or(0.0);
                if negate {
                    v = -v;
                }
                Ok((ConstValue::Real(v), VarType::Float))
            }
            _ => {
                self.syntax_error(
                    adac_util::diagnostic::E_PAR_UNEXPECTED_TOKEN,
                    format!("expected a literal, found '{}'", self.current().lexeme),
                )?;
                Ok((ConstValue::Int(0), VarType::Int))
            }
        }
    }

    /// `ObjectDeclaration -> IdentifierList ":" ["constant"] TypeMark
    /// [":=" Expr] ";"`.
    ///
    /// Two constant spellings are both accepted, matching the grammar's
    /// `TypeMark -> basic-type-keyword | "constant" ":=" Literal`:
    /// `X : constant INTEGER := 5;` (explicit type) and
    /// `X : constant := 5;` (type inferred from the literal). See
    /// `DESIGN.md`'s Open Question decision.
    pub(crate) fn parse_object_declaration(&mut self) -> FatalResult<()> {
        self.tac.set_current_line(self.current().line);
        let names = self.parse_identifier_list()?;
        self.expect(TokenKind::Colon)?;

        if self.match_kind(TokenKind::Constant) {
            if self.at(TokenKind::Assign) {
                self.advance();
                let (value, var_type) = self.parse_literal_value()?;
                self.declare_constants(&names, var_type, value);
            } else {
                let var_type = self.parse_basic_type()?;
                self.expect(TokenKind::Assign)?;
                let (value, _) = self.parse_literal_value()?;
                self.declare_constants(&names, var_type, value);
            }
            self.expect(TokenKind::Semicolon)?;
            return Ok(());
        }

        let var_type = self.parse_basic_type()?;
        let initializer = if self.match_kind(TokenKind::Assign) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;
        self.declare_variables(&names, var_type, initializer);
        Ok(())
    }

    fn declare_variables(&mut self, names: &[DeclaredName], var_type: VarType, initializer: Option<crate::expr::ExprValue>) {
        for name in names {
            let offset = self.alloc_local_offset(var_type);
            let result = self.symbols.insert(
                self.handler,
                &name.text,
                name.token.clone(),
                SymbolKind::Variable(VarData {
                    var_type,
                    offset,
                    size: var_type.size(),
                }),
            );
            match result {
                Ok(id) => {
                    if let Some(value) = &initializer {
                        let symbol = self.symbols.get(id).clone();
                        let dest = adac_tac::resolve_place(&symbol, &name.text, self.handler);
                        self.tac.emit_assignment(dest, value.place.clone());
                    }
                }
                Err(err) => self.semantic_error(
                    adac_util::diagnostic::E_SEM_DUPLICATE_DECL,
                    err.to_string(),
                ),
            }
        }
    }

    fn declare_constants(&mut self, names: &[DeclaredName], var_type: VarType, value: ConstValue) {
        for name in names {
            let result = self.symbols.insert(
                self.handler,
                &name.text,
                name.token.clone(),
                SymbolKind::Constant(ConstData { var_type, value }),
            );
            if let Err(err) = result {
                self.semantic_error(adac_util::diagnostic::E_SEM_DUPLICATE_DECL, err.to_string());
            }
        }
    }
}

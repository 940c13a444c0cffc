use adac_defs::{Token, TokenKind, MAX_IDENTIFIER_LENGTH};
use adac_util::diagnostic::E_LEX_IDENT_TOO_LONG;

use super::core::Lexer;

pub(super) fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Identifiers that case-insensitively match a reserved word are
/// reclassified to the reserved kind; everything else stays `Identifier`.
/// Over-length identifiers still yield a token (with the full lexeme),
/// alongside a recorded error.
pub(super) fn lex_identifier(lexer: &mut Lexer<'_>) -> Token {
    while !lexer.cursor.is_at_end() && is_identifier_continue(lexer.cursor.current_char()) {
        lexer.cursor.advance();
    }

    let lexeme = lexer.cursor.slice_from(lexer.token_start);
    if lexeme.len() > MAX_IDENTIFIER_LENGTH {
        lexer.report_error(
            E_LEX_IDENT_TOO_LONG,
            format!(
                "identifier '{lexeme}' is {} characters, maximum is {MAX_IDENTIFIER_LENGTH}",
                lexeme.len()
            ),
        );
    }

    let uppercased = lexeme.to_ascii_uppercase();
    let kind = adac_defs::lookup_reserved(&uppercased).unwrap_or(TokenKind::Identifier);
    lexer.make_token(kind)
}

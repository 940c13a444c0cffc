use adac_defs::{Token, TokenKind};
use adac_util::diagnostic::E_LEX_INVALID_NUMBER;

use super::core::Lexer;

/// Integer: one or more digits. Real: digits `.` digits. A numeral is
/// only treated as real when the `.` is followed by another digit, so a
/// bare `3.` next to a statement terminator is not mis-lexed.
pub(super) fn lex_number(lexer: &mut Lexer<'_>) -> Token {
    while !lexer.cursor.is_at_end() && lexer.cursor.current_char().is_ascii_digit() {
        lexer.cursor.advance();
    }

    let is_real = lexer.cursor.current_char() == '.' && lexer.cursor.peek_char(1).is_ascii_digit();
    if is_real {
        lexer.cursor.advance(); // '.'
        while !lexer.cursor.is_at_end() && lexer.cursor.current_char().is_ascii_digit() {
            lexer.cursor.advance();
        }
        let lexeme = lexer.cursor.slice_from(lexer.token_start);
        return match lexeme.parse::<f64>() {
            Ok(value) => lexer.make_token(TokenKind::RealLiteral).with_real(value),
            Err(_) => {
                lexer.report_error(
                    E_LEX_INVALID_NUMBER,
                    format!("'{lexeme}' is not a valid real literal"),
                );
                lexer.make_token(TokenKind::RealLiteral)
            }
        };
    }

    let lexeme = lexer.cursor.slice_from(lexer.token_start);
    match lexeme.parse::<i64>() {
        Ok(value) => lexer.make_token(TokenKind::IntegerLiteral).with_int(value),
        Err(_) => {
            lexer.report_error(
                E_LEX_INVALID_NUMBER,
                format!("'{lexeme}' is not a valid integer literal"),
            );
            lexer.make_token(TokenKind::IntegerLiteral)
        }
    }
}

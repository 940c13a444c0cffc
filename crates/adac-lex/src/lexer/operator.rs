use adac_defs::{Token, TokenKind};

use super::core::Lexer;

/// Punctuation and operator tokens. Returns `None` if the current
/// character starts none of them, so the caller can report it as
/// unrecognized.
pub(super) fn lex_operator(lexer: &mut Lexer<'_>) -> Option<Token> {
    let c = lexer.cursor.current_char();
    let kind = match c {
        ':' => {
            lexer.cursor.advance();
            if lexer.cursor.current_char() == '=' {
                lexer.cursor.advance();
                TokenKind::Assign
            } else {
                TokenKind::Colon
            }
        }
        ';' => {
            lexer.cursor.advance();
            TokenKind::Semicolon
        }
        ',' => {
            lexer.cursor.advance();
            TokenKind::Comma
        }
        '.' => {
            lexer.cursor.advance();
            TokenKind::Dot
        }
        '(' => {
            lexer.cursor.advance();
            TokenKind::LParen
        }
        ')' => {
            lexer.cursor.advance();
            TokenKind::RParen
        }
        '+' => {
            lexer.cursor.advance();
            TokenKind::Plus
        }
        '-' => {
            lexer.cursor.advance();
            TokenKind::Minus
        }
        '*' => {
            lexer.cursor.advance();
            TokenKind::Star
        }
        '/' => {
            lexer.cursor.advance();
            if lexer.cursor.current_char() == '=' {
                lexer.cursor.advance();
                TokenKind::NotEq
            } else {
                TokenKind::Slash
            }
        }
        '=' => {
            lexer.cursor.advance();
            TokenKind::Eq
        }
        '<' => {
            lexer.cursor.advance();
            if lexer.cursor.current_char() == '=' {
                lexer.cursor.advance();
                TokenKind::LtEq
            } else {
                TokenKind::Lt
            }
        }
        '>' => {
            lexer.cursor.advance();
            if lexer.cursor.current_char() == '=' {
                lexer.cursor.advance();
                TokenKind::GtEq
            } else {
                TokenKind::Gt
            }
        }
        _ => return None,
    };
    Some(lexer.make_token(kind))
}

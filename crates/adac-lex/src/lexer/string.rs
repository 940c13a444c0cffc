use adac_defs::{Token, TokenKind};
use adac_util::diagnostic::{E_LEX_UNTERMINATED_CHAR, E_LEX_UNTERMINATED_STRING};

use super::core::Lexer;

/// Double-quoted string literal. Supports the Ada doubled-quote escape
/// (`""` decodes to a single `"`). A literal that runs to end of line or
/// end of file without a closing quote is reported as unterminated but
/// still yields a token carrying whatever was decoded so far.
pub(super) fn lex_string(lexer: &mut Lexer<'_>) -> Token {
    lexer.cursor.advance(); // opening '"'
    let mut decoded = String::new();
    let mut terminated = false;

    loop {
        if lexer.cursor.is_at_end() || lexer.cursor.current_char() == '\n' {
            break;
        }
        if lexer.cursor.current_char() == '"' {
            if lexer.cursor.peek_char(1) == '"' {
                decoded.push('"');
                lexer.cursor.advance();
                lexer.cursor.advance();
                continue;
            }
            lexer.cursor.advance(); // closing '"'
            terminated = true;
            break;
        }
        decoded.push(lexer.cursor.current_char());
        lexer.cursor.advance();
    }

    if !terminated {
        lexer.report_error(E_LEX_UNTERMINATED_STRING, "unterminated string literal");
    }

    lexer.make_token(TokenKind::StringLiteral).with_string(decoded)
}

/// Single-quoted character literal, with the doubled-quote convention
/// applied to the apostrophe itself so `'''` denotes the character `'`.
pub(super) fn lex_char(lexer: &mut Lexer<'_>) -> Token {
    lexer.cursor.advance(); // opening '\''

    if lexer.cursor.is_at_end() || lexer.cursor.current_char() == '\n' {
        lexer.report_error(E_LEX_UNTERMINATED_CHAR, "unterminated character literal");
        return lexer.make_token(TokenKind::CharLiteral);
    }

    let value = if lexer.cursor.current_char() == '\'' && lexer.cursor.peek_char(1) == '\'' {
        lexer.cursor.advance();
        lexer.cursor.advance();
        '\''
    } else {
        let c = lexer.cursor.current_char();
        lexer.cursor.advance();
        c
    };

    if lexer.cursor.current_char() == '\'' {
        lexer.cursor.advance();
    } else {
        lexer.report_error(E_LEX_UNTERMINATED_CHAR, "unterminated character literal");
    }
    lexer
        .make_token(TokenKind::CharLiteral)
        .with_string(value.to_string())
}

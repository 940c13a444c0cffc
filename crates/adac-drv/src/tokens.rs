//! Token listing: the fixed-width `Token Type | Lexeme | Value` table
//! named in spec.md §6, produced when neither `-t` nor `-a` is given.

use adac_defs::Token;

pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<14}{:<20}{}\n", "Token Type", "Lexeme", "Value"));
    out.push_str(&"-".repeat(48));
    out.push('\n');
    for tok in tokens {
        out.push_str(&tok.to_string());
        out.push('\n');
    }
    out
}

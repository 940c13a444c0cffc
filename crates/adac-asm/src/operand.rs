//! Place -> assembly-text resolution (§4.6's "place-to-addressing
//! mapping").
//!
//! A [`Place`] only knows its own shape (literal, temp, frame slot,
//! global name, address-of wrapper); it does not know which procedure
//! it was produced in, so it cannot resolve a `Temp` on its own. Every
//! function here takes the emitting procedure's body scope depth (the
//! depth `adac_par` was at when it called `new_temp`/`alloc_local_offset`
//! for that procedure) so a `_t<n>` can be looked back up in the symbol
//! table exactly like [`adac_tac::resolve_place`] already resolves an
//! ordinary declared variable.

use adac_sym::SymbolTable;
use adac_tac::{resolve_place, Place};
use adac_util::Handler;

/// Where one resolved operand's value actually lives, independent of
/// its eventual text rendering. [`crate::translate`] needs this
/// distinction (not just the rendered string) to decide, e.g., whether
/// `@place` in a `PUSH` becomes `OFFSET name` or a `LEA`/`PUSH` pair.
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    /// An immediate literal: integer or real text.
    Immediate(String),
    /// A named global in the `.DATA` segment.
    Label(String),
    /// A `[BP+k]`/`[BP-k]` frame-relative address.
    Memory(String),
}

impl Storage {
    /// The text an arithmetic/assignment translator substitutes
    /// directly into an operand position.
    pub fn text(&self) -> &str {
        match self {
            Storage::Immediate(s) | Storage::Label(s) | Storage::Memory(s) => s,
        }
    }
}

fn frame_text(offset: i32) -> String {
    if offset >= 0 {
        format!("[BP+{offset}]")
    } else {
        format!("[BP-{}]", -offset)
    }
}

/// Resolves `place` to its storage location. `body_depth` is the scope
/// depth a `Place::Temp` produced by the currently-translated
/// procedure's body was declared at (see module docs); it is unused for
/// every other variant.
pub fn resolve_storage(
    place: &Place,
    body_depth: usize,
    symbols: &mut SymbolTable,
    handler: &Handler,
) -> Storage {
    match place {
        Place::Int(v) => Storage::Immediate(v.to_string()),
        Place::Real(v) => Storage::Immediate(v.to_string()),
        Place::Named(name) => Storage::Label(name.clone()),
        Place::Frame(offset) => Storage::Memory(frame_text(*offset)),
        Place::Temp(n) => resolve_temp(*n, body_depth, symbols, handler),
        Place::AddressOf(inner) => {
            // A bare address-of place outside a PUSH context (should
            // not arise from this generator's own emission, but the
            // TAC parser round-trips hand-written files that might);
            // fall back to rendering the inner storage's own text
            // rather than losing the operand entirely.
            resolve_storage(inner, body_depth, symbols, handler)
        }
        Place::Error => Storage::Memory("<unresolved>".to_string()),
    }
}

fn resolve_temp(
    n: u32,
    body_depth: usize,
    symbols: &mut SymbolTable,
    handler: &Handler,
) -> Storage {
    let name = format!("_t{n}");
    match symbols.lookup(&name, false, Some(body_depth)) {
        Ok(id) => {
            let symbol = symbols.get(id).clone();
            let resolved = resolve_place(&symbol, &name, handler);
            resolve_storage(&resolved, body_depth, symbols, handler)
        }
        Err(_) => Storage::Memory(format!("<unresolved:{name}>")),
    }
}

/// Renders `place` to the text an ordinary (non-address-of) operand
/// position uses.
pub fn operand_text(
    place: &Place,
    body_depth: usize,
    symbols: &mut SymbolTable,
    handler: &Handler,
) -> String {
    resolve_storage(place, body_depth, symbols, handler)
        .text()
        .to_string()
}

/// The fixed scratch/return registers the calling convention reserves
/// (§4.6's "Fixed calling convention"). Used to recognize when a
/// resolved operand already sits where a translator needs it, so a
/// redundant `MOV reg, reg` is skipped.
pub fn is_register(text: &str) -> bool {
    matches!(text, "AX" | "BX" | "CX" | "DX" | "SI" | "DI")
}

pub fn is_immediate(text: &str) -> bool {
    text.parse::<i64>().is_ok() || text.parse::<f64>().is_ok()
}

pub fn is_memory(text: &str) -> bool {
    text.starts_with('[')
}

#[cfg(test)]
mod tests {
    use super::*;
    use adac_defs::{Token, TokenKind, VarType};
    use adac_sym::{SymbolKind, VarData};

    fn tok(name: &str) -> Token {
        Token::new(TokenKind::Identifier, name, 1, 1)
    }

    #[test]
    fn literal_places_render_as_bare_numbers() {
        let mut symbols = SymbolTable::new();
        let handler = Handler::new();
        assert_eq!(
            operand_text(&Place::Int(5), 1, &mut symbols, &handler),
            "5"
        );
    }

    #[test]
    fn frame_places_render_with_brackets() {
        let mut symbols = SymbolTable::new();
        let handler = Handler::new();
        assert_eq!(
            operand_text(&Place::Frame(-2), 2, &mut symbols, &handler),
            "[BP-2]"
        );
        assert_eq!(
            operand_text(&Place::Frame(4), 2, &mut symbols, &handler),
            "[BP+4]"
        );
    }

    #[test]
    fn temp_at_global_depth_resolves_to_its_name() {
        let mut symbols = SymbolTable::new();
        let handler = Handler::new();
        symbols
            .insert(
                &handler,
                "_t0",
                tok("_t0"),
                SymbolKind::Variable(VarData {
                    var_type: VarType::Int,
                    offset: -2,
                    size: 2,
                }),
            )
            .unwrap();
        // depth 0/1 is "global" per resolve_place's rule.
        assert_eq!(
            operand_text(&Place::Temp(0), 0, &mut symbols, &handler),
            "_t0"
        );
    }

    #[test]
    fn temp_in_a_nested_scope_resolves_to_its_frame_offset() {
        let mut symbols = SymbolTable::new();
        let handler = Handler::new();
        symbols.enter_scope();
        symbols.enter_scope();
        symbols
            .insert(
                &handler,
                "_t0",
                tok("_t0"),
                SymbolKind::Variable(VarData {
                    var_type: VarType::Int,
                    offset: -2,
                    size: 2,
                }),
            )
            .unwrap();
        assert_eq!(
            operand_text(&Place::Temp(0), 2, &mut symbols, &handler),
            "[BP-2]"
        );
    }

    #[test]
    fn register_and_immediate_and_memory_predicates() {
        assert!(is_register("AX"));
        assert!(!is_register("AH"));
        assert!(is_immediate("5"));
        assert!(is_immediate("-3"));
        assert!(!is_immediate("AX"));
        assert!(is_memory("[BP-2]"));
        assert!(!is_memory("AX"));
    }
}

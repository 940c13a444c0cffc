//! `PUSH`/`CALL`/`RETURN`/`RETRIEVE`: actual-parameter staging and the
//! function call/return protocol.

use adac_tac::Place;

use crate::operand::{resolve_storage, Storage};

use super::Ctx;

/// An `IN` actual pushes its resolved value directly; an `OUT`/`INOUT`
/// actual was wrapped in [`Place::address_of`] by the TAC generator, so
/// its own storage (not its value) has to be pushed. A label's address
/// is a link-time constant (`OFFSET`); a frame slot's address has to be
/// computed at runtime (`LEA`) since `BP` is only known there.
pub fn translate_push(operand: &Place, ctx: &mut Ctx) -> Vec<String> {
    if let Place::AddressOf(inner) = operand {
        let storage = resolve_storage(inner, ctx.body_depth, ctx.symbols, ctx.handler);
        return match storage {
            Storage::Label(name) => vec![format!("PUSH OFFSET {name}")],
            Storage::Memory(mem) => vec![format!("LEA BX, {mem}"), "PUSH BX".to_string()],
            Storage::Immediate(text) => vec![format!("PUSH OFFSET {text}")],
        };
    }
    let text = ctx.text(operand);
    vec![format!("PUSH {text}")]
}

pub fn translate_call(name: &str) -> Vec<String> {
    vec![format!("CALL {name}")]
}

/// The procedure's own `RET` is emitted by its epilogue
/// (`crate::convention::Frame::epilogue`); a `return <value>` only
/// needs to stage the value into the fixed return register first.
pub fn translate_return(value: Option<&Place>, ctx: &mut Ctx) -> Vec<String> {
    match value {
        Some(place) => {
            let text = ctx.text(place);
            if text == "AX" {
                Vec::new()
            } else {
                vec![format!("MOV AX, {text}")]
            }
        }
        None => Vec::new(),
    }
}

/// `dest = retrieve` reads the value a just-executed `CALL` left in the
/// fixed return register.
pub fn translate_retrieve(dest: &Place, ctx: &mut Ctx) -> Vec<String> {
    let dest = ctx.text(dest);
    if dest == "AX" {
        Vec::new()
    } else {
        vec![format!("MOV {dest}, AX")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adac_sym::SymbolTable;
    use adac_util::Handler;

    #[test]
    fn push_of_an_in_actual_pushes_its_value() {
        let mut symbols = SymbolTable::new();
        let handler = Handler::new();
        let mut ctx = Ctx {
            body_depth: 0,
            symbols: &mut symbols,
            handler: &handler,
        };
        assert_eq!(
            translate_push(&Place::Int(5), &mut ctx),
            vec!["PUSH 5"]
        );
    }

    #[test]
    fn push_of_an_out_actual_at_a_frame_slot_takes_its_address() {
        let mut symbols = SymbolTable::new();
        let handler = Handler::new();
        let mut ctx = Ctx {
            body_depth: 0,
            symbols: &mut symbols,
            handler: &handler,
        };
        let out = translate_push(&Place::Frame(-2).address_of(), &mut ctx);
        assert_eq!(out, vec!["LEA BX, [BP-2]", "PUSH BX"]);
    }

    #[test]
    fn push_of_an_out_actual_at_a_global_takes_its_offset() {
        let mut symbols = SymbolTable::new();
        let handler = Handler::new();
        let mut ctx = Ctx {
            body_depth: 0,
            symbols: &mut symbols,
            handler: &handler,
        };
        let out = translate_push(&Place::Named("X".to_string()).address_of(), &mut ctx);
        assert_eq!(out, vec!["PUSH OFFSET X"]);
    }
}

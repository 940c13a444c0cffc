//! `GET`/`PUT`/`PUTLN` lower to calls into an externally-linked runtime
//! (`_ReadInt`/`_WriteInt`/`_WriteStr`/`_WriteLn`) rather than inlined
//! `INT 21h` sequences, since assembling/linking/running the emitted
//! program is out of scope and the exact DOS protocol each routine uses
//! is therefore unobservable. The calling convention with the runtime
//! is the same fixed one the rest of the generator uses: the value
//! (for `_WriteInt`) or the destination's address (for `_WriteStr`)
//! goes through `AX`.

use adac_tac::Place;

use super::Ctx;

pub fn translate_read(dest: &Place, ctx: &mut Ctx) -> Vec<String> {
    let dest = ctx.text(dest);
    let mut lines = vec!["CALL _ReadInt".to_string()];
    if dest != "AX" {
        lines.push(format!("MOV {dest}, AX"));
    }
    lines
}

pub fn translate_write(operand: &Place, ctx: &mut Ctx) -> Vec<String> {
    let operand = ctx.text(operand);
    let mut lines = Vec::new();
    if operand != "AX" {
        lines.push(format!("MOV AX, {operand}"));
    }
    lines.push("CALL _WriteInt".to_string());
    lines
}

pub fn translate_write_string(label: &str) -> Vec<String> {
    vec![format!("MOV AX, OFFSET {label}"), "CALL _WriteStr".to_string()]
}

pub fn translate_new_line() -> Vec<String> {
    vec!["CALL _WriteLn".to_string()]
}

//! `GOTO`/`IF_<cond>`: a documented extension point. This language
//! subset has no `if`/`while`, so `adac-par`/`adac-tac` never emit
//! these opcodes; the translators exist only so a hand-written or
//! future-extended TAC file still assembles rather than producing an
//! `Unknown` line.

use adac_tac::Place;

use super::Ctx;

pub fn translate_goto(label: &str) -> Vec<String> {
    vec![format!("JMP {label}")]
}

/// `cond` is a condition mnemonic suffix (`E`, `NE`, `L`, `LE`, `G`,
/// `GE`) the parser read verbatim from an `if_<cond>` line; it is
/// combined with `J` to select the conditional jump.
pub fn translate_if(cond: &str, left: &Place, right: &Place, label: &str, ctx: &mut Ctx) -> Vec<String> {
    let left = ctx.text(left);
    let right = ctx.text(right);
    vec![
        format!("MOV AX, {left}"),
        format!("CMP AX, {right}"),
        format!("J{} {label}", cond.to_ascii_uppercase()),
    ]
}

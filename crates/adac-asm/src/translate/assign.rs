use adac_tac::Place;

use super::Ctx;

/// `dest = src` lowers to a single `MOV`, or nothing at all when both
/// sides resolve to the same storage (an assignment the parser only
/// ever produces across distinct `Place`s, but a hand-written TAC file
/// fed back through the round-trip parser is not guaranteed to).
pub fn translate_assign(dest: &Place, src: &Place, ctx: &mut Ctx) -> Vec<String> {
    let dest = ctx.text(dest);
    let src = ctx.text(src);
    if dest == src {
        return Vec::new();
    }
    vec![format!("MOV {dest}, {src}")]
}

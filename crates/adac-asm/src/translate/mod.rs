//! Per-opcode TAC-instruction-to-assembly-text translators.
//!
//! Each submodule owns one family of [`InstructionKind`] shapes and
//! returns the MASM instruction lines that implement it. None of them
//! know about activation records or segment layout; [`crate::program`]
//! is the only thing that assembles their output into a full listing.

mod arithmetic;
mod assign;
mod call;
mod control;
mod io;

use adac_sym::SymbolTable;
use adac_tac::{Instruction, InstructionKind};
use adac_util::Handler;

use crate::operand::operand_text;

/// Everything a single instruction's translator needs besides the
/// instruction itself: the emitting procedure's body scope depth (for
/// resolving its `Place::Temp` operands, see `crate::operand`) and the
/// symbol table/diagnostic handler that resolution reads from.
pub struct Ctx<'a> {
    pub body_depth: usize,
    pub symbols: &'a mut SymbolTable,
    pub handler: &'a Handler,
}

impl Ctx<'_> {
    pub fn text(&mut self, place: &adac_tac::Place) -> String {
        operand_text(place, self.body_depth, self.symbols, self.handler)
    }
}

/// Translates one TAC instruction to zero or more lines of assembly
/// text. `Label`/`StringDef`/`ProcStart`/`ProcEnd`/`ProgramStart`
/// instructions are handled by `crate::program` itself (they are
/// segment/procedure structure, not executable statements) and are
/// never passed here; this function returns an empty vector for any of
/// them it is handed anyway, rather than panicking on a shape a future
/// caller passes by mistake.
pub fn translate(instruction: &Instruction, ctx: &mut Ctx) -> Vec<String> {
    match &instruction.kind {
        InstructionKind::Assign { dest, src } => assign::translate_assign(dest, src, ctx),
        InstructionKind::Binary { dest, op, left, right } => {
            arithmetic::translate_binary(*op, dest, left, right, ctx)
        }
        InstructionKind::Unary { dest, op, operand } => {
            arithmetic::translate_unary(*op, dest, operand, ctx)
        }
        InstructionKind::Push { operand } => call::translate_push(operand, ctx),
        InstructionKind::Call { name, .. } => call::translate_call(name),
        InstructionKind::Return { value } => call::translate_return(value.as_ref(), ctx),
        InstructionKind::Retrieve { dest } => call::translate_retrieve(dest, ctx),
        InstructionKind::Read { dest } => io::translate_read(dest, ctx),
        InstructionKind::Write { operand } => io::translate_write(operand, ctx),
        InstructionKind::WriteString { label } => io::translate_write_string(label),
        InstructionKind::NewLine => io::translate_new_line(),
        InstructionKind::Goto { label } => control::translate_goto(label),
        InstructionKind::If { cond, left, right, label } => {
            control::translate_if(cond, left, right, label, ctx)
        }
        InstructionKind::ProcStart { .. }
        | InstructionKind::ProcEnd { .. }
        | InstructionKind::ProgramStart { .. }
        | InstructionKind::Label { .. }
        | InstructionKind::StringDef { .. } => Vec::new(),
        InstructionKind::Unknown(raw) => vec![format!("; unrecognized TAC: {raw}")],
    }
}

//! Slicing one procedure's own instructions out of the flat TAC stream.
//!
//! `adac-par` opens a procedure's `proc <name>` / `endp <name>` bracket
//! immediately on scope entry (see `adac-par/src/items.rs`), before any
//! nested procedure declared inside it is parsed. The consequence: a
//! nested procedure's entire `proc`/`endp` block sits *inside* its
//! enclosing procedure's block in program order, e.g.
//!
//! ```text
//! proc Outer
//!   ... Outer's declarations/statements before Inner ...
//!   proc Inner
//!     ...
//!   endp Inner
//!   ... Outer's declarations/statements after Inner ...
//! endp Outer
//! ```
//!
//! Assembly `PROC`/`ENDP` blocks cannot nest, so each procedure becomes
//! its own flat block in the emitted `.CODE` segment; this module's job
//! is to hand `crate::program` each procedure's *own* instructions with
//! any nested procedure's block skipped over wholesale (that nested
//! block is extracted again, separately, when its own name is
//! processed).

use adac_tac::{Instruction, InstructionKind};

use crate::error::{AsmError, AsmResult};

fn eq_name(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Returns `name`'s own instructions (the statements between its
/// `proc`/`endp` bracket, with any nested procedure's bracket and
/// everything inside it removed).
pub fn extract_procedure_body<'a>(
    instructions: &'a [Instruction],
    name: &str,
) -> AsmResult<Vec<&'a Instruction>> {
    let start = instructions
        .iter()
        .position(|inst| matches!(&inst.kind, InstructionKind::ProcStart { name: n } if eq_name(n, name)))
        .ok_or_else(|| AsmError::MissingProcedureBody(name.to_string()))?;

    let mut depth = 0usize;
    let mut end = None;
    for (offset, inst) in instructions[start..].iter().enumerate() {
        match &inst.kind {
            InstructionKind::ProcStart { .. } => depth += 1,
            InstructionKind::ProcEnd { .. } => {
                depth -= 1;
                if depth == 0 {
                    end = Some(start + offset);
                    break;
                }
            }
            _ => {}
        }
    }
    let end = end.ok_or_else(|| AsmError::MissingProcedureBody(name.to_string()))?;

    let mut own = Vec::new();
    let mut nested_depth = 0usize;
    for inst in &instructions[start + 1..end] {
        match &inst.kind {
            InstructionKind::ProcStart { .. } => {
                nested_depth += 1;
            }
            InstructionKind::ProcEnd { .. } => {
                nested_depth -= 1;
            }
            _ if nested_depth == 0 => own.push(inst),
            _ => {}
        }
    }
    Ok(own)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adac_tac::Place;

    fn start(name: &str) -> Instruction {
        Instruction::new(InstructionKind::ProcStart {
            name: name.to_string(),
        })
    }

    fn end(name: &str) -> Instruction {
        Instruction::new(InstructionKind::ProcEnd {
            name: name.to_string(),
        })
    }

    fn assign() -> Instruction {
        Instruction::new(InstructionKind::Assign {
            dest: Place::Frame(-2),
            src: Place::Int(1),
        })
    }

    #[test]
    fn flat_procedure_returns_its_own_instructions() {
        let instrs = vec![start("ONE"), assign(), end("ONE")];
        let own = extract_procedure_body(&instrs, "ONE").unwrap();
        assert_eq!(own.len(), 1);
    }

    #[test]
    fn nested_procedure_block_is_skipped_in_the_outer_slice() {
        let instrs = vec![
            start("OUTER"),
            assign(),
            start("INNER"),
            assign(),
            end("INNER"),
            assign(),
            end("OUTER"),
        ];
        let outer = extract_procedure_body(&instrs, "OUTER").unwrap();
        assert_eq!(outer.len(), 2, "Inner's body must not leak into Outer's");

        let inner = extract_procedure_body(&instrs, "INNER").unwrap();
        assert_eq!(inner.len(), 1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let instrs = vec![start("Main"), end("Main")];
        assert!(extract_procedure_body(&instrs, "MAIN").is_ok());
    }

    #[test]
    fn missing_procedure_is_an_error() {
        let instrs = vec![start("ONE"), end("ONE")];
        assert!(extract_procedure_body(&instrs, "TWO").is_err());
    }
}

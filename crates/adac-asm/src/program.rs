//! Assembles a full MASM-style listing: `.MODEL`/`.STACK`/`.DATA`/
//! `.CODE` segment directives, one `PROC`/`ENDP` block per procedure
//! with its activation-record prologue/epilogue wrapped around its
//! translated statements, a `MAIN` entry stub, and the closing `END`.

use adac_defs::VarType;
use adac_sym::{SymbolKind, SymbolTable};
use adac_tac::{Instruction, InstructionKind};
use adac_util::Handler;

use crate::convention::{Convention, Frame};
use crate::error::{AsmError, AsmResult};
use crate::procedure::extract_procedure_body;
use crate::translate::{translate, Ctx};

fn data_directive(var_type: VarType) -> &'static str {
    match var_type.size() {
        1 => "DB",
        4 => "DD",
        _ => "DW",
    }
}

fn program_entry_name(instructions: &[Instruction]) -> AsmResult<String> {
    instructions
        .iter()
        .find_map(|inst| match &inst.kind {
            InstructionKind::ProgramStart { name } => Some(name.clone()),
            _ => None,
        })
        .ok_or(AsmError::MissingEntryPoint)
}

fn data_segment(symbols: &SymbolTable) -> Vec<String> {
    let mut lines = Vec::new();
    for id in symbols.globals_in_order().collect::<Vec<_>>() {
        let symbol = symbols.get(id);
        let name = symbols.resolve_name(symbol.name).to_string();
        let var_data = symbol
            .kind
            .as_var_data()
            .expect("globals_in_order only yields Variable/Parameter symbols");
        lines.push(format!("{name} {} ?", data_directive(var_data.var_type)));
    }
    for (label, text) in symbols.string_literals_in_order().collect::<Vec<_>>() {
        let label = symbols.resolve_name(label).to_string();
        lines.push(format!("{label} DB '{text}'"));
    }
    lines
}

fn procedure_block(
    name: &str,
    body_depth: usize,
    frame: Frame,
    instructions: &[Instruction],
    symbols: &mut SymbolTable,
    handler: &Handler,
) -> AsmResult<Vec<String>> {
    let own = extract_procedure_body(instructions, name)?;
    let mut lines = vec![format!("{name} PROC")];
    for line in frame.prologue() {
        lines.push(format!("    {line}"));
    }
    let mut ctx = Ctx {
        body_depth,
        symbols,
        handler,
    };
    for inst in own {
        for line in translate(inst, &mut ctx) {
            lines.push(format!("    {line}"));
        }
    }
    for line in frame.epilogue() {
        lines.push(format!("    {line}"));
    }
    lines.push(format!("{name} ENDP"));
    Ok(lines)
}

fn main_stub(entry: &str) -> Vec<String> {
    vec![
        "MAIN PROC".to_string(),
        "    MOV AX, @DATA".to_string(),
        "    MOV DS, AX".to_string(),
        format!("    CALL {entry}"),
        "    MOV AH, 4CH".to_string(),
        "    INT 21H".to_string(),
        "MAIN ENDP".to_string(),
    ]
}

/// Translates a full flat TAC instruction stream into an assembled
/// listing. `symbols` must be the same table the parser that produced
/// `instructions` populated: procedure activation-record sizes and
/// global storage both come from it, not from the instruction stream
/// itself.
pub fn generate(
    instructions: &[Instruction],
    symbols: &mut SymbolTable,
    handler: &Handler,
) -> AsmResult<String> {
    let entry = program_entry_name(instructions)?;

    let mut out = Vec::new();
    out.push(".MODEL SMALL".to_string());
    out.push(format!(".STACK {}", Convention::STACK_RESERVE));
    out.push(".DATA".to_string());
    out.extend(data_segment(symbols));
    out.push(".CODE".to_string());

    for id in symbols.procedure_definitions_in_order().collect::<Vec<_>>() {
        let symbol = symbols.get(id).clone();
        let name = symbols.resolve_name(symbol.name).to_string();
        let proc_data = symbol
            .kind
            .as_proc_data()
            .ok_or_else(|| AsmError::NotAProcedure(name.clone()))?;
        let frame = Frame::new(proc_data.size_of_params, proc_data.size_of_locals);
        let body_depth = symbol.depth as usize + 1;
        out.extend(procedure_block(
            &name,
            body_depth,
            frame,
            instructions,
            symbols,
            handler,
        )?);
    }

    out.extend(main_stub(&entry));
    out.push("END MAIN".to_string());

    out.push(String::new());
    Ok(out.join("\n"))
}

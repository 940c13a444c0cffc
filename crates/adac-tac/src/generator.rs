use adac_defs::{ParameterMode, TacOp};
use indexmap::IndexMap;

use crate::error::{TacError, TacResult};
use crate::instruction::{Instruction, InstructionKind};
use crate::place::Place;

/// Buffers TAC instructions for one compilation unit and serializes them
/// to the text format once generation finishes.
///
/// `string_defs` is deliberately a separate map from
/// [`adac_sym::SymbolTable::add_string_literal`]: the symbol table owns
/// label assignment (so the same literal text always gets the same
/// label, even if it is referenced from two different procedures), while
/// this generator owns the serialized form that actually lands in the
/// TAC file. Merging the two would make the symbol table depend on the
/// TAC output format.
#[derive(Default)]
pub struct TacGenerator {
    instructions: Vec<Instruction>,
    temp_counter: u32,
    string_defs: IndexMap<String, String>,
    program_entry: Option<String>,
    current_line: Option<u32>,
}

impl TacGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates subsequently emitted instructions with a source line,
    /// until the next call changes it. The parser calls this once per
    /// statement before emitting that statement's TAC.
    pub fn set_current_line(&mut self, line: u32) {
        self.current_line = Some(line);
    }

    fn push(&mut self, kind: InstructionKind) {
        self.instructions.push(Instruction {
            kind,
            line: self.current_line,
        });
    }

    /// Allocates a fresh temporary. The counter resets at every
    /// `emit_proc_start`, so temporaries are numbered from 1 within each
    /// procedure (`_t1`, `_t2`, ...) rather than monotonically across the
    /// whole program. Pre-incremented, matching `TACGenerator.py`'s
    /// `self.temp_counter += 1; f"_t{self.temp_counter}"`.
    pub fn new_temp(&mut self) -> Place {
        self.temp_counter += 1;
        Place::Temp(self.temp_counter)
    }

    pub fn emit_proc_start(&mut self, name: &str) {
        self.temp_counter = 0;
        self.push(InstructionKind::ProcStart {
            name: name.to_string(),
        });
    }

    pub fn emit_proc_end(&mut self, name: &str) {
        self.push(InstructionKind::ProcEnd {
            name: name.to_string(),
        });
    }

    /// Records the program's entry-point procedure. Not an instruction
    /// in the buffer: it becomes the final `start <name>` line at
    /// [`TacGenerator::write_output`] time.
    pub fn emit_program_start(&mut self, name: &str) {
        self.program_entry = Some(name.to_string());
    }

    pub fn emit_binary_op(&mut self, op: TacOp, dest: Place, left: Place, right: Place) {
        self.push(InstructionKind::Binary { dest, op, left, right });
    }

    pub fn emit_unary_op(&mut self, op: TacOp, dest: Place, operand: Place) {
        self.push(InstructionKind::Unary { dest, op, operand });
    }

    pub fn emit_assignment(&mut self, dest: Place, src: Place) {
        self.push(InstructionKind::Assign { dest, src });
    }

    /// `push place` for `IN` parameters; `push @place` for `OUT`/`INOUT`,
    /// since those pass the variable's address rather than its value.
    pub fn emit_push(&mut self, place: Place, mode: ParameterMode) {
        let operand = match mode {
            ParameterMode::In => place,
            ParameterMode::Out | ParameterMode::InOut => place.address_of(),
        };
        self.push(InstructionKind::Push { operand });
    }

    pub fn emit_call(&mut self, name: &str) {
        self.push(InstructionKind::Call {
            name: name.to_string(),
            arg_count: None,
        });
    }

    pub fn emit_read(&mut self, dest: Place) {
        self.push(InstructionKind::Read { dest });
    }

    pub fn emit_write(&mut self, operand: Place) {
        self.push(InstructionKind::Write { operand });
    }

    pub fn emit_write_string_by_label(&mut self, label: &str) {
        self.push(InstructionKind::WriteString {
            label: label.to_string(),
        });
    }

    pub fn emit_new_line(&mut self) {
        self.push(InstructionKind::NewLine);
    }

    /// Records a label's serialized string value. Call once per label;
    /// calling again with the same label just overwrites the value,
    /// since the symbol table is what guarantees labels are unique.
    pub fn add_string_definition(&mut self, label: &str, value: &str) {
        self.string_defs.insert(label.to_string(), value.to_string());
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn program_entry(&self) -> Option<&str> {
        self.program_entry.as_deref()
    }

    /// Serializes string definitions, then every buffered instruction in
    /// emission order, then the final `start <name>` line.
    pub fn write_output(&self) -> TacResult<String> {
        let entry = self
            .program_entry
            .as_deref()
            .ok_or(TacError::MissingProgramEntry)?;

        let mut out = String::new();
        for (label, value) in &self.string_defs {
            out.push_str(&format!("{label}: .ASCIZ \"{value}\"\n"));
        }
        for instr in &self.instructions {
            out.push_str(&instr.to_string());
            out.push('\n');
        }
        out.push_str(&format!("start {entry}\n"));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_output_fails_without_a_program_entry() {
        let gen = TacGenerator::new();
        assert_eq!(gen.write_output(), Err(TacError::MissingProgramEntry));
    }

    #[test]
    fn proc_start_resets_the_temp_counter() {
        let mut gen = TacGenerator::new();
        gen.emit_proc_start("one");
        assert_eq!(gen.new_temp(), Place::Temp(1));
        assert_eq!(gen.new_temp(), Place::Temp(2));
        gen.emit_proc_start("two");
        assert_eq!(gen.new_temp(), Place::Temp(1));
    }

    #[test]
    fn write_output_orders_string_defs_then_instructions_then_start() {
        let mut gen = TacGenerator::new();
        gen.add_string_definition("_S0", "hi$");
        gen.emit_proc_start("one");
        gen.emit_assignment(Place::Frame(-2), Place::Int(1));
        gen.emit_proc_end("one");
        gen.emit_program_start("one");

        let out = gen.write_output().unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "_S0: .ASCIZ \"hi$\"");
        assert_eq!(lines[1], "proc one");
        assert_eq!(lines[2], "_BP-2 = 1");
        assert_eq!(lines[3], "endp one");
        assert_eq!(lines[4], "start one");
    }

    #[test]
    fn emit_push_address_of_for_out_and_inout() {
        let mut gen = TacGenerator::new();
        gen.emit_push(Place::Frame(4), ParameterMode::In);
        gen.emit_push(Place::Frame(-2), ParameterMode::Out);
        gen.emit_push(Place::Frame(-4), ParameterMode::InOut);
        let rendered: Vec<_> = gen.instructions().iter().map(|i| i.to_string()).collect();
        assert_eq!(rendered, vec!["push _BP+4", "push @_BP-2", "push @_BP-4"]);
    }
}

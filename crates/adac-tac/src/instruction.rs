use std::fmt;

use adac_defs::TacOp;

use crate::place::Place;

/// The operation one TAC instruction performs.
///
/// A plain `struct Instruction { label, opcode, dest, src1, src2 }` with
/// every field optional would let the ASM generator construct
/// nonsensical combinations (a `Call` with two source operands, a
/// `NewLine` with a destination). Each shape gets its own variant
/// instead, carrying exactly the operands it uses.
#[derive(Clone, Debug, PartialEq)]
pub enum InstructionKind {
    Assign { dest: Place, src: Place },
    Binary { dest: Place, op: TacOp, left: Place, right: Place },
    Unary { dest: Place, op: TacOp, operand: Place },
    Push { operand: Place },
    Call { name: String, arg_count: Option<u32> },
    Read { dest: Place },
    Write { operand: Place },
    WriteString { label: String },
    NewLine,
    Goto { label: String },
    /// `if_<cond> a, b, label` - a documented extension point; the
    /// generator never emits one (this subset has no `if`/`while`) but
    /// the parser still recognizes it so a hand-written or future TAC
    /// file round-trips.
    If { cond: String, left: Place, right: Place, label: String },
    Retrieve { dest: Place },
    Return { value: Option<Place> },
    ProcStart { name: String },
    ProcEnd { name: String },
    ProgramStart { name: String },
    /// A bare `<label>:` line with no instruction attached.
    Label { name: String },
    StringDef { label: String, value: String },
    /// A line the parser could not classify. Carried verbatim rather
    /// than dropped, matching the "never raises on unknown opcodes"
    /// contract.
    Unknown(String),
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstructionKind::Assign { dest, src } => write!(f, "{dest} = {src}"),
            InstructionKind::Binary { dest, op, left, right } => {
                write!(f, "{dest} = {left} {op} {right}")
            }
            InstructionKind::Unary { dest, op, operand } => write!(f, "{dest} = {op} {operand}"),
            InstructionKind::Push { operand } => write!(f, "push {operand}"),
            InstructionKind::Call { name, arg_count } => match arg_count {
                Some(n) => write!(f, "call {name}, {n}"),
                None => write!(f, "call {name}"),
            },
            InstructionKind::Read { dest } => write!(f, "rdi {dest}"),
            InstructionKind::Write { operand } => write!(f, "wri {operand}"),
            InstructionKind::WriteString { label } => write!(f, "wrs {label}"),
            InstructionKind::NewLine => write!(f, "wrln"),
            InstructionKind::Goto { label } => write!(f, "goto {label}"),
            InstructionKind::If { cond, left, right, label } => {
                write!(f, "if_{cond} {left}, {right}, {label}")
            }
            InstructionKind::Retrieve { dest } => write!(f, "{dest} = retrieve"),
            InstructionKind::Return { value: Some(v) } => write!(f, "return {v}"),
            InstructionKind::Return { value: None } => write!(f, "return"),
            InstructionKind::ProcStart { name } => write!(f, "proc {name}"),
            InstructionKind::ProcEnd { name } => write!(f, "endp {name}"),
            InstructionKind::ProgramStart { name } => write!(f, "start {name}"),
            InstructionKind::Label { name } => write!(f, "{name}:"),
            InstructionKind::StringDef { label, value } => {
                write!(f, "{label}: .ASCIZ \"{value}\"")
            }
            InstructionKind::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

/// One line of TAC: its operation plus the source line it came from,
/// kept for diagnostics that point back at the statement that produced
/// it (not serialized into the text format itself).
#[derive(Clone, Debug, PartialEq)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub line: Option<u32>,
}

impl Instruction {
    pub fn new(kind: InstructionKind) -> Self {
        Self { kind, line: None }
    }

    pub fn at_line(kind: InstructionKind, line: u32) -> Self {
        Self { kind, line: Some(line) }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

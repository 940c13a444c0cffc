//! Diagnostic codes for the compiler's phases.
//!
//! Codes are grouped by phase in hundreds: 1xxx lexical, 2xxx syntactic,
//! 3xxx semantic, 4xxx TAC/ASM generation, 5xxx I/O.

/// A stable, documented identifier for one class of diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    pub number: u32,
    pub name: &'static str,
}

impl DiagnosticCode {
    pub const fn new(number: u32, name: &'static str) -> Self {
        Self { number, name }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{:04}[{}]", self.number, self.name)
    }
}

// --- Lexical ---
pub const E_LEX_UNRECOGNIZED_CHAR: DiagnosticCode = DiagnosticCode::new(1001, "unrecognized_char");
pub const E_LEX_IDENT_TOO_LONG: DiagnosticCode = DiagnosticCode::new(1002, "identifier_too_long");
pub const E_LEX_UNTERMINATED_STRING: DiagnosticCode =
    DiagnosticCode::new(1003, "unterminated_string");
pub const E_LEX_UNTERMINATED_CHAR: DiagnosticCode = DiagnosticCode::new(1004, "unterminated_char");
pub const E_LEX_INVALID_NUMBER: DiagnosticCode = DiagnosticCode::new(1005, "invalid_number");

// --- Syntactic ---
pub const E_PAR_UNEXPECTED_TOKEN: DiagnosticCode = DiagnosticCode::new(2001, "unexpected_token");
pub const E_PAR_EXPECTED_TOKEN: DiagnosticCode = DiagnosticCode::new(2002, "expected_token");
pub const E_PAR_UNEXPECTED_EOF: DiagnosticCode = DiagnosticCode::new(2003, "unexpected_eof");
pub const E_PAR_MISMATCHED_DELIM: DiagnosticCode = DiagnosticCode::new(2004, "mismatched_delimiter");

// --- Semantic ---
pub const E_SEM_DUPLICATE_DECL: DiagnosticCode = DiagnosticCode::new(3001, "duplicate_declaration");
pub const E_SEM_UNDECLARED_IDENT: DiagnosticCode =
    DiagnosticCode::new(3002, "undeclared_identifier");
pub const E_SEM_ASSIGN_TO_CONSTANT: DiagnosticCode =
    DiagnosticCode::new(3003, "assignment_to_constant");
pub const E_SEM_ASSIGN_TO_NON_VARIABLE: DiagnosticCode =
    DiagnosticCode::new(3004, "assignment_to_non_variable");
pub const E_SEM_PROC_NAME_MISMATCH: DiagnosticCode =
    DiagnosticCode::new(3005, "procedure_name_mismatch");
pub const E_SEM_PARAM_COUNT_MISMATCH: DiagnosticCode =
    DiagnosticCode::new(3006, "parameter_count_mismatch");
pub const E_SEM_UNKNOWN_TYPE: DiagnosticCode = DiagnosticCode::new(3007, "unknown_type");

// --- TAC / ASM generation ---
pub const E_TAC_MISSING_PROGRAM_ENTRY: DiagnosticCode =
    DiagnosticCode::new(4001, "missing_program_entry");
pub const E_TAC_UNRESOLVABLE_PLACE: DiagnosticCode =
    DiagnosticCode::new(4002, "unresolvable_place");
pub const W_TAC_UNKNOWN_OPCODE: DiagnosticCode = DiagnosticCode::new(4003, "unknown_opcode");

// --- I/O ---
pub const E_IO_INPUT_MISSING: DiagnosticCode = DiagnosticCode::new(5001, "input_file_missing");
pub const E_IO_OUTPUT_UNWRITABLE: DiagnosticCode =
    DiagnosticCode::new(5002, "output_file_unwritable");

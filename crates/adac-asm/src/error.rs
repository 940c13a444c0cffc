use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("procedure '{0}' named in the symbol table has no matching PROC_START/PROC_END bracket in the TAC stream")]
    MissingProcedureBody(String),
    #[error("the TAC stream has no 'start <name>' line naming the program's entry procedure")]
    MissingEntryPoint,
    #[error("a symbol in the procedure-definition table, '{0}', is not a Procedure or Function symbol")]
    NotAProcedure(String),
}

pub type AsmResult<T> = std::result::Result<T, AsmError>;

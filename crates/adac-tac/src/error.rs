use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TacError {
    #[error("write_output called before the program entry point was set")]
    MissingProgramEntry,
}

pub type TacResult<T> = std::result::Result<T, TacError>;

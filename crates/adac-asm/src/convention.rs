//! The fixed x86 16-bit real-mode calling convention: which registers
//! are reserved for what, and the activation-record prologue/epilogue
//! every translated procedure shares.
//!
//! Structurally this mirrors the teacher's `SystemVAbi`
//! (`faxc-lir/src/calling_convention.rs`): a zero-sized convention type
//! carrying named register/constant associated items plus free
//! functions that build the prologue/epilogue instruction sequences.
//! Unlike System V, nothing here is chosen by a register allocator —
//! the convention is entirely fixed, so there is no argument-class or
//! callee-saved-register bookkeeping to carry.

/// The fixed 16-bit real-mode convention this generator targets.
///
/// `AX` is the general scratch register and doubles as the return
/// value register for functions; `BX` is the secondary staging
/// register used whenever an operand must be loaded out of the way
/// before `AX` is clobbered (see [`crate::translate`]); `DX` holds the
/// high word of a 32-bit dividend during `DIV`/`IDIV`.
pub struct Convention;

impl Convention {
    pub const SCRATCH: &'static str = "AX";
    pub const STAGING: &'static str = "BX";
    pub const DIV_HIGH: &'static str = "DX";

    /// Stack segment reservation emitted once per program (`.STACK`
    /// directive argument), in bytes, expressed in MASM hex notation.
    pub const STACK_RESERVE: &'static str = "100H";
}

/// One procedure's activation-record geometry, computed from its
/// already-finalized [`adac_sym::ProcData`] (`size_of_params` and
/// `size_of_locals`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub size_of_params: u16,
    pub size_of_locals: u16,
}

impl Frame {
    pub fn new(size_of_params: u16, size_of_locals: u16) -> Self {
        Self {
            size_of_params,
            size_of_locals,
        }
    }

    /// `PUSH BP` / `MOV BP, SP` / `SUB SP, size_of_locals` (the last
    /// line omitted when the procedure declares no locals or temps).
    pub fn prologue(&self) -> Vec<String> {
        let mut lines = vec!["PUSH BP".to_string(), "MOV BP, SP".to_string()];
        if self.size_of_locals > 0 {
            lines.push(format!("SUB SP, {}", self.size_of_locals));
        }
        lines
    }

    /// `MOV SP, BP` / `POP BP` / `RET size_of_params` (a bare `RET`
    /// when the procedure takes no parameters — MASM accepts `RET 0`
    /// too, but the original driver only ever emits the operand when
    /// it's nonzero, and this preserves that text).
    pub fn epilogue(&self) -> Vec<String> {
        let mut lines = vec!["MOV SP, BP".to_string(), "POP BP".to_string()];
        if self.size_of_params > 0 {
            lines.push(format!("RET {}", self.size_of_params));
        } else {
            lines.push("RET".to_string());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prologue_omits_sub_sp_when_there_are_no_locals() {
        let frame = Frame::new(4, 0);
        assert_eq!(frame.prologue(), vec!["PUSH BP", "MOV BP, SP"]);
    }

    #[test]
    fn prologue_reserves_locals_space_when_present() {
        let frame = Frame::new(0, 6);
        assert_eq!(
            frame.prologue(),
            vec!["PUSH BP", "MOV BP, SP", "SUB SP, 6"]
        );
    }

    #[test]
    fn epilogue_pops_params_off_the_caller_stack() {
        let frame = Frame::new(4, 2);
        assert_eq!(frame.epilogue(), vec!["MOV SP, BP", "POP BP", "RET 4"]);
    }

    #[test]
    fn epilogue_is_a_bare_ret_for_a_parameterless_procedure() {
        let frame = Frame::new(0, 2);
        assert_eq!(frame.epilogue(), vec!["MOV SP, BP", "POP BP", "RET"]);
    }
}

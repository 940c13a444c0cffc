use std::fmt;

/// The TAC mnemonic a binary or unary Ada operator lowers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TacOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Rem,
    And,
    Or,
    Not,
    UMinus,
}

impl fmt::Display for TacOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TacOp::Add => "ADD",
            TacOp::Sub => "SUB",
            TacOp::Mul => "MUL",
            TacOp::Div => "DIV",
            TacOp::Mod => "MOD",
            TacOp::Rem => "REM",
            TacOp::And => "AND",
            TacOp::Or => "OR",
            TacOp::Not => "NOT",
            TacOp::UMinus => "UMINUS",
        };
        write!(f, "{name}")
    }
}

impl TacOp {
    /// The reverse mapping, used by the TAC parser to recognize a
    /// mnemonic it reads back from a TAC file.
    pub fn from_mnemonic(mnemonic: &str) -> Option<TacOp> {
        Some(match mnemonic {
            "ADD" => TacOp::Add,
            "SUB" => TacOp::Sub,
            "MUL" => TacOp::Mul,
            "DIV" => TacOp::Div,
            "MOD" => TacOp::Mod,
            "REM" => TacOp::Rem,
            "AND" => TacOp::And,
            "OR" => TacOp::Or,
            "NOT" => TacOp::Not,
            "UMINUS" => TacOp::UMinus,
            _ => return None,
        })
    }
}

/// `addop ∈ {+, -, or}`.
pub fn addop_to_tac(lexeme: &str) -> Option<TacOp> {
    match lexeme.to_ascii_uppercase().as_str() {
        "+" => Some(TacOp::Add),
        "-" => Some(TacOp::Sub),
        "OR" => Some(TacOp::Or),
        _ => None,
    }
}

/// `mulop ∈ {*, /, mod, rem, and}`.
pub fn mulop_to_tac(lexeme: &str) -> Option<TacOp> {
    match lexeme.to_ascii_uppercase().as_str() {
        "*" => Some(TacOp::Mul),
        "/" => Some(TacOp::Div),
        "MOD" => Some(TacOp::Mod),
        "REM" => Some(TacOp::Rem),
        "AND" => Some(TacOp::And),
        _ => None,
    }
}

use std::fmt;

/// Every distinct kind of lexeme the lexer can produce.
///
/// Reserved words get their own variant rather than sharing `Identifier`
/// with a keyword flag, so the parser can match on kind directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    RealLiteral,
    StringLiteral,
    CharLiteral,

    // Reserved words
    Procedure,
    Is,
    Begin,
    End,
    In,
    Out,
    Constant,
    Integer,
    Float,
    Char,
    Boolean,
    Get,
    Put,
    Putln,
    Null,
    Mod,
    Rem,
    And,
    Or,
    Not,

    // Punctuation
    Assign,    // :=
    Colon,     // :
    Semicolon, // ;
    Comma,     // ,
    Dot,       // .
    LParen,    // (
    RParen,    // )

    // Operators
    Plus,
    Minus,
    Star,
    Slash,

    // Relational - tokenized but not yet consumed by the expression
    // grammar (see the parser's extension-point comment on relops).
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    Invalid,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One lexeme with its kind, source location, and decoded value.
///
/// Immutable once constructed; at most one of the value fields is set,
/// depending on `kind`.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
    pub int_value: Option<i64>,
    pub real_value: Option<f64>,
    pub string_value: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
            int_value: None,
            real_value: None,
            string_value: None,
        }
    }

    pub fn with_int(mut self, value: i64) -> Self {
        self.int_value = Some(value);
        self
    }

    pub fn with_real(mut self, value: f64) -> Self {
        self.real_value = Some(value);
        self
    }

    pub fn with_string(mut self, value: impl Into<String>) -> Self {
        self.string_value = Some(value.into());
        self
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<14}{:<20}", self.kind.to_string(), self.lexeme)?;
        if let Some(i) = self.int_value {
            write!(f, "{i}")?;
        } else if let Some(r) = self.real_value {
            write!(f, "{r}")?;
        } else if let Some(s) = &self.string_value {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

use adac_defs::TokenKind;

/// The two independent knobs §4.3 names for error handling.
///
/// Neither is a recoverable runtime error on its own - they shape how
/// the parser reacts to one, so they travel together as plain
/// configuration rather than as a `Result` the caller has to thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParserConfig {
    /// The first syntax *or* semantic error aborts the parse, returning
    /// `Err(Fatal)` instead of continuing.
    pub stop_on_error: bool,
    /// On a syntax error (when not already fatal), skip tokens up to a
    /// per-production synchronization set instead of leaving the cursor
    /// where the mismatch was found.
    pub panic_mode_recover: bool,
}

impl ParserConfig {
    pub fn new(stop_on_error: bool, panic_mode_recover: bool) -> Self {
        Self {
            stop_on_error,
            panic_mode_recover,
        }
    }
}

/// Which nonterminal a synchronization set belongs to, purely to name
/// the `&[TokenKind]` slices in [`sync_set`] at call sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxContext {
    Procedure,
    Declaration,
    Statement,
}

/// The follow-set a production resynchronizes on, per §4.3: "typically
/// `;`, `end`, EOF".
pub fn sync_set(context: SyntaxContext) -> &'static [TokenKind] {
    match context {
        SyntaxContext::Procedure => &[TokenKind::Procedure, TokenKind::Eof],
        SyntaxContext::Declaration => {
            &[TokenKind::Semicolon, TokenKind::Begin, TokenKind::Eof]
        }
        SyntaxContext::Statement => &[TokenKind::Semicolon, TokenKind::End, TokenKind::Eof],
    }
}

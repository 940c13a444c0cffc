use adac_defs::{ParameterMode, Token, VarType};
use adac_util::Name;
use indexmap::IndexMap;

use crate::table::SymbolId;

/// A literal value attached to a `CONSTANT` symbol.
///
/// The grammar only ever feeds a numeric `Literal` into a `constant`
/// declaration, so there is no `Str`/`Bool` variant to guess the shape of.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConstValue {
    Int(i64),
    Real(f64),
}

impl std::fmt::Display for ConstValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstValue::Int(v) => write!(f, "{v}"),
            ConstValue::Real(v) => write!(f, "{v}"),
        }
    }
}

/// Shared payload for `VARIABLE` and `PARAMETER` symbols.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VarData {
    pub var_type: VarType,
    /// Signed byte offset from the frame pointer. Positive for
    /// parameters, negative for locals and compiler temporaries.
    pub offset: i32,
    pub size: u16,
}

/// Payload for `CONSTANT` symbols.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstData {
    pub var_type: VarType,
    pub value: ConstValue,
}

/// Payload for `PROCEDURE`/`FUNCTION` symbols.
///
/// Filled in twice: the symbol itself is inserted as soon as the header's
/// name is known (so nested/self-recursive calls can resolve it), and
/// this payload is finalized once the full parameter list, their modes,
/// and the locals/temps size are known — see
/// [`crate::SymbolTable::finalize_procedure`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProcData {
    /// Parameter symbols in declaration order (leftmost first).
    pub params: Vec<SymbolId>,
    /// Parameter passing mode, keyed by parameter name.
    pub param_modes: IndexMap<Name, ParameterMode>,
    pub size_of_locals: u16,
    pub size_of_params: u16,
    /// `Some` only for `FUNCTION` symbols.
    pub return_type: Option<VarType>,
}

/// The kind-specific payload of a [`Symbol`], tagged by
/// [`adac_defs::EntryType`].
#[derive(Clone, Debug, PartialEq)]
pub enum SymbolKind {
    Variable(VarData),
    Parameter(VarData),
    Constant(ConstData),
    Procedure(ProcData),
    Function(ProcData),
    /// The interned, `$`-terminated text of a string literal.
    StringLiteral(String),
    /// Reserved for `TYPE` entries; the grammar never declares one, so
    /// this carries no payload.
    Type,
}

impl SymbolKind {
    pub fn entry_type(&self) -> adac_defs::EntryType {
        use adac_defs::EntryType;
        match self {
            SymbolKind::Variable(_) => EntryType::Variable,
            SymbolKind::Parameter(_) => EntryType::Parameter,
            SymbolKind::Constant(_) => EntryType::Constant,
            SymbolKind::Procedure(_) => EntryType::Procedure,
            SymbolKind::Function(_) => EntryType::Function,
            SymbolKind::StringLiteral(_) => EntryType::StringLiteral,
            SymbolKind::Type => EntryType::Type,
        }
    }

    pub fn as_var_data(&self) -> Option<&VarData> {
        match self {
            SymbolKind::Variable(d) | SymbolKind::Parameter(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_proc_data(&self) -> Option<&ProcData> {
        match self {
            SymbolKind::Procedure(d) | SymbolKind::Function(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, SymbolKind::Parameter(_))
    }
}

/// One entry in the symbol table.
///
/// `name`/`token`/`depth` are common to every entry kind; everything
/// else lives behind [`SymbolKind`] so a `VARIABLE` symbol cannot
/// accidentally carry a `param_modes` map.
#[derive(Clone, Debug, PartialEq)]
pub struct Symbol {
    pub name: Name,
    /// The declaring token, kept for diagnostics that point back at the
    /// declaration site (e.g. a duplicate-declaration error).
    pub token: Token,
    pub depth: u32,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn entry_type(&self) -> adac_defs::EntryType {
        self.kind.entry_type()
    }
}

use std::fmt;

use adac_sym::{ConstValue, Symbol, SymbolKind};
use adac_util::diagnostic::E_TAC_UNRESOLVABLE_PLACE;
use adac_util::Handler;

/// An operand in a TAC instruction.
///
/// Earlier drafts of this generator built operand text by string
/// concatenation (`"_BP+" + str(offset)`), which meant the calling
/// convention leaked into every call site that touched a place. `Place`
/// is a tagged value instead; the `_BP±k` / `_t<n>` / `@name` surface
/// forms only exist at [`fmt::Display`] time, and the ASM generator
/// pattern-matches on the variant rather than re-parsing text.
#[derive(Clone, Debug, PartialEq)]
pub enum Place {
    Int(i64),
    Real(f64),
    /// A compiler-allocated temporary, `_t<n>`.
    Temp(u32),
    /// Frame-relative storage: positive for parameters, negative for
    /// locals and temporaries.
    Frame(i32),
    /// A plain name at outermost (global) scope.
    Named(String),
    AddressOf(Box<Place>),
    /// A symbol had no resolvable storage; a diagnostic has already
    /// been recorded against it.
    Error,
}

impl Place {
    pub fn address_of(self) -> Place {
        Place::AddressOf(Box::new(self))
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::Int(v) => write!(f, "{v}"),
            Place::Real(v) => write!(f, "{v}"),
            Place::Temp(n) => write!(f, "_t{n}"),
            Place::Frame(k) if *k >= 0 => write!(f, "_BP+{k}"),
            Place::Frame(k) => write!(f, "_BP-{}", -k),
            Place::Named(name) => write!(f, "{name}"),
            Place::AddressOf(inner) => write!(f, "@{inner}"),
            Place::Error => write!(f, "<unresolved>"),
        }
    }
}

/// Resolves a declared symbol to the [`Place`] its uses should refer to.
///
/// Order matters and mirrors the generator's original resolution rule:
/// a `CONSTANT`'s literal value wins before depth is even considered,
/// then outermost-scope symbols resolve to their plain name, then
/// anything left with a frame offset resolves to `_BP±k`. A symbol that
/// falls through all three (a procedure, function, or string-literal
/// symbol mistakenly used as an expression operand) is a generator bug,
/// not a user error, but we still report it rather than panicking.
pub fn resolve_place(symbol: &Symbol, name_text: &str, handler: &Handler) -> Place {
    if let SymbolKind::Constant(data) = &symbol.kind {
        return match data.value {
            ConstValue::Int(v) => Place::Int(v),
            ConstValue::Real(v) => Place::Real(v),
        };
    }

    if symbol.depth <= 1 {
        return Place::Named(name_text.to_string());
    }

    if let Some(var_data) = symbol.kind.as_var_data() {
        return Place::Frame(var_data.offset);
    }

    handler
        .build_error(format!(
            "'{name_text}' has no storage location to generate a place for"
        ))
        .code(E_TAC_UNRESOLVABLE_PLACE)
        .emit(handler);
    Place::Error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_places_render_with_sign() {
        assert_eq!(Place::Frame(4).to_string(), "_BP+4");
        assert_eq!(Place::Frame(-2).to_string(), "_BP-2");
    }

    #[test]
    fn temp_renders_with_underscore_t_prefix() {
        assert_eq!(Place::Temp(3).to_string(), "_t3");
    }

    #[test]
    fn address_of_wraps_the_inner_rendering() {
        let place = Place::Frame(-2).address_of();
        assert_eq!(place.to_string(), "@_BP-2");
    }
}

use rustc_hash::FxHashMap;

use adac_defs::Token;
use adac_util::{define_idx, Handler, IndexVec, Interner, Name};
use indexmap::IndexMap;

use crate::error::{SymbolError, SymbolResult};
use crate::symbol::{ProcData, Symbol, SymbolKind};

define_idx!(pub struct SymbolId);

fn normalize(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Scoped symbol table over a flat [`IndexVec`] arena.
///
/// Scopes are `Vec<FxHashMap<Name, SymbolId>>` and are never popped on
/// [`SymbolTable::exit_scope`] — only `current_depth` moves back down.
/// This is what makes historical lookups (`lookup` with a
/// `search_from_depth`) possible after a nested procedure's scope has
/// already closed: the entries are still sitting in `scopes[depth]`,
/// just no longer reachable through ordinary (innermost-first) lookup.
pub struct SymbolTable {
    interner: Interner,
    arena: IndexVec<SymbolId, Symbol>,
    scopes: Vec<FxHashMap<Name, SymbolId>>,
    current_depth: usize,
    /// PROCEDURE/FUNCTION symbols, keyed by name, kept reachable for the
    /// lifetime of the table regardless of scope depth — the TAC and ASM
    /// generators need to find every procedure body after the parser has
    /// long since exited its scope.
    procedure_definitions: IndexMap<Name, SymbolId>,
    /// Raw literal text -> its interned `_S<n>` label, for de-duplication.
    string_literals: IndexMap<String, Name>,
    /// Label `Name` -> the arena id holding its `StringLiteral` symbol,
    /// in the order labels were first assigned.
    string_literal_symbols: IndexMap<Name, SymbolId>,
    next_string_label: u32,
}

impl SymbolTable {
    /// A fresh table with scope depth 0 already entered, matching the
    /// convention that depth 0 is the outermost (global) scope rather
    /// than a sentinel "no scope yet" state.
    pub fn new() -> Self {
        Self {
            interner: Interner::new(),
            arena: IndexVec::new(),
            scopes: vec![FxHashMap::default()],
            current_depth: 0,
            procedure_definitions: IndexMap::new(),
            string_literals: IndexMap::new(),
            string_literal_symbols: IndexMap::new(),
            next_string_label: 0,
        }
    }

    pub fn current_depth(&self) -> usize {
        self.current_depth
    }

    pub fn enter_scope(&mut self) {
        self.current_depth += 1;
        if self.current_depth == self.scopes.len() {
            self.scopes.push(FxHashMap::default());
        }
    }

    /// Closes the innermost scope. The scope's entries are kept around
    /// in `scopes[old_depth]` for historical lookup; only the depth
    /// counter moves.
    pub fn exit_scope(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    fn intern(&mut self, text: &str) -> Name {
        self.interner.intern(&normalize(text))
    }

    pub fn resolve_name(&self, name: Name) -> &str {
        self.interner.resolve(name)
    }

    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.arena[id]
    }

    pub fn get_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.arena[id]
    }

    /// Declares `name` in the current scope.
    ///
    /// Fails if `name` is already declared in this same scope; shadowing
    /// an outer scope's declaration is fine and expected.
    pub fn insert(
        &mut self,
        handler: &Handler,
        name_text: &str,
        token: Token,
        kind: SymbolKind,
    ) -> SymbolResult<SymbolId> {
        let name = self.intern(name_text);
        let depth = self.current_depth;
        if self.scopes[depth].contains_key(&name) {
            return Err(SymbolError::Duplicate {
                name: name_text.to_string(),
                depth,
            });
        }

        let is_proc = matches!(kind, SymbolKind::Procedure(_) | SymbolKind::Function(_));
        let symbol = Symbol {
            name,
            token,
            depth: depth as u32,
            kind,
        };
        let id = self.arena.push(symbol);
        self.scopes[depth].insert(name, id);

        if is_proc {
            if self.procedure_definitions.contains_key(&name) {
                handler
                    .build_warning(format!(
                        "procedure or function '{name_text}' redefines an earlier declaration"
                    ))
                    .emit(handler);
            }
            self.procedure_definitions.insert(name, id);
        }

        Ok(id)
    }

    /// Resolves `name_text` to its symbol.
    ///
    /// - `current_scope_only`: only the innermost scope is searched.
    /// - `search_from_depth`: searches exactly that scope, bypassing the
    ///   innermost-first walk. Used to re-resolve a nested procedure's
    ///   locals after control has returned to the enclosing scope.
    /// - otherwise: walks from `current_depth` down to 0, innermost match
    ///   wins (ordinary lexical shadowing).
    pub fn lookup(
        &mut self,
        name_text: &str,
        current_scope_only: bool,
        search_from_depth: Option<usize>,
    ) -> SymbolResult<SymbolId> {
        let name = self.intern(name_text);

        if let Some(depth) = search_from_depth {
            return self
                .scopes
                .get(depth)
                .and_then(|scope| scope.get(&name))
                .copied()
                .ok_or_else(|| SymbolError::NotFound {
                    name: name_text.to_string(),
                });
        }

        if current_scope_only {
            return self.scopes[self.current_depth]
                .get(&name)
                .copied()
                .ok_or_else(|| SymbolError::NotFound {
                    name: name_text.to_string(),
                });
        }

        for depth in (0..=self.current_depth).rev() {
            if let Some(&id) = self.scopes[depth].get(&name) {
                return Ok(id);
            }
        }
        Err(SymbolError::NotFound {
            name: name_text.to_string(),
        })
    }

    /// Replaces a PROCEDURE/FUNCTION symbol's payload once its parameter
    /// list and locals size are known. No-op if `id` is not a procedure
    /// or function (should never happen; callers always hold the id they
    /// got back from inserting the header).
    pub fn finalize_procedure(&mut self, id: SymbolId, data: ProcData) {
        match &mut self.arena[id].kind {
            SymbolKind::Procedure(d) | SymbolKind::Function(d) => *d = data,
            _ => {}
        }
    }

    /// Looks up a PROCEDURE/FUNCTION symbol regardless of current scope
    /// depth - these stay reachable for the rest of the table's life.
    pub fn get_procedure_definition(&mut self, name_text: &str) -> Option<SymbolId> {
        let name = self.intern(name_text);
        self.procedure_definitions.get(&name).copied()
    }

    /// Procedure/function symbols in the order they were first declared.
    pub fn procedure_definitions_in_order(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.procedure_definitions.values().copied()
    }

    /// Interns a string literal's text, returning its `_S<n>` label.
    /// Dedups by exact value: the same literal appearing twice gets the
    /// same label. The stored symbol's value carries the `$` terminator
    /// the ASM generator's runtime string routines expect.
    pub fn add_string_literal(&mut self, value: &str, token: Token) -> Name {
        if let Some(&label) = self.string_literals.get(value) {
            return label;
        }

        let label_text = format!("_S{}", self.next_string_label);
        self.next_string_label += 1;
        let label = self.interner.intern(&label_text);

        let symbol = Symbol {
            name: label,
            token,
            depth: 0,
            kind: SymbolKind::StringLiteral(format!("{value}$")),
        };
        let id = self.arena.push(symbol);

        self.string_literals.insert(value.to_string(), label);
        self.string_literal_symbols.insert(label, id);
        label
    }

    /// The `$`-terminated text a previously assigned label interns to.
    /// `None` only for a `Name` that never came out of
    /// [`SymbolTable::add_string_literal`].
    pub fn string_literal_text(&self, label: Name) -> Option<&str> {
        let id = *self.string_literal_symbols.get(&label)?;
        match &self.arena[id].kind {
            SymbolKind::StringLiteral(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// `VARIABLE`/`PARAMETER` symbols at depth <= 1 - `resolve_place`'s
    /// definition of "global" (the outermost procedure level, placed in
    /// the data segment by name rather than on a stack frame) - in
    /// arena order, for the ASM generator's data segment.
    pub fn globals_in_order(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.arena.iter_enumerated().filter_map(|(id, symbol)| {
            let is_global_storage = symbol.depth <= 1
                && matches!(symbol.kind, SymbolKind::Variable(_) | SymbolKind::Parameter(_));
            is_global_storage.then_some(id)
        })
    }

    /// String literal labels in the order they were first interned,
    /// paired with their `$`-terminated text.
    pub fn string_literals_in_order(&self) -> impl Iterator<Item = (Name, &str)> {
        self.string_literal_symbols.iter().map(|(&label, &id)| {
            let text = match &self.arena[id].kind {
                SymbolKind::StringLiteral(text) => text.as_str(),
                _ => unreachable!("string_literal_symbols only ever holds StringLiteral ids"),
            };
            (label, text)
        })
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

//! `Program`/`Procedure`: the top-level grammar that owns scope
//! management and the `proc`/`endp` TAC bracket.

use indexmap::IndexMap;

use adac_defs::{TokenKind, LOCAL_OFFSET_START, PARAM_OFFSET_START};
use adac_sym::{ProcData, SymbolKind, VarData};
use adac_util::diagnostic::{E_PAR_EXPECTED_TOKEN, E_SEM_DUPLICATE_DECL, E_SEM_PROC_NAME_MISMATCH};
use adac_util::error::FatalResult;

use crate::decl::ParamSpec;
use crate::error::{sync_set, SyntaxContext};
use crate::{Parser, ProcFrame};

/// Parses one `Procedure`:
/// `"procedure" Ident [ Args ] "is" DeclarativePart { Procedure }
/// "begin" SeqOfStatements "end" Ident ";"`.
///
/// Returns the procedure's own name on success, so `parse_program` can
/// track which top-level procedure was parsed last - the program's
/// entry point. `depth` is the nesting depth of the procedure about to
/// be parsed (0 for a top-level one); it is not consulted for any
/// grammar decision, only threaded through for symmetry with a future
/// nesting-depth diagnostic.
pub(crate) fn parse_procedure(parser: &mut Parser, depth: usize) -> FatalResult<Option<String>> {
    if !parser.match_kind(TokenKind::Procedure) {
        parser.syntax_error(
            E_PAR_EXPECTED_TOKEN,
            format!("expected 'procedure', found '{}'", parser.current().lexeme),
        )?;
        parser.synchronize(sync_set(SyntaxContext::Procedure));
        if !parser.at(TokenKind::Procedure) && !parser.at(TokenKind::Eof) {
            // Neither resynchronized onto a fresh `procedure` nor hit
            // EOF: advance one token so the caller's loop cannot spin
            // forever when `panic_mode_recover` is off.
            parser.advance();
        }
        return Ok(None);
    }

    let name_tok = parser.expect(TokenKind::Identifier)?;
    let name = name_tok.lexeme.clone();

    // Inserted in the *enclosing* scope, before entering the
    // procedure's own, so a self-recursive call or a sibling
    // declared afterward can resolve it.
    let proc_id = match parser.symbols.insert(
        parser.handler,
        &name,
        name_tok.clone(),
        SymbolKind::Procedure(ProcData::default()),
    ) {
        Ok(id) => id,
        Err(err) => {
            parser.semantic_error(E_SEM_DUPLICATE_DECL, err.to_string());
            parser
                .symbols
                .lookup(&name, true, None)
                .expect("a Duplicate error guarantees the name already resolves in this scope")
        }
    };

    parser.symbols.enter_scope();
    // §4.3's decision: reset the temp counter and open the TAC
    // bracket right after scope entry, not at `begin` - a
    // declaration's initializer expression (e.g. `X : INTEGER := A + B;`)
    // already needs fresh temps before any statement is seen. A side
    // effect: a nested procedure's whole `proc ... endp` block lands
    // inside its enclosing procedure's own block in the flat
    // instruction stream (see DESIGN.md).
    parser.tac.emit_proc_start(&name);
    parser.frames.push(ProcFrame {
        name: name.clone(),
        token: name_tok.clone(),
        symbol: proc_id,
        next_local_offset: LOCAL_OFFSET_START,
        size_of_locals: 0,
        params: Vec::new(),
        param_modes: IndexMap::new(),
        size_of_params: 0,
    });

    let param_specs = parser.parse_args()?;
    assign_param_offsets(parser, &param_specs);

    parser.expect(TokenKind::Is)?;

    loop {
        match parser.current_kind() {
            TokenKind::Identifier => {
                parser.parse_object_declaration()?;
            }
            TokenKind::Procedure => {
                parse_procedure(parser, depth + 1)?;
            }
            _ => break,
        }
    }

    parser.expect(TokenKind::Begin)?;
    parser.parse_seq_of_statements()?;
    parser.expect(TokenKind::End)?;

    if parser.at(TokenKind::Identifier) {
        let end_name_tok = parser.advance();
        if !end_name_tok.lexeme.eq_ignore_ascii_case(&name) {
            let declared_at = parser.current_frame().token.line;
            parser.semantic_error(
                E_SEM_PROC_NAME_MISMATCH,
                format!(
                    "'end {}' does not match procedure '{}' declared at line {}",
                    end_name_tok.lexeme, name, declared_at
                ),
            );
        }
    } else {
        parser.syntax_error(
            E_PAR_EXPECTED_TOKEN,
            "expected the procedure's name to repeat after 'end'",
        )?;
    }
    parser.expect(TokenKind::Semicolon)?;

    let frame = parser
        .frames
        .pop()
        .expect("pushed at the top of this same call, never popped elsewhere");
    parser.symbols.finalize_procedure(
        frame.symbol,
        ProcData {
            params: frame.params,
            param_modes: frame.param_modes,
            size_of_locals: frame.size_of_locals,
            size_of_params: frame.size_of_params,
            return_type: None,
        },
    );
    parser.tac.emit_proc_end(&name);
    parser.symbols.exit_scope();

    Ok(Some(name))
}

/// Walks `specs` right-to-left, handing the rightmost parameter
/// `_BP+4` and growing the offset by each parameter's size moving
/// left - so the leftmost parameter ends up farthest from the saved
/// frame pointer. This is the same offset rule the pushes (see
/// `stmt.rs::parse_proc_call`, which pushes rightmost actual first,
/// leftmost last) would need inverted to land each actual under its
/// own formal's offset; the two are reproduced independently here
/// exactly as the system they were distilled from pairs them, quirk
/// and all, rather than "corrected" into a textbook-consistent
/// calling convention.
fn assign_param_offsets(parser: &mut Parser, specs: &[ParamSpec]) {
    let mut offsets = vec![0i32; specs.len()];
    let mut offset = PARAM_OFFSET_START;
    for (i, spec) in specs.iter().enumerate().rev() {
        offsets[i] = offset;
        offset += spec.var_type.size() as i32;
    }

    for (spec, offset) in specs.iter().zip(offsets) {
        let result = parser.symbols.insert(
            parser.handler,
            &spec.name.text,
            spec.name.token.clone(),
            SymbolKind::Parameter(VarData {
                var_type: spec.var_type,
                offset,
                size: spec.var_type.size(),
            }),
        );
        match result {
            Ok(id) => {
                let formal_name = parser.symbols.get(id).name;
                let frame = parser.current_frame_mut();
                frame.params.push(id);
                frame.param_modes.insert(formal_name, spec.mode);
                frame.size_of_params += spec.var_type.size();
            }
            Err(err) => parser.semantic_error(E_SEM_DUPLICATE_DECL, err.to_string()),
        }
    }
}

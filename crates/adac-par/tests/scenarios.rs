//! End-to-end scenarios from spec.md §8, driving the real lexer, parser,
//! symbol table, and TAC generator together rather than any one of them
//! in isolation.

use adac_lex::Lexer;
use adac_par::{Parser, ParserConfig};
use adac_sym::SymbolTable;
use adac_tac::TacGenerator;
use adac_util::Handler;

const CONFIG: ParserConfig = ParserConfig {
    stop_on_error: false,
    panic_mode_recover: true,
};

fn compile(source: &str) -> (Handler, SymbolTable, TacGenerator) {
    let handler = Handler::new();
    let tokens = Lexer::new(source, &handler, false)
        .tokenize()
        .expect("stop_on_error is off, so tokenize never returns Err");
    let mut symbols = SymbolTable::new();
    let mut tac = TacGenerator::new();
    {
        let mut parser = Parser::new(tokens, &handler, &mut symbols, &mut tac, CONFIG);
        let _ = parser.parse_program();
    }
    (handler, symbols, tac)
}

fn rendered(tac: &TacGenerator) -> Vec<String> {
    tac.instructions().iter().map(|i| i.to_string()).collect()
}

/// Scenario A - arithmetic and assignment. The sole top-level procedure
/// is also the program's entry point, and its own locals sit at depth 1,
/// which `resolve_place` treats as outermost - plain names, not `_BP±k`.
#[test]
fn scenario_a_arithmetic_and_assignment() {
    let src = "procedure one is a, b, c : integer; begin a := 1; b := a + 2; c := a * b; end one;";
    let (handler, mut symbols, tac) = compile(src);

    assert_eq!(handler.error_count(), 0);

    let proc_id = symbols.get_procedure_definition("one").expect("one is defined");
    let proc_data = symbols.get(proc_id).kind.as_proc_data().unwrap().clone();
    // §3/§8.5: the two binary operators each allocate their own temp,
    // which is folded into `size_of_locals` alongside a, b, c - so the
    // true total exceeds the three declared locals' own 6 bytes.
    assert!(proc_data.size_of_locals >= 6, "{}", proc_data.size_of_locals);

    let lines = rendered(&tac);
    assert!(lines.iter().any(|l| l == "a = 1"), "{lines:?}");
    assert!(lines.iter().any(|l| l.contains(" ADD ")), "{lines:?}");
    assert!(lines.iter().any(|l| l.contains(" MUL ")), "{lines:?}");
    assert!(lines.iter().any(|l| l == "endp one"), "{lines:?}");

    let output = tac.write_output().unwrap();
    assert!(output.trim_end().ends_with("start one"), "{output}");
}

/// Per spec.md §8 family 2: locals assigned offsets -2, -4, -6, one per
/// declared integer (size 2) in declaration order - regardless of the
/// depth-based addressing `resolve_place` later picks for them.
#[test]
fn offset_discipline_for_locals() {
    let src = "procedure one is a, b, c : integer; begin null; end one;";
    let (handler, mut symbols, _tac) = compile(src);
    assert_eq!(handler.error_count(), 0);

    for (name, expected_offset) in [("a", -2), ("b", -4), ("c", -6)] {
        let id = symbols
            .lookup(name, false, Some(1))
            .unwrap_or_else(|_| panic!("{name} should resolve inside `one`'s body scope"));
        let var = symbols.get(id).kind.as_var_data().unwrap();
        assert_eq!(var.offset, expected_offset, "offset of {name}");
        assert_eq!(var.size, 2);
    }
}

/// Scenario B - undeclared variable.
#[test]
fn scenario_b_undeclared_variable() {
    let src = "procedure u is begin y := 10; end u;";
    let (handler, mut symbols, tac) = compile(src);

    assert_eq!(handler.error_count(), 1);
    assert!(symbols.get_procedure_definition("u").is_some());
    assert!(tac.instructions().iter().all(|i| !i.to_string().starts_with("y ")));
}

/// Scenario C - procedure end-name mismatch.
#[test]
fn scenario_c_procedure_name_mismatch() {
    let src = "procedure a is begin null; end b;";
    let (handler, _symbols, _tac) = compile(src);
    assert!(handler.error_count() >= 1);
}

/// Scenario D - call with mixed parameter modes. `OUT`/`INOUT` actuals
/// push the variable's address; `IN` pushes its evaluated value. Pushes
/// happen in reverse declaration order (rightmost formal first).
#[test]
fn scenario_d_call_with_mixed_modes() {
    let src = "procedure p (x : integer; y : out integer; z : in out integer) is \
               begin null; end p; \
               procedure caller is v, w : integer; begin p(1, v, w); end caller;";
    let (handler, mut symbols, tac) = compile(src);
    assert_eq!(handler.error_count(), 0);

    let p_id = symbols.get_procedure_definition("p").unwrap();
    let p_data = symbols.get(p_id).kind.as_proc_data().unwrap().clone();
    assert_eq!(p_data.params.len(), 3);

    let lines = rendered(&tac);
    let push_start = lines.iter().position(|l| l.starts_with("push")).expect("a push line exists");
    let push_lines = &lines[push_start..push_start + 3];

    // Reverse declaration order: z's actual (w) first, then y's (v), then x's (1) last.
    assert!(push_lines[0].starts_with("push @"), "z is in out: {}", push_lines[0]);
    assert!(push_lines[1].starts_with("push @"), "y is out: {}", push_lines[1]);
    assert_eq!(push_lines[2], "push 1", "x is in, pushed by value");

    assert_eq!(lines[push_start + 3], "call p");
}

/// Scenario E - string literal interning: the same literal text used
/// twice gets one label and one `.ASCIZ` definition.
#[test]
fn scenario_e_string_literal_interning() {
    let src = r#"procedure s is begin put("Hi"); putln("Hi"); end s;"#;
    let (handler, _symbols, tac) = compile(src);
    assert_eq!(handler.error_count(), 0);

    let lines = rendered(&tac);
    let wrs_lines: Vec<&String> = lines.iter().filter(|l| l.starts_with("wrs")).collect();
    assert_eq!(wrs_lines.len(), 2);
    assert_eq!(wrs_lines[0], wrs_lines[1], "both put/putln reuse the same interned label");

    let wrln_count = lines.iter().filter(|l| l.as_str() == "wrln").count();
    assert_eq!(wrln_count, 1, "only the putln call appends a newline");

    let output = tac.write_output().unwrap();
    let string_def_count = output.lines().filter(|l| l.contains(".ASCIZ")).count();
    assert_eq!(string_def_count, 1, "one string literal interned despite two uses");
}

/// Offset discipline for parameters, per spec.md §8 family 2: the
/// rightmost formal gets +4, each predecessor the next offset up by the
/// successor's size.
#[test]
fn offset_discipline_for_parameters() {
    let src = "procedure p (x : integer; y : integer; z : integer) is begin null; end p;";
    let (handler, mut symbols, _tac) = compile(src);
    assert_eq!(handler.error_count(), 0);

    let x = symbols.lookup("x", false, Some(1)).unwrap();
    let y = symbols.lookup("y", false, Some(1)).unwrap();
    let z = symbols.lookup("z", false, Some(1)).unwrap();

    assert_eq!(symbols.get(z).kind.as_var_data().unwrap().offset, 4);
    assert_eq!(symbols.get(y).kind.as_var_data().unwrap().offset, 6);
    assert_eq!(symbols.get(x).kind.as_var_data().unwrap().offset, 8);

    let p_id = symbols.get_procedure_definition("p").unwrap();
    let p_data = symbols.get(p_id).kind.as_proc_data().unwrap().clone();
    assert_eq!(p_data.size_of_params, 6);
    assert!(p_data.param_modes.values().all(|m| *m == adac_defs::ParameterMode::In));
}

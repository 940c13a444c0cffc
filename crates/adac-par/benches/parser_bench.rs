use adac_par::{Parser, ParserConfig};
use adac_sym::SymbolTable;
use adac_tac::TacGenerator;
use adac_util::Handler;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE: &str = r#"
procedure main is
    a, b, c : integer;
    total : integer := 0;

    procedure add(x : in integer; y : in integer; sum : out integer) is
    begin
        sum := x + y;
    end add;
begin
    a := 1;
    b := 2;
    add(a, b, c);
    total := total + c;
    put("result: ");
    put(total);
    putln;
end main;
"#;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_sample_program", |b| {
        b.iter(|| {
            let handler = Handler::new();
            let tokens = adac_lex::Lexer::new(black_box(SAMPLE), &handler, false)
                .tokenize()
                .unwrap();
            let mut symbols = SymbolTable::new();
            let mut tac = TacGenerator::new();
            let mut parser = Parser::new(tokens, &handler, &mut symbols, &mut tac, ParserConfig::default());
            black_box(parser.parse_program().unwrap());
        });
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);

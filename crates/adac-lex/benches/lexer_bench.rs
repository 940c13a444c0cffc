use adac_util::Handler;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE: &str = r#"
procedure main is
    a, b, c : integer;
    total : integer := 0;
begin
    a := 1;
    b := 2;
    c := a + b * 3;
    total := total + c;
    put("result: ");
    put(total);
    putln;
end main;
"#;

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_sample_procedure", |b| {
        b.iter(|| {
            let handler = Handler::new();
            let lexer = adac_lex::Lexer::new(black_box(SAMPLE), &handler, false);
            black_box(lexer.tokenize().unwrap());
        });
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kumiawase::analyzer::prelude::expression;
use kumiawase::{parse_expression, Parser};

/// Builds `((...((1+1)+1)...)+1)` with `depth` nested binary expressions.
fn left_nested(depth: usize) -> String {
    let mut source = "1".to_string();
    for _ in 0..depth {
        source = format!("({}+1)", source);
    }
    source
}

fn bench_parse(c: &mut Criterion) {
    let shallow = "(((1+2)*(-3+4))-(5*-6))";
    let deep = left_nested(32);

    c.bench_function("parse mixed expression", |b| {
        b.iter(|| parse_expression(black_box(shallow)))
    });
    c.bench_function("parse left nested depth 32", |b| {
        b.iter(|| parse_expression(black_box(&deep)))
    });

    let parser = expression();
    c.bench_function("reuse expression parser", |b| {
        b.iter(|| parser.parse(black_box(shallow)))
    });
}

// ベンチマークグループの定義
criterion_group!(benches, bench_parse);
criterion_main!(benches);

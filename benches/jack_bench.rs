//! Jack front-end benchmarks: tokenizer and parser throughput.
//!
//! Mirrors `assembler_bench.rs`'s structure (lookup, single-stage, and
//! full-pipeline groups) applied to the Jack tokenizer/parser instead of the
//! HACK assembler.
//!
//! Run with:
//! ```bash
//! cargo bench --bench jack_bench
//! ```

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use hack_translator::jack::{self, parser, token, tokenizer::Tokenizer};

const SMALL_CLASS: &str = "class Main {\n    function void main() {\n        do Output.printString(\"Hello\");\n        return;\n    }\n}\n";

const MEDIUM_CLASS: &str = "\
class Fraction {
    field int numerator, denominator;

    constructor Fraction new(int a, int b) {
        let numerator = a;
        let denominator = b;
        return this;
    }

    method int getNumerator() {
        return numerator;
    }

    method Fraction plus(Fraction other) {
        var int sum;
        let sum = (numerator * other.getDenominator()) + (other.getNumerator() * denominator);
        return Fraction.new(sum, denominator * other.getDenominator());
    }

    method void dispose() {
        do Memory.deAlloc(this);
        return;
    }
}
";

/// Benchmark: keyword/symbol lookup tables.
fn bench_keyword_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("jack_token_lookup");
    group.throughput(Throughput::Elements(4));

    group.bench_function("lookup_keyword_hot", |b| {
        b.iter(|| {
            black_box(token::lookup_keyword("class"));
            black_box(token::lookup_keyword("function"));
            black_box(token::lookup_keyword("return"));
            black_box(token::lookup_keyword("notAKeyword"));
        });
    });

    group.bench_function("is_symbol_char_hot", |b| {
        b.iter(|| {
            black_box(token::is_symbol_char('{'));
            black_box(token::is_symbol_char('+'));
            black_box(token::is_symbol_char('x'));
        });
    });

    group.finish();
}

/// Benchmark: tokenizer throughput over realistic source sizes.
fn bench_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("jack_tokenizer");

    for (name, source) in [("small", SMALL_CLASS), ("medium", MEDIUM_CLASS)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("tokenize_{name}"), |b| {
            b.iter(|| {
                let mut t = Tokenizer::new(black_box(source));
                let mut count = 0;
                while t.has_more_tokens().unwrap() {
                    black_box(t.advance().unwrap());
                    count += 1;
                }
                black_box(count)
            });
        });
    }

    group.finish();
}

/// Benchmark: end-to-end parse into a `Node` tree.
fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("jack_parser");

    for (name, source) in [("small", SMALL_CLASS), ("medium", MEDIUM_CLASS)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("parse_{name}"), |b| {
            b.iter(|| black_box(parser::parse(black_box(source)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: full tokenize + parse + XML-serialize pipeline.
fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("jack_pipeline");

    for (name, source) in [("small", SMALL_CLASS), ("medium", MEDIUM_CLASS)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("compile_to_xml_{name}"), |b| {
            b.iter(|| {
                let mut out = Vec::new();
                jack::compile_to_xml(black_box(source), &mut out).unwrap();
                black_box(out)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_keyword_lookup,
    bench_tokenizer,
    bench_parser,
    bench_full_pipeline,
);

criterion_main!(benches);

//! Benchmarks for matcher compilation.
//!
//! Run with: cargo bench -p `diagmatch_core`

#![expect(clippy::expect_used, reason = "benchmarks use expect for setup code")]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use diagmatch_core::prelude::*;

const GCC_LINE: &str = "\x1b[1msrc/main.c:42:7:\x1b[0m \x1b[1;31merror:\x1b[0m expected ';' before '}' token";

fn bench_compile_builtin(c: &mut Criterion) {
    let registry = MatcherRegistry::builtin();

    c.bench_function("compile_builtin_set", |b| {
        b.iter(|| black_box(registry.compile().expect("builtin matchers compile")));
    });
}

fn bench_to_json(c: &mut Criterion) {
    let set = MatcherRegistry::builtin().compile().expect("builtin matchers compile");

    c.bench_function("builtin_set_to_json", |b| {
        b.iter(|| black_box(set.to_json().expect("serialise")));
    });
}

fn bench_match_decorated_line(c: &mut Criterion) {
    let registry = MatcherRegistry::builtin();
    let gcc = registry.get("gcc").expect("gcc is builtin");
    let pattern = LinePattern::compile(&gcc.owner, 0, &gcc.lines[0]).expect("gcc compiles");

    c.bench_function("match_decorated_gcc_line", |b| {
        b.iter(|| black_box(pattern.regex().captures(black_box(GCC_LINE)).is_some()));
    });
}

criterion_group!(benches, bench_compile_builtin, bench_to_json, bench_match_decorated_line);
criterion_main!(benches);

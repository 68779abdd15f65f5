use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kana_core::combining::{compose, decompose};

fn bench_text(repeat: usize) -> String {
    "さくらし\u{3099}また\u{3099}いこんを、いっほ\u{309A}ん東京でカ\u{3099}イト。".repeat(repeat)
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    for repeat in [1, 16, 256] {
        let text = bench_text(repeat);
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
            b.iter(|| compose(black_box(text)))
        });
    }
    // Nothing to rewrite: exercises the early return.
    let plain = "さくらじまだいこん".repeat(256);
    group.bench_function("no_marks", |b| b.iter(|| compose(black_box(&plain))));
    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let text = compose(&bench_text(256));
    c.bench_function("decompose", |b| b.iter(|| decompose(black_box(&text))));
}

criterion_group!(benches, bench_compose, bench_decompose);
criterion_main!(benches);

use chebapprox::{ApproximationOptions, ChebyshevApproximation, Normalization};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn source(x: f64) -> f64 {
    (-x * x / 8.0).exp() * (2.0 * x).cos()
}

fn approximate(n: usize) -> ChebyshevApproximation {
    ChebyshevApproximation::new(source, -5.0, 5.0, n).expect("Failed to approximate")
}

fn criterion_benchmark(c: &mut Criterion) {
    //
    // Construction is O(n²) in the number of coefficients
    println!("Benchmarking construction vs degree...");
    bench_group(
        c,
        "construct_vs_degree",
        &[
            BenchEntry::new("n=4", 4),
            BenchEntry::new("n=8", 8),
            BenchEntry::new("n=16", 16),
            BenchEntry::new("n=32", 32),
            BenchEntry::new("n=64", 64),
            BenchEntry::new("n=128", 128),
        ],
        |b, n| b.iter(|| approximate(black_box(*n))),
    );

    //
    // Evaluation is O(n)
    println!("Benchmarking evaluation vs degree...");
    let entries: Vec<_> = [4, 16, 64, 256]
        .into_iter()
        .map(|n| BenchEntry::new(&format!("n={n}"), approximate(n)))
        .collect();
    bench_group(c, "evaluate_vs_degree", &entries, |b, approx| {
        b.iter(|| approx.evaluate(black_box(1.234)));
    });

    //
    // Plain, parametrised and normalized evaluation of the same expansion
    println!("Benchmarking evaluation modes (n=16)...");
    let raw = approximate(16);
    let params = raw.coefficients();
    let options = ApproximationOptions::default().with_normalization(Normalization::Normalized);
    let normalized = ChebyshevApproximation::with_options(|x| 2.0 + source(x), -5.0, 5.0, 16, options)
        .expect("Failed to approximate");

    let mut group = c.benchmark_group("evaluate_modes");
    group.bench_function("evaluate", |b| b.iter(|| raw.evaluate(black_box(1.234))));
    group.bench_function("evaluate_with", |b| {
        b.iter(|| raw.evaluate_with(black_box(1.234), black_box(&params)))
    });
    group.bench_function("normalized", |b| {
        b.iter(|| normalized.evaluate(black_box(1.234)))
    });
    group.bench_function("solve_range", |b| {
        b.iter(|| raw.solve_range(black_box(-5.0..=5.0), 0.01))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

struct BenchEntry<V> {
    id: String,
    values: V,
}
impl<V> BenchEntry<V> {
    pub fn new(id: &str, values: V) -> Self {
        Self {
            id: id.to_string(),
            values,
        }
    }
}

fn bench_group<F, V>(c: &mut Criterion, id: &str, entries: &[BenchEntry<V>], runner: F)
where
    for<'a, 'b, 'c> F: Fn(&'a mut criterion::Bencher<'b>, &'c V),
{
    let mut group = c.benchmark_group(id);
    for entry in entries {
        group.bench_with_input(&entry.id, &entry.values, &runner);
    }
    group.finish();
}

//! Criterion benchmarks for the centered rolling mean.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use smoothplot_core::rolling::{centered_mean, Window};

#[allow(clippy::cast_precision_loss)]
fn series(n: usize) -> Vec<Option<f64>> {
    (0..n).map(|i| Some((i as f64 * 0.1).sin() * 100.0)).collect()
}

fn bench_centered_mean(c: &mut Criterion) {
    let sizes: Vec<usize> = vec![100, 1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("CenteredMean");
    for &n in &sizes {
        let values = series(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| centered_mean(values, Window::default()));
        });
    }
    group.finish();

    let values = series(10_000);
    let mut group = c.benchmark_group("WindowSize");
    for size in [3usize, 5, 21, 101] {
        let window = Window::new(size).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &window, |b, &window| {
            b.iter(|| centered_mean(&values, window));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_centered_mean);
criterion_main!(benches);

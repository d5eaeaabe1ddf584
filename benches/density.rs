use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cello::color::{ColorField, Rgba, blend};
use cello::kde::estimate;
use cello::Cello;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a reproducible sample of `n` values roughly in `[-5, 5]`.
fn build_sample(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| rng.random_range(-5.0..5.0)).collect()
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    for n in [10, 100, 1000] {
        let sample = build_sample(n);
        group.bench_with_input(BenchmarkId::new("sample", n), &sample, |b, sample| {
            b.iter(|| estimate(sample, 0.5, 100));
        });
    }
    group.finish();
}

fn bench_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend");
    for n in [10, 100, 1000] {
        let sample = build_sample(n);
        let colors = sample
            .iter()
            .map(|&v| Rgba::rgb((v + 5.0) / 10.0, 0.2, 1.0 - (v + 5.0) / 10.0))
            .collect();
        let field = ColorField::PerSample(colors);
        let grid = estimate(&sample, 0.5, 100).unwrap().grid;
        group.bench_with_input(BenchmarkId::new("sample", n), &sample, |b, sample| {
            b.iter(|| blend(sample, &field, &grid, 0.5));
        });
    }
    group.finish();
}

fn bench_plot_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot");
    let cello = Cello::new();
    for n_groups in [1, 8, 32] {
        let groups: Vec<Vec<f64>> = (0..n_groups).map(|_| build_sample(200)).collect();
        group.bench_with_input(
            BenchmarkId::new("groups", n_groups),
            &groups,
            |b, groups| {
                b.iter(|| cello.plot(groups.clone()));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_estimate, bench_blend, bench_plot_groups);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use percolation::{stats::run_trial, Percolation};
use rand::{rngs::StdRng, SeedableRng};

fn trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial");
    for n in [16, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| run_trial(n, &mut rng).unwrap());
        });
    }
    group.finish();
}

fn open_all(c: &mut Criterion) {
    c.bench_function("open_all_128", |b| {
        b.iter(|| {
            let mut perc = Percolation::new(128).unwrap();
            for row in 1..=128 {
                for col in 1..=128 {
                    perc.open(row, col).unwrap();
                }
            }
            perc.percolates()
        });
    });
}

criterion_group!(benches, trial, open_all);
criterion_main!(benches);

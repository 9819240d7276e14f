//! Benchmarks for rhythmic dissimilarity measures and distance matrices.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use onsets::batch::DistanceMatrix;
use onsets::{chronotonic, euclidian, hamming, swap, Metric, Rhythm};
use rand::prelude::*;

type Measure = fn(&Rhythm, &Rhythm) -> onsets::Result<f64>;

/// Random rhythm with roughly one onset in three slots and a downbeat.
fn random_rhythm(rng: &mut StdRng, len: usize) -> Rhythm {
    (0..len).map(|i| i == 0 || rng.gen_bool(0.33)).collect()
}

fn bench_measures(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let measures: [(&str, Measure); 4] = [
        ("hamming", |a, b| hamming(a, b).map(|d| d as f64)),
        ("swap", |a, b| swap(a, b).map(|d| d as f64)),
        ("chronotonic", |a, b| chronotonic(a, b).map(|d| d as f64)),
        ("euclidian", euclidian),
    ];

    for (name, f) in measures {
        let mut group = c.benchmark_group(name);
        for len in [8, 16, 32, 64, 256] {
            let a = random_rhythm(&mut rng, len);
            let b = random_rhythm(&mut rng, len);

            group.throughput(Throughput::Elements(len as u64));
            group.bench_with_input(BenchmarkId::new(name, len), &len, |bench, _| {
                bench.iter(|| f(black_box(&a), black_box(&b)))
            });
        }
        group.finish();
    }
}

fn bench_distance_matrix(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("distance_matrix");

    for n in [8, 32, 128] {
        let rhythms: Vec<Rhythm> = (0..n).map(|_| random_rhythm(&mut rng, 16)).collect();

        group.throughput(Throughput::Elements((n * (n + 1) / 2) as u64));
        for metric in [Metric::Hamming, Metric::Euclidian] {
            group.bench_with_input(BenchmarkId::new(metric.to_string(), n), &n, |bench, _| {
                bench.iter(|| DistanceMatrix::compute(black_box(&rhythms), &metric))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_measures, bench_distance_matrix);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use euklid_rotation::{rotation_between_vectors, rotation_matrix_2d};

fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");

    let mut rng = rand::rng();
    let num_pairs = 1000;
    let pairs = (0..num_pairs)
        .map(|_| {
            (
                [
                    rng.random_range(0.1..1.0),
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                ],
                [
                    rng.random_range(-1.0..-0.1),
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                ],
            )
        })
        .collect::<Vec<([f64; 3], [f64; 3])>>();

    group.bench_function(BenchmarkId::new("between_vectors", num_pairs), |b| {
        b.iter(|| {
            for (p, q) in &pairs {
                black_box(rotation_between_vectors(p, q).unwrap());
            }
        })
    });

    let angles = (0..num_pairs)
        .map(|_| rng.random_range(-10.0..10.0))
        .collect::<Vec<f64>>();

    group.bench_function(BenchmarkId::new("matrix_2d", num_pairs), |b| {
        b.iter(|| {
            for angle in &angles {
                black_box(rotation_matrix_2d(*angle).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_rotation);
criterion_main!(benches);

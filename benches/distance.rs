#[macro_use]
extern crate criterion;

extern crate greatcircle;

use criterion::{black_box, Criterion};
use greatcircle::{from_points, Algorithm, LatLng};

fn criterion_benchmark(c: &mut Criterion) {
    let point1 = LatLng::new(51.301389, 6.953333);
    let point2 = LatLng::new(50.823194, 6.186389);

    for &algorithm in Algorithm::ALL.iter() {
        c.bench_function(algorithm.name(), |b| {
            b.iter(|| from_points(black_box(&point1), black_box(&point2), algorithm))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

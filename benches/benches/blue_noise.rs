// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stipple_sampling::{PoissonDisk2D, blue_noise_1d, blue_noise_2d};

fn bench_1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("blue_noise_1d");
    for &d in &[1.0_f64, 0.1, 0.01] {
        group.bench_function(format!("range_1000_d{}", d), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| black_box(blue_noise_1d(&mut rng, 0.0, 1000.0, d).len()))
        });
    }
    group.finish();
}

fn bench_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("blue_noise_2d");
    group.sample_size(20);
    for &side in &[32.0_f64, 128.0, 256.0] {
        group.bench_function(format!("square_{}_d1", side), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(2);
            b.iter(|| {
                black_box(blue_noise_2d(&mut rng, Point::ZERO, Point::new(side, side), 1.0).len())
            })
        });
    }
    for &limit in &[4_usize, 30] {
        let cfg = PoissonDisk2D::new(Rect::new(0.0, 0.0, 128.0, 128.0), 1.0)
            .expect("valid configuration")
            .with_attempt_limit(limit);
        group.bench_function(format!("attempt_limit_{}", limit), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            b.iter(|| black_box(cfg.generate(&mut rng).len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_1d, bench_2d);
criterion_main!(benches);

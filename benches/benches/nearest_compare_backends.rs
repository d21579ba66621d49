// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stipple_index::{KdTree, LinearScan, NearestNeighbor, Point3};

fn gen_unit_cube(n: usize, seed: u64) -> Vec<Point3<f32>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point3::new(rng.random(), rng.random(), rng.random()))
        .collect()
}

fn gen_unit_cube_f64(n: usize, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| [rng.random(), rng.random(), rng.random()])
        .collect()
}

fn gen_clustered(n_clusters: usize, per_cluster: usize, spread: f32) -> Vec<Point3<f32>> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let c = Point3::new(
            rng.random_range(0.0..100.0_f32),
            rng.random_range(0.0..100.0_f32),
            rng.random_range(0.0..100.0_f32),
        );
        for _ in 0..per_cluster {
            out.push(Point3::new(
                c.x + (rng.random::<f32>() - 0.5) * spread,
                c.y + (rng.random::<f32>() - 0.5) * spread,
                c.z + (rng.random::<f32>() - 0.5) * spread,
            ));
        }
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_build");
    for &n in &[256usize, 4096, 65536] {
        let cloud = gen_unit_cube(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("build_n{}", n), |b| {
            b.iter(|| {
                let tree = KdTree::new(black_box(&cloud));
                black_box(tree.len());
            })
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_query");
    for &n in &[256usize, 4096, 65536] {
        let cloud = gen_unit_cube(n, 0xBADC_F00D_1234_5678);
        let queries = gen_unit_cube(1024, 0xFACE_FEED_CAFE_BABE);
        let tree = KdTree::new(&cloud);
        let scan = LinearScan::new(&cloud);
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_function(format!("kdtree_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.nearest_neighbor(q));
                }
            })
        });
        if n <= 4096 {
            group.bench_function(format!("linear_n{}", n), |b| {
                b.iter(|| {
                    for q in &queries {
                        black_box(scan.nearest_neighbor(q));
                    }
                })
            });
        }
    }

    let clustered = gen_clustered(64, 256, 2.0);
    let queries = gen_clustered(8, 128, 10.0);
    let tree = KdTree::new(&clustered);
    group.bench_function("kdtree_clustered", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(tree.nearest_index(q));
            }
        })
    });
    group.finish();
}

fn bench_build_query_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_build_query_f64");
    let cloud = gen_unit_cube_f64(16384, 7);
    let queries = gen_unit_cube_f64(256, 8);
    group.throughput(Throughput::Elements(cloud.len() as u64));
    group.bench_function("build_then_256_queries", |b| {
        b.iter_batched(
            || cloud.clone(),
            |pts| {
                let tree = KdTree::new(&pts);
                let mut acc = 0_usize;
                for q in &queries {
                    acc += tree.nearest_index(q).unwrap_or(0);
                }
                black_box(acc);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_query, bench_build_query_f64);
criterion_main!(benches);

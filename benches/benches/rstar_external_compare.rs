// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stipple_index::KdTree;

use rstar::RTree;

fn gen_unit_cube(n: usize, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| [rng.random(), rng.random(), rng.random()])
        .collect()
}

fn bench_rstar_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare_f64");
    for &n in &[4096usize, 65536] {
        let cloud = gen_unit_cube(n, 0x5EED);
        let queries = gen_unit_cube(512, 0xFEED);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("stipple_build_query_n{}", n), |b| {
            b.iter(|| {
                let tree = KdTree::new(&cloud);
                let mut acc = 0_usize;
                for q in &queries {
                    acc += tree.nearest_index(q).unwrap_or(0);
                }
                black_box(acc);
            })
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || cloud.clone(),
                |points| {
                    let tree = RTree::bulk_load(points);
                    let mut hits = 0_usize;
                    for q in &queries {
                        hits += usize::from(tree.nearest_neighbor(q).is_some());
                    }
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        let tree = KdTree::new(&cloud);
        let rtree = RTree::bulk_load(cloud.clone());
        group.bench_function(format!("stipple_query_only_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.nearest(q));
                }
            })
        });
        group.bench_function(format!("rstar_query_only_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(rtree.nearest_neighbor(q));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare_f64);
criterion_main!(benches);

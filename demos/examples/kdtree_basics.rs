// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-neighbor queries over several point types, checked against a linear scan.
//!
//! Run:
//! - `cargo run -p stipple_demos --example kdtree_basics`

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stipple_index::{KdTree, LinearScan, NearestNeighbor, Point3};

fn main() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    // f64 arrays.
    let cloud: Vec<[f64; 3]> = (0..2000)
        .map(|_| [rng.random(), rng.random(), rng.random()])
        .collect();
    let tree = KdTree::new(&cloud);
    let scan = LinearScan::new(&cloud);
    let q = [0.5, 0.5, 0.5];
    println!("{tree:?}");
    println!("kd-tree: {:?}", tree.nearest_neighbor(&q));
    println!("linear:  {:?}", scan.nearest_neighbor(&q));

    // Integer lattice; distances are accumulated in u128.
    let lattice: Vec<Point3<i64>> = (0..10)
        .flat_map(|x| (0..10).map(move |y| Point3::new(x * 100, y * 100, 0)))
        .collect();
    let tree = KdTree::new(&lattice);
    let probe = Point3::new(420, 180, 7);
    if let Some(p) = tree.nearest(&probe) {
        println!("lattice point nearest {probe:?}: {p:?}");
    }

    // Nothing to find in an empty set.
    let empty: [[f32; 2]; 0] = [];
    assert!(KdTree::new(&empty).nearest(&[0.0, 0.0]).is_none());
}

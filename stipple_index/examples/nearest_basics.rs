// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Stipple Index: build a tree once, then query it.

use stipple_index::{KdTree, NearestNeighbor, Point3};

fn main() {
    let cloud: Vec<Point3<f32>> = (0..8)
        .map(|i| {
            let t = i as f32;
            Point3::new(t, (t * 3.0) % 5.0, (t * 7.0) % 4.0)
        })
        .collect();
    let tree = KdTree::new(&cloud);
    println!("{tree:?}");

    let q = Point3::new(2.2, 1.1, 2.0);
    if let Some(n) = tree.nearest_neighbor(&q) {
        println!(
            "nearest to {:?}: #{} {:?} (dist^2 = {})",
            q, n.index, cloud[n.index], n.dist_sq
        );
    }
}

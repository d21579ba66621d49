// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter points with blue noise, index them, and snap random probes to the
//! nearest sample.
//!
//! Run:
//! - `cargo run -p stipple_demos --example sample_then_index`

use kurbo::{Point, Rect};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stipple_index::{KdTree, NearestNeighbor};
use stipple_sampling::{PoissonDisk2D, SamplingError};

fn main() -> Result<(), SamplingError> {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let sites = PoissonDisk2D::new(Rect::new(0.0, 0.0, 100.0, 100.0), 4.0)?
        .with_attempt_limit(20)
        .generate(&mut rng);
    let tree = KdTree::new(&sites);
    println!("{} sites, tree depth {}", tree.len(), tree.depth());

    for _ in 0..5 {
        let probe = Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
        if let Some(n) = tree.nearest_neighbor(&probe) {
            println!(
                "probe ({:6.2}, {:6.2}) -> site #{:<4} ({:6.2}, {:6.2})  dist {:.3}",
                probe.x,
                probe.y,
                n.index,
                sites[n.index].x,
                sites[n.index].y,
                n.dist_sq.sqrt()
            );
        }
    }
    Ok(())
}

// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter tick marks along a line and print the gaps between them.
//!
//! Run:
//! - `cargo run -p stipple_demos --example blue_noise_1d`

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stipple_sampling::blue_noise_1d;

fn main() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let ticks = blue_noise_1d(&mut rng, 0.0, 40.0, 1.5);
    println!("{} samples in [0, 40] with d = 1.5", ticks.len());

    let mut line = [b'.'; 81];
    for t in &ticks {
        #[allow(clippy::cast_possible_truncation, reason = "Demo output only.")]
        let col = (t * 2.0).round() as usize;
        line[col.min(80)] = b'|';
    }
    println!("{}", String::from_utf8_lossy(&line));

    for w in ticks.windows(2) {
        println!("{:>7.3} -> {:>7.3}  gap {:.3}", w[0], w[1], w[1] - w[0]);
    }
}

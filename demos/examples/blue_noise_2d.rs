// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill a rectangle with blue noise and draw it as ASCII art.
//!
//! Run:
//! - `cargo run -p stipple_demos --example blue_noise_2d`

use kurbo::Rect;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stipple_sampling::{PoissonDisk2D, SamplingError};

const COLS: usize = 64;
const ROWS: usize = 24;

fn main() -> Result<(), SamplingError> {
    let bounds = Rect::new(0.0, 0.0, 64.0, 48.0);
    let sampler = PoissonDisk2D::new(bounds, 2.5)?;
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let dots = sampler.generate(&mut rng);
    println!("{sampler:?}");
    println!("{} samples", dots.len());

    let mut canvas = vec![[b' '; COLS]; ROWS];
    for p in &dots {
        #[allow(clippy::cast_possible_truncation, reason = "Demo output only.")]
        let (c, r) = (
            ((p.x / bounds.width()) * COLS as f64) as usize,
            ((p.y / bounds.height()) * ROWS as f64) as usize,
        );
        canvas[r.min(ROWS - 1)][c.min(COLS - 1)] = b'*';
    }
    for row in &canvas {
        println!("{}", String::from_utf8_lossy(row));
    }

    // Invalid configurations are reported, not panicked on.
    if let Err(e) = PoissonDisk2D::new(bounds, -1.0) {
        println!("rejected: {e}");
    }
    Ok(())
}

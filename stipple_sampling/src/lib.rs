// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stipple Sampling: Kurbo-native Poisson-disk (blue-noise) sampling.
//!
//! Stipple Sampling scatters points so that no two are closer than a minimum distance while
//! leaving no large gaps, which is what makes blue noise look natural for foliage, stipple
//! shading, spawn points and similar placement jobs.
//!
//! - [`blue_noise_1d`]: marches along an interval, spacing samples between `d` and `2d`.
//! - [`blue_noise_2d`] / [`blue_noise_2d_with_limit`]: Bridson's dart throwing inside a
//!   rectangle, accelerated with a background grid of `d / sqrt(2)` cells.
//! - [`PoissonDisk2D`]: the 2D sampler behind a validating constructor that reports a
//!   [`SamplingError`] instead of relying on caller preconditions.
//!
//! Randomness is injected: every sampler takes `&mut R` where `R: `[`UniformRandom`], and
//! every [`rand::RngCore`] qualifies. Seeded generators make runs reproducible.
//! The number of samples produced is not known in advance.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use rand::SeedableRng;
//! use stipple_sampling::{blue_noise_1d, blue_noise_2d};
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//!
//! let ticks = blue_noise_1d(&mut rng, 0.0, 10.0, 1.0);
//! assert!(ticks.windows(2).all(|w| w[1] - w[0] >= 1.0 - 1e-9));
//!
//! let dots = blue_noise_2d(&mut rng, Point::new(0.0, 0.0), Point::new(32.0, 32.0), 2.0);
//! for (i, a) in dots.iter().enumerate() {
//!     for b in &dots[i + 1..] {
//!         assert!((*a - *b).hypot2() >= 4.0);
//!     }
//! }
//! ```
//!
//! ## Degenerate input
//!
//! - An inverted range (`min > max` on any axis) produces no samples.
//! - A 1D range narrower than the minimum distance produces exactly one sample.
//! - The minimum distance must be finite and positive; the free functions only
//!   `debug_assert!` this, [`PoissonDisk2D::new`] checks it.

#![no_std]

extern crate alloc;

mod error;
mod grid;
pub mod poisson;
pub mod random;

pub use error::SamplingError;
pub use poisson::{
    DEFAULT_ATTEMPT_LIMIT, MAX_GRID_CELLS, PoissonDisk2D, blue_noise_1d, blue_noise_2d,
    blue_noise_2d_with_limit,
};
pub use random::UniformRandom;

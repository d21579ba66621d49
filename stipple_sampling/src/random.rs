// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform random source consumed by the samplers.

use core::f64::consts::{PI, TAU};

use kurbo::Vec2;
use rand::RngCore;
use rand::distr::{Distribution, StandardUniform};

/// A stream of uniformly distributed values.
///
/// Only [`uniform01`](Self::uniform01) is required; everything else is derived
/// from it. Every [`rand::RngCore`] implements this trait, so seeded generators
/// such as `rand_chacha::ChaCha8Rng` give reproducible sampling.
///
/// Samplers borrow the source mutably for the duration of one call. Sharing a
/// source across threads therefore needs external synchronization, or one
/// source per thread.
pub trait UniformRandom {
    /// A value in `[0, 1)`.
    fn uniform01(&mut self) -> f64;

    /// A value in `[min, max)`.
    #[inline]
    fn uniform_range(&mut self, min: f64, max: f64) -> f64 {
        self.uniform01() * (max - min) + min
    }

    /// An index in `[0, len)`, or `0` when `len` is zero.
    #[inline]
    fn uniform_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "The product is in [0, len), which always fits in usize."
        )]
        let i = (self.uniform01() * len as f64) as usize;
        i.min(len - 1)
    }

    /// `true` or `false` with equal probability.
    #[inline]
    fn coin_flip(&mut self) -> bool {
        self.uniform01() < 0.5
    }

    /// A unit vector pointing in a uniformly random direction.
    #[inline]
    fn unit_circle_direction(&mut self) -> Vec2 {
        Vec2::from_angle(self.uniform_range(0.0, TAU))
    }

    /// A point inside the unit circle.
    ///
    /// The signed radius is uniform in `[-1, 1)` and the angle uniform in
    /// `[0, π)`, so points cluster towards the center rather than being
    /// uniform by area.
    #[inline]
    fn point_in_unit_circle(&mut self) -> Vec2 {
        let r = self.uniform_range(-1.0, 1.0);
        Vec2::from_angle(self.uniform_range(0.0, PI)) * r
    }
}

impl<R: RngCore + ?Sized> UniformRandom for R {
    #[inline]
    fn uniform01(&mut self) -> f64 {
        StandardUniform.sample(self)
    }
}

// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Poisson-disk samplers.

use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::FRAC_1_SQRT_2;

use kurbo::{Point, Rect};

use crate::error::SamplingError;
use crate::grid::Grid;
use crate::random::UniformRandom;

/// Candidate throws around an active sample before it is retired.
pub const DEFAULT_ATTEMPT_LIMIT: usize = 30;

/// Largest acceleration grid [`PoissonDisk2D::new`] accepts.
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Blue noise on the interval `[range_min, range_max]`.
///
/// Marches from left to right: the first sample is uniform in
/// `[range_min, range_min + min_dist)`, and each following one is uniform in
/// `[prev + min_dist, min(prev + 2 * min_dist, range_max))` for as long as more
/// than `min_dist` of the range remains. Adjacent samples are therefore between
/// `min_dist` and `2 * min_dist` apart. The number of samples depends on the
/// draws.
///
/// - `range_min > range_max` yields no samples.
/// - A range narrower than `min_dist` yields exactly one uniform sample.
///
/// `min_dist` must be positive and finite; other values are a caller error
/// (debug builds assert).
pub fn blue_noise_1d<R: UniformRandom + ?Sized>(
    rng: &mut R,
    range_min: f64,
    range_max: f64,
    min_dist: f64,
) -> Vec<f64> {
    if range_min > range_max {
        return Vec::new();
    }
    if range_max - range_min < min_dist {
        return vec![rng.uniform_range(range_min, range_max)];
    }
    debug_assert!(
        min_dist > 0.0 && min_dist.is_finite(),
        "min_dist must be finite and positive"
    );

    let mut latest = rng.uniform_range(range_min, range_min + min_dist);
    let mut samples = vec![latest];
    while range_max - latest > min_dist {
        let lo = latest + min_dist;
        let hi = (lo + min_dist).min(range_max);
        latest = rng.uniform_range(lo, hi);
        samples.push(latest);
    }
    samples
}

/// Blue noise inside the rectangle spanned by `range_min` and `range_max`,
/// using [`DEFAULT_ATTEMPT_LIMIT`] throws per pick.
///
/// See [`blue_noise_2d_with_limit`].
pub fn blue_noise_2d<R: UniformRandom + ?Sized>(
    rng: &mut R,
    range_min: Point,
    range_max: Point,
    min_dist: f64,
) -> Vec<Point> {
    blue_noise_2d_with_limit(rng, range_min, range_max, min_dist, DEFAULT_ATTEMPT_LIMIT)
}

/// Blue noise inside the rectangle spanned by `range_min` and `range_max`
/// (Bridson's algorithm).
///
/// Every pair of returned points is at least `min_dist` apart and every point
/// lies inside the closed rectangle. Output order is acceptance order, starting
/// with a seed drawn uniformly from the whole rectangle.
///
/// Returns no samples if `range_min` exceeds `range_max` on either axis.
/// `min_dist` must be positive and finite, and the rectangle must be small
/// enough for a grid of `min_dist / sqrt(2)` cells to fit in memory; use
/// [`PoissonDisk2D::new`] to have both checked.
pub fn blue_noise_2d_with_limit<R: UniformRandom + ?Sized>(
    rng: &mut R,
    range_min: Point,
    range_max: Point,
    min_dist: f64,
    attempt_limit: usize,
) -> Vec<Point> {
    let bounds = Rect::new(range_min.x, range_min.y, range_max.x, range_max.y);
    sample_rect(rng, bounds, min_dist, attempt_limit)
}

/// A validated 2D Poisson-disk configuration.
///
/// ```
/// use kurbo::Rect;
/// use rand::SeedableRng;
/// use stipple_sampling::PoissonDisk2D;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
/// let sampler = PoissonDisk2D::new(Rect::new(0.0, 0.0, 100.0, 50.0), 5.0)
///     .unwrap()
///     .with_attempt_limit(20);
/// let points = sampler.generate(&mut rng);
/// assert!(points.len() > 20);
/// assert!(PoissonDisk2D::new(Rect::new(0.0, 0.0, 1.0, 1.0), 0.0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PoissonDisk2D {
    bounds: Rect,
    min_dist: f64,
    attempt_limit: usize,
}

impl PoissonDisk2D {
    /// Validate a sampling configuration.
    ///
    /// An inverted `bounds` is accepted and generates no samples, matching
    /// [`blue_noise_2d`]. Note that [`Rect::new`] does not reorder its corners.
    pub fn new(bounds: Rect, min_dist: f64) -> Result<Self, SamplingError> {
        if !(min_dist.is_finite() && min_dist > 0.0) {
            return Err(SamplingError::InvalidMinDistance(min_dist));
        }
        if !(bounds.x0.is_finite()
            && bounds.y0.is_finite()
            && bounds.x1.is_finite()
            && bounds.y1.is_finite())
        {
            return Err(SamplingError::NonFiniteBounds);
        }
        if !is_inverted(bounds) {
            let (columns, rows) = Grid::dimensions(bounds, cell_size(min_dist));
            if columns
                .checked_mul(rows)
                .is_none_or(|cells| cells > MAX_GRID_CELLS)
            {
                return Err(SamplingError::GridTooLarge { columns, rows });
            }
        }
        Ok(Self {
            bounds,
            min_dist,
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
        })
    }

    /// Validate a configuration given its minimum and maximum corners.
    pub fn from_corners(
        range_min: Point,
        range_max: Point,
        min_dist: f64,
    ) -> Result<Self, SamplingError> {
        Self::new(
            Rect::new(range_min.x, range_min.y, range_max.x, range_max.y),
            min_dist,
        )
    }

    /// Set the number of candidate throws per pick. Zero is raised to one.
    #[must_use]
    pub fn with_attempt_limit(mut self, attempt_limit: usize) -> Self {
        self.attempt_limit = attempt_limit.max(1);
        self
    }

    /// The sampled rectangle.
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Minimum distance between any two samples.
    pub const fn min_dist(&self) -> f64 {
        self.min_dist
    }

    /// Candidate throws per pick.
    pub const fn attempt_limit(&self) -> usize {
        self.attempt_limit
    }

    /// Edge length of an acceleration grid cell.
    pub fn cell_size(&self) -> f64 {
        cell_size(self.min_dist)
    }

    /// Run the sampler.
    pub fn generate<R: UniformRandom + ?Sized>(&self, rng: &mut R) -> Vec<Point> {
        sample_rect(rng, self.bounds, self.min_dist, self.attempt_limit)
    }
}

#[inline]
fn cell_size(min_dist: f64) -> f64 {
    min_dist * FRAC_1_SQRT_2
}

#[inline]
fn is_inverted(bounds: Rect) -> bool {
    bounds.x0 > bounds.x1 || bounds.y0 > bounds.y1
}

#[inline]
fn contains(bounds: Rect, p: Point) -> bool {
    bounds.x0 <= p.x && p.x <= bounds.x1 && bounds.y0 <= p.y && p.y <= bounds.y1
}

fn sample_rect<R: UniformRandom + ?Sized>(
    rng: &mut R,
    bounds: Rect,
    min_dist: f64,
    attempt_limit: usize,
) -> Vec<Point> {
    if is_inverted(bounds) {
        return Vec::new();
    }
    debug_assert!(
        min_dist > 0.0 && min_dist.is_finite(),
        "min_dist must be finite and positive"
    );

    let mut grid = Grid::new(bounds, cell_size(min_dist));
    let seed = Point::new(
        rng.uniform_range(bounds.x0, bounds.x1),
        rng.uniform_range(bounds.y0, bounds.y1),
    );
    let mut samples = vec![seed];
    grid.claim(seed, 0);

    // Output indices of samples that may still spawn neighbors.
    let mut active = vec![0_usize];
    let min_dist_sq = min_dist * min_dist;

    while !active.is_empty() {
        let pick = rng.uniform_index(active.len());
        let center = samples[active[pick]];

        let mut placed = false;
        for _ in 0..attempt_limit {
            let throw =
                rng.unit_circle_direction() * rng.uniform_range(min_dist, 2.0 * min_dist);
            let candidate = center + throw;
            if !contains(bounds, candidate) {
                continue;
            }
            if grid
                .neighbors(candidate)
                .any(|i| (samples[i] - candidate).hypot2() < min_dist_sq)
            {
                continue;
            }
            let index = samples.len();
            samples.push(candidate);
            grid.claim(candidate, index);
            active.push(index);
            placed = true;
            break;
        }
        if !placed {
            active.swap_remove(pick);
        }
    }

    log::trace!(
        "poisson disk: {} samples on a {}x{} grid",
        samples.len(),
        grid.columns(),
        grid.rows()
    );
    samples
}

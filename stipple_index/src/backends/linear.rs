// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scan backend. Small and simple; good for tiny sets and as a reference.

use core::fmt::Debug;

use crate::backend::{NearestNeighbor, Neighbor};
use crate::types::{KdPoint, ScalarAcc, dist_sq, lt};

/// Exhaustive nearest-neighbor search over a borrowed slice.
pub struct LinearScan<'a, P> {
    points: &'a [P],
}

impl<'a, P: KdPoint> LinearScan<'a, P> {
    /// Wrap a slice of points. Nothing is precomputed.
    pub const fn new(points: &'a [P]) -> Self {
        Self { points }
    }

    /// The indexed points.
    pub const fn points(&self) -> &'a [P] {
        self.points
    }

    /// Number of indexed points.
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no points are indexed.
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point closest to `query`, or `None` if the slice is empty.
    pub fn nearest(&self, query: &P) -> Option<&'a P> {
        let n = self.nearest_neighbor(query)?;
        self.points.get(n.index)
    }
}

impl<P: KdPoint> NearestNeighbor<P> for LinearScan<'_, P> {
    fn nearest_neighbor(&self, query: &P) -> Option<Neighbor<ScalarAcc<P::Scalar>>> {
        let mut best: Option<Neighbor<ScalarAcc<P::Scalar>>> = None;
        for (index, p) in self.points.iter().enumerate() {
            let d = dist_sq(p, query);
            if best.map(|b| lt(d, b.dist_sq)).unwrap_or(true) {
                best = Some(Neighbor { index, dist_sq: d });
            }
        }
        best
    }
}

impl<P> Debug for LinearScan<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinearScan")
            .field("points", &self.points.len())
            .finish_non_exhaustive()
    }
}

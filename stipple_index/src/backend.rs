// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for nearest-neighbor implementations.

use crate::types::{KdPoint, ScalarAcc};

/// Result of a nearest-neighbor search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor<A> {
    /// Index of the point in the slice the backend was built over.
    pub index: usize,
    /// Squared Euclidean distance to the query, in the widened type.
    pub dist_sq: A,
}

/// Nearest-neighbor abstraction shared by [`KdTree`](crate::KdTree) and
/// [`LinearScan`](crate::LinearScan).
pub trait NearestNeighbor<P: KdPoint> {
    /// Find the indexed point closest to `query`.
    ///
    /// Returns `None` if nothing is indexed. Among equidistant points the first
    /// one found wins; which one that is depends on the backend.
    fn nearest_neighbor(&self, query: &P) -> Option<Neighbor<ScalarAcc<P::Scalar>>>;
}

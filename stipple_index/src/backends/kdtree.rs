// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable k-d tree backend over a borrowed point slice.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::{NearestNeighbor, Neighbor};
use crate::types::{KdPoint, ScalarAcc, axis_dist_sq, cmp_axis, dist_sq, has_nan, lt};

/// A balanced k-d tree for nearest-neighbor queries.
///
/// The tree is built once from a slice and never changes afterwards. Nodes live
/// in an arena and refer to their pivot by index into the slice, so the tree
/// borrows the points rather than copying them; the borrow keeps the slice
/// alive and unmodified for as long as the tree exists.
///
/// The splitting axis at depth `d` is `d % P::DIM`.
pub struct KdTree<'a, P> {
    points: &'a [P],
    root: Option<NodeIdx>,
    arena: Vec<Node>,
    height: usize,
}

#[derive(Copy, Clone, Debug)]
struct Node {
    pivot: usize,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

type Best<P> = Option<Neighbor<ScalarAcc<<P as KdPoint>::Scalar>>>;

impl<'a, P: KdPoint> KdTree<'a, P> {
    /// Build a tree indexing every point of `points`.
    ///
    /// Each level places the median along its axis (position `len / 2` after
    /// partitioning) at the node and recurses on both halves. Coordinates must
    /// not be NaN; debug builds assert.
    pub fn new(points: &'a [P]) -> Self {
        debug_assert!(
            !points.iter().any(has_nan),
            "k-d tree coordinates must not be NaN"
        );
        let mut order: Vec<usize> = (0..points.len()).collect();
        let mut arena = Vec::with_capacity(points.len());
        let (root, height) = Self::build(points, &mut arena, &mut order, 0);
        log::trace!(
            "built k-d tree over {} points, height {}",
            points.len(),
            height
        );
        Self {
            points,
            root,
            arena,
            height,
        }
    }

    fn build(
        points: &[P],
        arena: &mut Vec<Node>,
        order: &mut [usize],
        depth: usize,
    ) -> (Option<NodeIdx>, usize) {
        let idx = arena.len();
        match order.len() {
            0 => (None, 0),
            1 => {
                arena.push(Node {
                    pivot: order[0],
                    left: None,
                    right: None,
                });
                (Some(NodeIdx::new(idx)), 1)
            }
            len => {
                let axis = depth % P::DIM;
                let mid = len / 2;
                order.select_nth_unstable_by(mid, |&a, &b| {
                    cmp_axis(&points[a], &points[b], axis)
                });
                arena.push(Node {
                    pivot: order[mid],
                    left: None,
                    right: None,
                });
                let (below, rest) = order.split_at_mut(mid);
                let (left, left_height) = Self::build(points, arena, below, depth + 1);
                let (right, right_height) =
                    Self::build(points, arena, &mut rest[1..], depth + 1);
                arena[idx].left = left;
                arena[idx].right = right;
                (Some(NodeIdx::new(idx)), 1 + left_height.max(right_height))
            }
        }
    }

    /// The indexed points.
    pub const fn points(&self) -> &'a [P] {
        self.points
    }

    /// Number of indexed points.
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the tree indexes no points.
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Height of the tree: 0 when empty, 1 for a single leaf.
    pub const fn depth(&self) -> usize {
        self.height
    }

    /// The point closest to `query`, or `None` if the tree is empty.
    pub fn nearest(&self, query: &P) -> Option<&'a P> {
        let index = self.nearest_index(query)?;
        self.points.get(index)
    }

    /// Index (into [`points`](Self::points)) of the point closest to `query`.
    pub fn nearest_index(&self, query: &P) -> Option<usize> {
        self.nearest_neighbor(query).map(|n| n.index)
    }

    /// Branch-and-bound descent: visit the query's side of the split first,
    /// then the far side only if the splitting plane is closer than the best
    /// distance found so far.
    fn search(&self, node: NodeIdx, depth: usize, query: &P, best: &mut Best<P>) {
        let n = &self.arena[node.get()];
        let pivot = &self.points[n.pivot];

        let d = dist_sq(pivot, query);
        if best.map(|b| lt(d, b.dist_sq)).unwrap_or(true) {
            *best = Some(Neighbor {
                index: n.pivot,
                dist_sq: d,
            });
        }

        let axis = depth % P::DIM;
        let (near, far) = if lt(query.coord(axis), pivot.coord(axis)) {
            (n.left, n.right)
        } else {
            (n.right, n.left)
        };
        if let Some(child) = near {
            self.search(child, depth + 1, query, best);
        }
        if let Some(child) = far
            && best
                .map(|b| lt(axis_dist_sq(query, pivot, axis), b.dist_sq))
                .unwrap_or(true)
        {
            self.search(child, depth + 1, query, best);
        }
    }
}

impl<P: KdPoint> NearestNeighbor<P> for KdTree<'_, P> {
    fn nearest_neighbor(&self, query: &P) -> Option<Neighbor<ScalarAcc<P::Scalar>>> {
        let root = self.root?;
        let mut best = None;
        self.search(root, 0, query, &mut best);
        best
    }
}

impl<P: KdPoint> Debug for KdTree<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("dim", &P::DIM)
            .field("points", &self.points.len())
            .field("arena_nodes", &self.arena.len())
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for nearest-neighbor search.
//!
//! - `kdtree`: balanced k-d tree, median split cycling through the axes by depth.
//! - `linear`: exhaustive scan (small, simple, the reference answer).
//!
//! Pruning note
//! ------------
//! The k-d tree descends into the query's side of each split first. On the way
//! back up it only visits the far side when
//!
//! `(query[axis] - pivot[axis])^2 < best_dist_sq`
//!
//! i.e. when the sphere around the query through the best point so far crosses
//! the splitting plane. Both sides compare in the scalar's widened accumulator
//! (`f32`→`f64`, `f64`→`f64`, `i64`→`u128`, saturating).

pub mod kdtree;
pub mod linear;

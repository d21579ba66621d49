// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stipple Index: nearest-neighbor search over a fixed set of 2D or 3D points.
//!
//! Stipple Index is a small building block for games and simulations.
//!
//! - Build an immutable, balanced k-d tree over a borrowed slice of points.
//! - Query the single nearest neighbor of any point.
//! - Swap the search strategy through the [`NearestNeighbor`] trait.
//!
//! It is generic over the point type through [`KdPoint`] and does not depend on any geometry crate.
//! [`Point3`], `[T; 2]` and `[T; 3]` work out of the box for `f32`, `f64` and `i64` coordinates;
//! `kurbo::Point` is supported behind the `kurbo_adapter` feature.
//!
//! # Example
//!
//! ```rust
//! use stipple_index::{KdTree, Point3};
//!
//! let points = vec![
//!     Point3::new(0.0_f32, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 1.0),
//!     Point3::new(5.0, 5.0, 5.0),
//! ];
//! let tree = KdTree::new(&points);
//!
//! let hit = tree.nearest(&Point3::new(0.9, 1.2, 0.8)).unwrap();
//! assert_eq!(*hit, Point3::new(1.0, 1.0, 1.0));
//! assert_eq!(tree.nearest_index(&Point3::new(4.0, 6.0, 5.0)), Some(2));
//! ```
//!
//! The tree borrows the slice, so the points cannot be moved or mutated while it is alive:
//!
//! ```compile_fail
//! use stipple_index::KdTree;
//!
//! let mut points = vec![[0.0_f64, 0.0], [1.0, 1.0]];
//! let tree = KdTree::new(&points);
//! points.push([2.0, 2.0]);
//! let _ = tree.nearest(&[0.5, 0.5]);
//! ```
//!
//! ## Choosing a backend
//!
//! - `KdTree`: O(n log n) build, expected O(log n) queries for reasonably spread points
//!   (O(n) in degenerate layouts). See the [`backends`] docs for the pruning rule.
//! - `LinearScan`: no build step, O(n) queries. Good for very small sets and as a reference.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Debug builds assert.
//! Squared distances use widened accumulators to reduce precision pitfalls; `i64`
//! distances are exact in `u128` per axis and saturate when summed.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod backend;
pub mod backends;
pub mod types;

pub use backend::{NearestNeighbor, Neighbor};
pub use backends::kdtree::KdTree;
pub use backends::linear::LinearScan;
pub use types::{KdPoint, Point3, Scalar, ScalarAcc};

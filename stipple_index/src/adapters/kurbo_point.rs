// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`KdPoint`] for [`kurbo::Point`].
//!
//! ## Feature
//!
//! Enable with `kurbo_adapter`.
//!
//! This lets the output of a 2D sampler (which produces `kurbo::Point`s) be
//! indexed directly, without copying into arrays first.

use kurbo::Point;

use crate::types::KdPoint;

impl KdPoint for Point {
    type Scalar = f64;
    const DIM: usize = 2;

    #[inline]
    fn coord(&self, axis: usize) -> f64 {
        if axis == 0 { self.x } else { self.y }
    }
}

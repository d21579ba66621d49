// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point primitives and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Numeric scalar abstraction for point coordinates.
///
/// Squared distances are accumulated in a widened type: `f32` sums in `f64`,
/// `f64` in `f64`, and `i64` in `u128`. For `i64` each axis contributes
/// `|a - b|^2`, which always fits in `u128`; sums across axes saturate at
/// `u128::MAX`, so extreme coordinates never overflow or wrap.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type used for squared distances.
    type Acc: Copy + PartialOrd + Debug;

    /// Squared difference of two coordinates.
    fn diff_sq(a: Self, b: Self) -> Self::Acc;

    /// Sum of two accumulated values.
    fn add_acc(a: Self::Acc, b: Self::Acc) -> Self::Acc;

    /// Whether the value is NaN. Always false for integers.
    fn is_nan(v: Self) -> bool;
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline]
    fn diff_sq(a: Self, b: Self) -> Self::Acc {
        let d = f64::from(a) - f64::from(b);
        d * d
    }

    #[inline]
    fn add_acc(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a + b
    }

    #[inline]
    fn is_nan(v: Self) -> bool {
        v.is_nan()
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline]
    fn diff_sq(a: Self, b: Self) -> Self::Acc {
        let d = a - b;
        d * d
    }

    #[inline]
    fn add_acc(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a + b
    }

    #[inline]
    fn is_nan(v: Self) -> bool {
        v.is_nan()
    }
}

impl Scalar for i64 {
    type Acc = u128;

    #[inline]
    fn diff_sq(a: Self, b: Self) -> Self::Acc {
        let d = u128::from(a.abs_diff(b));
        d * d
    }

    #[inline]
    fn add_acc(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a.saturating_add(b)
    }

    #[inline]
    fn is_nan(_v: Self) -> bool {
        false
    }
}

/// Helper alias for the widened accumulator type associated with a scalar `T`.
pub type ScalarAcc<T> = <T as Scalar>::Acc;

/// A point with a fixed number of axes that can be indexed.
///
/// The k-d tree splits on `depth % DIM`, so `DIM` must be at least 1.
/// Implementations exist for [`Point3`], `[T; 2]` and `[T; 3]`, and for
/// `kurbo::Point` behind the `kurbo_adapter` feature.
pub trait KdPoint {
    /// Coordinate type.
    type Scalar: Scalar;

    /// Number of axes.
    const DIM: usize;

    /// Coordinate on `axis`, where `axis < DIM`.
    fn coord(&self, axis: usize) -> Self::Scalar;
}

/// A point in 3D.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point3<T> {
    /// x coordinate.
    pub x: T,
    /// y coordinate.
    pub y: T,
    /// z coordinate.
    pub z: T,
}

impl<T> Point3<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<[T; 3]> for Point3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> KdPoint for Point3<T> {
    type Scalar = T;
    const DIM: usize = 3;

    #[inline]
    fn coord(&self, axis: usize) -> T {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }
}

impl<T: Scalar, const N: usize> KdPoint for [T; N] {
    type Scalar = T;
    const DIM: usize = N;

    #[inline]
    fn coord(&self, axis: usize) -> T {
        self[axis]
    }
}

/// Squared difference of two points along one axis, in the widened type.
#[inline]
pub fn axis_dist_sq<P: KdPoint>(a: &P, b: &P, axis: usize) -> ScalarAcc<P::Scalar> {
    P::Scalar::diff_sq(a.coord(axis), b.coord(axis))
}

/// Squared Euclidean distance between two points, in the widened type.
#[inline]
pub fn dist_sq<P: KdPoint>(a: &P, b: &P) -> ScalarAcc<P::Scalar> {
    debug_assert!(P::DIM > 0, "points need at least one axis");
    let mut acc = axis_dist_sq(a, b, 0);
    for axis in 1..P::DIM {
        acc = P::Scalar::add_acc(acc, axis_dist_sq(a, b, axis));
    }
    acc
}

/// Whether any coordinate of the point is NaN.
pub(crate) fn has_nan<P: KdPoint>(p: &P) -> bool {
    (0..P::DIM).any(|axis| P::Scalar::is_nan(p.coord(axis)))
}

/// Order two points along one axis. Incomparable values compare equal.
pub(crate) fn cmp_axis<P: KdPoint>(a: &P, b: &P, axis: usize) -> Ordering {
    a.coord(axis)
        .partial_cmp(&b.coord(axis))
        .unwrap_or(Ordering::Equal)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when validating a sampler configuration.

/// Reasons [`PoissonDisk2D::new`](crate::PoissonDisk2D::new) rejects a configuration.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum SamplingError {
    /// The minimum distance is zero, negative, infinite or NaN.
    #[error("minimum distance must be finite and positive, got {0}")]
    InvalidMinDistance(f64),
    /// The bounding rectangle has a non-finite coordinate.
    #[error("sampling bounds must be finite")]
    NonFiniteBounds,
    /// The acceleration grid would exceed [`MAX_GRID_CELLS`](crate::MAX_GRID_CELLS).
    #[error("acceleration grid of {columns}x{rows} cells is too large")]
    GridTooLarge {
        /// Columns the grid would need.
        columns: usize,
        /// Rows the grid would need.
        rows: usize,
    },
}

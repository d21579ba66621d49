// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background acceleration grid for 2D Poisson-disk sampling.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect};

/// Cells scanned on each side of a lookup.
const REACH: usize = 2;

/// Uniform grid over a rectangle, one optional sample index per cell.
///
/// With a cell size of `min_dist / sqrt(2)` a cell's diagonal is `min_dist`, so a
/// cell can hold at most one accepted sample. A sample closer than `min_dist`
/// to a point is at most two cells away on each axis, so lookups scan the 5×5
/// block around the point.
pub(crate) struct Grid {
    cell_size: f64,
    origin: Point,
    columns: usize,
    rows: usize,
    cells: Vec<Option<usize>>,
}

impl Grid {
    /// Create an empty grid covering `bounds`. `bounds` must not be inverted.
    pub(crate) fn new(bounds: Rect, cell_size: f64) -> Self {
        let (columns, rows) = Self::dimensions(bounds, cell_size);
        Self {
            cell_size,
            origin: bounds.origin(),
            columns,
            rows,
            cells: vec![None; columns.saturating_mul(rows)],
        }
    }

    /// Number of columns and rows needed to cover `bounds`; at least one each.
    pub(crate) fn dimensions(bounds: Rect, cell_size: f64) -> (usize, usize) {
        debug_assert!(cell_size > 0.0, "cell size must be positive");
        let columns = ceil_to_usize(bounds.width() / cell_size).max(1);
        let rows = ceil_to_usize(bounds.height() / cell_size).max(1);
        (columns, rows)
    }

    #[inline]
    fn key_for(&self, p: Point) -> (i64, i64) {
        let cx = floor_to_i64((p.x - self.origin.x) / self.cell_size);
        let cy = floor_to_i64((p.y - self.origin.y) / self.cell_size);
        (cx, cy)
    }

    /// Cell coordinates of a point inside the bounds.
    ///
    /// Points on the far edges land in the last column/row.
    fn cell_for(&self, p: Point) -> (usize, usize) {
        let (cx, cy) = self.key_for(p);
        let clamp = |k: i64, len: usize| usize::try_from(k).unwrap_or(0).min(len - 1);
        (clamp(cx, self.columns), clamp(cy, self.rows))
    }

    /// Record `index` as the sample occupying the cell under `p`.
    pub(crate) fn claim(&mut self, p: Point, index: usize) {
        let (cx, cy) = self.cell_for(p);
        let cell = &mut self.cells[cy * self.columns + cx];
        debug_assert!(cell.is_none(), "grid cell already holds a sample");
        *cell = Some(index);
    }

    /// Sample indices stored in the 5×5 block of cells around `p`.
    pub(crate) fn neighbors(&self, p: Point) -> impl Iterator<Item = usize> + '_ {
        let (cx, cy) = self.cell_for(p);
        let x_range = cx.saturating_sub(REACH)..=(cx + REACH).min(self.columns - 1);
        let y_range = cy.saturating_sub(REACH)..=(cy + REACH).min(self.rows - 1);
        y_range.flat_map(move |y| {
            let row = &self.cells[y * self.columns..(y + 1) * self.columns];
            row[x_range.clone()].iter().filter_map(|c| *c)
        })
    }

    pub(crate) const fn columns(&self) -> usize {
        self.columns
    }

    pub(crate) const fn rows(&self) -> usize {
        self.rows
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let occupied = self.cells.iter().filter(|c| c.is_some()).count();
        f.debug_struct("Grid")
            .field("cell_size", &self.cell_size)
            .field("origin", &self.origin)
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("occupied", &occupied)
            .finish_non_exhaustive()
    }
}

#[inline]
fn floor_to_i64(v: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Saturating float-to-int casts are intended; out-of-range cells are clamped."
    )]
    let i = v as i64;
    if (i as f64) > v { i - 1 } else { i }
}

#[inline]
fn ceil_to_usize(v: f64) -> usize {
    usize::try_from(-floor_to_i64(-v)).unwrap_or(0)
}

//! Anything the grid can resolve to a clamped cell range.

use crate::cell::{Cell, CellRange};
use crate::geometry::{Rect, Vec2};
use crate::mapper::CellMapper;

/// A query or mutation target: a cell, a cell range, a world position or a
/// world-space box
///
/// Every implementation returns an in-bounds, non-empty range. Out-of-range
/// input is clamped onto the border, never rejected.
pub trait Region {
    /// Clamped, non-empty cell range covered by this target
    fn cell_range(&self, mapper: &CellMapper) -> CellRange;
}

impl Region for Cell {
    #[inline]
    fn cell_range(&self, mapper: &CellMapper) -> CellRange {
        CellRange::single(mapper.clamp(*self))
    }
}

impl Region for CellRange {
    #[inline]
    fn cell_range(&self, mapper: &CellMapper) -> CellRange {
        mapper.clamp_range(*self)
    }
}

/// A position resolves to exactly one cell
impl Region for Vec2 {
    #[inline]
    fn cell_range(&self, mapper: &CellMapper) -> CellRange {
        CellRange::single(mapper.clamp(mapper.cell_of(*self)))
    }
}

/// A box resolves to every cell its corners span
impl Region for Rect {
    #[inline]
    fn cell_range(&self, mapper: &CellMapper) -> CellRange {
        mapper.range_of(self)
    }
}

impl<R: Region + ?Sized> Region for &R {
    #[inline]
    fn cell_range(&self, mapper: &CellMapper) -> CellRange {
        (**self).cell_range(mapper)
    }
}

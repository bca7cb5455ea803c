//! Integer cell coordinates and inclusive cell rectangles.

use serde::{Deserialize, Serialize};

/// Integer coordinate of one grid bucket
///
/// Any `i32` pair can be expressed; the grid clamps out-of-range cells onto
/// its border before using them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Cell {
    /// Creates a cell coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Inclusive rectangle of cells, `min` to `max` on both axes
///
/// A range is never empty: the constructor orders the corners so that
/// `min <= max` on each axis. Deserialized ranges go through the same
/// constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RangeCorners")]
pub struct CellRange {
    min: Cell,
    max: Cell,
}

/// Wire form of a [`CellRange`]; the corners may arrive in any order
#[derive(Deserialize)]
struct RangeCorners {
    min: Cell,
    max: Cell,
}

impl From<RangeCorners> for CellRange {
    fn from(corners: RangeCorners) -> Self {
        Self::new(corners.min, corners.max)
    }
}

impl CellRange {
    /// Creates the range spanned by two corner cells (in any order)
    pub fn new(a: Cell, b: Cell) -> Self {
        Self {
            min: Cell::new(a.x.min(b.x), a.y.min(b.y)),
            max: Cell::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Range covering exactly one cell
    pub fn single(cell: Cell) -> Self {
        Self { min: cell, max: cell }
    }

    /// Corner with the smallest coordinates
    #[inline]
    pub fn min(&self) -> Cell {
        self.min
    }

    /// Corner with the largest coordinates
    #[inline]
    pub fn max(&self) -> Cell {
        self.max
    }

    /// Number of columns
    pub fn width(&self) -> u32 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    /// Number of rows
    pub fn height(&self) -> u32 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Total number of cells in the range
    pub fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// `true` if the range covers exactly one cell
    pub fn is_single(&self) -> bool {
        self.min == self.max
    }

    /// `true` if `cell` lies inside the range, borders included
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x && cell.y >= self.min.y && cell.y <= self.max.y
    }

    /// Iterates the cells row-major: outer loop over rows, inner over columns
    pub fn iter(&self) -> CellRangeIter {
        CellRangeIter {
            range: *self,
            next: Some(self.min),
        }
    }
}

impl From<Cell> for CellRange {
    fn from(cell: Cell) -> Self {
        Self::single(cell)
    }
}

impl IntoIterator for CellRange {
    type Item = Cell;
    type IntoIter = CellRangeIter;

    fn into_iter(self) -> CellRangeIter {
        self.iter()
    }
}

/// Row-major iterator over a [`CellRange`]
#[derive(Clone, Debug)]
pub struct CellRangeIter {
    range: CellRange,
    next: Option<Cell>,
}

impl Iterator for CellRangeIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let current = self.next?;
        self.next = if current.x < self.range.max.x {
            Some(Cell::new(current.x + 1, current.y))
        } else if current.y < self.range.max.y {
            Some(Cell::new(self.range.min.x, current.y + 1))
        } else {
            None
        };
        Some(current)
    }
}

//! World-to-cell coordinate mapping with border clamping.

use crate::cell::{Cell, CellRange};
use crate::config::GridConfig;
use crate::error::Result;
use crate::geometry::{Rect, Vec2};

/// Maps world coordinates onto the cells of a fixed grid
///
/// Cell counts are validated at construction, so the derived cell size is
/// never zero and every clamp target exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMapper {
    width: f64,
    height: f64,
    cells_x: i32,
    cells_y: i32,
    cell_width: f64,
    cell_height: f64,
}

impl CellMapper {
    /// Builds the mapping for a validated configuration
    ///
    /// # Errors
    ///
    /// Returns the error of [`GridConfig::validate`] if the configuration is
    /// rejected.
    pub fn new(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        // validate() caps both counts at i32::MAX
        Ok(Self {
            width: config.width,
            height: config.height,
            cells_x: config.cells_x as i32,
            cells_y: config.cells_y as i32,
            cell_width: config.width / f64::from(config.cells_x),
            cell_height: config.height / f64::from(config.cells_y),
        })
    }

    /// World width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// World height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of columns
    pub fn cells_x(&self) -> u32 {
        self.cells_x.unsigned_abs()
    }

    /// Number of rows
    pub fn cells_y(&self) -> u32 {
        self.cells_y.unsigned_abs()
    }

    /// World width of one cell
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// World height of one cell
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Range covering the whole grid
    pub fn bounds(&self) -> CellRange {
        CellRange::new(Cell::new(0, 0), Cell::new(self.cells_x - 1, self.cells_y - 1))
    }

    /// Cell containing `position`, without clamping
    ///
    /// The float-to-int cast saturates, and NaN maps to 0, so the result is
    /// always a representable cell that `clamp` can pull onto the grid.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float-to-int casts saturate and the result is clamped by callers"
    )]
    pub fn cell_of(&self, position: Vec2) -> Cell {
        Cell::new(
            (position.x / self.cell_width).floor() as i32,
            (position.y / self.cell_height).floor() as i32,
        )
    }

    /// Pulls each axis independently into `[0, count - 1]`
    #[inline]
    pub fn clamp(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.clamp(0, self.cells_x - 1), cell.y.clamp(0, self.cells_y - 1))
    }

    /// Clamps both corners of a range independently
    ///
    /// A range lying entirely outside the grid collapses onto the border
    /// cells nearest to it.
    pub fn clamp_range(&self, range: CellRange) -> CellRange {
        CellRange::new(self.clamp(range.min()), self.clamp(range.max()))
    }

    /// Inclusive cell range hit by a world-space box
    pub fn range_of(&self, aabb: &Rect) -> CellRange {
        let top_left = self.cell_of(aabb.top_left());
        let bottom_right = self.cell_of(aabb.bottom_right());
        self.clamp_range(CellRange::new(top_left, bottom_right))
    }

    /// `true` if `cell` needs no clamping
    pub fn is_inside(&self, cell: Cell) -> bool {
        self.bounds().contains(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    fn mapper(width: f64, height: f64, cells_x: u32, cells_y: u32) -> CellMapper {
        CellMapper::new(&GridConfig::new(width, height, cells_x, cells_y)).unwrap()
    }

    #[test]
    fn test_cell_size_derivation() {
        let m = mapper(700.0, 350.0, 40, 10);
        assert_eq!(m.cell_width(), 17.5);
        assert_eq!(m.cell_height(), 35.0);
    }

    #[test]
    fn test_zero_cells_rejected() {
        let err = CellMapper::new(&GridConfig::new(100.0, 100.0, 0, 0)).unwrap_err();
        assert!(matches!(err, GridError::InvalidCellCount { .. }));
    }

    #[test]
    fn test_cell_of_floors() {
        let m = mapper(100.0, 100.0, 10, 10);
        assert_eq!(m.cell_of(Vec2::new(0.0, 0.0)), Cell::new(0, 0));
        assert_eq!(m.cell_of(Vec2::new(9.99, 10.0)), Cell::new(0, 1));
        assert_eq!(m.cell_of(Vec2::new(55.0, 99.9)), Cell::new(5, 9));
        // Negative coordinates floor away from zero
        assert_eq!(m.cell_of(Vec2::new(-0.5, -10.5)), Cell::new(-1, -2));
    }

    #[test]
    fn test_cell_of_does_not_clamp() {
        let m = mapper(100.0, 100.0, 10, 10);
        assert_eq!(m.cell_of(Vec2::new(150.0, 250.0)), Cell::new(15, 25));
    }

    #[test]
    fn test_cell_of_non_finite() {
        let m = mapper(100.0, 100.0, 10, 10);
        assert_eq!(m.clamp(m.cell_of(Vec2::new(f64::NAN, f64::INFINITY))), Cell::new(0, 9));
        assert_eq!(m.clamp(m.cell_of(Vec2::new(f64::NEG_INFINITY, 1e300))), Cell::new(0, 9));
    }

    #[test]
    fn test_clamp_each_axis() {
        let m = mapper(100.0, 100.0, 10, 10);
        assert_eq!(m.clamp(Cell::new(15, -3)), Cell::new(9, 0));
        assert_eq!(m.clamp(Cell::new(-1, 4)), Cell::new(0, 4));
        assert_eq!(m.clamp(Cell::new(3, 4)), Cell::new(3, 4));
        assert_eq!(m.clamp(Cell::new(i32::MIN, i32::MAX)), Cell::new(0, 9));
    }

    #[test]
    fn test_range_of_box() {
        let m = mapper(100.0, 100.0, 10, 10);
        let r = m.range_of(&Rect::from_corners(5.0, 5.0, 25.0, 25.0));
        assert_eq!(r.min(), Cell::new(0, 0));
        assert_eq!(r.max(), Cell::new(2, 2));
        assert_eq!(r.cell_count(), 9);
    }

    #[test]
    fn test_range_of_partially_outside_box() {
        let m = mapper(100.0, 100.0, 10, 10);
        let r = m.range_of(&Rect::from_corners(-50.0, 85.0, 15.0, 300.0));
        assert_eq!(r.min(), Cell::new(0, 8));
        assert_eq!(r.max(), Cell::new(1, 9));
    }

    #[test]
    fn test_range_of_fully_outside_box_is_border() {
        let m = mapper(100.0, 100.0, 10, 10);
        let corner = m.range_of(&Rect::from_corners(200.0, 200.0, 400.0, 300.0));
        assert!(corner.is_single());
        assert_eq!(corner.min(), Cell::new(9, 9));

        let left_edge = m.range_of(&Rect::from_corners(-40.0, 20.0, -10.0, 35.0));
        assert_eq!(left_edge.min(), Cell::new(0, 2));
        assert_eq!(left_edge.max(), Cell::new(0, 3));
    }

    #[test]
    fn test_range_of_inverted_box_is_non_empty() {
        let m = mapper(100.0, 100.0, 10, 10);
        let r = m.range_of(&Rect::new(30.0, 30.0, -20.0, -20.0));
        assert_eq!(r.min(), Cell::new(1, 1));
        assert_eq!(r.max(), Cell::new(3, 3));
    }

    #[test]
    fn test_clamp_range() {
        let m = mapper(100.0, 100.0, 10, 10);
        let r = m.clamp_range(CellRange::new(Cell::new(-5, 8), Cell::new(20, 12)));
        assert_eq!(r, CellRange::new(Cell::new(0, 8), Cell::new(9, 9)));
        assert!(m.is_inside(r.min()) && m.is_inside(r.max()));
    }
}

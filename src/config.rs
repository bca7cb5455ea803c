//! Grid construction settings.

use serde::{Deserialize, Serialize};

use crate::error::{Axis, GridError, Result};

/// World extent and cell counts of a grid
///
/// Fixed for the lifetime of a grid; there is no resizing after
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// World width covered by the grid
    pub width: f64,
    /// World height covered by the grid
    pub height: f64,
    /// Number of cells along x
    pub cells_x: u32,
    /// Number of cells along y
    pub cells_y: u32,
}

impl GridConfig {
    /// Creates an unchecked configuration; see [`validate`](Self::validate)
    pub fn new(width: f64, height: f64, cells_x: u32, cells_y: u32) -> Self {
        Self {
            width,
            height,
            cells_x,
            cells_y,
        }
    }

    /// Derives cell counts from a desired cell size
    ///
    /// Counts are rounded up, so the resulting cells are at most
    /// `cell_width` x `cell_height` and always cover the whole world.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidExtent`] if any size is not positive and
    /// finite, and [`GridError::InvalidCellCount`] if a derived count does
    /// not fit cell coordinates.
    pub fn with_cell_size(width: f64, height: f64, cell_width: f64, cell_height: f64) -> Result<Self> {
        check_extent(Axis::X, cell_width)?;
        check_extent(Axis::Y, cell_height)?;
        check_extent(Axis::X, width)?;
        check_extent(Axis::Y, height)?;

        let cells_x = cells_for(width, cell_width);
        let cells_y = cells_for(height, cell_height);
        let config = Self::new(width, height, cells_x.max(1), cells_y.max(1));
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that would divide by zero or overflow cell
    /// coordinates
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCellCount`] for a count of zero or above
    /// `i32::MAX`, and [`GridError::InvalidExtent`] for a world size that is
    /// not positive and finite.
    pub fn validate(&self) -> Result<()> {
        check_count(Axis::X, self.cells_x)?;
        check_count(Axis::Y, self.cells_y)?;
        check_extent(Axis::X, self.width)?;
        check_extent(Axis::Y, self.height)?;
        Ok(())
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the quotient is positive and capped at i32::MAX before the cast"
)]
fn cells_for(extent: f64, cell_size: f64) -> u32 {
    (extent / cell_size).ceil().min(f64::from(i32::MAX)) as u32
}

fn check_count(axis: Axis, count: u32) -> Result<()> {
    if count == 0 || count > i32::MAX.unsigned_abs() {
        return Err(GridError::InvalidCellCount { axis, count });
    }
    Ok(())
}

fn check_extent(axis: Axis, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GridError::InvalidExtent { axis, value });
    }
    Ok(())
}

//! Uniform grid with region queries over the bidirectional index.
//!
//! Every operation takes an `impl Region`, resolves it to a clamped cell
//! range through the [`CellMapper`] and then runs the single-cell form of the
//! operation over that range, row by row.

use std::collections::HashSet;
use std::hash::Hash;

use log::{debug, trace};

use crate::cell::{Cell, CellRange};
use crate::config::GridConfig;
use crate::error::Result;
use crate::geometry::Vec2;
use crate::index::CellIndex;
use crate::mapper::CellMapper;
use crate::pool::PoolStats;
use crate::region::Region;

/// Uniform-grid spatial index for broad-phase queries (single-threaded)
///
/// Items are registered in every cell their position or box touches. The
/// grid never looks at item geometry again; callers move items explicitly
/// when they change place.
///
/// For a grid shared between threads, see [`CollisionGrid`](crate::CollisionGrid).
///
/// # Examples
/// ```
/// use collision_grid::prelude::*;
///
/// let mut grid = SpatialGrid::new(100.0, 100.0, 10, 10).unwrap();
/// grid.add("ship", Rect::from_corners(5.0, 5.0, 25.0, 15.0));
/// grid.add("rock", Vec2::new(12.0, 12.0));
///
/// // Deduplicated even though "ship" spans six cells
/// let near = grid.get(Rect::from_corners(0.0, 0.0, 30.0, 30.0));
/// assert_eq!(near, vec!["ship", "rock"]);
///
/// grid.move_to("rock", Vec2::new(95.0, 95.0));
/// assert_eq!(grid.first(Cell::new(9, 9)), Some(&"rock"));
/// ```
#[derive(Debug)]
pub struct SpatialGrid<T> {
    mapper: CellMapper,
    index: CellIndex<T>,
}

impl<T: Eq + Hash + Clone> SpatialGrid<T> {
    /// Creates a grid covering `width` x `height` world units split into
    /// `cells_x` x `cells_y` cells
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCellCount`](crate::GridError::InvalidCellCount)
    /// or [`GridError::InvalidExtent`](crate::GridError::InvalidExtent) if the
    /// extent is rejected.
    pub fn new(width: f64, height: f64, cells_x: u32, cells_y: u32) -> Result<Self> {
        Self::from_config(&GridConfig::new(width, height, cells_x, cells_y))
    }

    /// Creates a grid from a [`GridConfig`]
    ///
    /// # Errors
    ///
    /// Returns the error of [`GridConfig::validate`] if the configuration is
    /// rejected.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        let mapper = CellMapper::new(config)?;
        debug!(
            "[SpatialGrid] created {}x{} world, {}x{} cells of {}x{}",
            mapper.width(),
            mapper.height(),
            mapper.cells_x(),
            mapper.cells_y(),
            mapper.cell_width(),
            mapper.cell_height()
        );
        Ok(Self {
            mapper,
            index: CellIndex::new(),
        })
    }

    // --- Extent ---

    /// Coordinate mapping used to resolve regions
    pub fn mapper(&self) -> &CellMapper {
        &self.mapper
    }

    /// World width
    pub fn width(&self) -> f64 {
        self.mapper.width()
    }

    /// World height
    pub fn height(&self) -> f64 {
        self.mapper.height()
    }

    /// Number of columns
    pub fn cells_x(&self) -> u32 {
        self.mapper.cells_x()
    }

    /// Number of rows
    pub fn cells_y(&self) -> u32 {
        self.mapper.cells_y()
    }

    /// World width of one cell
    pub fn cell_width(&self) -> f64 {
        self.mapper.cell_width()
    }

    /// World height of one cell
    pub fn cell_height(&self) -> f64 {
        self.mapper.cell_height()
    }

    /// Clamped cell containing `position`
    pub fn cell_at(&self, position: Vec2) -> Cell {
        self.mapper.clamp(self.mapper.cell_of(position))
    }

    /// Clamped cell range a region resolves to
    pub fn range_of(&self, region: impl Region) -> CellRange {
        region.cell_range(&self.mapper)
    }

    // --- Mutation ---

    /// Registers `item` in every cell of `region`
    ///
    /// Cells that already hold the item are left untouched.
    pub fn add(&mut self, item: T, region: impl Region) {
        for cell in region.cell_range(&self.mapper) {
            let _ = self.index.insert(&item, cell);
        }
    }

    /// Evicts every item from every cell of `region`
    ///
    /// Items that also occupy cells outside the region stay registered there.
    /// Returns the number of (item, cell) registrations removed.
    pub fn remove(&mut self, region: impl Region) -> usize {
        let range = region.cell_range(&self.mapper);
        let evicted: usize = range.iter().map(|cell| self.index.remove_cell(cell)).sum();
        if evicted > 0 {
            trace!("[SpatialGrid] removed {} registrations from {:?}", evicted, range);
        }
        evicted
    }

    /// Removes `item` from every cell it occupies
    ///
    /// Returns `false` if the item was not in the grid.
    pub fn remove_item(&mut self, item: &T) -> bool {
        self.index.remove_item(item)
    }

    /// Re-registers `item` at `region`, dropping its previous footprint
    ///
    /// An item that was not in the grid is simply added.
    pub fn move_to(&mut self, item: T, region: impl Region) {
        let range = region.cell_range(&self.mapper);
        let _ = self.index.remove_item(&item);
        for cell in range {
            let _ = self.index.insert(&item, cell);
        }
    }

    /// Removes every item, keeping emptied containers for reuse
    pub fn clear(&mut self) {
        trace!(
            "[SpatialGrid] clearing {} items in {} cells",
            self.index.item_count(),
            self.index.occupied_cell_count()
        );
        self.index.clear();
    }

    // --- Queries ---

    /// Distinct items registered anywhere in `region`
    ///
    /// Order is first-seen, scanning cells row-major and each cell's items in
    /// insertion order.
    pub fn get(&self, region: impl Region) -> Vec<T> {
        let mut results = Vec::new();
        self.query(region, &mut results);
        results
    }

    /// Same as [`get`](Self::get), writing into a reusable buffer
    ///
    /// `results` is cleared first.
    pub fn query(&self, region: impl Region, results: &mut Vec<T>) {
        results.clear();
        let range = region.cell_range(&self.mapper);

        if range.is_single() {
            results.extend_from_slice(self.index.get(range.min()));
            return;
        }

        let mut seen: HashSet<&T> = HashSet::new();
        for cell in range {
            for item in self.index.get(cell) {
                if seen.insert(item) {
                    results.push(item.clone());
                }
            }
        }
    }

    /// First item found in `region`, scanning cells row-major
    pub fn first(&self, region: impl Region) -> Option<&T> {
        region
            .cell_range(&self.mapper)
            .iter()
            .find_map(|cell| self.index.first(cell))
    }

    /// `true` if no cell of `region` holds an item
    pub fn is_empty(&self, region: impl Region) -> bool {
        region
            .cell_range(&self.mapper)
            .iter()
            .all(|cell| self.index.is_empty(cell))
    }

    /// Number of distinct items in `region`
    pub fn count(&self, region: impl Region) -> usize {
        let range = region.cell_range(&self.mapper);
        if range.is_single() {
            return self.index.get(range.min()).len();
        }
        range
            .iter()
            .flat_map(|cell| self.index.get(cell))
            .collect::<HashSet<&T>>()
            .len()
    }

    /// Cells currently occupied by `item`, in the order they were added
    pub fn cells_of(&self, item: &T) -> &[Cell] {
        self.index.cells_of(item)
    }

    /// `true` if `item` occupies at least one cell
    pub fn contains_item(&self, item: &T) -> bool {
        self.index.contains_item(item)
    }

    /// Every item in the grid
    pub fn all_items(&self) -> impl Iterator<Item = &T> {
        self.index.items()
    }

    /// Every cell holding at least one item
    pub fn all_occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.index.occupied_cells()
    }

    /// Number of distinct items in the grid
    pub fn item_count(&self) -> usize {
        self.index.item_count()
    }

    /// Number of cells holding at least one item
    pub fn occupied_cell_count(&self) -> usize {
        self.index.occupied_cell_count()
    }

    /// Idle containers waiting for reuse
    pub fn pool_stats(&self) -> PoolStats {
        self.index.pool_stats()
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.index.is_consistent()
    }
}

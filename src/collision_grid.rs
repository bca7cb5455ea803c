//! Thread-safe wrapper: one lock around one grid.
//!
//! Every call locks the whole grid for its full duration. Region operations
//! and `move_to` touch an open-ended set of cells, so there is no per-cell or
//! per-row locking; a single call is atomic, two separate calls are not.
//!
//! Every fallible method returns [`GridError::Disposed`] once the grid has
//! been disposed; that is the only error after construction.

use std::hash::Hash;

use log::{debug, warn};
use parking_lot::Mutex;

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::grid::SpatialGrid;
use crate::pool::PoolStats;
use crate::region::Region;

/// Shared [`SpatialGrid`] guarded by a single mutex
///
/// After [`dispose`](Self::dispose) the grid is gone and every operation
/// returns [`GridError::Disposed`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use collision_grid::prelude::*;
///
/// let grid = Arc::new(CollisionGrid::new(100.0, 100.0, 10, 10).unwrap());
/// let handles: Vec<_> = (0..4_u32)
///     .map(|id| {
///         let grid = Arc::clone(&grid);
///         thread::spawn(move || grid.add(id, Vec2::new(f64::from(id) * 10.0, 5.0)))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap().unwrap();
/// }
/// assert_eq!(grid.item_count().unwrap(), 4);
///
/// grid.dispose().unwrap();
/// assert_eq!(grid.get(Cell::new(0, 0)), Err(GridError::Disposed));
/// ```
#[derive(Debug)]
pub struct CollisionGrid<T> {
    config: GridConfig,
    inner: Mutex<Option<SpatialGrid<T>>>,
}

impl<T: Eq + Hash + Clone> CollisionGrid<T> {
    /// Creates a shared grid; see [`SpatialGrid::new`]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCellCount`] or [`GridError::InvalidExtent`]
    /// if the extent is rejected.
    pub fn new(width: f64, height: f64, cells_x: u32, cells_y: u32) -> Result<Self> {
        Self::from_config(&GridConfig::new(width, height, cells_x, cells_y))
    }

    /// Creates a shared grid from a [`GridConfig`]
    ///
    /// # Errors
    ///
    /// Returns the error of [`GridConfig::validate`] if the configuration is
    /// rejected.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        let grid = SpatialGrid::from_config(config)?;
        Ok(Self {
            config: *config,
            inner: Mutex::new(Some(grid)),
        })
    }

    /// Extent the grid was built with
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Locked [`SpatialGrid::add`]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn add(&self, item: T, region: impl Region) -> Result<()> {
        self.locked("add", |grid| grid.add(item, region))
    }

    /// Locked [`SpatialGrid::remove`]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn remove(&self, region: impl Region) -> Result<usize> {
        self.locked("remove", |grid| grid.remove(region))
    }

    /// Locked [`SpatialGrid::remove_item`]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn remove_item(&self, item: &T) -> Result<bool> {
        self.locked("remove_item", |grid| grid.remove_item(item))
    }

    /// Removes the old footprint and adds the new one in one critical
    /// section, so no other thread sees the item missing
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn move_to(&self, item: T, region: impl Region) -> Result<()> {
        self.locked("move_to", |grid| grid.move_to(item, region))
    }

    /// Locked [`SpatialGrid::clear`]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn clear(&self) -> Result<()> {
        self.locked("clear", |grid| grid.clear())
    }

    /// Owned copy of what [`SpatialGrid::get`] returns
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn get(&self, region: impl Region) -> Result<Vec<T>> {
        self.locked("get", |grid| grid.get(region))
    }

    /// Locked [`SpatialGrid::query`]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose);
    /// `results` is left untouched then.
    pub fn query(&self, region: impl Region, results: &mut Vec<T>) -> Result<()> {
        self.locked("query", |grid| grid.query(region, results))
    }

    /// Clone of the item [`SpatialGrid::first`] finds
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn first(&self, region: impl Region) -> Result<Option<T>> {
        self.locked("first", |grid| grid.first(region).cloned())
    }

    /// Locked [`SpatialGrid::is_empty`]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn is_empty(&self, region: impl Region) -> Result<bool> {
        self.locked("is_empty", |grid| grid.is_empty(region))
    }

    /// Locked [`SpatialGrid::count`]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn count(&self, region: impl Region) -> Result<usize> {
        self.locked("count", |grid| grid.count(region))
    }

    /// Snapshot of the cells `item` occupies
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn cells_of(&self, item: &T) -> Result<Vec<Cell>> {
        self.locked("cells_of", |grid| grid.cells_of(item).to_vec())
    }

    /// Locked [`SpatialGrid::contains_item`]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn contains_item(&self, item: &T) -> Result<bool> {
        self.locked("contains_item", |grid| grid.contains_item(item))
    }

    /// Snapshot of every item in the grid
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn all_items(&self) -> Result<Vec<T>> {
        self.locked("all_items", |grid| grid.all_items().cloned().collect())
    }

    /// Snapshot of every occupied cell
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn all_occupied_cells(&self) -> Result<Vec<Cell>> {
        self.locked("all_occupied_cells", |grid| grid.all_occupied_cells().collect())
    }

    /// Locked [`SpatialGrid::item_count`]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn item_count(&self) -> Result<usize> {
        self.locked("item_count", |grid| grid.item_count())
    }

    /// Locked [`SpatialGrid::occupied_cell_count`]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn occupied_cell_count(&self) -> Result<usize> {
        self.locked("occupied_cell_count", |grid| grid.occupied_cell_count())
    }

    /// Locked [`SpatialGrid::pool_stats`]
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] after [`dispose`](Self::dispose).
    pub fn pool_stats(&self) -> Result<PoolStats> {
        self.locked("pool_stats", |grid| grid.pool_stats())
    }

    /// Tears the grid down, releasing both indices and the pools
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Disposed`] if the grid is already disposed.
    pub fn dispose(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        match inner.take() {
            Some(grid) => {
                debug!(
                    "[CollisionGrid] disposed with {} items in {} cells",
                    grid.item_count(),
                    grid.occupied_cell_count()
                );
                Ok(())
            }
            None => {
                warn!("[CollisionGrid] dispose called on a disposed grid");
                Err(GridError::Disposed)
            }
        }
    }

    /// `true` once [`dispose`](Self::dispose) has succeeded
    pub fn is_disposed(&self) -> bool {
        self.inner.lock().is_none()
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> Result<bool> {
        self.locked("is_consistent", |grid| grid.is_consistent())
    }

    fn locked<R>(&self, op: &str, f: impl FnOnce(&mut SpatialGrid<T>) -> R) -> Result<R> {
        let mut inner = self.inner.lock();
        match inner.as_mut() {
            Some(grid) => Ok(f(grid)),
            None => {
                warn!("[CollisionGrid] {} called on a disposed grid", op);
                Err(GridError::Disposed)
            }
        }
    }
}

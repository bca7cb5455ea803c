//! Bidirectional cell <-> item index.
//!
//! Two maps are kept in lockstep: `buckets` (cell -> items) and `items`
//! (item -> cells). Every mutating method updates both sides before it
//! returns, so for every item `i` and cell `c`:
//!
//! ```text
//! i in buckets[c]  <=>  c in items[i]
//! ```
//!
//! Emptied containers are never left in either map; they go back to the
//! matching [`ContainerPool`] and are reused by later insertions.
//!
//! Cells passed to this module are expected to be clamped already; the
//! grid layer does that before calling in.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use crate::cell::Cell;
use crate::pool::{ContainerPool, PoolStats};

/// Two-way registry of which items sit in which cells
///
/// This is the storage layer under [`SpatialGrid`](crate::SpatialGrid); it
/// works on single cells only and leaves region handling to the grid.
#[derive(Debug)]
pub struct CellIndex<T> {
    /// cell -> items in insertion order, no duplicates, never empty
    buckets: HashMap<Cell, Vec<T>>,
    /// item -> cells in insertion order, no duplicates, never empty
    items: HashMap<T, Vec<Cell>>,
    bucket_pool: ContainerPool<Vec<T>>,
    cell_set_pool: ContainerPool<Vec<Cell>>,
}

impl<T: Eq + Hash + Clone> CellIndex<T> {
    /// Creates an empty index with empty pools
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            items: HashMap::new(),
            bucket_pool: ContainerPool::new("bucket"),
            cell_set_pool: ContainerPool::new("cell-set"),
        }
    }

    /// Registers `item` at `cell`
    ///
    /// Returns `false` if the item was already registered there.
    pub fn insert(&mut self, item: &T, cell: Cell) -> bool {
        let bucket = match self.buckets.entry(cell) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(self.bucket_pool.acquire()),
        };
        if bucket.contains(item) {
            return false;
        }
        bucket.push(item.clone());

        match self.items.get_mut(item) {
            Some(cells) => {
                if !cells.contains(&cell) {
                    cells.push(cell);
                }
            }
            None => {
                let pool = &mut self.cell_set_pool;
                self.items.entry(item.clone()).or_insert_with(|| pool.acquire()).push(cell);
            }
        }
        true
    }

    /// Evicts every item registered at `cell`
    ///
    /// Items that occupied no other cell leave the index entirely. Returns
    /// the number of evicted items.
    pub fn remove_cell(&mut self, cell: Cell) -> usize {
        let Some(mut bucket) = self.buckets.remove(&cell) else {
            return 0;
        };
        let evicted = bucket.len();
        for item in bucket.drain(..) {
            self.unlink_cell(&item, cell);
        }
        self.bucket_pool.release(bucket);
        evicted
    }

    /// Removes `item` from every cell it occupies
    ///
    /// Cost is proportional to the number of cells the item occupies.
    /// Returns `false` if the item was not tracked.
    pub fn remove_item(&mut self, item: &T) -> bool {
        let Some(mut cells) = self.items.remove(item) else {
            return false;
        };
        for cell in cells.drain(..) {
            self.unlink_item(item, cell);
        }
        self.cell_set_pool.release(cells);
        true
    }

    /// Items at `cell` in insertion order
    #[inline]
    pub fn get(&self, cell: Cell) -> &[T] {
        self.buckets.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Earliest item still registered at `cell`
    #[inline]
    pub fn first(&self, cell: Cell) -> Option<&T> {
        self.buckets.get(&cell).and_then(|bucket| bucket.first())
    }

    /// `true` if nothing is registered at `cell`
    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        !self.buckets.contains_key(&cell)
    }

    /// Cells occupied by `item` in insertion order
    pub fn cells_of(&self, item: &T) -> &[Cell] {
        self.items.get(item).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `true` if `item` occupies at least one cell
    pub fn contains_item(&self, item: &T) -> bool {
        self.items.contains_key(item)
    }

    /// Every tracked item, in no particular order
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.items.keys()
    }

    /// Every non-empty cell, in no particular order
    pub fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.buckets.keys().copied()
    }

    /// Number of tracked items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of non-empty cells
    pub fn occupied_cell_count(&self) -> usize {
        self.buckets.len()
    }

    /// Empties both maps, handing every container back to its pool
    pub fn clear(&mut self) {
        for (_, bucket) in self.buckets.drain() {
            self.bucket_pool.release(bucket);
        }
        for (_, cells) in self.items.drain() {
            self.cell_set_pool.release(cells);
        }
    }

    /// Idle containers held by both pools
    pub fn pool_stats(&self) -> PoolStats {
        PoolStats {
            buckets: self.bucket_pool.idle(),
            cell_sets: self.cell_set_pool.idle(),
        }
    }

    // --- Private helpers ---

    /// Drops `cell` from the cell-set of `item`, evicting the item once it
    /// occupies nothing
    fn unlink_cell(&mut self, item: &T, cell: Cell) {
        let Some(cells) = self.items.get_mut(item) else {
            return;
        };
        cells.retain(|c| *c != cell);
        if cells.is_empty() {
            if let Some(emptied) = self.items.remove(item) {
                self.cell_set_pool.release(emptied);
            }
        }
    }

    /// Drops `item` from the bucket at `cell`, evicting the bucket once it
    /// holds nothing
    fn unlink_item(&mut self, item: &T, cell: Cell) {
        let Some(bucket) = self.buckets.get_mut(&cell) else {
            return;
        };
        bucket.retain(|i| i != item);
        if bucket.is_empty() {
            if let Some(emptied) = self.buckets.remove(&cell) {
                self.bucket_pool.release(emptied);
            }
        }
    }

    /// Checks both directions of the index against each other
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let forward = self.buckets.iter().all(|(cell, bucket)| {
            !bucket.is_empty()
                && bucket
                    .iter()
                    .all(|item| self.items.get(item).is_some_and(|cells| cells.contains(cell)))
        });
        let backward = self.items.iter().all(|(item, cells)| {
            !cells.is_empty()
                && cells
                    .iter()
                    .all(|cell| self.buckets.get(cell).is_some_and(|bucket| bucket.contains(item)))
        });
        forward && backward
    }
}

impl<T: Eq + Hash + Clone> Default for CellIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

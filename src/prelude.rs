//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use collision_grid::prelude::*;
//! ```

pub use crate::{Cell, CellRange, CollisionGrid, GridConfig, GridError, Rect, Region, SpatialGrid, Vec2};

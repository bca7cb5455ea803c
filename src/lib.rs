//! # collision-grid - Uniform Grid Spatial Index
//!
//! A Rust library providing a uniform-grid spatial index for broad-phase
//! collision and proximity queries in real-time simulation loops.
//!
//! ## Features
//!
//! - **Bidirectional Index**: cell -> items and item -> cells kept in lockstep,
//!   so removing an item costs only the cells it occupies
//! - **Region Queries**: the same operations work on a cell, a cell range, a
//!   world position or a world-space AABB
//! - **Border Clamping**: out-of-range coordinates land on the nearest border
//!   cell instead of failing
//! - **Container Pooling**: emptied buckets are recycled, so per-frame churn
//!   settles into allocation-free operation
//! - **Thread-Safe Wrapper**: [`CollisionGrid`] guards one grid with a single
//!   mutex
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_grid::prelude::*;
//!
//! // 700x700 world split into 40x40 cells
//! let mut grid = SpatialGrid::new(700.0, 700.0, 40, 40).unwrap();
//!
//! // Register entities by their bounding boxes
//! grid.add(1_u32, Rect::new(10.0, 10.0, 30.0, 30.0));
//! grid.add(2_u32, Rect::new(25.0, 25.0, 11.0, 11.0));
//! grid.add(3_u32, Rect::new(600.0, 600.0, 11.0, 11.0));
//!
//! // Broad phase: candidates near entity 1
//! let mut candidates = Vec::new();
//! grid.query(Rect::new(10.0, 10.0, 30.0, 30.0), &mut candidates);
//! assert_eq!(candidates, vec![1, 2]);
//!
//! // Entities move every frame
//! grid.move_to(3, Rect::new(20.0, 20.0, 11.0, 11.0));
//! assert!(grid.get(Vec2::new(22.0, 22.0)).contains(&3));
//!
//! // Positions outside the world are clamped onto the border
//! grid.add(4_u32, Vec2::new(-100.0, 5000.0));
//! assert_eq!(grid.cells_of(&4), &[Cell::new(0, 39)]);
//! ```
//!
//! ## How It Works
//!
//! The world is divided into `cells_x` x `cells_y` equal cells. A box is
//! mapped to the inclusive range of cells between the cells of its top-left
//! and bottom-right corners, and the item is registered in each of them.
//! Queries over a range visit cells row by row and deduplicate items that
//! span several cells. Only occupied cells are stored, so memory follows the
//! number of registrations, not the grid size.

pub mod cell;
pub mod collision_grid;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod index;
pub mod mapper;
pub mod pool;
pub mod prelude;
pub mod region;

#[cfg(test)]
mod integration_test;

pub use cell::{Cell, CellRange};
pub use collision_grid::CollisionGrid;
pub use config::GridConfig;
pub use error::{Axis, GridError, Result};
pub use geometry::{Rect, Vec2};
pub use grid::SpatialGrid;
pub use mapper::CellMapper;
pub use pool::PoolStats;
pub use region::Region;

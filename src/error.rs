//! Error types for collision-grid

use thiserror::Error;

/// Axis of the grid, used to report which dimension was misconfigured
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Axis {
    /// Horizontal axis (columns)
    X,
    /// Vertical axis (rows)
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// collision-grid error type
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GridError {
    /// A cell count of zero (or one that does not fit cell coordinates)
    #[error("invalid cell count on {axis} axis: {count} (must be in 1..={max})", max = i32::MAX)]
    InvalidCellCount {
        /// Misconfigured axis
        axis: Axis,
        /// Rejected count
        count: u32,
    },

    /// A world dimension that is zero, negative, NaN or infinite
    #[error("invalid world extent on {axis} axis: {value} (must be positive and finite)")]
    InvalidExtent {
        /// Misconfigured axis
        axis: Axis,
        /// Rejected extent or cell size
        value: f64,
    },

    /// The shared grid was torn down with `dispose`
    #[error("collision grid has been disposed")]
    Disposed,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GridError>;

//! Error types for hueframe-core
//!
//! Provides a unified error type for all grid operations in the core crate.
//! Coordinate problems are reported with enough context to reproduce the
//! failing call; nothing is silently clamped.

use thiserror::Error;

/// hueframe-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Coordinate outside the grid extents
    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// Row count larger than the grid height
    ///
    /// The out-of-bounds failure for row-count arguments such as
    /// [`PixelGrid::cutoff_bottom`](crate::PixelGrid::cutoff_bottom);
    /// coordinate arguments report [`Error::OutOfBounds`] instead.
    #[error("row count {rows} exceeds grid height {height}")]
    RowsOutOfRange { rows: u32, height: u32 },

    /// Averaging operation over a grid with no pixels
    #[error("empty grid: no pixels to average")]
    EmptyGrid,

    /// Source rows of unequal length
    #[error("ragged rows: row {row} has {actual} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Flat buffer does not match the declared dimensions
    #[error("buffer size mismatch: expected {expected} pixels, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for hueframe-core operations
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for grid operations.

use crate::VoxelCoord;

/// Errors that can occur when writing into a [`crate::ColorGrid`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    /// A coordinate is outside the grid's dimensions.
    #[error("coordinate {coord:?} is out of bounds for a {width}x{height}x{length} grid")]
    OutOfBounds {
        /// The offending coordinate.
        coord: VoxelCoord,
        /// Grid width (x extent).
        width: usize,
        /// Grid height (y extent).
        height: usize,
        /// Grid length (z extent).
        length: usize,
    },
}

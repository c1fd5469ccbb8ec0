//! Error types for voxelization.

use vox_types::GridError;

/// Result type for voxelization operations.
pub type VoxelizeResult<T> = Result<T, VoxelizeError>;

/// Errors that can occur while turning a point cloud into a voxel grid.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum VoxelizeError {
    /// The input contained no vertices.
    #[error("mesh contains no vertices")]
    EmptyMesh,

    /// The mesh has zero spatial extent on every axis, so no scale factor
    /// exists (a single point, or all vertices coincident).
    #[error("mesh has zero spatial extent; cannot derive a scale factor")]
    DegenerateExtent,

    /// A scale bound was zero, negative, or not finite.
    #[error("scale bound must be positive and finite, got {value}")]
    InvalidBound {
        /// The offending bound value.
        value: f64,
    },

    /// A grid write failed. The aggregator sizes the grid from the same
    /// coordinates it writes, so this indicates a logic error upstream.
    #[error(transparent)]
    Grid(#[from] GridError),
}

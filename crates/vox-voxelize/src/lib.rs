//! Point-cloud voxelization for VoxForge.
//!
//! This crate implements the numerical half of the mesh → schematic
//! pipeline:
//!
//! 1. [`normalize`] - translate the cloud to a zero origin, apply a single
//!    uniform scale so the longest axis reaches its bound, and floor to
//!    integer voxel coordinates.
//! 2. [`aggregate`] - group vertices by voxel, average their colors
//!    (denormalized to `[0, 255]`), and materialize a dense [`ColorGrid`].
//!
//! [`voxelize`] composes the two. Each stage consumes its input and
//! produces a new immutable structure; nothing is shared or mutated across
//! stage boundaries.
//!
//! # Layer 0 Crate
//!
//! No I/O, no format knowledge. Usable from CLI tools, servers, and WASM.
//!
//! # Example
//!
//! ```
//! use vox_types::{ColorSample, Rgb};
//! use vox_voxelize::{voxelize, ScaleBounds};
//!
//! let white = Rgb::new(1.0, 1.0, 1.0);
//! let samples = vec![
//!     ColorSample::from_coords(0.0, 0.0, 0.0, white),
//!     ColorSample::from_coords(4.0, 0.0, 0.0, white),
//!     ColorSample::from_coords(0.0, 4.0, 0.0, white),
//! ];
//!
//! let bounds = ScaleBounds::new(10.0, 10.0).unwrap();
//! let grid = voxelize(&samples, bounds).unwrap();
//! assert_eq!(grid.dimensions(), (11, 11, 1));
//! assert_eq!(grid.occupied_count(), 3);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod aggregate;
mod error;
mod normalize;

pub use aggregate::aggregate;
pub use error::{VoxelizeError, VoxelizeResult};
pub use normalize::{normalize, ScaleBounds, VoxelSample};

use vox_types::{ColorGrid, ColorSample};

/// Run the full voxelization pipeline: normalize, then aggregate.
///
/// # Errors
///
/// Propagates [`VoxelizeError`] from either stage: empty input, degenerate
/// (zero-extent) geometry, or invalid bounds.
pub fn voxelize(samples: &[ColorSample], bounds: ScaleBounds) -> VoxelizeResult<ColorGrid> {
    tracing::info!(vertices = samples.len(), "voxelizing point cloud");
    let voxels = normalize(samples, bounds)?;
    let grid = aggregate(&voxels)?;
    tracing::info!(
        dimensions = ?grid.dimensions(),
        occupied = grid.occupied_count(),
        "voxel grid built"
    );
    Ok(grid)
}

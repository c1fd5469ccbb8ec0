//! Core value types for VoxForge.
//!
//! This crate provides the foundational types shared by the conversion
//! pipeline:
//!
//! - [`Rgb`] - A three-channel floating-point color
//! - [`ColorSample`] - A point in 3D space with a resolved color
//! - [`VoxelCoord`] - Non-negative integer voxel coordinates
//! - [`ColorGrid`] - A dense 3D volume of averaged voxel colors
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no I/O and no format knowledge. It can be
//! used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Other engines
//!
//! # Coordinate Conventions
//!
//! World coordinates are continuous `f64` values (nalgebra `Point3`). Voxel
//! coordinates are discrete `u32` values; the normalization stage guarantees
//! they are non-negative, so unsigned components encode that invariant in
//! the type.
//!
//! The grid maps axes to schematic dimensions as x → width, y → height,
//! z → length.
//!
//! # Example
//!
//! ```
//! use vox_types::{ColorGrid, Rgb, VoxelCoord};
//!
//! let mut grid = ColorGrid::new(2, 2, 2);
//! grid.set(VoxelCoord::new(1, 0, 1), Rgb::new(255.0, 0.0, 0.0)).unwrap();
//!
//! assert_eq!(grid.cell_count(), 8);
//! assert!(grid.get(VoxelCoord::new(1, 0, 1)).is_some());
//! assert!(grid.get(VoxelCoord::new(0, 0, 0)).is_none());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod color;
mod error;
mod grid;
mod voxel;

pub use color::{ColorSample, Rgb};
pub use error::GridError;
pub use grid::ColorGrid;
pub use voxel::VoxelCoord;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

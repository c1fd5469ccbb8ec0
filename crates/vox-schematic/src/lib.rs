//! Classic `.schematic` container encoding for VoxForge.
//!
//! A schematic describes a 3D block layout as three 16-bit dimensions plus
//! two parallel byte arrays - block ids and block data values - wrapped in
//! a gzipped NBT compound named `"Schematic"`. This crate provides:
//!
//! - [`Tag`] - a minimal NBT value model and big-endian writer
//! - [`Schematic`] - the container document: empty template, grid encoder,
//!   and gzip serialization
//!
//! # Example
//!
//! ```no_run
//! use vox_palette::{BlockPalette, PaletteEntry};
//! use vox_types::ColorGrid;
//! use vox_schematic::Schematic;
//!
//! let palette = BlockPalette::from_entries(vec![
//!     PaletteEntry::new(35, 0, [255, 255, 255]),
//! ])
//! .unwrap();
//! let grid = ColorGrid::new(10, 10, 10);
//!
//! let schematic = Schematic::from_grid(&grid, &palette).unwrap();
//! schematic.save("model.schematic").unwrap();
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod document;
mod error;
mod nbt;

pub use document::Schematic;
pub use error::{SchematicError, SchematicResult};
pub use nbt::Tag;

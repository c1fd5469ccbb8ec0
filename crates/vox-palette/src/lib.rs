//! Block palette table and nearest-color matching for VoxForge.
//!
//! A palette is an ordered table mapping representative colors to Minecraft
//! block ids and data values. Matching a voxel color against it is
//! nearest-neighbor vector quantization over a small fixed codebook: a
//! linear scan per query is the reference algorithm at this scale (tens of
//! entries), and any accelerated implementation must agree with it on every
//! output.
//!
//! # Layer 0 Crate
//!
//! Only the palette config file touches the filesystem; matching itself is
//! pure computation.
//!
//! # Example
//!
//! ```
//! use vox_palette::{Block, BlockPalette, PaletteEntry};
//! use vox_types::Rgb;
//!
//! let palette = BlockPalette::from_entries(vec![
//!     PaletteEntry::new(35, 0, [255, 255, 255]),
//!     PaletteEntry::new(35, 14, [200, 30, 30]),
//! ])
//! .unwrap();
//!
//! // Nearest entry by squared RGB distance.
//! assert_eq!(palette.nearest(Rgb::new(210.0, 40.0, 25.0)), Block::new(35, 14));
//!
//! // The all-zero sentinel is air, no lookup.
//! assert_eq!(palette.nearest(Rgb::BLACK), Block::AIR);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod palette;

pub use error::{PaletteError, PaletteResult};
pub use palette::{Block, BlockPalette, PaletteEntry};

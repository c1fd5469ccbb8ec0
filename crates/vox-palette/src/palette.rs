//! Block palette table and nearest-color matching.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use vox_types::{ColorGrid, Rgb};

use crate::error::{PaletteError, PaletteResult};

/// A block type reference: the two bytes the schematic stores per voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    /// Block type id.
    pub id: u8,
    /// Block sub-variant ("data") value.
    pub data: u8,
}

impl Block {
    /// Air: the block unoccupied voxels map to, without a palette lookup.
    pub const AIR: Self = Self::new(0, 0);

    /// Create a block reference.
    #[inline]
    #[must_use]
    pub const fn new(id: u8, data: u8) -> Self {
        Self { id, data }
    }
}

/// One row of the palette table.
///
/// The serialized field names (`BLOCK_ID`, `DATA`, `COLOR`) match the JSON
/// config format the table is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Block type id (0-255).
    #[serde(rename = "BLOCK_ID")]
    pub block_id: u8,
    /// Block sub-variant value (0-255).
    #[serde(rename = "DATA")]
    pub data: u8,
    /// Representative color, channels in [0, 255].
    #[serde(rename = "COLOR")]
    pub color: [u8; 3],
}

impl PaletteEntry {
    /// Create a palette entry.
    #[must_use]
    pub const fn new(block_id: u8, data: u8, color: [u8; 3]) -> Self {
        Self {
            block_id,
            data,
            color,
        }
    }

    /// Squared Euclidean distance between this entry's color and a query.
    #[must_use]
    pub fn distance_squared(&self, query: Rgb) -> f64 {
        let dr = query.r - f64::from(self.color[0]);
        let dg = query.g - f64::from(self.color[1]);
        let db = query.b - f64::from(self.color[2]);
        db.mul_add(db, dr.mul_add(dr, dg * dg))
    }

    /// The block this entry maps to.
    #[must_use]
    pub const fn block(&self) -> Block {
        Block::new(self.block_id, self.data)
    }
}

/// An ordered, non-empty block palette.
///
/// Entry order is significant: when two entries are equidistant from a
/// query color, the earlier entry wins. The table is loaded once per run
/// and is read-only thereafter.
///
/// # Example
///
/// ```
/// use vox_palette::{Block, BlockPalette, PaletteEntry};
/// use vox_types::Rgb;
///
/// let palette = BlockPalette::from_entries(vec![
///     PaletteEntry::new(35, 0, [255, 255, 255]),
///     PaletteEntry::new(49, 0, [20, 18, 30]),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.nearest(Rgb::new(250.0, 250.0, 250.0)), Block::new(35, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPalette {
    entries: Vec<PaletteEntry>,
}

impl BlockPalette {
    /// Build a palette from an ordered entry list.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `entries` is empty.
    pub fn from_entries(entries: Vec<PaletteEntry>) -> PaletteResult<Self> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { entries })
    }

    /// Load a palette from a JSON config file.
    ///
    /// The file holds an ordered array of
    /// `{ "BLOCK_ID": n, "DATA": n, "COLOR": [r, g, b] }` objects.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::FileNotFound`] if the path does not exist,
    /// [`PaletteError::Json`] for malformed content or missing fields, and
    /// [`PaletteError::EmptyPalette`] for an empty array.
    pub fn load<P: AsRef<Path>>(path: P) -> PaletteResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PaletteError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PaletteError::Io(e)
            }
        })?;
        let entries: Vec<PaletteEntry> = serde_json::from_reader(BufReader::new(file))?;
        tracing::info!(entries = entries.len(), path = %path.display(), "palette loaded");
        Self::from_entries(entries)
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; an empty palette cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Find the block whose palette color is nearest to a query color.
    ///
    /// A query of exactly `(0, 0, 0)` is the empty-voxel sentinel and maps
    /// to [`Block::AIR`] without consulting the table. (A genuinely black
    /// occupied voxel is therefore indistinguishable from an empty one -
    /// a quirk of the schematic's all-zero sentinel, preserved here for
    /// compatibility.) Otherwise this is a linear scan minimizing squared
    /// Euclidean RGB distance with a strict `<` comparison, so the earliest
    /// entry wins ties; an exact match short-circuits the scan.
    #[must_use]
    pub fn nearest(&self, color: Rgb) -> Block {
        if color.is_black() {
            return Block::AIR;
        }

        let mut best = f64::INFINITY;
        let mut block = Block::AIR;
        for entry in &self.entries {
            let distance = entry.distance_squared(color);
            if distance < best {
                best = distance;
                block = entry.block();
                if distance == 0.0 {
                    break;
                }
            }
        }
        block
    }

    /// Match one grid cell: unoccupied cells are air, occupied cells go
    /// through [`BlockPalette::nearest`].
    #[must_use]
    pub fn match_cell(&self, cell: Option<Rgb>) -> Block {
        cell.map_or(Block::AIR, |color| self.nearest(color))
    }

    /// Match every cell of a grid, producing the two parallel byte arrays
    /// the schematic stores.
    ///
    /// The grid's flat cell order is already the schematic's y → z → x
    /// traversal, so the output is a straight scan. Cells are independent
    /// and the table is immutable, so the scan runs in parallel; the
    /// index-ordered collect makes the result bit-identical to a
    /// sequential pass.
    #[must_use]
    pub fn match_grid(&self, grid: &ColorGrid) -> (Vec<u8>, Vec<u8>) {
        let blocks: Vec<Block> = grid
            .cells()
            .par_iter()
            .map(|cell| self.match_cell(*cell))
            .collect();

        let mut ids = Vec::with_capacity(blocks.len());
        let mut data = Vec::with_capacity(blocks.len());
        for block in blocks {
            ids.push(block.id);
            data.push(block.data);
        }
        (ids, data)
    }
}

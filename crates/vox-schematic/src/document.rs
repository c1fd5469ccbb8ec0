//! The schematic container document.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use vox_palette::BlockPalette;
use vox_types::ColorGrid;

use crate::error::{SchematicError, SchematicResult};
use crate::nbt::Tag;

/// A classic MCEdit `.schematic` document.
///
/// The document is a fixed container: three 16-bit dimensions, two parallel
/// byte arrays (`Blocks` holds block ids, `Data` holds sub-variant values),
/// and template metadata (`Materials`, `Entities`, `TileEntities`) that the
/// encoder populates once and never touches again. Serialized form is a
/// gzipped NBT compound named `"Schematic"`.
///
/// # Block Array Order
///
/// `Blocks[i]` and `Data[i]` describe the voxel at
/// `(x, y, z) = (i % width, i / (width * length), (i / width) % length)`:
/// y is the outer loop, z the middle, x the inner. This order is what every
/// schematic consumer assumes; reordering corrupts the output with no error
/// signal anywhere, so it is an invariant of the encoder, not a choice.
///
/// # Example
///
/// ```
/// use vox_palette::{BlockPalette, PaletteEntry};
/// use vox_types::{ColorGrid, Rgb, VoxelCoord};
/// use vox_schematic::Schematic;
///
/// let palette = BlockPalette::from_entries(vec![
///     PaletteEntry::new(35, 0, [255, 255, 255]),
/// ])
/// .unwrap();
///
/// let mut grid = ColorGrid::new(2, 1, 1);
/// grid.set(VoxelCoord::new(1, 0, 0), Rgb::new(250.0, 250.0, 250.0)).unwrap();
///
/// let schematic = Schematic::from_grid(&grid, &palette).unwrap();
/// assert_eq!(schematic.dimensions(), (2, 1, 1));
/// assert_eq!(schematic.blocks(), &[0, 35]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schematic {
    width: i16,
    height: i16,
    length: i16,
    blocks: Vec<u8>,
    data: Vec<u8>,
    /// Template fields the encoder passes through unmodified.
    extra: Vec<(String, Tag)>,
}

impl Schematic {
    /// Create an empty, schema-valid container.
    ///
    /// This is the template every conversion starts from: zero dimensions,
    /// empty block arrays, and the fixed metadata fields (`Materials =
    /// "Alpha"`, empty entity lists) a classic schematic carries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            length: 0,
            blocks: Vec::new(),
            data: Vec::new(),
            extra: vec![
                ("Materials".to_owned(), Tag::String("Alpha".to_owned())),
                ("Entities".to_owned(), Tag::List(Vec::new())),
                ("TileEntities".to_owned(), Tag::List(Vec::new())),
            ],
        }
    }

    /// Encode a voxel grid into a populated schematic.
    ///
    /// Every grid cell is matched against the palette (unoccupied cells
    /// become air) and the resulting ids land in the block arrays in the
    /// fixed y → z → x order. Grid extents map to dimensions as
    /// width ← x, height ← y, length ← z.
    ///
    /// # Errors
    ///
    /// Returns [`SchematicError::DimensionOverflow`] if any extent exceeds
    /// `i16::MAX`; nothing is encoded in that case.
    pub fn from_grid(grid: &ColorGrid, palette: &BlockPalette) -> SchematicResult<Self> {
        let (width, height, length) = grid.dimensions();
        let mut schematic = Self::empty();
        schematic.width = dimension_i16("width", width)?;
        schematic.height = dimension_i16("height", height)?;
        schematic.length = dimension_i16("length", length)?;

        let (blocks, data) = palette.match_grid(grid);
        debug_assert_eq!(blocks.len(), grid.cell_count());
        debug_assert_eq!(data.len(), grid.cell_count());
        schematic.blocks = blocks;
        schematic.data = data;

        tracing::info!(
            width, height, length,
            cells = schematic.blocks.len(),
            "schematic encoded"
        );
        Ok(schematic)
    }

    /// Dimensions as `(width, height, length)`.
    #[must_use]
    pub const fn dimensions(&self) -> (i16, i16, i16) {
        (self.width, self.height, self.length)
    }

    /// The block id array, in y/z/x order.
    #[must_use]
    pub fn blocks(&self) -> &[u8] {
        &self.blocks
    }

    /// The block data (sub-variant) array, parallel to [`Self::blocks`].
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Build the NBT tree for this document.
    ///
    /// Populated fields first, then the pass-through template fields, in a
    /// stable order so output is byte-for-byte reproducible.
    #[must_use]
    pub fn to_nbt(&self) -> Tag {
        let mut fields = vec![
            ("Width".to_owned(), Tag::Short(self.width)),
            ("Height".to_owned(), Tag::Short(self.height)),
            ("Length".to_owned(), Tag::Short(self.length)),
            ("Blocks".to_owned(), Tag::ByteArray(self.blocks.clone())),
            ("Data".to_owned(), Tag::ByteArray(self.data.clone())),
        ];
        fields.extend(self.extra.iter().cloned());
        Tag::Compound(fields)
    }

    /// Serialize the document to gzipped NBT bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SchematicError::Io`] on compression failure, or
    /// [`SchematicError::PayloadTooLarge`] for arrays beyond the NBT
    /// length prefix.
    pub fn to_bytes(&self) -> SchematicResult<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        self.to_nbt().write_named("Schematic", &mut encoder)?;
        Ok(encoder.finish()?)
    }

    /// Serialize and write the document to a file.
    ///
    /// The document is fully serialized in memory first, so a failure
    /// during encoding never leaves a partial file behind.
    ///
    /// # Errors
    ///
    /// Returns [`SchematicError::Io`] if the file cannot be written, plus
    /// any serialization error from [`Self::to_bytes`].
    pub fn save<P: AsRef<Path>>(&self, path: P) -> SchematicResult<()> {
        let bytes = self.to_bytes()?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(&bytes)?;
        tracing::info!(path = %path.as_ref().display(), bytes = bytes.len(), "schematic written");
        Ok(())
    }
}

impl Default for Schematic {
    fn default() -> Self {
        Self::empty()
    }
}

fn dimension_i16(axis: &'static str, extent: usize) -> SchematicResult<i16> {
    i16::try_from(extent).map_err(|_| SchematicError::DimensionOverflow { axis, extent })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use vox_palette::PaletteEntry;
    use vox_types::{Rgb, VoxelCoord};

    fn white_palette() -> BlockPalette {
        BlockPalette::from_entries(vec![PaletteEntry::new(35, 0, [255, 255, 255])]).unwrap()
    }

    #[test]
    fn empty_template_has_pass_through_fields() {
        let nbt = Schematic::empty().to_nbt();
        let Tag::Compound(fields) = nbt else {
            panic!("schematic root must be a compound");
        };
        let names: Vec<&str> = fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            ["Width", "Height", "Length", "Blocks", "Data", "Materials", "Entities", "TileEntities"]
        );
    }

    #[test]
    fn from_grid_length_invariant() {
        let grid = ColorGrid::new(4, 3, 2);
        let schematic = Schematic::from_grid(&grid, &white_palette()).unwrap();
        assert_eq!(schematic.blocks().len(), 24);
        assert_eq!(schematic.data().len(), 24);
        assert_eq!(schematic.dimensions(), (4, 3, 2));
    }

    #[test]
    fn from_grid_iteration_order_is_y_z_x() {
        // Occupy (x=1, y=0, z=0) and (x=0, y=1, z=1) in a 2x2x2 grid.
        let mut grid = ColorGrid::new(2, 2, 2);
        grid.set(VoxelCoord::new(1, 0, 0), Rgb::new(255.0, 255.0, 255.0))
            .unwrap();
        grid.set(VoxelCoord::new(0, 1, 1), Rgb::new(255.0, 255.0, 255.0))
            .unwrap();

        let schematic = Schematic::from_grid(&grid, &white_palette()).unwrap();
        // index = (y * length + z) * width + x
        let mut expected = vec![0u8; 8];
        expected[1] = 35; // (1,0,0)
        expected[6] = 35; // (0,1,1)
        assert_eq!(schematic.blocks(), expected.as_slice());
    }

    #[test]
    fn unoccupied_cells_are_air_regardless_of_palette() {
        // A palette whose only entry sits at black must still not claim
        // unoccupied cells.
        let palette =
            BlockPalette::from_entries(vec![PaletteEntry::new(49, 0, [0, 0, 0])]).unwrap();
        let grid = ColorGrid::new(2, 1, 1);
        let schematic = Schematic::from_grid(&grid, &palette).unwrap();
        assert_eq!(schematic.blocks(), &[0, 0]);
        assert_eq!(schematic.data(), &[0, 0]);
    }

    #[test]
    fn dimension_overflow_rejected() {
        let grid = ColorGrid::new(i16::MAX as usize + 1, 1, 1);
        let result = Schematic::from_grid(&grid, &white_palette());
        assert!(matches!(
            result,
            Err(SchematicError::DimensionOverflow { axis: "width", .. })
        ));
    }

    #[test]
    fn serialized_bytes_are_gzipped_nbt() {
        let mut grid = ColorGrid::new(1, 1, 2);
        grid.set(VoxelCoord::new(0, 0, 1), Rgb::new(255.0, 255.0, 255.0))
            .unwrap();
        let schematic = Schematic::from_grid(&grid, &white_palette()).unwrap();

        let bytes = schematic.to_bytes().unwrap();
        // gzip magic
        assert_eq!(&bytes[..2], &[0x1F, 0x8B]);

        let mut decoded = Vec::new();
        GzDecoder::new(bytes.as_slice())
            .read_to_end(&mut decoded)
            .unwrap();

        // Root: compound tag named "Schematic".
        assert_eq!(decoded[0], 10);
        assert_eq!(&decoded[1..3], &[0, 9]);
        assert_eq!(&decoded[3..12], b"Schematic");

        // All seven schematic fields present.
        for field in ["Width", "Height", "Length", "Blocks", "Data", "Materials", "Entities"] {
            assert!(
                decoded.windows(field.len()).any(|w| w == field.as_bytes()),
                "missing field {field}"
            );
        }

        // First field after the root header: Short "Width" = 1.
        assert_eq!(decoded[12], 2);
        assert_eq!(&decoded[13..15], &[0, 5]);
        assert_eq!(&decoded[15..20], b"Width");
        assert_eq!(&decoded[20..22], &[0, 1]);
    }

    #[test]
    fn save_writes_complete_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.schematic");

        let mut grid = ColorGrid::new(1, 2, 1);
        grid.set(VoxelCoord::new(0, 1, 0), Rgb::new(200.0, 200.0, 200.0))
            .unwrap();
        let schematic = Schematic::from_grid(&grid, &white_palette()).unwrap();
        schematic.save(&path).unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, schematic.to_bytes().unwrap());
    }
}

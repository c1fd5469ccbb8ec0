//! Dense voxel color grid.

use crate::error::GridError;
use crate::{Rgb, VoxelCoord};

/// A dense 3D volume of averaged voxel colors.
///
/// Each cell holds either `Some(color)` with denormalized `[0, 255]`
/// channels, or `None` for a voxel no vertex ever landed in. The grid is
/// allocated once with its final dimensions (derived from the maximum
/// observed coordinate on each axis, plus one) and never resized.
///
/// # Storage Layout
///
/// Cells are stored flat in y-major order: `index = (y * length + z) * width
/// + x`. This is exactly the iteration order the schematic format expects
/// (y outer, z middle, x inner), so encoding the grid is a linear scan over
/// [`ColorGrid::cells`]. The layout is load-bearing; see `vox-schematic`.
///
/// # Example
///
/// ```
/// use vox_types::{ColorGrid, Rgb, VoxelCoord};
///
/// let mut grid = ColorGrid::new(4, 3, 2);
/// assert_eq!(grid.dimensions(), (4, 3, 2));
/// assert_eq!(grid.cell_count(), 24);
///
/// let coord = VoxelCoord::new(3, 2, 1);
/// grid.set(coord, Rgb::new(200.0, 100.0, 50.0)).unwrap();
/// assert_eq!(grid.get(coord), Some(Rgb::new(200.0, 100.0, 50.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGrid {
    width: usize,
    height: usize,
    length: usize,
    cells: Vec<Option<Rgb>>,
}

impl ColorGrid {
    /// Create a grid of the given dimensions with every cell unoccupied.
    ///
    /// Dimensions follow the schematic convention: `width` is the x extent,
    /// `height` the y extent, `length` the z extent.
    #[must_use]
    pub fn new(width: usize, height: usize, length: usize) -> Self {
        Self {
            width,
            height,
            length,
            cells: vec![None; width * height * length],
        }
    }

    /// Returns the grid dimensions as `(width, height, length)`.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.length)
    }

    /// Width (x extent) of the grid.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height (y extent) of the grid.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Length (z extent) of the grid.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Total number of cells (`width * height * length`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Flat index of a coordinate, or `None` if it is out of bounds.
    fn index_of(&self, coord: VoxelCoord) -> Option<usize> {
        let (x, y, z) = (
            coord.x as usize,
            coord.y as usize,
            coord.z as usize,
        );
        if x >= self.width || y >= self.height || z >= self.length {
            return None;
        }
        Some((y * self.length + z) * self.width + x)
    }

    /// Get the color at a coordinate.
    ///
    /// Returns `None` for unoccupied cells and for out-of-bounds
    /// coordinates.
    #[must_use]
    pub fn get(&self, coord: VoxelCoord) -> Option<Rgb> {
        self.index_of(coord).and_then(|i| self.cells[i])
    }

    /// Write a color into a cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the coordinate does not fit
    /// the grid's dimensions.
    pub fn set(&mut self, coord: VoxelCoord, color: Rgb) -> Result<(), GridError> {
        let index = self.index_of(coord).ok_or(GridError::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
            length: self.length,
        })?;
        self.cells[index] = Some(color);
        Ok(())
    }

    /// The flat cell slice in y/z/x-major order (x varies fastest).
    ///
    /// This is the schematic's byte-array order; consumers that need the
    /// fixed y → z → x traversal can scan this slice directly.
    #[must_use]
    pub fn cells(&self) -> &[Option<Rgb>] {
        &self.cells
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_unoccupied() {
        let grid = ColorGrid::new(3, 3, 3);
        assert_eq!(grid.cell_count(), 27);
        assert_eq!(grid.occupied_count(), 0);
        assert!(grid.cells().iter().all(Option::is_none));
    }

    #[test]
    fn set_then_get() {
        let mut grid = ColorGrid::new(2, 2, 2);
        let coord = VoxelCoord::new(1, 1, 0);
        grid.set(coord, Rgb::new(10.0, 20.0, 30.0)).unwrap();
        assert_eq!(grid.get(coord), Some(Rgb::new(10.0, 20.0, 30.0)));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn set_out_of_bounds_errors() {
        let mut grid = ColorGrid::new(2, 2, 2);
        let result = grid.set(VoxelCoord::new(2, 0, 0), Rgb::BLACK);
        assert!(matches!(result, Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let grid = ColorGrid::new(2, 2, 2);
        assert_eq!(grid.get(VoxelCoord::new(0, 5, 0)), None);
    }

    #[test]
    fn flat_layout_is_y_z_x_major() {
        // A 2x2x2 grid: index (y*length + z)*width + x.
        let mut grid = ColorGrid::new(2, 2, 2);
        grid.set(VoxelCoord::new(1, 0, 0), Rgb::new(1.0, 0.0, 0.0))
            .unwrap();
        grid.set(VoxelCoord::new(0, 1, 0), Rgb::new(2.0, 0.0, 0.0))
            .unwrap();
        grid.set(VoxelCoord::new(0, 0, 1), Rgb::new(3.0, 0.0, 0.0))
            .unwrap();

        let cells = grid.cells();
        assert_eq!(cells[1], Some(Rgb::new(1.0, 0.0, 0.0))); // x=1
        assert_eq!(cells[2], Some(Rgb::new(3.0, 0.0, 0.0))); // z=1
        assert_eq!(cells[4], Some(Rgb::new(2.0, 0.0, 0.0))); // y=1
    }

    #[test]
    fn dimensions_accessors_agree() {
        let grid = ColorGrid::new(4, 5, 6);
        assert_eq!(grid.dimensions(), (4, 5, 6));
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.length(), 6);
        assert_eq!(grid.cell_count(), 120);
    }
}

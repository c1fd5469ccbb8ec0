//! Per-voxel color aggregation into a dense grid.

use hashbrown::HashMap;
use vox_types::{ColorGrid, Rgb, VoxelCoord};

use crate::error::{VoxelizeError, VoxelizeResult};
use crate::normalize::VoxelSample;

/// Running color sum for one voxel.
#[derive(Debug, Clone, Copy, Default)]
struct ColorAccumulator {
    sum: [f64; 3],
    count: u32,
}

impl ColorAccumulator {
    fn add(&mut self, color: Rgb) {
        self.sum[0] += color.r;
        self.sum[1] += color.g;
        self.sum[2] += color.b;
        self.count += 1;
    }

    fn mean(self) -> Rgb {
        let n = f64::from(self.count);
        Rgb::new(self.sum[0] / n, self.sum[1] / n, self.sum[2] / n)
    }
}

/// Aggregate voxel samples into a dense color grid.
///
/// Samples landing on the same coordinate are averaged: colors are
/// denormalized to `[0, 255]` before accumulation, then the arithmetic mean
/// per occupied voxel is written into the grid. Collisions are expected and
/// common (faces share corner vertices); nothing upstream needs to
/// deduplicate.
///
/// The grid is allocated once, sized `max coordinate + 1` per axis over all
/// samples (a first pass computes the bounds, a second populates the cells).
/// Cells no sample landed in stay unoccupied.
///
/// Aggregation is order-independent: permuting `samples` yields a grid with
/// identical occupancy, and means that differ at most by floating-point
/// summation order, which cannot change which palette entry wins for
/// realistic palettes.
///
/// # Errors
///
/// Returns [`VoxelizeError::EmptyMesh`] if `samples` is empty.
///
/// # Example
///
/// ```
/// use vox_types::{Rgb, VoxelCoord};
/// use vox_voxelize::{aggregate, VoxelSample};
///
/// let samples = vec![
///     VoxelSample { coord: VoxelCoord::new(0, 0, 0), color: Rgb::new(1.0, 0.0, 0.0) },
///     VoxelSample { coord: VoxelCoord::new(0, 0, 0), color: Rgb::new(0.0, 1.0, 0.0) },
/// ];
///
/// let grid = aggregate(&samples).unwrap();
/// let mean = grid.get(VoxelCoord::origin()).unwrap();
/// assert_eq!(mean, Rgb::new(127.5, 127.5, 0.0));
/// ```
pub fn aggregate(samples: &[VoxelSample]) -> VoxelizeResult<ColorGrid> {
    if samples.is_empty() {
        return Err(VoxelizeError::EmptyMesh);
    }

    // Pass 1: group colors by coordinate and track the grid bounds.
    let mut groups: HashMap<VoxelCoord, ColorAccumulator> =
        HashMap::with_capacity(samples.len() / 2);
    let mut max = VoxelCoord::origin();
    for sample in samples {
        groups
            .entry(sample.coord)
            .or_default()
            .add(sample.color.scaled(255.0));
        max = max.component_max(sample.coord);
    }

    // Pass 2: materialize the dense grid. Dimensions are final before any
    // cell is written, so no write can land out of bounds.
    let mut grid = ColorGrid::new(
        max.x as usize + 1,
        max.y as usize + 1,
        max.z as usize + 1,
    );
    tracing::debug!(
        occupied = groups.len(),
        dimensions = ?grid.dimensions(),
        "aggregating voxel colors"
    );
    for (coord, accumulator) in groups {
        grid.set(coord, accumulator.mean())?;
    }

    Ok(grid)
}

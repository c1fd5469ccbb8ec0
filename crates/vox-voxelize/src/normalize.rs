//! Coordinate normalization: translate, uniformly scale, discretize.

use nalgebra::{Point3, Vector3};
use vox_types::{ColorSample, Rgb, VoxelCoord};

use crate::error::{VoxelizeError, VoxelizeResult};

/// Target extents for the normalized model.
///
/// `width_max` governs the scale when the model's longest axis is x or z;
/// `height_max` governs it when the longest axis is y. A single uniform
/// scalar is applied to all three axes, so the model's aspect ratio is
/// preserved and only the long pole touches its bound.
///
/// # Example
///
/// ```
/// use vox_voxelize::ScaleBounds;
///
/// let bounds = ScaleBounds::new(100.0, 100.0).unwrap();
/// assert_eq!(bounds.width_max(), 100.0);
///
/// assert!(ScaleBounds::new(0.0, 100.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    height_max: f64,
    width_max: f64,
}

impl ScaleBounds {
    /// Create scale bounds.
    ///
    /// # Errors
    ///
    /// Returns [`VoxelizeError::InvalidBound`] if either bound is zero,
    /// negative, or not finite.
    pub fn new(height_max: f64, width_max: f64) -> VoxelizeResult<Self> {
        for value in [height_max, width_max] {
            if !value.is_finite() || value <= 0.0 {
                return Err(VoxelizeError::InvalidBound { value });
            }
        }
        Ok(Self {
            height_max,
            width_max,
        })
    }

    /// The bound governing the y axis.
    #[must_use]
    pub const fn height_max(&self) -> f64 {
        self.height_max
    }

    /// The bound governing the x and z axes.
    #[must_use]
    pub const fn width_max(&self) -> f64 {
        self.width_max
    }
}

/// A vertex snapped to its voxel, color still normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelSample {
    /// Integer voxel coordinate.
    pub coord: VoxelCoord,
    /// Normalized color carried through unchanged from the input sample.
    pub color: Rgb,
}

/// Normalize a point cloud into non-negative integer voxel coordinates.
///
/// The cloud is translated so the per-axis minima sit at zero, scaled by a
/// single uniform factor so the longest axis reaches its governing bound
/// (`width_max` for x/z, `height_max` for y), and floored to integers.
/// Colors pass through untouched.
///
/// When the translated maxima tie across axes, x and z are preferred over y
/// (the width bound governs), and x over z. The choice is stable; it only
/// decides which bound is consulted, and on a tie both axes end up at the
/// same extent either way.
///
/// # Errors
///
/// - [`VoxelizeError::EmptyMesh`] if `samples` is empty.
/// - [`VoxelizeError::DegenerateExtent`] if the cloud has zero extent on
///   every axis (single point), which would otherwise divide by zero.
///
/// # Example
///
/// ```
/// use vox_types::{ColorSample, Rgb};
/// use vox_voxelize::{normalize, ScaleBounds};
///
/// let white = Rgb::new(1.0, 1.0, 1.0);
/// let samples = vec![
///     ColorSample::from_coords(2.0, 0.0, 0.0, white),
///     ColorSample::from_coords(6.0, 0.0, 0.0, white),
/// ];
/// let bounds = ScaleBounds::new(10.0, 10.0).unwrap();
///
/// let voxels = normalize(&samples, bounds).unwrap();
/// assert_eq!(voxels[0].coord.as_tuple(), (0, 0, 0));
/// assert_eq!(voxels[1].coord.as_tuple(), (10, 0, 0));
/// ```
pub fn normalize(samples: &[ColorSample], bounds: ScaleBounds) -> VoxelizeResult<Vec<VoxelSample>> {
    if samples.is_empty() {
        return Err(VoxelizeError::EmptyMesh);
    }

    let min = per_axis_min(samples);
    let extent = per_axis_max_translated(samples, min);
    let max_val = extent.x.max(extent.y).max(extent.z);

    if max_val <= 0.0 {
        return Err(VoxelizeError::DegenerateExtent);
    }

    // x/z preferred over y on ties: the width bound governs.
    let governing_bound = if extent.x >= max_val || extent.z >= max_val {
        bounds.width_max()
    } else {
        bounds.height_max()
    };
    let scale = governing_bound / max_val;

    tracing::debug!(max_val, scale, "normalizing point cloud");

    Ok(samples
        .iter()
        .map(|sample| {
            let translated = sample.position - min.coords;
            VoxelSample {
                coord: floor_to_voxel(translated * scale),
                color: sample.color,
            }
        })
        .collect())
}

fn per_axis_min(samples: &[ColorSample]) -> Point3<f64> {
    let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    for sample in samples {
        min.x = min.x.min(sample.position.x);
        min.y = min.y.min(sample.position.y);
        min.z = min.z.min(sample.position.z);
    }
    min
}

fn per_axis_max_translated(samples: &[ColorSample], min: Point3<f64>) -> Vector3<f64> {
    let mut max: Vector3<f64> = Vector3::zeros();
    for sample in samples {
        let t = sample.position - min;
        max.x = max.x.max(t.x);
        max.y = max.y.max(t.y);
        max.z = max.z.max(t.z);
    }
    max
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Truncation and sign loss are safe: components are >= 0 after translation
// and bounded by the governing scale bound.
fn floor_to_voxel(scaled: Point3<f64>) -> VoxelCoord {
    VoxelCoord::new(
        scaled.x.floor() as u32,
        scaled.y.floor() as u32,
        scaled.z.floor() as u32,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn white() -> Rgb {
        Rgb::new(1.0, 1.0, 1.0)
    }

    fn bounds(h: f64, w: f64) -> ScaleBounds {
        ScaleBounds::new(h, w).unwrap()
    }

    #[test]
    fn empty_input_errors() {
        let result = normalize(&[], bounds(10.0, 10.0));
        assert!(matches!(result, Err(VoxelizeError::EmptyMesh)));
    }

    #[test]
    fn single_point_is_degenerate() {
        let samples = vec![ColorSample::from_coords(3.0, 3.0, 3.0, white())];
        let result = normalize(&samples, bounds(10.0, 10.0));
        assert!(matches!(result, Err(VoxelizeError::DegenerateExtent)));
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let samples = vec![
            ColorSample::from_coords(1.0, 2.0, 3.0, white()),
            ColorSample::from_coords(1.0, 2.0, 3.0, white()),
        ];
        let result = normalize(&samples, bounds(10.0, 10.0));
        assert!(matches!(result, Err(VoxelizeError::DegenerateExtent)));
    }

    #[test]
    fn invalid_bounds_rejected() {
        assert!(ScaleBounds::new(-1.0, 10.0).is_err());
        assert!(ScaleBounds::new(10.0, 0.0).is_err());
        assert!(ScaleBounds::new(f64::NAN, 10.0).is_err());
        assert!(ScaleBounds::new(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn translates_to_zero_origin() {
        let samples = vec![
            ColorSample::from_coords(-5.0, 10.0, 100.0, white()),
            ColorSample::from_coords(-3.0, 12.0, 102.0, white()),
        ];
        let voxels = normalize(&samples, bounds(10.0, 10.0)).unwrap();
        assert_eq!(voxels[0].coord, VoxelCoord::origin());
    }

    #[test]
    fn long_x_axis_uses_width_bound() {
        let samples = vec![
            ColorSample::from_coords(0.0, 0.0, 0.0, white()),
            ColorSample::from_coords(4.0, 1.0, 1.0, white()),
        ];
        let voxels = normalize(&samples, bounds(100.0, 10.0)).unwrap();
        // scale = 10 / 4 = 2.5
        assert_eq!(voxels[1].coord.as_tuple(), (10, 2, 2));
    }

    #[test]
    fn long_y_axis_uses_height_bound() {
        let samples = vec![
            ColorSample::from_coords(0.0, 0.0, 0.0, white()),
            ColorSample::from_coords(1.0, 8.0, 1.0, white()),
        ];
        let voxels = normalize(&samples, bounds(16.0, 100.0)).unwrap();
        // scale = 16 / 8 = 2
        assert_eq!(voxels[1].coord.as_tuple(), (2, 16, 2));
    }

    #[test]
    fn zero_x_extent_picks_y_axis() {
        // All vertices share x; the governing axis must be y, and the x
        // extent must never be used as a divisor.
        let samples = vec![
            ColorSample::from_coords(7.0, 0.0, 0.0, white()),
            ColorSample::from_coords(7.0, 5.0, 1.0, white()),
        ];
        let voxels = normalize(&samples, bounds(10.0, 99.0)).unwrap();
        assert_eq!(voxels[1].coord.as_tuple(), (0, 10, 2));
    }

    #[test]
    fn tie_between_x_and_y_prefers_width_bound() {
        let samples = vec![
            ColorSample::from_coords(0.0, 0.0, 0.0, white()),
            ColorSample::from_coords(5.0, 5.0, 0.0, white()),
        ];
        let voxels = normalize(&samples, bounds(100.0, 10.0)).unwrap();
        // Width bound (10) governs despite height_max being larger.
        assert_eq!(voxels[1].coord.as_tuple(), (10, 10, 0));
    }

    #[test]
    fn all_coordinates_non_negative() {
        let samples = vec![
            ColorSample::from_coords(-10.0, -20.0, -30.0, white()),
            ColorSample::from_coords(-5.0, -15.0, -29.0, white()),
            ColorSample::from_coords(-7.5, -18.0, -29.5, white()),
        ];
        let voxels = normalize(&samples, bounds(10.0, 10.0)).unwrap();
        // u32 coordinates cannot be negative; just check the call succeeds
        // and the minimum is at the origin on each axis.
        let min_x = voxels.iter().map(|v| v.coord.x).min().unwrap();
        let min_y = voxels.iter().map(|v| v.coord.y).min().unwrap();
        let min_z = voxels.iter().map(|v| v.coord.z).min().unwrap();
        assert_eq!((min_x, min_y, min_z), (0, 0, 0));
    }

    #[test]
    fn governing_axis_reaches_its_bound() {
        let samples = vec![
            ColorSample::from_coords(0.0, 0.0, 0.0, white()),
            ColorSample::from_coords(3.0, 1.0, 2.0, white()),
        ];
        let voxels = normalize(&samples, bounds(50.0, 30.0)).unwrap();
        let max_x = voxels.iter().map(|v| v.coord.x).max().unwrap();
        // Flooring can only round down, never past the bound.
        assert_eq!(max_x, 30);
    }

    #[test]
    fn colors_pass_through_unchanged() {
        let color = Rgb::new(0.25, 0.5, 0.75);
        let samples = vec![
            ColorSample::from_coords(0.0, 0.0, 0.0, color),
            ColorSample::from_coords(1.0, 0.0, 0.0, white()),
        ];
        let voxels = normalize(&samples, bounds(10.0, 10.0)).unwrap();
        assert_eq!(voxels[0].color, color);
        assert_eq!(voxels[1].color, white());
    }
}

//! Color and colored-sample types.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A three-channel RGB color with `f64` components.
///
/// The type itself does not fix a channel range; the pipeline stage does.
/// The mesh side carries normalized channels in `[0, 1]`, the voxel side
/// carries denormalized channels in `[0, 255]` (averaged colors keep the
/// fraction, so `u8` would lose information).
///
/// # Example
///
/// ```
/// use vox_types::Rgb;
///
/// let normalized = Rgb::new(1.0, 0.5, 0.0);
/// let denormalized = normalized.scaled(255.0);
/// assert_eq!(denormalized.r, 255.0);
/// assert_eq!(denormalized.g, 127.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Pure black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new color from raw channels.
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Multiply all channels by a scalar.
    ///
    /// Used to denormalize `[0, 1]` mesh colors to the `[0, 255]` range the
    /// palette works in.
    #[inline]
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Check whether this color is exactly pure black.
    ///
    /// The exact-zero comparison is deliberate: the schematic pipeline uses
    /// `(0, 0, 0)` as the empty-voxel sentinel, so only a bit-exact black
    /// is treated as unoccupied.
    #[inline]
    #[must_use]
    pub fn is_black(self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Return the channels as an array.
    #[inline]
    #[must_use]
    pub const fn as_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(f64, f64, f64)> for Rgb {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// A vertex position with its resolved color.
///
/// This is the data contract between mesh ingestion and the numerical
/// pipeline: positions are world-space `f64`, colors are normalized to
/// `[0, 1]` regardless of whether they came from inline vertex colors or
/// from texture sampling. Samples are immutable once produced; the
/// collection order carries no meaning (aggregation is order-independent).
///
/// # Example
///
/// ```
/// use vox_types::{ColorSample, Rgb};
///
/// let sample = ColorSample::from_coords(1.0, 2.0, 3.0, Rgb::new(1.0, 1.0, 1.0));
/// assert_eq!(sample.position.y, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorSample {
    /// World-space position.
    pub position: Point3<f64>,
    /// Normalized color, channels in `[0, 1]`.
    pub color: Rgb,
}

impl ColorSample {
    /// Create a sample from a position and color.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>, color: Rgb) -> Self {
        Self { position, color }
    }

    /// Create a sample from raw coordinates and a color.
    #[inline]
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64, color: Rgb) -> Self {
        Self::new(Point3::new(x, y, z), color)
    }
}

//! Texture color sampling.

use std::path::Path;

use image::RgbImage;
use vox_types::Rgb;

use crate::error::{ObjError, ObjResult};

/// A decoded texture image with UV-based color lookup.
///
/// # Sampling Convention
///
/// UV space has its origin at the bottom-left while image rows run
/// top-down, so the v axis is flipped:
///
/// ```text
/// col = floor(u * (width - 1))
/// row = (height - 1) - floor(v * (height - 1))
/// ```
///
/// Sampled channels are divided by 255 to normalize to `[0, 1]`. Indices
/// are clamped to the image, so out-of-range UVs sample the nearest edge
/// pixel.
#[derive(Debug, Clone)]
pub struct TextureSampler {
    image: RgbImage,
}

impl TextureSampler {
    /// Open and decode a texture file.
    ///
    /// # Errors
    ///
    /// Returns [`ObjError::TextureNotFound`] if the file does not exist,
    /// or [`ObjError::Image`] if it cannot be decoded.
    pub fn open<P: AsRef<Path>>(path: P) -> ObjResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ObjError::TextureNotFound {
                path: path.to_path_buf(),
            });
        }
        let image = image::open(path)?.to_rgb8();
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            path = %path.display(),
            "texture decoded"
        );
        Ok(Self { image })
    }

    /// Build a sampler from an already-decoded image.
    #[must_use]
    pub const fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Sample the normalized color at a UV coordinate.
    #[must_use]
    pub fn sample(&self, u: f64, v: f64) -> Rgb {
        let col = pixel_index(u, self.image.width());
        let row_from_bottom = pixel_index(v, self.image.height());
        let row = self.image.height() - 1 - row_from_bottom;

        let pixel = self.image.get_pixel(col, row);
        Rgb::new(
            f64::from(pixel[0]) / 255.0,
            f64::from(pixel[1]) / 255.0,
            f64::from(pixel[2]) / 255.0,
        )
    }
}

/// Map a normalized coordinate to a pixel index, clamped to the image.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Truncation and sign loss are safe: the value is clamped to [0, extent-1]
// before the cast.
fn pixel_index(t: f64, extent: u32) -> u32 {
    let max = f64::from(extent - 1);
    (t * max).floor().clamp(0.0, max) as u32
}

//! Wavefront OBJ ingestion for VoxForge.
//!
//! This crate reads an OBJ mesh and produces one [`ColorSample`] per vertex,
//! the input contract of the voxelization pipeline. Colors come from one of
//! two sources, in priority order:
//!
//! 1. Inline vertex colors (`v x y z r g b`), taken as already normalized.
//! 2. The diffuse texture of the model's single material, sampled at the
//!    vertex's UV coordinate.
//!
//! A vertex with neither source is a hard error; meshes that reference more
//! than one material are rejected up front.
//!
//! # Example
//!
//! ```no_run
//! use vox_obj::load_color_samples;
//!
//! let samples = load_color_samples("model.obj")?;
//! println!("{} colored vertices", samples.len());
//! # Ok::<(), vox_obj::ObjError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod mtl;
mod obj;
mod texture;

pub use error::{ObjError, ObjResult};
pub use mtl::{load_mtl, parse_mtl, Material};
pub use obj::{load_obj, parse_obj, ObjModel};
pub use texture::TextureSampler;

use std::path::Path;

use vox_types::ColorSample;

/// Load an OBJ mesh and resolve a color for every vertex.
///
/// The material library and texture paths are resolved relative to the OBJ
/// file's directory. The texture is opened lazily, only when some vertex
/// actually needs it; a fully vertex-colored mesh never touches the
/// material library.
///
/// # Errors
///
/// - [`ObjError::FileNotFound`] if the OBJ or MTL file does not exist
/// - [`ObjError::MultipleMaterials`] if the mesh uses more than one material
/// - [`ObjError::TextureNotFound`] if the diffuse texture is missing
/// - [`ObjError::MissingColorSource`] if a vertex has no inline color and
///   no sampleable texture UV
pub fn load_color_samples<P: AsRef<Path>>(path: P) -> ObjResult<Vec<ColorSample>> {
    let path = path.as_ref();
    let model = load_obj(path)?;

    if model.materials_used.len() > 1 {
        return Err(ObjError::MultipleMaterials {
            count: model.materials_used.len(),
        });
    }

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut sampler: Option<TextureSampler> = None;
    let mut samples = Vec::with_capacity(model.vertex_count());

    for (vertex, position) in model.positions.iter().enumerate() {
        let color = if let Some(inline) = model.vertex_colors[vertex] {
            inline
        } else if let Some(uv_index) = model.vertex_uv[vertex] {
            if sampler.is_none() {
                sampler = Some(open_diffuse_texture(&model, base_dir, vertex)?);
            }
            let [u, v] = model.uvs[uv_index];
            match sampler.as_ref() {
                Some(s) => s.sample(u, v),
                None => return Err(ObjError::MissingColorSource { vertex }),
            }
        } else {
            return Err(ObjError::MissingColorSource { vertex });
        };
        samples.push(ColorSample::new(*position, color));
    }

    tracing::info!(samples = samples.len(), "vertex colors resolved");
    Ok(samples)
}

/// Open the diffuse texture of the model's material library.
///
/// `vertex` is the vertex that triggered the lookup, reported when the
/// material chain cannot supply a texture.
fn open_diffuse_texture(
    model: &ObjModel,
    base_dir: &Path,
    vertex: usize,
) -> ObjResult<TextureSampler> {
    let Some(lib) = model.material_lib.as_deref() else {
        return Err(ObjError::MissingColorSource { vertex });
    };
    let materials = load_mtl(base_dir.join(lib))?;

    // With at most one usemtl, the active material is either the named one
    // or, absent a usemtl, the library's first entry.
    let active = match model.materials_used.first() {
        Some(name) => materials.iter().find(|m| &m.name == name),
        None => materials.first(),
    };
    let Some(map) = active.and_then(|m| m.diffuse_map.as_deref()) else {
        return Err(ObjError::MissingColorSource { vertex });
    };

    TextureSampler::open(base_dir.join(map))
}

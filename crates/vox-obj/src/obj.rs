//! Wavefront OBJ parsing.
//!
//! Only the directives the conversion needs are interpreted:
//!
//! ```text
//! v x y z [r g b]   - vertex position, optional inline vertex color
//! vt u v            - texture coordinate
//! f a b c ...       - face; used solely to bind UVs to vertex indices
//! mtllib file.mtl   - material library reference
//! usemtl name       - material use (counted, exactly one supported)
//! ```
//!
//! Everything else (`vn`, `o`, `g`, `s`, comments) is ignored. Face
//! vertices accept the `v`, `v/vt`, `v/vt/vn` and `v//vn` forms; negative
//! indices resolve relative to the current element counts, as the format
//! specifies.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use vox_types::{Point3, Rgb};

use crate::error::{ObjError, ObjResult};

/// A parsed OBJ model, reduced to what color resolution needs.
///
/// Vertex order matches the file; every per-vertex collection is indexed by
/// the vertex's position in the OBJ vertex list.
#[derive(Debug, Clone, Default)]
pub struct ObjModel {
    /// Vertex positions, in file order.
    pub positions: Vec<Point3<f64>>,
    /// Inline vertex colors (normalized [0, 1]), where present.
    pub vertex_colors: Vec<Option<Rgb>>,
    /// Texture coordinates from `vt` directives.
    pub uvs: Vec<[f64; 2]>,
    /// Per-vertex UV binding derived from face `v/vt` pairs.
    pub vertex_uv: Vec<Option<usize>>,
    /// Material library filename from `mtllib`, if any.
    pub material_lib: Option<String>,
    /// Distinct material names from `usemtl`, in order of first use.
    pub materials_used: Vec<String>,
}

impl ObjModel {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Load an OBJ model from a file.
///
/// # Errors
///
/// Returns [`ObjError::FileNotFound`] if the path does not exist, or an
/// [`ObjError::InvalidContent`]/parse error for malformed directives.
pub fn load_obj<P: AsRef<Path>>(path: P) -> ObjResult<ObjModel> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ObjError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ObjError::Io(e)
        }
    })?;
    let model = parse_obj(BufReader::new(file))?;
    tracing::info!(
        vertices = model.vertex_count(),
        uvs = model.uvs.len(),
        materials = model.materials_used.len(),
        path = %path.display(),
        "OBJ loaded"
    );
    Ok(model)
}

/// Parse an OBJ model from a reader.
///
/// # Errors
///
/// Returns [`ObjError::InvalidContent`] for malformed directives and float
/// parse errors for bad numbers.
pub fn parse_obj<R: BufRead>(reader: R) -> ObjResult<ObjModel> {
    let mut model = ObjModel::default();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let Some(directive) = parts.next() else {
            continue;
        };
        let rest: Vec<&str> = parts.collect();

        match directive {
            "v" => parse_vertex(&rest, &mut model)?,
            "vt" => parse_uv(&rest, &mut model)?,
            "f" => parse_face(&rest, &mut model)?,
            "mtllib" => {
                if let Some(name) = rest.first() {
                    model.material_lib = Some((*name).to_owned());
                }
            }
            "usemtl" => {
                let name = rest.first().map_or("", |n| *n).to_owned();
                if !model.materials_used.contains(&name) {
                    model.materials_used.push(name);
                }
            }
            _ => {}
        }
    }

    Ok(model)
}

/// Parse a `v` directive: `x y z`, `x y z w`, or `x y z r g b`.
fn parse_vertex(parts: &[&str], model: &mut ObjModel) -> ObjResult<()> {
    if parts.len() < 3 {
        return Err(ObjError::invalid_content(format!(
            "vertex directive needs at least 3 components, got {}",
            parts.len()
        )));
    }

    let x: f64 = parts[0].parse()?;
    let y: f64 = parts[1].parse()?;
    let z: f64 = parts[2].parse()?;
    model.positions.push(Point3::new(x, y, z));

    let color = if parts.len() >= 6 {
        Some(Rgb::new(
            parts[3].parse()?,
            parts[4].parse()?,
            parts[5].parse()?,
        ))
    } else {
        None
    };
    model.vertex_colors.push(color);
    model.vertex_uv.push(None);
    Ok(())
}

/// Parse a `vt` directive: `u v [w]`.
fn parse_uv(parts: &[&str], model: &mut ObjModel) -> ObjResult<()> {
    if parts.len() < 2 {
        return Err(ObjError::invalid_content(
            "texture coordinate directive needs at least 2 components",
        ));
    }
    let u: f64 = parts[0].parse()?;
    let v: f64 = parts[1].parse()?;
    model.uvs.push([u, v]);
    Ok(())
}

/// Parse an `f` directive, binding each `v/vt` pair.
///
/// Faces carry no other information the pipeline uses; the vertices
/// themselves are the point cloud.
fn parse_face(parts: &[&str], model: &mut ObjModel) -> ObjResult<()> {
    for token in parts {
        let mut indices = token.split('/');
        let vertex_part = indices.next().unwrap_or("");
        let uv_part = indices.next().unwrap_or("");

        let vertex = resolve_index(vertex_part, model.positions.len())?.ok_or_else(|| {
            ObjError::invalid_content(format!("face token {token:?} has no vertex index"))
        })?;

        if let Some(uv) = resolve_index(uv_part, model.uvs.len())? {
            if vertex >= model.vertex_uv.len() {
                return Err(ObjError::invalid_content(format!(
                    "face references vertex {} before its definition",
                    vertex + 1
                )));
            }
            model.vertex_uv[vertex] = Some(uv);
        }
    }
    Ok(())
}

/// Resolve a 1-based (or negative, relative) OBJ index to zero-based.
///
/// Returns `Ok(None)` for an empty field (the `v//vn` form).
fn resolve_index(field: &str, count: usize) -> ObjResult<Option<usize>> {
    if field.is_empty() {
        return Ok(None);
    }
    let raw: i64 = field.parse()?;
    let resolved = if raw < 0 {
        let back = usize::try_from(-raw)
            .map_err(|_| ObjError::invalid_content(format!("index {raw} out of range")))?;
        count
            .checked_sub(back)
            .ok_or_else(|| ObjError::invalid_content(format!("relative index {raw} underflows")))?
    } else if raw > 0 {
        usize::try_from(raw - 1)
            .map_err(|_| ObjError::invalid_content(format!("index {raw} out of range")))?
    } else {
        return Err(ObjError::invalid_content("OBJ indices are 1-based; got 0"));
    };

    if resolved >= count {
        return Err(ObjError::invalid_content(format!(
            "index {raw} out of range (have {count} elements)"
        )));
    }
    Ok(Some(resolved))
}

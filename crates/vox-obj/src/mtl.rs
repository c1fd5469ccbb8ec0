//! Wavefront MTL material library parsing.
//!
//! Only `newmtl` and `map_Kd` (diffuse texture) are interpreted; lighting
//! coefficients and every other statement are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ObjError, ObjResult};

/// A material from an MTL library, reduced to its diffuse texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    /// Material name from `newmtl`.
    pub name: String,
    /// Diffuse texture filename from `map_Kd`, if any.
    pub diffuse_map: Option<String>,
}

/// Load a material library from a file.
///
/// # Errors
///
/// Returns [`ObjError::FileNotFound`] if the path does not exist, or an
/// I/O error while reading.
pub fn load_mtl<P: AsRef<Path>>(path: P) -> ObjResult<Vec<Material>> {
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
    parse_mtl(BufReader::new(file))
}

/// Parse a material library from a reader.
///
/// # Errors
///
/// Returns an I/O error if the reader fails.
pub fn parse_mtl<R: BufRead>(reader: R) -> ObjResult<Vec<Material>> {
    let mut materials: Vec<Material> = Vec::new();

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

        match directive {
            "newmtl" => {
                let name = parts.next().unwrap_or("").to_owned();
                materials.push(Material {
                    name,
                    diffuse_map: None,
                });
            }
            "map_Kd" => {
                // The filename may contain options before it; the last
                // token is the path.
                if let (Some(current), Some(file)) = (materials.last_mut(), trimmed.split_whitespace().last())
                {
                    current.diffuse_map = Some(file.to_owned());
                }
            }
            _ => {}
        }
    }

    Ok(materials)
}

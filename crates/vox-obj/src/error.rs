//! Error types for OBJ ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for OBJ ingestion operations.
pub type ObjResult<T> = Result<T, ObjError>;

/// Errors that can occur while loading a mesh and resolving vertex colors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ObjError {
    /// Mesh file not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The mesh references more than one material. Texture-based color
    /// resolution supports exactly one.
    #[error("mesh references {count} materials; exactly one is supported")]
    MultipleMaterials {
        /// Number of distinct materials referenced.
        count: usize,
    },

    /// The material's diffuse texture file does not exist on disk.
    #[error("texture file not found: {path}")]
    TextureNotFound {
        /// Resolved texture path that was not found.
        path: PathBuf,
    },

    /// A vertex has neither an inline color nor a sampleable texture UV.
    #[error("vertex {vertex} has no color source (no inline color, no texture UV)")]
    MissingColorSource {
        /// Zero-based index of the vertex in the OBJ vertex list.
        vertex: usize,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Texture decoding error.
    #[error("texture decoding error: {0}")]
    Image(#[from] image::ImageError),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Integer parsing error.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl ObjError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}

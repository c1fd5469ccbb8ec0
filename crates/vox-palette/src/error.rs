//! Error types for palette loading and matching.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for palette operations.
pub type PaletteResult<T> = Result<T, PaletteError>;

/// Errors that can occur while loading or using a block palette.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PaletteError {
    /// The palette table contains no entries. An empty table has no nearest
    /// entry for any color, so matching refuses to run.
    #[error("palette table is empty")]
    EmptyPalette,

    /// Palette config file not found.
    #[error("palette config not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// I/O error reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON, or entries missing required fields.
    #[error("malformed palette config: {0}")]
    Json(#[from] serde_json::Error),
}

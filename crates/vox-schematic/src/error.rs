//! Error types for schematic encoding.

/// Result type for schematic operations.
pub type SchematicResult<T> = Result<T, SchematicError>;

/// Errors that can occur while encoding or writing a schematic.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SchematicError {
    /// A grid extent does not fit the format's 16-bit dimension fields.
    #[error("{axis} extent {extent} exceeds the schematic's 16-bit dimension limit")]
    DimensionOverflow {
        /// Which dimension overflowed ("width", "height" or "length").
        axis: &'static str,
        /// The offending extent.
        extent: usize,
    },

    /// A byte array or string is too long for the NBT length prefix.
    #[error("NBT payload of {len} elements exceeds the format's length prefix")]
    PayloadTooLarge {
        /// Number of elements in the payload.
        len: usize,
    },

    /// I/O error writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

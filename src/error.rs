use thiserror::Error;

/// Error type for blur operations
///
/// Both variants are detected before any pixel is touched, so a failed call
/// never leaves the destination partially written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlurError {
    /// Destination and source dimensions do not match
    ///
    /// The engine never resizes; the caller must allocate a destination
    /// with exactly the source dimensions.
    #[error("Destination and source dimensions do not match: expected {expected:?}, actual {actual:?}")]
    DimensionMismatch {
        /// Source dimensions (width, height)
        expected: (u32, u32),
        /// Destination dimensions (width, height)
        actual: (u32, u32),
    },

    /// Invalid parameter provided to the operation
    ///
    /// Returned for a negative or non-finite standard deviation.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

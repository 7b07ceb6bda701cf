//! Internal utility functions for quickblur.
//!
//! Validation shared by the public entry points.

use crate::error::BlurError;

/// Validates that the destination has exactly the source dimensions.
///
/// # Arguments
///
/// * `source` - The source dimensions (width, height)
/// * `destination` - The destination dimensions (width, height)
///
/// # Returns
///
/// `Ok(())` if the dimensions match, otherwise `BlurError::DimensionMismatch`
pub fn validate_matching_dimensions(
    source: (u32, u32),
    destination: (u32, u32),
) -> Result<(), BlurError> {
    if source != destination {
        Err(BlurError::DimensionMismatch {
            expected: source,
            actual: destination,
        })
    } else {
        Ok(())
    }
}

/// Validates a standard deviation: it must be finite and non-negative.
pub fn validate_std_dev(std_dev: f64) -> Result<(), BlurError> {
    if !std_dev.is_finite() {
        return Err(BlurError::InvalidParameter(format!(
            "std_dev must be finite, got {std_dev}"
        )));
    }
    if std_dev < 0.0 {
        return Err(BlurError::InvalidParameter(format!(
            "std_dev must be >= 0, got {std_dev}"
        )));
    }
    Ok(())
}

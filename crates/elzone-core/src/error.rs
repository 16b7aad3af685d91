//! Error types for elzone-core operations.
//!
//! Only buffer construction can fail in this crate. Everything downstream of a
//! valid [`crate::PixelBuffer`] is total.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing pixel buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested dimensions cannot be represented.
    ///
    /// Returned when `width * height * 4` overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Sample slice length does not match the declared dimensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elzone_core::Error;
    ///
    /// let err = Error::BufferSizeMismatch { expected: 16, actual: 12 };
    /// assert!(err.to_string().contains("16"));
    /// ```
    #[error("buffer size mismatch: expected {expected} samples, got {actual}")]
    BufferSizeMismatch {
        /// Expected number of u8 samples (`width * height * 4`)
        expected: usize,
        /// Actual number of samples provided
        actual: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::invalid_dimensions(0, 7, "overflow");
        assert_eq!(err.to_string(), "invalid dimensions: 0x7 (overflow)");
    }
}

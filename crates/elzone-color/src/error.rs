//! Error types for zone pipeline setup.
//!
//! Rendering itself is total: unknown curve keys fall back to an identity
//! decode and non-finite exposure is coerced to zero. Only configuration can
//! fail.

use thiserror::Error;

/// Zone pipeline error.
#[derive(Debug, Error)]
pub enum ZoneError {
    /// Luminance mode name not recognised.
    #[error("unknown luminance mode: {0} (expected max, average or weighted)")]
    UnknownLumaMode(String),

    /// A per-curve tuning value is out of range.
    #[error("invalid tuning for curve '{curve}': {field} = {value}")]
    InvalidTuning {
        /// Curve key the override targets.
        curve: String,
        /// Tuning field name.
        field: &'static str,
        /// Rejected value.
        value: f32,
    },

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// I/O error while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for zone operations.
pub type ZoneResult<T> = Result<T, ZoneError>;

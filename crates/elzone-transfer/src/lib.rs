//! # elzone-transfer
//!
//! Camera log transfer functions for decoding recorded code values back to
//! scene-linear light, plus the video-range level remap that runs before them.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded (in camera)
//! - **Inverse OETF**: Encoded -> Linear (what a false-color monitor needs)
//!
//! # Supported Curves
//!
//! | Module | Camera | Breakpoint (encoded) |
//! |--------|--------|----------------------|
//! | [`s_log3`] | Sony S-Log3 | 171.2102946929 / 1023 |
//! | [`log_c`] | ARRI LogC3, EI 800 | 0.149658 |
//! | [`bmd_film`] | Blackmagic Film Gen 5 | `linSlope * linCut + linOffset` |
//! | [`v_log`] | Panasonic V-Log | 0.181 |
//!
//! Every `decode` clamps its input to [0, 1] first; every `encode` accepts any
//! linear value.
//!
//! # Usage
//!
//! ```rust
//! use elzone_transfer::{levels, s_log3};
//!
//! // 8-bit legal-range code value -> full range -> linear
//! let v = levels::remap(107.0 / 255.0, true);
//! let linear = s_log3::decode(v);
//! assert!(linear > 0.0);
//! ```
//!
//! # Used By
//!
//! - `elzone-color` - curve registry and overlay pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bmd_film;
pub mod levels;
pub mod log_c;
pub mod s_log3;
pub mod v_log;

pub use bmd_film::{bmd_film_gen5_decode, bmd_film_gen5_encode};
pub use levels::LevelsMode;
pub use log_c::{decode as log_c_decode, encode as log_c_encode};
pub use s_log3::{decode as s_log3_decode, encode as s_log3_encode};
pub use v_log::{decode as v_log_decode, encode as v_log_encode};

/// Clamps an encoded sample to [0, 1].
///
/// NaN maps to 0 so a decode never sees it.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

//! # elzone-math
//!
//! Math primitives for gamut conversion:
//!
//! - [`Mat3`] - 3x3 matrices for camera RGB -> XYZ -> Rec.709
//! - [`Vec3`] - RGB/XYZ triplets
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use elzone_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! assert!((xyz.y - 0.5883).abs() < 1e-3);
//! ```
//!
//! # Used By
//!
//! - `elzone-primaries` - RGB/XYZ matrix derivation
//! - `elzone-color` - per-pixel gamut conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;

//! # elzone-core
//!
//! Core types shared by every `elzone` crate:
//!
//! - [`PixelBuffer`] - row-major RGBA8 image buffer, no row padding
//! - [`Rgb8`] - 8-bit display color used by the zone palette
//! - [`Error`] / [`Result`] - buffer construction failures
//!
//! ## Crate Structure
//!
//! ```text
//! elzone-core (this crate)
//!    ^
//!    |
//!    +-- elzone-color (zone pipeline, overlay cache)
//!    +-- elzone-io (PNG/JPEG loading)
//!    +-- elzone-cli
//! ```
//!
//! The buffer type is deliberately plain: an image-loading collaborator hands
//! the pipeline already-decoded RGBA8 samples, and the pipeline hands an
//! RGBA8 overlay of identical dimensions back.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use pixel::{
    luminance_rec709, Rgb8, REC709_LUMA, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{luminance_rec709, Rgb8};
}

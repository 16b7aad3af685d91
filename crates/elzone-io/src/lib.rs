//! # elzone-io
//!
//! Image loading for false-color overlays.
//!
//! The zone pipeline works on already-decoded RGBA8 buffers. This crate is
//! the collaborator that gets them there from disk, and writes overlays back:
//!
//! - **PNG** - read (8/16-bit, any color type) and write (RGBA8)
//! - **JPEG** - read (RGB, grayscale, CMYK)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use elzone_io::{read, write};
//!
//! let frame = read("slog3_frame.jpg")?;
//! write("frame_copy.png", &frame)?;
//! ```
//!
//! # Dependencies
//!
//! - [`elzone-core`] - `PixelBuffer`
//! - [`png`] - PNG support
//! - [`jpeg-decoder`] - JPEG decoding
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

pub use detect::Format;
pub use error::{IoError, IoResult};

use elzone_core::PixelBuffer;
use std::path::Path;
use tracing::debug;

/// Reads an image into an RGBA8 buffer, detecting the format.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not supported or its feature is disabled
/// - The file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    debug!(path = %path.display(), format = format.name(), "Reading image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),

        _ => Err(IoError::UnsupportedFormat(format!(
            "{} ({})",
            path.display(),
            format.name()
        ))),
    }
}

/// Writes an RGBA8 buffer. Only PNG output is supported.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    debug!(path = %path.display(), format = format.name(), "Writing image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        _ => Err(IoError::UnsupportedFormat(format!(
            "cannot write {} ({})",
            path.display(),
            format.name()
        ))),
    }
}

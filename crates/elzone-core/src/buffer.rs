//! RGBA8 pixel buffer.
//!
//! # Memory Layout
//!
//! Pixels are stored **row-major**, top-to-bottom, with no row padding:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//! ```
//!
//! The source image handed in by a loader and the overlay produced by the
//! zone pipeline share this one type.

use crate::{Error, Result};

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 4;

/// Owned RGBA8 image buffer.
///
/// # Example
///
/// ```rust
/// use elzone_core::PixelBuffer;
///
/// let mut buf = PixelBuffer::new(4, 2).unwrap();
/// buf.set_pixel(1, 1, [10, 20, 30, 255]);
/// assert_eq!(buf.pixel(1, 1), [10, 20, 30, 255]);
/// assert_eq!(buf.as_bytes().len(), 4 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a transparent black buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the sample count overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = sample_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wraps existing RGBA8 samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len() != width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = sample_count(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Expands packed RGB8 samples to RGBA8 with opaque alpha.
    pub fn from_rgb8(width: u32, height: u32, rgb: &[u8]) -> Result<Self> {
        let expected = sample_count(width, height)? / CHANNELS * 3;
        if rgb.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: rgb.len(),
            });
        }
        let data = rgb
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a buffer filled with one pixel value.
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Result<Self> {
        let len = sample_count(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / CHANNELS {
            data.extend_from_slice(&pixel);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a transparent black buffer with the same dimensions as `self`.
    ///
    /// Infallible: `self` already proved the dimensions are representable.
    pub fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: vec![0; self.data.len()],
        }
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Returns true for a zero-area buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of u8 samples in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw interleaved samples.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer, returning the raw samples.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Reads one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Writes one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&px);
    }

    /// Iterates over pixels as 4-sample slices.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(CHANNELS)
    }
}

fn sample_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "sample count overflows usize"))
}

//! JPEG reading.
//!
//! Baseline and progressive JPEGs decode to RGB24, grayscale or CMYK; all
//! three are widened to RGBA8 with alpha 255.

use crate::{IoError, IoResult};
use elzone_core::PixelBuffer;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

/// Reads a JPEG file into an RGBA8 buffer.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    trace!(path = %path.display(), "jpeg::read");
    let file = File::open(path)?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let rgba: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        jpeg_decoder::PixelFormat::L16 => pixels
            .chunks_exact(2)
            .flat_map(|l| [l[0], l[0], l[0], 255])
            .collect(),
        jpeg_decoder::PixelFormat::CMYK32 => pixels.chunks_exact(4).flat_map(cmyk_to_rgba).collect(),
    };

    Ok(PixelBuffer::from_rgba8(info.width as u32, info.height as u32, rgba)?)
}

/// Approximate CMYK -> RGB, no ICC.
fn cmyk_to_rgba(cmyk: &[u8]) -> [u8; 4] {
    let k = 255 - cmyk[3] as u16;
    let ch = |c: u8| ((255 - c as u16) * k / 255) as u8;
    [ch(cmyk[0]), ch(cmyk[1]), ch(cmyk[2]), 255]
}

//! PNG format support.
//!
//! Reads any PNG into an RGBA8 [`PixelBuffer`]:
//!
//! - palette and sub-byte grayscale are expanded by the decoder
//! - grayscale is replicated to RGB
//! - 16-bit samples keep their high byte
//! - missing alpha becomes 255
//!
//! Writes RGBA8 with an sRGB chunk.
//!
//! # Example
//!
//! ```rust,ignore
//! use elzone_io::png::{read, write};
//!
//! let frame = read("slog3_frame.png")?;
//! write("copy.png", &frame)?;
//! ```

use crate::{IoError, IoResult};
use elzone_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::trace;

/// Reads a PNG file into an RGBA8 buffer.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    trace!(path = %path.display(), "png::read");
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let samples = &buf[..info.buffer_size()];

    let (channels, bytes_per_sample) = match (info.color_type, info.bit_depth) {
        (color, png::BitDepth::Eight) => (color.samples(), 1),
        (color, png::BitDepth::Sixteen) => (color.samples(), 2),
        (color, depth) => {
            return Err(IoError::UnsupportedBitDepth(format!("{color:?} {depth:?}")));
        }
    };

    let rgba = to_rgba8(samples, channels, bytes_per_sample)?;
    Ok(PixelBuffer::from_rgba8(info.width, info.height, rgba)?)
}

/// Widens interleaved 1-4 channel samples to RGBA8.
///
/// Multi-byte samples are big-endian; the high byte is kept.
fn to_rgba8(samples: &[u8], channels: usize, bytes_per_sample: usize) -> IoResult<Vec<u8>> {
    let stride = channels * bytes_per_sample;
    if stride == 0 || samples.len() % stride != 0 {
        return Err(IoError::DecodeError(format!(
            "{} bytes is not a whole number of {}-byte pixels",
            samples.len(),
            stride
        )));
    }
    let mut out = Vec::with_capacity(samples.len() / stride * 4);
    for px in samples.chunks_exact(stride) {
        let s = |i: usize| px[i * bytes_per_sample];
        let rgba = match channels {
            1 => [s(0), s(0), s(0), 255],
            2 => [s(0), s(0), s(0), s(1)],
            3 => [s(0), s(1), s(2), 255],
            4 => [s(0), s(1), s(2), s(3)],
            n => return Err(IoError::UnsupportedBitDepth(format!("{n} channels"))),
        };
        out.extend_from_slice(&rgba);
    }
    Ok(out)
}

/// Writes an RGBA8 buffer to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), width = image.width(), height = image.height(), "png::write");
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(image.as_bytes())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_raw(path: &Path, w: u32, h: u32, color: png::ColorType, depth: png::BitDepth, data: &[u8]) {
        let file = File::create(path).unwrap();
        let mut enc = png::Encoder::new(BufWriter::new(file), w, h);
        enc.set_color(color);
        enc.set_depth(depth);
        let mut wr = enc.write_header().unwrap();
        wr.write_image_data(data).unwrap();
    }

    #[test]
    fn test_roundtrip_rgba() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        let data: Vec<u8> = (0..16 * 8 * 4).map(|i| (i * 3 % 256) as u8).collect();
        let image = PixelBuffer::from_rgba8(16, 8, data).unwrap();

        write(&path, &image).unwrap();
        let loaded = read(&path).unwrap();
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_rgb_gets_opaque_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        write_raw(&path, 2, 1, png::ColorType::Rgb, png::BitDepth::Eight, &[10, 20, 30, 40, 50, 60]);
        let loaded = read(&path).unwrap();
        assert_eq!(loaded.pixel(0, 0), [10, 20, 30, 255]);
        assert_eq!(loaded.pixel(1, 0), [40, 50, 60, 255]);
    }

    #[test]
    fn test_gray16_keeps_high_byte() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gray16.png");
        write_raw(&path, 2, 1, png::ColorType::Grayscale, png::BitDepth::Sixteen, &[0x69, 0xff, 0x01, 0x00]);
        let loaded = read(&path).unwrap();
        assert_eq!(loaded.pixel(0, 0), [0x69, 0x69, 0x69, 255]);
        assert_eq!(loaded.pixel(1, 0), [1, 1, 1, 255]);
    }

    #[test]
    fn test_gray_alpha() {
        assert_eq!(to_rgba8(&[7, 9], 2, 1).unwrap(), vec![7, 7, 7, 9]);
        assert!(to_rgba8(&[1, 2, 3], 2, 1).is_err());
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really").unwrap();
        assert!(matches!(read(&path), Err(IoError::DecodeError(_))));
    }
}

//! Display pixel types and luminance constants.

use std::fmt;

/// Rec.709 luminance coefficient for red channel.
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Rec.709 luminance coefficients as an array [R, G, B].
pub const REC709_LUMA: [f32; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

/// Calculate Rec.709 luminance from linear RGB values.
///
/// `Y = 0.2126*R + 0.7152*G + 0.0722*B`
///
/// # Example
///
/// ```rust
/// use elzone_core::luminance_rec709;
///
/// let y = luminance_rec709([1.0, 1.0, 1.0]);
/// assert!((y - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn luminance_rec709(rgb: [f32; 3]) -> f32 {
    rgb[0] * REC709_LUMA_R + rgb[1] * REC709_LUMA_G + rgb[2] * REC709_LUMA_B
}

/// 8-bit RGB display color.
///
/// # Example
///
/// ```rust
/// use elzone_core::Rgb8;
///
/// let grey = Rgb8::from_hex(0x8a8a8a);
/// assert_eq!(grey, Rgb8::new(138, 138, 138));
/// assert_eq!(grey.to_string(), "#8a8a8a");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// Creates a color from components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Packs the color as `0xRRGGBB`.
    #[inline]
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Returns the color as an opaque RGBA sample.
    #[inline]
    pub const fn opaque(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let c = Rgb8::from_hex(0xff6a00);
        assert_eq!((c.r, c.g, c.b), (0xff, 0x6a, 0x00));
        assert_eq!(c.to_hex(), 0xff6a00);
        assert_eq!(c.to_string(), "#ff6a00");
    }

    #[test]
    fn test_opaque() {
        assert_eq!(Rgb8::new(1, 2, 3).opaque(), [1, 2, 3, 255]);
    }

    #[test]
    fn test_luma_sums_to_one() {
        let sum: f32 = REC709_LUMA.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }
}

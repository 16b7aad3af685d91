//! # elzone-primaries
//!
//! Camera gamut primaries, white points, and RGB-XYZ matrices.
//!
//! Camera log footage is encoded in the camera's native wide gamut. Before a
//! luminance estimate can be compared across cameras, linear camera RGB is
//! taken to CIE XYZ with the camera's published matrix and from there to
//! Rec.709 with [`XYZ_TO_REC709`].
//!
//! # Included Gamuts
//!
//! | Gamut | Camera | White |
//! |-------|--------|-------|
//! | [`S_GAMUT3_CINE`] | Sony Venice, FX, FS | D65 |
//! | [`ARRI_WIDE_GAMUT_3`] | ARRI ALEXA (LogC3) | D65 |
//! | [`BMD_WIDE_GAMUT_GEN5`] | Blackmagic Gen 5 | D65 (Blackmagic) |
//! | [`V_GAMUT`] | Panasonic VariCam, Lumix | D65 |
//! | [`REC709`] | Reference display | D65 |
//!
//! # Usage
//!
//! ```rust
//! use elzone_primaries::{S_GAMUT3_CINE_TO_XYZ, XYZ_TO_REC709};
//! use elzone_math::Vec3;
//!
//! let to_709 = XYZ_TO_REC709 * S_GAMUT3_CINE_TO_XYZ;
//! let grey = to_709 * Vec3::splat(0.18);
//! assert!((grey.y - 0.18).abs() < 1e-3);
//! ```
//!
//! # Used By
//!
//! - `elzone-color` - gamut converter in the zone pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use elzone_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Defines a gamut by its three primaries and white point, all as CIE xy
/// chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f32, f32),
    /// Green primary (x, y) chromaticity
    pub g: (f32, f32),
    /// Blue primary (x, y) chromaticity
    pub b: (f32, f32),
    /// White point (x, y) chromaticity
    pub w: (f32, f32),
    /// Gamut name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

// ============================================================================
// White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f32, f32) = (0.31270, 0.32900);

// ============================================================================
// Primaries
// ============================================================================

/// Rec.709 / sRGB primaries, the reference display gamut.
pub const REC709: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Rec.709",
};

/// Sony S-Gamut3.Cine primaries.
pub const S_GAMUT3_CINE: Primaries = Primaries {
    r: (0.7660, 0.2750),
    g: (0.2250, 0.8000),
    b: (0.0890, -0.0870),
    w: D65_XY,
    name: "S-Gamut3.Cine",
};

/// ARRI Wide Gamut 3 primaries.
pub const ARRI_WIDE_GAMUT_3: Primaries = Primaries {
    r: (0.6840, 0.3130),
    g: (0.2210, 0.8480),
    b: (0.0861, -0.1020),
    w: D65_XY,
    name: "ARRI Wide Gamut 3",
};

/// Blackmagic Wide Gamut Gen 5 primaries.
pub const BMD_WIDE_GAMUT_GEN5: Primaries = Primaries {
    r: (0.7177215, 0.3171181),
    g: (0.2280410, 0.8615690),
    b: (0.1005841, -0.0820452),
    w: (0.3127170, 0.3290312),
    name: "Blackmagic Wide Gamut Gen 5",
};

/// Panasonic V-Gamut primaries.
pub const V_GAMUT: Primaries = Primaries {
    r: (0.7300, 0.2800),
    g: (0.1650, 0.8400),
    b: (0.1000, -0.0300),
    w: D65_XY,
    name: "V-Gamut",
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f32, y: f32) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Solve for per-primary scale so RGB (1,1,1) lands on the white point
/// 3. Scale each primary column
///
/// # Example
///
/// ```rust
/// use elzone_primaries::{REC709, rgb_to_xyz_matrix};
/// use elzone_math::Vec3;
///
/// let white = rgb_to_xyz_matrix(&REC709) * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 0.001);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = primaries.white_xyz();

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // S = M^-1 * W
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}

// ============================================================================
// Published Matrices
// ============================================================================

/// XYZ (D65) to Rec.709 linear RGB.
pub const XYZ_TO_REC709: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Sony S-Gamut3.Cine to XYZ (D65), from Sony's S-Log3 technical summary.
pub const S_GAMUT3_CINE_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.5990839208, 0.2489255161, 0.1024464902],
    [0.2150758201, 0.8850685017, -0.1001443219],
    [-0.0320658495, -0.0276583907, 1.1487819910],
]);

/// ARRI Wide Gamut 3 to XYZ (D65), from ARRI's LogC3 white paper.
pub const ARRI_WIDE_GAMUT_3_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.638008, 0.214704, 0.097744],
    [0.291954, 0.823841, -0.115795],
    [0.002798, -0.067034, 1.153294],
]);

/// Blackmagic Wide Gamut Gen 5 to XYZ (D65).
pub const BMD_WIDE_GAMUT_GEN5_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.6065303722, 0.2204080953, 0.1234790005],
    [0.2679894071, 0.8327308786, -0.1007202857],
    [-0.0294421660, -0.0866106070, 1.2048607644],
]);

/// Panasonic V-Gamut to XYZ (D65), from the V-Log/V-Gamut reference manual.
pub const V_GAMUT_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.679644, 0.152211, 0.118600],
    [0.260686, 0.774894, -0.035580],
    [-0.009310, -0.004612, 1.102980],
]);

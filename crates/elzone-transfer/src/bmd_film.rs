//! Blackmagic Design Film Gen 5 transfer function.
//!
//! BMDFilm Gen5 is used by current Blackmagic cameras (URSA Mini Pro 12K,
//! Pocket Cinema 4K/6K) together with Blackmagic Wide Gamut Gen5. It is a
//! natural-log curve with a linear extension below the break point.
//!
//! # Formula
//!
//! ```text
//! encode:  x <  linCut  ->  linSlope * x + linOffset
//!          x >= linCut  ->  logSideSlope * ln(x + linSideOffset) + logSideOffset
//!
//! decode:  y <= logCut  ->  (y - linOffset) / linSlope
//!          y >  logCut  ->  exp((y - logSideOffset) / logSideSlope) - linSideOffset
//!
//! logCut = linSlope * linCut + linOffset
//! ```
//!
//! Evaluated in f64 internally.
//!
//! # Reference
//!
//! Blackmagic Generation 5 Color Science technical note

/// Log side slope (`A` in the Blackmagic note).
pub const LOG_SIDE_SLOPE: f64 = 0.08692876065491224;

/// Linear offset inside the log (`B`).
pub const LIN_SIDE_OFFSET: f64 = 0.005494072432257808;

/// Log side offset (`C`).
pub const LOG_SIDE_OFFSET: f64 = 0.5300133392291939;

/// Slope of the linear extension.
pub const LIN_SLOPE: f64 = 8.283605932402494;

/// Offset of the linear extension (encoded value of linear zero).
pub const LIN_OFFSET: f64 = 0.09246575342465753;

/// Linear breakpoint.
pub const LIN_CUT: f64 = 0.005;

/// Encoded breakpoint.
pub const LOG_CUT: f64 = LIN_SLOPE * LIN_CUT + LIN_OFFSET;

/// BMDFilm Gen5 encode: Linear to BMDFilm Gen5.
///
/// # Example
///
/// ```rust
/// use elzone_transfer::bmd_film::bmd_film_gen5_encode;
///
/// let log = bmd_film_gen5_encode(0.18);
/// assert!((log - 0.38356).abs() < 1e-4);
/// ```
#[inline]
pub fn bmd_film_gen5_encode(linear: f32) -> f32 {
    let x = linear as f64;
    if x < LIN_CUT {
        (LIN_SLOPE * x + LIN_OFFSET) as f32
    } else {
        (LOG_SIDE_SLOPE * (x + LIN_SIDE_OFFSET).ln() + LOG_SIDE_OFFSET) as f32
    }
}

/// BMDFilm Gen5 decode: BMDFilm Gen5 to linear.
///
/// The input is clamped to [0, 1].
///
/// # Example
///
/// ```rust
/// use elzone_transfer::bmd_film::bmd_film_gen5_decode;
///
/// let linear = bmd_film_gen5_decode(0.383562);
/// assert!((linear - 0.18).abs() < 1e-4);
/// ```
#[inline]
pub fn bmd_film_gen5_decode(log: f32) -> f32 {
    let y = crate::clamp01(log) as f64;
    if y <= LOG_CUT {
        ((y - LIN_OFFSET) / LIN_SLOPE) as f32
    } else {
        (((y - LOG_SIDE_OFFSET) / LOG_SIDE_SLOPE).exp() - LIN_SIDE_OFFSET) as f32
    }
}

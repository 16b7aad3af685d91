//! Stop computation relative to the curve's mid-grey reference.
//!
//! ```text
//! ref   = mid_grey * 2^exposure
//! stops = log2((Y + offset + eps) / (ref + offset + eps)) * contrast + bias
//! ```
//!
//! `Y` is floored at zero (NaN included) and the result is clamped to
//! [`STOP_LIMIT`], so the quantizer only ever sees finite values.

use crate::curve::CurveDefinition;

/// Guard against `log2(0)`.
pub const STOP_EPSILON: f32 = 1e-12;

/// Stop values saturate at +/- this many stops.
pub const STOP_LIMIT: f32 = 64.0;

/// Coerces an exposure offset to a finite value.
///
/// Non-finite input becomes 0 and `-0.0` becomes `0.0`, so equal offsets
/// compare equal bitwise.
#[inline]
pub fn sanitize_exposure(exposure: f32) -> f32 {
    if exposure.is_finite() && exposure != 0.0 {
        exposure
    } else {
        0.0
    }
}

/// Precomputed stop reference for one curve and exposure offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopReference {
    offset: f32,
    denominator: f32,
    contrast: f32,
    bias: f32,
}

impl StopReference {
    /// Builds the reference. The exposure offset is sanitized first.
    pub fn new(curve: &CurveDefinition, exposure: f32) -> Self {
        let exposure = sanitize_exposure(exposure);
        let offset = curve.stop_offset();
        let reference = curve.mid_grey * exposure.exp2();
        Self {
            offset,
            denominator: reference + offset + STOP_EPSILON,
            contrast: curve.contrast(),
            bias: curve.bias(),
        }
    }

    /// Signed stops of `y` relative to the reference.
    #[inline]
    pub fn stops(&self, y: f32) -> f32 {
        let y = y.max(0.0);
        let raw = ((y + self.offset + STOP_EPSILON) / self.denominator).log2();
        (raw * self.contrast + self.bias).clamp(-STOP_LIMIT, STOP_LIMIT)
    }
}

/// One-shot stop computation.
pub fn stops(y: f32, curve: &CurveDefinition, exposure: f32) -> f32 {
    StopReference::new(curve, exposure).stops(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{BLACKMAGIC_FILM_GEN5, IDENTITY};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mid_grey_is_zero() {
        assert_abs_diff_eq!(stops(0.18, &IDENTITY, 0.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(stops(0.36, &IDENTITY, 0.0), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(stops(0.045, &IDENTITY, 0.0), -2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_exposure_shifts_reference() {
        assert_abs_diff_eq!(stops(0.36, &IDENTITY, 1.0), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(stops(0.18, &IDENTITY, -2.0), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_tuning() {
        // grey sits at the bias once offset is on both sides
        assert_abs_diff_eq!(stops(0.18, &BLACKMAGIC_FILM_GEN5, 0.0), 0.35, epsilon = 1e-5);
        let plain = BLACKMAGIC_FILM_GEN5.untuned();
        assert_abs_diff_eq!(stops(0.18, &plain, 0.0), 0.0, epsilon = 1e-6);
        let one = stops(0.36, &plain, 0.0);
        assert_abs_diff_eq!(stops(0.36, &BLACKMAGIC_FILM_GEN5, 0.0), one * 1.08 + 0.35, epsilon = 1e-5);
    }

    #[test]
    fn test_never_nan() {
        for y in [0.0, -1.0, f32::NAN, f32::MIN_POSITIVE, 1e30] {
            for e in [0.0, 200.0, -200.0, f32::NAN, f32::INFINITY] {
                assert!(stops(y, &IDENTITY, e).is_finite(), "y={y} e={e}");
            }
        }
        assert!(stops(0.0, &IDENTITY, 0.0) < -30.0);
        assert_eq!(stops(1e30, &IDENTITY, -200.0), STOP_LIMIT);
        assert_eq!(stops(0.5, &IDENTITY, 200.0), -STOP_LIMIT);
    }

    #[test]
    fn test_sanitize_exposure() {
        assert_eq!(sanitize_exposure(f32::NAN), 0.0);
        assert_eq!(sanitize_exposure(f32::NEG_INFINITY), 0.0);
        assert_eq!(sanitize_exposure(-0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(sanitize_exposure(1.5), 1.5);
    }
}

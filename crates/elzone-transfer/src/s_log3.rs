//! Sony S-Log3 transfer function.
//!
//! S-Log3 is Sony's logarithmic encoding for their digital cinema cameras,
//! paired with S-Gamut3 / S-Gamut3.Cine.
//!
//! # Range
//!
//! - Encoded: [0, 1] (10-bit code value / 1023)
//! - Linear: Scene-referred, 18% grey at code 420
//!
//! # Reference
//!
//! Sony S-Log3 Technical Summary

/// Breakpoint in 10-bit code values between the linear toe and the log segment.
pub const CODE_CUT: f32 = 171.2102946929;

/// Code value of linear zero (black offset).
pub const CODE_BLACK: f32 = 95.0;

/// Code value of 18% grey.
pub const CODE_GREY: f32 = 420.0;

/// Log segment slope in code values per decade.
pub const CODE_PER_DECADE: f32 = 261.5;

/// Linear value at the breakpoint.
pub const LIN_CUT: f32 = 0.01125;

/// Breakpoint as a normalized encoded value.
pub const CUT: f32 = CODE_CUT / 1023.0;

/// S-Log3 encode: Linear to S-Log3.
///
/// # Example
///
/// ```rust
/// use elzone_transfer::s_log3::encode;
///
/// // 18% grey sits at code 420
/// assert!((encode(0.18) * 1023.0 - 420.0).abs() < 1e-3);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear >= LIN_CUT {
        // 0.19 = 0.18 + 0.01, so 18% grey maps to 420/1023
        (CODE_GREY + CODE_PER_DECADE * ((linear + 0.01) / 0.19).log10()) / 1023.0
    } else {
        (linear * (CODE_CUT - CODE_BLACK) / LIN_CUT + CODE_BLACK) / 1023.0
    }
}

/// S-Log3 decode: S-Log3 to linear.
///
/// The input is clamped to [0, 1]. Codes below 95 decode slightly negative.
///
/// # Example
///
/// ```rust
/// use elzone_transfer::s_log3::decode;
///
/// let linear = decode(420.0 / 1023.0);
/// assert!((linear - 0.18).abs() < 1e-5);
/// ```
#[inline]
pub fn decode(log: f32) -> f32 {
    let v = crate::clamp01(log);
    if v >= CUT {
        10.0_f32.powf((v * 1023.0 - CODE_GREY) / CODE_PER_DECADE) * 0.19 - 0.01
    } else {
        (v * 1023.0 - CODE_BLACK) * LIN_CUT / (CODE_CUT - CODE_BLACK)
    }
}

/// Returns the S-Log3 value for 18% grey.
#[inline]
pub fn middle_gray() -> f32 {
    encode(0.18)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_published_constants() {
        assert_eq!(CODE_CUT, 171.2102946929);
        assert_eq!(CODE_BLACK, 95.0);
        assert_eq!(CODE_GREY, 420.0);
        assert_eq!(CODE_PER_DECADE, 261.5);
        assert_eq!(LIN_CUT, 0.01125);
    }

    #[test]
    fn test_roundtrip() {
        for &l in &[0.0, 0.005, 0.01125, 0.18, 0.5, 1.0, 2.0] {
            let decoded = decode(encode(l));
            assert!(
                (l - decoded).abs() < l * 1e-4 + 1e-5,
                "l={}, decoded={}",
                l,
                decoded
            );
        }
    }

    #[test]
    fn test_middle_gray() {
        assert_abs_diff_eq!(decode(middle_gray()), 0.18, epsilon = 1e-4);
        assert_abs_diff_eq!(middle_gray(), 0.41055718, epsilon = 1e-5);
    }

    #[test]
    fn test_continuous_at_breakpoint() {
        let below = (CUT * 1023.0 - CODE_BLACK) * LIN_CUT / (CODE_CUT - CODE_BLACK);
        let above = 10.0_f32.powf((CUT * 1023.0 - CODE_GREY) / CODE_PER_DECADE) * 0.19 - 0.01;
        assert_abs_diff_eq!(below, above, epsilon = 1e-6);
        assert_abs_diff_eq!(decode(CUT), LIN_CUT, epsilon = 1e-6);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = decode(0.0);
        for i in 1..=4096 {
            let cur = decode(i as f32 / 4096.0);
            assert!(cur >= prev, "decode not monotonic at {}", i);
            prev = cur;
        }
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(decode(-1.0), decode(0.0));
        assert_eq!(decode(2.0), decode(1.0));
        assert!(decode(0.0) < 0.0);
    }
}

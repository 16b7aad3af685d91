//! Panasonic V-Log transfer function.
//!
//! V-Log is Panasonic's logarithmic encoding for VariCam and Lumix cameras,
//! paired with V-Gamut.
//!
//! # Range
//!
//! - Encoded: [0, 1] (signal range)
//! - Linear: Scene-referred, 18% grey near 0.423
//!
//! # Reference
//!
//! Panasonic V-Log/V-Gamut Reference Manual

/// Linear breakpoint.
pub const CUT1: f32 = 0.01;

/// Encoded breakpoint.
pub const CUT2: f32 = 0.181;

/// Linear offset inside the log.
pub const B: f32 = 0.00873;

/// Log slope (per decade).
pub const C: f32 = 0.241514;

/// Log offset.
pub const D: f32 = 0.598206;

/// V-Log encode: Linear to V-Log.
///
/// # Example
///
/// ```rust
/// use elzone_transfer::v_log::encode;
///
/// // 18% grey in V-Log is approximately 0.423
/// assert!((encode(0.18) - 0.423).abs() < 0.001);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear < CUT1 {
        5.6 * linear + 0.125
    } else {
        C * (linear + B).log10() + D
    }
}

/// V-Log decode: V-Log to linear. The input is clamped to [0, 1].
#[inline]
pub fn decode(log: f32) -> f32 {
    let v = crate::clamp01(log);
    if v < CUT2 {
        (v - 0.125) / 5.6
    } else {
        10.0_f32.powf((v - D) / C) - B
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for &l in &[0.0, 0.005, 0.01, 0.18, 0.5, 1.0, 2.0] {
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
        assert_abs_diff_eq!(decode(encode(0.18)), 0.18, epsilon = 1e-4);
    }

    #[test]
    fn test_continuous_at_breakpoint() {
        let toe = (CUT2 - 0.125) / 5.6;
        let log = 10.0_f32.powf((CUT2 - D) / C) - B;
        assert_abs_diff_eq!(toe, log, epsilon = 1e-5);
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
}

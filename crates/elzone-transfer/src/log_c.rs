//! ARRI LogC3 transfer function.
//!
//! LogC3 is ARRI's logarithmic encoding for ALEXA cameras (ALEXA Classic,
//! Mini, LF). Its parameters vary with the camera Exposure Index; this module
//! carries the EI 800 set, which is the camera's base sensitivity.
//!
//! # Range
//!
//! - Encoded: [0, 1] (signal range)
//! - Linear: Scene-referred, 18% grey near 0.391
//!
//! # Reference
//!
//! ARRI "ALEXA Log C Curve - Usage in VFX", EI 800 parameter row

/// LogC3 parameter set for one Exposure Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogC3Params {
    /// Linear breakpoint
    pub cut: f32,
    /// Linear scale inside the log
    pub a: f32,
    /// Linear offset inside the log
    pub b: f32,
    /// Log slope (per decade)
    pub c: f32,
    /// Log offset
    pub d: f32,
    /// Toe slope
    pub e: f32,
    /// Toe offset
    pub f: f32,
    /// Encoded breakpoint, `e * cut + f`
    pub log_cut: f32,
}

/// EI 800 parameters.
pub const EI800: LogC3Params = LogC3Params {
    cut: 0.010591,
    a: 5.555556,
    b: 0.052272,
    c: 0.247190,
    d: 0.385537,
    e: 5.367655,
    f: 0.092809,
    log_cut: 0.149658,
};

/// LogC encode: Linear to LogC3 (EI 800).
///
/// # Example
///
/// ```rust
/// use elzone_transfer::log_c::encode;
///
/// // 18% grey in LogC is approximately 0.391
/// assert!((encode(0.18) - 0.391).abs() < 0.001);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    encode_with(&EI800, linear)
}

/// LogC decode: LogC3 (EI 800) to linear.
///
/// # Example
///
/// ```rust
/// use elzone_transfer::log_c::decode;
///
/// assert!((decode(0.391007) - 0.18).abs() < 1e-4);
/// ```
#[inline]
pub fn decode(log: f32) -> f32 {
    decode_with(&EI800, log)
}

/// Encodes with an explicit parameter set.
#[inline]
pub fn encode_with(p: &LogC3Params, linear: f32) -> f32 {
    if linear > p.cut {
        p.c * (p.a * linear + p.b).log10() + p.d
    } else {
        p.e * linear + p.f
    }
}

/// Decodes with an explicit parameter set. The input is clamped to [0, 1].
#[inline]
pub fn decode_with(p: &LogC3Params, log: f32) -> f32 {
    let t = crate::clamp01(log);
    if t > p.log_cut {
        (10.0_f32.powf((t - p.d) / p.c) - p.b) / p.a
    } else {
        (t - p.f) / p.e
    }
}

/// Returns the LogC value for 18% grey.
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
        assert_eq!(EI800.a, 5.555556);
        assert_eq!(EI800.b, 0.052272);
        assert_eq!(EI800.c, 0.247190);
        assert_eq!(EI800.d, 0.385537);
        assert_eq!(EI800.e, 5.367655);
        assert_eq!(EI800.f, 0.092809);
        assert_eq!(EI800.log_cut, 0.149658);
        assert_eq!(EI800.cut, 0.010591);
        // log_cut is the toe evaluated at the linear cut
        assert_abs_diff_eq!(EI800.e * EI800.cut + EI800.f, EI800.log_cut, epsilon = 1e-6);
    }

    #[test]
    fn test_roundtrip() {
        for &l in &[0.0, 0.005, 0.18, 0.5, 1.0, 2.0, 10.0] {
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
        assert_abs_diff_eq!(middle_gray(), 0.391007, epsilon = 1e-5);
        assert_abs_diff_eq!(decode(middle_gray()), 0.18, epsilon = 1e-4);
    }

    #[test]
    fn test_continuous_at_breakpoint() {
        let t = EI800.log_cut;
        let toe = (t - EI800.f) / EI800.e;
        let log = (10.0_f32.powf((t - EI800.d) / EI800.c) - EI800.b) / EI800.a;
        assert_abs_diff_eq!(toe, log, epsilon = 1e-6);
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
    fn test_black_is_negative() {
        // Code 0 sits below the toe offset
        assert!(decode(0.0) < 0.0);
        assert_abs_diff_eq!(decode(EI800.f), 0.0, epsilon = 1e-7);
    }
}

//! Curve registry.
//!
//! One [`CurveDefinition`] per supported camera log encoding. Each definition
//! bundles the inverse OETF with the stop-domain tuning a false-color monitor
//! applies for that camera, and optionally the camera gamut matrix.
//!
//! Definitions are built once (with any configured overrides applied) and are
//! read-only for the lifetime of the [`CurveRegistry`].
//!
//! # Example
//!
//! ```rust
//! use elzone_color::CurveRegistry;
//!
//! let registry = CurveRegistry::standard();
//! let slog3 = registry.resolve("slog3");
//! assert_eq!(slog3.mid_grey, 0.18);
//!
//! // Unknown keys resolve to the identity definition.
//! assert_eq!(registry.resolve("typo").key, "identity");
//! ```

use crate::config::CurveOverride;
use crate::{ZoneError, ZoneResult};
use elzone_math::Mat3;
use elzone_primaries as primaries;
use elzone_transfer::{bmd_film, log_c, s_log3, v_log};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Key of the Sony S-Log3 / S-Gamut3.Cine curve.
pub const SLOG3: &str = "slog3";
/// Key of the ARRI LogC3 EI 800 / AWG3 curve.
pub const LOGC3_EI800: &str = "logc3_ei800";
/// Key of the Blackmagic Film Gen 5 curve.
pub const BMD_FILM_GEN5: &str = "bmd_film_gen5";
/// Key of the Panasonic V-Log / V-Gamut curve.
pub const VLOG: &str = "vlog";

/// Default 18% grey reference in linear light.
pub const DEFAULT_MID_GREY: f32 = 0.18;

/// Extra stop-domain offset on top of the BMD linear-side offset.
const BMD_NOISE_FLOOR: f32 = 0.0025;

/// A camera log encoding and its zone tuning.
///
/// Optional fields fall back to neutral values: no stop offset, contrast
/// scale 1, bias 0, no gamut conversion.
#[derive(Clone, Copy)]
pub struct CurveDefinition {
    /// Unique key, e.g. `"slog3"`.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Inverse OETF: encoded [0, 1] -> scene-linear.
    pub decode: fn(f32) -> f32,
    /// Forward OETF, where one is published.
    pub encode: Option<fn(f32) -> f32>,
    /// Linear value read as zero stops.
    pub mid_grey: f32,
    /// Additive offset applied to both sides of the stop ratio.
    pub stop_offset: Option<f32>,
    /// Multiplicative scale on the stop value.
    pub contrast: Option<f32>,
    /// Additive bias on the stop value, after contrast.
    pub bias: Option<f32>,
    /// Camera RGB -> CIE XYZ (D65).
    pub gamut: Option<Mat3>,
}

impl CurveDefinition {
    /// Creates a definition with neutral tuning and no gamut matrix.
    pub const fn new(key: &'static str, label: &'static str, decode: fn(f32) -> f32) -> Self {
        Self {
            key,
            label,
            decode,
            encode: None,
            mid_grey: DEFAULT_MID_GREY,
            stop_offset: None,
            contrast: None,
            bias: None,
            gamut: None,
        }
    }

    /// Sets the forward encode.
    pub const fn with_encode(mut self, encode: fn(f32) -> f32) -> Self {
        self.encode = Some(encode);
        self
    }

    /// Sets the camera RGB -> XYZ matrix.
    pub const fn with_gamut(mut self, to_xyz: Mat3) -> Self {
        self.gamut = Some(to_xyz);
        self
    }

    /// Sets the stop-domain offset.
    pub const fn with_stop_offset(mut self, offset: f32) -> Self {
        self.stop_offset = Some(offset);
        self
    }

    /// Sets contrast scale and bias.
    pub const fn with_tuning(mut self, contrast: f32, bias: f32) -> Self {
        self.contrast = Some(contrast);
        self.bias = Some(bias);
        self
    }

    /// Returns a copy with contrast and bias reset to neutral.
    pub const fn untuned(mut self) -> Self {
        self.contrast = None;
        self.bias = None;
        self
    }

    /// Stop offset, 0 when unset.
    #[inline]
    pub fn stop_offset(&self) -> f32 {
        self.stop_offset.unwrap_or(0.0)
    }

    /// Contrast scale, 1 when unset.
    #[inline]
    pub fn contrast(&self) -> f32 {
        self.contrast.unwrap_or(1.0)
    }

    /// Stop bias, 0 when unset.
    #[inline]
    pub fn bias(&self) -> f32 {
        self.bias.unwrap_or(0.0)
    }

    /// Decodes one encoded sample to linear light.
    #[inline]
    pub fn decode(&self, v: f32) -> f32 {
        (self.decode)(v)
    }

    fn apply_override(&mut self, ov: &CurveOverride) -> ZoneResult<()> {
        let invalid = |field, value| ZoneError::InvalidTuning {
            curve: self.key.to_string(),
            field,
            value,
        };
        if let Some(g) = ov.mid_grey {
            if !g.is_finite() || g <= 0.0 {
                return Err(invalid("mid_grey", g));
            }
            self.mid_grey = g;
        }
        if let Some(o) = ov.stop_offset {
            if !o.is_finite() || o < 0.0 {
                return Err(invalid("stop_offset", o));
            }
            self.stop_offset = Some(o);
        }
        if let Some(c) = ov.contrast {
            if !c.is_finite() || c == 0.0 {
                return Err(invalid("contrast", c));
            }
            self.contrast = Some(c);
        }
        if let Some(b) = ov.bias {
            if !b.is_finite() {
                return Err(invalid("bias", b));
            }
            self.bias = Some(b);
        }
        Ok(())
    }
}

impl fmt::Debug for CurveDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveDefinition")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("mid_grey", &self.mid_grey)
            .field("stop_offset", &self.stop_offset)
            .field("contrast", &self.contrast)
            .field("bias", &self.bias)
            .field("has_encode", &self.encode.is_some())
            .field("has_gamut", &self.gamut.is_some())
            .finish()
    }
}

fn identity(v: f32) -> f32 {
    v
}

/// Fallback for unknown keys: the sample is taken as already linear.
pub const IDENTITY: CurveDefinition =
    CurveDefinition::new("identity", "Linear (no decode)", identity).with_encode(identity);

/// Sony S-Log3 on S-Gamut3.Cine.
pub const SONY_SLOG3: CurveDefinition =
    CurveDefinition::new(SLOG3, "S-Gamut3.Cine / S-Log3 (Sony)", s_log3::decode)
        .with_encode(s_log3::encode)
        .with_gamut(primaries::S_GAMUT3_CINE_TO_XYZ);

/// ARRI LogC3 EI 800 on ARRI Wide Gamut 3.
pub const ARRI_LOGC3_EI800: CurveDefinition =
    CurveDefinition::new(LOGC3_EI800, "ARRI LogC3 (EI 800)", log_c::decode)
        .with_encode(log_c::encode)
        .with_gamut(primaries::ARRI_WIDE_GAMUT_3_TO_XYZ);

/// Blackmagic Film Gen 5 on Blackmagic Wide Gamut Gen 5.
///
/// The stop offset lifts the noise floor out of the log2; the contrast and
/// bias re-centre the zone ramp for this curve's flatter mid-tones.
pub const BLACKMAGIC_FILM_GEN5: CurveDefinition =
    CurveDefinition::new(BMD_FILM_GEN5, "Blackmagic Film Gen 5", bmd_film::bmd_film_gen5_decode)
        .with_encode(bmd_film::bmd_film_gen5_encode)
        .with_gamut(primaries::BMD_WIDE_GAMUT_GEN5_TO_XYZ)
        .with_stop_offset(bmd_film::LIN_SIDE_OFFSET as f32 + BMD_NOISE_FLOOR)
        .with_tuning(1.08, 0.35);

/// Panasonic V-Log on V-Gamut.
pub const PANASONIC_VLOG: CurveDefinition =
    CurveDefinition::new(VLOG, "Panasonic V-Log / V-Gamut", v_log::decode)
        .with_encode(v_log::encode)
        .with_gamut(primaries::V_GAMUT_TO_XYZ);

/// Ordered set of curve definitions.
#[derive(Debug, Clone)]
pub struct CurveRegistry {
    curves: Vec<CurveDefinition>,
}

impl CurveRegistry {
    /// Registry with every built-in curve, in menu order.
    pub fn standard() -> Self {
        Self {
            curves: vec![SONY_SLOG3, ARRI_LOGC3_EI800, BLACKMAGIC_FILM_GEN5, PANASONIC_VLOG],
        }
    }

    /// Registry from explicit definitions.
    ///
    /// Later definitions replace earlier ones with the same key.
    pub fn from_definitions(defs: impl IntoIterator<Item = CurveDefinition>) -> Self {
        let mut curves: Vec<CurveDefinition> = Vec::new();
        for def in defs {
            match curves.iter_mut().find(|c| c.key == def.key) {
                Some(slot) => *slot = def,
                None => curves.push(def),
            }
        }
        Self { curves }
    }

    /// Applies per-curve tuning overrides.
    ///
    /// Overrides naming an unregistered curve are skipped with a warning.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, CurveOverride>) -> ZoneResult<Self> {
        for (key, ov) in overrides {
            match self.curves.iter_mut().find(|c| c.key == key) {
                Some(def) => {
                    def.apply_override(ov)?;
                    debug!(curve = %key, ?ov, "Applied curve override");
                }
                None => warn!(curve = %key, "Override for unregistered curve ignored"),
            }
        }
        Ok(self)
    }

    /// Looks up a curve by key.
    pub fn get(&self, key: &str) -> Option<&CurveDefinition> {
        self.curves.iter().find(|c| c.key == key)
    }

    /// Looks up a curve, falling back to [`IDENTITY`] for unknown keys.
    pub fn resolve(&self, key: &str) -> &CurveDefinition {
        self.get(key).unwrap_or(&IDENTITY)
    }

    /// Returns true if `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CurveDefinition> {
        self.curves.iter()
    }

    /// Registered keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.curves.iter().map(|c| c.key)
    }

    /// Number of registered curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns true if no curve is registered.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

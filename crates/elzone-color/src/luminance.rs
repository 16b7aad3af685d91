//! Luminance estimation from linear Rec.709 RGB.

use crate::ZoneError;
use elzone_core::luminance_rec709;
use elzone_math::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a linear triple is reduced to one exposure value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LumaMode {
    /// Largest channel. Saturated highlights read hot, as on a monitor.
    #[default]
    Max,
    /// Mean of the three channels.
    Average,
    /// Rec.709 luma weights.
    Weighted,
}

impl LumaMode {
    /// All modes, default first.
    pub const ALL: [LumaMode; 3] = [LumaMode::Max, LumaMode::Average, LumaMode::Weighted];

    /// Config / CLI name.
    pub const fn name(self) -> &'static str {
        match self {
            LumaMode::Max => "max",
            LumaMode::Average => "average",
            LumaMode::Weighted => "weighted",
        }
    }

    /// Reduces a linear triple.
    #[inline]
    pub fn apply(self, rgb: Vec3) -> f32 {
        match self {
            LumaMode::Max => rgb.max_element(),
            LumaMode::Average => rgb.mean(),
            LumaMode::Weighted => luminance_rec709(rgb.to_array()),
        }
    }
}

impl fmt::Display for LumaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LumaMode {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max" | "maxrgb" => Ok(LumaMode::Max),
            "average" | "avg" | "avgrgb" | "mean" => Ok(LumaMode::Average),
            "weighted" | "rec709" | "luma" => Ok(LumaMode::Weighted),
            _ => Err(ZoneError::UnknownLumaMode(s.to_string())),
        }
    }
}

/// Reduces a linear RGB triple with the given mode.
#[inline]
pub fn luminance(rgb: [f32; 3], mode: LumaMode) -> f32 {
    mode.apply(Vec3::from_array(rgb))
}

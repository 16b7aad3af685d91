//! Camera gamut to Rec.709 conversion.
//!
//! Linear camera RGB goes through the curve's camera->XYZ matrix and then the
//! fixed XYZ->Rec.709 matrix. Curves without a matrix pass through untouched.

use crate::curve::CurveDefinition;
use elzone_math::{Mat3, Vec3};
use elzone_primaries::XYZ_TO_REC709;

/// Converts linear camera RGB to linear Rec.709 for one curve.
///
/// Output may carry small negative components; callers floor them before
/// estimating luminance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutConverter {
    to_xyz: Option<Mat3>,
}

impl GamutConverter {
    /// Pass-through converter.
    pub const IDENTITY: Self = Self { to_xyz: None };

    /// Builds the converter for a curve's gamut, if it has one.
    pub fn for_curve(curve: &CurveDefinition) -> Self {
        Self { to_xyz: curve.gamut }
    }

    /// Returns true if this converter changes its input.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.to_xyz.is_none()
    }

    /// Camera RGB -> XYZ -> Rec.709.
    #[inline]
    pub fn convert(&self, rgb: Vec3) -> Vec3 {
        match &self.to_xyz {
            Some(to_xyz) => XYZ_TO_REC709 * (*to_xyz * rgb),
            None => rgb,
        }
    }
}

impl Default for GamutConverter {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One-shot conversion of a linear triple into the reference gamut.
pub fn to_reference_gamut(curve: &CurveDefinition, rgb: [f32; 3]) -> [f32; 3] {
    GamutConverter::for_curve(curve).convert(Vec3::from_array(rgb)).to_array()
}

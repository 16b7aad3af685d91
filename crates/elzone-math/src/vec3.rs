//! RGB/XYZ triplet.

use std::ops::Mul;

/// Linear RGB or XYZ triplet.
///
/// ```rust
/// use elzone_math::Vec3;
///
/// let rgb = Vec3::new(0.5, -0.1, 0.25);
/// assert_eq!(rgb.max_element(), 0.5);
/// assert_eq!(rgb.max(Vec3::ZERO).y, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// R or X
    pub x: f32,
    /// G or Y
    pub y: f32,
    /// B or Z
    pub z: f32,
}

impl Vec3 {
    /// Black.
    pub const ZERO: Self = Self::splat(0.0);
    /// Unit white.
    pub const ONE: Self = Self::splat(1.0);

    /// Triplet from channels.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Neutral triplet.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Triplet from `[r, g, b]`.
    #[inline]
    pub const fn from_array([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }

    /// `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Per-channel max. `v.max(Vec3::ZERO)` floors negatives; NaN channels become 0.
    #[inline]
    pub fn max(self, floor: Self) -> Self {
        Self::new(self.x.max(floor.x), self.y.max(floor.y), self.z.max(floor.z))
    }

    /// Brightest channel.
    #[inline]
    pub fn max_element(self) -> f32 {
        self.x.max(self.y).max(self.z)
    }

    /// Unweighted channel average.
    #[inline]
    pub fn mean(self) -> f32 {
        (self.x + self.y + self.z) / 3.0
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

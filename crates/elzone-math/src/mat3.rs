//! Row-major 3x3 matrix applied to column vectors.
//!
//! ```text
//! | m00 m01 m02 |   | r |
//! | m10 m11 m12 | * | g |   each output channel is one row dotted with the input
//! | m20 m21 m22 |   | b |
//! ```

use crate::Vec3;
use std::ops::Mul;

/// Camera RGB -> XYZ or XYZ -> display RGB matrix.
///
/// ```rust
/// use elzone_math::{Mat3, Vec3};
///
/// let grey = Vec3::splat(0.18);
/// assert_eq!(Mat3::IDENTITY * grey, grey);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Rows, top to bottom.
    pub m: [[f32; 3]; 3],
}

#[inline]
fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

impl Mat3 {
    /// Identity.
    pub const IDENTITY: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Builds from rows as published in colorimetry tables.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Builds from three column vectors, e.g. the XYZ of each primary.
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_rows([[c0.x, c1.x, c2.x], [c0.y, c1.y, c2.y], [c0.z, c1.z, c2.z]])
    }

    fn col(&self, j: usize) -> [f32; 3] {
        [self.m[0][j], self.m[1][j], self.m[2][j]]
    }

    /// Scalar triple product of the columns.
    pub fn determinant(&self) -> f32 {
        dot(self.col(0), cross(self.col(1), self.col(2)))
    }

    /// Inverse, or `None` when the columns are (nearly) coplanar.
    pub fn inverse(&self) -> Option<Self> {
        let (c0, c1, c2) = (self.col(0), self.col(1), self.col(2));
        let det = dot(c0, cross(c1, c2));
        if det.abs() < 1e-10 {
            return None;
        }
        let scale = |r: [f32; 3]| r.map(|v| v / det);
        Some(Self::from_rows([
            scale(cross(c1, c2)),
            scale(cross(c2, c0)),
            scale(cross(c0, c1)),
        ]))
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        let v = rhs.to_array();
        Vec3::new(dot(self.m[0], v), dot(self.m[1], v), dot(self.m[2], v))
    }
}

/// `a * b` applies `b` first.
impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (c0, c1, c2) = (rhs.col(0), rhs.col(1), rhs.col(2));
        Self::from_rows(self.m.map(|row| [dot(row, c0), dot(row, c1), dot(row, c2)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Mat3 = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);

    fn assert_identity(m: Mat3) {
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((m.m[i][j] - expected).abs() < 1e-5, "{m:?}");
            }
        }
    }

    #[test]
    fn test_rows_dot_vector() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 0.0], [0.0, 0.0, 2.0]]);
        assert_eq!(m * Vec3::ONE, Vec3::new(6.0, 1.0, 2.0));
    }

    #[test]
    fn test_col_vecs_become_columns() {
        let m = Mat3::from_col_vecs(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(m.m[0], [1.0, 4.0, 7.0]);
        assert_eq!(m * Vec3::new(0.0, 1.0, 0.0), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_determinant() {
        assert!((SAMPLE.determinant() - 1.0).abs() < 1e-6);
        assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn test_inverse_both_sides() {
        let inv = SAMPLE.inverse().unwrap();
        assert_identity(SAMPLE * inv);
        assert_identity(inv * SAMPLE);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_product_applies_right_first() {
        let scale_r = Mat3::from_rows([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let swap_rg = Mat3::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let v = Vec3::new(1.0, 3.0, 5.0);
        assert_eq!((scale_r * swap_rg) * v, scale_r * (swap_rg * v));
        assert_eq!((scale_r * swap_rg) * v, Vec3::new(6.0, 1.0, 5.0));
    }
}

//! Snapping rules for committing a continuous rotation back to the lattice.
//!
//! Positions snap to the half-integer grid; orientations snap to the
//! nearest of the 24 axis-aligned rotations, stored exactly as a signed
//! integer matrix so repeated turns can never accumulate drift.

use cgmath::{Matrix3, Vector3};

/// Rounds a coordinate to the nearest half-grid unit (`round(v·2)/2`).
///
/// Idempotent on values that are already multiples of 0.5.
pub fn snap_half(v: f32) -> f32 {
    (v * 2.0).round() / 2.0
}

/// Snaps each component of a position to the half-integer grid.
pub fn snap_point(v: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(snap_half(v.x), snap_half(v.y), snap_half(v.z))
}

/// An axis-aligned rotation: a signed permutation matrix with determinant
/// +1, one of the 24 orientations a cubie can hold at rest.
///
/// Stored column-major to match [`cgmath::Matrix3`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridRotation([[i8; 3]; 3]);
impl GridRotation {
    /// The identity rotation.
    pub const IDENTITY: GridRotation = GridRotation([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);

    /// Snaps a continuous rotation matrix to the nearest axis-aligned
    /// rotation by rounding each entry.
    ///
    /// The input must be close to axis-aligned (within commit-time float
    /// error of a 90° multiple); rounding an arbitrary matrix may not
    /// produce a rotation at all.
    pub fn from_matrix(m: Matrix3<f32>) -> GridRotation {
        GridRotation([
            [
                m.x.x.round() as i8,
                m.x.y.round() as i8,
                m.x.z.round() as i8,
            ],
            [
                m.y.x.round() as i8,
                m.y.y.round() as i8,
                m.y.z.round() as i8,
            ],
            [
                m.z.x.round() as i8,
                m.z.y.round() as i8,
                m.z.z.round() as i8,
            ],
        ])
    }

    /// Converts back to a continuous matrix.
    pub fn to_matrix(self) -> Matrix3<f32> {
        let [x, y, z] = self.0;
        Matrix3::from_cols(
            Vector3::new(x[0] as f32, x[1] as f32, x[2] as f32),
            Vector3::new(y[0] as f32, y[1] as f32, y[2] as f32),
            Vector3::new(z[0] as f32, z[1] as f32, z[2] as f32),
        )
    }

    /// Applies the rotation to a vector.
    pub fn transform(self, v: Vector3<f32>) -> Vector3<f32> {
        let m = self.0;
        Vector3::new(
            m[0][0] as f32 * v.x + m[1][0] as f32 * v.y + m[2][0] as f32 * v.z,
            m[0][1] as f32 * v.x + m[1][1] as f32 * v.y + m[2][1] as f32 * v.z,
            m[0][2] as f32 * v.x + m[1][2] as f32 * v.y + m[2][2] as f32 * v.z,
        )
    }

    /// Composition: `self ∘ rhs` (apply `rhs` first).
    pub fn compose(self, rhs: GridRotation) -> GridRotation {
        let a = self.0;
        let b = rhs.0;
        let mut out = [[0i8; 3]; 3];
        for (out_col, b_col) in out.iter_mut().zip(&b) {
            for r in 0..3 {
                out_col[r] = (0..3).map(|k| a[k][r] * b_col[k]).sum();
            }
        }
        GridRotation(out)
    }

    /// Determinant; +1 for every proper rotation.
    pub fn determinant(self) -> i8 {
        let m = self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[2][1] * m[1][2])
            - m[1][0] * (m[0][1] * m[2][2] - m[2][1] * m[0][2])
            + m[2][0] * (m[0][1] * m[1][2] - m[1][1] * m[0][2])
    }
}
impl Default for GridRotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

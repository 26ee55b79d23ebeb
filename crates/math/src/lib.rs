//! Transform math for the text-mode 3D pipeline.
//!
//! This module intentionally stays small and deterministic: plain `f32`
//! value types, no SIMD, no unsafe. Points are treated as row vectors in
//! homogeneous coordinates, so a transform is `point * matrix` with the
//! translation terms in the fourth row.

pub mod transform;

pub use transform::{projection, rotation_x, rotation_z, scale};

/// 3D point. Immutable value type; no identity beyond its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// 4x4 homogeneous transform, row-vector convention.
///
/// `Default` (and [`Mat4::ZERO`]) is the **all-zero matrix, not identity**:
/// builders populate only the entries they need and rely on the rest staying
/// zero (the projection matrix has exactly five non-zero entries). Use
/// [`Mat4::IDENTITY`] when a pass-through transform is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };
}

/// Multiply `p` (as `(x, y, z, 1)`) by `m` and perspective-divide.
///
/// The divide is skipped when the resulting `w` is zero: the undivided point
/// is returned as-is. That degenerate case is deliberate, not an error -
/// pure scale/rotation matrices with an unset `w` column produce `w == 0`
/// and must pass through unchanged.
pub fn transform_point(p: Point3, m: &Mat4) -> Point3 {
    let mut out = Point3::new(
        p.x * m.m[0][0] + p.y * m.m[1][0] + p.z * m.m[2][0] + m.m[3][0],
        p.x * m.m[0][1] + p.y * m.m[1][1] + p.z * m.m[2][1] + m.m[3][1],
        p.x * m.m[0][2] + p.y * m.m[1][2] + p.z * m.m[2][2] + m.m[3][2],
    );
    let w = p.x * m.m[0][3] + p.y * m.m[1][3] + p.z * m.m[2][3] + m.m[3][3];

    if w != 0.0 {
        out.x /= w;
        out.y /= w;
        out.z /= w;
    }
    out
}

//! Matrix builders: rotations, perspective projection, and scale.

use crate::Mat4;

/// Rotation about the Z axis by `theta` radians.
pub fn rotation_z(theta: f32) -> Mat4 {
    let (sin, cos) = theta.sin_cos();
    let mut m = Mat4::ZERO;
    m.m[0][0] = cos;
    m.m[0][1] = sin;
    m.m[1][0] = -sin;
    m.m[1][1] = cos;
    m.m[2][2] = 1.0;
    m.m[3][3] = 1.0;
    m
}

/// Rotation about the X axis by `theta` radians.
pub fn rotation_x(theta: f32) -> Mat4 {
    let (sin, cos) = theta.sin_cos();
    let mut m = Mat4::ZERO;
    m.m[0][0] = 1.0;
    m.m[1][1] = cos;
    m.m[1][2] = sin;
    m.m[2][1] = -sin;
    m.m[2][2] = cos;
    m.m[3][3] = 1.0;
    m
}

/// Perspective projection matrix.
///
/// `aspect` is screen height over width. Exactly five entries are non-zero:
/// the x/y scale terms, the two z-range remapping terms, and the entry that
/// moves z into w for the perspective divide. Everything else relies on the
/// zero default.
pub fn projection(aspect: f32, fov_degrees: f32, near: f32, far: f32) -> Mat4 {
    let fov_scale = 1.0 / (fov_degrees * 0.5 / 180.0 * std::f32::consts::PI).tan();
    let mut m = Mat4::ZERO;
    m.m[0][0] = aspect * fov_scale;
    m.m[1][1] = fov_scale;
    m.m[2][2] = far / (far - near);
    m.m[3][2] = (-far * near) / (far - near);
    m.m[2][3] = 1.0;
    m
}

/// Axis-aligned scale.
pub fn scale(sx: f32, sy: f32, sz: f32) -> Mat4 {
    let mut m = Mat4::ZERO;
    m.m[0][0] = sx;
    m.m[1][1] = sy;
    m.m[2][2] = sz;
    m.m[3][3] = 1.0;
    m
}

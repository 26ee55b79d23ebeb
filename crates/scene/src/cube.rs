//! CubeScene: the spinning unit cube.
//!
//! Per tick: clear to background, advance the rotation angle, rotate every
//! triangle about Z then X, push it forward along Z, project, stretch X to
//! compensate glyph aspect, map into pixel space, and draw the wireframe.
//! All of that happens synchronously inside `on_update`, so composition
//! always sees a settled frame.

use anyhow::Result;

use tui_spin_math::{projection, rotation_x, rotation_z, scale, transform_point, Mat4, Point3};
use tui_spin_term::FrameBuffer;
use tui_spin_types::{
    Glyph, TermColor, CAMERA_Z_OFFSET, FAR_PLANE, FOV_DEGREES, NEAR_PLANE, THETA_STEP, X_STRETCH,
};

use crate::mesh::{unit_cube, Mesh};
use crate::{Scene, ScreenInfo};

pub struct CubeScene {
    mesh: Mesh,
    mat_proj: Mat4,
    theta: f32,
    glyph: Glyph,
    color: TermColor,
    background: TermColor,
}

impl CubeScene {
    pub fn new(background: TermColor) -> Self {
        Self {
            mesh: Mesh::default(),
            mat_proj: Mat4::ZERO,
            theta: 0.0,
            glyph: Glyph::Full,
            color: TermColor::White,
            background,
        }
    }

    /// Override the wireframe glyph/color (full white blocks by default).
    pub fn with_style(mut self, glyph: Glyph, color: TermColor) -> Self {
        self.glyph = glyph;
        self.color = color;
        self
    }

    /// Current rotation angle in radians.
    pub fn angle(&self) -> f32 {
        self.theta
    }

    /// Reset the rotation angle, e.g. to replay a known pose.
    pub fn set_angle(&mut self, theta: f32) {
        self.theta = theta;
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.tris.len()
    }

    fn project_vertex(&self, p: Point3, stretch: &Mat4, rot_z: &Mat4, rot_x: &Mat4, fb: &FrameBuffer) -> (i32, i32) {
        let rotated_z = transform_point(p, rot_z);
        let rotated_zx = transform_point(rotated_z, rot_x);
        let translated = Point3::new(rotated_zx.x, rotated_zx.y, rotated_zx.z + CAMERA_Z_OFFSET);
        let projected = transform_point(translated, &self.mat_proj);
        let stretched = transform_point(projected, stretch);

        // Normalized device coordinates to pixel space.
        let sx = (stretched.x + 1.0) * 0.5 * f32::from(fb.width());
        let sy = (stretched.y + 1.0) * 0.5 * f32::from(fb.height());
        (sx as i32, sy as i32)
    }
}

impl Default for CubeScene {
    fn default() -> Self {
        Self::new(TermColor::White)
    }
}

impl Scene for CubeScene {
    fn on_create(&mut self, screen: ScreenInfo) -> Result<()> {
        self.mesh = unit_cube();
        self.mat_proj = projection(screen.aspect(), FOV_DEGREES, NEAR_PLANE, FAR_PLANE);
        Ok(())
    }

    fn on_update(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        fb.fill_all(Glyph::Space, self.background);

        self.theta += THETA_STEP;
        let rot_z = rotation_z(self.theta);
        let rot_x = rotation_x(self.theta);
        let stretch = scale(X_STRETCH, 1.0, 1.0);

        for tri in &self.mesh.tris {
            let p0 = self.project_vertex(tri.p[0], &stretch, &rot_z, &rot_x, fb);
            let p1 = self.project_vertex(tri.p[1], &stretch, &rot_z, &rot_x, fb);
            let p2 = self.project_vertex(tri.p[2], &stretch, &rot_z, &rot_x, fb);
            fb.draw_triangle(p0.0, p0.1, p1.0, p1.1, p2.0, p2.1, self.glyph, self.color);
        }

        Ok(())
    }
}

//! Scene layer: what gets drawn each tick.
//!
//! A scene is a capability with two lifecycle hooks: `on_create`, called
//! exactly once before the first tick, and `on_update`, called once per tick
//! with the engine's framebuffer on loan. The scene must finish drawing
//! before returning - the engine composes the frame immediately after, so
//! the `&mut` borrow is also the synchronization contract: no drawing ever
//! overlaps composition.

pub mod cube;
pub mod mesh;

use anyhow::Result;

use tui_spin_term::FrameBuffer;

pub use cube::CubeScene;
pub use mesh::{unit_cube, Mesh, Triangle};

/// Fixed screen geometry handed to scenes at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenInfo {
    pub width: u16,
    pub height: u16,
}

impl ScreenInfo {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Height over width, the ratio the projection matrix is built from.
    pub fn aspect(&self) -> f32 {
        f32::from(self.height) / f32::from(self.width)
    }
}

/// A drawable component attached to the engine.
pub trait Scene {
    /// One-time setup (mesh construction, projection matrix). An error here
    /// is a fatal startup failure.
    fn on_create(&mut self, screen: ScreenInfo) -> Result<()>;

    /// Advance animation state and redraw into `fb`. Runs to completion
    /// before the frame is composed.
    fn on_update(&mut self, fb: &mut FrameBuffer) -> Result<()>;
}

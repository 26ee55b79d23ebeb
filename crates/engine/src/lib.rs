//! Engine: owns the framebuffer and runs the render loop.
//!
//! The cycle is create-once / update-every-tick / compose / present. The
//! engine lends its framebuffer to the scene for exactly one `on_update`
//! call, composes the settled result into a cached text blob, and writes it
//! to the terminal. Ticks are paced to a fixed interval; cancellation is
//! only ever observed between ticks, never mid-frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use tui_spin_scene::{Scene, ScreenInfo};
use tui_spin_term::{encode_frame_into, FrameBuffer, Presenter};
use tui_spin_types::{TermColor, TICK_MS};

/// Cloneable cancellation flag checked at tick boundaries.
///
/// Cancelling never interrupts a frame in progress; the loop finishes the
/// current tick and exits before starting the next one.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

pub struct Engine {
    fb: FrameBuffer,
    frame: String,
    presenter: Presenter,
    tick: Duration,
}

impl Engine {
    /// Construct with fixed cell dimensions and a background color. The
    /// dimensions never change for the engine's lifetime.
    pub fn new(width: u16, height: u16, background: TermColor) -> Self {
        Self {
            fb: FrameBuffer::new(width, height, background),
            frame: String::new(),
            presenter: Presenter::new(),
            tick: Duration::from_millis(u64::from(TICK_MS)),
        }
    }

    pub fn width(&self) -> u16 {
        self.fb.width()
    }

    pub fn height(&self) -> u16 {
        self.fb.height()
    }

    pub fn screen(&self) -> ScreenInfo {
        ScreenInfo::new(self.fb.width(), self.fb.height())
    }

    /// The last composed frame (empty before the first tick).
    pub fn rendered_text(&self) -> &str {
        &self.frame
    }

    /// Hide the cursor before the first frame.
    pub fn enter(&mut self) -> Result<()> {
        self.presenter.enter()
    }

    /// Restore the terminal. Safe to call after a failed run.
    pub fn exit(&mut self) -> Result<()> {
        self.presenter.exit()
    }

    /// Run the scene's one-time setup. A failure here aborts startup.
    pub fn start(&mut self, scene: &mut dyn Scene) -> Result<()> {
        log::info!(
            "engine start: {}x{} cells, tick {:?}",
            self.fb.width(),
            self.fb.height(),
            self.tick
        );
        scene.on_create(self.screen())
    }

    /// Advance the scene one tick and compose the frame into the cache.
    ///
    /// Returns the composed text; it stays cached until the next call.
    pub fn update_and_compose(&mut self, scene: &mut dyn Scene) -> Result<&str> {
        scene.on_update(&mut self.fb)?;
        encode_frame_into(&self.fb, &mut self.frame);
        Ok(&self.frame)
    }

    /// Write the cached frame to the terminal. Failure is fatal.
    pub fn present(&mut self) -> Result<()> {
        self.presenter.present(&self.frame)
    }

    /// One full tick: update, compose, present.
    pub fn tick(&mut self, scene: &mut dyn Scene) -> Result<()> {
        self.update_and_compose(scene)?;
        self.present()
    }

    /// The render loop: `start` once, then tick at a fixed cadence until
    /// `cancel` is set. The token is checked once per tick boundary.
    pub fn run(&mut self, scene: &mut dyn Scene, cancel: &CancelToken) -> Result<()> {
        self.start(scene)?;

        while !cancel.is_cancelled() {
            let frame_start = Instant::now();
            self.tick(scene)?;

            if let Some(remaining) = self.tick_duration().checked_sub(frame_start.elapsed()) {
                thread::sleep(remaining);
            }
        }

        log::info!("engine stopped: cancellation observed");
        Ok(())
    }

    fn tick_duration(&self) -> Duration {
        self.tick
    }
}

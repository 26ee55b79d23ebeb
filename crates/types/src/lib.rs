//! Shared types module - closed enumerations and tuning constants
//!
//! This module defines the glyph and color vocabularies of the text-mode
//! renderer plus the numeric constants the pipeline is tuned with. All types
//! are pure data with no external dependencies, usable from any crate in the
//! workspace (math, rendering, engine).
//!
//! # Render Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `THETA_STEP` | 0.2 | Rotation advance per tick (radians) |
//! | `CAMERA_Z_OFFSET` | 2.0 | Forward translation before projection |
//! | `X_STRETCH` | 2.5 | Post-projection X scale (glyph aspect compensation) |
//! | `FOV_DEGREES` | 90.0 | Vertical field of view |
//! | `NEAR_PLANE` | 0.1 | Near clip distance |
//! | `FAR_PLANE` | 1000.0 | Far clip distance |
//!
//! # Screen Defaults
//!
//! The default raster is 300x100 character cells with a white background.
//! Terminal glyphs are roughly twice as tall as they are wide, which is why
//! the X axis is stretched after projection rather than the mesh itself.
//!
//! # Examples
//!
//! ```
//! use tui_spin_types::{Glyph, TermColor};
//!
//! assert_eq!(Glyph::Full.ch(), '\u{2588}');
//! assert_eq!(Glyph::Space.ch(), ' ');
//! assert_eq!(TermColor::Red.escape(), "\x1b[31m");
//! ```

/// Default screen width in character cells.
pub const DEFAULT_SCREEN_WIDTH: u16 = 300;

/// Default screen height in character cells.
pub const DEFAULT_SCREEN_HEIGHT: u16 = 100;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Rotation angle increment per tick, in radians.
pub const THETA_STEP: f32 = 0.2;

/// Camera offset: meshes are pushed this far down +Z before projection.
pub const CAMERA_Z_OFFSET: f32 = 2.0;

/// Post-projection X scale compensating the terminal glyph aspect ratio.
pub const X_STRETCH: f32 = 2.5;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 90.0;

/// Near clip plane distance.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clip plane distance.
pub const FAR_PLANE: f32 = 1000.0;

/// The five block-density symbols used to simulate pixel brightness.
///
/// `Space` is the lightest glyph; a framebuffer cell is always painted with
/// some glyph, so `Space` doubles as the cleared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// `█` U+2588 FULL BLOCK
    Full,
    /// `▓` U+2593 DARK SHADE
    Dark,
    /// `▒` U+2592 MEDIUM SHADE
    Medium,
    /// `░` U+2591 LIGHT SHADE
    Light,
    /// A plain space, the lightest density.
    Space,
}

impl Glyph {
    /// The character this glyph renders as.
    pub const fn ch(self) -> char {
        match self {
            Glyph::Full => '\u{2588}',
            Glyph::Dark => '\u{2593}',
            Glyph::Medium => '\u{2592}',
            Glyph::Light => '\u{2591}',
            Glyph::Space => ' ',
        }
    }
}

/// The seven terminal foreground colors the renderer can paint with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermColor {
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl TermColor {
    /// The SGR escape sequence selecting this foreground color.
    pub const fn escape(self) -> &'static str {
        match self {
            TermColor::Red => "\x1b[31m",
            TermColor::Green => "\x1b[32m",
            TermColor::Yellow => "\x1b[33m",
            TermColor::Blue => "\x1b[34m",
            TermColor::Purple => "\x1b[35m",
            TermColor::Cyan => "\x1b[36m",
            TermColor::White => "\x1b[37m",
        }
    }
}

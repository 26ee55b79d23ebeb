//! Text-mode raster layer.
//!
//! This crate owns everything between projected screen coordinates and bytes
//! on the terminal:
//!
//! - [`fb`]: the cell grid with bounds-checked writes
//! - [`raster`]: wireframe line/triangle drawing into the grid
//! - [`encode`]: composing a frame into one presentable text blob
//! - [`presenter`]: flushing that blob to stdout
//!
//! Everything except the presenter is pure and unit-testable.

pub mod encode;
pub mod fb;
pub mod presenter;
pub mod raster;

pub use encode::{encode_frame, encode_frame_into, CURSOR_HOME};
pub use fb::{Cell, FrameBuffer};
pub use presenter::Presenter;

//! tui-spin (workspace facade crate).
//!
//! This package keeps a stable `tui_spin::{engine,math,scene,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_spin_engine as engine;
pub use tui_spin_math as math;
pub use tui_spin_scene as scene;
pub use tui_spin_term as term;
pub use tui_spin_types as types;

//! Spinning-cube runner (default binary).
//!
//! Renders the cube scene to the current terminal at a fixed tick rate.
//! Type `q` followed by Enter to quit; the loop also ends cleanly if stdin
//! closes. Diagnostics go to stderr via `env_logger` (RUST_LOG=info) so the
//! frame stream on stdout stays intact.
//!
//! Zoom the terminal out (usually ctrl + minus) until 300x100 cells fit.

use std::io::{self, BufRead};
use std::thread;

use anyhow::Result;

use tui_spin::engine::{CancelToken, Engine};
use tui_spin::scene::CubeScene;
use tui_spin::types::{TermColor, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};

fn main() -> Result<()> {
    env_logger::init();

    let mut engine = Engine::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT, TermColor::White);
    let mut scene = CubeScene::new(TermColor::White);

    let cancel = CancelToken::new();
    spawn_quit_listener(cancel.clone());

    engine.enter()?;
    let result = engine.run(&mut scene, &cancel);

    // Always try to restore terminal state.
    let _ = engine.exit();
    result
}

/// Cancel the render loop when the user types `q` (or stdin closes).
///
/// The terminal stays in cooked mode, so input is line-buffered and never
/// disturbs the frame stream.
fn spawn_quit_listener(cancel: CancelToken) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) if line.trim().eq_ignore_ascii_case("q") => break,
                Ok(_) => continue,
                Err(_) => break,
            }
        }
        cancel.cancel();
    });
}

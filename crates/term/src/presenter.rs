//! Presenter: flushes composed frames to a real terminal.
//!
//! Frames arrive fully encoded (escape tags included), so presenting is a
//! verbatim write. The presenter only manages cursor visibility around the
//! run; it deliberately avoids raw mode and the alternate screen so the
//! frame's own `\n` framing reaches the terminal untouched.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::ResetColor,
    QueueableCommand,
};

pub struct Presenter {
    stdout: io::Stdout,
}

impl Presenter {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Hide the cursor for the duration of the render loop.
    pub fn enter(&mut self) -> Result<()> {
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore cursor visibility and default colors.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Write one composed frame verbatim.
    ///
    /// A failed write is unrecoverable for the render loop; the error
    /// propagates out and ends the run.
    pub fn present(&mut self, frame: &str) -> Result<()> {
        self.stdout.write_all(frame.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

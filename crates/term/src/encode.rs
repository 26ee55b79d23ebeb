//! Frame composition: turn a framebuffer into one presentable text blob.
//!
//! The framing is fixed and terminal-compatible: a cursor-home control
//! sequence, then every cell as a `color-tag + glyph` pair, a newline after
//! each row, and one trailing blank line. Writing the blob from the top-left
//! each frame overdraws the previous frame without clearing the screen.

use crate::fb::FrameBuffer;

/// Control sequence that moves the cursor back to the top-left corner.
pub const CURSOR_HOME: &str = "\x1b[0;0H";

/// Compose `fb` into `out`, replacing its previous contents.
///
/// Callers keep one `String` and pass it in every frame; the allocation is
/// reused once it has grown to frame size.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut String) {
    out.clear();
    out.reserve(frame_capacity(fb));
    out.push_str(CURSOR_HOME);

    let width = fb.width() as usize;
    for (index, cell) in fb.cells().iter().enumerate() {
        out.push_str(cell.color.escape());
        out.push(cell.glyph.ch());
        if (index + 1) % width == 0 {
            out.push('\n');
        }
    }
    out.push('\n');
}

/// Convenience wrapper allocating a fresh `String`.
pub fn encode_frame(fb: &FrameBuffer) -> String {
    let mut out = String::new();
    encode_frame_into(fb, &mut out);
    out
}

// Escape tags are 5 bytes, block glyphs up to 3 bytes in UTF-8.
fn frame_capacity(fb: &FrameBuffer) -> usize {
    let cells = fb.cells().len();
    CURSOR_HOME.len() + cells * 8 + fb.height() as usize + 1
}

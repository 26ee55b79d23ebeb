//! End-to-end raster pipeline tests: draw into a framebuffer, compose the
//! frame, and assert the exact text that would reach the terminal.

use tui_spin::term::{encode_frame, FrameBuffer, CURSOR_HOME};
use tui_spin::types::{Glyph, TermColor};

#[test]
fn horizontal_line_fills_the_first_row_only() {
    let mut fb = FrameBuffer::new(10, 10, TermColor::White);
    fb.draw_line(0, 0, 9, 0, Glyph::Full, TermColor::Red);

    // All ten cells of row 0 carry the drawn glyph and color.
    for x in 0..10 {
        let cell = fb.get(x, 0).unwrap();
        assert_eq!(cell.glyph, Glyph::Full);
        assert_eq!(cell.color, TermColor::Red);
    }
    // Every other row is untouched background.
    for y in 1..10 {
        for x in 0..10 {
            let cell = fb.get(x, y).unwrap();
            assert_eq!(cell.glyph, Glyph::Space);
            assert_eq!(cell.color, TermColor::White);
        }
    }
}

#[test]
fn composed_frame_reflects_the_drawn_row() {
    let mut fb = FrameBuffer::new(10, 10, TermColor::White);
    fb.draw_line(0, 0, 9, 0, Glyph::Full, TermColor::Red);

    let text = encode_frame(&fb);
    let body = text.strip_prefix(CURSOR_HOME).expect("cursor home prefix");
    let rows: Vec<&str> = body.split('\n').collect();

    // 10 rows, one trailing blank line, and the empty tail from split.
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0], "\x1b[31m█".repeat(10));
    let background_row = "\x1b[37m ".repeat(10);
    for row in &rows[1..10] {
        assert_eq!(*row, background_row);
    }
    assert_eq!(rows[10], "");
    assert_eq!(rows[11], "");
}

#[test]
fn frame_text_is_stable_for_identical_buffers() {
    let make = || {
        let mut fb = FrameBuffer::new(6, 4, TermColor::Blue);
        fb.draw_triangle(0, 0, 5, 0, 0, 3, Glyph::Dark, TermColor::Cyan);
        encode_frame(&fb)
    };
    assert_eq!(make(), make());
}

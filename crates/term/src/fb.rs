//! Framebuffer: a fixed-size grid of painted character cells.

use tui_spin_types::{Glyph, TermColor};

/// A single raster cell.
///
/// Cells are always in a painted state; the cleared look is simply the
/// lightest glyph in the background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: Glyph,
    pub color: TermColor,
}

/// 2D grid of character cells, row-major.
///
/// The buffer has fixed dimensions for its whole lifetime and is exclusively
/// owned by the engine; scenes borrow it for the duration of one update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a buffer with every cell set to a space in `background`.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u16, height: u16, background: TermColor) -> Self {
        assert!(width > 0 && height > 0, "framebuffer dimensions must be > 0");
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![
                Cell {
                    glyph: Glyph::Space,
                    color: background,
                };
                len
            ],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Bounds-checked single-cell write.
    ///
    /// Coordinates outside `[0, width) x [0, height)` are silently dropped.
    /// Rotating geometry routinely projects slightly off-screen, so this is
    /// the normal clipping path, not an error.
    pub fn set_cell(&mut self, x: i32, y: i32, glyph: Glyph, color: TermColor) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { glyph, color };
        }
    }

    /// Overwrite every cell. Used once per tick to clear before redraw.
    pub fn fill_all(&mut self, glyph: Glyph, color: TermColor) {
        self.cells.fill(Cell { glyph, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_space_in_background_color() {
        let fb = FrameBuffer::new(7, 3, TermColor::Cyan);
        assert_eq!(fb.cells().len(), 21);
        for cell in fb.cells() {
            assert_eq!(cell.glyph, Glyph::Space);
            assert_eq!(cell.color, TermColor::Cyan);
        }
    }

    #[test]
    fn set_cell_updates_exactly_one_cell() {
        let mut fb = FrameBuffer::new(4, 4, TermColor::White);
        fb.set_cell(2, 1, Glyph::Full, TermColor::Red);

        for y in 0..4 {
            for x in 0..4 {
                let cell = fb.get(x, y).unwrap();
                if (x, y) == (2, 1) {
                    assert_eq!(cell.glyph, Glyph::Full);
                    assert_eq!(cell.color, TermColor::Red);
                } else {
                    assert_eq!(cell.glyph, Glyph::Space);
                    assert_eq!(cell.color, TermColor::White);
                }
            }
        }
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut fb = FrameBuffer::new(4, 4, TermColor::White);
        let before = fb.clone();

        fb.set_cell(-1, 0, Glyph::Full, TermColor::Red);
        fb.set_cell(0, -1, Glyph::Full, TermColor::Red);
        fb.set_cell(4, 0, Glyph::Full, TermColor::Red);
        fb.set_cell(0, 4, Glyph::Full, TermColor::Red);
        fb.set_cell(i32::MAX, i32::MIN, Glyph::Full, TermColor::Red);

        assert_eq!(fb, before);
    }

    #[test]
    fn fill_all_overwrites_every_cell() {
        let mut fb = FrameBuffer::new(3, 2, TermColor::White);
        fb.set_cell(1, 1, Glyph::Dark, TermColor::Blue);
        fb.fill_all(Glyph::Light, TermColor::Green);
        for cell in fb.cells() {
            assert_eq!(cell.glyph, Glyph::Light);
            assert_eq!(cell.color, TermColor::Green);
        }
    }

    #[test]
    #[should_panic]
    fn zero_width_panics() {
        let _ = FrameBuffer::new(0, 4, TermColor::White);
    }
}

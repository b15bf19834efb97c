//! FrameBuffer - 2D grid of terminal cells.
//!
//! Row-major storage: `cells[y * width + x]`. A wide glyph occupies its
//! cell plus a continuation cell holding char 0, which renderers skip.

use crate::layout::char_width;
use crate::types::{Attr, Cell, ClipRect, Rgba};

/// 2D buffer of terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Set a cell, respecting bounds and `clip`. `bg: None` keeps the
    /// background already there. Returns true if the cell was written.
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        char: u32,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> bool {
        if clip.is_some_and(|clip| !clip.contains(x, y)) {
            return false;
        }
        let Some(cell) = self.get_mut(x, y) else {
            return false;
        };

        cell.char = char;
        cell.fg = fg;
        if let Some(bg) = bg {
            cell.bg = bg;
        }
        cell.attrs = attrs;
        true
    }

    /// Fill a rectangle with blanks on `bg`.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, bg: Rgba, clip: Option<&ClipRect>) {
        let mut x1 = x;
        let mut y1 = y;
        let mut x2 = x.saturating_add(width).min(self.width);
        let mut y2 = y.saturating_add(height).min(self.height);

        if let Some(clip) = clip {
            x1 = x1.max(clip.x);
            y1 = y1.max(clip.y);
            x2 = x2.min(clip.x.saturating_add(clip.width));
            y2 = y2.min(clip.y.saturating_add(clip.height));
        }

        if x2 <= x1 || y2 <= y1 {
            return;
        }

        for row in y1..y2 {
            let start = self.index(x1, row);
            let end = self.index(x2, row);
            for cell in &mut self.cells[start..end] {
                cell.char = b' ' as u32;
                cell.bg = bg;
                cell.attrs = Attr::NONE;
            }
        }
    }

    /// Draw one line of text. `spacing` blank cells follow every visible
    /// glyph. Returns the number of columns advanced.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        spacing: u16,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }
            let width = char_width(ch);
            if width == 0 {
                continue;
            }

            self.set_cell(col, y, ch as u32, fg, bg, attrs, clip);
            if width == 2 {
                self.set_cell(col + 1, y, 0, fg, bg, attrs, clip);
            }
            for gap in 0..spacing {
                self.set_cell(col + width + gap, y, b' ' as u32, fg, bg, attrs, clip);
            }

            col = col.saturating_add(width + spacing);
        }

        col.saturating_sub(x)
    }

    /// Draw a single-line box border.
    pub fn draw_border(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Rgba,
        clip: Option<&ClipRect>,
    ) {
        if width < 2 || height < 2 {
            return;
        }

        let x2 = x + width - 1;
        let y2 = y + height - 1;
        let mut put = |cx: u16, cy: u16, ch: char| {
            self.set_cell(cx, cy, ch as u32, color, None, Attr::NONE, clip);
        };

        put(x, y, '┌');
        put(x2, y, '┐');
        put(x, y2, '└');
        put(x2, y2, '┘');
        for col in (x + 1)..x2 {
            put(col, y, '─');
            put(col, y2, '─');
        }
        for row in (y + 1)..y2 {
            put(x, row, '│');
            put(x2, row, '│');
        }
    }

    /// Plain-text view: one line per row, trailing blanks trimmed.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            let start = self.index(0, y);
            let end = start + self.width as usize;
            let line: String = self.cells[start..end]
                .iter()
                .filter(|cell| cell.char != 0)
                .map(|cell| char::from_u32(cell.char).unwrap_or(' '))
                .collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_blank() {
        let buffer = FrameBuffer::new(4, 2);
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.get(3, 1), Some(&Cell::default()));
        assert_eq!(buffer.get(4, 0), None);
    }

    #[test]
    fn test_draw_text_with_spacing() {
        let mut buffer = FrameBuffer::new(10, 1);
        let advanced = buffer.draw_text(0, 0, "Hi", Rgba::WHITE, None, Attr::BOLD, 1, None);

        assert_eq!(advanced, 4);
        assert_eq!(buffer.to_plain_string(), "H i\n");
        assert_eq!(buffer.get(0, 0).map(|c| c.attrs), Some(Attr::BOLD));
    }

    #[test]
    fn test_wide_char_continuation() {
        let mut buffer = FrameBuffer::new(6, 1);
        buffer.draw_text(0, 0, "日x", Rgba::WHITE, None, Attr::NONE, 0, None);

        assert_eq!(buffer.get(1, 0).map(|c| c.char), Some(0));
        assert_eq!(buffer.to_plain_string(), "日x\n");
    }

    #[test]
    fn test_clip_blocks_writes() {
        let mut buffer = FrameBuffer::new(10, 1);
        let clip = ClipRect::new(0, 0, 3, 1);
        buffer.draw_text(0, 0, "abcdef", Rgba::WHITE, None, Attr::NONE, 0, Some(&clip));
        assert_eq!(buffer.to_plain_string(), "abc\n");
    }

    #[test]
    fn test_fill_keeps_bg_for_text() {
        let mut buffer = FrameBuffer::new(4, 1);
        buffer.fill_rect(0, 0, 4, 1, Rgba::BLACK, None);
        buffer.draw_text(0, 0, "a", Rgba::WHITE, None, Attr::NONE, 0, None);
        assert_eq!(buffer.get(0, 0).map(|c| c.bg), Some(Rgba::BLACK));
    }

    #[test]
    fn test_border() {
        let mut buffer = FrameBuffer::new(3, 3);
        buffer.draw_border(0, 0, 3, 3, Rgba::GRAY, None);
        assert_eq!(buffer.to_plain_string(), "┌─┐\n│ │\n└─┘\n");
    }
}

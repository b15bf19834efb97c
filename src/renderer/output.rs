//! Output buffering and stateful cell rendering.
//!
//! A frame is accumulated in an [`OutputBuffer`] and written to the sink in
//! one call. [`StatefulCellRenderer`] remembers the cursor, colors and
//! attributes it last emitted so unchanged state produces no escape codes.

use std::io::{self, Write};

use crate::types::{Attr, Cell, Rgba};

use super::ansi;

/// Byte buffer flushed to a writer once per frame.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(16 * 1024),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    #[inline]
    pub fn write_codepoint(&mut self, cp: u32) {
        if let Some(c) = char::from_u32(cp) {
            self.write_char(c);
        }
    }

    /// Write everything to `writer`, flush it, and empty the buffer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        writer.flush()?;
        self.data.clear();
        Ok(())
    }

    /// Accumulated output, lossy.
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Emits cells, skipping escape codes for state that did not change.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    last_x: i32,
    last_y: i32,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    /// Forget all tracked state. Called at the start of every frame.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Render a cell at an absolute position.
    pub fn render_cell(&mut self, output: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        // Continuation cell: the wide glyph before it already covered it.
        if cell.char == 0 {
            self.last_x = x as i32;
            self.last_y = y as i32;
            return Ok(());
        }

        if y as i32 != self.last_y || x as i32 != self.last_x + 1 {
            ansi::cursor_to(output, x, y)?;
        }
        self.render_style(output, cell)?;
        output.write_codepoint(cell.char);

        self.last_x = x as i32;
        self.last_y = y as i32;
        Ok(())
    }

    /// Render a cell at the current cursor, for sequential row output.
    pub fn render_cell_inline(&mut self, output: &mut OutputBuffer, cell: &Cell) -> io::Result<()> {
        if cell.char == 0 {
            return Ok(());
        }
        self.render_style(output, cell)?;
        output.write_codepoint(cell.char);
        Ok(())
    }

    fn render_style(&mut self, output: &mut OutputBuffer, cell: &Cell) -> io::Result<()> {
        if cell.attrs != self.last_attrs {
            // SGR 0 also resets colors, so force them out again.
            ansi::reset(output)?;
            ansi::attrs(output, cell.attrs)?;
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }
        if self.last_fg != Some(cell.fg) {
            ansi::fg(output, cell.fg)?;
            self.last_fg = Some(cell.fg);
        }
        if self.last_bg != Some(cell.bg) {
            ansi::bg(output, cell.bg)?;
            self.last_bg = Some(cell.bg);
        }
        Ok(())
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(c: char) -> Cell {
        Cell {
            char: c as u32,
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            attrs: Attr::NONE,
        }
    }

    #[test]
    fn test_flush_to_empties_buffer() {
        let mut buf = OutputBuffer::new();
        buf.write_char('h');
        buf.write_codepoint('é' as u32);

        let mut sink = Vec::new();
        buf.flush_to(&mut sink).unwrap();

        assert_eq!(sink, "hé".as_bytes());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_sequential_cells_skip_cursor_and_colors() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();

        renderer.render_cell(&mut output, 0, 0, &cell('A')).unwrap();
        output.clear();
        renderer.render_cell(&mut output, 1, 0, &cell('B')).unwrap();

        assert_eq!(output.as_str(), "B");
    }

    #[test]
    fn test_gap_moves_cursor_only() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();

        renderer.render_cell(&mut output, 0, 0, &cell('A')).unwrap();
        output.clear();
        renderer.render_cell(&mut output, 5, 2, &cell('B')).unwrap();

        assert_eq!(output.as_str(), "\x1b[3;6HB");
    }

    #[test]
    fn test_attr_change_reemits_colors() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();

        renderer.render_cell(&mut output, 0, 0, &cell('A')).unwrap();
        output.clear();
        let bold = Cell { attrs: Attr::BOLD, ..cell('B') };
        renderer.render_cell(&mut output, 1, 0, &bold).unwrap();

        assert_eq!(
            output.as_str(),
            "\x1b[0m\x1b[1m\x1b[38;2;255;255;255m\x1b[48;2;0;0;0mB"
        );
    }

    #[test]
    fn test_continuation_cell_writes_nothing() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();

        renderer.render_cell(&mut output, 0, 0, &Cell { char: 0, ..cell('x') }).unwrap();
        renderer.render_cell_inline(&mut output, &Cell { char: 0, ..cell('x') }).unwrap();
        assert!(output.is_empty());
    }
}

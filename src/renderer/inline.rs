//! Inline renderer for the normal terminal buffer.
//!
//! Rewrites the whole region each frame: move back to the first row of the
//! previous frame, erase down, write the rows. Scrollback is left intact.

use std::io::{self, Stdout, Write};

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

/// Renders frames in place below the prompt.
pub struct InlineRenderer<W: Write = Stdout> {
    sink: W,
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous_height: u16,
}

impl InlineRenderer<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for InlineRenderer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> InlineRenderer<W> {
    pub fn with_writer(sink: W) -> Self {
        Self {
            sink,
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous_height: 0,
        }
    }

    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<()> {
        ansi::begin_sync(&mut self.output)?;

        // The cursor sits on the last row of the previous frame.
        if self.previous_height > 0 {
            ansi::cursor_up(&mut self.output, self.previous_height - 1)?;
            ansi::cursor_column_zero(&mut self.output)?;
            ansi::erase_down(&mut self.output)?;
        }

        self.cell_renderer.reset();

        let height = buffer.height();
        for y in 0..height {
            for x in 0..buffer.width() {
                if let Some(cell) = buffer.get(x, y) {
                    self.cell_renderer.render_cell_inline(&mut self.output, cell)?;
                }
            }
            if y + 1 < height {
                ansi::reset(&mut self.output)?;
                self.cell_renderer.reset();
                self.output.write_char('\r');
                self.output.write_char('\n');
            }
        }

        ansi::reset(&mut self.output)?;
        ansi::end_sync(&mut self.output)?;
        self.output.flush_to(&mut self.sink)?;

        self.previous_height = height;
        Ok(())
    }

    /// Leave the cursor below the rendered region.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.previous_height > 0 {
            self.output.write_char('\r');
            self.output.write_char('\n');
        }
        ansi::cursor_show(&mut self.output)?;
        self.output.flush_to(&mut self.sink)?;
        self.previous_height = 0;
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.sink
    }
}

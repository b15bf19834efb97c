//! Text Measurement - terminal cell widths and wrapping.
//!
//! Widths come from `unicode-width` (East Asian wide = 2 cells, combining
//! marks = 0). `spacing` is the number of blank cells drawn after every
//! visible glyph, which is how letter-spaced font sizes are projected.

use unicode_width::UnicodeWidthChar;

/// Cells a single char occupies, without spacing.
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Cells a char advances the cursor by, spacing included.
pub fn glyph_advance(c: char, spacing: u16) -> u16 {
    match char_width(c) {
        0 => 0,
        w => w + spacing,
    }
}

/// Display width of a string in cells.
pub fn string_width(s: &str, spacing: u16) -> u16 {
    s.chars()
        .fold(0u16, |acc, c| acc.saturating_add(glyph_advance(c, spacing)))
}

/// Wrap text to `width` cells.
///
/// Breaks at spaces when a word fits on a line; words wider than a whole
/// line are split by character. Explicit newlines always break.
pub fn wrap_text(text: &str, width: u16, spacing: u16) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, width, spacing, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: u16, spacing: u16, lines: &mut Vec<String>) {
    let mut line = String::new();
    let mut line_width = 0u16;

    for word in paragraph.split(' ') {
        let word_width = string_width(word, spacing);
        let space = if line.is_empty() { 0 } else { glyph_advance(' ', spacing) };

        if line_width + space + word_width <= width {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            line_width += space + word_width;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
            continue;
        }

        // Word longer than a line: hard-break it.
        for c in word.chars() {
            let advance = glyph_advance(c, spacing);
            if line_width + advance > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(c);
            line_width += advance;
        }
    }

    lines.push(line);
}

/// Number of rows `text` needs at `width` cells.
pub fn measure_text_height(text: &str, width: u16, spacing: u16) -> u16 {
    if text.is_empty() {
        return 0;
    }
    wrap_text(text, width, spacing).len().max(1) as u16
}

//! ANSI escape sequences.
//!
//! Only the sequences the shell's renderers emit. Colors are truecolor;
//! the terminal default maps to SGR 39/49.

use std::io::Write;

use crate::types::{Attr, Rgba};

/// Move the cursor to a 0-based cell.
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Move the cursor up `n` rows. A no-op for 0.
pub fn cursor_up<W: Write>(w: &mut W, n: u16) -> std::io::Result<()> {
    if n > 0 {
        write!(w, "\x1b[{}A", n)?;
    }
    Ok(())
}

pub fn cursor_column_zero<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[G")
}

pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25l")
}

pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25h")
}

/// Erase from the cursor to the end of the screen.
pub fn erase_down<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[J")
}

pub fn clear_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2J\x1b[H")
}

pub fn enter_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1049h")
}

pub fn exit_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1049l")
}

/// Begin synchronized output (terminals without support ignore it).
pub fn begin_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026h")
}

pub fn end_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026l")
}

/// Reset all attributes and colors.
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[0m")
}

pub fn fg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[39m")
    } else {
        write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }
}

pub fn bg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[49m")
    } else {
        write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set text attributes. Writes nothing for an empty set.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> std::io::Result<()> {
    const CODES: [(Attr, u8); 5] = [
        (Attr::BOLD, 1),
        (Attr::DIM, 2),
        (Attr::ITALIC, 3),
        (Attr::UNDERLINE, 4),
        (Attr::INVERSE, 7),
    ];

    let codes: Vec<String> = CODES
        .iter()
        .filter(|(flag, _)| attr.contains(*flag))
        .map(|(_, code)| code.to_string())
        .collect();

    if codes.is_empty() {
        return Ok(());
    }
    write!(w, "\x1b[{}m", codes.join(";"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cursor_to_is_one_based() {
        assert_eq!(written(|w| cursor_to(w, 0, 0)), "\x1b[1;1H");
        assert_eq!(written(|w| cursor_to(w, 9, 4)), "\x1b[5;10H");
    }

    #[test]
    fn test_cursor_up_zero_is_empty() {
        assert_eq!(written(|w| cursor_up(w, 0)), "");
        assert_eq!(written(|w| cursor_up(w, 3)), "\x1b[3A");
    }

    #[test]
    fn test_colors() {
        assert_eq!(written(|w| fg(w, Rgba::TERMINAL_DEFAULT)), "\x1b[39m");
        assert_eq!(written(|w| bg(w, Rgba::TERMINAL_DEFAULT)), "\x1b[49m");
        assert_eq!(written(|w| fg(w, Rgba::rgb(1, 2, 3))), "\x1b[38;2;1;2;3m");
        assert_eq!(written(|w| bg(w, Rgba::rgb(4, 5, 6))), "\x1b[48;2;4;5;6m");
    }

    #[test]
    fn test_attrs() {
        assert_eq!(written(|w| attrs(w, Attr::NONE)), "");
        assert_eq!(written(|w| attrs(w, Attr::BOLD | Attr::UNDERLINE)), "\x1b[1;4m");
        assert_eq!(written(|w| attrs(w, Attr::INVERSE)), "\x1b[7m");
    }
}

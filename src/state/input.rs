//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the keyboard module.
//!
//! # Example
//!
//! ```ignore
//! use devops_shell::state::input::{poll_event, route_event};
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         route_event(event);
//!     }
//! }
//! ```

use std::time::Duration;

use crossterm::event::{
    poll, read, Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
    KeyModifiers,
};

use super::global_keys::route_keyboard_event;
use super::keyboard::{KeyState, KeyboardEvent, Modifiers};

/// Unified event type for the shell
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalEvent {
    Key(KeyboardEvent),
    /// Terminal resize (new width, height)
    Resize(u16, u16),
    /// Anything the shell does not react to (mouse, paste, focus)
    None,
}

/// Convert a crossterm key event to our `KeyboardEvent`.
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let mut modifiers = convert_modifiers(event.modifiers);
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => {
            modifiers.shift = true;
            "Tab".to_string()
        }
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent { key, modifiers, state }
}

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
    }
}

/// Convert any crossterm event.
pub fn convert_event(event: CrosstermEvent) -> TerminalEvent {
    match event {
        CrosstermEvent::Key(key) => {
            let key = convert_key_event(key);
            if key.key.is_empty() {
                TerminalEvent::None
            } else {
                TerminalEvent::Key(key)
            }
        }
        CrosstermEvent::Resize(w, h) => TerminalEvent::Resize(w, h),
        _ => TerminalEvent::None,
    }
}

/// Non-blocking event check with timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<TerminalEvent>> {
    if poll(timeout)? {
        Ok(Some(convert_event(read()?)))
    } else {
        Ok(None)
    }
}

/// Dispatch an event to the focused component, then to global handlers.
/// Returns true if a handler consumed it.
pub fn route_event(event: TerminalEvent) -> bool {
    match event {
        TerminalEvent::Key(key) => route_keyboard_event(key),
        TerminalEvent::Resize(w, h) => {
            crate::pipeline::terminal::set_terminal_size(w, h);
            false
        }
        TerminalEvent::None => false,
    }
}

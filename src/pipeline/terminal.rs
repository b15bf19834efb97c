//! Terminal state signals.
//!
//! Terminal size and render mode are the root signals of the pipeline;
//! every frame derives from them plus the component arrays.

use spark_signals::{batch, signal, Signal};

use crate::types::RenderMode;

/// Size used until the real terminal is queried.
pub const DEFAULT_TERMINAL_SIZE: (u16, u16) = (80, 24);

thread_local! {
    static TERMINAL_WIDTH: Signal<u16> = signal(DEFAULT_TERMINAL_SIZE.0);
    static TERMINAL_HEIGHT: Signal<u16> = signal(DEFAULT_TERMINAL_SIZE.1);
    static RENDER_MODE: Signal<RenderMode> = signal(RenderMode::Fullscreen);
}

pub fn terminal_width() -> u16 {
    TERMINAL_WIDTH.with(|w| w.get())
}

pub fn terminal_height() -> u16 {
    TERMINAL_HEIGHT.with(|h| h.get())
}

/// `(width, height)` in cells.
pub fn terminal_size() -> (u16, u16) {
    (terminal_width(), terminal_height())
}

/// Set the terminal size (startup and resize events).
pub fn set_terminal_size(width: u16, height: u16) {
    batch(|| {
        TERMINAL_WIDTH.with(|w| w.set(width));
        TERMINAL_HEIGHT.with(|h| h.set(height));
    });
}

pub(crate) fn terminal_width_signal() -> Signal<u16> {
    TERMINAL_WIDTH.with(|w| w.clone())
}

pub(crate) fn terminal_height_signal() -> Signal<u16> {
    TERMINAL_HEIGHT.with(|h| h.clone())
}

pub fn render_mode() -> RenderMode {
    RENDER_MODE.with(|m| m.get())
}

pub fn set_render_mode(mode: RenderMode) {
    RENDER_MODE.with(|m| m.set(mode));
}

pub(crate) fn render_mode_signal() -> Signal<RenderMode> {
    RENDER_MODE.with(|m| m.clone())
}

/// Query the real terminal size through crossterm. Keeps the current
/// size when stdout is not a terminal.
pub fn detect_terminal_size() {
    match crossterm::terminal::size() {
        Ok((width, height)) => set_terminal_size(width, height),
        Err(error) => tracing::debug!(%error, "terminal size unavailable"),
    }
}

/// Restore defaults. Used by tests and headless snapshots.
pub fn reset_terminal_state() {
    set_terminal_size(DEFAULT_TERMINAL_SIZE.0, DEFAULT_TERMINAL_SIZE.1);
    set_render_mode(RenderMode::Fullscreen);
}

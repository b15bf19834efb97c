//! Theme - class-based styling for the shell.
//!
//! Components carry a class list in the visual arrays; the frame buffer
//! resolves each class against the active [`Stylesheet`]. The stylesheet is
//! a signal, so swapping it re-renders every component.
//!
//! ```ignore
//! use devops_shell::theme::{set_stylesheet, Stylesheet, ClassStyle};
//!
//! let sheet = Stylesheet::shell().with("nav", ClassStyle::bg(Rgba::BLACK));
//! set_stylesheet(sheet);
//! ```

mod stylesheet;

pub use stylesheet::*;

use spark_signals::{signal, Signal};

thread_local! {
    static STYLESHEET: Signal<Stylesheet> = signal(Stylesheet::shell());
}

/// Current stylesheet (reactive).
pub fn stylesheet() -> Stylesheet {
    STYLESHEET.with(|s| s.get())
}

/// Replace the active stylesheet.
pub fn set_stylesheet(sheet: Stylesheet) {
    STYLESHEET.with(|s| s.set(sheet));
}

/// Restore the default shell stylesheet.
pub fn reset_stylesheet() {
    set_stylesheet(Stylesheet::shell());
}

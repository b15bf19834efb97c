//! Terminal Renderer
//!
//! Turns a [`FrameBuffer`] into bytes on the terminal.
//!
//! - [`DiffRenderer`] - fullscreen on the alternate screen, changed cells only
//! - [`InlineRenderer`] - in the normal buffer, whole region redrawn in place
//!
//! Both are blind: they never read component state, only the buffer the
//! pipeline hands them.

pub mod ansi;
mod buffer;
mod diff;
mod inline;
mod output;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use inline::InlineRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};

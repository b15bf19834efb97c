//! Reactive Pipeline
//!
//! ```text
//! Component Tree → FlexNode Slots → layoutDerived → frameBufferDerived → render effect
//! ```
//!
//! 1. **layoutDerived** reads FlexNode slots and runs Taffy
//! 2. **frameBufferDerived** reads the layout, visual arrays and stylesheet
//!    and paints a FrameBuffer
//! 3. **render effect** hands the buffer to the terminal renderer
//!
//! The deriveds are pure; terminal I/O happens only in the effect. For
//! headless use, [`render_to_string`] runs the same layout and paint once.

pub mod frame_buffer_derived;
pub mod layout_derived;
pub mod mount;
pub mod terminal;

pub use frame_buffer_derived::{create_frame_buffer_derived, paint_frame, FrameBufferResult};
pub use layout_derived::create_layout_derived;
pub use mount::{mount, render_to_string, run, tick, MountHandle};
pub use terminal::{
    detect_terminal_size, render_mode, reset_terminal_state, set_render_mode, set_terminal_size,
    terminal_size,
};

//! State Module - Runtime state behind interactivity
//!
//! - **Focus** - Tab cycling over focusable components
//! - **Keyboard** - Event types, dispatch, handler registry
//! - **Input** - crossterm conversion and event routing
//! - **Global keys** - Ctrl+C, Tab, Shift+Tab

pub mod focus;
pub mod global_keys;
pub mod input;
pub mod keyboard;

pub use focus::{get_focused_index, is_focused};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};

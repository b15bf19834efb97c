//! TUI Primitives - Component building blocks.
//!
//! - [`box_primitive`] - Container with flexbox layout, border and background
//! - [`text`] - Text display with styling and directives
//! - [`input`] - Controlled single-line text input
//! - [`keyed`] - Branch re-rendered on key change
//!
//! # Architecture
//!
//! Components are indices into parallel arrays. Each component:
//! 1. Allocates an index from the registry
//! 2. Creates a FlexNode with reactive Slot properties
//! 3. Binds props directly to slots and arrays
//! 4. Returns a cleanup function
//!
//! Pass signals and getters straight through. Reading a signal before
//! binding (`PropValue::Static(sig.get())`) cuts the reactive connection.

/// Bind a PropValue to a FlexNode Slot, keeping it reactive.
macro_rules! bind_slot {
    ($slot:expr, $prop:expr) => {
        match $prop {
            $crate::primitives::PropValue::Static(v) => $slot.set_value(v),
            $crate::primitives::PropValue::Signal(s) => $slot.set_signal(&s),
            $crate::primitives::PropValue::Getter(g) => $slot.set_getter(move || g()),
        }
    };
}

/// Bind a PropValue to a parallel array through its value/getter setters.
macro_rules! bind_array {
    ($index:expr, $prop:expr, $set:path, $set_getter:path) => {
        match $prop {
            $crate::primitives::PropValue::Static(v) => $set($index, v),
            $crate::primitives::PropValue::Signal(s) => $set_getter($index, move || s.get()),
            $crate::primitives::PropValue::Getter(g) => $set_getter($index, move || g()),
        }
    };
}

mod box_primitive;
mod control_flow;
mod input;
mod text;
mod types;

pub use box_primitive::box_primitive;
pub use control_flow::keyed;
pub use input::{cursor_position, input, DEFAULT_INPUT_WIDTH};
pub use text::text;
pub use types::*;

use crate::engine::arrays::{core, visual};
use crate::engine::{allocate_index, create_flex_node, get_current_parent_index, on_destroy};
use crate::engine::FlexNode;
use crate::types::{ComponentType, Rgba};
use std::rc::Rc;

/// Steps shared by every primitive: allocate, create the FlexNode, record
/// type and parent, bind visibility.
fn mount_component(
    id: Option<&str>,
    component_type: ComponentType,
    visible: Option<PropValue<bool>>,
) -> (usize, Rc<FlexNode>) {
    let index = allocate_index(id);
    let flex_node = create_flex_node(index);

    // Runs however the index goes away, including release through a parent.
    on_destroy(index, move || {
        crate::state::keyboard::cleanup_index(index);
        crate::state::focus::release_focus(index);
    });

    core::set_component_type(index, component_type);
    if let Some(parent) = get_current_parent_index() {
        core::set_parent_index(index, Some(parent));
    }

    if let Some(visible) = visible {
        match visible {
            PropValue::Static(v) => core::set_visible(index, v),
            PropValue::Signal(s) => core::set_visible_signal(index, &s),
            PropValue::Getter(g) => core::set_visible_getter(index, move || g()),
        }
    }

    (index, flex_node)
}

/// Bind fg, bg and class list to the visual arrays.
fn bind_visual(
    index: usize,
    fg: Option<PropValue<Rgba>>,
    bg: Option<PropValue<Rgba>>,
    classes: Option<PropValue<String>>,
) {
    if let Some(fg) = fg {
        bind_array!(index, fg, visual::set_fg_color, visual::set_fg_color_getter);
    }
    if let Some(bg) = bg {
        bind_array!(index, bg, visual::set_bg_color, visual::set_bg_color_getter);
    }
    if let Some(classes) = classes {
        bind_array!(index, classes, visual::set_classes, visual::set_classes_getter);
    }
}

/// Release a primitive and its subtree.
fn unmount_component(index: usize) {
    crate::engine::release_index(index);
}

//! Box Primitive - Container component with flexbox layout.
//!
//! Props are bound directly to FlexNode slots, so a signal change reaches
//! layout without re-creating the box.
//!
//! # Example
//!
//! ```ignore
//! use devops_shell::primitives::{box_primitive, text, BoxProps, TextProps};
//! use devops_shell::types::FlexDirection;
//!
//! let cleanup = box_primitive(BoxProps {
//!     flex_direction: Some(FlexDirection::Row.into()),
//!     padding: Some(1.into()),
//!     classes: Some("nav".into()),
//!     children: Some(Box::new(|| {
//!         text(TextProps { content: "Home".into(), ..Default::default() });
//!     })),
//!     ..Default::default()
//! });
//! ```

use crate::engine::{pop_parent_context, push_parent_context};
use crate::types::ComponentType;

use super::types::{BoxProps, Cleanup};
use super::{bind_visual, mount_component, unmount_component};

/// Create a box container component.
///
/// Child components created inside `children` are parented to this box and
/// released with it.
pub fn box_primitive(props: BoxProps) -> Cleanup {
    let (index, flex_node) = mount_component(props.id.as_deref(), ComponentType::Box, props.visible);

    // Layout
    if let Some(dir) = props.flex_direction {
        bind_slot!(flex_node.flex_direction, dir);
    }
    if let Some(grow) = props.grow {
        bind_slot!(flex_node.flex_grow, grow);
    }
    if let Some(w) = props.width {
        bind_slot!(flex_node.width, w);
    }
    if let Some(h) = props.height {
        bind_slot!(flex_node.height, h);
    }
    if let Some(min_h) = props.min_height {
        bind_slot!(flex_node.min_height, min_h);
    }

    // Padding: shorthand first, per-side overrides after
    if let Some(ref p) = props.padding {
        if props.padding_top.is_none() {
            bind_slot!(flex_node.padding_top, p.clone());
        }
        if props.padding_right.is_none() {
            bind_slot!(flex_node.padding_right, p.clone());
        }
        if props.padding_bottom.is_none() {
            bind_slot!(flex_node.padding_bottom, p.clone());
        }
        if props.padding_left.is_none() {
            bind_slot!(flex_node.padding_left, p.clone());
        }
    }
    if let Some(pt) = props.padding_top {
        bind_slot!(flex_node.padding_top, pt);
    }
    if let Some(pr) = props.padding_right {
        bind_slot!(flex_node.padding_right, pr);
    }
    if let Some(pb) = props.padding_bottom {
        bind_slot!(flex_node.padding_bottom, pb);
    }
    if let Some(pl) = props.padding_left {
        bind_slot!(flex_node.padding_left, pl);
    }

    if let Some(mt) = props.margin_top {
        bind_slot!(flex_node.margin_top, mt);
    }
    if let Some(mb) = props.margin_bottom {
        bind_slot!(flex_node.margin_bottom, mb);
    }
    if let Some(g) = props.gap {
        bind_slot!(flex_node.gap, g);
    }
    if props.border {
        flex_node.border.set_value(1);
    }

    bind_visual(index, props.fg, props.bg, props.classes);

    if let Some(children) = props.children {
        push_parent_context(index);
        children();
        pop_parent_context();
    }

    Box::new(move || unmount_component(index))
}

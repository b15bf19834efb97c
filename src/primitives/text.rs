//! Text Primitive - Display text with styling.
//!
//! Content can be a static string, signal, or getter. Directives run once,
//! right after the element exists, and receive its `ElementRef`.
//!
//! # Example
//!
//! ```ignore
//! use devops_shell::primitives::{text, PropValue, TextProps};
//!
//! let title = signal(String::new());
//! let title_for_text = title.clone();
//! text(TextProps {
//!     content: PropValue::getter(move || format!("Hello, {}!", title_for_text.get())),
//!     ..Default::default()
//! });
//! ```

use tracing::trace;

use crate::engine::arrays::{interaction, text as text_arrays};
use crate::types::ComponentType;
use crate::view::ElementRef;

use super::types::{Cleanup, PropValue, TextProps};
use super::{bind_visual, mount_component, unmount_component};

/// Create a text display component.
pub fn text(props: TextProps) -> Cleanup {
    let (index, flex_node) =
        mount_component(props.id.as_deref(), ComponentType::Text, props.visible);

    match props.content {
        PropValue::Static(v) => text_arrays::set_text_content(index, v),
        PropValue::Signal(s) => text_arrays::set_text_content_signal(index, &s),
        PropValue::Getter(g) => text_arrays::set_text_content_getter(index, move || g()),
    }

    if let Some(attrs) = props.attrs {
        bind_array!(
            index,
            attrs,
            text_arrays::set_text_attrs,
            text_arrays::set_text_attrs_getter
        );
    }

    if let Some(w) = props.width {
        bind_slot!(flex_node.width, w);
    }
    if let Some(pl) = props.padding_left {
        bind_slot!(flex_node.padding_left, pl);
    }
    if let Some(pr) = props.padding_right {
        bind_slot!(flex_node.padding_right, pr);
    }

    bind_visual(index, props.fg, props.bg, props.classes);

    if props.focusable {
        interaction::set_focusable(index, true);
    }

    if !props.directives.is_empty() {
        let element = ElementRef::new(index);
        trace!(?element, count = props.directives.len(), "attaching directives");
        for attach in &props.directives {
            attach(element);
        }
    }

    Box::new(move || unmount_component(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::visual;
    use crate::engine::reset_registry;
    use crate::types::{Attr, FontSize};
    use spark_signals::signal;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() {
        reset_registry();
    }

    #[test]
    fn test_static_text() {
        setup();

        let cleanup = text(TextProps {
            content: "You Rock with DevOps!".into(),
            attrs: Some(Attr::BOLD.into()),
            ..Default::default()
        });

        assert_eq!(text_arrays::get_text_content(0), "You Rock with DevOps!");
        assert_eq!(text_arrays::get_text_attrs(0), Attr::BOLD);

        cleanup();
        assert_eq!(text_arrays::get_text_content(0), "");
    }

    #[test]
    fn test_getter_text_follows_signal() {
        setup();

        let name = signal(String::new());
        let name_for_text = name.clone();
        let _cleanup = text(TextProps {
            content: PropValue::getter(move || format!("Hi, {}!", name_for_text.get())),
            ..Default::default()
        });

        assert_eq!(text_arrays::get_text_content(0), "Hi, !");
        name.set("Ana".to_string());
        assert_eq!(text_arrays::get_text_content(0), "Hi, Ana!");
    }

    #[test]
    fn test_directives_receive_element() {
        setup();

        let seen: Rc<RefCell<Vec<ElementRef>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let _cleanup = text(TextProps {
            content: "span".into(),
            directives: vec![Rc::new(move |element| {
                seen_clone.borrow_mut().push(element);
                visual::set_font_size(element.index(), FontSize::XLarge);
            })],
            ..Default::default()
        });

        assert_eq!(*seen.borrow(), vec![ElementRef::new(0)]);
        assert_eq!(visual::get_font_size(0), FontSize::XLarge);
    }
}

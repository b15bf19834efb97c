//! Layout Derived - Reactive layout computation.
//!
//! Recomputes when the terminal size or render mode changes, when any
//! FlexNode slot changes, and when components are added or removed.

use spark_signals::{derived, Derived};

use crate::layout::{compute_layout, ComputedLayout};
use crate::types::RenderMode;

use super::terminal::{render_mode_signal, terminal_height_signal, terminal_width_signal};

pub fn create_layout_derived() -> Derived<ComputedLayout> {
    let tw_signal = terminal_width_signal();
    let th_signal = terminal_height_signal();
    let mode_signal = render_mode_signal();

    derived(move || {
        let tw = tw_signal.get();
        let th = th_signal.get();
        // Inline content may grow past the terminal height.
        let constrain_height = mode_signal.get() == RenderMode::Fullscreen;

        compute_layout(tw, th, constrain_height)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::{core, text};
    use crate::engine::{allocate_index, create_flex_node, reset_registry};
    use crate::pipeline::terminal::{reset_terminal_state, set_render_mode, set_terminal_size};
    use crate::types::{ComponentType, Dimension};

    fn setup() {
        reset_registry();
        reset_terminal_state();
    }

    fn make_box() -> usize {
        let idx = allocate_index(None);
        core::set_component_type(idx, ComponentType::Box);
        create_flex_node(idx);
        idx
    }

    #[test]
    fn test_layout_derived_empty() {
        setup();

        let layout = create_layout_derived().get();
        assert_eq!(layout.content_width, 0);
        assert_eq!(layout.content_height, 0);
    }

    #[test]
    fn test_layout_derived_reacts_to_resize() {
        setup();

        let idx = make_box();
        let node = crate::engine::get_flex_node(idx).expect("node");
        node.width.set_value(Dimension::Percent(100.0));
        node.height.set_value(Dimension::Percent(100.0));

        let layout_derived = create_layout_derived();
        assert_eq!(layout_derived.get().rect(idx), Some((0, 0, 80, 24)));

        set_terminal_size(120, 40);
        assert_eq!(layout_derived.get().rect(idx), Some((0, 0, 120, 40)));
    }

    #[test]
    fn test_layout_derived_reacts_to_content() {
        setup();
        set_render_mode(RenderMode::Inline);

        let root = make_box();
        let child = allocate_index(None);
        core::set_component_type(child, ComponentType::Text);
        core::set_parent_index(child, Some(root));
        create_flex_node(child);
        text::set_text_content(child, "one".to_string());

        let layout_derived = create_layout_derived();
        assert_eq!(layout_derived.get().height[child], 1);

        crate::engine::get_flex_node(root)
            .expect("root")
            .width
            .set_value(Dimension::Cells(30));
        assert_eq!(layout_derived.get().width[child], 30);
    }
}

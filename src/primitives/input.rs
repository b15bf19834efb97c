//! Input Primitive - Controlled single-line text input.
//!
//! The input displays whatever its `value` prop currently yields and never
//! writes that value itself. Each edit computes the next value and hands it
//! to `on_change` as a [`ChangeEvent`]; the owner stores it and the display
//! follows through the prop. An owner that ignores the event leaves the
//! display unchanged.
//!
//! Keys: printable characters, Backspace, Delete, ArrowLeft/ArrowRight,
//! Home, End. Anything else is left for global handlers (Tab, Ctrl+C).
//!
//! # Example
//!
//! ```ignore
//! use devops_shell::primitives::{input, InputProps};
//!
//! let name = signal(String::new());
//! let name_for_change = name.clone();
//! let cleanup = input(InputProps {
//!     value: name.clone().into(),
//!     on_change: Rc::new(move |event| name_for_change.set(event.value.clone())),
//!     ..Default::default()
//! });
//! ```

use tracing::trace;

use crate::engine::arrays::{interaction, text as text_arrays};
use crate::state::keyboard::{self, KeyboardEvent};
use crate::types::{ComponentType, Dimension};

use super::types::{ChangeEvent, Cleanup, InputProps, PropValue};
use super::{bind_visual, mount_component, unmount_component};

/// Width used when the caller gives none.
pub const DEFAULT_INPUT_WIDTH: u16 = 24;

/// Outcome of one keystroke on a value/cursor pair.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Edit {
    /// Cursor moves, value stays.
    Move(usize),
    /// Value changes; cursor lands at the given position.
    Change { value: String, cursor: usize },
}

/// Compute the edit a key performs. `None` means the key is not ours.
///
/// `cursor` is in chars and already clamped to the value length.
fn edit_for_key(value: &str, cursor: usize, event: &KeyboardEvent) -> Option<Edit> {
    let len = value.chars().count();

    if let Some(c) = event.printable_char() {
        let mut chars: Vec<char> = value.chars().collect();
        chars.insert(cursor, c);
        return Some(Edit::Change {
            value: chars.into_iter().collect(),
            cursor: cursor + 1,
        });
    }

    if !event.modifiers.is_plain() {
        return None;
    }

    let edit = match event.key.as_str() {
        "ArrowLeft" => Edit::Move(cursor.saturating_sub(1)),
        "ArrowRight" => Edit::Move((cursor + 1).min(len)),
        "Home" => Edit::Move(0),
        "End" => Edit::Move(len),
        "Backspace" if cursor > 0 => {
            let mut chars: Vec<char> = value.chars().collect();
            chars.remove(cursor - 1);
            Edit::Change {
                value: chars.into_iter().collect(),
                cursor: cursor - 1,
            }
        }
        "Delete" if cursor < len => {
            let mut chars: Vec<char> = value.chars().collect();
            chars.remove(cursor);
            Edit::Change {
                value: chars.into_iter().collect(),
                cursor,
            }
        }
        // Nothing to delete, but the key still belongs to the input.
        "Backspace" | "Delete" => Edit::Move(cursor),
        _ => return None,
    };
    Some(edit)
}

/// Cursor position of an input, clamped to the value it currently shows.
pub fn cursor_position(index: usize) -> usize {
    let len = text_arrays::get_text_content(index).chars().count();
    interaction::get_cursor_position(index).min(len)
}

/// Create a controlled text input.
///
/// Always focusable. Keystrokes are handled only while it has focus.
pub fn input(props: InputProps) -> Cleanup {
    let (index, flex_node) = mount_component(props.id.as_deref(), ComponentType::Input, None);

    let value = props.value.clone();
    match props.value {
        PropValue::Static(v) => text_arrays::set_text_content(index, v),
        PropValue::Signal(s) => text_arrays::set_text_content_signal(index, &s),
        PropValue::Getter(g) => text_arrays::set_text_content_getter(index, move || g()),
    }

    let width = props
        .width
        .unwrap_or(PropValue::Static(Dimension::Cells(DEFAULT_INPUT_WIDTH)));
    bind_slot!(flex_node.width, width);

    bind_visual(index, props.fg, props.bg, props.classes);

    interaction::set_focusable(index, true);
    interaction::set_cursor_position(index, value.get().chars().count());

    let on_change = props.on_change;
    let key_cleanup = keyboard::on_focused(index, move |event| {
        let current = value.get();
        let cursor = cursor_position(index);

        match edit_for_key(&current, cursor, event) {
            Some(Edit::Move(to)) => {
                interaction::set_cursor_position(index, to);
                true
            }
            Some(Edit::Change { value: next, cursor: to }) => {
                trace!(index, len = next.len(), "input change");
                interaction::set_cursor_position(index, to);
                on_change(&ChangeEvent { value: next });
                true
            }
            None => false,
        }
    });

    Box::new(move || {
        key_cleanup();
        unmount_component(index);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::core;
    use crate::engine::reset_registry;
    use crate::state::focus;
    use crate::state::keyboard::{dispatch_focused, reset_keyboard_state, Modifiers};
    use spark_signals::{signal, Signal};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() {
        reset_registry();
        reset_keyboard_state();
        focus::reset_focus_state();
    }

    fn press(index: usize, key: &str) -> bool {
        dispatch_focused(Some(index), &KeyboardEvent::new(key))
    }

    /// Input bound to a signal the way an owning component binds it.
    fn bound_input(initial: &str) -> (Signal<String>, Cleanup) {
        let state = signal(initial.to_string());
        let state_for_change = state.clone();
        let cleanup = input(InputProps {
            value: state.clone().into(),
            on_change: Rc::new(move |event| { state_for_change.set(event.value.clone()); }),
            ..Default::default()
        });
        (state, cleanup)
    }

    #[test]
    fn test_input_creation() {
        setup();

        let cleanup = input(InputProps::default());
        assert_eq!(core::get_component_type(0), ComponentType::Input);
        assert!(interaction::get_focusable(0));

        cleanup();
        assert_eq!(core::get_component_type(0), ComponentType::None);
    }

    #[test]
    fn test_typing_updates_owner_state() {
        setup();
        let (state, _cleanup) = bound_input("");

        for key in ["A", "n", "a"] {
            assert!(press(0, key));
        }

        assert_eq!(state.get(), "Ana");
        assert_eq!(text_arrays::get_text_content(0), "Ana");
        assert_eq!(cursor_position(0), 3);
    }

    #[test]
    fn test_ignored_change_leaves_display() {
        setup();

        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        let _cleanup = input(InputProps {
            value: "fixed".into(),
            on_change: Rc::new(move |event| events_clone.borrow_mut().push(event.clone())),
            ..Default::default()
        });

        press(0, "x");
        assert_eq!(text_arrays::get_text_content(0), "fixed");
        assert_eq!(
            *events.borrow(),
            vec![ChangeEvent { value: "fixedx".to_string() }]
        );
        // Cursor was advanced past the end, reads back clamped
        assert_eq!(cursor_position(0), 5);
    }

    #[test]
    fn test_editing_keys() {
        setup();
        let (state, _cleanup) = bound_input("abc");

        press(0, "Home");
        press(0, "Delete");
        assert_eq!(state.get(), "bc");

        press(0, "End");
        press(0, "ArrowLeft");
        press(0, "Backspace");
        assert_eq!(state.get(), "c");
        assert_eq!(cursor_position(0), 0);

        // Backspace at start is consumed but changes nothing
        assert!(press(0, "Backspace"));
        assert_eq!(state.get(), "c");
    }

    #[test]
    fn test_clearing_the_field_is_valid() {
        setup();
        let (state, _cleanup) = bound_input("Jo");

        press(0, "Backspace");
        press(0, "Backspace");
        assert_eq!(state.get(), "");
        assert_eq!(text_arrays::get_text_content(0), "");
    }

    #[test]
    fn test_unowned_keys_pass_through() {
        setup();
        let (_state, _cleanup) = bound_input("");

        assert!(!press(0, "Tab"));
        assert!(!press(0, "Enter"));
        assert!(!dispatch_focused(
            Some(0),
            &KeyboardEvent::with_modifiers("c", Modifiers::ctrl())
        ));
    }

    #[test]
    fn test_cursor_beyond_u16_range() {
        setup();
        let (state, _cleanup) = bound_input(&"a".repeat(usize::from(u16::MAX)));

        assert!(press(0, "x"));
        assert!(press(0, "y"));

        let value = state.get();
        assert_eq!(value.chars().count(), usize::from(u16::MAX) + 2);
        assert!(value.ends_with("xy"));
        assert_eq!(cursor_position(0), usize::from(u16::MAX) + 2);
    }

    #[test]
    fn test_unicode_editing() {
        assert_eq!(
            edit_for_key("né", 1, &KeyboardEvent::new("Delete")),
            Some(Edit::Change { value: "n".to_string(), cursor: 1 })
        );
        assert_eq!(
            edit_for_key("né", 2, &KeyboardEvent::new("ü")),
            Some(Edit::Change { value: "néü".to_string(), cursor: 3 })
        );
    }
}

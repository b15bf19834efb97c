//! Focus Module - Which component receives keyboard input.
//!
//! One component at a time holds focus. Tab order is allocation order among
//! visible, focusable components, wrapping at both ends.

use std::cell::Cell;

use spark_signals::{signal, Signal};
use tracing::trace;

use crate::engine::arrays::{core, interaction};
use crate::engine::get_allocated_indices;

thread_local! {
    static FOCUSED_INDEX: Signal<Option<usize>> = signal(None);

    /// Untracked mirror of `FOCUSED_INDEX`, read from cleanup paths that may
    /// run inside an effect.
    static FOCUSED_UNTRACKED: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Index of the focused component. Reactive.
pub fn get_focused_index() -> Option<usize> {
    FOCUSED_INDEX.with(|s| s.get())
}

/// Check if any component has focus
pub fn has_focus() -> bool {
    get_focused_index().is_some()
}

/// Check if a specific component has focus
pub fn is_focused(index: usize) -> bool {
    get_focused_index() == Some(index)
}

fn set_focused(index: Option<usize>) {
    if FOCUSED_UNTRACKED.with(|c| c.replace(index)) != index {
        trace!(?index, "focus changed");
        FOCUSED_INDEX.with(|s| s.set(index));
    }
}

// =============================================================================
// FOCUSABLE QUERIES
// =============================================================================

/// Visible, focusable components in tab order.
pub fn get_focusable_indices() -> Vec<usize> {
    let mut result: Vec<usize> = get_allocated_indices()
        .into_iter()
        .filter(|&i| interaction::get_focusable(i) && core::get_visible(i))
        .collect();
    result.sort_unstable();
    result
}

// =============================================================================
// FOCUS NAVIGATION
// =============================================================================

fn find_next_focusable(from: Option<usize>, forward: bool) -> Option<usize> {
    let focusables = get_focusable_indices();
    let len = focusables.len();
    if len == 0 {
        return None;
    }

    let position = from.and_then(|index| focusables.iter().position(|&i| i == index));
    let next = match (position, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(pos), true) => (pos + 1) % len,
        (Some(pos), false) => (pos + len - 1) % len,
    };
    Some(focusables[next])
}

/// Move focus to the next focusable component.
pub fn focus_next() -> bool {
    let current = get_focused_index();
    match find_next_focusable(current, true) {
        Some(next) if Some(next) != current => {
            set_focused(Some(next));
            true
        }
        _ => false,
    }
}

/// Move focus to the previous focusable component.
pub fn focus_previous() -> bool {
    let current = get_focused_index();
    match find_next_focusable(current, false) {
        Some(prev) if Some(prev) != current => {
            set_focused(Some(prev));
            true
        }
        _ => false,
    }
}

/// Focus a specific component by index.
pub fn focus(index: usize) -> bool {
    if interaction::get_focusable(index) && core::get_visible(index) {
        set_focused(Some(index));
        return true;
    }
    false
}

/// Drop focus if `index` holds it. Called when a component is released.
pub fn release_focus(index: usize) {
    if FOCUSED_UNTRACKED.with(|c| c.get()) == Some(index) {
        set_focused(None);
    }
}

/// Focus the first focusable component
pub fn focus_first() -> bool {
    get_focusable_indices()
        .first()
        .is_some_and(|&first| focus(first))
}

/// Reset all focus state (for testing)
pub fn reset_focus_state() {
    FOCUSED_UNTRACKED.with(|c| c.set(None));
    FOCUSED_INDEX.with(|s| s.set(None));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{allocate_index, reset_registry};

    fn setup() -> Vec<usize> {
        reset_registry();
        reset_focus_state();
        (0..3)
            .map(|_| {
                let index = allocate_index(None);
                interaction::set_focusable(index, true);
                index
            })
            .collect()
    }

    #[test]
    fn test_focus_next_wraps() {
        let indices = setup();

        assert!(focus_next());
        assert_eq!(get_focused_index(), Some(indices[0]));
        focus_next();
        focus_next();
        assert_eq!(get_focused_index(), Some(indices[2]));
        focus_next();
        assert_eq!(get_focused_index(), Some(indices[0]));
    }

    #[test]
    fn test_focus_previous_wraps() {
        let indices = setup();

        assert!(focus_previous());
        assert_eq!(get_focused_index(), Some(indices[2]));
        focus(indices[0]);
        focus_previous();
        assert_eq!(get_focused_index(), Some(indices[2]));
    }

    #[test]
    fn test_skips_hidden_and_unfocusable() {
        let indices = setup();
        core::set_visible(indices[1], false);
        let plain = allocate_index(None);

        assert_eq!(get_focusable_indices(), vec![indices[0], indices[2]]);
        assert!(!focus(indices[1]));
        assert!(!focus(plain));
        assert!(!has_focus());
    }

    #[test]
    fn test_release_focus() {
        let indices = setup();
        focus(indices[1]);

        release_focus(indices[0]);
        assert!(is_focused(indices[1]));

        release_focus(indices[1]);
        assert!(!has_focus());
    }

    #[test]
    fn test_single_focusable_does_not_move() {
        reset_registry();
        reset_focus_state();
        let only = allocate_index(None);
        interaction::set_focusable(only, true);

        assert!(focus_first());
        assert!(!focus_next());
        assert!(is_focused(only));
    }
}

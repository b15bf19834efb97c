//! Core Arrays - component type, parent and visibility.
//!
//! `COMPONENT_TYPE` stores plain values; the type of an index never changes
//! while it is allocated, so nothing needs to track it.

use std::cell::RefCell;

use spark_signals::{batch, Signal, TrackedSlotArray};

use super::{reset_array, tracked};
use crate::types::ComponentType;

thread_local! {
    static COMPONENT_TYPE: RefCell<Vec<ComponentType>> = RefCell::new(Vec::new());

    /// Parent component index (None for a root).
    static PARENT_INDEX: TrackedSlotArray<Option<usize>> = tracked(None);

    /// Visibility (false = skipped by layout and rendering).
    static VISIBLE: TrackedSlotArray<bool> = tracked(true);
}

pub fn ensure_capacity(index: usize) {
    COMPONENT_TYPE.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize(index + 1, ComponentType::None);
        }
    });
    PARENT_INDEX.with(|arr| arr.ensure_capacity(index + 1));
    VISIBLE.with(|arr| arr.ensure_capacity(index + 1));
}

pub fn clear_at_index(index: usize) {
    COMPONENT_TYPE.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = ComponentType::None;
        }
    });
    batch(|| {
        PARENT_INDEX.with(|arr| arr.clear(index));
        VISIBLE.with(|arr| arr.clear(index));
    });
}

pub fn reset() {
    COMPONENT_TYPE.with(|arr| arr.borrow_mut().clear());
    PARENT_INDEX.with(reset_array);
    VISIBLE.with(reset_array);
}

// =============================================================================
// Component Type
// =============================================================================

pub fn get_component_type(index: usize) -> ComponentType {
    COMPONENT_TYPE.with(|arr| arr.borrow().get(index).copied().unwrap_or_default())
}

pub fn set_component_type(index: usize, value: ComponentType) {
    ensure_capacity(index);
    COMPONENT_TYPE.with(|arr| arr.borrow_mut()[index] = value);
}

// =============================================================================
// Parent
// =============================================================================

/// Get parent index (reactive).
pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.get(index).flatten())
}

pub fn set_parent_index(index: usize, parent: Option<usize>) {
    PARENT_INDEX.with(|arr| batch(|| arr.set_value(index, parent)));
}

// =============================================================================
// Visibility
// =============================================================================

/// Get visibility (reactive).
pub fn get_visible(index: usize) -> bool {
    VISIBLE.with(|arr| arr.get(index).unwrap_or(true))
}

pub fn set_visible(index: usize, visible: bool) {
    VISIBLE.with(|arr| batch(|| arr.set_value(index, visible)));
}

pub fn set_visible_signal(index: usize, sig: &Signal<bool>) {
    VISIBLE.with(|arr| batch(|| arr.set_signal(index, sig)));
}

pub fn set_visible_getter<F>(index: usize, getter: F)
where
    F: Fn() -> bool + 'static,
{
    VISIBLE.with(|arr| batch(|| arr.set_getter(index, getter)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_component_type() {
        reset();
        assert_eq!(get_component_type(7), ComponentType::None);
        set_component_type(7, ComponentType::Input);
        assert_eq!(get_component_type(7), ComponentType::Input);
        clear_at_index(7);
        assert_eq!(get_component_type(7), ComponentType::None);
    }

    #[test]
    fn test_parent_and_visibility() {
        reset();
        assert_eq!(get_parent_index(1), None);
        set_parent_index(1, Some(0));
        assert_eq!(get_parent_index(1), Some(0));

        let shown = signal(true);
        set_visible_signal(1, &shown);
        assert!(get_visible(1));
        shown.set(false);
        assert!(!get_visible(1));
    }

    #[test]
    fn test_reset_restores_defaults() {
        reset();
        set_parent_index(2, Some(1));
        set_visible(2, false);

        reset();
        assert_eq!(get_parent_index(2), None);
        assert!(get_visible(2));
    }
}

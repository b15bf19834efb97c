//! Parallel Arrays
//!
//! All component state lives in these arrays, one cell per component index.
//! Cells are `TrackedSlotArray` slots: primitives bind values, signals or
//! getters into them; deriveds read them with `.get()` and re-run only when
//! the cells they touched change.
//!
//! Writes go through `batch`. A write notifies synchronously, and a reaction
//! reading the same array must not find its storage still borrowed.
//!
//! - **core**: component type, parent, visibility
//! - **text**: text content and attributes
//! - **visual**: colors, font size, class list
//! - **interaction**: focusability, input cursor

pub mod core;
pub mod text;
pub mod visual;
pub mod interaction;

use spark_signals::{batch, dirty_set, tracked_slot_array, TrackedSlotArray};

use self::core as core_arrays;
use self::interaction as interaction_arrays;
use self::text as text_arrays;
use self::visual as visual_arrays;

/// A tracked array whose cells start at (and clear back to) `default`.
pub(crate) fn tracked<T: Clone + PartialEq + 'static>(default: T) -> TrackedSlotArray<T> {
    tracked_slot_array(Some(default), dirty_set())
}

/// Restore every cell of `arr` to its default and forget its dirty indices.
///
/// Thread-local arrays cannot be dropped, so reset keeps their storage.
pub(crate) fn reset_array<T: Clone + PartialEq + 'static>(arr: &TrackedSlotArray<T>) {
    batch(|| {
        for index in 0..arr.len() {
            arr.clear(index);
        }
    });
    arr.dirty().borrow_mut().clear();
}

/// Ensure all arrays have capacity for the given index.
pub fn ensure_all_capacity(index: usize) {
    core_arrays::ensure_capacity(index);
    text_arrays::ensure_capacity(index);
    visual_arrays::ensure_capacity(index);
    interaction_arrays::ensure_capacity(index);
}

/// Clear all array values at an index.
pub fn clear_all_at_index(index: usize) {
    batch(|| {
        core_arrays::clear_at_index(index);
        text_arrays::clear_at_index(index);
        visual_arrays::clear_at_index(index);
        interaction_arrays::clear_at_index(index);
    });
}

/// Reset every array to defaults.
pub fn reset_all_arrays() {
    core_arrays::reset();
    text_arrays::reset();
    visual_arrays::reset();
    interaction_arrays::reset();
}

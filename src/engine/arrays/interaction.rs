//! Interaction Arrays - focusability and input cursor.

use spark_signals::{batch, TrackedSlotArray};

use super::{reset_array, tracked};

thread_local! {
    static FOCUSABLE: TrackedSlotArray<bool> = tracked(false);

    /// Cursor position in characters (input components).
    static CURSOR_POSITION: TrackedSlotArray<usize> = tracked(0);
}

pub fn ensure_capacity(index: usize) {
    FOCUSABLE.with(|arr| arr.ensure_capacity(index + 1));
    CURSOR_POSITION.with(|arr| arr.ensure_capacity(index + 1));
}

pub fn clear_at_index(index: usize) {
    batch(|| {
        FOCUSABLE.with(|arr| arr.clear(index));
        CURSOR_POSITION.with(|arr| arr.clear(index));
    });
}

pub fn reset() {
    FOCUSABLE.with(reset_array);
    CURSOR_POSITION.with(reset_array);
}

pub fn get_focusable(index: usize) -> bool {
    FOCUSABLE.with(|arr| arr.get(index).unwrap_or(false))
}

pub fn set_focusable(index: usize, focusable: bool) {
    FOCUSABLE.with(|arr| batch(|| arr.set_value(index, focusable)));
}

pub fn get_cursor_position(index: usize) -> usize {
    CURSOR_POSITION.with(|arr| arr.get(index).unwrap_or(0))
}

pub fn set_cursor_position(index: usize, position: usize) {
    CURSOR_POSITION.with(|arr| batch(|| arr.set_value(index, position)));
}

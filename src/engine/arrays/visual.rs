//! Visual Arrays - colors, font size and class list.
//!
//! `CLASSES` holds a space-separated class list; the frame buffer resolves
//! it against the stylesheet on every frame.

use spark_signals::{batch, TrackedSlotArray};

use super::{reset_array, tracked};
use crate::types::{FontSize, Rgba};

thread_local! {
    static FG_COLOR: TrackedSlotArray<Rgba> = tracked(Rgba::TERMINAL_DEFAULT);
    static BG_COLOR: TrackedSlotArray<Rgba> = tracked(Rgba::TERMINAL_DEFAULT);
    static FONT_SIZE: TrackedSlotArray<FontSize> = tracked(FontSize::Medium);
    static CLASSES: TrackedSlotArray<String> = tracked(String::new());
}

pub fn ensure_capacity(index: usize) {
    FG_COLOR.with(|arr| arr.ensure_capacity(index + 1));
    BG_COLOR.with(|arr| arr.ensure_capacity(index + 1));
    FONT_SIZE.with(|arr| arr.ensure_capacity(index + 1));
    CLASSES.with(|arr| arr.ensure_capacity(index + 1));
}

pub fn clear_at_index(index: usize) {
    batch(|| {
        FG_COLOR.with(|arr| arr.clear(index));
        BG_COLOR.with(|arr| arr.clear(index));
        FONT_SIZE.with(|arr| arr.clear(index));
        CLASSES.with(|arr| arr.clear(index));
    });
}

pub fn reset() {
    FG_COLOR.with(reset_array);
    BG_COLOR.with(reset_array);
    FONT_SIZE.with(reset_array);
    CLASSES.with(reset_array);
}

// =============================================================================
// Colors
// =============================================================================

pub fn get_fg_color(index: usize) -> Rgba {
    FG_COLOR.with(|arr| arr.get(index).unwrap_or(Rgba::TERMINAL_DEFAULT))
}

pub fn set_fg_color(index: usize, color: Rgba) {
    FG_COLOR.with(|arr| batch(|| arr.set_value(index, color)));
}

pub fn set_fg_color_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Rgba + 'static,
{
    FG_COLOR.with(|arr| batch(|| arr.set_getter(index, getter)));
}

pub fn get_bg_color(index: usize) -> Rgba {
    BG_COLOR.with(|arr| arr.get(index).unwrap_or(Rgba::TERMINAL_DEFAULT))
}

pub fn set_bg_color(index: usize, color: Rgba) {
    BG_COLOR.with(|arr| batch(|| arr.set_value(index, color)));
}

pub fn set_bg_color_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Rgba + 'static,
{
    BG_COLOR.with(|arr| batch(|| arr.set_getter(index, getter)));
}

// =============================================================================
// Font Size
// =============================================================================

pub fn get_font_size(index: usize) -> FontSize {
    FONT_SIZE.with(|arr| arr.get(index).unwrap_or(FontSize::Medium))
}

pub fn set_font_size(index: usize, size: FontSize) {
    FONT_SIZE.with(|arr| batch(|| arr.set_value(index, size)));
}

// =============================================================================
// Classes
// =============================================================================

/// Get the class list at index (reactive).
pub fn get_classes(index: usize) -> String {
    CLASSES.with(|arr| arr.get(index).unwrap_or_default())
}

/// Check whether `class` is in the class list at index.
pub fn has_class(index: usize, class: &str) -> bool {
    get_classes(index).split_whitespace().any(|c| c == class)
}

pub fn set_classes(index: usize, classes: String) {
    CLASSES.with(|arr| batch(|| arr.set_value(index, classes)));
}

pub fn set_classes_getter<F>(index: usize, getter: F)
where
    F: Fn() -> String + 'static,
{
    CLASSES.with(|arr| batch(|| arr.set_getter(index, getter)));
}

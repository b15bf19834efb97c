//! Text Arrays - text content and attributes.

use spark_signals::{batch, Signal, TrackedSlotArray};

use super::{reset_array, tracked};
use crate::types::Attr;

thread_local! {
    static TEXT_CONTENT: TrackedSlotArray<String> = tracked(String::new());
    static TEXT_ATTRS: TrackedSlotArray<Attr> = tracked(Attr::NONE);
}

pub fn ensure_capacity(index: usize) {
    TEXT_CONTENT.with(|arr| arr.ensure_capacity(index + 1));
    TEXT_ATTRS.with(|arr| arr.ensure_capacity(index + 1));
}

pub fn clear_at_index(index: usize) {
    batch(|| {
        TEXT_CONTENT.with(|arr| arr.clear(index));
        TEXT_ATTRS.with(|arr| arr.clear(index));
    });
}

pub fn reset() {
    TEXT_CONTENT.with(reset_array);
    TEXT_ATTRS.with(reset_array);
}

// =============================================================================
// Text Content
// =============================================================================

/// Get text content at index (reactive).
pub fn get_text_content(index: usize) -> String {
    TEXT_CONTENT.with(|arr| arr.get(index).unwrap_or_default())
}

pub fn set_text_content(index: usize, content: String) {
    TEXT_CONTENT.with(|arr| batch(|| arr.set_value(index, content)));
}

pub fn set_text_content_getter<F>(index: usize, getter: F)
where
    F: Fn() -> String + 'static,
{
    TEXT_CONTENT.with(|arr| batch(|| arr.set_getter(index, getter)));
}

pub fn set_text_content_signal(index: usize, sig: &Signal<String>) {
    TEXT_CONTENT.with(|arr| batch(|| arr.set_signal(index, sig)));
}

// =============================================================================
// Text Attributes
// =============================================================================

/// Get text attributes at index (reactive).
pub fn get_text_attrs(index: usize) -> Attr {
    TEXT_ATTRS.with(|arr| arr.get(index).unwrap_or(Attr::NONE))
}

pub fn set_text_attrs(index: usize, attrs: Attr) {
    TEXT_ATTRS.with(|arr| batch(|| arr.set_value(index, attrs)));
}

pub fn set_text_attrs_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Attr + 'static,
{
    TEXT_ATTRS.with(|arr| batch(|| arr.set_getter(index, getter)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::{effect, signal};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_text_content() {
        reset();
        assert_eq!(get_text_content(0), "");
        set_text_content(0, "Home".to_string());
        assert_eq!(get_text_content(0), "Home");
    }

    #[test]
    fn test_text_content_signal() {
        reset();
        let title = signal("Ana".to_string());
        set_text_content_signal(2, &title);
        assert_eq!(get_text_content(2), "Ana");
        title.set(String::new());
        assert_eq!(get_text_content(2), "");
    }

    #[test]
    fn test_clear_unbinds_signal() {
        reset();
        let title = signal("Ana".to_string());
        set_text_content_signal(1, &title);
        clear_at_index(1);

        title.set("Jisel".to_string());
        assert_eq!(get_text_content(1), "");
    }

    #[test]
    fn test_effect_reads_array_it_was_woken_by() {
        reset();
        let seen = Rc::new(RefCell::new(String::new()));
        let seen_clone = seen.clone();
        let _stop = effect(move || *seen_clone.borrow_mut() = get_text_content(4));

        set_text_content(4, "About".to_string());
        assert_eq!(*seen.borrow(), "About");
    }

    #[test]
    fn test_text_attrs() {
        reset();
        assert_eq!(get_text_attrs(0), Attr::NONE);
        set_text_attrs(0, Attr::BOLD | Attr::UNDERLINE);
        assert_eq!(get_text_attrs(0), Attr::BOLD | Attr::UNDERLINE);
    }
}

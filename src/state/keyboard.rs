//! Keyboard Module - event types and the handler registry
//!
//! Does not read the terminal (see `input`) and does not bind the shell
//! shortcuts (see `global_keys`).
//!
//! - `on(handler)` - shortcut handler, sees presses focus left unconsumed
//! - `on_focused(i, handler)` - runs only while component `i` has focus
//!
//! Handlers return `true` to consume the event. Every subscription returns
//! a cleanup closure.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    /// True when no modifier other than shift is held.
    ///
    /// Shift is part of the character itself for printable keys.
    pub fn is_plain(&self) -> bool {
        !self.ctrl && !self.alt
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowLeft")
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Press and repeat both count as input; release does not.
    pub fn is_press(&self) -> bool {
        self.state != KeyState::Release
    }

    /// The character this event types, if it is a printable key.
    pub fn printable_char(&self) -> Option<char> {
        if !self.modifiers.is_plain() {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

/// Handler for keyboard events. Return true to consume the event.
pub type KeyHandler = Rc<dyn Fn(&KeyboardEvent) -> bool>;

/// Registered handlers, each tagged with the id its cleanup removes.
#[derive(Default)]
struct Handlers {
    shortcuts: Vec<(usize, KeyHandler)>,
    focused: HashMap<usize, Vec<(usize, KeyHandler)>>,
    next_id: usize,
}

impl Handlers {
    fn next_id(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    fn focused_for(&self, index: usize) -> Vec<KeyHandler> {
        self.focused
            .get(&index)
            .map(|list| list.iter().map(|(_, h)| h.clone()).collect())
            .unwrap_or_default()
    }
}

thread_local! {
    static HANDLERS: RefCell<Handlers> = RefCell::new(Handlers::default());
}

// =============================================================================
// DISPATCH
// =============================================================================
//
// Handlers are cloned out of the registry before they run. A handler may
// navigate, which unmounts components, which removes handlers.

/// Offer a key press to the shortcut handlers, in registration order.
pub fn dispatch_shortcuts(event: &KeyboardEvent) -> bool {
    if !event.is_press() {
        return false;
    }
    let handlers: Vec<KeyHandler> =
        HANDLERS.with(|h| h.borrow().shortcuts.iter().map(|(_, h)| h.clone()).collect());
    handlers.iter().any(|handler| handler(event))
}

/// Offer a key press to the handlers of the focused component.
pub fn dispatch_focused(focused: Option<usize>, event: &KeyboardEvent) -> bool {
    let Some(index) = focused else { return false };
    if !event.is_press() {
        return false;
    }
    let handlers = HANDLERS.with(|h| h.borrow().focused_for(index));
    handlers.iter().any(|handler| handler(event))
}

// =============================================================================
// SUBSCRIPTION
// =============================================================================

/// Register a shortcut handler. It sees every press nobody focused consumed.
pub fn on<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = HANDLERS.with(|h| {
        let mut h = h.borrow_mut();
        let id = h.next_id();
        h.shortcuts.push((id, Rc::new(handler)));
        id
    });

    move || {
        HANDLERS.with(|h| h.borrow_mut().shortcuts.retain(|(other, _)| *other != id));
    }
}

/// Register a handler that runs only while component `index` has focus.
pub fn on_focused<F>(index: usize, handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = HANDLERS.with(|h| {
        let mut h = h.borrow_mut();
        let id = h.next_id();
        h.focused.entry(index).or_default().push((id, Rc::new(handler)));
        id
    });

    move || {
        HANDLERS.with(|h| {
            let mut h = h.borrow_mut();
            if let Some(list) = h.focused.get_mut(&index) {
                list.retain(|(other, _)| *other != id);
                if list.is_empty() {
                    h.focused.remove(&index);
                }
            }
        });
    }
}

/// Drop every focused handler of a released component.
pub fn cleanup_index(index: usize) {
    HANDLERS.with(|h| {
        h.borrow_mut().focused.remove(&index);
    });
}

/// Number of handlers registered for component `index`.
pub fn focused_handler_count(index: usize) -> usize {
    HANDLERS.with(|h| h.borrow().focused.get(&index).map_or(0, Vec::len))
}

/// Reset keyboard state (for testing)
pub fn reset_keyboard_state() {
    HANDLERS.with(|h| *h.borrow_mut() = Handlers::default());
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup() {
        reset_keyboard_state();
    }

    #[test]
    fn test_shortcut_cleanup() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let cleanup = on(move |_event| {
            count_clone.set(count_clone.get() + 1);
            false
        });

        dispatch_shortcuts(&KeyboardEvent::new("a"));
        dispatch_shortcuts(&KeyboardEvent::new("b"));
        assert_eq!(count.get(), 2);

        cleanup();
        dispatch_shortcuts(&KeyboardEvent::new("c"));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_first_consumer_stops_dispatch() {
        setup();

        let later = Rc::new(Cell::new(0));
        let later_clone = later.clone();
        let _first = on(|event| event.key == "Enter");
        let _second = on(move |_| {
            later_clone.set(later_clone.get() + 1);
            false
        });

        assert!(dispatch_shortcuts(&KeyboardEvent::new("Enter")));
        assert_eq!(later.get(), 0);

        assert!(!dispatch_shortcuts(&KeyboardEvent::new("x")));
        assert_eq!(later.get(), 1);
    }

    #[test]
    fn test_release_not_dispatched() {
        setup();

        let hit = Rc::new(Cell::new(false));
        let hit_clone = hit.clone();
        let _cleanup = on(move |_| {
            hit_clone.set(true);
            true
        });
        let _focused = on_focused(0, |_| true);

        let mut event = KeyboardEvent::new("a");
        event.state = KeyState::Release;
        assert!(!dispatch_shortcuts(&event));
        assert!(!dispatch_focused(Some(0), &event));
        assert!(!hit.get());
    }

    #[test]
    fn test_focused_handlers() {
        setup();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let _cleanup = on_focused(3, move |event| {
            seen_clone.borrow_mut().push(event.key.clone());
            true
        });

        let event = KeyboardEvent::new("q");
        assert!(!dispatch_focused(None, &event));
        assert!(!dispatch_focused(Some(2), &event));
        assert!(dispatch_focused(Some(3), &event));
        assert_eq!(*seen.borrow(), vec!["q".to_string()]);

        cleanup_index(3);
        assert!(!dispatch_focused(Some(3), &event));
    }

    #[test]
    fn test_handler_may_unsubscribe_during_dispatch() {
        setup();

        let slot: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(None));
        let slot_clone = slot.clone();
        let cleanup = on_focused(0, move |_| {
            if let Some(cleanup) = slot_clone.borrow_mut().take() {
                cleanup();
            }
            cleanup_index(0);
            true
        });
        *slot.borrow_mut() = Some(Box::new(cleanup));

        assert!(dispatch_focused(Some(0), &KeyboardEvent::new("Enter")));
        assert!(!dispatch_focused(Some(0), &KeyboardEvent::new("Enter")));
    }

    #[test]
    fn test_printable_char() {
        assert_eq!(KeyboardEvent::new("a").printable_char(), Some('a'));
        assert_eq!(
            KeyboardEvent::with_modifiers("A", Modifiers::shift()).printable_char(),
            Some('A')
        );
        assert_eq!(KeyboardEvent::new("Enter").printable_char(), None);
        assert_eq!(
            KeyboardEvent::with_modifiers("c", Modifiers::ctrl()).printable_char(),
            None
        );
    }
}

//! Global Keys Module - Global keyboard shortcuts
//!
//! - Ctrl+C: Graceful shutdown
//! - Tab: Focus next component
//! - Shift+Tab: Focus previous component
//!
//! Registered on mount and cleaned up on unmount.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use super::focus;
use super::keyboard::{self, KeyboardEvent};

/// Cleanup handle for global key handlers
pub struct GlobalKeysHandle {
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl GlobalKeysHandle {
    /// Clean up all global key handlers
    pub fn cleanup(self) {
        for cleanup in self.cleanups {
            cleanup();
        }
    }
}

/// Set up global key handlers.
///
/// Ctrl+C stores `false` into `running`.
pub fn setup_global_keys(running: Arc<AtomicBool>) -> GlobalKeysHandle {
    let ctrl_c = keyboard::on(move |event| {
        if event.modifiers.ctrl && event.key == "c" {
            debug!("ctrl+c received, stopping");
            running.store(false, Ordering::SeqCst);
            true
        } else {
            false
        }
    });

    let tab = keyboard::on(|event| {
        if event.key != "Tab" || event.modifiers.ctrl {
            return false;
        }
        if event.modifiers.shift {
            focus::focus_previous();
        } else {
            focus::focus_next();
        }
        true
    });

    GlobalKeysHandle {
        cleanups: vec![Box::new(ctrl_c), Box::new(tab)],
    }
}

/// Central keyboard router.
///
/// The focused component sees the event first; global handlers only get
/// what it leaves unconsumed.
pub fn route_keyboard_event(event: KeyboardEvent) -> bool {
    if !event.is_press() {
        return false;
    }
    keyboard::dispatch_focused(focus::get_focused_index(), &event)
        || keyboard::dispatch_shortcuts(&event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::interaction;
    use crate::engine::{allocate_index, reset_registry};
    use crate::state::keyboard::{reset_keyboard_state, Modifiers};

    fn setup() {
        reset_registry();
        focus::reset_focus_state();
        reset_keyboard_state();
    }

    #[test]
    fn test_ctrl_c_sets_running_false() {
        setup();

        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(running.clone());

        route_keyboard_event(KeyboardEvent::new("c"));
        assert!(running.load(Ordering::SeqCst));

        route_keyboard_event(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert!(!running.load(Ordering::SeqCst));

        handle.cleanup();
    }

    #[test]
    fn test_cleanup_removes_handlers() {
        setup();

        let running = Arc::new(AtomicBool::new(true));
        setup_global_keys(running.clone()).cleanup();

        route_keyboard_event(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert!(running.load(Ordering::SeqCst));
    }

    #[test]
    fn test_tab_and_shift_tab_cycle_focus() {
        setup();
        let a = allocate_index(None);
        let b = allocate_index(None);
        interaction::set_focusable(a, true);
        interaction::set_focusable(b, true);

        let handle = setup_global_keys(Arc::new(AtomicBool::new(true)));

        route_keyboard_event(KeyboardEvent::new("Tab"));
        assert_eq!(focus::get_focused_index(), Some(a));
        route_keyboard_event(KeyboardEvent::new("Tab"));
        assert_eq!(focus::get_focused_index(), Some(b));
        route_keyboard_event(KeyboardEvent::with_modifiers("Tab", Modifiers::shift()));
        assert_eq!(focus::get_focused_index(), Some(a));

        handle.cleanup();
    }

    #[test]
    fn test_focused_handler_wins_over_global() {
        setup();
        let a = allocate_index(None);
        interaction::set_focusable(a, true);
        focus::focus(a);

        let _focused = keyboard::on_focused(a, |event| event.key == "Tab");
        let handle = setup_global_keys(Arc::new(AtomicBool::new(true)));

        assert!(route_keyboard_event(KeyboardEvent::new("Tab")));
        assert_eq!(focus::get_focused_index(), Some(a));

        handle.cleanup();
    }
}

//! Control Flow Primitives - Keyed rendering.
//!
//! [`keyed`] re-renders a branch whenever a reactive key changes. The router
//! outlet is built on it.
//!
//! # Lifecycle
//!
//! - The branch renders under the parent that was current at creation
//! - On key change the old branch is cleaned up before the new one renders
//! - The returned cleanup stops tracking and destroys the live branch; so
//!   does destroying the parent

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{effect, effect_scope, on_scope_dispose, untrack};

use crate::engine::{get_current_parent_index, on_destroy, pop_parent_context, push_parent_context};
use crate::primitives::Cleanup;

/// Render `render(key)` and redo it every time `key_fn` yields a new key.
///
/// `key_fn` is the only reactive read; signals read inside `render` do not
/// re-trigger the branch.
pub fn keyed<K, KeyF, RenderF>(key_fn: KeyF, render: RenderF) -> Cleanup
where
    K: Clone + PartialEq + 'static,
    KeyF: Fn() -> K + 'static,
    RenderF: Fn(&K) -> Cleanup + 'static,
{
    let parent_index = get_current_parent_index();

    let cleanup: Rc<RefCell<Option<Cleanup>>> = Rc::new(RefCell::new(None));
    let last_key: Rc<RefCell<Option<K>>> = Rc::new(RefCell::new(None));

    let scope = effect_scope(false);

    let cleanup_for_update = cleanup.clone();
    let cleanup_for_dispose = cleanup;

    let update = move |key: K| {
        if last_key.borrow().as_ref() == Some(&key) {
            return;
        }
        *last_key.borrow_mut() = Some(key.clone());

        let previous = cleanup_for_update.borrow_mut().take();
        if let Some(previous) = previous {
            previous();
        }

        if let Some(parent) = parent_index {
            push_parent_context(parent);
        }
        let next = render(&key);
        if parent_index.is_some() {
            pop_parent_context();
        }

        *cleanup_for_update.borrow_mut() = Some(next);
    };

    scope.run(move || {
        let _effect_cleanup = effect(move || {
            let key = key_fn();
            untrack(|| update(key));
        });

        on_scope_dispose(move || {
            let current = cleanup_for_dispose.borrow_mut().take();
            if let Some(current) = current {
                current();
            }
        });
    });

    // Stop when the caller cleans up or when the parent is destroyed,
    // whichever comes first.
    let stop: Rc<RefCell<Option<Cleanup>>> = Rc::new(RefCell::new(Some(Box::new(move || scope.stop()))));
    if let Some(parent) = parent_index {
        let stop = stop.clone();
        on_destroy(parent, move || run_once(&stop));
    }

    Box::new(move || run_once(&stop))
}

fn run_once(slot: &RefCell<Option<Cleanup>>) {
    let cleanup = slot.borrow_mut().take();
    if let Some(cleanup) = cleanup {
        cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{allocate_index, get_allocated_count, release_index, reset_registry};
    use spark_signals::signal;
    use std::cell::Cell;

    fn create_test_component() -> Cleanup {
        let index = allocate_index(None);
        Box::new(move || release_index(index))
    }

    #[test]
    fn test_keyed_cleanup_releases_branch() {
        reset_registry();

        let key = signal(false);
        let key_clone = key.clone();

        let cleanup = keyed(move || key_clone.get(), |_| create_test_component());
        assert_eq!(get_allocated_count(), 1);

        key.set(true);
        assert_eq!(get_allocated_count(), 1);

        cleanup();
        assert_eq!(get_allocated_count(), 0);

        key.set(false);
        assert_eq!(get_allocated_count(), 0);
    }

    #[test]
    fn test_keyed_render_reads_are_untracked() {
        reset_registry();

        let key = signal(0u8);
        let other = signal(0u8);
        let (key_clone, other_clone) = (key.clone(), other.clone());
        let renders = Rc::new(Cell::new(0));
        let renders_clone = renders.clone();

        let _cleanup = keyed(
            move || key_clone.get(),
            move |_| {
                let _ = other_clone.get();
                renders_clone.set(renders_clone.get() + 1);
                create_test_component()
            },
        );

        other.set(1);
        assert_eq!(renders.get(), 1);
        key.set(1);
        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn test_keyed_renders_once_per_key() {
        reset_registry();

        let key = signal("home".to_string());
        let key_clone = key.clone();
        let renders = Rc::new(RefCell::new(Vec::new()));
        let renders_clone = renders.clone();

        let _cleanup = keyed(
            move || key_clone.get(),
            move |k: &String| {
                renders_clone.borrow_mut().push(k.clone());
                create_test_component()
            },
        );

        key.set("home".to_string());
        key.set("about".to_string());

        assert_eq!(*renders.borrow(), vec!["home".to_string(), "about".to_string()]);
        assert_eq!(get_allocated_count(), 1);
    }

    #[test]
    fn test_keyed_cleans_up_before_render() {
        reset_registry();

        let key = signal(0u8);
        let key_clone = key.clone();
        let live = Rc::new(Cell::new(0i32));
        let max_live = Rc::new(Cell::new(0i32));
        let (live_clone, max_clone) = (live.clone(), max_live.clone());

        let _cleanup = keyed(
            move || key_clone.get(),
            move |_| {
                live_clone.set(live_clone.get() + 1);
                max_clone.set(max_clone.get().max(live_clone.get()));
                let live_for_cleanup = live_clone.clone();
                Box::new(move || live_for_cleanup.set(live_for_cleanup.get() - 1))
            },
        );

        key.set(1);
        key.set(2);
        assert_eq!(live.get(), 1);
        assert_eq!(max_live.get(), 1);
    }

    #[test]
    fn test_keyed_children_get_captured_parent() {
        reset_registry();

        let parent = allocate_index(None);
        push_parent_context(parent);
        let _cleanup = keyed(|| 0u8, |_| {
            let child = allocate_index(None);
            crate::engine::arrays::core::set_parent_index(
                child,
                crate::engine::get_current_parent_index(),
            );
            Box::new(move || release_index(child))
        });
        pop_parent_context();

        assert_eq!(crate::engine::get_children(parent), vec![1]);
    }

    #[test]
    fn test_parent_release_stops_keyed() {
        reset_registry();

        let key = signal(0u8);
        let key_clone = key.clone();
        let renders = Rc::new(Cell::new(0));
        let renders_clone = renders.clone();

        let parent = allocate_index(None);
        push_parent_context(parent);
        let _cleanup = keyed(
            move || key_clone.get(),
            move |_| {
                renders_clone.set(renders_clone.get() + 1);
                Box::new(|| {})
            },
        );
        pop_parent_context();

        release_index(parent);
        key.set(1);
        assert_eq!(renders.get(), 1);
    }
}

//! Component Registry - Index allocation for parallel arrays.
//!
//! Manages the lifecycle of component indices:
//! - ID ↔ Index bidirectional mapping
//! - Free index pool for reuse
//! - ReactiveSet of allocated indices (deriveds react to add/remove)
//! - Parent context stack for nested component creation
//! - Destroy callbacks

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{batch, ReactiveSet};

use super::arrays;
use super::flex_node_registry;

// =============================================================================
// Registry State
// =============================================================================

/// Non-reactive bookkeeping. The allocated set lives apart so layout and
/// frame deriveds can subscribe to it.
#[derive(Default)]
struct Registry {
    id_to_index: HashMap<String, usize>,
    index_to_id: HashMap<usize, String>,
    free: Vec<usize>,
    next_index: usize,
    id_counter: usize,
    parents: Vec<usize>,
    on_destroy: HashMap<usize, Vec<Box<dyn FnOnce()>>>,
}

impl Registry {
    fn generate_id(&mut self) -> String {
        let id = format!("c{}", self.id_counter);
        self.id_counter += 1;
        id
    }

    fn take_index(&mut self) -> usize {
        self.free.pop().unwrap_or_else(|| {
            let index = self.next_index;
            self.next_index += 1;
            index
        })
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());

    /// Currently allocated indices. Reactive so that layout re-runs when
    /// components mount or unmount.
    static ALLOCATED_INDICES: RefCell<ReactiveSet<usize>> = RefCell::new(ReactiveSet::new());
}

/// Mutate the allocated set. Reactions are held back until the borrow is
/// released, since they read the set themselves.
fn with_allocated_mut<R>(f: impl FnOnce(&mut ReactiveSet<usize>) -> R) -> R {
    batch(|| ALLOCATED_INDICES.with(|set| f(&mut *set.borrow_mut())))
}

fn with_allocated<R>(f: impl FnOnce(&ReactiveSet<usize>) -> R) -> R {
    ALLOCATED_INDICES.with(|set| f(&*set.borrow()))
}

// =============================================================================
// Parent Context Stack
// =============================================================================

/// Get the current parent index, `None` at the root.
pub fn get_current_parent_index() -> Option<usize> {
    REGISTRY.with(|reg| reg.borrow().parents.last().copied())
}

/// Push a parent index onto the stack.
pub fn push_parent_context(index: usize) {
    REGISTRY.with(|reg| reg.borrow_mut().parents.push(index));
}

/// Pop a parent index from the stack.
pub fn pop_parent_context() {
    REGISTRY.with(|reg| {
        reg.borrow_mut().parents.pop();
    });
}

// =============================================================================
// Index Allocation
// =============================================================================

/// Allocate an index for a new component.
///
/// If `id` is already registered its existing index is returned.
pub fn allocate_index(id: Option<&str>) -> usize {
    let index = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();

        let component_id = match id {
            Some(id) => id.to_string(),
            None => reg.generate_id(),
        };

        if let Some(&existing) = reg.id_to_index.get(&component_id) {
            return Err(existing);
        }

        let index = reg.take_index();
        reg.id_to_index.insert(component_id.clone(), index);
        reg.index_to_id.insert(index, component_id);
        Ok(index)
    });

    match index {
        Ok(index) => {
            with_allocated_mut(|set| set.insert(index));
            arrays::ensure_all_capacity(index);
            index
        }
        Err(existing) => existing,
    }
}

/// Release an index back to the pool.
///
/// Children are released first, recursively.
pub fn release_index(index: usize) {
    let Some(id) = get_id(index) else { return };

    for child in get_children(index) {
        release_index(child);
    }

    run_destroy_callbacks(index);
    flex_node_registry::destroy_flex_node(index);

    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.id_to_index.remove(&id);
        reg.index_to_id.remove(&index);
        reg.free.push(index);
    });
    with_allocated_mut(|set| set.remove(&index));

    arrays::clear_all_at_index(index);

    // Last component gone: reset arrays and restart numbering.
    if with_allocated(|set| set.raw().is_empty()) {
        arrays::reset_all_arrays();
        flex_node_registry::reset_flex_nodes();
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.free.clear();
            reg.next_index = 0;
        });
    }
}

// =============================================================================
// Destroy Callbacks
// =============================================================================

/// Register a callback to run when the component at `index` is destroyed.
pub fn on_destroy(index: usize, callback: impl FnOnce() + 'static) {
    REGISTRY.with(|reg| {
        reg.borrow_mut()
            .on_destroy
            .entry(index)
            .or_default()
            .push(Box::new(callback));
    });
}

fn run_destroy_callbacks(index: usize) {
    // Taken out of the registry first: callbacks may touch the registry.
    let callbacks = REGISTRY.with(|reg| reg.borrow_mut().on_destroy.remove(&index));
    for callback in callbacks.into_iter().flatten() {
        callback();
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// Get index for a component ID.
pub fn get_index(id: &str) -> Option<usize> {
    REGISTRY.with(|reg| reg.borrow().id_to_index.get(id).copied())
}

/// Get ID for an index.
pub fn get_id(index: usize) -> Option<String> {
    REGISTRY.with(|reg| reg.borrow().index_to_id.get(&index).cloned())
}

/// Get all currently allocated indices.
///
/// Creates a reactive dependency when called from a derived or effect.
pub fn get_allocated_indices() -> Vec<usize> {
    with_allocated(|set| set.iter().copied().collect())
}

/// Direct children of `index`, in allocation order.
pub fn get_children(index: usize) -> Vec<usize> {
    let mut children: Vec<usize> = get_allocated_indices()
        .into_iter()
        .filter(|&child| arrays::core::get_parent_index(child) == Some(index))
        .collect();
    children.sort_unstable();
    children
}

/// Check if an index is currently allocated.
pub fn is_allocated(index: usize) -> bool {
    with_allocated(|set| set.contains(&index))
}

/// Count of currently allocated components.
pub fn get_allocated_count() -> usize {
    with_allocated(|set| set.len())
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset all registry state.
pub fn reset_registry() {
    REGISTRY.with(|reg| *reg.borrow_mut() = Registry::default());
    with_allocated_mut(|set| set.clear());
    flex_node_registry::reset_flex_nodes();
    arrays::reset_all_arrays();
}

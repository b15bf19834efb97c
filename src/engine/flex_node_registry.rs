//! FlexNode Registry - index → FlexNode mapping.
//!
//! Primitives create a node right after `allocate_index()`; `release_index()`
//! destroys it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::flex_node::FlexNode;

thread_local! {
    static FLEX_NODES: RefCell<HashMap<usize, Rc<FlexNode>>> = RefCell::new(HashMap::new());
}

/// Create the FlexNode for `index`, or return the existing one.
pub fn create_flex_node(index: usize) -> Rc<FlexNode> {
    FLEX_NODES.with(|nodes| {
        nodes
            .borrow_mut()
            .entry(index)
            .or_insert_with(|| Rc::new(FlexNode::new(index)))
            .clone()
    })
}

/// Disconnect and drop the FlexNode for `index`.
pub fn destroy_flex_node(index: usize) {
    let node = FLEX_NODES.with(|nodes| nodes.borrow_mut().remove(&index));
    if let Some(node) = node {
        node.disconnect();
    }
}

/// Get the FlexNode for a component index.
pub fn get_flex_node(index: usize) -> Option<Rc<FlexNode>> {
    FLEX_NODES.with(|nodes| nodes.borrow().get(&index).cloned())
}

/// Disconnect every node and clear the registry.
pub fn reset_flex_nodes() {
    let drained: Vec<Rc<FlexNode>> =
        FLEX_NODES.with(|nodes| nodes.borrow_mut().drain().map(|(_, node)| node).collect());
    for node in drained {
        node.disconnect();
    }
}

/// Number of live FlexNodes.
pub fn flex_node_count() -> usize {
    FLEX_NODES.with(|nodes| nodes.borrow().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimension;

    #[test]
    fn test_create_is_idempotent() {
        reset_flex_nodes();

        let node = create_flex_node(0);
        let again = create_flex_node(0);
        assert!(Rc::ptr_eq(&node, &again));
        assert_eq!(flex_node_count(), 1);
    }

    #[test]
    fn test_destroy_flex_node() {
        reset_flex_nodes();

        let node = create_flex_node(4);
        node.width.set_value(Dimension::Cells(100));

        destroy_flex_node(4);
        assert_eq!(flex_node_count(), 0);
        assert!(get_flex_node(4).is_none());
        // Detached handle was reset on the way out
        assert_eq!(node.width.get().unwrap_or_default(), Dimension::Auto);
    }
}

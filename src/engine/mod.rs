//! Engine - Component registry and parallel arrays.
//!
//! Components are not objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: Box  (parent=None, direction=column)
//! Index 1: Text (parent=0, content="You Rock with DevOps!")
//! Index 2: Box  (parent=0, direction=row, bg=#88d8be)
//! ```
//!
//! - Registry: index allocation, ID mapping, parent context
//! - FlexNode: per-component layout slots
//! - Arrays: reactive per-index component state

mod registry;
mod flex_node;
mod flex_node_registry;
pub mod arrays;

pub use registry::*;
pub use flex_node::*;
pub use flex_node_registry::*;

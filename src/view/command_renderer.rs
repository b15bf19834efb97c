//! Renderer for detached contexts.
//!
//! A detached context has no access to elements. Style requests become
//! commands that the owning context drains and replays.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use super::{ElementRef, Style, ViewRenderer};

/// A recorded style request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleCommand {
    pub element: ElementRef,
    pub style: Style,
}

/// Records style requests instead of applying them.
///
/// Clones share the same queue.
#[derive(Debug, Default, Clone)]
pub struct CommandRenderer {
    queue: Rc<RefCell<Vec<StyleCommand>>>,
}

impl CommandRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued commands.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Drain the queue.
    pub fn take_commands(&self) -> Vec<StyleCommand> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }
}

impl ViewRenderer for CommandRenderer {
    fn set_element_style(&self, element: ElementRef, style: Style) {
        trace!(?element, property = style.property(), "queue style command");
        self.queue.borrow_mut().push(StyleCommand { element, style });
    }
}

/// Apply recorded commands on `target`, in order.
pub fn replay(commands: impl IntoIterator<Item = StyleCommand>, target: &dyn ViewRenderer) {
    for command in commands {
        target.set_element_style(command.element, command.style);
    }
}

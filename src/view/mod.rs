//! View Renderer - style mutation through an abstraction.
//!
//! Components and directives never write to an element directly. They hold
//! an opaque [`ElementRef`] and ask a [`ViewRenderer`] to change it. Each
//! execution context supplies its own renderer:
//!
//! - [`ArrayRenderer`] - the interactive context; writes into the visual
//!   and text arrays of the live component tree.
//! - [`CommandRenderer`] - a detached context (worker or server analog)
//!   with no element access; records [`StyleCommand`]s that another context
//!   replays.
//!
//! ```ignore
//! use devops_shell::view::{ArrayRenderer, Style, ViewRenderer};
//! use devops_shell::types::FontSize;
//!
//! let renderer = ArrayRenderer::new();
//! renderer.set_element_style(element, Style::FontSize(FontSize::XLarge));
//! ```

mod element;
mod style;
mod array_renderer;
mod command_renderer;

pub use element::ElementRef;
pub use style::Style;
pub use array_renderer::ArrayRenderer;
pub use command_renderer::{replay, CommandRenderer, StyleCommand};

/// Narrow capability for requesting visual changes on an element.
///
/// Implementations decide how (or whether) the request reaches a real
/// element; callers only ever see the handle.
pub trait ViewRenderer {
    /// Request that `style` be applied to `element`.
    fn set_element_style(&self, element: ElementRef, style: Style);
}

impl<R: ViewRenderer + ?Sized> ViewRenderer for std::rc::Rc<R> {
    fn set_element_style(&self, element: ElementRef, style: Style) {
        (**self).set_element_style(element, style)
    }
}

//! XLarge - renders its host element with an extra-large font.

use std::rc::Rc;

use tracing::debug;

use crate::types::FontSize;
use crate::view::{ElementRef, Style, ViewRenderer};
use super::AttachFn;

/// Sets the host element's font size to `x-large`, once, when attached.
///
/// The style goes through the renderer so the directive works in contexts
/// without element access. Nothing is undone on detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XLargeDirective {
    element: ElementRef,
}

impl XLargeDirective {
    /// The font size the directive applies.
    pub const FONT_SIZE: FontSize = FontSize::XLarge;

    pub fn new(element: ElementRef, renderer: &dyn ViewRenderer) -> Self {
        debug!(?element, "attach x-large");
        renderer.set_element_style(element, Style::FontSize(Self::FONT_SIZE));
        Self { element }
    }

    /// Element the directive is attached to.
    pub fn element(&self) -> ElementRef {
        self.element
    }

    /// Attach hook for primitive props.
    pub fn attach(renderer: Rc<dyn ViewRenderer>) -> AttachFn {
        Rc::new(move |element| {
            XLargeDirective::new(element, renderer.as_ref());
        })
    }
}

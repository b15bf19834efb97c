//! Renderer for the interactive context.

use tracing::{debug, warn};

use crate::engine::arrays::{text, visual};
use crate::engine::is_allocated;
use super::{ElementRef, Style, ViewRenderer};

/// Applies style requests to the live component arrays.
///
/// Requests for elements that are no longer mounted are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArrayRenderer;

impl ArrayRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ViewRenderer for ArrayRenderer {
    fn set_element_style(&self, element: ElementRef, style: Style) {
        let index = element.index();
        if !is_allocated(index) {
            warn!(?element, property = style.property(), "style request for unmounted element");
            return;
        }

        debug!(?element, property = style.property(), value = %style.value(), "set element style");
        match style {
            Style::FontSize(size) => visual::set_font_size(index, size),
            Style::Foreground(color) => visual::set_fg_color(index, color),
            Style::Background(color) => visual::set_bg_color(index, color),
            Style::Attrs(attrs) => text::set_text_attrs(index, attrs),
        }
    }
}

//! FrameBuffer Derived - Reactive frame buffer computation.
//!
//! Walks the visible component tree in order and paints it into a
//! [`FrameBuffer`] using the computed layout, the visual arrays and the
//! active stylesheet. Re-runs when any of those change.

use std::collections::HashMap;

use spark_signals::{derived, Derived};

use crate::engine::arrays::{core, text, visual};
use crate::engine::{get_allocated_indices, get_flex_node};
use crate::layout::{char_width, wrap_text, ComputedLayout};
use crate::primitives::cursor_position;
use crate::renderer::FrameBuffer;
use crate::state::focus;
use crate::theme::{self, ClassStyle, Stylesheet};
use crate::types::{Attr, ClipRect, ComponentType, RenderMode, Rgba};

use super::terminal::{render_mode_signal, terminal_height_signal, terminal_width_signal};

/// Class added to the focused component when resolving styles.
pub const FOCUSED_CLASS: &str = "focused";

/// Result of frame buffer computation.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBufferResult {
    pub buffer: FrameBuffer,
    /// Terminal size at time of render.
    pub terminal_size: (u16, u16),
}

/// Create the frame buffer derived on top of a layout derived.
pub fn create_frame_buffer_derived(layout_derived: Derived<ComputedLayout>) -> Derived<FrameBufferResult> {
    let tw_signal = terminal_width_signal();
    let th_signal = terminal_height_signal();
    let mode_signal = render_mode_signal();

    derived(move || {
        let tw = tw_signal.get();
        let th = th_signal.get();
        let mode = mode_signal.get();
        let layout = layout_derived.get();

        paint_frame(&layout, tw, th, mode)
    })
}

/// Paint the current component tree into a fresh buffer.
///
/// Fullscreen frames are terminal-sized; inline frames are as tall as the
/// content.
pub fn paint_frame(layout: &ComputedLayout, tw: u16, th: u16, mode: RenderMode) -> FrameBufferResult {
    let buffer_height = match mode {
        RenderMode::Fullscreen => th,
        RenderMode::Inline => layout.content_height.max(1),
    };
    let mut buffer = FrameBuffer::new(tw, buffer_height);

    let mut indices = get_allocated_indices();
    indices.sort_unstable();

    let mut child_map: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut roots = Vec::new();
    for &idx in &indices {
        if !core::get_visible(idx) {
            continue;
        }
        match core::get_parent_index(idx) {
            Some(parent) => child_map.entry(parent).or_default().push(idx),
            None => roots.push(idx),
        }
    }

    let sheet = theme::stylesheet();
    let focused = focus::get_focused_index();
    let painter = Painter {
        layout,
        child_map: &child_map,
        sheet: &sheet,
        focused,
    };

    for root in roots {
        painter.paint(&mut buffer, root, None, Rgba::TERMINAL_DEFAULT);
    }

    FrameBufferResult {
        buffer,
        terminal_size: (tw, th),
    }
}

struct Painter<'a> {
    layout: &'a ComputedLayout,
    child_map: &'a HashMap<usize, Vec<usize>>,
    sheet: &'a Stylesheet,
    focused: Option<usize>,
}

impl Painter<'_> {
    fn class_style(&self, index: usize) -> ClassStyle {
        let classes = visual::get_classes(index);
        let style = self.sheet.resolve(&classes);
        if self.focused == Some(index) {
            style.merge(self.sheet.resolve(FOCUSED_CLASS))
        } else {
            style
        }
    }

    fn paint(&self, buffer: &mut FrameBuffer, index: usize, parent_clip: Option<&ClipRect>, inherited_fg: Rgba) {
        let Some((x, y, w, h)) = self.layout.rect(index) else {
            return;
        };
        if w == 0 || h == 0 {
            return;
        }

        let bounds = ClipRect::new(x, y, w, h);
        let clip = match parent_clip {
            Some(parent) => match bounds.intersect(parent) {
                Some(clip) => clip,
                None => return,
            },
            None => bounds,
        };

        let class_style = self.class_style(index);
        let own_fg = visual::get_fg_color(index);
        let own_bg = visual::get_bg_color(index);

        // Explicit props win over classes, classes over the parent. An
        // unset background shows whatever the parent painted.
        let fg = pick(own_fg, class_style.fg).unwrap_or(inherited_fg);
        if let Some(bg) = pick(own_bg, class_style.bg) {
            buffer.fill_rect(x, y, w, h, bg, Some(&clip));
        }

        let (border, pad_top, pad_right, pad_bottom, pad_left) = match get_flex_node(index) {
            Some(node) => (
                node.border.get().unwrap_or_default().min(1),
                node.padding_top.get().unwrap_or_default(),
                node.padding_right.get().unwrap_or_default(),
                node.padding_bottom.get().unwrap_or_default(),
                node.padding_left.get().unwrap_or_default(),
            ),
            None => (0, 0, 0, 0, 0),
        };
        if border > 0 {
            buffer.draw_border(x, y, w, h, fg, Some(&clip));
        }

        let content = ClipRect::new(
            x.saturating_add(border + pad_left),
            y.saturating_add(border + pad_top),
            w.saturating_sub(2 * border + pad_left + pad_right),
            h.saturating_sub(2 * border + pad_top + pad_bottom),
        );
        let Some(content_clip) = content.intersect(&clip) else {
            return;
        };

        let font_size = visual::get_font_size(index);
        let attrs = text::get_text_attrs(index) | class_style.attrs | font_size.attrs();

        match core::get_component_type(index) {
            ComponentType::Text => {
                paint_text(buffer, index, &content, fg, attrs, font_size.letter_spacing(), &content_clip)
            }
            ComponentType::Input => {
                let has_focus = self.focused == Some(index);
                paint_input(buffer, index, &content, fg, attrs, has_focus, &content_clip)
            }
            _ => {}
        }

        if let Some(children) = self.child_map.get(&index) {
            for &child in children {
                self.paint(buffer, child, Some(&content_clip), fg);
            }
        }
    }
}

/// An explicit array color beats the class color; the terminal default
/// means "not set".
fn pick(own: Rgba, class: Option<Rgba>) -> Option<Rgba> {
    if own.is_terminal_default() { class } else { Some(own) }
}

fn paint_text(
    buffer: &mut FrameBuffer,
    index: usize,
    area: &ClipRect,
    fg: Rgba,
    attrs: Attr,
    spacing: u16,
    clip: &ClipRect,
) {
    let content = text::get_text_content(index);
    if content.is_empty() {
        return;
    }

    for (row, line) in wrap_text(&content, area.width, spacing).iter().enumerate() {
        if row as u16 >= area.height {
            break;
        }
        buffer.draw_text(area.x, area.y + row as u16, line, fg, None, attrs, spacing, Some(clip));
    }
}

/// Draw the visible window of an input. The window scrolls so the cursor
/// cell stays inside; a focused input shows the cursor as an inverse cell.
fn paint_input(
    buffer: &mut FrameBuffer,
    index: usize,
    area: &ClipRect,
    fg: Rgba,
    attrs: Attr,
    has_focus: bool,
    clip: &ClipRect,
) {
    let value = text::get_text_content(index);
    let chars: Vec<char> = value.chars().collect();
    let cursor = if has_focus { cursor_position(index) } else { chars.len() };

    // Widest run of chars ending at the cursor that still leaves the
    // cursor cell inside the area.
    let mut start = cursor;
    let mut before_width: u16 = 0;
    while start > 0 {
        let w = char_width(chars[start - 1]);
        if before_width.saturating_add(w) >= area.width {
            break;
        }
        before_width += w;
        start -= 1;
    }

    let window: String = chars[start..].iter().collect();
    buffer.draw_text(area.x, area.y, &window, fg, None, attrs, 0, Some(clip));

    if has_focus {
        let cursor_x = area.x + before_width;
        let under = chars.get(cursor).copied().unwrap_or(' ');
        buffer.set_cell(cursor_x, area.y, under as u32, fg, None, attrs | Attr::INVERSE, Some(clip));
    }
}

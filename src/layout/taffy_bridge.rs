//! Taffy Bridge - FlexNode slots in, absolute rectangles out.
//!
//! Builds a fresh `TaffyTree` from the allocated components on every call,
//! runs flexbox with a text measure function, then resolves Taffy's
//! parent-relative locations into absolute terminal cells.

use std::collections::HashMap;

use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection as TaffyFlexDirection,
    LengthPercentage, LengthPercentageAuto, NodeId, Rect, Size, Style, TaffyTree,
};
use tracing::warn;

use crate::engine::arrays::{core, text, visual};
use crate::engine::{get_allocated_indices, get_flex_node};
use crate::types::{ComponentType, Dimension, FlexDirection};

use super::text_measure::{measure_text_height, string_width};
use super::types::ComputedLayout;

// =============================================================================
// CONVERSIONS
// =============================================================================

fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Cells(n) => TaffyDimension::Length(n as f32),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::Row => TaffyFlexDirection::Row,
    }
}

fn cells(n: u16) -> LengthPercentage {
    LengthPercentage::Length(n as f32)
}

/// Build a Taffy Style from a FlexNode. Slot reads are tracked.
fn build_style(idx: usize) -> Style {
    let Some(node) = get_flex_node(idx) else {
        return Style::default();
    };

    let border = node.border.get().unwrap_or_default();
    let gap = node.gap.get().unwrap_or_default();

    Style {
        display: Display::Flex,
        flex_direction: to_taffy_flex_direction(node.flex_direction.get().unwrap_or_default()),
        flex_grow: node.flex_grow.get().unwrap_or_default(),
        size: Size {
            width: to_taffy_dimension(node.width.get().unwrap_or_default()),
            height: to_taffy_dimension(node.height.get().unwrap_or_default()),
        },
        min_size: Size {
            width: TaffyDimension::Auto,
            height: to_taffy_dimension(node.min_height.get().unwrap_or_default()),
        },
        margin: Rect {
            top: LengthPercentageAuto::Length(node.margin_top.get().unwrap_or_default() as f32),
            right: LengthPercentageAuto::Length(0.0),
            bottom: LengthPercentageAuto::Length(node.margin_bottom.get().unwrap_or_default() as f32),
            left: LengthPercentageAuto::Length(0.0),
        },
        padding: Rect {
            top: cells(node.padding_top.get().unwrap_or_default()),
            right: cells(node.padding_right.get().unwrap_or_default()),
            bottom: cells(node.padding_bottom.get().unwrap_or_default()),
            left: cells(node.padding_left.get().unwrap_or_default()),
        },
        border: Rect {
            top: cells(border),
            right: cells(border),
            bottom: cells(border),
            left: cells(border),
        },
        gap: Size {
            width: cells(gap),
            height: cells(gap),
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT MEASUREMENT
// =============================================================================

/// Intrinsic size of text and input content.
fn measure_content(
    idx: usize,
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
) -> Size<f32> {
    let content = text::get_text_content(idx);

    match core::get_component_type(idx) {
        ComponentType::Text => {
            if content.is_empty() {
                return Size::ZERO;
            }
            let spacing = visual::get_font_size(idx).letter_spacing();
            let full_width = string_width(&content, spacing);

            let wrap_width = match known_dimensions.width {
                Some(w) => w as u16,
                None => match available_space.width {
                    AvailableSpace::Definite(w) => (w as u16).min(full_width),
                    AvailableSpace::MinContent => content
                        .split_whitespace()
                        .map(|word| string_width(word, spacing))
                        .max()
                        .unwrap_or(0),
                    AvailableSpace::MaxContent => full_width,
                },
            };

            Size {
                width: known_dimensions.width.unwrap_or(wrap_width as f32),
                height: known_dimensions
                    .height
                    .unwrap_or(measure_text_height(&content, wrap_width.max(1), spacing) as f32),
            }
        }
        ComponentType::Input => Size {
            // One extra cell so the cursor fits after the last char
            width: known_dimensions
                .width
                .unwrap_or(string_width(&content, 0) as f32 + 1.0),
            height: known_dimensions.height.unwrap_or(1.0),
        },
        _ => Size::ZERO,
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Compute layout for all visible components.
///
/// With `constrain_height` false (inline mode) roots may grow past the
/// terminal height.
pub fn compute_layout(terminal_width: u16, terminal_height: u16, constrain_height: bool) -> ComputedLayout {
    let mut indices = get_allocated_indices();
    if indices.is_empty() {
        return ComputedLayout::new();
    }
    indices.sort_unstable();

    let array_size = indices.iter().max().copied().unwrap_or(0) + 1;
    let mut result = ComputedLayout::with_capacity(array_size);

    let mut tree: TaffyTree<usize> = TaffyTree::new();
    let mut index_to_node: HashMap<usize, NodeId> = HashMap::new();

    for &idx in &indices {
        if !core::get_visible(idx) {
            continue;
        }
        let style = build_style(idx);
        let created = match core::get_component_type(idx) {
            ComponentType::Text | ComponentType::Input => tree.new_leaf_with_context(style, idx),
            _ => tree.new_leaf(style),
        };
        match created {
            Ok(node_id) => {
                index_to_node.insert(idx, node_id);
            }
            Err(error) => warn!(idx, %error, "taffy node creation failed"),
        }
    }

    let mut roots: Vec<usize> = Vec::new();
    for &idx in &indices {
        let Some(&child_node) = index_to_node.get(&idx) else { continue };
        match core::get_parent_index(idx).and_then(|p| index_to_node.get(&p)) {
            Some(&parent_node) => {
                let _ = tree.add_child(parent_node, child_node);
            }
            None => {
                // A child of a hidden parent is hidden too.
                if core::get_parent_index(idx).is_none() {
                    roots.push(idx);
                }
            }
        }
    }

    let available = Size {
        width: AvailableSpace::Definite(terminal_width as f32),
        height: if constrain_height {
            AvailableSpace::Definite(terminal_height as f32)
        } else {
            AvailableSpace::MaxContent
        },
    };

    let mut measure_fn = |known_dimensions: Size<Option<f32>>,
                          available_space: Size<AvailableSpace>,
                          _node_id: NodeId,
                          context: Option<&mut usize>,
                          _style: &Style| {
        match context {
            Some(&mut idx) => measure_content(idx, known_dimensions, available_space),
            None => Size::ZERO,
        }
    };

    for &root_idx in &roots {
        if let Some(&root_node) = index_to_node.get(&root_idx) {
            if let Err(error) = tree.compute_layout_with_measure(root_node, available, &mut measure_fn) {
                warn!(root_idx, %error, "layout failed");
            }
        }
    }

    // Taffy locations are parent-relative; parents sort before children
    // only by accident of allocation, so resolve through the parent chain.
    let mut absolute: HashMap<usize, (u16, u16)> = HashMap::new();
    for &idx in &indices {
        resolve_absolute(idx, &tree, &index_to_node, &mut absolute);
    }

    for &idx in &indices {
        let Some(&node_id) = index_to_node.get(&idx) else { continue };
        let Ok(layout) = tree.layout(node_id) else { continue };
        let (x, y) = absolute.get(&idx).copied().unwrap_or((0, 0));
        result.x[idx] = x;
        result.y[idx] = y;
        result.width[idx] = layout.size.width.round() as u16;
        result.height[idx] = layout.size.height.round() as u16;
    }

    if let Some(&first_root) = roots.first() {
        result.content_width = result.width[first_root];
        result.content_height = result.height[first_root];
    }

    result
}

fn resolve_absolute(
    idx: usize,
    tree: &TaffyTree<usize>,
    index_to_node: &HashMap<usize, NodeId>,
    absolute: &mut HashMap<usize, (u16, u16)>,
) -> (u16, u16) {
    if let Some(&pos) = absolute.get(&idx) {
        return pos;
    }
    let local = index_to_node
        .get(&idx)
        .and_then(|&node| tree.layout(node).ok())
        .map(|layout| (layout.location.x.round() as u16, layout.location.y.round() as u16))
        .unwrap_or((0, 0));

    let origin = match core::get_parent_index(idx) {
        Some(parent) if index_to_node.contains_key(&parent) => {
            resolve_absolute(parent, tree, index_to_node, absolute)
        }
        _ => (0, 0),
    };

    let pos = (origin.0 + local.0, origin.1 + local.1);
    absolute.insert(idx, pos);
    pos
}

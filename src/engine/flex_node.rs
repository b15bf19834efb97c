//! FlexNode - Persistent layout object with reactive Slot properties.
//!
//! Each component gets one FlexNode for its lifetime. The layout bridge reads
//! `.get()` on the slots, so a layout derived re-runs when any bound signal
//! or getter changes.

use spark_signals::{batch, slot, Slot};

use crate::types::{Dimension, FlexDirection};

/// Layout properties of one component.
///
/// Only the subset of flexbox the shell screens use: direction, sizing,
/// grow, padding, vertical margins, gap and a one-cell border.
pub struct FlexNode {
    /// Component index in parallel arrays.
    pub index: usize,

    pub flex_direction: Slot<FlexDirection>,
    pub flex_grow: Slot<f32>,

    pub width: Slot<Dimension>,
    pub height: Slot<Dimension>,
    pub min_height: Slot<Dimension>,

    pub padding_top: Slot<u16>,
    pub padding_right: Slot<u16>,
    pub padding_bottom: Slot<u16>,
    pub padding_left: Slot<u16>,

    pub margin_top: Slot<u16>,
    pub margin_bottom: Slot<u16>,

    /// Space between children along the main axis.
    pub gap: Slot<u16>,

    /// Border width on all four sides (0 = none).
    pub border: Slot<u16>,
}

impl FlexNode {
    /// Create a new FlexNode with default values.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            flex_direction: slot(Some(FlexDirection::Column)),
            flex_grow: slot(Some(0.0)),
            width: slot(Some(Dimension::Auto)),
            height: slot(Some(Dimension::Auto)),
            min_height: slot(Some(Dimension::Auto)),
            padding_top: slot(Some(0)),
            padding_right: slot(Some(0)),
            padding_bottom: slot(Some(0)),
            padding_left: slot(Some(0)),
            margin_top: slot(Some(0)),
            margin_bottom: slot(Some(0)),
            gap: slot(Some(0)),
            border: slot(Some(0)),
        }
    }

    /// Set all four paddings to the same static value.
    pub fn set_padding(&self, value: u16) {
        self.padding_top.set_value(value);
        self.padding_right.set_value(value);
        self.padding_bottom.set_value(value);
        self.padding_left.set_value(value);
    }

    /// Disconnect all slot sources and restore defaults.
    ///
    /// Called when the component is destroyed via `release_index()`.
    pub fn disconnect(&self) {
        batch(|| self.restore_defaults());
    }

    fn restore_defaults(&self) {
        self.flex_direction.set_value(FlexDirection::Column);
        self.flex_grow.set_value(0.0);
        self.width.set_value(Dimension::Auto);
        self.height.set_value(Dimension::Auto);
        self.min_height.set_value(Dimension::Auto);
        self.set_padding(0);
        self.margin_top.set_value(0);
        self.margin_bottom.set_value(0);
        self.gap.set_value(0);
        self.border.set_value(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_flex_node_defaults() {
        let node = FlexNode::new(3);
        assert_eq!(node.index, 3);
        assert_eq!(node.flex_direction.get().unwrap_or_default(), FlexDirection::Column);
        assert_eq!(node.width.get().unwrap_or_default(), Dimension::Auto);
        assert_eq!(node.border.get().unwrap_or_default(), 0);
    }

    #[test]
    fn test_flex_node_reactive_binding() {
        let node = FlexNode::new(0);
        let width = signal(Dimension::Cells(30));

        node.width.set_signal(&width);
        assert_eq!(node.width.get().unwrap_or_default(), Dimension::Cells(30));

        width.set(Dimension::Cells(60));
        assert_eq!(node.width.get().unwrap_or_default(), Dimension::Cells(60));
    }

    #[test]
    fn test_flex_node_disconnect() {
        let node = FlexNode::new(0);
        node.set_padding(2);
        node.flex_direction.set_value(FlexDirection::Row);

        node.disconnect();

        assert_eq!(node.padding_left.get().unwrap_or_default(), 0);
        assert_eq!(node.flex_direction.get().unwrap_or_default(), FlexDirection::Column);
    }
}

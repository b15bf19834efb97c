//! Layout output.

/// Absolute position and size of every component, indexed by component
/// index. Hidden or unallocated indices stay zero-sized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedLayout {
    pub x: Vec<u16>,
    pub y: Vec<u16>,
    pub width: Vec<u16>,
    pub height: Vec<u16>,
    /// Size of the first root, used by inline mode to size its region.
    pub content_width: u16,
    pub content_height: u16,
}

impl ComputedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(len: usize) -> Self {
        Self {
            x: vec![0; len],
            y: vec![0; len],
            width: vec![0; len],
            height: vec![0; len],
            content_width: 0,
            content_height: 0,
        }
    }

    /// `(x, y, width, height)` of a component, if it was laid out.
    pub fn rect(&self, index: usize) -> Option<(u16, u16, u16, u16)> {
        Some((
            *self.x.get(index)?,
            *self.y.get(index)?,
            *self.width.get(index)?,
            *self.height.get(index)?,
        ))
    }
}

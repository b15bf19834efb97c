//! Opaque element handle.

use std::fmt;

/// Handle to a mounted component.
///
/// Copyable and comparable, but it exposes nothing about the element: no
/// content, no style, no index outside this crate. Only a [`ViewRenderer`]
/// can act on it.
///
/// [`ViewRenderer`]: super::ViewRenderer
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef(usize);

impl ElementRef {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementRef(#{})", self.0)
    }
}

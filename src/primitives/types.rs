//! Primitive types - Props and cleanup.
//!
//! Props support static values, signals, and getters for reactivity.

use std::rc::Rc;

use spark_signals::Signal;

use crate::directives::AttachFn;
use crate::types::{Attr, Dimension, FlexDirection, Rgba};

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by components.
///
/// Call this to unmount the component and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

/// Children builder. Runs once with the parent context pushed.
pub type Children = Box<dyn FnOnce()>;

// =============================================================================
// Events
// =============================================================================

/// Emitted by an input for every edit, carrying the value the edit produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
}

/// Input value change callback.
pub type ChangeCallback = Rc<dyn Fn(&ChangeEvent)>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// When bound to FlexNode slots or arrays, the reactive connection is kept.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Wrap a closure as a getter prop.
    pub fn getter(f: impl Fn() -> T + 'static) -> Self {
        PropValue::Getter(Rc::new(f))
    }

    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }

    /// Convert into a getter closure, whatever the variant.
    pub fn into_getter(self) -> impl Fn() -> T + 'static {
        move || self.get()
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

impl From<u16> for PropValue<Dimension> {
    fn from(value: u16) -> Self {
        PropValue::Static(Dimension::from(value))
    }
}

// =============================================================================
// Box Props
// =============================================================================

/// Properties for the box container.
#[derive(Default)]
pub struct BoxProps {
    pub id: Option<String>,
    pub visible: Option<PropValue<bool>>,

    // Layout
    pub flex_direction: Option<PropValue<FlexDirection>>,
    pub grow: Option<PropValue<f32>>,
    pub width: Option<PropValue<Dimension>>,
    pub height: Option<PropValue<Dimension>>,
    pub min_height: Option<PropValue<Dimension>>,

    // Spacing. `padding` is the shorthand; per-side values win over it.
    pub padding: Option<PropValue<u16>>,
    pub padding_top: Option<PropValue<u16>>,
    pub padding_right: Option<PropValue<u16>>,
    pub padding_bottom: Option<PropValue<u16>>,
    pub padding_left: Option<PropValue<u16>>,
    pub margin_top: Option<PropValue<u16>>,
    pub margin_bottom: Option<PropValue<u16>>,
    pub gap: Option<PropValue<u16>>,

    /// Draw a single-line border (one cell on every side).
    pub border: bool,

    // Visual
    pub fg: Option<PropValue<Rgba>>,
    pub bg: Option<PropValue<Rgba>>,
    /// Space-separated class list resolved against the stylesheet.
    pub classes: Option<PropValue<String>>,

    pub children: Option<Children>,
}

// =============================================================================
// Text Props
// =============================================================================

/// Properties for the text component.
#[derive(Default)]
pub struct TextProps {
    pub id: Option<String>,
    pub content: PropValue<String>,
    pub visible: Option<PropValue<bool>>,
    pub attrs: Option<PropValue<Attr>>,
    pub fg: Option<PropValue<Rgba>>,
    pub bg: Option<PropValue<Rgba>>,
    pub classes: Option<PropValue<String>>,

    pub width: Option<PropValue<Dimension>>,
    pub padding_left: Option<PropValue<u16>>,
    pub padding_right: Option<PropValue<u16>>,

    /// Make the text a tab stop.
    pub focusable: bool,

    /// Directives attached after the element exists, in order.
    pub directives: Vec<AttachFn>,
}

// =============================================================================
// Input Props
// =============================================================================

/// Properties for the controlled single-line input.
pub struct InputProps {
    pub id: Option<String>,

    /// Displayed value. The input never writes it; edits go to `on_change`.
    pub value: PropValue<String>,
    pub on_change: ChangeCallback,

    pub width: Option<PropValue<Dimension>>,
    pub fg: Option<PropValue<Rgba>>,
    pub bg: Option<PropValue<Rgba>>,
    pub classes: Option<PropValue<String>>,
}

impl Default for InputProps {
    fn default() -> Self {
        Self {
            id: None,
            value: PropValue::Static(String::new()),
            on_change: Rc::new(|_| {}),
            width: None,
            fg: None,
            bg: None,
            classes: None,
        }
    }
}

//! Attribute directives.
//!
//! A directive is a behavior attached to an element after it mounts. It
//! receives the element's handle and a [`ViewRenderer`], never the element
//! itself. Primitives attach directives listed in their props:
//!
//! ```ignore
//! text(TextProps {
//!     content: "big".to_string().into(),
//!     directives: vec![XLargeDirective::attach(renderer.clone())],
//!     ..Default::default()
//! });
//! ```
//!
//! [`ViewRenderer`]: crate::view::ViewRenderer

mod x_large;

pub use x_large::XLargeDirective;

use std::rc::Rc;

use crate::view::ElementRef;

/// Attaches a directive to a freshly mounted element.
pub type AttachFn = Rc<dyn Fn(ElementRef)>;

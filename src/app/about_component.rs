//! About page.

use tracing::debug;

use crate::host::RequestContext;
use crate::primitives::{text, Cleanup, TextProps};

/// Text of the about page.
pub const ABOUT_TEXT: &str =
    "Hi, we are Mariana and Jisel from IBM Guadalajara! It's been a pleasure to meet you all!";

/// Static page. The request context is accepted and not used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AboutComponent;

impl AboutComponent {
    pub fn new(_req: Option<&RequestContext>) -> Self {
        Self
    }

    pub fn render(&self) -> Cleanup {
        debug!("about render");
        text(TextProps {
            id: Some("about".to_string()),
            content: ABOUT_TEXT.into(),
            ..Default::default()
        })
    }
}

//! Home page placeholder.

use crate::primitives::{text, Cleanup, TextProps};

pub const HOME_TEXT: &str = "Welcome home. Pick a page above or tell us your name.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn render(&self) -> Cleanup {
        text(TextProps {
            id: Some("home".to_string()),
            content: HOME_TEXT.into(),
            ..Default::default()
        })
    }
}

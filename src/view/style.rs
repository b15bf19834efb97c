//! Style requests.

use crate::types::{Attr, FontSize, Rgba};

/// One style property with its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    FontSize(FontSize),
    Foreground(Rgba),
    Background(Rgba),
    Attrs(Attr),
}

impl Style {
    /// CSS-like property name.
    pub const fn property(&self) -> &'static str {
        match self {
            Style::FontSize(_) => "fontSize",
            Style::Foreground(_) => "color",
            Style::Background(_) => "backgroundColor",
            Style::Attrs(_) => "textDecoration",
        }
    }

    /// CSS-like value.
    pub fn value(&self) -> String {
        match self {
            Style::FontSize(size) => size.keyword().to_string(),
            Style::Foreground(color) | Style::Background(color) => color.to_css(),
            Style::Attrs(attrs) => {
                let mut parts = Vec::new();
                if attrs.contains(Attr::BOLD) {
                    parts.push("bold");
                }
                if attrs.contains(Attr::ITALIC) {
                    parts.push("italic");
                }
                if attrs.contains(Attr::UNDERLINE) {
                    parts.push("underline");
                }
                if parts.is_empty() {
                    "none".to_string()
                } else {
                    parts.join(" ")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_property_and_value() {
        let style = Style::FontSize(FontSize::XLarge);
        assert_eq!(style.property(), "fontSize");
        assert_eq!(style.value(), "x-large");

        let bg = Style::Background(Rgba::rgb(0x88, 0xd8, 0xbe));
        assert_eq!(bg.property(), "backgroundColor");
        assert_eq!(bg.value(), "#88d8be");

        assert_eq!(Style::Attrs(Attr::NONE).value(), "none");
        assert_eq!(Style::Attrs(Attr::BOLD | Attr::UNDERLINE).value(), "bold underline");
    }
}

//! Stylesheet and class styles.

use std::collections::HashMap;

use crate::types::{Attr, Rgba};

/// Navigation bar background.
pub const NAV_BG: Rgba = Rgba::rgb(0x88, 0xd8, 0xbe);
/// Navigation bar bottom rule.
pub const NAV_RULE: Rgba = Rgba::rgb(0x04, 0x69, 0x23);
/// Highlight behind the link of the active route.
pub const ACTIVE_LINK_BG: Rgba = Rgba::rgb(0x8e, 0xd1, 0xc1);
/// Highlight behind the focused link.
pub const FOCUSED_LINK_BG: Rgba = Rgba::rgb(0x31, 0x66, 0x59);
/// Hero panel border.
pub const HERO_BORDER: Rgba = Rgba::GRAY;

/// Class applied to router links whose target is the current route.
pub const ROUTER_LINK_ACTIVE: &str = "router-link-active";

/// Visual properties contributed by one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassStyle {
    pub fg: Option<Rgba>,
    pub bg: Option<Rgba>,
    pub attrs: Attr,
}

impl ClassStyle {
    pub fn fg(color: Rgba) -> Self {
        Self { fg: Some(color), ..Self::default() }
    }

    pub fn bg(color: Rgba) -> Self {
        Self { bg: Some(color), ..Self::default() }
    }

    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs |= attrs;
        self
    }

    /// Layer `other` over `self`; later classes win.
    pub fn merge(self, other: ClassStyle) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: self.attrs | other.attrs,
        }
    }
}

/// Class name → style map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    rules: HashMap<String, ClassStyle>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shell screen's stylesheet.
    pub fn shell() -> Self {
        Self::new()
            .with("heading", ClassStyle::default().with_attrs(Attr::BOLD))
            .with("nav", ClassStyle::bg(NAV_BG))
            .with("nav-rule", ClassStyle::bg(NAV_RULE))
            .with("nav-link", ClassStyle::fg(Rgba::WHITE).with_attrs(Attr::BOLD))
            .with(ROUTER_LINK_ACTIVE, ClassStyle::bg(ACTIVE_LINK_BG))
            .with("focused", ClassStyle::bg(FOCUSED_LINK_BG))
            .with("inner-hero", ClassStyle::fg(HERO_BORDER))
            .with("hero-text", ClassStyle::fg(Rgba::TERMINAL_DEFAULT))
            .with("field", ClassStyle::default().with_attrs(Attr::UNDERLINE))
    }

    /// Add or replace a rule.
    pub fn with(mut self, class: &str, style: ClassStyle) -> Self {
        self.rules.insert(class.to_string(), style);
        self
    }

    pub fn get(&self, class: &str) -> Option<&ClassStyle> {
        self.rules.get(class)
    }

    /// Resolve a space-separated class list, left to right.
    pub fn resolve(&self, classes: &str) -> ClassStyle {
        classes
            .split_whitespace()
            .filter_map(|class| self.get(class))
            .fold(ClassStyle::default(), |acc, style| acc.merge(*style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_later_class_wins() {
        let sheet = Stylesheet::shell();
        let style = sheet.resolve("nav-link router-link-active");

        assert_eq!(style.fg, Some(Rgba::WHITE));
        assert_eq!(style.bg, Some(ACTIVE_LINK_BG));
        assert!(style.attrs.contains(Attr::BOLD));
    }

    #[test]
    fn test_resolve_unknown_classes() {
        let sheet = Stylesheet::shell();
        assert_eq!(sheet.resolve("nope also-nope"), ClassStyle::default());
        assert_eq!(sheet.resolve(""), ClassStyle::default());
    }

    #[test]
    fn test_with_replaces_rule() {
        let sheet = Stylesheet::shell().with("nav", ClassStyle::bg(Rgba::BLACK));
        assert_eq!(sheet.get("nav").and_then(|s| s.bg), Some(Rgba::BLACK));
    }
}

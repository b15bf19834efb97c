//! Core types for devops-shell.
//!
//! These types flow through the reactive pipeline and define what the
//! terminal renderer understands.

use std::fmt;
use std::str::FromStr;

use crate::error::ShellError;

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(204, 204, 204);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }

    /// CSS-like representation, `#rrggbb` or `inherit` for the terminal default.
    pub fn to_css(&self) -> String {
        if self.is_terminal_default() {
            "inherit".to_string()
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r as u8, self.g as u8, self.b as u8)
        }
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// A size in terminal cells, a percentage of the parent, or auto.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Content-determined size.
    #[default]
    Auto,
    /// Absolute size in terminal cells.
    Cells(u16),
    /// Percentage of parent size (0-100).
    Percent(f32),
}

impl From<u16> for Dimension {
    fn from(value: u16) -> Self {
        if value == 0 {
            Self::Auto
        } else {
            Self::Cells(value)
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 5;
    }
}

// =============================================================================
// Font Size
// =============================================================================

/// Font size keyword, mirroring the CSS absolute-size keywords.
///
/// A terminal cannot change glyph size, so sizes are projected onto the
/// cell grid: `Large` and above render bold, `XLarge` and above additionally
/// render letter-spaced (one blank cell after every glyph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
    XxLarge,
}

impl FontSize {
    /// The CSS keyword for this size.
    pub const fn keyword(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
            FontSize::XLarge => "x-large",
            FontSize::XxLarge => "xx-large",
        }
    }

    /// Extra attributes the size adds to a cell.
    pub fn attrs(&self) -> Attr {
        match self {
            FontSize::Small => Attr::DIM,
            FontSize::Medium => Attr::NONE,
            FontSize::Large | FontSize::XLarge | FontSize::XxLarge => Attr::BOLD,
        }
    }

    /// Blank cells inserted after every glyph.
    pub const fn letter_spacing(&self) -> u16 {
        match self {
            FontSize::XLarge | FontSize::XxLarge => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for FontSize {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            "x-large" => Ok(FontSize::XLarge),
            "xx-large" => Ok(FontSize::XxLarge),
            other => Err(ShellError::InvalidFontSize(other.to_string())),
        }
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space).
    pub char: u32,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// ClipRect
// =============================================================================

/// A clipping rectangle; children never draw outside their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClipRect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && (x as u32) < self.x as u32 + self.width as u32
            && y >= self.y
            && (y as u32) < self.y as u32 + self.height as u32
    }

    /// Compute intersection of two rects.
    pub fn intersect(&self, other: &ClipRect) -> Option<ClipRect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x as u32 + self.width as u32).min(other.x as u32 + other.width as u32);
        let y2 = (self.y as u32 + self.height as u32).min(other.y as u32 + other.height as u32);

        if x2 > x1 as u32 && y2 > y1 as u32 {
            Some(ClipRect {
                x: x1,
                y: y1,
                width: (x2 - x1 as u32) as u16,
                height: (y2 - y1 as u32) as u16,
            })
        } else {
            None
        }
    }
}

// =============================================================================
// Component Types
// =============================================================================

/// Component types for the parallel arrays pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ComponentType {
    #[default]
    None = 0,
    Box = 1,
    Text = 2,
    Input = 3,
}

/// Main axis of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
}

/// Rendering mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Alternate screen buffer, differential rendering.
    #[default]
    Fullscreen,
    /// Renders into the normal buffer, redrawing in place.
    Inline,
}

// =============================================================================
// Tests
// =============================================================================

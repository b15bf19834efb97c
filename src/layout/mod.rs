//! Layout Module - flexbox for the terminal grid.
//!
//! Uses [Taffy](https://github.com/DioxusLabs/taffy). The bridge:
//!
//! 1. Converts FlexNode slots to Taffy styles
//! 2. Builds the Taffy tree from parent relationships
//! 3. Measures text and inputs (letter spacing included)
//! 4. Returns absolute cell rectangles per component index
//!
//! Called from a derived, the slot reads become dependencies, so layout
//! re-runs whenever a bound signal changes.

mod taffy_bridge;
mod text_measure;
mod types;

pub use taffy_bridge::compute_layout;
pub use text_measure::*;
pub use types::*;

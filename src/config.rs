//! Shell configuration.

use crate::types::RenderMode;

/// Size used for headless snapshots when none is given.
pub const DEFAULT_SNAPSHOT_SIZE: (u16, u16) = (80, 24);

/// How the shell starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub render_mode: RenderMode,
    /// Route shown first, e.g. `home`.
    pub initial_route: String,
    pub initial_title: String,
    /// Width and height of [`crate::Shell::snapshot`] output.
    pub snapshot_size: (u16, u16),
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::Fullscreen,
            initial_route: "home".to_string(),
            initial_title: String::new(),
            snapshot_size: DEFAULT_SNAPSHOT_SIZE,
        }
    }
}

//! Error type for the shell.

use thiserror::Error;

/// Errors surfaced by the router, style parsing and terminal setup.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A route path that is not in the route table.
    #[error("unknown route: {0:?}")]
    UnknownRoute(String),
    /// A font-size keyword that does not name a size.
    #[error("invalid font size: {0:?}")]
    InvalidFontSize(String),
    /// Terminal I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T, E = ShellError> = std::result::Result<T, E>;

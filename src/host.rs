//! Host context - the values the host injects into components.

use std::fmt;
use std::rc::Rc;

use crate::view::{ArrayRenderer, ViewRenderer};

/// Request-like value describing how the screen was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Route the screen was opened at, e.g. `/home`.
    pub url: String,
    pub terminal_size: (u16, u16),
}

impl RequestContext {
    pub fn new(url: impl Into<String>, terminal_size: (u16, u16)) -> Self {
        Self {
            url: url.into(),
            terminal_size,
        }
    }
}

/// Everything a component may ask the host for.
#[derive(Clone)]
pub struct HostContext {
    pub request: RequestContext,
    pub renderer: Rc<dyn ViewRenderer>,
}

impl HostContext {
    pub fn new(request: RequestContext, renderer: Rc<dyn ViewRenderer>) -> Self {
        Self { request, renderer }
    }

    /// Host for the interactive terminal: styles go straight to the arrays.
    pub fn interactive(request: RequestContext) -> Self {
        Self::new(request, Rc::new(ArrayRenderer::new()))
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

//! Router - route table, current route and navigation.
//!
//! The current path is a signal, so links re-style and the outlet swaps
//! components as soon as [`Router::navigate`] succeeds. Paths are matched
//! exactly after dropping a leading `/`.
//!
//! ```ignore
//! let router = Router::new(vec![
//!     Route::new("home", |_host| HomeComponent.render()),
//!     Route::new("about", |host| AboutComponent::new(Some(&host.request)).render()),
//! ], "home")?;
//!
//! router.navigate("about")?;
//! assert!(router.is_active("about"));
//! ```

mod link;
mod outlet;

pub use link::{router_link, LinkProps, LINK_CLASS};
pub use outlet::router_outlet;

use std::fmt;
use std::rc::Rc;

use spark_signals::{signal, Signal};
use tracing::{info, warn};

use crate::error::{Result, ShellError};
use crate::host::HostContext;
use crate::primitives::Cleanup;

/// Creates the component for a route.
pub type RouteRender = Rc<dyn Fn(&HostContext) -> Cleanup>;

/// One entry of the route table.
#[derive(Clone)]
pub struct Route {
    pub path: String,
    pub render: RouteRender,
}

impl Route {
    pub fn new(path: impl Into<String>, render: impl Fn(&HostContext) -> Cleanup + 'static) -> Self {
        Self {
            path: normalize(&path.into()).to_string(),
            render: Rc::new(render),
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("path", &self.path).finish_non_exhaustive()
    }
}

fn normalize(path: &str) -> &str {
    path.trim().trim_start_matches('/')
}

struct RouterInner {
    routes: Vec<Route>,
    current: Signal<String>,
}

/// Shared handle to the route table and the current route.
#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

impl Router {
    /// Build a router starting at `initial`, which must be registered.
    pub fn new(routes: Vec<Route>, initial: &str) -> Result<Self> {
        let initial = normalize(initial);
        if !routes.iter().any(|route| route.path == initial) {
            warn!(route = initial, "initial route not registered");
            return Err(ShellError::UnknownRoute(initial.to_string()));
        }

        Ok(Self {
            inner: Rc::new(RouterInner {
                current: signal(initial.to_string()),
                routes,
            }),
        })
    }

    /// Current route path (reactive).
    pub fn current(&self) -> String {
        self.inner.current.get()
    }

    /// Whether `path` is the current route (reactive).
    pub fn is_active(&self, path: &str) -> bool {
        self.current() == normalize(path)
    }

    /// Switch to `path`. Unknown paths leave the current route in place.
    pub fn navigate(&self, path: &str) -> Result<()> {
        let path = normalize(path);
        if self.route(path).is_none() {
            warn!(route = path, "navigation to unknown route");
            return Err(ShellError::UnknownRoute(path.to_string()));
        }

        let from = self.inner.current.get();
        if from != path {
            info!(%from, to = path, "navigate");
            self.inner.current.set(path.to_string());
        }
        Ok(())
    }

    /// Registered paths, in table order.
    pub fn paths(&self) -> Vec<String> {
        self.inner.routes.iter().map(|route| route.path.clone()).collect()
    }

    /// Render function registered for `path`.
    pub fn route(&self, path: &str) -> Option<RouteRender> {
        let path = normalize(path);
        self.inner
            .routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.render.clone())
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("current", &self.inner.current.get())
            .field("routes", &self.paths())
            .finish()
    }
}

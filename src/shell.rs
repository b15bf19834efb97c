//! Shell bootstrap - wires config, host, router and the root component.

use tracing::{debug, info};

use crate::app::{default_routes, AppComponent};
use crate::config::ShellConfig;
use crate::engine::get_index;
use crate::error::Result;
use crate::host::{HostContext, RequestContext};
use crate::pipeline::{self, render_to_string};
use crate::primitives::Cleanup;
use crate::router::Router;
use crate::state::focus;

/// Id of the title input, focused when the shell starts.
pub const TITLE_INPUT_ID: &str = "title-input";

/// A rendered shell. Dropping it releases the component tree.
pub struct Shell {
    config: ShellConfig,
    app: AppComponent,
    cleanup: Option<Cleanup>,
}

impl Shell {
    /// Build the component tree for `config`.
    ///
    /// Fails with [`crate::ShellError::UnknownRoute`] when the initial route
    /// is not registered.
    pub fn new(config: ShellConfig) -> Result<Self> {
        let request = RequestContext::new(
            format!("/{}", config.initial_route.trim_start_matches('/')),
            config.snapshot_size,
        );
        let host = HostContext::interactive(request);
        let router = Router::new(default_routes(), &config.initial_route)?;

        let app = AppComponent::new(router, host).with_title(config.initial_title.clone());
        let cleanup = app.render();

        if let Some(index) = get_index(TITLE_INPUT_ID) {
            focus::focus(index);
            debug!(index, "title input focused");
        }
        info!(route = %app.router().current(), "shell ready");

        Ok(Self {
            config,
            app,
            cleanup: Some(cleanup),
        })
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn app(&self) -> &AppComponent {
        &self.app
    }

    pub fn router(&self) -> &Router {
        self.app.router()
    }

    /// Plain-text frame at the configured snapshot size.
    pub fn snapshot(&self) -> String {
        let (width, height) = self.config.snapshot_size;
        render_to_string(width, height)
    }

    /// Mount on the terminal and block until Ctrl+C.
    pub fn run(&self) -> Result<()> {
        let handle = pipeline::mount(self.config.render_mode)?;
        pipeline::run(&handle)?;
        handle.unmount()
    }

    /// Release the component tree.
    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
            debug!("shell released");
        }
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{get_allocated_count, reset_registry};
    use crate::error::ShellError;
    use crate::state::keyboard::reset_keyboard_state;

    fn setup() {
        reset_registry();
        reset_keyboard_state();
        focus::reset_focus_state();
    }

    #[test]
    fn test_new_focuses_title_input() {
        setup();
        let shell = Shell::new(ShellConfig::default()).expect("shell");

        assert_eq!(focus::get_focused_index(), get_index(TITLE_INPUT_ID));
        assert_eq!(shell.router().current(), "home");
        assert_eq!(shell.app().title(), "");
    }

    #[test]
    fn test_unknown_initial_route() {
        setup();
        let config = ShellConfig {
            initial_route: "contact".to_string(),
            ..Default::default()
        };
        assert!(matches!(Shell::new(config), Err(ShellError::UnknownRoute(_))));
        assert_eq!(get_allocated_count(), 0);
    }

    #[test]
    fn test_unmount_releases_tree() {
        setup();
        let shell = Shell::new(ShellConfig {
            initial_route: "/about".to_string(),
            initial_title: "Mariana".to_string(),
            ..Default::default()
        })
        .expect("shell");
        assert_eq!(shell.router().current(), "about");
        assert_eq!(shell.app().title(), "Mariana");
        assert!(get_allocated_count() > 0);

        shell.unmount();
        assert_eq!(get_allocated_count(), 0);
        assert_eq!(focus::get_focused_index(), None);
    }
}

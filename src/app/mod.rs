//! Application components.
//!
//! - [`AppComponent`] - heading, navigation, greeting, title field, outlet
//! - [`AboutComponent`] - fixed about text
//! - [`HomeComponent`] - home placeholder

mod about_component;
mod app_component;
mod home_component;

pub use about_component::{AboutComponent, ABOUT_TEXT};
pub use app_component::{greeting, AppComponent, HEADING, NAME_HINT};
pub use home_component::{HomeComponent, HOME_TEXT};

use crate::router::Route;

/// Route table of the shell: `home` and `about`.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("home", |_host| HomeComponent.render()),
        Route::new("about", |host| AboutComponent::new(Some(&host.request)).render()),
    ]
}

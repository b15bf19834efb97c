//! Router link - a focusable label that navigates on Enter or Space.

use std::rc::Rc;

use tracing::warn;

use crate::directives::AttachFn;
use crate::engine::on_destroy;
use crate::primitives::{text, Cleanup, PropValue, TextProps};
use crate::state::keyboard;
use crate::theme::ROUTER_LINK_ACTIVE;
use crate::view::ElementRef;

use super::Router;

/// Class every router link carries.
pub const LINK_CLASS: &str = "nav-link";

/// Properties of a router link.
pub struct LinkProps {
    /// Target route path.
    pub to: String,
    pub label: String,
    pub router: Router,
    /// Class added while `to` is the current route.
    pub active_class: String,
}

impl LinkProps {
    pub fn new(to: impl Into<String>, label: impl Into<String>, router: &Router) -> Self {
        Self {
            to: to.into(),
            label: label.into(),
            router: router.clone(),
            active_class: ROUTER_LINK_ACTIVE.to_string(),
        }
    }
}

/// Create a router link.
///
/// The class list is `nav-link`, plus `active_class` exactly while the
/// router's current route equals `to`.
pub fn router_link(props: LinkProps) -> Cleanup {
    let LinkProps {
        to,
        label,
        router,
        active_class,
    } = props;

    let router_for_class = router.clone();
    let to_for_class = to.clone();
    let classes = PropValue::getter(move || {
        if router_for_class.is_active(&to_for_class) {
            format!("{LINK_CLASS} {active_class}")
        } else {
            LINK_CLASS.to_string()
        }
    });

    let activate: AttachFn = Rc::new(move |element: ElementRef| {
        let router = router.clone();
        let to = to.clone();
        let cleanup = keyboard::on_focused(element.index(), move |event| {
            if !event.modifiers.is_plain() || !matches!(event.key.as_str(), "Enter" | " ") {
                return false;
            }
            if let Err(error) = router.navigate(&to) {
                warn!(%error, "link target rejected");
            }
            true
        });
        on_destroy(element.index(), cleanup);
    });

    text(TextProps {
        content: label.into(),
        classes: Some(classes),
        padding_left: Some(PropValue::Static(2)),
        padding_right: Some(PropValue::Static(2)),
        focusable: true,
        directives: vec![activate],
        ..Default::default()
    })
}

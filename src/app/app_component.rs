//! Root shell: heading, navigation, greeting and the routed page.
//!
//! ```text
//! You Rock with DevOps!
//! ┌ nav ───────────────────────────┐
//! │  Home    About Us              │
//! └────────────────────────────────┘
//!   ┌ inner-hero ────────────────┐
//!   │ Y o u   R o c k ...        │
//!   │ Type here your name: [   ] │
//!   │ <outlet>                   │
//!   └────────────────────────────┘
//! ```

use std::rc::Rc;

use spark_signals::{signal, Signal};
use tracing::{debug, info};

use crate::directives::XLargeDirective;
use crate::host::HostContext;
use crate::primitives::{
    box_primitive, input, text, BoxProps, ChangeEvent, Cleanup, InputProps, PropValue, TextProps,
};
use crate::router::{router_link, router_outlet, LinkProps, Router};
use crate::types::{Dimension, FlexDirection};

pub const HEADING: &str = "You Rock with DevOps!";
pub const NAME_HINT: &str = "Type here your name: ";

/// Greeting shown in the hero for a given title.
pub fn greeting(title: &str) -> String {
    format!("You Rock With DevOps, {title}!")
}

/// Root component. Owns the title the input edits.
#[derive(Clone)]
pub struct AppComponent {
    title: Signal<String>,
    router: Router,
    host: HostContext,
}

impl AppComponent {
    pub fn new(router: Router, host: HostContext) -> Self {
        Self {
            title: signal(String::new()),
            router,
            host,
        }
    }

    /// Start with a non-empty title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.title.set(title.into());
        self
    }

    /// Current title (reactive).
    pub fn title(&self) -> String {
        self.title.get()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Store the value of a change event as the title. Any string,
    /// including the empty one, is accepted as is.
    pub fn on_title_change(&self, event: &ChangeEvent) {
        debug!(len = event.value.chars().count(), "title change");
        self.title.set(event.value.clone());
    }

    /// Mount the shell. The returned cleanup destroys the whole tree.
    pub fn render(&self) -> Cleanup {
        info!(route = %self.router.current(), "app render");
        let app = self.clone();

        box_primitive(BoxProps {
            id: Some("app".to_string()),
            width: Some(PropValue::Static(Dimension::Percent(100.0))),
            children: Some(Box::new(move || {
                text(TextProps {
                    id: Some("heading".to_string()),
                    content: HEADING.into(),
                    classes: Some("heading".into()),
                    padding_left: Some(PropValue::Static(1)),
                    ..Default::default()
                });
                app.render_nav();
                app.render_hero();
            })),
            ..Default::default()
        })
    }

    fn render_nav(&self) {
        let router = self.router.clone();
        box_primitive(BoxProps {
            id: Some("nav".to_string()),
            flex_direction: Some(PropValue::Static(FlexDirection::Row)),
            padding_top: Some(PropValue::Static(1)),
            padding_bottom: Some(PropValue::Static(1)),
            margin_top: Some(PropValue::Static(1)),
            classes: Some("nav".into()),
            children: Some(Box::new(move || {
                router_link(LinkProps::new("home", "Home", &router));
                router_link(LinkProps::new("about", "About Us", &router));
            })),
            ..Default::default()
        });

        box_primitive(BoxProps {
            height: Some(PropValue::Static(Dimension::Cells(1))),
            classes: Some("nav-rule".into()),
            ..Default::default()
        });
    }

    fn render_hero(&self) {
        let app = self.clone();
        box_primitive(BoxProps {
            id: Some("hero".to_string()),
            padding: Some(PropValue::Static(1)),
            grow: Some(PropValue::Static(1.0)),
            children: Some(Box::new(move || {
                box_primitive(BoxProps {
                    id: Some("inner-hero".to_string()),
                    border: true,
                    padding_left: Some(PropValue::Static(1)),
                    padding_right: Some(PropValue::Static(1)),
                    classes: Some("inner-hero".into()),
                    children: Some(Box::new(move || app.render_inner())),
                    ..Default::default()
                });
            })),
            ..Default::default()
        });
    }

    fn render_inner(&self) {
        let app = self.clone();
        box_primitive(BoxProps {
            classes: Some("hero-text".into()),
            gap: Some(PropValue::Static(1)),
            children: Some(Box::new(move || {
                let title = app.title.clone();
                text(TextProps {
                    id: Some("greeting".to_string()),
                    content: PropValue::getter(move || greeting(&title.get())),
                    directives: vec![XLargeDirective::attach(app.host.renderer.clone())],
                    ..Default::default()
                });

                let for_row = app.clone();
                box_primitive(BoxProps {
                    flex_direction: Some(PropValue::Static(FlexDirection::Row)),
                    children: Some(Box::new(move || for_row.render_name_field())),
                    ..Default::default()
                });

                let router = app.router.clone();
                let host = app.host.clone();
                box_primitive(BoxProps {
                    id: Some("main".to_string()),
                    padding_top: Some(PropValue::Static(1)),
                    padding_bottom: Some(PropValue::Static(1)),
                    children: Some(Box::new(move || {
                        router_outlet(&router, &host);
                    })),
                    ..Default::default()
                });
            })),
            ..Default::default()
        });
    }

    fn render_name_field(&self) {
        text(TextProps {
            content: NAME_HINT.into(),
            ..Default::default()
        });

        let app = self.clone();
        input(InputProps {
            id: Some("title-input".to_string()),
            value: self.title.clone().into(),
            on_change: Rc::new(move |event| app.on_title_change(event)),
            classes: Some("field".into()),
            ..Default::default()
        });
    }
}

//! # devops-shell
//!
//! Reactive terminal shell: a heading, a routed navigation bar, a greeting
//! bound to a title field, and a router outlet showing Home or About.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Components are indices into columnar arrays rather than objects. Each
//! array cell is a reactive `Slot` bound to a signal, a getter, or a static
//! value. Rendering is purely derived:
//!
//! ```text
//! Component Tree → FlexNode Slots → layoutDerived → frameBufferDerived → render effect
//! ```
//!
//! Style changes requested by components and directives go through the
//! [`view::ViewRenderer`] trait, so the same component works with live
//! elements or with a recorder in a detached context.
//!
//! ## Modules
//!
//! - [`app`] - Root, Home and About components, route table
//! - [`router`] - Routes, links with active state, outlet
//! - [`directives`] - Element behaviors (`XLargeDirective`)
//! - [`view`] - Renderer abstraction and element handles
//! - [`host`] - Values injected into components
//! - [`primitives`] - box, text, input, control flow
//! - [`engine`] - Component registry, FlexNode, parallel arrays
//! - [`layout`] - Taffy flexbox and text measurement
//! - [`pipeline`] - Deriveds, mount, headless snapshots
//! - [`renderer`] - Frame buffer and ANSI output
//! - [`state`] - Focus and keyboard
//! - [`theme`] - Class stylesheet

pub mod app;
pub mod config;
pub mod directives;
pub mod engine;
pub mod error;
pub mod host;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod router;
pub mod shell;
pub mod state;
pub mod theme;
pub mod types;
pub mod view;

pub use app::{default_routes, AboutComponent, AppComponent, HomeComponent};
pub use config::ShellConfig;
pub use directives::XLargeDirective;
pub use error::{Result, ShellError};
pub use host::{HostContext, RequestContext};
pub use pipeline::{mount, render_to_string, run, MountHandle};
pub use primitives::{
    box_primitive, input, keyed, text, BoxProps, ChangeEvent, Cleanup, InputProps,
    PropValue, TextProps,
};
pub use router::{router_link, router_outlet, LinkProps, Route, Router};
pub use shell::Shell;
pub use types::{FontSize, RenderMode, Rgba};
pub use view::{ArrayRenderer, CommandRenderer, ElementRef, Style, ViewRenderer};

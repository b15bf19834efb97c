//! Router outlet - renders the component of the current route.

use tracing::debug;

use crate::host::HostContext;
use crate::primitives::{keyed, Cleanup};

use super::Router;

/// Render the current route's component in place and swap it on every
/// navigation. The old component is cleaned up before the new one exists.
pub fn router_outlet(router: &Router, host: &HostContext) -> Cleanup {
    let router_for_key = router.clone();
    let router = router.clone();
    let host = host.clone();

    keyed(
        move || router_for_key.current(),
        move |path: &String| match router.route(path) {
            Some(render) => {
                debug!(route = %path, "outlet render");
                render(&host)
            }
            None => Box::new(|| {}),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::text as text_arrays;
    use crate::engine::{get_allocated_count, get_allocated_indices, reset_registry};
    use crate::host::RequestContext;
    use crate::primitives::{box_primitive, text, BoxProps, TextProps};
    use crate::router::Route;

    fn page(label: &'static str) -> impl Fn(&HostContext) -> Cleanup {
        move |_host| {
            text(TextProps {
                content: label.into(),
                ..Default::default()
            })
        }
    }

    fn contents() -> Vec<String> {
        let mut indices = get_allocated_indices();
        indices.sort_unstable();
        indices.into_iter().map(text_arrays::get_text_content).collect()
    }

    #[test]
    fn test_outlet_swaps_on_navigation() {
        reset_registry();
        let router = Router::new(
            vec![Route::new("home", page("home works")), Route::new("about", page("about works"))],
            "home",
        )
        .expect("router");
        let host = HostContext::interactive(RequestContext::new("/home", (80, 24)));

        let _outlet = router_outlet(&router, &host);
        assert_eq!(contents(), vec!["home works"]);

        router.navigate("about").unwrap();
        assert_eq!(contents(), vec!["about works"]);
        assert_eq!(get_allocated_count(), 1);
    }

    #[test]
    fn test_outlet_renders_inside_parent() {
        reset_registry();
        let router = Router::new(vec![Route::new("home", page("home"))], "home").expect("router");
        let host = HostContext::interactive(RequestContext::new("/", (80, 24)));

        let cleanup = box_primitive(BoxProps {
            children: Some(Box::new(move || {
                router_outlet(&router, &host);
            })),
            ..Default::default()
        });
        assert_eq!(crate::engine::get_children(0), vec![1]);

        cleanup();
        assert_eq!(get_allocated_count(), 0);
    }
}

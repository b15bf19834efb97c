//! Whole-screen tests, driven headlessly.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use devops_shell::app::{greeting, ABOUT_TEXT, HEADING, HOME_TEXT};
use devops_shell::engine::arrays::{text as text_arrays, visual};
use devops_shell::engine::{get_index, reset_registry};
use devops_shell::router::LINK_CLASS;
use devops_shell::state::global_keys::{route_keyboard_event, setup_global_keys};
use devops_shell::state::keyboard::{reset_keyboard_state, KeyboardEvent};
use devops_shell::state::{focus, get_focused_index};
use devops_shell::theme::ROUTER_LINK_ACTIVE;
use devops_shell::{Shell, ShellConfig, ShellError};

fn setup() -> Shell {
    reset_registry();
    reset_keyboard_state();
    focus::reset_focus_state();
    Shell::new(ShellConfig::default()).expect("shell")
}

fn content(id: &str) -> String {
    get_index(id).map(text_arrays::get_text_content).unwrap_or_default()
}

fn type_text(text: &str) {
    for c in text.chars() {
        assert!(route_keyboard_event(KeyboardEvent::new(c.to_string())));
    }
}

/// Class lists of the nav links, in tree order.
fn link_classes() -> Vec<String> {
    let mut indices: Vec<usize> = devops_shell::engine::get_allocated_indices()
        .into_iter()
        .filter(|&i| visual::has_class(i, LINK_CLASS))
        .collect();
    indices.sort_unstable();
    indices.into_iter().map(visual::get_classes).collect()
}

#[test]
fn initial_render_shows_empty_title() {
    let shell = setup();

    assert_eq!(shell.app().title(), "");
    assert_eq!(content("greeting"), "You Rock With DevOps, !");
    assert_eq!(content("title-input"), "");
    assert_eq!(content("home"), HOME_TEXT);
}

#[test]
fn typing_a_name_updates_title_greeting_and_input() {
    let shell = setup();

    type_text("Ana");

    assert_eq!(shell.app().title(), "Ana");
    assert_eq!(content("greeting"), "You Rock With DevOps, Ana!");
    assert_eq!(content("title-input"), "Ana");

    assert!(route_keyboard_event(KeyboardEvent::new("Backspace")));
    assert_eq!(shell.app().title(), "An");
    assert_eq!(content("greeting"), greeting("An"));
}

#[test]
fn exactly_one_link_is_active() {
    let shell = setup();
    let active = format!("{LINK_CLASS} {ROUTER_LINK_ACTIVE}");

    assert_eq!(link_classes(), vec![active.clone(), LINK_CLASS.to_string()]);

    shell.router().navigate("about").expect("about");
    assert_eq!(link_classes(), vec![LINK_CLASS.to_string(), active]);
}

#[test]
fn links_navigate_from_the_keyboard() {
    let shell = setup();

    let keys = setup_global_keys(Arc::new(AtomicBool::new(true)));

    // Home link, About link, then the title input.
    focus::focus_first();
    assert!(route_keyboard_event(KeyboardEvent::new("Tab")));
    assert!(route_keyboard_event(KeyboardEvent::new("Enter")));

    assert_eq!(shell.router().current(), "about");
    assert_eq!(content("about"), ABOUT_TEXT);
    assert_eq!(get_index("home"), None);
    keys.cleanup();
}

#[test]
fn unknown_route_keeps_current_page() {
    let shell = setup();

    let result = shell.router().navigate("contact");
    assert!(matches!(result, Err(ShellError::UnknownRoute(ref path)) if path == "contact"));
    assert_eq!(shell.router().current(), "home");
    assert_eq!(content("home"), HOME_TEXT);

    shell.router().navigate("about").expect("about");
    assert_eq!(get_index("home"), None);
    assert_eq!(content("about"), ABOUT_TEXT);
}

#[test]
fn title_survives_navigation() {
    let shell = setup();
    type_text("Jisel");

    shell.router().navigate("about").expect("about");
    shell.router().navigate("home").expect("home");

    assert_eq!(shell.app().title(), "Jisel");
    assert_eq!(get_focused_index(), get_index("title-input"));
}

#[test]
fn snapshot_of_initial_screen() {
    let shell = setup();
    let frame = shell.snapshot();

    assert_eq!(frame.lines().count(), 24);
    assert!(frame.contains(HEADING));
    assert!(frame.contains("Home"));
    assert!(frame.contains("About Us"));
    assert!(frame.contains("Y o u   R o c k   W i t h   D e v O p s ,   !"));
    assert!(frame.contains("Type here your name:"));
    assert!(frame.contains(HOME_TEXT));
}

#[test]
fn snapshot_follows_title_and_route() {
    let shell = setup();
    type_text("Ana");
    shell.router().navigate("about").expect("about");

    let frame = shell.snapshot();
    assert!(frame.contains("D e v O p s ,   A n a !"));
    assert!(frame.contains("Ana"));
    assert!(frame.contains("Hi, we are Mariana"));
    assert!(!frame.contains(HOME_TEXT));
}

#[test]
fn unmount_releases_everything() {
    let shell = setup();
    shell.unmount();

    assert_eq!(devops_shell::engine::get_allocated_count(), 0);
    assert_eq!(get_focused_index(), None);
}

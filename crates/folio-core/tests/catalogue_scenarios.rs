//! End-to-end scenarios over the built-in catalogue.

use std::time::Duration;

use folio_core::catalogue::Catalogue;
use folio_core::nav::Sidebar;
use folio_core::profile::{HOBBIES, hobby_sentence};
use folio_core::scroll::{ScrollDirection, scroll_affordances};
use folio_core::view::{LayoutMode, ViewState};

fn titles<'a>(view: &ViewState<'a>) -> Vec<&'a str> {
    view.filtered().into_iter().map(|p| p.title()).collect()
}

#[test]
fn builtin_tag_counts() {
    let cat = Catalogue::builtin();
    assert_eq!(cat.len(), 9);
    assert_eq!(cat.count_tagged("Rust"), 5);
    assert_eq!(cat.count_tagged("C++"), 2);
}

#[test]
fn select_rust_then_clear() {
    let mut view = ViewState::new(Catalogue::builtin(), 1280);
    view.select_tag("Rust");
    assert_eq!(
        titles(&view),
        [
            "Visualizing RC car in Mixed Reality",
            "Guitar Tablature App",
            "Flappy Bird Clone",
            "Multithreaded MD5-based password cracker",
            "Game of Life",
        ]
    );
    view.clear_tag();
    assert_eq!(titles(&view).len(), 9);
}

#[test]
fn tags_are_case_sensitive() {
    let mut view = ViewState::new(Catalogue::builtin(), 1280);
    view.select_tag("rust");
    assert!(view.is_empty_result());
}

#[test]
fn tag_universe_is_sorted() {
    let view = ViewState::new(Catalogue::builtin(), 1280);
    let tags: Vec<&str> = view.tag_universe().into_iter().collect();
    let mut sorted = tags.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(tags, sorted);
    assert!(tags.contains(&"3D-Rendering"));
    assert!(tags.contains(&"TypeScript"));
}

#[test]
fn shrinking_viewport_switches_to_grid() {
    let mut view = ViewState::new(Catalogue::builtin(), 1024);
    view.set_strip_client_width(700);
    assert_eq!(view.layout_mode(), LayoutMode::Strip);
    assert!(view.scroll_affordances().is_some());

    view.on_viewport_resize(600);
    assert_eq!(view.layout_mode(), LayoutMode::Grid);
    assert_eq!(view.scroll_affordances(), None);
}

#[test]
fn affordances_at_mount() {
    let a = scroll_affordances(0, 1000, 300);
    assert!(!a.can_scroll_left);
    assert!(a.can_scroll_right);
}

#[test]
fn scroll_right_then_back() {
    let mut view = ViewState::new(Catalogue::builtin(), 1280);
    view.set_strip_client_width(1000);
    assert!(view.scroll_by(ScrollDirection::Right));
    while view.is_animating() {
        view.tick(Duration::from_millis(16));
    }
    let a = view.scroll_affordances().unwrap_or_default();
    assert!(a.can_scroll_left);
    assert!(view.scroll_by(ScrollDirection::Left));
    while view.is_animating() {
        view.tick(Duration::from_millis(16));
    }
    assert_eq!(view.strip().offset(), 0);
}

#[test]
fn hobbies_read_as_one_sentence() {
    let sentence = hobby_sentence(HOBBIES.iter().map(|h| h.name));
    assert!(sentence.ends_with('.'));
    assert_eq!(sentence.matches(", ").count(), HOBBIES.len() - 2);
}

#[test]
fn sidebar_follows_breakpoint() {
    let mut sidebar = Sidebar::new(1280);
    sidebar.on_viewport_resize(500);
    assert!(!sidebar.is_visible());
    sidebar.open();
    sidebar.on_viewport_resize(1280);
    assert!(sidebar.is_visible());
    assert!(!sidebar.is_open());
}

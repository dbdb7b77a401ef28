//! End-to-end walks through the shell state, using fakes for the browser

use std::cell::{Cell, RefCell};

use verdi_site::data::publications;
use verdi_site::nav::{nav_items, MenuState, Page};
use verdi_site::pages::research;
use verdi_site::shell::ShellState;
use verdi_site::theme::{self, ColorSchemeQuery, Theme, ThemeTarget, DARK_CLASS};
use verdi_site::{Error, Result};

struct Env(Cell<Option<bool>>);

impl ColorSchemeQuery for Env {
    fn prefers_dark(&self) -> Result<bool> {
        self.0.get().ok_or(Error::MediaQueryUnsupported)
    }
}

#[derive(Default)]
struct Root(RefCell<Vec<&'static str>>);

impl ThemeTarget for Root {
    fn set_dark(&self, dark: bool) -> Result<()> {
        let mut classes = self.0.borrow_mut();
        classes.retain(|c| *c != DARK_CLASS);
        if dark {
            classes.push(DARK_CLASS);
        }
        Ok(())
    }
}

#[test]
fn test_fresh_load_with_dark_preference() {
    let mut state = ShellState::new();
    let root = Root::default();

    theme::apply(&root, state.detect_theme(&Env(Cell::new(Some(true)))));

    assert_eq!(state.current(), Page::Home);
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(*root.0.borrow(), [DARK_CLASS]);
}

#[test]
fn test_fresh_load_without_media_queries() {
    let mut state = ShellState::new();
    let root = Root::default();

    theme::apply(&root, state.detect_theme(&Env(Cell::new(None))));

    assert_eq!(state.theme(), Theme::Light);
    assert!(root.0.borrow().is_empty());
}

#[test]
fn test_preference_change_after_startup_is_ignored() {
    let env = Env(Cell::new(Some(true)));
    let mut state = ShellState::new();
    state.detect_theme(&env);

    env.0.set(Some(false));
    assert_eq!(state.detect_theme(&env), Theme::Dark);
}

#[test]
fn test_every_nav_item_selects_its_page() {
    let mut state = ShellState::new();
    for item in nav_items() {
        state.select_key(item.key);
        assert_eq!(state.current(), item.page);
        assert_eq!(
            Page::ALL.iter().filter(|p| **p == state.current()).count(),
            1
        );
    }
}

#[test]
fn test_unrecognized_key_mounts_home() {
    let mut state = ShellState::new();
    state.select(Page::Research);
    state.select_key("publications");
    assert_eq!(state.current(), Page::Home);
}

#[test]
fn test_research_nav_entry_shows_publications() {
    let mut state = ShellState::new();
    let item = nav_items()
        .into_iter()
        .find(|item| item.label == "Research & Publications")
        .unwrap();

    state.select(item.page);

    assert_eq!(state.current(), Page::Research);
    assert_eq!(research::HEADING, item.label);
    assert!(!publications().is_empty());
}

#[test]
fn test_mobile_menu_pick_closes_and_navigates() {
    let mut state = ShellState::new();
    let mut menu = MenuState::default();

    menu.toggle();
    assert!(menu.is_open());

    state.select(menu.select(Page::Teaching));

    assert!(!menu.is_open());
    assert_eq!(state.current(), Page::Teaching);
}

#[test]
fn test_menu_toggle_leaves_selection_alone() {
    let mut state = ShellState::new();
    let mut menu = MenuState::default();
    state.select(Page::Research);

    menu.toggle();
    menu.toggle();

    assert_eq!(state.current(), Page::Research);
}

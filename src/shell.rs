//! Process-wide UI state owned by the root `App` component.
//!
//! Two values live here: the selected page and the theme. `App` wraps a
//! `ShellState` in a signal and hands children a read view plus a callback;
//! nothing else mutates it.

use crate::nav::Page;
use crate::theme::{self, ColorSchemeQuery, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    current: Page,
    theme: Theme,
    theme_detected: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn select(&mut self, page: Page) {
        if self.current != page {
            log::debug!("Page {} -> {}", self.current, page);
        }
        self.current = page;
    }

    /// Select by nav key; unknown keys land on the home page.
    pub fn select_key(&mut self, key: &str) {
        self.select(Page::from_key_or_home(key));
    }

    /// Read the environment's color-scheme preference.
    ///
    /// Only the first call consults `query`; later calls return the theme
    /// already in place.
    pub fn detect_theme(&mut self, query: &impl ColorSchemeQuery) -> Theme {
        if !self.theme_detected {
            self.theme = theme::detect(query);
            self.theme_detected = true;
        }
        self.theme
    }

    /// Flip the theme. No control calls this yet; it is where a manual
    /// override would hook in.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::MenuState;
    use crate::theme::tests::{FakeRoot, FakeScheme};

    #[test]
    fn test_defaults() {
        let state = ShellState::new();
        assert_eq!(state.current(), Page::Home);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_select_each_page() {
        let mut state = ShellState::new();
        for page in Page::ALL {
            state.select(page);
            assert_eq!(state.current(), page);
        }
    }

    #[test]
    fn test_every_transition_is_one_step() {
        for from in Page::ALL {
            for to in Page::ALL {
                let mut state = ShellState::new();
                state.select(from);
                state.select(to);
                assert_eq!(state.current(), to);
            }
        }
    }

    #[test]
    fn test_select_key() {
        let mut state = ShellState::new();
        state.select_key("research");
        assert_eq!(state.current(), Page::Research);
        state.select_key("teaching");
        assert_eq!(state.current(), Page::Teaching);
    }

    #[test]
    fn test_select_unknown_key_goes_home() {
        let mut state = ShellState::new();
        state.select(Page::Teaching);
        state.select_key("cv");
        assert_eq!(state.current(), Page::Home);
    }

    #[test]
    fn test_detect_dark_and_reflect() {
        let mut state = ShellState::new();
        let root = FakeRoot::default();

        let theme = state.detect_theme(&FakeScheme::new(Some(true)));
        theme::apply(&root, theme);

        assert_eq!(state.theme(), Theme::Dark);
        assert!(root.has_dark());
    }

    #[test]
    fn test_detection_runs_once() {
        let mut state = ShellState::new();
        let env = FakeScheme::new(Some(false));

        assert_eq!(state.detect_theme(&env), Theme::Light);

        // OS switches to dark after startup
        env.answer.set(Some(true));
        assert_eq!(state.detect_theme(&env), Theme::Light);
        assert_eq!(env.calls.get(), 1);
    }

    #[test]
    fn test_detection_failure_is_light() {
        let mut state = ShellState::new();
        assert_eq!(state.detect_theme(&FakeScheme::new(None)), Theme::Light);
    }

    #[test]
    fn test_toggle_theme_round_trip() {
        let mut state = ShellState::new();
        let root = FakeRoot::default();

        theme::apply(&root, state.toggle_theme());
        assert!(root.has_dark());
        theme::apply(&root, state.toggle_theme());
        assert!(!root.has_dark());
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_mobile_pick_closes_menu_and_selects() {
        let mut state = ShellState::new();
        let mut menu = MenuState::default();

        menu.toggle();
        state.select(menu.select(Page::Teaching));

        assert!(!menu.is_open());
        assert_eq!(state.current(), Page::Teaching);
    }
}

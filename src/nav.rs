//! Navigation model: the fixed page set, nav items and mobile menu state.
//!
//! Kept free of DOM calls so the navigation inventory can be unit-tested on
//! the host. The header component and the page switch both derive from
//! [`Page::ALL`].

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Top-level view currently mounted by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Research,
    Teaching,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 3] = [Page::Home, Page::Research, Page::Teaching];

    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Research => "research",
            Page::Teaching => "teaching",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Research => "Research & Publications",
            Page::Teaching => "Teaching",
        }
    }

    pub fn icon(self) -> NavIcon {
        match self {
            Page::Home => NavIcon::Home,
            Page::Research => NavIcon::FileText,
            Page::Teaching => NavIcon::GraduationCap,
        }
    }

    /// Parse a key, resolving anything unrecognized to [`Page::Home`].
    pub fn from_key_or_home(key: &str) -> Page {
        key.parse().unwrap_or_else(|e: Error| {
            log::warn!("{e}, falling back to home");
            Page::Home
        })
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.key() == s)
            .ok_or_else(|| Error::unknown_page(s))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Icon shown next to a nav entry in the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    FileText,
    GraduationCap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub key: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

impl From<Page> for NavItem {
    fn from(page: Page) -> Self {
        Self {
            page,
            key: page.key(),
            label: page.label(),
            icon: page.icon(),
        }
    }
}

pub fn nav_items() -> Vec<NavItem> {
    Page::ALL.into_iter().map(NavItem::from).collect()
}

/// Open/closed state of the mobile menu. Independent of page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A pick from the mobile menu closes it and yields the chosen page.
    pub fn select(&mut self, page: Page) -> Page {
        self.close();
        page
    }
}

// Full Tailwind class strings in match arms so the scanner picks them up.

pub fn desktop_item_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-xl text-sm font-medium transition-all bg-neutral-900 text-white dark:bg-white dark:text-neutral-900"
    } else {
        "px-4 py-2 rounded-xl text-sm font-medium transition-all text-neutral-700 hover:bg-neutral-100 dark:text-neutral-200 dark:hover:bg-neutral-800"
    }
}

pub fn mobile_item_class(active: bool) -> &'static str {
    if active {
        "flex items-center gap-3 rounded-xl px-4 py-3 text-left text-sm font-medium bg-neutral-900 text-white dark:bg-white dark:text-neutral-900"
    } else {
        "flex items-center gap-3 rounded-xl px-4 py-3 text-left text-sm font-medium text-neutral-700 hover:bg-neutral-100 dark:text-neutral-200 dark:hover:bg-neutral-800"
    }
}

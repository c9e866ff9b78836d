//! Page-wide presentation state (theme, scroll section, menu, load flag).
//!
//! DESIGN
//! ======
//! One record is built at boot and shared by every controller. Transition
//! helpers report whether anything changed so callers can skip DOM writes on
//! no-op transitions; scroll-spy fires on every scroll event.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Section id considered current before the first scroll event.
pub const INITIAL_SECTION: &str = "home";

/// Visual theme applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value stored in `data-theme` and in the persisted preference.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Icon class for the toggle control. Reflects the current theme, not
    /// the one a click would switch to.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-sun",
            Self::Light => "fas fa-moon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Shared page state.
///
/// In the browser this lives inside an `RwSignal` so every listener closure
/// can hold a copy of the handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    theme: Theme,
    current_section: String,
    menu_open: bool,
    loaded: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl PageState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme, current_section: INITIAL_SECTION.to_owned(), menu_open: false, loaded: false }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Flip the menu flag and return the new value.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Close the menu for in-page navigation. Returns `true` when it was open,
    /// meaning the panel and button still show it expanded.
    pub fn close_menu(&mut self) -> bool {
        if !self.menu_open {
            return false;
        }
        self.menu_open = false;
        true
    }

    /// Record the section scroll-spy considers current. Returns `false` when
    /// it was already current.
    pub fn enter_section(&mut self, id: &str) -> bool {
        if self.current_section == id {
            return false;
        }
        self.current_section = id.to_owned();
        true
    }

    #[cfg(test)]
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Set the loaded flag. Returns `false` if it was already set.
    pub fn mark_loaded(&mut self) -> bool {
        if self.loaded {
            return false;
        }
        self.loaded = true;
        true
    }
}

/// Outside-click rule for the mobile menu: close only when the menu is open
/// and the click landed in neither the menu panel nor its toggle button.
#[must_use]
pub fn should_close_menu(menu_open: bool, inside_menu: bool, inside_toggle: bool) -> bool {
    menu_open && !inside_menu && !inside_toggle
}

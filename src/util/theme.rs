//! Theme preference restore, toggle, and document application.
//!
//! Reads the stored preference once at boot and writes it back on every
//! toggle. The active theme is exposed to the stylesheet through a
//! `data-theme` attribute on the `<html>` element.
//!
//! TRADE-OFFS
//! ==========
//! A stored value that is not a known theme is treated as absent rather than
//! applied verbatim; the stylesheet only has rules for the two variants.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::page::{PageState, Theme};
use crate::util::storage::{PreferenceStore, StorageError};

/// Attribute on the document root consumed by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Read the persisted theme, falling back to `default` when nothing usable
/// is stored.
pub fn restore(store: &impl PreferenceStore, key: &str, default: Theme) -> Theme {
    match store.read(key) {
        Ok(Some(raw)) => match raw.parse::<Theme>() {
            Ok(theme) => theme,
            Err(e) => {
                log::warn!("ignoring stored theme preference: {e}");
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            log::warn!("theme preference unreadable, using {default}: {e}");
            default
        }
    }
}

/// Flip the theme in `state` and persist it.
///
/// The in-memory theme changes even when the write fails, so the page keeps
/// responding to the toggle; the error is returned for the caller to report.
pub fn toggle(state: &mut PageState, store: &impl PreferenceStore, key: &str) -> Result<Theme, StorageError> {
    let next = state.theme().toggled();
    state.set_theme(next);
    store.write(key, next.as_str())?;
    Ok(next)
}

/// Apply `data-theme` on the `<html>` element.
#[cfg(feature = "hydrate")]
pub fn apply(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::debug!("no document root; theme {theme} not applied");
        return;
    };
    if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
        log::warn!("failed to set {THEME_ATTRIBUTE}: {e:?}");
    }
}

/// Point the toggle's `<i>` icon at the current theme.
#[cfg(feature = "hydrate")]
pub fn refresh_icon(toggle: &web_sys::Element, theme: Theme) {
    match toggle.query_selector("i") {
        Ok(Some(icon)) => icon.set_class_name(theme.icon_class()),
        Ok(None) => {}
        Err(e) => log::warn!("theme icon lookup failed: {e:?}"),
    }
}

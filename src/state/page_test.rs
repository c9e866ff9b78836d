use super::*;

// =============================================================
// PageState defaults
// =============================================================

#[test]
fn page_state_default_is_dark_home_closed() {
    let state = PageState::default();
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.current_section(), "home");
    assert!(!state.menu_open());
    assert!(!state.is_loaded());
}

#[test]
fn page_state_new_keeps_restored_theme() {
    let state = PageState::new(Theme::Light);
    assert_eq!(state.theme(), Theme::Light);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_toggled_alternates() {
    let mut theme = Theme::Dark;
    for i in 0..6 {
        theme = theme.toggled();
        let expected = if i % 2 == 0 { Theme::Light } else { Theme::Dark };
        assert_eq!(theme, expected);
    }
}

#[test]
fn theme_parses_known_values() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!(" light\n".parse::<Theme>(), Ok(Theme::Light));
}

#[test]
fn theme_rejects_unknown_values() {
    assert_eq!("sepia".parse::<Theme>(), Err(ParseThemeError("sepia".to_owned())));
    assert!("".parse::<Theme>().is_err());
    assert!("Dark".parse::<Theme>().is_err());
}

#[test]
fn theme_display_round_trips_through_parse() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
    }
}

#[test]
fn theme_icon_reflects_current_theme() {
    assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
}

#[test]
fn theme_deserializes_lowercase() {
    let theme: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(theme, Theme::Light);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn toggle_menu_flips_and_returns_new_value() {
    let mut state = PageState::default();
    assert!(state.toggle_menu());
    assert!(state.menu_open());
    assert!(!state.toggle_menu());
    assert!(!state.menu_open());
}

#[test]
fn close_menu_reports_whether_it_was_open() {
    let mut state = PageState::default();
    assert!(!state.close_menu());
    assert!(!state.menu_open());

    state.toggle_menu();
    assert!(state.close_menu());
    assert!(!state.menu_open());
    assert!(!state.close_menu());
}

#[test]
fn nav_click_after_menu_toggle_leaves_menu_closed() {
    // Menu opened from the toggle, then a link inside it navigates.
    let mut state = PageState::default();
    assert!(state.toggle_menu());
    assert!(state.close_menu());
    // The document-wide click that follows sees a closed menu.
    assert!(!should_close_menu(state.menu_open(), true, false));
    assert!(!state.menu_open());
}

#[test]
fn enter_section_reports_change_only_once() {
    let mut state = PageState::default();
    assert!(!state.enter_section("home"));
    assert!(state.enter_section("about"));
    assert_eq!(state.current_section(), "about");
    assert!(!state.enter_section("about"));
}

#[test]
fn mark_loaded_is_write_once() {
    let mut state = PageState::default();
    assert!(state.mark_loaded());
    assert!(state.is_loaded());
    assert!(!state.mark_loaded());
    assert!(state.is_loaded());
}

// =============================================================
// Outside-click rule
// =============================================================

#[test]
fn outside_click_closes_open_menu() {
    assert!(should_close_menu(true, false, false));
}

#[test]
fn click_inside_menu_or_toggle_keeps_menu_open() {
    assert!(!should_close_menu(true, true, false));
    assert!(!should_close_menu(true, false, true));
    assert!(!should_close_menu(true, true, true));
}

#[test]
fn closed_menu_ignores_clicks() {
    assert!(!should_close_menu(false, false, false));
}

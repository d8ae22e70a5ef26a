//! Tests for handler module

use super::*;
use crate::message::Message;
use crate::section::{ScrollSnapshot, SectionBounds};
use crate::state::{MenuState, PortfolioState};

fn about_page(scroll_y: f64) -> ScrollSnapshot {
    ScrollSnapshot::new(scroll_y)
        .with_section(SectionId::Home, SectionBounds::new(0.0, 100.0))
        .with_section(SectionId::About, SectionBounds::new(100.0, 500.0))
        .with_section(SectionId::Education, SectionBounds::new(600.0, 300.0))
}

#[test]
fn test_mounted_applies_initial_theme() {
    let mut state = PortfolioState::default();
    let result = update(&mut state, Message::Mounted);
    assert_eq!(
        result.action,
        Some(UpdateAction::ApplyTheme(ThemeMode::Light))
    );
}

#[test]
fn test_scroll_updates_active_section() {
    let mut state = PortfolioState::default();
    let result = update(&mut state, Message::Scrolled(about_page(150.0)));

    assert_eq!(state.active_section, SectionId::About);
    assert!(result.action.is_none());
    assert!(result.message.is_none());
}

#[test]
fn test_scroll_past_last_section_keeps_previous() {
    let mut state = PortfolioState::default();
    update(&mut state, Message::Scrolled(about_page(650.0)));
    assert_eq!(state.active_section, SectionId::Education);

    update(&mut state, Message::Scrolled(about_page(5000.0)));
    assert_eq!(state.active_section, SectionId::Education);
}

#[test]
fn test_scroll_does_not_touch_menu_or_theme() {
    let mut state = PortfolioState::default();
    state.menu = MenuState::Open;
    update(&mut state, Message::Scrolled(about_page(150.0)));
    assert!(state.is_menu_open());
    assert_eq!(state.theme, ThemeMode::Light);
}

#[test]
fn test_navigate_known_section_closes_menu_and_scrolls() {
    let mut state = PortfolioState::default();
    state.menu = MenuState::Open;

    let result = update(&mut state, Message::navigate(SectionId::Projects));

    assert!(!state.is_menu_open());
    assert_eq!(
        result.action,
        Some(UpdateAction::ScrollIntoView {
            section: SectionId::Projects,
            behavior: ScrollBehavior::Smooth,
        })
    );
    // Active section only moves once the host confirms the scroll
    assert_eq!(state.active_section, SectionId::Home);
}

#[test]
fn test_navigate_unknown_id_closes_menu_only() {
    let mut state = PortfolioState::default();
    state.menu = MenuState::Open;
    state.active_section = SectionId::Skills;

    let result = update(&mut state, Message::Navigate("blog".to_string()));

    assert!(!state.is_menu_open());
    assert_eq!(state.active_section, SectionId::Skills);
    assert!(result.action.is_none());
}

#[test]
fn test_navigate_with_menu_closed_stays_closed() {
    let mut state = PortfolioState::default();
    update(&mut state, Message::navigate(SectionId::About));
    assert_eq!(state.menu, MenuState::Closed);
}

#[test]
fn test_section_reached_sets_active() {
    let mut state = PortfolioState::default();
    update(&mut state, Message::SectionReached(SectionId::Contact));
    assert_eq!(state.active_section, SectionId::Contact);
}

#[test]
fn test_instant_scroll_behavior_from_state() {
    let mut state = PortfolioState::default();
    state.scroll_behavior = ScrollBehavior::Instant;

    let result = update(&mut state, Message::navigate(SectionId::Home));
    assert!(matches!(
        result.action,
        Some(UpdateAction::ScrollIntoView {
            behavior: ScrollBehavior::Instant,
            ..
        })
    ));
}

#[test]
fn test_toggle_theme_emits_marker_action() {
    let mut state = PortfolioState::default();

    let result = update(&mut state, Message::ToggleTheme);
    assert!(state.is_dark());
    assert_eq!(result.action, Some(UpdateAction::ApplyTheme(ThemeMode::Dark)));

    let result = update(&mut state, Message::ToggleTheme);
    assert!(!state.is_dark());
    assert_eq!(
        result.action,
        Some(UpdateAction::ApplyTheme(ThemeMode::Light))
    );
}

#[test]
fn test_toggle_menu() {
    let mut state = PortfolioState::default();

    update(&mut state, Message::ToggleMenu);
    assert!(state.is_menu_open());

    update(&mut state, Message::ToggleMenu);
    assert!(!state.is_menu_open());
}

#[test]
fn test_download_resume_uses_configured_asset() {
    let mut state = PortfolioState::default();
    let result = update(&mut state, Message::DownloadResume);

    match result.action {
        Some(UpdateAction::DownloadResume(asset)) => {
            assert_eq!(asset.href, "/resume.pdf");
            assert_eq!(asset.file_name, "Fathima_Nafla_Resume.pdf");
        }
        other => panic!("expected DownloadResume, got {other:?}"),
    }
}

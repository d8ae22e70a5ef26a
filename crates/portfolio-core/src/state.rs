//! Page state (Model in TEA pattern)

use crate::config::SiteConfig;
use crate::host::{ResumeAsset, ScrollBehavior};
use crate::section::SectionId;
use crate::theme::ThemeMode;
use crate::tracker::SectionTracker;

/// Mobile navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// All ephemeral state owned by the portfolio view
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioState {
    pub theme: ThemeMode,
    pub menu: MenuState,
    pub active_section: SectionId,

    /// Active-section detection (header lookahead)
    pub tracker: SectionTracker,
    pub scroll_behavior: ScrollBehavior,
    pub resume: ResumeAsset,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl PortfolioState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            theme: config.theme.initial,
            menu: MenuState::Closed,
            active_section: SectionId::Home,
            tracker: SectionTracker::new(config.navigation.header_offset),
            scroll_behavior: ScrollBehavior::from_smooth(config.navigation.smooth_scroll),
            resume: ResumeAsset {
                href: config.resume.href.clone(),
                file_name: config.resume.file_name.clone(),
            },
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PortfolioState::default();
        assert_eq!(state.theme, ThemeMode::Light);
        assert!(!state.is_menu_open());
        assert!(state.is_active(SectionId::Home));
        assert_eq!(state.tracker.header_offset(), 100.0);
        assert_eq!(state.scroll_behavior, ScrollBehavior::Smooth);
        assert_eq!(state.resume.href, "/resume.pdf");
    }

    #[test]
    fn test_state_follows_config() {
        let mut config = SiteConfig::default();
        config.theme.initial = ThemeMode::Dark;
        config.navigation.smooth_scroll = false;
        config.navigation.header_offset = 72.0;

        let state = PortfolioState::new(&config);
        assert!(state.is_dark());
        assert_eq!(state.scroll_behavior, ScrollBehavior::Instant);
        assert_eq!(state.tracker.header_offset(), 72.0);
    }

    #[test]
    fn test_menu_toggle() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    }
}

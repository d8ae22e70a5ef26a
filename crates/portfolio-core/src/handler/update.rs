//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::Message;
use crate::state::PortfolioState;

use super::{navigation, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut PortfolioState, message: Message) -> UpdateResult {
    match message {
        Message::Mounted => UpdateResult::action(UpdateAction::ApplyTheme(state.theme)),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Scrolled(snapshot) => navigation::handle_scrolled(state, &snapshot),
        Message::Navigate(id) => navigation::handle_navigate(state, &id),
        Message::SectionReached(section) => navigation::handle_section_reached(state, section),

        // ─────────────────────────────────────────────────────────
        // Header Controls
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.theme = state.theme.toggled();
            debug!("Theme switched to {}", state.theme);
            UpdateResult::action(UpdateAction::ApplyTheme(state.theme))
        }

        Message::ToggleMenu => {
            state.menu = state.menu.toggled();
            UpdateResult::none()
        }

        Message::DownloadResume => {
            UpdateResult::action(UpdateAction::DownloadResume(state.resume.clone()))
        }
    }
}

//! Navigation message handlers
//!
//! Handles scroll-driven section tracking and explicit navigate-to-section
//! requests.

use tracing::{trace, warn};

use crate::section::{ScrollSnapshot, SectionId};
use crate::state::{MenuState, PortfolioState};

use super::{UpdateAction, UpdateResult};

/// Handle a native scroll event.
///
/// Keeps the previous active section when the probe falls outside every
/// measured section.
pub fn handle_scrolled(state: &mut PortfolioState, snapshot: &ScrollSnapshot) -> UpdateResult {
    if let Some(section) = state.tracker.evaluate(snapshot) {
        if section != state.active_section {
            trace!("Active section {} -> {}", state.active_section, section);
            state.active_section = section;
        }
    }
    UpdateResult::none()
}

/// Handle a navigation request by element id.
///
/// The menu is closed whether or not the id names a section.
pub fn handle_navigate(state: &mut PortfolioState, id: &str) -> UpdateResult {
    state.menu = MenuState::Closed;

    match id.parse::<SectionId>() {
        Ok(section) => UpdateResult::action(UpdateAction::ScrollIntoView {
            section,
            behavior: state.scroll_behavior,
        }),
        Err(e) => {
            warn!("Navigation ignored: {}", e);
            UpdateResult::none()
        }
    }
}

/// Handle the host confirming it scrolled to `section`
pub fn handle_section_reached(state: &mut PortfolioState, section: SectionId) -> UpdateResult {
    state.active_section = section;
    UpdateResult::none()
}

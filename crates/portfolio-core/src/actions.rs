//! Action handlers: UpdateAction dispatch against the page host

use tracing::{debug, warn};

use crate::handler::{self, UpdateAction};
use crate::host::PageHost;
use crate::message::Message;
use crate::state::PortfolioState;

/// Execute an action against the document.
///
/// Host failures are logged and swallowed; the page never surfaces them.
/// Returns a follow-up message when the action produced one.
pub fn handle_action<H: PageHost + ?Sized>(action: UpdateAction, host: &H) -> Option<Message> {
    match action {
        UpdateAction::ScrollIntoView { section, behavior } => {
            match host.scroll_into_view(section, behavior) {
                Ok(true) => Some(Message::SectionReached(section)),
                Ok(false) => {
                    debug!("No element for section '{}', not scrolling", section);
                    None
                }
                Err(e) => {
                    warn!("Failed to scroll to '{}': {}", section, e);
                    None
                }
            }
        }

        UpdateAction::ApplyTheme(mode) => {
            if let Err(e) = host.set_theme_marker(mode.is_dark()) {
                warn!("Failed to apply {} theme: {}", mode, e);
            }
            None
        }

        UpdateAction::DownloadResume(asset) => {
            if let Err(e) = host.trigger_download(&asset) {
                warn!("Failed to start download of {}: {}", asset.href, e);
            }
            None
        }
    }
}

/// Process a message through the TEA update loop, executing actions and
/// any follow-up messages they produce
pub fn process_message<H: PageHost + ?Sized>(
    state: &mut PortfolioState,
    message: Message,
    host: &H,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        let follow_up = result
            .action
            .and_then(|action| handle_action(action, host));

        msg = result.message.or(follow_up);
    }
}

/// Measure the document and feed the result through the update loop.
///
/// Called from the scroll listener; a failed measurement is a no-op.
pub fn process_scroll<H: PageHost + ?Sized>(state: &mut PortfolioState, host: &H) {
    match host.scroll_snapshot() {
        Ok(snapshot) => process_message(state, Message::Scrolled(snapshot), host),
        Err(e) => debug!("Skipping scroll evaluation: {}", e),
    }
}

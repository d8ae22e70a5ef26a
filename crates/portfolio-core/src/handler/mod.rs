//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `navigation`: Scroll tracking and navigate-to-section handlers

pub(crate) mod navigation;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::host::{ResumeAsset, ScrollBehavior};
use crate::message::Message;
use crate::section::SectionId;
use crate::theme::ThemeMode;

pub use update::update;

/// Actions that the host should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Scroll the section's element to the top of the viewport
    ScrollIntoView {
        section: SectionId,
        behavior: ScrollBehavior,
    },

    /// Reflect the theme as the document-level marker
    ApplyTheme(ThemeMode),

    /// Download the resume asset through a transient anchor
    DownloadResume(ResumeAsset),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the host to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

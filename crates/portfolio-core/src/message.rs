//! Message types for the page (TEA pattern)

use crate::section::{ScrollSnapshot, SectionId};

/// All possible messages/actions on the page
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// View mounted; apply the initial theme marker
    Mounted,

    /// Native scroll event with the layout measured at that moment
    Scrolled(ScrollSnapshot),

    /// Nav link or button asked for a section by its element id
    Navigate(String),

    /// Host finished scrolling to a section (follow-up of a navigation)
    SectionReached(SectionId),

    /// Theme button
    ToggleTheme,

    /// Hamburger button
    ToggleMenu,

    /// "Download Resume" button
    DownloadResume,
}

impl Message {
    /// Navigation request for a known section
    pub fn navigate(section: SectionId) -> Self {
        Message::Navigate(section.dom_id().to_string())
    }
}

//! The document seam: everything the page state machine needs from the browser

use crate::error::Result;
use crate::section::{ScrollSnapshot, SectionId};

/// How a navigation scroll moves the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

impl ScrollBehavior {
    pub fn from_smooth(smooth: bool) -> Self {
        if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        }
    }
}

/// A static file offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAsset {
    pub href: String,
    pub file_name: String,
}

/// Operations the page performs on its document.
///
/// Implemented over `web-sys` by the front end and by a recording fake in
/// tests. Every method is synchronous and runs on the UI thread.
pub trait PageHost {
    /// Current vertical scroll offset plus the bounds of every section element
    /// present in the document
    fn scroll_snapshot(&self) -> Result<ScrollSnapshot>;

    /// Scroll the section's element into view, aligned to its top edge.
    ///
    /// Returns `Ok(false)` without scrolling when the element is missing.
    fn scroll_into_view(&self, section: SectionId, behavior: ScrollBehavior) -> Result<bool>;

    /// Set or clear the document-level dark theme marker
    fn set_theme_marker(&self, dark: bool) -> Result<()>;

    /// Start a browser download of `asset`
    fn trigger_download(&self, asset: &ResumeAsset) -> Result<()>;
}

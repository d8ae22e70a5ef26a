//! # portfolio-core - Page Domain and State
//!
//! Everything about the portfolio page that does not need a browser:
//! section identities and layout, active-section tracking, the theme and
//! menu flags, static content tables, site configuration and the TEA state
//! machine that ties them together.
//!
//! ## Public API
//!
//! ### Sections (`section`, `tracker`)
//! - [`SectionId`] - The fixed, ordered set of page sections
//! - [`SectionBounds`], [`ScrollSnapshot`] - Measured layout at a scroll event
//! - [`SectionTracker`] - Picks the active section from the scroll offset
//!
//! ### State machine (`state`, `message`, `handler`, `actions`)
//! - [`PortfolioState`] - Theme, menu and active section
//! - [`Message`] - Everything that can happen on the page
//! - [`update()`] - Pure state transition returning an [`UpdateResult`]
//! - [`handle_action()`], [`process_message()`] - Execute actions on a [`PageHost`]
//!
//! ### Content (`content`) and configuration (`config`)
//! - [`Skill`], [`Project`], [`EducationEntry`], [`ContactDetails`]
//! - [`SiteConfig`], [`parse_config()`]
//!
//! ## Prelude
//!
//! ```rust
//! use portfolio_core::prelude::*;
//! ```

pub mod actions;
pub mod config;
pub mod content;
pub mod error;
pub mod handler;
pub mod host;
pub mod message;
pub mod section;
pub mod state;
pub mod theme;
pub mod tracker;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

/// Prelude for common imports used throughout the site crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use actions::{handle_action, process_message, process_scroll};
pub use config::{parse_config, LoggingSettings, SiteConfig};
pub use content::{
    education, projects, skill_categories, ContactDetails, EducationEntry, Project, Skill,
    SkillCategory, CONTACT,
};
pub use error::{Error, Result, ResultExt};
pub use handler::{update, UpdateAction, UpdateResult};
pub use host::{PageHost, ResumeAsset, ScrollBehavior};
pub use message::Message;
pub use section::{ScrollSnapshot, SectionBounds, SectionId};
pub use state::{MenuState, PortfolioState};
pub use theme::{ThemeMode, DARK_CLASS};
pub use tracker::SectionTracker;

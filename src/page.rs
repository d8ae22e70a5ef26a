//! Reactive handle on the page state, shared through Leptos context

use leptos::prelude::*;
use portfolio_core::{
    process_message, process_scroll, Message, PortfolioState, SectionId, SiteConfig,
};

use crate::dom::BrowserHost;

/// Signals for the single portfolio view.
///
/// All mutation goes through [`Page::dispatch`], which runs the TEA loop and
/// executes the resulting actions against the document.
#[derive(Clone, Copy)]
pub struct Page {
    state: RwSignal<PortfolioState>,
    active: Memo<SectionId>,
    dark: Memo<bool>,
    menu_open: Memo<bool>,
}

impl Page {
    pub fn new(config: &SiteConfig) -> Self {
        let state = RwSignal::new(PortfolioState::new(config));
        Self {
            state,
            active: Memo::new(move |_| state.with(|s| s.active_section)),
            dark: Memo::new(move |_| state.with(|s| s.is_dark())),
            menu_open: Memo::new(move |_| state.with(|s| s.is_menu_open())),
        }
    }

    pub fn dispatch(&self, message: Message) {
        self.state
            .update(|state| process_message(state, message, &BrowserHost));
    }

    /// Scroll listener body: measure the document and re-evaluate the active section
    pub fn on_scroll(&self) {
        self.state
            .update(|state| process_scroll(state, &BrowserHost));
    }

    pub fn navigate(&self, section: SectionId) {
        self.dispatch(Message::navigate(section));
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active.get() == section
    }

    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }
}

/// Page handle provided by [`crate::App`]
pub fn use_page() -> Page {
    expect_context::<Page>()
}

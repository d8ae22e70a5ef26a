//! Test utilities for the page host
//!
//! Provides a recording [`PageHost`] that models a document as a list of
//! measured sections plus a scroll offset.

use std::cell::{Cell, RefCell};

use crate::error::{Error, Result};
use crate::host::{PageHost, ResumeAsset, ScrollBehavior};
use crate::section::{ScrollSnapshot, SectionBounds, SectionId};

/// A side effect the fake host performed
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ScrollIntoView(SectionId, ScrollBehavior),
    SetThemeMarker(bool),
    Download(ResumeAsset),
}

/// In-memory document with a scroll offset and a theme marker
#[derive(Debug, Default)]
pub struct FakeHost {
    sections: Vec<(SectionId, SectionBounds)>,
    scroll_y: Cell<f64>,
    dark: Cell<bool>,
    calls: RefCell<Vec<HostCall>>,
    failing: bool,
}

impl FakeHost {
    /// Empty document (no sections)
    pub fn new() -> Self {
        Self::default()
    }

    /// Every section stacked without gaps:
    ///
    /// | section   | span          |
    /// |-----------|---------------|
    /// | home      | [0, 100)      |
    /// | about     | [100, 600)    |
    /// | education | [600, 900)    |
    /// | skills    | [900, 1400)   |
    /// | projects  | [1400, 2000)  |
    /// | contact   | [2000, 2600)  |
    pub fn with_all_sections() -> Self {
        let heights = [100.0, 500.0, 300.0, 500.0, 600.0, 600.0];
        let mut host = Self::new();
        let mut top = 0.0;
        for (id, height) in SectionId::ALL.into_iter().zip(heights) {
            host = host.with_section(id, SectionBounds::new(top, height));
            top += height;
        }
        host
    }

    pub fn with_section(mut self, id: SectionId, bounds: SectionBounds) -> Self {
        self.sections.push((id, bounds));
        self
    }

    /// Every host operation fails with a DOM error and has no effect
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    /// Whether the dark marker is currently set on the document
    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            Err(Error::dom("fake host failure"))
        } else {
            Ok(())
        }
    }

    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        self.sections
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, bounds)| *bounds)
    }
}

impl PageHost for FakeHost {
    fn scroll_snapshot(&self) -> Result<ScrollSnapshot> {
        self.check()?;
        Ok(ScrollSnapshot::measure(self.scroll_y(), |id| self.bounds(id)))
    }

    fn scroll_into_view(&self, section: SectionId, behavior: ScrollBehavior) -> Result<bool> {
        self.check()?;
        let Some(bounds) = self.bounds(section) else {
            return Ok(false);
        };
        self.scroll_y.set(bounds.top);
        self.calls
            .borrow_mut()
            .push(HostCall::ScrollIntoView(section, behavior));
        Ok(true)
    }

    fn set_theme_marker(&self, dark: bool) -> Result<()> {
        self.check()?;
        self.dark.set(dark);
        self.calls.borrow_mut().push(HostCall::SetThemeMarker(dark));
        Ok(())
    }

    fn trigger_download(&self, asset: &ResumeAsset) -> Result<()> {
        self.check()?;
        self.calls
            .borrow_mut()
            .push(HostCall::Download(asset.clone()));
        Ok(())
    }
}

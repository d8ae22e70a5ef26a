//! Page sections and their measured layout

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One named block of page content, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Education,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in the order they appear on the page
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The element id used in the document (`<section id="...">`)
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label (capitalized id)
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// In-page anchor href (`#projects`)
    pub fn href(self) -> String {
        format!("#{}", self.dom_id())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.dom_id() == s)
            .ok_or_else(|| Error::unknown_section(s))
    }
}

/// Vertical extent of a section element, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    /// `offsetTop` of the element
    pub top: f64,
    /// `offsetHeight` of the element
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Exclusive lower edge
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `top <= y < top + height`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Layout of the page as measured at a single scroll event.
///
/// Sections whose element is missing from the document are simply not
/// present in `sections`; order follows [`SectionId::ALL`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub sections: Vec<(SectionId, SectionBounds)>,
}

impl ScrollSnapshot {
    pub fn new(scroll_y: f64) -> Self {
        Self {
            scroll_y,
            sections: Vec::new(),
        }
    }

    /// Builder-style helper used by hosts and tests
    pub fn with_section(mut self, id: SectionId, bounds: SectionBounds) -> Self {
        self.sections.push((id, bounds));
        self
    }

    /// Measure every known section through `measure`, skipping the ones it
    /// cannot find.
    pub fn measure<F>(scroll_y: f64, mut measure: F) -> Self
    where
        F: FnMut(SectionId) -> Option<SectionBounds>,
    {
        let sections = SectionId::ALL
            .into_iter()
            .filter_map(|id| measure(id).map(|bounds| (id, bounds)))
            .collect();
        Self { scroll_y, sections }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_sections() {
        for id in SectionId::ALL {
            assert_eq!(id.dom_id().parse::<SectionId>().unwrap(), id);
        }
    }

    #[test]
    fn test_parse_unknown_section() {
        let err = "blog".parse::<SectionId>().unwrap_err();
        assert!(matches!(err, Error::UnknownSection { ref id } if id == "blog"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Home".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_labels_capitalize_ids() {
        for id in SectionId::ALL {
            let dom = id.dom_id();
            let expected = format!("{}{}", dom[..1].to_uppercase(), &dom[1..]);
            assert_eq!(id.label(), expected);
        }
    }

    #[test]
    fn test_href() {
        assert_eq!(SectionId::Projects.href(), "#projects");
        assert_eq!(SectionId::Home.to_string(), "home");
    }

    #[test]
    fn test_bounds_half_open() {
        let bounds = SectionBounds::new(100.0, 500.0);
        assert!(!bounds.contains(99.9));
        assert!(bounds.contains(100.0));
        assert!(bounds.contains(599.9));
        assert!(!bounds.contains(600.0));
    }

    #[test]
    fn test_zero_height_contains_nothing() {
        let bounds = SectionBounds::new(100.0, 0.0);
        assert!(!bounds.contains(100.0));
    }

    #[test]
    fn test_measure_skips_missing_elements() {
        let snapshot = ScrollSnapshot::measure(0.0, |id| match id {
            SectionId::Home => Some(SectionBounds::new(0.0, 100.0)),
            SectionId::Skills => Some(SectionBounds::new(100.0, 100.0)),
            _ => None,
        });
        let ids: Vec<_> = snapshot.sections.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![SectionId::Home, SectionId::Skills]);
    }
}

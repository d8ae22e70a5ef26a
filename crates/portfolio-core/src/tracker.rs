//! Scroll-driven active section detection

use crate::section::{ScrollSnapshot, SectionId};

/// Default lookahead compensating for the sticky header
pub const DEFAULT_HEADER_OFFSET: f64 = 100.0;

/// Picks the section currently "in view" for navigation highlighting.
///
/// The probe point is `scroll_y + header_offset`. The first measured section
/// whose half-open span contains the probe wins; sections are expected not
/// to overlap, otherwise document order breaks the tie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTracker {
    header_offset: f64,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_OFFSET)
    }
}

impl SectionTracker {
    pub fn new(header_offset: f64) -> Self {
        Self { header_offset }
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    /// Section containing the probe, or `None` above the first / below the
    /// last section (caller keeps its previous value).
    pub fn evaluate(&self, snapshot: &ScrollSnapshot) -> Option<SectionId> {
        let probe = snapshot.scroll_y + self.header_offset;
        snapshot
            .sections
            .iter()
            .find(|(_, bounds)| bounds.contains(probe))
            .map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionBounds;

    /// home [0,100) about [100,600) education [600,900) skills [900,1400)
    /// projects [1400,2000) contact [2000,2600)
    fn stacked_page(scroll_y: f64) -> ScrollSnapshot {
        let heights = [100.0, 500.0, 300.0, 500.0, 600.0, 600.0];
        let mut top = 0.0;
        let mut snapshot = ScrollSnapshot::new(scroll_y);
        for (id, height) in SectionId::ALL.into_iter().zip(heights) {
            snapshot = snapshot.with_section(id, SectionBounds::new(top, height));
            top += height;
        }
        snapshot
    }

    #[test]
    fn test_scroll_150_lands_in_about() {
        let tracker = SectionTracker::default();
        assert_eq!(
            tracker.evaluate(&stacked_page(150.0)),
            Some(SectionId::About)
        );
    }

    #[test]
    fn test_every_position_inside_a_section_selects_it() {
        let tracker = SectionTracker::new(0.0);
        let page = stacked_page(0.0);
        for (id, bounds) in &page.sections {
            let mut y = bounds.top;
            while y < bounds.bottom() {
                let snapshot = ScrollSnapshot {
                    scroll_y: y,
                    ..page.clone()
                };
                assert_eq!(tracker.evaluate(&snapshot), Some(*id), "y = {y}");
                y += 7.5;
            }
        }
    }

    #[test]
    fn test_lower_boundary_belongs_to_next_section() {
        let tracker = SectionTracker::default();
        // probe = 500 + 100 = 600, the end of about and the start of education
        assert_eq!(
            tracker.evaluate(&stacked_page(500.0)),
            Some(SectionId::Education)
        );
    }

    #[test]
    fn test_no_match_below_last_section() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.evaluate(&stacked_page(2600.0)), None);
    }

    #[test]
    fn test_no_match_above_first_section() {
        let tracker = SectionTracker::new(0.0);
        let snapshot =
            ScrollSnapshot::new(10.0).with_section(SectionId::About, SectionBounds::new(50.0, 100.0));
        assert_eq!(tracker.evaluate(&snapshot), None);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let tracker = SectionTracker::default();
        let snapshot = ScrollSnapshot::new(900.0)
            .with_section(SectionId::Home, SectionBounds::new(0.0, 600.0))
            .with_section(SectionId::Projects, SectionBounds::new(600.0, 800.0));
        assert_eq!(tracker.evaluate(&snapshot), Some(SectionId::Projects));
    }

    #[test]
    fn test_overlap_resolved_by_order() {
        let tracker = SectionTracker::new(0.0);
        let snapshot = ScrollSnapshot::new(150.0)
            .with_section(SectionId::About, SectionBounds::new(100.0, 200.0))
            .with_section(SectionId::Skills, SectionBounds::new(120.0, 200.0));
        assert_eq!(tracker.evaluate(&snapshot), Some(SectionId::About));
    }

    #[test]
    fn test_empty_snapshot() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.evaluate(&ScrollSnapshot::new(0.0)), None);
    }
}

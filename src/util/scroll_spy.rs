//! Scroll-position math for navigation: current section, scroll targets,
//! active-link selection, and the header "scrolled" threshold.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

/// Default distance added to `scrollY` before testing section bounds.
pub const DEFAULT_SPY_OFFSET: f64 = 100.0;

/// Default `scrollY` above which the header gets its `scrolled` class.
pub const DEFAULT_HEADER_THRESHOLD: f64 = 50.0;

/// Document-relative extent of one `section[id]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Section whose bounds contain `scroll_y + offset`.
///
/// Sections are scanned in document order and a later match replaces an
/// earlier one, so the last overlapping section wins.
#[must_use]
pub fn current_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&SectionBounds> {
    let position = scroll_y + offset;
    sections.iter().rev().find(|s| s.contains(position))
}

/// Scroll offset that puts the target's top edge just below the fixed header.
#[must_use]
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

#[must_use]
pub fn header_is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Which navigation link(s) should carry the `active` class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveLink<'a> {
    /// The link at this index (in `.nav-link` order) was clicked.
    Clicked(usize),
    /// Scroll-spy settled on this section id; links match on `data-section`.
    Section(&'a str),
}

/// Locate the clicked link among the current nav links. `None` when the
/// element is no longer in the list (removed or re-rendered since the click
/// listener was attached); the caller then leaves the links alone.
#[must_use]
pub fn clicked_link<T: PartialEq>(links: &[T], clicked: &T) -> Option<ActiveLink<'static>> {
    links.iter().position(|l| l == clicked).map(ActiveLink::Clicked)
}

/// Active flag per link, in link order. Every link is cleared first, so a
/// click always leaves exactly one active link.
#[must_use]
pub fn active_flags(link_sections: &[Option<&str>], active: ActiveLink<'_>) -> Vec<bool> {
    link_sections
        .iter()
        .enumerate()
        .map(|(i, section)| match active {
            ActiveLink::Clicked(idx) => i == idx,
            ActiveLink::Section(id) => *section == Some(id),
        })
        .collect()
}

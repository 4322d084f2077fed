//! Navigation - Page Sections and Scrolling
//!
//! The page is a single scroll container whose children are the sections in
//! [`Section::all`] order, followed by the footer. "Anchor links" scroll that
//! container to a section's child index.

use gpui::{ScrollHandle, px};

use crate::constants::SCROLLED_THRESHOLD;

/// Sections of the page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Hero banner
    #[default]
    Home,
    /// Bio and values
    About,
    /// Project gallery
    Portfolio,
    /// Service list and process
    Services,
    /// Client testimonials carousel
    Testimonials,
    /// Contact info and form
    Contact,
}

impl Section {
    /// Anchor name, as in `#home`
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Services => "services",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    /// Translation key for the navigation label
    ///
    /// Testimonials are reachable by scrolling only and have no nav entry.
    pub fn nav_key(&self) -> Option<&'static str> {
        match self {
            Section::Home => Some("nav.home"),
            Section::About => Some("nav.about"),
            Section::Portfolio => Some("nav.portfolio"),
            Section::Services => Some("nav.services"),
            Section::Testimonials => None,
            Section::Contact => Some("nav.contact"),
        }
    }

    /// Child index inside the page scroll container
    pub fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    /// All sections in display order
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Portfolio,
            Section::Services,
            Section::Testimonials,
            Section::Contact,
        ]
    }

    /// Sections linked from the navbar and footer, with their label keys
    pub fn nav_links() -> impl Iterator<Item = (Section, &'static str)> {
        Self::all()
            .iter()
            .filter_map(|section| section.nav_key().map(|key| (*section, key)))
    }
}

/// Shared handle for scrolling the page to a section
#[derive(Clone)]
pub struct Navigator {
    scroll: ScrollHandle,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Create a navigator with a fresh scroll handle
    pub fn new() -> Self {
        Self {
            scroll: ScrollHandle::new(),
        }
    }

    /// The handle the page container tracks
    pub fn scroll_handle(&self) -> &ScrollHandle {
        &self.scroll
    }

    /// Scroll so the top of `section` meets the top of the page viewport
    ///
    /// Before the first layout the item bounds are unknown and the request
    /// is handed to [`ScrollHandle::scroll_to_item`] instead.
    pub fn scroll_to(&self, section: Section) {
        tracing::debug!(section = section.anchor(), "Scrolling to section");
        match self.scroll.bounds_for_item(section.index()) {
            Some(item) => {
                let viewport = self.scroll.bounds();
                let mut offset = self.scroll.offset();
                offset.y = offset.y - (item.origin.y - viewport.origin.y);
                self.scroll.set_offset(offset);
            }
            None => self.scroll.scroll_to_item(section.index()),
        }
    }

    /// Whether the page has scrolled past the navbar threshold
    pub fn is_scrolled(&self) -> bool {
        self.scroll.offset().y < px(-SCROLLED_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_display_order() {
        for (expected, section) in Section::all().iter().enumerate() {
            assert_eq!(section.index(), expected);
        }
    }

    #[test]
    fn test_nav_links() {
        let links: Vec<_> = Section::nav_links().map(|(s, _)| s).collect();
        assert_eq!(
            links,
            vec![
                Section::Home,
                Section::About,
                Section::Portfolio,
                Section::Services,
                Section::Contact,
            ]
        );
    }

    #[test]
    fn test_scrolled_threshold() {
        let navigator = Navigator::new();
        assert!(!navigator.is_scrolled());

        navigator
            .scroll_handle()
            .set_offset(gpui::point(px(0.0), px(-(SCROLLED_THRESHOLD - 1.0))));
        assert!(!navigator.is_scrolled());

        navigator
            .scroll_handle()
            .set_offset(gpui::point(px(0.0), px(-(SCROLLED_THRESHOLD + 1.0))));
        assert!(navigator.is_scrolled());
    }

    #[test]
    fn test_nav_keys_are_translated() {
        for (_, key) in Section::nav_links() {
            assert!(crate::i18n::lookup(crate::i18n::Locale::En, key).is_some(), "{key}");
        }
    }
}

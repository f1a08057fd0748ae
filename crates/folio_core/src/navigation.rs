//! Navigation links, scroll-spy highlighting and section entrance markers.

use crate::constants::{ACTIVE_CLASS, IN_VIEW_CLASS, NAV_LINK_SELECTOR, SECTION_SELECTOR};
use crate::host::{self, PageHost};
use crate::intersection::{IntersectionEntry, ObserverOptions};
use crate::scroll_spy::{ScrollSpy, SectionSpan};
use crate::settings::NavigationSettings;

/// A navigation link and the section id its `href` points at.
#[derive(Debug, Clone)]
pub struct NavLink<E> {
    pub element: E,
    pub target: Option<String>,
}

#[derive(Debug)]
pub struct NavigationManager<E> {
    links: Vec<NavLink<E>>,
    sections: Vec<E>,
    spy: ScrollSpy,
    settings: NavigationSettings,
}

impl<E: Clone + PartialEq> NavigationManager<E> {
    pub fn new<H: PageHost<Element = E>>(host: &H, settings: NavigationSettings) -> Self {
        let links: Vec<NavLink<E>> = host
            .query_all(NAV_LINK_SELECTOR)
            .into_iter()
            .map(|element| {
                let target = host
                    .attribute(&element, "href")
                    .as_deref()
                    .and_then(host::fragment_id)
                    .map(str::to_string);
                NavLink { element, target }
            })
            .collect();
        let sections = host.query_all(SECTION_SELECTOR);
        log::debug!("Navigation: {} links, {} sections", links.len(), sections.len());

        Self {
            links,
            sections,
            spy: ScrollSpy::new(settings.spy_lookahead),
            settings,
        }
    }

    pub fn links(&self) -> &[NavLink<E>] {
        &self.links
    }

    pub fn sections(&self) -> &[E] {
        &self.sections
    }

    pub fn active_section(&self) -> Option<&str> {
        self.spy.active()
    }

    pub fn section_observer(&self) -> ObserverOptions {
        self.settings.section_observer
    }

    /// Smooth-scroll to the section a clicked link points at.
    pub fn on_link_click<H: PageHost<Element = E>>(&self, host: &H, link: &E) -> bool {
        let Some(target) = self
            .links
            .iter()
            .find(|l| l.element == *link)
            .and_then(|l| l.target.as_deref())
        else {
            return false;
        };
        host::scroll_to_section(host, target, self.settings.header_offset)
    }

    /// Re-run the scroll-spy against the current geometry.
    pub fn on_scroll<H: PageHost<Element = E>>(&mut self, host: &H) {
        let spans = self.section_spans(host);
        if let Some(id) = self.spy.update(&spans, host.scroll_y()) {
            let id = id.to_string();
            self.highlight(host, &id);
        }
    }

    /// Mark sections that entered the margin-adjusted viewport.
    pub fn on_section_intersections<H: PageHost<Element = E>>(
        &self,
        host: &H,
        entries: &[IntersectionEntry<E>],
    ) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            host.set_class(&entry.target, IN_VIEW_CLASS, true);
        }
    }

    fn section_spans<H: PageHost<Element = E>>(&self, host: &H) -> Vec<SectionSpan> {
        self.sections
            .iter()
            .filter_map(|section| {
                let id = host.attribute(section, "id")?;
                Some(SectionSpan::new(
                    id,
                    host.offset_top(section),
                    host.offset_height(section),
                ))
            })
            .collect()
    }

    fn highlight<H: PageHost<Element = E>>(&self, host: &H, section_id: &str) {
        log::debug!("Active section: {}", section_id);
        for link in &self.links {
            let is_target = link.target.as_deref() == Some(section_id);
            host.set_class(&link.element, ACTIVE_CLASS, is_target);
        }
    }
}

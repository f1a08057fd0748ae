//! The DOM surface the page behaviours run against.
//!
//! The browser build implements [`PageHost`] on top of `web_sys`; the unit
//! tests implement it with an in-memory fake. Everything in this crate only
//! ever talks to the page through this trait.

/// Read and mutate the presentation state of the current document.
///
/// Element handles are cheap to clone and compare by identity.
pub trait PageHost {
    type Element: Clone + PartialEq;

    /// Look up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements matching a CSS selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// First element matching a CSS selector.
    fn query(&self, selector: &str) -> Option<Self::Element> {
        self.query_all(selector).into_iter().next()
    }

    /// The document body, which carries the page-wide presentation classes.
    fn body(&self) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Add (`enabled == true`) or remove a class.
    fn set_class(&self, element: &Self::Element, class: &str, enabled: bool);

    /// Set an inline style property. An empty value clears the override.
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    /// Distance from the top of the document to the element's top edge.
    fn offset_top(&self, element: &Self::Element) -> f64;

    fn offset_height(&self, element: &Self::Element) -> f64;

    /// Current vertical scroll position of the window.
    fn scroll_y(&self) -> f64;

    /// Smooth-scroll the window so that `top` is at the viewport top.
    fn smooth_scroll_to(&self, top: f64);
}

/// Scroll to the element with the given id, leaving room for the fixed header.
///
/// Returns false when no such element exists.
pub fn scroll_to_section<H: PageHost>(host: &H, section_id: &str, header_offset: f64) -> bool {
    match host.element_by_id(section_id) {
        Some(element) => {
            let top = host.offset_top(&element) - header_offset;
            log::debug!("Scrolling to #{} at {}", section_id, top);
            host.smooth_scroll_to(top);
            true
        }
        None => {
            log::debug!("No section with id '{}'", section_id);
            false
        }
    }
}

/// Extract the fragment id from an in-page `href` such as `#about`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

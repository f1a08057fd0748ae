//! In-memory [`PageHost`] used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use crate::host::PageHost;

#[derive(Debug, Default)]
struct FakeElement {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    selectors: Vec<String>,
    top: f64,
    height: f64,
}

/// A document made of flat elements addressed by index.
///
/// Selector matching is literal: an element matches a selector only if it
/// was registered with that exact selector string.
#[derive(Debug, Default)]
pub struct FakeHost {
    elements: RefCell<Vec<FakeElement>>,
    body: Cell<Option<usize>>,
    scroll_y: Cell<f64>,
    scrolled_to: RefCell<Vec<f64>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host with a body and both theme buttons.
    pub fn with_theme_buttons() -> Self {
        let host = Self::new();
        host.add_body();
        host.add_with_id(crate::constants::LIGHT_BUTTON_ID, &[]);
        host.add_with_id(crate::constants::DARK_BUTTON_ID, &[]);
        host
    }

    pub fn add(&self, selectors: &[&str]) -> usize {
        let mut elements = self.elements.borrow_mut();
        elements.push(FakeElement {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        });
        elements.len() - 1
    }

    pub fn add_body(&self) -> usize {
        let body = self.add(&["body"]);
        self.body.set(Some(body));
        body
    }

    pub fn add_with_id(&self, id: &str, selectors: &[&str]) -> usize {
        let index = self.add(selectors);
        self.set_attribute(index, "id", id);
        index
    }

    /// A `.section` with an id spanning `[top, top + height)`.
    pub fn add_section(&self, id: &str, top: f64, height: f64) -> usize {
        let index = self.add_with_id(id, &[crate::constants::SECTION_SELECTOR]);
        self.set_geometry(index, top, height);
        index
    }

    pub fn set_geometry(&self, element: usize, top: f64, height: f64) {
        let mut elements = self.elements.borrow_mut();
        elements[element].top = top;
        elements[element].height = height;
    }

    pub fn add_nav_link(&self, href: &str) -> usize {
        let index = self.add(&[
            crate::constants::NAV_LINK_SELECTOR,
            crate::constants::ANCHOR_SELECTOR,
        ]);
        self.set_attribute(index, "href", href);
        index
    }

    pub fn set_attribute(&self, element: usize, name: &str, value: &str) {
        self.elements.borrow_mut()[element]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn add_class(&self, element: usize, class: &str) {
        self.elements.borrow_mut()[element]
            .classes
            .insert(class.to_string());
    }

    pub fn classes(&self, element: usize) -> Vec<String> {
        self.elements.borrow()[element]
            .classes
            .iter()
            .cloned()
            .collect()
    }

    pub fn style(&self, element: usize, property: &str) -> Option<String> {
        self.elements.borrow()[element].styles.get(property).cloned()
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn scrolled_to(&self) -> Vec<f64> {
        self.scrolled_to.borrow().clone()
    }
}

impl PageHost for FakeHost {
    type Element = usize;

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.elements
            .borrow()
            .iter()
            .position(|e| e.attributes.get("id").is_some_and(|v| v == id))
    }

    fn query_all(&self, selector: &str) -> Vec<usize> {
        self.elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.selectors.iter().any(|s| s == selector))
            .map(|(i, _)| i)
            .collect()
    }

    fn body(&self) -> Option<usize> {
        self.body.get()
    }

    fn attribute(&self, element: &usize, name: &str) -> Option<String> {
        self.elements.borrow()[*element].attributes.get(name).cloned()
    }

    fn has_class(&self, element: &usize, class: &str) -> bool {
        self.elements.borrow()[*element].classes.contains(class)
    }

    fn set_class(&self, element: &usize, class: &str, enabled: bool) {
        let mut elements = self.elements.borrow_mut();
        let classes = &mut elements[*element].classes;
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn set_style(&self, element: &usize, property: &str, value: &str) {
        let mut elements = self.elements.borrow_mut();
        let styles = &mut elements[*element].styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn offset_top(&self, element: &usize) -> f64 {
        self.elements.borrow()[*element].top
    }

    fn offset_height(&self, element: &usize) -> f64 {
        self.elements.borrow()[*element].height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scrolled_to.borrow_mut().push(top);
    }
}

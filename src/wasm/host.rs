//! `web_sys` implementations of the page host and preference store.

use folio_core::{FolioError, MemoryStore, PageHost, PreferenceStore};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Storage, Window};

/// The live document of the current window.
#[derive(Debug, Clone)]
pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    /// None outside a browsing context (e.g. in a worker).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl PageHost for DomHost {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("Invalid selector '{}': {:?}", selector, e);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_class(&self, element: &Element, class: &str, enabled: bool) {
        let classes = element.class_list();
        let result = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if let Err(e) = result {
            log::warn!("Failed to update class '{}': {:?}", class, e);
        }
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        // SVG and other non-HTML elements have no inline style we manage
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(e) = html.style().set_property(property, value) {
            log::warn!("Failed to set style '{}': {:?}", property, e);
        }
    }

    fn offset_top(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_top()))
    }

    fn offset_height(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_height()))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// localStorage when the browser allows it, otherwise an in-memory map.
#[derive(Debug)]
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open(window: &Window) -> Self {
        match Self::local_storage(window) {
            Ok(storage) => BrowserStore::Local(storage),
            Err(e) => {
                log::warn!("{}; theme preference will not persist", e);
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }

    fn local_storage(window: &Window) -> Result<Storage, FolioError> {
        window
            .local_storage()
            .map_err(|e| FolioError::Storage(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| FolioError::Storage("localStorage not available".to_string()))
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> folio_core::Result<Option<String>> {
        match self {
            BrowserStore::Local(storage) => storage
                .get_item(key)
                .map_err(|e| FolioError::Storage(format!("Failed to read '{}': {:?}", key, e))),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> folio_core::Result<()> {
        match self {
            BrowserStore::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| FolioError::Storage(format!("Failed to write '{}': {:?}", key, e))),
            BrowserStore::Memory(store) => store.set(key, value),
        }
    }
}

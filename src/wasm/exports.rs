//! Entry points callable from page scripts.
//!
//! Both are exported from the module and also installed on `window` so that
//! inline `onclick="scrollToSection('about')"` handlers keep working.

use folio_core::{apply_style_theme, constants::HEADER_OFFSET, style_theme_for};
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::host::DomHost;

/// Smooth-scroll to the section with id `section_id`.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) -> bool {
    match DomHost::new() {
        Some(host) => folio_core::scroll_to_section(&host, section_id, HEADER_OFFSET),
        None => false,
    }
}

/// Apply the inline-style theme variant. Anything but "dark" resets to light.
#[wasm_bindgen(js_name = switchThemeWithStyles)]
pub fn switch_theme_with_styles(theme: Option<String>) -> Result<(), JsValue> {
    let theme = style_theme_for(theme.as_deref().unwrap_or_default());
    let host = DomHost::new().ok_or_else(|| JsValue::from_str("No document available"))?;
    apply_style_theme(&host, theme).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Expose both entry points as globals.
pub fn install_globals(window: &Window) {
    let scroll = Closure::wrap(
        Box::new(|section_id: String| scroll_to_section(&section_id)) as Box<dyn Fn(String) -> bool>
    );
    let styles = Closure::wrap(Box::new(|theme: Option<String>| {
        if let Err(e) = switch_theme_with_styles(theme) {
            log::warn!("switchThemeWithStyles failed: {:?}", e);
        }
    }) as Box<dyn Fn(Option<String>)>);

    for (name, function) in [
        ("scrollToSection", scroll.as_ref()),
        ("switchThemeWithStyles", styles.as_ref()),
    ] {
        if let Err(e) = js_sys::Reflect::set(window, &JsValue::from_str(name), function) {
            log::warn!("Failed to install window.{}: {:?}", name, e);
        }
    }

    scroll.forget();
    styles.forget();
}

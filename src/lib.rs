//! folio - interactivity for a static portfolio page
//!
//! Theme switching persisted to localStorage, scroll-spy navigation and
//! scroll-triggered reveals, compiled to WebAssembly. The behaviour itself
//! lives in `folio_core`; this crate binds it to the browser.

pub mod config;

pub use config::{AppConfig, ConfigError, LogLevel};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{scroll_to_section, start, switch_theme_with_styles, BrowserStore, DomHost};

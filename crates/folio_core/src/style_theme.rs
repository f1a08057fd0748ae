//! Inline-style theme variant.
//!
//! An alternative to [`crate::ThemeManager`] kept for external callers: it
//! writes colours straight into element styles instead of toggling a class,
//! and never touches the stored preference.

use crate::constants::{
    ABOUT_SECTION_CLASS, NAVBAR_SELECTOR, PROJECTS_SECTION_CLASS, SECTION_SELECTOR,
    STYLED_CARD_SELECTOR,
};
use crate::error::{FolioError, Result};
use crate::host::PageHost;
use crate::theme::Theme;

/// Colours written by the dark variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePalette {
    pub body_background: &'static str,
    pub body_text: &'static str,
    pub navbar_background: &'static str,
    pub section_background: &'static str,
    pub raised_section_background: &'static str,
    pub card_background: &'static str,
    pub card_border: &'static str,
}

pub const DARK_PALETTE: StylePalette = StylePalette {
    body_background: "#0f172a",
    body_text: "#f8fafc",
    navbar_background: "rgba(15, 23, 42, 0.9)",
    section_background: "#0f172a",
    raised_section_background: "#1e293b",
    card_background: "#334155",
    card_border: "#475569",
};

/// Theme requested by a caller of the inline-style variant.
///
/// Only `"dark"` selects the dark palette; anything else resets to light.
pub fn style_theme_for(value: &str) -> Theme {
    match value.parse::<Theme>() {
        Ok(theme) => theme,
        Err(_) => {
            log::debug!("Treating style theme '{}' as light", value);
            Theme::Light
        }
    }
}

/// Apply `theme` through inline styles. Light clears every override.
pub fn apply_style_theme<H: PageHost>(host: &H, theme: Theme) -> Result<()> {
    let body = host.body().ok_or_else(|| FolioError::missing("body"))?;
    let navbar = host.query(NAVBAR_SELECTOR);
    let sections = host.query_all(SECTION_SELECTOR);
    let cards = host.query_all(STYLED_CARD_SELECTOR);

    match theme {
        Theme::Dark => {
            let palette = DARK_PALETTE;
            host.set_style(&body, "background-color", palette.body_background);
            host.set_style(&body, "color", palette.body_text);
            if let Some(navbar) = &navbar {
                host.set_style(navbar, "background", palette.navbar_background);
            }
            for section in &sections {
                let raised = host.has_class(section, ABOUT_SECTION_CLASS)
                    || host.has_class(section, PROJECTS_SECTION_CLASS);
                let background = if raised {
                    palette.raised_section_background
                } else {
                    palette.section_background
                };
                host.set_style(section, "background-color", background);
            }
            for card in &cards {
                host.set_style(card, "background-color", palette.card_background);
                host.set_style(card, "border-color", palette.card_border);
            }
        }
        Theme::Light => {
            host.set_style(&body, "background-color", "");
            host.set_style(&body, "color", "");
            if let Some(navbar) = &navbar {
                host.set_style(navbar, "background", "");
            }
            for section in &sections {
                host.set_style(section, "background-color", "");
            }
            for card in &cards {
                host.set_style(card, "background-color", "");
                host.set_style(card, "border-color", "");
            }
        }
    }

    log::debug!(
        "Applied inline {} styles to {} sections and {} cards",
        theme,
        sections.len(),
        cards.len()
    );
    Ok(())
}

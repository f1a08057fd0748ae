//! Centralized constants for folio_core
//!
//! The page markup is an external collaborator: every id, class and selector
//! the behaviours depend on is named here.

// =============================================================================
// Element ids
// =============================================================================

/// Id of the control that switches to the light theme
pub const LIGHT_BUTTON_ID: &str = "lightMode";

/// Id of the control that switches to the dark theme
pub const DARK_BUTTON_ID: &str = "darkMode";

// =============================================================================
// Selectors
// =============================================================================

pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = ".section";
pub const HOBBY_CARD_SELECTOR: &str = ".hobby-card";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const HERO_BACKGROUND_SELECTOR: &str = ".hero-background";
pub const IMAGE_SELECTOR: &str = "img";

/// Every in-page anchor
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Cards recoloured by the inline-style theme variant
pub const STYLED_CARD_SELECTOR: &str = ".hobby-card, .project-card, .about-card";

// =============================================================================
// Presentation classes
// =============================================================================

/// Class on the body while the dark theme is active
pub const DARK_THEME_CLASS: &str = "dark-theme";

/// Marks the selected theme button and the current navigation link
pub const ACTIVE_CLASS: &str = "active";

/// Added to sections once they have been seen
pub const IN_VIEW_CLASS: &str = "in-view";

/// Added to cards when their staggered reveal fires
pub const ANIMATE_CLASS: &str = "animate";

/// Added to the body while the user navigates with the keyboard
pub const KEYBOARD_NAVIGATION_CLASS: &str = "keyboard-navigation";

/// Sections with a lighter background in the inline-style variant
pub const ABOUT_SECTION_CLASS: &str = "about-section";
pub const PROJECTS_SECTION_CLASS: &str = "projects-section";

// =============================================================================
// Persistence
// =============================================================================

/// localStorage key holding "light" or "dark"
pub const THEME_STORAGE_KEY: &str = "theme";

// =============================================================================
// Geometry & timing
// =============================================================================

/// Height of the fixed navigation bar, subtracted from scroll targets
pub const HEADER_OFFSET: f64 = 80.0;

/// Distance below the scroll position checked by the scroll-spy
pub const SPY_LOOKAHEAD: f64 = 100.0;

/// Background drift relative to the scroll distance
pub const PARALLAX_RATE: f64 = -0.5;

/// Stagger step between hobby card reveals (ms)
pub const HOBBY_STAGGER_MS: u32 = 150;

/// Stagger step between project card reveals (ms)
pub const PROJECT_STAGGER_MS: u32 = 200;

/// Delay before the body is made fully opaque (ms)
pub const BODY_REVEAL_DELAY_MS: u32 = 100;

/// Transition armed on images as they scroll into view
pub const IMAGE_FADE_TRANSITION: &str = "opacity 0.5s ease";

/// Key that switches the page into keyboard-navigation mode
pub const TAB_KEY: &str = "Tab";

//! Light/dark theme selection.
//!
//! The canonical mechanism is class based: the body carries `dark-theme`
//! while the dark theme is active, and the stylesheet does the rest.

use std::fmt;
use std::str::FromStr;

use crate::constants::{ACTIVE_CLASS, DARK_BUTTON_ID, DARK_THEME_CLASS, LIGHT_BUTTON_ID};
use crate::error::{FolioError, Result};
use crate::host::PageHost;
use crate::storage::{self, PreferenceStore};

/// Theme choice - dark or light mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The value stored in localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(FolioError::InvalidTheme(other.to_string())),
        }
    }
}

/// Owns the current theme and the two toggle buttons.
#[derive(Debug)]
pub struct ThemeManager<E> {
    current: Theme,
    root: E,
    light_button: E,
    dark_button: E,
    storage_key: String,
}

impl<E: Clone + PartialEq> ThemeManager<E> {
    /// Resolve the stored theme and render it.
    ///
    /// Fails if the body or either toggle button is missing from the page.
    pub fn new<H, S>(host: &H, store: &S, storage_key: &str) -> Result<Self>
    where
        H: PageHost<Element = E>,
        S: PreferenceStore + ?Sized,
    {
        let root = host.body().ok_or_else(|| FolioError::missing("body"))?;
        let light_button = host
            .element_by_id(LIGHT_BUTTON_ID)
            .ok_or_else(|| FolioError::missing(format!("#{}", LIGHT_BUTTON_ID)))?;
        let dark_button = host
            .element_by_id(DARK_BUTTON_ID)
            .ok_or_else(|| FolioError::missing(format!("#{}", DARK_BUTTON_ID)))?;

        let manager = Self {
            current: storage::load_theme(store, storage_key),
            root,
            light_button,
            dark_button,
            storage_key: storage_key.to_string(),
        };
        manager.apply(host);
        manager.update_buttons(host);
        log::debug!("Initial theme: {}", manager.current);
        Ok(manager)
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn light_button(&self) -> &E {
        &self.light_button
    }

    pub fn dark_button(&self) -> &E {
        &self.dark_button
    }

    /// Which theme a click on `element` requests, if it is a toggle button.
    pub fn theme_for_button(&self, element: &E) -> Option<Theme> {
        if *element == self.light_button {
            Some(Theme::Light)
        } else if *element == self.dark_button {
            Some(Theme::Dark)
        } else {
            None
        }
    }

    /// Switch to `theme`, render it and persist the choice.
    pub fn switch_theme<H, S>(&mut self, host: &H, store: &S, theme: Theme)
    where
        H: PageHost<Element = E>,
        S: PreferenceStore + ?Sized,
    {
        self.current = theme;
        self.apply(host);
        self.update_buttons(host);
        storage::save_theme(store, &self.storage_key, theme);
        log::info!("Switched to {} theme", theme);
    }

    fn apply<H: PageHost<Element = E>>(&self, host: &H) {
        host.set_class(&self.root, DARK_THEME_CLASS, self.current.is_dark());
    }

    fn update_buttons<H: PageHost<Element = E>>(&self, host: &H) {
        host.set_class(&self.light_button, ACTIVE_CLASS, self.current == Theme::Light);
        host.set_class(&self.dark_button, ACTIVE_CLASS, self.current == Theme::Dark);
    }
}

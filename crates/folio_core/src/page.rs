//! Composition root owning every controller on the page.
//!
//! The browser layer builds one [`Page`] when the document is ready and
//! forwards each DOM event to the matching `on_*` method.

use crate::animation::{AnimationManager, ScheduledReveal};
use crate::constants::{
    ANCHOR_SELECTOR, HERO_BACKGROUND_SELECTOR, IMAGE_SELECTOR, KEYBOARD_NAVIGATION_CLASS, TAB_KEY,
};
use crate::host::{self, PageHost};
use crate::intersection::IntersectionEntry;
use crate::lazy_image::LazyImages;
use crate::navigation::NavigationManager;
use crate::parallax::Parallax;
use crate::settings::PageSettings;
use crate::storage::PreferenceStore;
use crate::theme::{Theme, ThemeManager};

/// Snapshot of the state shared across controllers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    pub theme: Theme,
    pub active_section: Option<String>,
    pub keyboard_navigation: bool,
}

pub struct Page<H: PageHost, S> {
    host: H,
    store: S,
    settings: PageSettings,
    theme: Option<ThemeManager<H::Element>>,
    navigation: NavigationManager<H::Element>,
    animation: AnimationManager<H::Element>,
    images: LazyImages<H::Element>,
    parallax: Parallax<H::Element>,
    keyboard_navigation: bool,
}

impl<H: PageHost, S: PreferenceStore> Page<H, S> {
    /// Build every controller against the current document.
    ///
    /// A page without theme buttons still gets navigation and animations.
    pub fn new(host: H, store: S, settings: PageSettings) -> Self {
        let theme = match ThemeManager::new(&host, &store, &settings.theme.storage_key) {
            Ok(manager) => Some(manager),
            Err(e) => {
                log::error!("Theme switching disabled: {}", e);
                None
            }
        };
        let navigation = NavigationManager::new(&host, settings.navigation.clone());
        let animation = AnimationManager::new(&host, settings.animation.clone());
        let images = LazyImages::new(
            host.query_all(IMAGE_SELECTOR),
            settings.effects.image_fade_transition.clone(),
        );
        let parallax = Parallax::new(
            host.query(HERO_BACKGROUND_SELECTOR),
            settings.effects.parallax_rate,
        );

        Self {
            host,
            store,
            settings,
            theme,
            navigation,
            animation,
            images,
            parallax,
            keyboard_navigation: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    pub fn theme(&self) -> Option<&ThemeManager<H::Element>> {
        self.theme.as_ref()
    }

    pub fn navigation(&self) -> &NavigationManager<H::Element> {
        &self.navigation
    }

    pub fn animation(&self) -> &AnimationManager<H::Element> {
        &self.animation
    }

    pub fn images(&self) -> &LazyImages<H::Element> {
        &self.images
    }

    /// Every in-page anchor, for the smooth-scroll enhancement.
    pub fn anchors(&self) -> Vec<H::Element> {
        self.host.query_all(ANCHOR_SELECTOR)
    }

    pub fn state(&self) -> PageState {
        PageState {
            theme: self.theme.as_ref().map(ThemeManager::current).unwrap_or_default(),
            active_section: self.navigation.active_section().map(str::to_string),
            keyboard_navigation: self.keyboard_navigation,
        }
    }

    // =========================================================================
    // Theme
    // =========================================================================

    pub fn switch_theme(&mut self, theme: Theme) {
        if let Some(manager) = &mut self.theme {
            manager.switch_theme(&self.host, &self.store, theme);
        }
    }

    /// Handle a click on one of the theme buttons.
    pub fn on_theme_button(&mut self, button: &H::Element) -> bool {
        let requested = self.theme.as_ref().and_then(|m| m.theme_for_button(button));
        match requested {
            Some(theme) => {
                self.switch_theme(theme);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn on_nav_link_click(&self, link: &H::Element) -> bool {
        self.navigation.on_link_click(&self.host, link)
    }

    /// Smooth-scroll for any `#id` anchor.
    pub fn on_anchor_click(&self, href: &str) -> bool {
        host::fragment_id(href).is_some_and(|id| {
            host::scroll_to_section(&self.host, id, self.settings.navigation.header_offset)
        })
    }

    pub fn on_scroll(&mut self) {
        self.navigation.on_scroll(&self.host);
        self.parallax.on_scroll(&self.host);
    }

    /// Section geometry may have moved, so re-run the scroll-spy.
    pub fn on_resize(&mut self) {
        self.navigation.on_scroll(&self.host);
    }

    pub fn on_navigation_sections(&self, entries: &[IntersectionEntry<H::Element>]) {
        self.navigation.on_section_intersections(&self.host, entries);
    }

    // =========================================================================
    // Animation
    // =========================================================================

    pub fn on_animation_sections(&self, entries: &[IntersectionEntry<H::Element>]) {
        self.animation.on_section_intersections(&self.host, entries);
    }

    pub fn on_hobby_cards(
        &mut self,
        entries: &[IntersectionEntry<H::Element>],
    ) -> Vec<ScheduledReveal<H::Element>> {
        self.animation.on_hobby_intersections(entries)
    }

    pub fn on_project_cards(
        &mut self,
        entries: &[IntersectionEntry<H::Element>],
    ) -> Vec<ScheduledReveal<H::Element>> {
        self.animation.on_project_intersections(entries)
    }

    pub fn reveal_card(&self, card: &H::Element) {
        self.animation.reveal(&self.host, card);
    }

    // =========================================================================
    // Effects
    // =========================================================================

    /// Arm newly visible images. The caller unobserves the returned images.
    pub fn on_images(&mut self, entries: &[IntersectionEntry<H::Element>]) -> Vec<H::Element> {
        self.images.on_intersections(&self.host, entries)
    }

    pub fn on_image_loaded(&self, image: &H::Element) {
        self.images.on_loaded(&self.host, image);
    }

    pub fn reveal_body(&self) {
        if let Some(body) = self.host.body() {
            self.host.set_style(&body, "opacity", "1");
        }
    }

    pub fn on_key_down(&mut self, key: &str) {
        if key == TAB_KEY {
            self.set_keyboard_navigation(true);
        }
    }

    pub fn on_mouse_down(&mut self) {
        self.set_keyboard_navigation(false);
    }

    fn set_keyboard_navigation(&mut self, enabled: bool) {
        self.keyboard_navigation = enabled;
        if let Some(body) = self.host.body() {
            self.host.set_class(&body, KEYBOARD_NAVIGATION_CLASS, enabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        ACTIVE_CLASS, DARK_BUTTON_ID, DARK_THEME_CLASS, HOBBY_CARD_SELECTOR, LIGHT_BUTTON_ID,
        THEME_STORAGE_KEY,
    };
    use crate::storage::MemoryStore;
    use crate::test_host::FakeHost;

    fn portfolio() -> FakeHost {
        let host = FakeHost::with_theme_buttons();
        host.add_nav_link("#home");
        host.add_nav_link("#about");
        host.add_section("home", 0.0, 800.0);
        host.add_section("about", 800.0, 800.0);
        host.add(&[HERO_BACKGROUND_SELECTOR]);
        host.add(&[IMAGE_SELECTOR]);
        for _ in 0..5 {
            host.add(&[HOBBY_CARD_SELECTOR]);
        }
        host
    }

    fn page(host: FakeHost) -> Page<FakeHost, MemoryStore> {
        Page::new(host, MemoryStore::new(), PageSettings::default())
    }

    #[test]
    fn test_initial_state() {
        let page = page(portfolio());
        assert_eq!(page.state(), PageState::default());
        let light = page.host().element_by_id(LIGHT_BUTTON_ID).unwrap();
        assert!(page.host().has_class(&light, ACTIVE_CLASS));
    }

    #[test]
    fn test_dark_button_click() {
        let mut page = page(portfolio());
        let dark = page.host().element_by_id(DARK_BUTTON_ID).unwrap();
        assert!(page.on_theme_button(&dark));

        let body = page.host().body().unwrap();
        assert!(page.host().has_class(&body, DARK_THEME_CLASS));
        assert_eq!(page.state().theme, Theme::Dark);
        assert_eq!(
            page.store.get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_scroll_updates_state_and_parallax() {
        let mut page = page(portfolio());
        page.host().set_scroll_y(750.0);
        page.on_scroll();

        assert_eq!(page.state().active_section.as_deref(), Some("about"));
        let background = page.host().query(HERO_BACKGROUND_SELECTOR).unwrap();
        assert_eq!(
            page.host().style(background, "transform").as_deref(),
            Some("translateY(-375px)")
        );
    }

    #[test]
    fn test_keyboard_navigation_marker() {
        let mut page = page(portfolio());
        let body = page.host().body().unwrap();

        page.on_key_down("Enter");
        assert!(!page.state().keyboard_navigation);

        page.on_key_down("Tab");
        assert!(page.host().has_class(&body, KEYBOARD_NAVIGATION_CLASS));
        assert!(page.state().keyboard_navigation);

        page.on_mouse_down();
        assert!(!page.host().has_class(&body, KEYBOARD_NAVIGATION_CLASS));
    }

    #[test]
    fn test_anchor_click_scrolls_to_target() {
        let page = page(portfolio());
        assert!(page.on_anchor_click("#about"));
        assert!(!page.on_anchor_click("#"));
        assert!(!page.on_anchor_click("#missing"));
        assert_eq!(page.host().scrolled_to(), vec![720.0]);
    }

    #[test]
    fn test_hobby_batch_and_reveal() {
        let mut page = page(portfolio());
        let cards = page.animation().hobby_cards().to_vec();
        let batch: Vec<_> = cards.iter().map(|c| IntersectionEntry::entering(*c)).collect();

        let scheduled = page.on_hobby_cards(&batch);
        let delays: Vec<u32> = scheduled.iter().map(|r| r.delay_ms).collect();
        assert_eq!(delays, vec![0, 150, 300, 450, 600]);

        for reveal in &scheduled {
            page.reveal_card(&reveal.target);
        }
        assert!(cards
            .iter()
            .all(|c| page.host().has_class(c, crate::constants::ANIMATE_CLASS)));
    }

    #[test]
    fn test_page_without_theme_buttons_still_works() {
        let host = FakeHost::new();
        host.add_body();
        host.add_section("home", 0.0, 500.0);
        let mut page = page(host);

        assert!(page.theme().is_none());
        page.switch_theme(Theme::Dark);
        assert_eq!(page.state().theme, Theme::Light);

        page.on_resize();
        assert_eq!(page.state().active_section.as_deref(), Some("home"));
    }

    #[test]
    fn test_reveal_body() {
        let page = page(portfolio());
        page.reveal_body();
        let body = page.host().body().unwrap();
        assert_eq!(page.host().style(body, "opacity").as_deref(), Some("1"));
    }
}

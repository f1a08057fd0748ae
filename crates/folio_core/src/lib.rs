//! folio_core - behaviour of the portfolio page, independent of the browser
//!
//! Controllers are generic over [`PageHost`] (the DOM) and
//! [`PreferenceStore`] (localStorage), and are owned by a single [`Page`].

pub mod constants;
mod animation;
mod error;
mod host;
mod intersection;
mod lazy_image;
mod navigation;
mod page;
mod parallax;
mod scroll_spy;
mod settings;
mod storage;
mod style_theme;
mod theme;

#[cfg(test)]
mod test_host;

pub use animation::{AnimationManager, RevealPolicy, ScheduledReveal, StaggeredReveal};
pub use error::{FolioError, Result};
pub use host::{fragment_id, scroll_to_section, PageHost};
pub use intersection::{IntersectionEntry, MarginValue, ObserverOptions, RootMargin};
pub use lazy_image::LazyImages;
pub use navigation::{NavLink, NavigationManager};
pub use page::{Page, PageState};
pub use parallax::Parallax;
pub use scroll_spy::{section_at, ScrollSpy, SectionSpan};
pub use settings::{
    AnimationSettings, EffectSettings, NavigationSettings, PageSettings, ThemeSettings,
};
pub use storage::{load_theme, save_theme, MemoryStore, PreferenceStore};
pub use style_theme::{apply_style_theme, style_theme_for, StylePalette, DARK_PALETTE};
pub use theme::{Theme, ThemeManager};

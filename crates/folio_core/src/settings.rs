//! Tunable behaviour of the page controllers.
//!
//! Every field has a default matching the stock portfolio layout, so an
//! empty JSON object deserializes to [`PageSettings::default`].

use serde::{Deserialize, Serialize};

use crate::animation::RevealPolicy;
use crate::constants;
use crate::intersection::{MarginValue, ObserverOptions, RootMargin};

/// Settings for every controller on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageSettings {
    pub theme: ThemeSettings,
    pub navigation: NavigationSettings,
    pub animation: AnimationSettings,
    pub effects: EffectSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// localStorage key for the theme preference
    pub storage_key: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: constants::THEME_STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Fixed header height subtracted from scroll targets
    pub header_offset: f64,
    /// Distance below the scroll position checked by the scroll-spy
    pub spy_lookahead: f64,
    /// Watcher marking sections in view for entrance styling
    pub section_observer: ObserverOptions,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            header_offset: constants::HEADER_OFFSET,
            spy_lookahead: constants::SPY_LOOKAHEAD,
            section_observer: ObserverOptions::new(
                0.3,
                RootMargin::new(
                    MarginValue::Px(-80.0),
                    MarginValue::Px(0.0),
                    MarginValue::Percent(-50.0),
                    MarginValue::Px(0.0),
                ),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub section_observer: ObserverOptions,
    pub card_observer: ObserverOptions,
    pub hobby_stagger_ms: u32,
    pub project_stagger_ms: u32,
    pub card_reveal: RevealPolicy,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            section_observer: ObserverOptions::new(
                0.1,
                RootMargin::new(
                    MarginValue::Px(0.0),
                    MarginValue::Px(0.0),
                    MarginValue::Px(-100.0),
                    MarginValue::Px(0.0),
                ),
            ),
            card_observer: ObserverOptions::with_threshold(0.3),
            hobby_stagger_ms: constants::HOBBY_STAGGER_MS,
            project_stagger_ms: constants::PROJECT_STAGGER_MS,
            card_reveal: RevealPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    /// Background drift per scrolled pixel
    pub parallax_rate: f64,
    pub body_reveal_delay_ms: u32,
    pub image_fade_transition: String,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            parallax_rate: constants::PARALLAX_RATE,
            body_reveal_delay_ms: constants::BODY_REVEAL_DELAY_MS,
            image_fade_transition: constants::IMAGE_FADE_TRANSITION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let settings: PageSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, PageSettings::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let json = r#"{
            "navigation": { "header_offset": 64 },
            "animation": { "card_reveal": "retrigger" }
        }"#;
        let settings: PageSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.navigation.header_offset, 64.0);
        assert_eq!(settings.navigation.spy_lookahead, constants::SPY_LOOKAHEAD);
        assert_eq!(settings.animation.card_reveal, RevealPolicy::Retrigger);
        assert_eq!(settings.animation.hobby_stagger_ms, 150);
    }

    #[test]
    fn test_default_observer_margins() {
        let settings = PageSettings::default();
        assert_eq!(
            settings.navigation.section_observer.root_margin.to_string(),
            "-80px 0px -50% 0px"
        );
        assert_eq!(
            settings.animation.section_observer.root_margin.to_string(),
            "0px 0px -100px 0px"
        );
        assert_eq!(settings.animation.card_observer.root_margin.to_string(), "0px 0px 0px 0px");
    }
}

//! Viewport intersection watcher configuration and entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One side of an observer root margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginValue {
    Px(f64),
    Percent(f64),
}

impl Default for MarginValue {
    fn default() -> Self {
        MarginValue::Px(0.0)
    }
}

impl fmt::Display for MarginValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginValue::Px(v) => write!(f, "{}px", v),
            MarginValue::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Grows (positive) or shrinks (negative) the viewport before intersecting.
///
/// Displays in CSS shorthand order: `top right bottom left`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RootMargin {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

impl RootMargin {
    pub fn new(
        top: MarginValue,
        right: MarginValue,
        bottom: MarginValue,
        left: MarginValue,
    ) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Options for one intersection watcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible, 0.0..=1.0
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::with_threshold(0.0)
    }
}

impl ObserverOptions {
    pub fn new(threshold: f64, root_margin: RootMargin) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self::new(threshold, RootMargin::default())
    }
}

/// A single element's intersection change, as delivered in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
}

impl<E> IntersectionEntry<E> {
    pub fn new(target: E, is_intersecting: bool) -> Self {
        Self {
            target,
            is_intersecting,
        }
    }

    pub fn entering(target: E) -> Self {
        Self::new(target, true)
    }

    pub fn leaving(target: E) -> Self {
        Self::new(target, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_display() {
        let margin = RootMargin::new(
            MarginValue::Px(-80.0),
            MarginValue::Px(0.0),
            MarginValue::Percent(-50.0),
            MarginValue::Px(0.0),
        );
        assert_eq!(margin.to_string(), "-80px 0px -50% 0px");
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(ObserverOptions::with_threshold(1.5).threshold, 1.0);
        assert_eq!(ObserverOptions::with_threshold(-0.2).threshold, 0.0);
    }

    #[test]
    fn test_margin_from_json() {
        let json = r#"{ "top": { "px": -80 }, "bottom": { "percent": -50 } }"#;
        let margin: RootMargin = serde_json::from_str(json).unwrap();
        assert_eq!(margin.to_string(), "-80px 0px -50% 0px");
    }
}

//! Derive the current section from the scroll position.

/// Vertical extent of a page section, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The section containing `y`. When spans overlap, the last one wins.
pub fn section_at(spans: &[SectionSpan], y: f64) -> Option<&SectionSpan> {
    spans.iter().rev().find(|span| span.contains(y))
}

/// Remembers the active section between scroll events.
///
/// A position that matches no section leaves the previous answer in place.
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    active: Option<String>,
    lookahead: f64,
}

impl ScrollSpy {
    pub fn new(lookahead: f64) -> Self {
        Self {
            active: None,
            lookahead,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Look up the section at `scroll_y + lookahead`.
    ///
    /// Returns the new id if the active section changed.
    pub fn update(&mut self, spans: &[SectionSpan], scroll_y: f64) -> Option<&str> {
        let point = scroll_y + self.lookahead;
        let hit = section_at(spans, point)?;
        if self.active.as_deref() == Some(hit.id.as_str()) {
            return None;
        }
        self.active = Some(hit.id.clone());
        self.active.as_deref()
    }
}

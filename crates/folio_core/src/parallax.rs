//! Hero background drift.

use crate::host::PageHost;

/// Moves a background element at a fraction of the scroll speed.
#[derive(Debug)]
pub struct Parallax<E> {
    background: Option<E>,
    rate: f64,
}

impl<E> Parallax<E> {
    pub fn new(background: Option<E>, rate: f64) -> Self {
        Self { background, rate }
    }

    pub fn offset(&self, scroll_y: f64) -> f64 {
        let offset = scroll_y * self.rate;
        // Avoid rendering "-0px" at the top of the page
        if offset == 0.0 { 0.0 } else { offset }
    }

    pub fn transform(&self, scroll_y: f64) -> String {
        format!("translateY({}px)", self.offset(scroll_y))
    }

    /// No-op when the page has no background element.
    pub fn on_scroll<H: PageHost<Element = E>>(&self, host: &H) {
        if let Some(background) = &self.background {
            host.set_style(background, "transform", &self.transform(host.scroll_y()));
        }
    }
}

//! One-shot fade-in for images entering the viewport.

use crate::host::PageHost;
use crate::intersection::IntersectionEntry;

/// Images that have not yet been armed.
///
/// Each image is armed at most once; after that the caller should stop
/// observing it.
#[derive(Debug)]
pub struct LazyImages<E> {
    pending: Vec<E>,
    transition: String,
}

impl<E: Clone + PartialEq> LazyImages<E> {
    pub fn new(images: Vec<E>, transition: impl Into<String>) -> Self {
        Self {
            pending: images,
            transition: transition.into(),
        }
    }

    pub fn pending(&self) -> &[E] {
        &self.pending
    }

    /// Arm the fade transition on newly visible images and return them.
    pub fn on_intersections<H: PageHost<Element = E>>(
        &mut self,
        host: &H,
        entries: &[IntersectionEntry<E>],
    ) -> Vec<E> {
        let mut armed = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Some(position) = self.pending.iter().position(|e| *e == entry.target) else {
                continue;
            };
            let image = self.pending.remove(position);
            host.set_style(&image, "transition", &self.transition);
            armed.push(image);
        }
        armed
    }

    /// Called from the image's load event once it has been armed.
    pub fn on_loaded<H: PageHost<Element = E>>(&self, host: &H, image: &E) {
        host.set_style(image, "opacity", "1");
    }
}

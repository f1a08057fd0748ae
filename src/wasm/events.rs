//! Listener, timer and intersection observer plumbing.
//!
//! Nothing registered here is ever torn down: the page lives as long as the
//! document, so closures are leaked with `Closure::forget`.

use folio_core::{IntersectionEntry, ObserverOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

/// Register `handler` for `event` on `target` for the rest of the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("Failed to listen for '{}': {:?}", event, e);
    }
    closure.forget();
}

/// Run `callback` once after `delay_ms`.
pub fn set_timeout<F>(window: &Window, delay_ms: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(callback);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        log::warn!("Failed to schedule timer: {:?}", e);
    }
}

/// Observe `elements` and hand each intersection batch to `handler`.
pub fn observe<F>(elements: &[Element], options: ObserverOptions, mut handler: F)
where
    F: FnMut(Vec<IntersectionEntry<Element>>, &IntersectionObserver) + 'static,
{
    if elements.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .map(|value| value.unchecked_into::<IntersectionObserverEntry>())
                .map(|entry| IntersectionEntry::new(entry.target(), entry.is_intersecting()))
                .collect();
            handler(entries, &observer);
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin.to_string());

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return;
            }
        };
    callback.forget();

    for element in elements {
        observer.observe(element);
    }
}

/// The element a listener was attached to.
pub fn current_target(event: &Event) -> Option<Element> {
    event.current_target()?.dyn_into::<Element>().ok()
}

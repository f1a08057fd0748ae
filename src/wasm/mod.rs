//! Browser entry point: builds the [`Page`] once the DOM is ready and wires
//! every DOM event to it.

mod events;
mod exports;
mod host;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Page, RevealPolicy, ScheduledReveal};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DocumentReadyState, Element, IntersectionObserver, KeyboardEvent};

use crate::config::AppConfig;

pub use exports::{scroll_to_section, switch_theme_with_styles};
pub use host::{BrowserStore, DomHost};

type SharedPage = Rc<RefCell<Page<DomHost, BrowserStore>>>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load_from_document();
    if let Err(e) = console_log::init_with_level(config.log_level.to_level()) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring page configuration: {}", e);
    }

    let Some(host) = DomHost::new() else {
        log::error!("No window or document, page behaviour disabled");
        return;
    };
    exports::install_globals(host.window());

    if is_loading(&host) {
        let document = host.document().clone();
        let mut pending = Some((host, config));
        events::listen(&document, "DOMContentLoaded", move |_| {
            if let Some((host, config)) = pending.take() {
                init_page(host, config);
            }
        });
    } else {
        init_page(host, config);
    }
}

/// The module may finish loading after DOMContentLoaded has already fired.
fn is_loading(host: &DomHost) -> bool {
    host.document().ready_state() == DocumentReadyState::Loading
}

fn init_page(host: DomHost, config: AppConfig) {
    let started = web_time::Instant::now();
    let window = host.window().clone();
    let store = BrowserStore::open(&window);
    let page: SharedPage = Rc::new(RefCell::new(Page::new(host, store, config.page)));

    bind_theme_buttons(&page);
    bind_navigation(&page);
    bind_window(&page);
    bind_animations(&page);
    bind_anchors(&page);
    bind_images(&page);
    bind_keyboard(&page);

    let delay = page.borrow().settings().effects.body_reveal_delay_ms;
    let reveal = Rc::clone(&page);
    events::set_timeout(&window, delay, move || reveal.borrow().reveal_body());

    log::info!(
        "Portfolio page ready in {:.1} ms",
        started.elapsed().as_secs_f64() * 1000.0
    );
}

fn bind_theme_buttons(page: &SharedPage) {
    let buttons = match page.borrow().theme() {
        Some(theme) => vec![theme.light_button().clone(), theme.dark_button().clone()],
        None => return,
    };
    for button in buttons {
        let page = Rc::clone(page);
        events::listen(&button, "click", move |event| {
            if let Some(target) = events::current_target(&event) {
                page.borrow_mut().on_theme_button(&target);
            }
        });
    }
}

fn bind_navigation(page: &SharedPage) {
    let (links, sections, options) = {
        let page = page.borrow();
        let navigation = page.navigation();
        let links: Vec<Element> = navigation.links().iter().map(|l| l.element.clone()).collect();
        (links, navigation.sections().to_vec(), navigation.section_observer())
    };

    for link in links {
        let page = Rc::clone(page);
        events::listen(&link, "click", move |event| {
            event.prevent_default();
            if let Some(target) = events::current_target(&event) {
                page.borrow().on_nav_link_click(&target);
            }
        });
    }

    let page = Rc::clone(page);
    events::observe(&sections, options, move |entries, _| {
        page.borrow().on_navigation_sections(&entries);
    });
}

fn bind_window(page: &SharedPage) {
    let window = page.borrow().host().window().clone();

    let on_scroll = Rc::clone(page);
    events::listen(&window, "scroll", move |_| on_scroll.borrow_mut().on_scroll());

    let on_resize = Rc::clone(page);
    events::listen(&window, "resize", move |_| on_resize.borrow_mut().on_resize());
}

fn bind_animations(page: &SharedPage) {
    let (sections, hobby_cards, project_cards, section_options, card_options) = {
        let page = page.borrow();
        let animation = page.animation();
        (
            animation.sections().to_vec(),
            animation.hobby_cards().to_vec(),
            animation.project_cards().to_vec(),
            animation.section_observer(),
            animation.card_observer(),
        )
    };

    let on_sections = Rc::clone(page);
    events::observe(&sections, section_options, move |entries, _| {
        on_sections.borrow().on_animation_sections(&entries);
    });

    let on_hobby = Rc::clone(page);
    events::observe(&hobby_cards, card_options, move |entries, observer| {
        let scheduled = on_hobby.borrow_mut().on_hobby_cards(&entries);
        schedule_reveals(&on_hobby, scheduled, observer);
    });

    let on_project = Rc::clone(page);
    events::observe(&project_cards, card_options, move |entries, observer| {
        let scheduled = on_project.borrow_mut().on_project_cards(&entries);
        schedule_reveals(&on_project, scheduled, observer);
    });
}

fn schedule_reveals(
    page: &SharedPage,
    scheduled: Vec<ScheduledReveal<Element>>,
    observer: &IntersectionObserver,
) {
    let (window, policy) = {
        let page = page.borrow();
        (page.host().window().clone(), page.animation().reveal_policy())
    };
    for reveal in scheduled {
        if policy == RevealPolicy::Once {
            observer.unobserve(&reveal.target);
        }
        let page = Rc::clone(page);
        let card = reveal.target;
        events::set_timeout(&window, reveal.delay_ms, move || page.borrow().reveal_card(&card));
    }
}

fn bind_anchors(page: &SharedPage) {
    let anchors = page.borrow().anchors();
    for anchor in anchors {
        let page = Rc::clone(page);
        events::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let href = events::current_target(&event).and_then(|a| a.get_attribute("href"));
            if let Some(href) = href {
                page.borrow().on_anchor_click(&href);
            }
        });
    }
}

fn bind_images(page: &SharedPage) {
    let images = page.borrow().images().pending().to_vec();
    let page = Rc::clone(page);
    events::observe(&images, Default::default(), move |entries, observer| {
        let armed = page.borrow_mut().on_images(&entries);
        for image in armed {
            observer.unobserve(&image);
            let page = Rc::clone(&page);
            let loaded = image.clone();
            events::listen(&image, "load", move |_| page.borrow().on_image_loaded(&loaded));
        }
    });
}

fn bind_keyboard(page: &SharedPage) {
    let document = page.borrow().host().document().clone();

    let on_key = Rc::clone(page);
    events::listen(&document, "keydown", move |event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            on_key.borrow_mut().on_key_down(&key_event.key());
        }
    });

    let on_mouse = Rc::clone(page);
    events::listen(&document, "mousedown", move |_| on_mouse.borrow_mut().on_mouse_down());
}

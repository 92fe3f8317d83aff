// flourish.rs - Ripples, shimmer pass, load stagger, lazy images

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, MouseEvent, Window,
};

use super::collect;
use crate::page::{ripple, shimmer_off_at, shimmer_on_at, stagger_delay_at};

const RIPPLE_SELECTOR: &str = ".btn-primary, .btn-secondary, .btn-small, #send-btn";
const SHIMMER_SELECTOR: &str = ".about-card, .tech-card, .learning-card";
const PRECONNECT_ORIGINS: [&str; 2] = [
    "https://fonts.googleapis.com",
    "https://cdnjs.cloudflare.com",
];

pub fn init(window: &Window, document: &Document) {
    attach_ripples(document);
    schedule_shimmer(window, document);
    attach_load_stagger(window, document);
    attach_lazy_images(document);
    preconnect(document);
}

/// Expanding circle on button clicks. At most one ripple per button.
fn attach_ripples(document: &Document) {
    for button in collect::<HtmlElement>(document, RIPPLE_SELECTOR) {
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let Some(target) = event.current_target() else { return };
            let Ok(button) = target.dyn_into::<HtmlElement>() else { return };
            let Some(doc) = button.owner_document() else { return };

            let circle = ripple(
                button.client_width() as f32,
                button.client_height() as f32,
                event.client_x() as f32,
                event.client_y() as f32,
                button.offset_left() as f32,
                button.offset_top() as f32,
            );

            let Ok(span) = doc.create_element("span") else { return };
            let Ok(span) = span.dyn_into::<HtmlElement>() else { return };
            let style = span.style();
            let _ = style.set_property("width", &format!("{}px", circle.diameter));
            let _ = style.set_property("height", &format!("{}px", circle.diameter));
            let _ = style.set_property("left", &format!("{}px", circle.left));
            let _ = style.set_property("top", &format!("{}px", circle.top));
            let _ = span.class_list().add_1("ripple");

            if let Some(stale) = button.get_elements_by_class_name("ripple").item(0) {
                stale.remove();
            }
            let _ = button.append_child(&span);
        }) as Box<dyn FnMut(MouseEvent)>);

        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// One staggered shimmer pass over the cards shortly after startup.
fn schedule_shimmer(window: &Window, document: &Document) {
    for (i, card) in collect::<Element>(document, SHIMMER_SELECTOR).into_iter().enumerate() {
        let on_card = card.clone();
        schedule(window, shimmer_on_at(i), move || {
            let _ = on_card.class_list().add_1("shimmer");
        });
        schedule(window, shimmer_off_at(i), move || {
            let _ = card.class_list().remove_1("shimmer");
        });
    }
}

/// After the load event: mark the body loaded and fade the hero
/// content in, one child at a time.
fn attach_load_stagger(window: &Window, document: &Document) {
    let win = window.clone();
    let doc = document.clone();

    let closure = Closure::wrap(Box::new(move |_: Event| {
        if let Some(body) = doc.body() {
            let _ = body.class_list().add_1("loaded");
        }

        for (i, child) in collect::<HtmlElement>(&doc, ".hero-content > *")
            .into_iter()
            .enumerate()
        {
            schedule(&win, stagger_delay_at(i), move || {
                let style = child.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", "translateY(0)");
            });
        }
    }) as Box<dyn FnMut(Event)>);

    let _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Deferred image loading: swap `data-src` in once the image scrolls
/// near the viewport, then stop watching it.
fn attach_lazy_images(document: &Document) {
    let images = collect::<HtmlImageElement>(document, "img[data-src]");
    if images.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
                    if let Some(src) = img.get_attribute("data-src") {
                        img.set_src(&src);
                    }
                    let _ = img.class_list().add_1("loaded");
                }
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let Ok(observer) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
        return;
    };
    callback.forget();

    for img in &images {
        observer.observe(img);
    }
}

/// Preconnect hints for the external font and CDN origins.
fn preconnect(document: &Document) {
    let Some(head) = document.head() else { return };
    for origin in PRECONNECT_ORIGINS {
        if let Ok(link) = document.create_element("link") {
            let _ = link.set_attribute("rel", "preconnect");
            let _ = link.set_attribute("href", origin);
            let _ = head.append_child(&link);
        }
    }
}

fn schedule(window: &Window, delay_ms: i32, action: impl FnOnce() + 'static) {
    let closure = Closure::once(action);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}

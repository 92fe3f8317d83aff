// scroll.rs - Reveal observers, nav highlight, parallax, smooth scroll

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use super::{collect, SLOT_ATTR};
use crate::page::{
    active_section, parallax_shift, RevealTracker, SectionSpan, CARD_ROOT_MARGIN, CARD_THRESHOLD,
    SECTION_THRESHOLD,
};

const CARD_SELECTOR: &str = ".about-card, .tech-card, .stat-card, .learning-card";

pub fn init(window: &Window, document: &Document) {
    attach_card_reveal(document);
    attach_section_reveal(document);
    attach_scroll_effects(window, document);
    attach_smooth_scroll(document);
}

/// Cards slide in with the `animate-in` class, once.
fn attach_card_reveal(document: &Document) {
    let cards = collect::<Element>(document, CARD_SELECTOR);
    if cards.is_empty() {
        return;
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(CARD_THRESHOLD)));
    let Some(observer) = reveal_observer(tracker.clone(), Some(CARD_ROOT_MARGIN), |target| {
        let _ = target.class_list().add_1("animate-in");
    }) else {
        return;
    };

    for card in &cards {
        let slot = tracker.borrow_mut().track();
        let _ = card.set_attribute(SLOT_ATTR, &slot.to_string());
        observer.observe(card);
    }
}

/// Sections start hidden and shifted down, then ease in on first view.
fn attach_section_reveal(document: &Document) {
    let sections = collect::<HtmlElement>(document, ".section");
    if sections.is_empty() {
        return;
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(SECTION_THRESHOLD)));
    let Some(observer) = reveal_observer(tracker.clone(), None, |target| {
        if let Some(el) = target.dyn_ref::<HtmlElement>() {
            let style = el.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateY(0)");
        }
    }) else {
        return;
    };

    for section in &sections {
        let slot = tracker.borrow_mut().track();
        let _ = section.set_attribute(SLOT_ATTR, &slot.to_string());

        let style = section.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(30px)");
        let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");

        observer.observe(section);
    }
}

/// One-shot observer around a RevealTracker. Unobserves each target as
/// it latches, so re-intersection never re-triggers.
fn reveal_observer(
    tracker: Rc<RefCell<RevealTracker>>,
    root_margin: Option<&str>,
    on_reveal: impl Fn(&Element) + 'static,
) -> Option<IntersectionObserver> {
    let threshold = tracker.borrow().threshold();

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
                let Some(slot) = target
                    .get_attribute(SLOT_ATTR)
                    .and_then(|s| s.parse::<usize>().ok())
                else {
                    continue;
                };

                let ratio = entry.intersection_ratio() as f32;
                if tracker.borrow_mut().intersect(slot, ratio) {
                    on_reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold as f64));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    callback.forget();
    Some(observer)
}

/// Single scroll listener: nav highlight plus section parallax.
fn attach_scroll_effects(window: &Window, document: &Document) {
    let sections = collect::<HtmlElement>(document, "section[id]");
    let links = collect::<Element>(document, ".nav-link");
    let parallax_targets = collect::<HtmlElement>(document, ".section");
    if sections.is_empty() && parallax_targets.is_empty() {
        return;
    }

    let win = window.clone();
    let closure = Closure::wrap(Box::new(move |_: Event| {
        let scroll_y = win.page_y_offset().unwrap_or(0.0) as f32;

        // Section geometry is read live; layout shifts as images load.
        let spans: Vec<SectionSpan> = sections
            .iter()
            .map(|s| SectionSpan {
                top: s.offset_top() as f32,
                height: s.client_height() as f32,
            })
            .collect();

        let current = active_section(scroll_y, &spans)
            .and_then(|i| sections[i].get_attribute("id"))
            .unwrap_or_default();

        for link in &links {
            let _ = link.class_list().remove_1("active");
            if !current.is_empty()
                && link
                    .get_attribute("href")
                    .as_deref()
                    .and_then(|href| href.strip_prefix('#'))
                    == Some(current.as_str())
            {
                let _ = link.class_list().add_1("active");
            }
        }

        let shift = parallax_shift(scroll_y);
        for target in &parallax_targets {
            let _ = target
                .style()
                .set_property("transform", &format!("translateY({shift}px)"));
        }
    }) as Box<dyn FnMut(Event)>);

    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Same-page anchors scroll smoothly instead of jumping.
fn attach_smooth_scroll(document: &Document) {
    for anchor in collect::<Element>(document, "a[href^='#']") {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        if href.len() < 2 {
            continue;
        }

        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }) as Box<dyn FnMut(Event)>);

        let _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

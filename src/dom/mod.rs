// dom/ - Browser wiring
//
// Connects the pure state in sim/ and page/ to the document. Every
// lookup tolerates a missing element by skipping that effect.

mod flourish;
mod hero;
mod scroll;

use wasm_bindgen::JsCast;
use web_sys::{console, Document};

// Slot index attribute linking observed elements back to their
// RevealTracker entry.
const SLOT_ATTR: &str = "data-reveal-slot";

pub fn boot() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    hero::init(&window, &document);
    scroll::init(&window, &document);
    flourish::init(&window, &document);

    console::log_1(&"starfield-engine: hero scene and page effects ready".into());
}

/// All elements matching a selector, cast to the requested type.
fn collect<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<T>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

//! Fade-in reveal driven by an `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::{PageContext, query_all, set_class};
use crate::state::reveal::{RevealAction, RevealKey, RevealTracker, reveal_candidates};

const FADE_IN_SELECTOR: &str = ".fade-in";
const SECTION_SELECTOR: &str = ".section";
const VISIBLE_CLASS: &str = "visible";
const KEY_ATTRIBUTE: &str = "data-reveal-key";

pub fn init(ctx: &PageContext) {
    let tracker = Rc::new(RefCell::new(RevealTracker::new()));

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ctx.config.reveal_threshold));
    options.set_root_margin(&ctx.config.reveal_root_margin);

    let tracker_for_cb = Rc::clone(&tracker);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = read_key(&target) else {
                    continue;
                };
                let mut tracker = tracker_for_cb.borrow_mut();
                if tracker.on_intersection(key, entry.is_intersecting()) == RevealAction::Reveal {
                    set_class(&target, VISIBLE_CLASS, true);
                    observer.unobserve(&target);
                }
                if tracker.pending_count() == 0 {
                    observer.disconnect();
                    log::debug!("all {} reveal elements shown", tracker.len());
                    return;
                }
            }
        },
    );
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable, fade-in disabled: {e:?}");
            return;
        }
    };
    callback.forget();

    let document = &ctx.handles.document;
    let candidates = reveal_candidates(query_all(document, FADE_IN_SELECTOR), query_all(document, SECTION_SELECTOR));
    for el in candidates {
        let key = tracker.borrow_mut().register();
        if let Err(e) = el.set_attribute(KEY_ATTRIBUTE, &key.0.to_string()) {
            log::warn!("failed to tag reveal element: {e:?}");
            continue;
        }
        observer.observe(&el);
    }
    if tracker.borrow().is_empty() {
        observer.disconnect();
        log::debug!("no reveal elements on this page");
        return;
    }
    log::debug!("tracking {} reveal elements", tracker.borrow().len());
}

fn read_key(el: &Element) -> Option<RevealKey> {
    let raw = el.get_attribute(KEY_ATTRIBUTE)?;
    raw.parse::<usize>().map(RevealKey).ok()
}

//! Page startup: wait for the DOM, build shared state, start controllers.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event};

use crate::config::PortfolioConfig;
use crate::controllers::dom::{PageContext, PageHandles};
use crate::controllers::{form, menu, navigation, particles, reveal, theme};
use crate::state::page::PageState;
use crate::util::storage::LocalStore;
use crate::util::theme as theme_pref;

/// Run `initialize` once the DOM is parsed.
///
/// If the module loads after `DOMContentLoaded` has already fired, it runs
/// immediately.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; portfolio controllers not started");
        return;
    };
    if document.ready_state() != "loading" {
        initialize(document);
        return;
    }

    let doc_for_ready = document.clone();
    let on_ready = Closure::once_into_js(move |_: Event| {
        initialize(doc_for_ready);
    });
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::error!("failed to wait for DOMContentLoaded: {e:?}");
    }
}

/// Build page state and attach every controller. Returns the shared state
/// handle.
pub fn initialize(document: Document) -> RwSignal<PageState> {
    let config = Rc::new(PortfolioConfig::load());
    let restored = theme_pref::restore(&LocalStore, &config.storage_key, config.default_theme);
    let state = RwSignal::new(PageState::new(restored));

    let handles = PageHandles::collect(document);
    handles.log_missing();
    let ctx = PageContext { state, config, handles: Rc::new(handles) };

    theme::init(&ctx);
    navigation::init(&ctx);
    reveal::init(&ctx);
    form::init(&ctx);
    menu::init(&ctx);
    particles::init(&ctx);

    let mut first = false;
    state.update(|s| first = s.mark_loaded());
    if !first {
        log::warn!("page state was already marked loaded; controllers attached twice");
    }
    log::info!("portfolio page ready (theme: {restored})");
    state
}

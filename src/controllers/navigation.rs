//! Navigation: click-to-scroll, scroll-spy, header shadow.
//!
//! ARCHITECTURE
//! ============
//! Section bounds are read from the DOM on every scroll and handed to the
//! pure `scroll_spy` helpers; this module only reads layout and writes
//! classes.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions};

use super::dom::{ACTIVE_CLASS, DomError, HEADER_SELECTOR, PageContext, as_html, listen, query_all, set_class};
use super::menu;
use crate::util::scroll_spy::{
    ActiveLink, SectionBounds, active_flags, clicked_link, current_section, header_is_scrolled, scroll_target,
};

const IN_PAGE_LINK_SELECTOR: &str = ".nav-link[href^=\"#\"]";
const NAV_LINK_SELECTOR: &str = ".nav-link";
const SECTION_SELECTOR: &str = "section[id]";
const SECTION_DATA_ATTRIBUTE: &str = "data-section";
const SCROLLED_CLASS: &str = "scrolled";

pub fn init(ctx: &PageContext) {
    for link in query_all(&ctx.handles.document, IN_PAGE_LINK_SELECTOR) {
        let ctx_for_click = ctx.clone();
        let link_for_click = link.clone();
        listen(&link, "click", move |ev| on_link_click(&ctx_for_click, &link_for_click, &ev));
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let ctx_for_spy = ctx.clone();
    listen(&window, "scroll", move |_| spy(&ctx_for_spy));
    let ctx_for_header = ctx.clone();
    listen(&window, "scroll", move |_| update_header(&ctx_for_header));
}

fn on_link_click(ctx: &PageContext, link: &Element, ev: &Event) {
    ev.prevent_default();
    let Some(href) = link.get_attribute("href") else {
        return;
    };
    let target = match ctx.handles.document.query_selector(&href) {
        Ok(Some(target)) => target,
        Ok(None) => return,
        Err(e) => {
            log::warn!("nav link href {href} is not a valid selector: {e:?}");
            return;
        }
    };
    let top = match target_offset(ctx, target, &href) {
        Ok(top) => top,
        Err(e) => {
            log::error!("cannot scroll to {href}: {e}");
            return;
        }
    };

    let settle_ms = ctx.config.scroll_settle_timeout_ms;
    wasm_bindgen_futures::spawn_local(async move {
        smooth_scroll_to(top, settle_ms).await;
        log::debug!("scroll to {href} settled");
    });

    mark_active_link(&ctx.handles.document, Marker::Link(link));
    menu::close_if_open(ctx);
}

fn target_offset(ctx: &PageContext, target: Element, href: &str) -> Result<f64, DomError> {
    let header = ctx.handles.header.as_ref().ok_or(DomError::Missing(HEADER_SELECTOR))?;
    let target = as_html(target).ok_or_else(|| DomError::NotHtml(href.to_owned()))?;
    Ok(scroll_target(f64::from(target.offset_top()), f64::from(header.offset_height())))
}

/// Smooth-scroll the window to `top`.
///
/// Resolves when the browser reports `scrollend`, or after `timeout_ms` for
/// browsers that never fire it (or when already at `top`).
pub async fn smooth_scroll_to(top: f64, timeout_ms: u32) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let (tx, rx) = oneshot::channel::<()>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let on_end = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        if let Some(tx) = tx.borrow_mut().take() {
            if tx.send(()).is_err() {
                log::debug!("scroll settled after its waiter was dropped");
            }
        }
    });
    if let Err(e) = window.add_event_listener_with_callback("scrollend", on_end.as_ref().unchecked_ref()) {
        log::debug!("scrollend unsupported: {e:?}");
    }

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    let timeout = TimeoutFuture::new(timeout_ms);
    futures::pin_mut!(timeout);
    futures::future::select(rx, timeout).await;

    if let Err(e) = window.remove_event_listener_with_callback("scrollend", on_end.as_ref().unchecked_ref()) {
        log::debug!("failed to detach scrollend listener: {e:?}");
    }
}

fn spy(ctx: &PageContext) {
    let Some(scroll_y) = scroll_y() else {
        return;
    };
    let document = &ctx.handles.document;
    let sections = section_bounds(document);
    let Some(current) = current_section(&sections, scroll_y, ctx.config.scroll_spy_offset) else {
        return;
    };

    let mut changed = false;
    ctx.state.update(|s| changed = s.enter_section(&current.id));
    if changed {
        log::debug!("current section: {}", current.id);
    }
    mark_active_link(document, Marker::Section(&current.id));
}

fn update_header(ctx: &PageContext) {
    let (Some(header), Some(scroll_y)) = (ctx.handles.header.as_ref(), scroll_y()) else {
        return;
    };
    set_class(header, SCROLLED_CLASS, header_is_scrolled(scroll_y, ctx.config.header_scrolled_threshold));
}

fn scroll_y() -> Option<f64> {
    web_sys::window().and_then(|w| w.scroll_y().ok())
}

fn section_bounds(document: &Document) -> Vec<SectionBounds> {
    query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(as_html)
        .map(|s| SectionBounds::new(s.id(), f64::from(s.offset_top()), f64::from(s.offset_height())))
        .collect()
}

enum Marker<'a> {
    Link(&'a Element),
    Section(&'a str),
}

/// Clear `active` from every nav link, then set it on the clicked link or on
/// the links whose `data-section` matches.
fn mark_active_link(document: &Document, marker: Marker<'_>) {
    let links = query_all(document, NAV_LINK_SELECTOR);
    let sections = links
        .iter()
        .map(|l| l.get_attribute(SECTION_DATA_ATTRIBUTE))
        .collect::<Vec<_>>();
    let section_refs = sections.iter().map(Option::as_deref).collect::<Vec<_>>();
    let active = match marker {
        Marker::Link(clicked) => match clicked_link(&links, clicked) {
            Some(active) => active,
            None => {
                log::warn!("clicked nav link is no longer in the menu; active link unchanged");
                return;
            }
        },
        Marker::Section(id) => ActiveLink::Section(id),
    };
    for (link, on) in links.iter().zip(active_flags(&section_refs, active)) {
        set_class(link, ACTIVE_CLASS, on);
    }
}

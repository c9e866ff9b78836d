//! Mobile navigation menu: toggle button and outside-click dismissal.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Node};

use super::dom::{ACTIVE_CLASS, PageContext, listen, set_class};
use crate::state::page::{PageState, should_close_menu};

pub fn init(ctx: &PageContext) {
    if let Some(toggle) = ctx.handles.menu_toggle.as_ref() {
        let ctx_for_click = ctx.clone();
        listen(toggle, "click", move |_| toggle_menu(&ctx_for_click));
    }

    let ctx_for_doc = ctx.clone();
    listen(&ctx.handles.document, "click", move |ev| on_document_click(&ctx_for_doc, &ev));
}

/// Flip the menu and mirror the flag onto the panel and the button.
pub fn toggle_menu(ctx: &PageContext) {
    let mut open = false;
    ctx.state.update(|s| open = s.toggle_menu());
    reflect(ctx, open);
    log::debug!("mobile menu {}", if open { "opened" } else { "closed" });
}

/// Close the menu after an in-page navigation click.
pub fn close_if_open(ctx: &PageContext) {
    let mut was_open = false;
    ctx.state.update(|s| was_open = s.close_menu());
    if was_open {
        reflect(ctx, false);
        log::debug!("mobile menu closed by navigation");
    }
}

fn reflect(ctx: &PageContext, open: bool) {
    for el in [ctx.handles.nav_menu.as_ref(), ctx.handles.menu_toggle.as_ref()].into_iter().flatten() {
        set_class(el, ACTIVE_CLASS, open);
    }
}

fn on_document_click(ctx: &PageContext, ev: &Event) {
    // Containment is tested against both elements; without either there is
    // no outside to click.
    let (Some(menu), Some(toggle)) = (ctx.handles.nav_menu.as_ref(), ctx.handles.menu_toggle.as_ref()) else {
        return;
    };
    let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
    let open = ctx.state.with_untracked(PageState::menu_open);
    if should_close_menu(open, menu.contains(target.as_ref()), toggle.contains(target.as_ref())) {
        toggle_menu(ctx);
    }
}

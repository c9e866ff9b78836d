//! Theme toggle button wiring.

use leptos::prelude::*;

use super::dom::{PageContext, listen};
use crate::state::page::{PageState, Theme};
use crate::util::storage::LocalStore;
use crate::util::theme;

pub fn init(ctx: &PageContext) {
    set_theme(ctx, ctx.state.with_untracked(PageState::theme));

    let Some(toggle) = ctx.handles.theme_toggle.as_ref() else {
        return;
    };
    let ctx_for_click = ctx.clone();
    listen(toggle, "click", move |_| toggle_theme(&ctx_for_click));
}

/// Make `theme` current: state, document attribute, toggle icon.
pub fn set_theme(ctx: &PageContext, theme: Theme) {
    ctx.state.update(|s| s.set_theme(theme));
    render(ctx, theme);
}

fn toggle_theme(ctx: &PageContext) {
    let mut saved = Ok(Theme::default());
    ctx.state.update(|s| saved = theme::toggle(s, &LocalStore, &ctx.config.storage_key));
    let current = ctx.state.with_untracked(PageState::theme);
    if let Err(e) = saved {
        log::error!("theme preference not saved: {e}");
    }
    render(ctx, current);
    log::info!("theme switched to {current}");
}

fn render(ctx: &PageContext, current: Theme) {
    theme::apply(current);
    if let Some(toggle) = ctx.handles.theme_toggle.as_ref() {
        theme::refresh_icon(toggle, current);
    }
}

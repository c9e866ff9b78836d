//! Contact form: local-only submission acknowledgement.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, HtmlFormElement};

use super::dom::{PageContext, listen};
use crate::util::form::Submission;

pub fn init(ctx: &PageContext) {
    let Some(form) = ctx.handles.contact_form.clone() else {
        return;
    };
    let message = ctx.config.success_message.clone();
    let target = form.clone();
    listen(&target, "submit", move |ev| {
        ev.prevent_default();
        on_submit(&form, &message);
    });
}

fn on_submit(form: &HtmlFormElement, success_message: &str) {
    let submission = match read_submission(form) {
        Ok(submission) => submission,
        Err(e) => {
            log::warn!("could not read form fields: {e:?}");
            Submission::default()
        }
    };
    if submission.is_empty() {
        log::debug!("form submitted with no text fields");
    }
    // Local only: log, acknowledge, clear. Nothing is sent.
    log::info!("form submitted ({} fields): {}", submission.len(), submission.to_log_json());
    notify(success_message);
    form.reset();
}

fn notify(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {e:?}");
    }
}

/// Raw `FormData` entries; non-text halves are filtered by `Submission`.
fn read_submission(form: &HtmlFormElement) -> Result<Submission, JsValue> {
    let data = FormData::new_with_form(form)?;
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(Submission::default());
    };
    let mut raw = Vec::new();
    for entry in entries {
        let pair = entry?.dyn_into::<js_sys::Array>()?;
        raw.push((pair.get(0).as_string(), pair.get(1).as_string()));
    }
    Ok(Submission::from_form_entries(raw))
}

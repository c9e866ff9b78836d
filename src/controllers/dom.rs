//! Element handles and small DOM helpers shared by the controllers.

use std::rc::Rc;

use leptos::prelude::RwSignal;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement};

use crate::config::PortfolioConfig;
use crate::state::page::PageState;

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const PARTICLES_ID: &str = "particles";
pub const HEADER_SELECTOR: &str = ".main-header";

pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("required element missing: {0}")]
    Missing(&'static str),
    #[error("{0} is not an HTML element")]
    NotHtml(String),
}

/// Elements the controllers expect, looked up once at boot.
///
/// An absent handle turns the behavior that needs it into a no-op.
#[derive(Debug)]
pub struct PageHandles {
    pub document: Document,
    pub theme_toggle: Option<Element>,
    pub menu_toggle: Option<Element>,
    pub nav_menu: Option<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub particles: Option<Element>,
    pub header: Option<HtmlElement>,
}

impl PageHandles {
    #[must_use]
    pub fn collect(document: Document) -> Self {
        let contact_form = document
            .get_element_by_id(CONTACT_FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        let header = query_one(&document, HEADER_SELECTOR).and_then(as_html);
        Self {
            theme_toggle: document.get_element_by_id(THEME_TOGGLE_ID),
            menu_toggle: document.get_element_by_id(MENU_TOGGLE_ID),
            nav_menu: document.get_element_by_id(NAV_MENU_ID),
            particles: document.get_element_by_id(PARTICLES_ID),
            contact_form,
            header,
            document,
        }
    }

    pub fn log_missing(&self) {
        let present = [
            (THEME_TOGGLE_ID, self.theme_toggle.is_some()),
            (MENU_TOGGLE_ID, self.menu_toggle.is_some()),
            (NAV_MENU_ID, self.nav_menu.is_some()),
            (CONTACT_FORM_ID, self.contact_form.is_some()),
            (PARTICLES_ID, self.particles.is_some()),
            (HEADER_SELECTOR, self.header.is_some()),
        ];
        for (name, found) in present {
            if !found {
                log::debug!("page element {name} not found; its behavior is disabled");
            }
        }
    }
}

/// Everything a controller needs: shared state, configuration, handles.
#[derive(Clone)]
pub struct PageContext {
    pub state: RwSignal<PageState>,
    pub config: Rc<PortfolioConfig>,
    pub handles: Rc<PageHandles>,
}

#[must_use]
pub fn as_html(el: Element) -> Option<HtmlElement> {
    el.dyn_into::<HtmlElement>().ok()
}

#[must_use]
pub fn query_one(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("bad selector {selector}: {e:?}");
            None
        }
    }
}

/// All elements matching `selector`, in document order.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("bad selector {selector}: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::warn!("failed to toggle class {class}: {e:?}");
    }
}

/// Attach a listener that lives as long as the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    match target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        Ok(()) => cb.forget(),
        Err(e) => log::warn!("failed to attach {event} listener: {e:?}"),
    }
}

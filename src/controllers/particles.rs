//! Populate the `#particles` container once at load.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::dom::PageContext;
use crate::util::particles::{ParticleRanges, ParticleSpec, generate};

const PARTICLE_CLASS: &str = "particle";

pub fn init(ctx: &PageContext) {
    let Some(container) = ctx.handles.particles.as_ref() else {
        return;
    };
    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits());
    let specs = generate(&mut rng, ctx.config.particle_count, &ParticleRanges::default());
    for spec in &specs {
        if let Err(e) = spawn(&ctx.handles.document, container, spec) {
            log::warn!("failed to create particle: {e:?}");
            return;
        }
    }
    log::debug!("spawned {} particles", specs.len());
}

fn spawn(document: &Document, container: &Element, spec: &ParticleSpec) -> Result<(), JsValue> {
    let el = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    el.set_class_name(PARTICLE_CLASS);
    el.set_text_content(Some(&spec.symbol.to_string()));
    let style = el.style();
    style.set_property("left", &spec.left_css())?;
    style.set_property("animation-delay", &spec.delay_css())?;
    style.set_property("animation-duration", &spec.duration_css())?;
    container.append_child(&el)?;
    Ok(())
}

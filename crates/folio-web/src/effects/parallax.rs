use folio_core::parallax::{Parallax, ParallaxConfig};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;
use crate::events::PointerState;
use crate::frame::Effect;

pub struct ParallaxEffect {
    layers: Vec<(web::Element, f32)>,
    parallax: Parallax,
    max_px: f32,
    pointer: Rc<RefCell<PointerState>>,
}

impl Effect for ParallaxEffect {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn frame(&mut self, dt_sec: f32, _now_ms: f64) {
        match self.pointer.borrow().pos {
            Some(p) => {
                let (w, h) = dom::viewport_size();
                self.parallax.set_pointer(p.x, p.y, w, h);
            }
            None => self.parallax.release(),
        }
        self.parallax.step(dt_sec);
        for (el, depth) in &self.layers {
            let o = self.parallax.offset(*depth, self.max_px);
            dom::set_css_var(el, "--parallax-x", &format!("{:.2}px", o.x));
            dom::set_css_var(el, "--parallax-y", &format!("{:.2}px", o.y));
        }
    }
}

pub fn init(
    document: &web::Document,
    config: &ParallaxConfig,
    pointer: Rc<RefCell<PointerState>>,
) -> anyhow::Result<ParallaxEffect> {
    let layers: Vec<(web::Element, f32)> = dom::query_all(document, "[data-depth]")
        .into_iter()
        .map(|el| {
            let depth = el
                .get_attribute("data-depth")
                .and_then(|d| d.parse::<f32>().ok())
                .filter(|d| d.is_finite())
                .unwrap_or(0.5);
            (el, depth)
        })
        .collect();
    if layers.is_empty() {
        anyhow::bail!("no [data-depth] elements");
    }
    log::info!("[parallax] {} layer(s)", layers.len());
    Ok(ParallaxEffect {
        layers,
        parallax: Parallax::new(config.smoothing),
        max_px: config.max_px,
        pointer,
    })
}

use folio_core::flicker::{Flicker, FlickerConfig, Lamp};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;
use crate::frame::Effect;

struct Flickering {
    el: web::Element,
    flicker: Flicker,
    until_ms: f64,
}

pub struct FlickerEffect {
    items: Vec<Flickering>,
    lamp: Rc<Cell<Lamp>>,
}

impl Effect for FlickerEffect {
    fn name(&self) -> &'static str {
        "flicker"
    }

    fn frame(&mut self, _dt_sec: f32, now_ms: f64) {
        // A switched-off lamp holds everything dark.
        if !self.lamp.get().on {
            return;
        }
        for item in self.items.iter_mut() {
            if now_ms < item.until_ms {
                continue;
            }
            let seg = item.flicker.next_segment();
            item.until_ms = now_ms + seg.hold_ms;
            dom::set_css_var(&item.el, "--flicker", &format!("{:.3}", seg.intensity));
        }
    }
}

#[derive(Clone)]
pub struct LampHandle {
    root: web::Element,
    lamp: Rc<Cell<Lamp>>,
}

impl LampHandle {
    pub fn toggle(&self) {
        let mut lamp = self.lamp.get();
        let on = lamp.toggle();
        self.lamp.set(lamp);
        dom::set_css_var(&self.root, "--lamp", lamp.css_value());
        dom::set_class(&self.root, "lamp-off", !on);
        log::info!("[flicker] lamp {}", if on { "on" } else { "off" });
    }
}

/// The lamp always exists; the flicker effect only when elements ask for it.
pub fn init(
    document: &web::Document,
    config: &FlickerConfig,
) -> anyhow::Result<(LampHandle, Option<FlickerEffect>)> {
    let root = dom::root_element(document).ok_or_else(|| anyhow::anyhow!("no <html> element"))?;
    let lamp = Rc::new(Cell::new(Lamp::default()));
    dom::set_css_var(&root, "--lamp", lamp.get().css_value());
    let handle = LampHandle {
        root,
        lamp: lamp.clone(),
    };
    for button in dom::query_all(document, "[data-lamp-toggle]") {
        let h = handle.clone();
        dom::listen(&button, "click", move |_ev: web::Event| h.toggle());
    }

    let items: Vec<Flickering> = dom::query_all(document, "[data-flicker]")
        .into_iter()
        .map(|el| Flickering {
            el,
            flicker: Flicker::new(config.clone(), dom::random_seed()),
            until_ms: 0.0,
        })
        .collect();
    if items.is_empty() {
        return Ok((handle, None));
    }
    log::info!("[flicker] {} element(s)", items.len());
    Ok((handle, Some(FlickerEffect { items, lamp })))
}

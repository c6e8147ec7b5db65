use folio_core::diffusion::{Diffusion, DiffusionConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::frame::Effect;

const FRAME_MS: f64 = 33.0;

struct Running {
    el: web::Element,
    diffusion: Diffusion,
    frame: u32,
}

pub struct DiffusionEffect {
    frames: u32,
    // Filled by the IntersectionObserver, drained each frame.
    queue: Rc<RefCell<Vec<web::Element>>>,
    running: Vec<Running>,
    rng: StdRng,
    next_step_ms: f64,
}

impl DiffusionEffect {
    fn start(&mut self, el: web::Element) {
        let text = el
            .get_attribute("data-diffuse")
            .filter(|t| !t.is_empty())
            .or_else(|| el.text_content())
            .unwrap_or_default();
        let diffusion = Diffusion::new(&text, self.frames, &mut self.rng);
        self.running.push(Running {
            el,
            diffusion,
            frame: 0,
        });
    }
}

impl Effect for DiffusionEffect {
    fn name(&self) -> &'static str {
        "diffusion"
    }

    fn frame(&mut self, _dt_sec: f32, now_ms: f64) {
        let started: Vec<web::Element> = self.queue.borrow_mut().drain(..).collect();
        for el in started {
            self.start(el);
        }
        if self.running.is_empty() || now_ms < self.next_step_ms {
            return;
        }
        self.next_step_ms = now_ms + FRAME_MS;
        let rng = &mut self.rng;
        for r in self.running.iter_mut() {
            r.frame += 1;
            let text = r.diffusion.frame(r.frame, rng);
            r.el.set_text_content(Some(&text));
        }
        self.running.retain(|r| !r.diffusion.is_done(r.frame));
    }
}

fn observe(targets: &[web::Element], queue: Rc<RefCell<Vec<web::Element>>>) -> anyhow::Result<()> {
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let el = entry.target();
                    observer.unobserve(&el);
                    queue.borrow_mut().push(el);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let observer = web::IntersectionObserver::new(cb.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    cb.forget();
    for el in targets {
        observer.observe(el);
    }
    Ok(())
}

pub fn init(document: &web::Document, config: &DiffusionConfig) -> anyhow::Result<DiffusionEffect> {
    let targets = dom::query_all(document, "[data-diffuse]");
    if targets.is_empty() {
        anyhow::bail!("no [data-diffuse] elements");
    }
    let queue = Rc::new(RefCell::new(Vec::new()));
    if let Err(e) = observe(&targets, queue.clone()) {
        // No observer: animate everything on load.
        log::warn!("[diffusion] {:?}; starting all now", e);
        queue.borrow_mut().extend(targets.iter().cloned());
    }
    log::info!("[diffusion] {} element(s)", targets.len());
    Ok(DiffusionEffect {
        frames: config.frames,
        queue,
        running: Vec::new(),
        rng: StdRng::seed_from_u64(dom::random_seed()),
        next_step_ms: 0.0,
    })
}

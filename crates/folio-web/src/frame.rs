use folio_core::ScrollTracker;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

const MAX_DT_SEC: f32 = 0.1;

/// Per-frame work for one self-contained DOM/audio/canvas effect.
pub trait Effect {
    fn name(&self) -> &'static str;
    fn frame(&mut self, dt_sec: f32, now_ms: f64);
}

pub struct FrameContext {
    pub scroll: Rc<RefCell<ScrollTracker>>,
    pub effects: Vec<Box<dyn Effect>>,
    pub hidden: Rc<Cell<bool>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(scroll: Rc<RefCell<ScrollTracker>>, hidden: Rc<Cell<bool>>) -> Self {
        Self {
            scroll,
            effects: Vec::new(),
            hidden,
            last_instant: Instant::now(),
        }
    }

    pub fn push(&mut self, effect: Box<dyn Effect>) {
        log::info!("[frame] effect `{}` registered", effect.name());
        self.effects.push(effect);
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        if self.hidden.get() {
            return;
        }
        // Long gaps (tab switch, debugger) must not fling the simulations.
        let dt_sec = dt.as_secs_f32().min(MAX_DT_SEC);
        let now_ms = dom::now_ms();

        self.scroll.borrow_mut().tick(dt_sec);
        for effect in self.effects.iter_mut() {
            effect.frame(dt_sec, now_ms);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Track `document.hidden`; `on_change` runs with the new hidden state.
pub fn wire_visibility(
    document: &web::Document,
    hidden: Rc<Cell<bool>>,
    mut on_change: impl FnMut(bool) + 'static,
) {
    hidden.set(document.hidden());
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_ev: web::Event| {
        let now_hidden = doc.hidden();
        if now_hidden != hidden.get() {
            log::info!("[frame] page {}", if now_hidden { "hidden" } else { "visible" });
            hidden.set(now_hidden);
            on_change(now_hidden);
        }
    });
}

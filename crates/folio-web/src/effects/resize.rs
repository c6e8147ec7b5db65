use folio_core::resize::ResizeOverlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::frame::Effect;
use crate::{dom, overlay};

const OVERLAY_ID: &str = "resize-overlay";

pub struct ResizeEffect {
    document: web::Document,
    root: web::Element,
    state: Rc<RefCell<ResizeOverlay>>,
    // Run once the window has settled at its new size.
    on_settled: Vec<Box<dyn Fn()>>,
}

impl ResizeEffect {
    pub fn on_settled(&mut self, f: impl Fn() + 'static) {
        self.on_settled.push(Box::new(f));
    }
}

impl Effect for ResizeEffect {
    fn name(&self) -> &'static str {
        "resize"
    }

    fn frame(&mut self, _dt_sec: f32, now_ms: f64) {
        if !self.state.borrow_mut().poll(now_ms) {
            return;
        }
        dom::set_class(&self.root, "is-resizing", false);
        overlay::hide(&self.document, OVERLAY_ID);
        for f in &self.on_settled {
            f();
        }
    }
}

pub fn init(
    window: &web::Window,
    document: &web::Document,
    quiet_ms: f64,
) -> anyhow::Result<ResizeEffect> {
    let root = dom::root_element(document).ok_or_else(|| anyhow::anyhow!("no <html> element"))?;
    let state = Rc::new(RefCell::new(ResizeOverlay::new(quiet_ms)));
    overlay::hide(document, OVERLAY_ID);
    {
        let state = state.clone();
        let root = root.clone();
        let doc = document.clone();
        dom::listen(window, "resize", move |_ev: web::Event| {
            if state.borrow_mut().on_resize(dom::now_ms()) {
                dom::set_class(&root, "is-resizing", true);
                overlay::show(&doc, OVERLAY_ID);
            }
        });
    }
    Ok(ResizeEffect {
        document: document.clone(),
        root,
        state,
        on_settled: Vec::new(),
    })
}

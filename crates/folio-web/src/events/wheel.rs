use folio_core::ScrollTracker;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;

/// Feed wheel deltas into the scroll model. Passive: native scrolling stays.
pub fn wire_wheel(window: &web::Window, scroll: Rc<RefCell<ScrollTracker>>) {
    dom::listen_passive(window, "wheel", move |ev: web::WheelEvent| {
        if let Ok(mut s) = scroll.try_borrow_mut() {
            s.on_wheel(ev.delta_y(), ev.delta_mode());
        }
    });
}

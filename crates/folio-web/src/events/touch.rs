use folio_core::scroll::TouchDrag;
use folio_core::{ScrollTracker, DELTA_MODE_PIXEL};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;

fn first_touch_y(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_y() as f32)
}

/// Touch devices send no wheel events, so finger drags feed the scroll
/// model directly. Passive touch events keep firing during native panning,
/// unlike pointer events which the browser cancels once it takes over.
pub fn wire_touch(window: &web::Window, scroll: Rc<RefCell<ScrollTracker>>) {
    let drag = Rc::new(RefCell::new(TouchDrag::default()));
    {
        let drag = drag.clone();
        dom::listen_passive(window, "touchstart", move |ev: web::TouchEvent| {
            if let Some(y) = first_touch_y(&ev) {
                drag.borrow_mut().start(y);
            }
        });
    }
    {
        let drag = drag.clone();
        dom::listen_passive(window, "touchmove", move |ev: web::TouchEvent| {
            let Some(dy) = first_touch_y(&ev).and_then(|y| drag.borrow_mut().move_to(y)) else {
                return;
            };
            if let Ok(mut s) = scroll.try_borrow_mut() {
                s.on_wheel(dy, DELTA_MODE_PIXEL);
            }
        });
    }
    for event in ["touchend", "touchcancel"] {
        let drag = drag.clone();
        dom::listen_passive(window, event, move |ev: web::TouchEvent| {
            // another finger still down: continue from it without a jump
            match first_touch_y(&ev) {
                Some(y) => drag.borrow_mut().start(y),
                None => drag.borrow_mut().end(),
            }
        });
    }
}

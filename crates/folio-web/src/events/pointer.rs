use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;

/// Latest pointer position in CSS pixels, viewport-relative.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub pos: Option<Vec2>,
    pub down: bool,
}

#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Track the pointer for the parallax/light effects.
pub fn wire_pointer(window: &web::Window, pointer: Rc<RefCell<PointerState>>) {
    // pointermove
    {
        let pointer = pointer.clone();
        dom::listen_passive(window, "pointermove", move |ev: web::PointerEvent| {
            pointer.borrow_mut().pos = Some(pointer_client_px(&ev));
        });
    }
    // pointerdown
    {
        let pointer = pointer.clone();
        dom::listen_passive(window, "pointerdown", move |ev: web::PointerEvent| {
            let mut p = pointer.borrow_mut();
            p.pos = Some(pointer_client_px(&ev));
            p.down = true;
        });
    }
    // pointerup / cancel
    for event in ["pointerup", "pointercancel"] {
        let pointer = pointer.clone();
        dom::listen_passive(window, event, move |_ev: web::PointerEvent| {
            pointer.borrow_mut().down = false;
        });
    }
    // leaving the window drops the position so effects ease back
    {
        let pointer = pointer.clone();
        dom::listen(window, "pointerout", move |ev: web::PointerEvent| {
            if ev.related_target().is_none() {
                pointer.borrow_mut().pos = None;
            }
        });
    }
}

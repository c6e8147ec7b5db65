use folio_core::keys::{action_for_key, is_editable_tag, KeyAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::AudioEngine;
use crate::dom;
use crate::effects::flicker::LampHandle;
use crate::effects::theme::ThemeHandle;
use crate::intro::IntroHandle;
use crate::views::Views;

/// Everything a global shortcut can act on. Missing features are `None`.
pub struct KeyTargets {
    pub audio: Option<Rc<RefCell<AudioEngine>>>,
    pub lamp: Option<LampHandle>,
    pub theme: Option<ThemeHandle>,
    pub views: Option<Views>,
    pub intro: IntroHandle,
}

fn typing_in_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| is_editable_tag(&el.tag_name()) || el.has_attribute("contenteditable"))
        .unwrap_or(false)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, t: &KeyTargets) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || typing_in_field(ev) {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    // While the intro runs every shortcut just skips it.
    if !t.intro.is_finished() {
        t.intro.skip();
        ev.prevent_default();
        return;
    }
    match action {
        KeyAction::ToggleMute => {
            if let Some(audio) = &t.audio {
                audio.borrow_mut().toggle_mute();
            }
        }
        KeyAction::ToggleLamp => {
            if let Some(lamp) = &t.lamp {
                lamp.toggle();
            }
        }
        KeyAction::ToggleTheme => {
            if let Some(theme) = &t.theme {
                theme.toggle();
            }
        }
        KeyAction::NextView => {
            if let Some(views) = &t.views {
                views.cycle(1);
            }
        }
        KeyAction::PrevView => {
            if let Some(views) = &t.views {
                views.cycle(-1);
            }
        }
        KeyAction::SkipIntro => {}
    }
}

pub fn wire_global_keydown(window: &web::Window, targets: KeyTargets) {
    dom::listen(window, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &targets);
    });
}

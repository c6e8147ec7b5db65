use folio_core::intro::{IntroConfig, IntroScript, IntroStep};
use folio_core::ClickMode;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

use crate::audio::AudioEngine;
use crate::{dom, overlay};

const INTRO_ID: &str = "intro";
const TEXT_ID: &str = "intro-text";
const FLASH_ID: &str = "intro-flash";

/// Shared handle the keyboard and click handlers use to cut the intro short.
#[derive(Clone, Default)]
pub struct IntroHandle {
    skip: Rc<Cell<bool>>,
    finished: Rc<Cell<bool>>,
}

impl IntroHandle {
    pub fn skip(&self) {
        if !self.finished.get() && !self.skip.replace(true) {
            log::info!("[intro] skipped");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }
}

fn reveal(document: &web::Document) {
    if let Some(body) = document.body() {
        dom::set_class(&body, "is-revealed", true);
    }
    if let Some(flash) = document.get_element_by_id(FLASH_ID) {
        dom::set_class(&flash, "is-flashing", false);
    }
    overlay::hide(document, INTRO_ID);
}

/// Type the boot text, flash, then reveal the page.
pub async fn run(
    document: web::Document,
    config: IntroConfig,
    audio: Option<Rc<RefCell<AudioEngine>>>,
    handle: IntroHandle,
) {
    let script = IntroScript::new(&config);
    if document.get_element_by_id(INTRO_ID).is_none() {
        log::warn!("[intro] #{} missing; revealing immediately", INTRO_ID);
        reveal(&document);
        handle.finished.set(true);
        return;
    }
    let text_el = document.get_element_by_id(TEXT_ID);
    let flash_el = document.get_element_by_id(FLASH_ID);
    if let Some(el) = document.get_element_by_id(INTRO_ID) {
        let h = handle.clone();
        dom::listen(&el, "click", move |_ev: web::Event| h.skip());
    }
    log::info!(
        "[intro] {} steps, ~{} ms",
        script.len(),
        script.total_duration_ms()
    );

    let mut typed = String::new();
    for (delay, step) in script.steps() {
        if handle.skip.get() {
            break;
        }
        if delay > 0 {
            dom::sleep_ms(delay).await;
        }
        if handle.skip.get() {
            break;
        }
        match step {
            IntroStep::TypeChar { ch, .. } => {
                typed.push(ch);
                if let Some(el) = &text_el {
                    el.set_text_content(Some(&typed));
                }
                if let Some(engine) = &audio {
                    if let Ok(mut e) = engine.try_borrow_mut() {
                        e.click_for_char(ch, ClickMode::Typewriter);
                    }
                }
            }
            IntroStep::NewLine => {
                typed.push('\n');
                if let Some(el) = &text_el {
                    el.set_text_content(Some(&typed));
                }
            }
            IntroStep::Flash => {
                if let Some(el) = &flash_el {
                    dom::set_class(el, "is-flashing", true);
                }
            }
            IntroStep::Unflash => {
                if let Some(el) = &flash_el {
                    dom::set_class(el, "is-flashing", false);
                }
            }
            IntroStep::Reveal => reveal(&document),
            IntroStep::Done => {}
        }
    }
    // Skipping lands here too; revealing twice is harmless.
    reveal(&document);
    handle.finished.set(true);
    log::info!("[intro] done");
}

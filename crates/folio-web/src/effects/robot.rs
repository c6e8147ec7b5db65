use folio_core::robot::{
    BlinkScheduler, Expression, FaceGrid, RobotConfig, SpeechTrack, FACE_COLS, FACE_ROWS,
};
use folio_core::ClickMode;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

use crate::audio::AudioEngine;
use crate::dom;
use crate::frame::Effect;

const HAPPY_MS: f64 = 900.0;

struct Speech {
    track: SpeechTrack,
    index: usize,
    next_at: f64,
}

pub struct RobotEffect {
    cells: Vec<web::Element>,
    speech_el: Option<web::Element>,
    blink: BlinkScheduler,
    speech: Option<Speech>,
    // Lines queued by `[data-robot-say]` clicks.
    requests: Rc<RefCell<Vec<String>>>,
    happy_until: Rc<Cell<f64>>,
    char_ms: f64,
    audio: Option<Rc<RefCell<AudioEngine>>>,
    shown: Option<FaceGrid>,
}

impl RobotEffect {
    fn say(&mut self, text: &str, now_ms: f64) {
        if let Some(el) = &self.speech_el {
            el.set_text_content(Some(""));
        }
        self.speech = Some(Speech {
            track: SpeechTrack::new(text),
            index: 0,
            next_at: now_ms,
        });
    }

    /// Advance speech; returns the current mouth expression while talking.
    fn speak(&mut self, now_ms: f64) -> Option<Expression> {
        let speech = self.speech.as_mut()?;
        if speech.index >= speech.track.len() {
            if now_ms >= speech.next_at {
                self.speech = None;
            }
            return None;
        }
        let (ch, mouth) = speech.track.frames()[speech.index];
        if now_ms >= speech.next_at {
            speech.index += 1;
            speech.next_at = now_ms + self.char_ms;
            if let Some(el) = &self.speech_el {
                let typed: String = speech.track.frames()[..speech.index]
                    .iter()
                    .map(|(c, _)| *c)
                    .collect();
                el.set_text_content(Some(&typed));
            }
            if let Some(engine) = &self.audio {
                if let Ok(mut e) = engine.try_borrow_mut() {
                    e.click_for_char(ch, ClickMode::Speech);
                }
            }
        }
        Some(Expression::Talk(mouth))
    }

    fn draw(&mut self, grid: FaceGrid) {
        if self.shown.as_ref() == Some(&grid) {
            return;
        }
        for (el, on) in self.cells.iter().zip(grid.cells()) {
            dom::set_class(el, "is-on", *on);
        }
        self.shown = Some(grid);
    }
}

impl Effect for RobotEffect {
    fn name(&self) -> &'static str {
        "robot"
    }

    fn frame(&mut self, _dt_sec: f32, now_ms: f64) {
        let next: Option<String> = {
            let mut q = self.requests.borrow_mut();
            (!q.is_empty()).then(|| q.remove(0))
        };
        if let Some(text) = next {
            self.say(&text, now_ms);
        }
        let blinking = self.blink.update(now_ms);
        let expr = match self.speak(now_ms) {
            Some(talk) => talk,
            None if now_ms < self.happy_until.get() => Expression::Happy,
            None if blinking => Expression::Blink,
            None => Expression::Idle,
        };
        self.draw(FaceGrid::for_expression(expr));
    }
}

/// Build the cell grid inside `.robot-face` if the markup left it empty.
fn face_cells(document: &web::Document, face: &web::Element) -> anyhow::Result<Vec<web::Element>> {
    let existing = dom::query_all_in(face, ".robot-cell");
    if existing.len() == FACE_COLS * FACE_ROWS {
        return Ok(existing);
    }
    for el in existing {
        el.remove();
    }
    let mut cells = Vec::with_capacity(FACE_COLS * FACE_ROWS);
    for _ in 0..FACE_COLS * FACE_ROWS {
        let cell = document
            .create_element("span")
            .map_err(|e| anyhow::anyhow!("create cell: {:?}", e))?;
        cell.set_class_name("robot-cell");
        face.append_child(&cell)
            .map_err(|e| anyhow::anyhow!("append cell: {:?}", e))?;
        cells.push(cell);
    }
    dom::set_css_var(face, "--robot-cols", &FACE_COLS.to_string());
    Ok(cells)
}

pub fn init(
    document: &web::Document,
    config: &RobotConfig,
    audio: Option<Rc<RefCell<AudioEngine>>>,
) -> anyhow::Result<RobotEffect> {
    let face = document
        .query_selector(".robot-face")
        .ok()
        .flatten()
        .ok_or_else(|| anyhow::anyhow!("no .robot-face element"))?;
    let cells = face_cells(document, &face)?;
    let speech_el = document.get_element_by_id("robot-speech");
    let now = dom::now_ms();

    let requests = Rc::new(RefCell::new(Vec::new()));
    // Whatever the markup puts in the bubble is the greeting.
    if let Some(greeting) = speech_el.as_ref().and_then(|el| el.text_content()) {
        let greeting = greeting.trim().to_string();
        if !greeting.is_empty() {
            requests.borrow_mut().push(greeting);
        }
    }
    for button in dom::query_all(document, "[data-robot-say]") {
        let Some(text) = button.get_attribute("data-robot-say") else {
            continue;
        };
        let requests = requests.clone();
        dom::listen(&button, "click", move |_ev: web::Event| {
            requests.borrow_mut().push(text.clone());
        });
    }
    let happy_until = Rc::new(Cell::new(f64::NEG_INFINITY));
    {
        let happy_until = happy_until.clone();
        dom::listen(&face, "pointerenter", move |_ev: web::PointerEvent| {
            happy_until.set(dom::now_ms() + HAPPY_MS);
        });
    }
    log::info!("[robot] {}x{} face", FACE_COLS, FACE_ROWS);
    Ok(RobotEffect {
        cells,
        speech_el,
        blink: BlinkScheduler::new(config, now, dom::random_seed()),
        speech: None,
        requests,
        happy_until,
        char_ms: config.speech_char_ms as f64,
        audio,
        shown: None,
    })
}

//! Boot/typewriter intro, expressed as a flat list of timed steps.
//!
//! The web layer sleeps for each step's delay and then applies it, so the
//! whole sequence is a straight-line async task with no state machine of its
//! own.

use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct IntroConfig {
    pub lines: Vec<String>,
    pub char_delay_ms: u32,
    pub line_pause_ms: u32,
    pub flash_ms: u32,
    pub reveal_delay_ms: u32,
    pub skip: bool,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            lines: vec![
                "FOLIO BIOS v2.6".to_string(),
                "MEMORY CHECK ........ OK".to_string(),
                "MOUNTING /work ...... OK".to_string(),
                "LOADING PORTFOLIO".to_string(),
                "READY.".to_string(),
            ],
            char_delay_ms: INTRO_CHAR_DELAY_MS,
            line_pause_ms: INTRO_LINE_PAUSE_MS,
            flash_ms: INTRO_FLASH_MS,
            reveal_delay_ms: INTRO_REVEAL_DELAY_MS,
            skip: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroStep {
    TypeChar { line: usize, ch: char },
    NewLine,
    Flash,
    Unflash,
    Reveal,
    Done,
}

#[derive(Clone, Debug)]
pub struct IntroScript {
    steps: Vec<(u32, IntroStep)>,
}

impl IntroScript {
    pub fn new(config: &IntroConfig) -> Self {
        if config.skip {
            return Self {
                steps: vec![(0, IntroStep::Reveal), (0, IntroStep::Done)],
            };
        }
        let mut steps = Vec::new();
        let last = config.lines.len().saturating_sub(1);
        for (line, text) in config.lines.iter().enumerate() {
            for ch in text.chars() {
                steps.push((config.char_delay_ms, IntroStep::TypeChar { line, ch }));
            }
            if line < last {
                steps.push((config.line_pause_ms, IntroStep::NewLine));
            }
        }
        steps.push((config.line_pause_ms, IntroStep::Flash));
        steps.push((config.flash_ms, IntroStep::Unflash));
        steps.push((config.reveal_delay_ms, IntroStep::Reveal));
        steps.push((0, IntroStep::Done));
        Self { steps }
    }

    /// `(delay_ms, step)` pairs; wait the delay, then apply the step.
    pub fn steps(&self) -> impl Iterator<Item = (u32, IntroStep)> + '_ {
        self.steps.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn total_duration_ms(&self) -> u64 {
        self.steps.iter().map(|(d, _)| *d as u64).sum()
    }

    /// Text on screen once the first `applied` steps have run.
    pub fn typed_text(&self, applied: usize) -> String {
        let mut out = String::new();
        for (_, step) in self.steps.iter().take(applied) {
            match step {
                IntroStep::TypeChar { ch, .. } => out.push(*ch),
                IntroStep::NewLine => out.push('\n'),
                _ => {}
            }
        }
        out
    }

    /// Index of the reveal step, used when the visitor skips ahead.
    pub fn reveal_index(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|(_, s)| *s == IntroStep::Reveal)
    }
}

//! Pixel robot face: expression bitmaps on a fixed grid, randomized blinking,
//! and per-character mouth shapes for typed speech.

use crate::audio_map::is_vowel;
use crate::constants::{BLINK_HOLD_MS, BLINK_MAX_MS, BLINK_MIN_MS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const FACE_COLS: usize = 12;
pub const FACE_ROWS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouthShape {
    Rest,
    Closed,
    Open,
    Wide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expression {
    Idle,
    Blink,
    Happy,
    Talk(MouthShape),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RobotConfig {
    pub blink_min_ms: f64,
    pub blink_max_ms: f64,
    pub blink_hold_ms: f64,
    pub speech_char_ms: u32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            blink_min_ms: BLINK_MIN_MS,
            blink_max_ms: BLINK_MAX_MS,
            blink_hold_ms: BLINK_HOLD_MS,
            speech_char_ms: 55,
        }
    }
}

/// Row-major lit cells, `FACE_COLS * FACE_ROWS` long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceGrid {
    cells: Vec<bool>,
}

impl Default for FaceGrid {
    fn default() -> Self {
        Self {
            cells: vec![false; FACE_COLS * FACE_ROWS],
        }
    }
}

impl FaceGrid {
    pub fn for_expression(expr: Expression) -> Self {
        let mut g = FaceGrid::default();
        match expr {
            Expression::Idle => {
                g.open_eyes();
                g.mouth(MouthShape::Rest);
            }
            Expression::Blink => {
                g.fill(2..4, 3..4);
                g.fill(8..10, 3..4);
                g.mouth(MouthShape::Rest);
            }
            Expression::Happy => {
                for (c, r) in [(3, 2), (2, 3), (4, 3), (8, 2), (7, 3), (9, 3)] {
                    g.set(c, r, true);
                }
                g.set(3, 5, true);
                g.set(8, 5, true);
                g.fill(4..8, 6..7);
            }
            Expression::Talk(shape) => {
                g.open_eyes();
                g.mouth(shape);
            }
        }
        g
    }

    fn open_eyes(&mut self) {
        self.fill(2..4, 2..4);
        self.fill(8..10, 2..4);
    }

    fn mouth(&mut self, shape: MouthShape) {
        match shape {
            MouthShape::Rest => self.fill(4..8, 6..7),
            MouthShape::Closed => self.fill(3..9, 6..7),
            MouthShape::Open => self.fill(4..8, 5..7),
            MouthShape::Wide => self.fill(4..8, 5..8),
        }
    }

    fn fill(&mut self, cols: std::ops::Range<usize>, rows: std::ops::Range<usize>) {
        for r in rows {
            for c in cols.clone() {
                self.set(c, r, true);
            }
        }
    }

    pub fn set(&mut self, col: usize, row: usize, on: bool) {
        if col < FACE_COLS && row < FACE_ROWS {
            self.cells[row * FACE_COLS + col] = on;
        }
    }

    pub fn get(&self, col: usize, row: usize) -> bool {
        col < FACE_COLS && row < FACE_ROWS && self.cells[row * FACE_COLS + col]
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }
}

pub struct BlinkScheduler {
    rng: StdRng,
    min_ms: f64,
    max_ms: f64,
    hold_ms: f64,
    next_at: f64,
    until: f64,
}

impl BlinkScheduler {
    pub fn new(config: &RobotConfig, now_ms: f64, seed: u64) -> Self {
        let mut s = Self {
            rng: StdRng::seed_from_u64(seed),
            min_ms: config.blink_min_ms,
            max_ms: config.blink_max_ms.max(config.blink_min_ms + 1.0),
            hold_ms: config.blink_hold_ms,
            next_at: 0.0,
            until: f64::NEG_INFINITY,
        };
        s.next_at = now_ms + s.interval();
        s
    }

    fn interval(&mut self) -> f64 {
        self.rng.gen_range(self.min_ms..self.max_ms)
    }

    /// Whether the eyes are closed at `now_ms`.
    pub fn update(&mut self, now_ms: f64) -> bool {
        if now_ms >= self.next_at {
            self.until = now_ms + self.hold_ms;
            self.next_at = now_ms + self.interval();
        }
        now_ms < self.until
    }
}

pub fn mouth_for_char(ch: char) -> MouthShape {
    if ch.is_whitespace() || ch.is_ascii_punctuation() {
        MouthShape::Rest
    } else if matches!(ch.to_ascii_lowercase(), 'a' | 'o') {
        MouthShape::Wide
    } else if is_vowel(ch) {
        MouthShape::Open
    } else {
        MouthShape::Closed
    }
}

#[derive(Clone, Debug)]
pub struct SpeechTrack {
    frames: Vec<(char, MouthShape)>,
}

impl SpeechTrack {
    pub fn new(text: &str) -> Self {
        Self {
            frames: text.chars().map(|c| (c, mouth_for_char(c))).collect(),
        }
    }

    pub fn frames(&self) -> &[(char, MouthShape)] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blink_closes_eyes_to_a_line() {
        let idle = FaceGrid::for_expression(Expression::Idle);
        let blink = FaceGrid::for_expression(Expression::Blink);
        assert!(idle.get(2, 2) && idle.get(2, 3));
        assert!(!blink.get(2, 2) && blink.get(2, 3));
        assert!(blink.lit_count() < idle.lit_count());
    }

    #[test]
    fn wider_mouths_light_more_cells() {
        let count = |s| FaceGrid::for_expression(Expression::Talk(s)).lit_count();
        assert!(count(MouthShape::Wide) > count(MouthShape::Open));
        assert!(count(MouthShape::Open) > count(MouthShape::Rest));
    }

    #[test]
    fn out_of_range_cells_are_ignored() {
        let mut g = FaceGrid::default();
        g.set(FACE_COLS, 0, true);
        g.set(0, FACE_ROWS, true);
        assert_eq!(g.lit_count(), 0);
        assert!(!g.get(99, 99));
    }
}

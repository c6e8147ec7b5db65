//! "Diffusion" text reveal: every character starts as noise and settles on
//! its target glyph at a random frame, left-biased so text resolves roughly in
//! reading order.

use crate::constants::DIFFUSION_FRAMES;
use rand::Rng;

pub const GLYPHS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'K', 'M', 'N', 'R', 'S', 'X', 'Z', '0', '1', '2',
    '3', '4', '5', '7', '8', '9', '#', '%', '&', '*', '+', '/', '<', '=', '>', '?', '@', '$',
];

#[derive(Clone, Debug, PartialEq)]
pub struct DiffusionConfig {
    pub frames: u32,
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        Self {
            frames: DIFFUSION_FRAMES,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Diffusion {
    target: Vec<char>,
    resolve_at: Vec<u32>,
    frames: u32,
}

impl Diffusion {
    pub fn new<R: Rng + ?Sized>(target: &str, frames: u32, rng: &mut R) -> Self {
        let frames = frames.max(1);
        let target: Vec<char> = target.chars().collect();
        let n = target.len().max(1) as f32;
        let resolve_at = target
            .iter()
            .enumerate()
            .map(|(i, ch)| {
                if ch.is_whitespace() {
                    return 0;
                }
                let bias = i as f32 / n;
                let spread: f32 = rng.gen_range(0.0..1.0);
                let f = (0.6 * bias + 0.4 * spread) * (frames - 1) as f32;
                (f.round() as u32 + 1).min(frames)
            })
            .collect();
        Self {
            target,
            resolve_at,
            frames,
        }
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn is_done(&self, frame: u32) -> bool {
        frame >= self.frames
    }

    /// Text to show at `frame`; frame `frames` and beyond is the target text.
    pub fn frame<R: Rng + ?Sized>(&self, frame: u32, rng: &mut R) -> String {
        self.target
            .iter()
            .zip(&self.resolve_at)
            .map(|(&ch, &at)| {
                if ch.is_whitespace() || frame >= at {
                    ch
                } else {
                    GLYPHS[rng.gen_range(0..GLYPHS.len())]
                }
            })
            .collect()
    }
}

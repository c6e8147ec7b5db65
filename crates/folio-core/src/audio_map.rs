//! Procedural audio parameter mapping.
//!
//! Normalized scroll velocity drives the noise filter cutoff, the sub-bass
//! gain, the noise bed gain and the playback pitch of the ambient loop.
//! Nothing here touches Web Audio; the web layer turns [`AudioParams`] and
//! [`Ramp`] segments into `AudioParam` automation.

use crate::constants::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    Linear,
    Exponential,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AudioConfig {
    pub enabled: bool,
    pub min_cutoff_hz: f32,
    pub max_cutoff_hz: f32,
    pub sub_gain_min: f32,
    pub sub_gain_max: f32,
    pub noise_gain_min: f32,
    pub noise_gain_max: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
    pub ramp_sec: f64,
    pub curve: Curve,
    pub master_gain: f32,
    pub sub_bass_hz: f32,
    /// Optional looping ambience fetched and decoded at start.
    pub ambient_url: Option<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_cutoff_hz: CUTOFF_MIN_HZ,
            max_cutoff_hz: CUTOFF_MAX_HZ,
            sub_gain_min: SUB_GAIN_MIN,
            sub_gain_max: SUB_GAIN_MAX,
            noise_gain_min: NOISE_GAIN_MIN,
            noise_gain_max: NOISE_GAIN_MAX,
            pitch_min: PITCH_MIN,
            pitch_max: PITCH_MAX,
            ramp_sec: RAMP_SEC,
            curve: Curve::Exponential,
            master_gain: MASTER_GAIN,
            sub_bass_hz: SUB_BASS_HZ,
            ambient_url: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioParams {
    pub cutoff_hz: f32,
    pub sub_gain: f32,
    pub noise_gain: f32,
    pub playback_rate: f32,
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate in log space; falls back to linear when either end is not positive.
#[inline]
fn exp_lerp(a: f32, b: f32, t: f32) -> f32 {
    if a <= 0.0 || b <= 0.0 {
        return lerp(a, b, t);
    }
    (a.ln() + (b.ln() - a.ln()) * t).exp()
}

pub fn map_velocity(normalized: f32, config: &AudioConfig) -> AudioParams {
    let t = if normalized.is_finite() {
        normalized.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let cutoff_hz = match config.curve {
        Curve::Linear => lerp(config.min_cutoff_hz, config.max_cutoff_hz, t),
        Curve::Exponential => exp_lerp(config.min_cutoff_hz, config.max_cutoff_hz, t),
    };
    // Gains follow an eased curve so slow scrolling stays quiet.
    let eased = match config.curve {
        Curve::Linear => t,
        Curve::Exponential => t * t,
    };
    AudioParams {
        cutoff_hz,
        sub_gain: lerp(config.sub_gain_min, config.sub_gain_max, eased),
        noise_gain: lerp(config.noise_gain_min, config.noise_gain_max, eased),
        playback_rate: lerp(config.pitch_min, config.pitch_max, t),
    }
}

/// Rate a newly attached ambience loop starts at: whatever the scroll last
/// drove it to, or the resting pitch before any scroll.
pub fn ambient_start_rate(last: Option<&AudioParams>, config: &AudioConfig) -> f32 {
    last.map_or(config.pitch_min, |p| p.playback_rate)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampKind {
    Linear,
    Exponential,
}

/// One automation segment: hold `from` at `start`, arrive at `to` by `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ramp {
    pub kind: RampKind,
    pub start: f64,
    pub end: f64,
    pub from: f32,
    pub to: f32,
}

impl Ramp {
    pub fn plan(kind: RampKind, current: f32, target: f32, now: f64, ramp_sec: f64) -> Ramp {
        let (from, to) = match kind {
            RampKind::Linear => (current, target),
            // exponentialRampToValueAtTime rejects zero and sign changes
            RampKind::Exponential => (current.max(EXP_RAMP_FLOOR), target.max(EXP_RAMP_FLOOR)),
        };
        Ramp {
            kind,
            start: now,
            end: now + ramp_sec.max(0.001),
            from,
            to,
        }
    }

    /// Value of the segment at time `t` (clamped to the segment).
    pub fn value_at(&self, t: f64) -> f32 {
        let span = (self.end - self.start).max(f64::EPSILON);
        let x = ((t - self.start) / span).clamp(0.0, 1.0) as f32;
        match self.kind {
            RampKind::Linear => lerp(self.from, self.to, x),
            RampKind::Exponential => exp_lerp(self.from, self.to, x),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickMode {
    Typewriter,
    Speech,
}

/// A short synthesized click for one typed character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Click {
    pub frequency_hz: f32,
    pub duration_sec: f32,
    pub gain: f32,
    pub filter_q: f32,
    /// Tonal clicks use an oscillator, the rest a filtered noise burst.
    pub tonal: bool,
}

pub struct ClickSynth;

impl ClickSynth {
    pub fn for_char<R: Rng + ?Sized>(ch: char, mode: ClickMode, rng: &mut R) -> Option<Click> {
        if ch.is_whitespace() {
            return None;
        }
        let jitter = rng.gen_range(-1.0..=1.0) * CLICK_JITTER_HZ;
        if ch.is_ascii_punctuation() {
            return Some(Click {
                frequency_hz: (CLICK_BASE_HZ * 0.5 + jitter * 0.25).max(80.0),
                duration_sec: CLICK_DURATION_SEC * 1.8,
                gain: CLICK_GAIN * 0.8,
                filter_q: 4.0,
                tonal: false,
            });
        }
        match mode {
            ClickMode::Speech if is_vowel(ch) => Some(Click {
                frequency_hz: 220.0 + rng.gen_range(0.0..=140.0),
                duration_sec: CLICK_DURATION_SEC * 3.0,
                gain: CLICK_GAIN * 0.6,
                filter_q: 1.0,
                tonal: true,
            }),
            ClickMode::Speech => Some(Click {
                frequency_hz: (CLICK_BASE_HZ * 0.7 + jitter).max(80.0),
                duration_sec: CLICK_DURATION_SEC * 1.4,
                gain: CLICK_GAIN * 0.5,
                filter_q: 2.0,
                tonal: false,
            }),
            ClickMode::Typewriter => Some(Click {
                frequency_hz: (CLICK_BASE_HZ + jitter).max(80.0),
                duration_sec: CLICK_DURATION_SEC,
                gain: CLICK_GAIN,
                filter_q: 8.0,
                tonal: false,
            }),
        }
    }
}

#[inline]
pub fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Deterministic white noise in \[-1, 1\] (xorshift32).
pub fn noise_buffer(len: usize, seed: u32) -> Vec<f32> {
    let mut state = if seed == 0 { 0x1234_ABCD } else { seed };
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        out.push((state as f32 / u32::MAX as f32) * 2.0 - 1.0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ramp_endpoints() {
        let r = Ramp::plan(RampKind::Linear, 0.0, 1.0, 2.0, 0.5);
        assert_eq!(r.value_at(1.0), 0.0);
        assert_eq!(r.value_at(2.5), 1.0);
        assert!((r.value_at(2.25) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ambient_starts_at_last_driven_rate() {
        let cfg = AudioConfig::default();
        assert_eq!(ambient_start_rate(None, &cfg), cfg.pitch_min);
        let fast = map_velocity(1.0, &cfg);
        assert!(fast.playback_rate > cfg.pitch_min);
        assert_eq!(ambient_start_rate(Some(&fast), &cfg), fast.playback_rate);
    }

    #[test]
    fn exponential_ramp_never_targets_zero() {
        let r = Ramp::plan(RampKind::Exponential, 0.0, 0.0, 0.0, 0.1);
        assert!(r.from > 0.0 && r.to > 0.0);
    }

    #[test]
    fn whitespace_is_silent() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(ClickSynth::for_char(' ', ClickMode::Typewriter, &mut rng).is_none());
        assert!(ClickSynth::for_char('\n', ClickMode::Speech, &mut rng).is_none());
        assert!(ClickSynth::for_char('x', ClickMode::Typewriter, &mut rng).is_some());
    }

    #[test]
    fn vowels_are_tonal_in_speech() {
        let mut rng = StdRng::seed_from_u64(9);
        let c = ClickSynth::for_char('o', ClickMode::Speech, &mut rng).unwrap();
        assert!(c.tonal);
        let c = ClickSynth::for_char('o', ClickMode::Typewriter, &mut rng).unwrap();
        assert!(!c.tonal);
    }

    #[test]
    fn noise_is_bounded_and_deterministic() {
        let a = noise_buffer(512, 7);
        let b = noise_buffer(512, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (-1.0..=1.0).contains(v)));
    }
}

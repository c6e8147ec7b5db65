//! Site-wide configuration.
//!
//! Defaults come from `constants.rs`; the page can override individual values
//! with `data-folio-<key>` attributes on `<body>`. Bad overrides are reported
//! and skipped, leaving the default in place.

use crate::audio_map::{AudioConfig, Curve};
use crate::constants::{STAR_COUNT_MAX, VIEW_STAGGER_MAX_MS};
use crate::diffusion::DiffusionConfig;
use crate::error::{FolioError, Result};
use crate::flicker::FlickerConfig;
use crate::intro::IntroConfig;
use crate::marquee::MarqueeConfig;
use crate::parallax::ParallaxConfig;
use crate::robot::RobotConfig;
use crate::scroll::ScrollConfig;
use crate::spring::ShakeConfig;
use crate::starfield::StarfieldConfig;
use crate::theme::ThemeOverride;
use crate::views::ViewConfig;
use fnv::FnvHashMap;
use std::str::FromStr;

pub const ATTRIBUTE_PREFIX: &str = "data-folio-";

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub scroll: ScrollConfig,
    pub audio: AudioConfig,
    pub intro: IntroConfig,
    pub views: ViewConfig,
    pub starfield: StarfieldConfig,
    pub marquee: MarqueeConfig,
    pub flicker: FlickerConfig,
    pub diffusion: DiffusionConfig,
    pub robot: RobotConfig,
    pub parallax: ParallaxConfig,
    pub shake: ShakeConfig,
    pub theme: ThemeOverride,
    pub clock_twelve_hour: bool,
    pub resize_quiet_ms: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            audio: AudioConfig::default(),
            intro: IntroConfig::default(),
            views: ViewConfig::default(),
            starfield: StarfieldConfig::default(),
            marquee: MarqueeConfig::default(),
            flicker: FlickerConfig::default(),
            diffusion: DiffusionConfig::default(),
            robot: RobotConfig::default(),
            parallax: ParallaxConfig::default(),
            shake: ShakeConfig::default(),
            theme: ThemeOverride::Auto,
            clock_twelve_hour: false,
            resize_quiet_ms: crate::constants::RESIZE_QUIET_MS,
        }
    }
}

fn invalid(key: &str, value: &str) -> FolioError {
    FolioError::InvalidConfigValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_num<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| invalid(key, value))
}

fn parse_at_most<T: FromStr + PartialOrd>(key: &str, value: &str, max: T) -> Result<T> {
    let v: T = parse_num(key, value)?;
    if v <= max {
        Ok(v)
    } else {
        Err(invalid(key, value))
    }
}

fn parse_positive(key: &str, value: &str) -> Result<f32> {
    let v: f32 = parse_num(key, value)?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(invalid(key, value))
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

impl SiteConfig {
    /// Apply one override. `key` is the attribute name without the
    /// `data-folio-` prefix.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "scroll-top-speed" => self.scroll.top_speed = parse_positive(key, value)?,
            "scroll-mass" => self.scroll.mass = parse_positive(key, value)?,
            "scroll-drag" => {
                let v: f32 = parse_num(key, value)?;
                if !(v.is_finite() && v >= 0.0) {
                    return Err(invalid(key, value));
                }
                self.scroll.drag = v;
            }
            "audio-enabled" => self.audio.enabled = parse_bool(key, value)?,
            "audio-master-gain" => {
                let v: f32 = parse_num(key, value)?;
                if !(0.0..=1.0).contains(&v) {
                    return Err(invalid(key, value));
                }
                self.audio.master_gain = v;
            }
            "audio-curve" => {
                self.audio.curve = match value.trim().to_ascii_lowercase().as_str() {
                    "linear" => Curve::Linear,
                    "exponential" | "exp" => Curve::Exponential,
                    _ => return Err(invalid(key, value)),
                }
            }
            "audio-ambient-url" => {
                let v = value.trim();
                self.audio.ambient_url = (!v.is_empty()).then(|| v.to_string());
            }
            "intro-skip" => self.intro.skip = parse_bool(key, value)?,
            "intro-char-delay" => self.intro.char_delay_ms = parse_num(key, value)?,
            "intro-lines" => {
                self.intro.lines = value.split('|').map(|l| l.trim().to_string()).collect();
            }
            "star-count" => self.starfield.count = parse_at_most(key, value, STAR_COUNT_MAX)?,
            "star-speed" => self.starfield.scroll_speed = parse_positive(key, value)?,
            "view-initial" => self.views.initial = Some(value.trim().to_string()),
            "view-stagger" => {
                self.views.stagger_ms = parse_at_most(key, value, VIEW_STAGGER_MAX_MS)?
            }
            "marquee-speed" => self.marquee.px_per_sec = parse_positive(key, value)?,
            "theme" => {
                self.theme = ThemeOverride::parse(value).ok_or_else(|| invalid(key, value))?
            }
            "clock-12h" => self.clock_twelve_hour = parse_bool(key, value)?,
            "resize-quiet" => {
                let v: f64 = parse_num(key, value)?;
                if !(v.is_finite() && v >= 0.0) {
                    return Err(invalid(key, value));
                }
                self.resize_quiet_ms = v;
            }
            _ => return Err(FolioError::UnknownConfigKey(key.to_string())),
        }
        Ok(())
    }

    /// Build from raw `<body>` attributes (full names, prefix included).
    /// Attributes without the prefix are ignored; failed overrides are returned.
    pub fn from_attributes(attrs: &FnvHashMap<String, String>) -> (Self, Vec<FolioError>) {
        let mut cfg = Self::default();
        let mut errors = Vec::new();
        let mut keys: Vec<&String> = attrs.keys().collect();
        keys.sort();
        for name in keys {
            let Some(key) = name.strip_prefix(ATTRIBUTE_PREFIX) else {
                continue;
            };
            match cfg.apply_override(key, &attrs[name]) {
                Ok(()) => log::debug!("[config] {} = {:?}", key, attrs[name]),
                Err(e) => errors.push(e),
            }
        }
        (cfg, errors)
    }
}

//! Leaf effects. Each `init` either returns a per-frame [`Effect`], a small
//! handle other modules can poke, or nothing when the effect is purely
//! event-driven. A missing element is an `Err` that the caller logs.
//!
//! [`Effect`]: crate::frame::Effect

pub mod clock;
pub mod diffusion;
pub mod flicker;
pub mod lightgrid;
pub mod marquee;
pub mod parallax;
pub mod platform;
pub mod resize;
pub mod robot;
pub mod shake;
pub mod starfield;
pub mod theme;

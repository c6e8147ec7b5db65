pub mod audio_map;
pub mod bus;
pub mod clock;
pub mod config;
pub mod constants;
pub mod diffusion;
pub mod error;
pub mod flicker;
pub mod intro;
pub mod keys;
pub mod lightgrid;
pub mod marquee;
pub mod parallax;
pub mod platform;
pub mod resize;
pub mod robot;
pub mod scroll;
pub mod spring;
pub mod starfield;
pub mod theme;
pub mod views;

pub static STARFIELD_WGSL: &str = include_str!("../shaders/starfield.wgsl");

pub use audio_map::*;
pub use bus::*;
pub use config::*;
pub use constants::*;
pub use error::FolioError;
pub use scroll::*;

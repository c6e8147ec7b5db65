// Shared tuning constants used by the web frontend.

// Scroll model
pub const SCROLL_MASS: f32 = 1.0;
pub const SCROLL_DRAG: f32 = 0.0009; // quadratic drag coefficient (per px/s)
pub const SCROLL_LINEAR_DRAG: f32 = 1.8; // linear drag per second
pub const SCROLL_IMPULSE_SCALE: f32 = 9.0; // px/s of speed per px of wheel delta
pub const SCROLL_MAX_IMPULSE: f32 = 1200.0; // cap per wheel event
pub const SCROLL_TOP_SPEED: f32 = 3000.0; // px/s that maps to normalized 1.0
pub const SCROLL_REST_THRESHOLD: f32 = 2.0; // below this the model snaps to rest

// Wheel delta modes (WheelEvent.deltaMode)
pub const DELTA_MODE_PIXEL: u32 = 0;
pub const DELTA_MODE_LINE: u32 = 1;
pub const DELTA_MODE_PAGE: u32 = 2;
pub const PX_PER_LINE: f32 = 16.0;
pub const PX_PER_PAGE: f32 = 800.0;

// Audio mapping
pub const CUTOFF_MIN_HZ: f32 = 180.0;
pub const CUTOFF_MAX_HZ: f32 = 6800.0;
pub const SUB_GAIN_MIN: f32 = 0.0;
pub const SUB_GAIN_MAX: f32 = 0.45;
pub const NOISE_GAIN_MIN: f32 = 0.02;
pub const NOISE_GAIN_MAX: f32 = 0.30;
pub const PITCH_MIN: f32 = 0.85;
pub const PITCH_MAX: f32 = 1.6;
pub const RAMP_SEC: f64 = 0.06; // short enough to track, long enough to avoid clicks
pub const MASTER_GAIN: f32 = 0.35;
pub const SUB_BASS_HZ: f32 = 42.0;
pub const EXP_RAMP_FLOOR: f32 = 1.0e-4;

// Typewriter clicks
pub const CLICK_BASE_HZ: f32 = 1800.0;
pub const CLICK_JITTER_HZ: f32 = 600.0;
pub const CLICK_DURATION_SEC: f32 = 0.025;
pub const CLICK_GAIN: f32 = 0.18;

// Intro timings (ms)
pub const INTRO_CHAR_DELAY_MS: u32 = 28;
pub const INTRO_LINE_PAUSE_MS: u32 = 220;
pub const INTRO_FLASH_MS: u32 = 140;
pub const INTRO_REVEAL_DELAY_MS: u32 = 360;

// Views
pub const WIDGET_STAGGER_MS: u32 = 70;
pub const VIEW_STAGGER_MAX_MS: u32 = 5_000;

// Starfield
pub const STAR_COUNT: usize = 900;
pub const STAR_COUNT_MAX: usize = 20_000;
pub const STAR_DEPTH: f32 = 1.0; // stars live in z ∈ (STAR_NEAR, STAR_DEPTH]
pub const STAR_NEAR: f32 = 0.02;
pub const STAR_BASE_SPEED: f32 = 0.04; // depth units per second at rest
pub const STAR_SCROLL_SPEED: f32 = 0.9; // extra depth units per second at full scroll
pub const STAR_SIZE_PX: f32 = 2.6;

// Misc effects
pub const RESIZE_QUIET_MS: f64 = 280.0;
pub const PARALLAX_SMOOTHING: f32 = 6.0; // 1/s
pub const PARALLAX_MAX_PX: f32 = 24.0;
pub const DIFFUSION_FRAMES: u32 = 36;
pub const MARQUEE_PX_PER_SEC: f32 = 60.0;
pub const BLINK_MIN_MS: f64 = 2200.0;
pub const BLINK_MAX_MS: f64 = 5200.0;
pub const BLINK_HOLD_MS: f64 = 120.0;

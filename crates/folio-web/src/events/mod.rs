pub mod keyboard;
pub mod pointer;
pub mod touch;
pub mod wheel;

pub use keyboard::{wire_global_keydown, KeyTargets};
pub use pointer::{wire_pointer, PointerState};
pub use touch::wire_touch;
pub use wheel::wire_wheel;

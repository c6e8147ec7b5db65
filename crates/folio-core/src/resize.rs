use crate::constants::RESIZE_QUIET_MS;

/// Shows an overlay while the window is being resized and hides it once
/// resize events have been quiet for `quiet_ms`.
#[derive(Clone, Debug)]
pub struct ResizeOverlay {
    quiet_ms: f64,
    last_event: Option<f64>,
    visible: bool,
}

impl Default for ResizeOverlay {
    fn default() -> Self {
        Self::new(RESIZE_QUIET_MS)
    }
}

impl ResizeOverlay {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms: quiet_ms.max(0.0),
            last_event: None,
            visible: false,
        }
    }

    pub fn quiet_ms(&self) -> f64 {
        self.quiet_ms
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` when this event made the overlay appear.
    pub fn on_resize(&mut self, now_ms: f64) -> bool {
        self.last_event = Some(now_ms);
        let appeared = !self.visible;
        self.visible = true;
        appeared
    }

    /// Returns `true` when the overlay should be hidden now.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.last_event {
            Some(t) if self.visible && now_ms - t >= self.quiet_ms => {
                self.visible = false;
                self.last_event = None;
                true
            }
            _ => false,
        }
    }
}

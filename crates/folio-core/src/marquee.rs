use crate::constants::MARQUEE_PX_PER_SEC;

#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeConfig {
    pub px_per_sec: f32,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            px_per_sec: MARQUEE_PX_PER_SEC,
        }
    }
}

/// Total copies of the content (original included) for a seamless loop.
///
/// The track scrolls by one content width per cycle, so it must stay at least
/// one container width wide after shifting: `content * copies >= container +
/// content`.
pub fn copies_needed(container_px: f32, content_px: f32) -> usize {
    if !(content_px.is_finite() && content_px > 0.0) || !container_px.is_finite() {
        return 2;
    }
    let n = (container_px.max(0.0) / content_px).ceil() as usize + 1;
    n.max(2)
}

/// Seconds for one content width to scroll past at `px_per_sec`.
pub fn duration_sec(content_px: f32, px_per_sec: f32) -> f32 {
    if px_per_sec <= 0.0 || !content_px.is_finite() {
        return 0.0;
    }
    content_px.max(0.0) / px_per_sec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_sizes_fall_back_to_two() {
        assert_eq!(copies_needed(1000.0, 0.0), 2);
        assert_eq!(copies_needed(f32::NAN, 100.0), 2);
        assert_eq!(copies_needed(50.0, 400.0), 2);
    }

    #[test]
    fn duration_scales_with_width() {
        assert_eq!(duration_sec(600.0, 60.0), 10.0);
        assert_eq!(duration_sec(600.0, 0.0), 0.0);
    }
}

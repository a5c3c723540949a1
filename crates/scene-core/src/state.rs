//! Interaction state shared by every scene on the page.
//!
//! The page owns exactly one [`SharedState`]; only the keyboard and range
//! input handlers write to it. Scenes never see it directly: each frame they
//! receive a [`FrameInput`] snapshot holding a copy.

use crate::constants::{DEFAULT_HATCH_ANGLE_DEG, TONE_TOGGLE_KEY};
use crate::pointer::PointerState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SharedState {
    pub tone_alt: bool,
    /// Hatch rotation in degrees. Always finite, otherwise unbounded.
    pub hatch_angle_deg: f64,
}

impl Default for SharedState {
    fn default() -> Self {
        Self {
            tone_alt: false,
            hatch_angle_deg: DEFAULT_HATCH_ANGLE_DEG,
        }
    }
}

#[inline]
pub fn is_tone_toggle_key(key: &str) -> bool {
    key.eq_ignore_ascii_case(TONE_TOGGLE_KEY)
}

impl SharedState {
    /// Applies a `keydown` key value. Returns true if the key was recognized.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if is_tone_toggle_key(key) {
            self.tone_alt = !self.tone_alt;
            true
        } else {
            false
        }
    }

    /// Applies the raw value of the hatch angle range control. Values that
    /// do not parse to a finite number leave the angle unchanged.
    pub fn set_hatch_angle_from_input(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<f64>() {
            Ok(deg) if deg.is_finite() => {
                self.hatch_angle_deg = deg;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn hatch_angle_rad(&self) -> f64 {
        self.hatch_angle_deg.to_radians()
    }
}

/// Everything a scene may read during one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub pointer: PointerState,
    pub shared: SharedState,
    /// Milliseconds since page start.
    pub time_ms: f64,
}

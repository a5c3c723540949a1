use crate::constants::{POINTER_MIN_ELAPSED_MS, POINTER_SPEED_SCALE};
use crate::surface::Rect;
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub down: bool,
    /// Normalized instantaneous speed, always in [0, 1].
    pub speed: f64,
}

impl PointerState {
    #[inline]
    pub fn pos(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Maps a client-space point into backing pixels of a surface whose on-screen
/// box is `rect` and whose backing buffer is `backing` pixels.
#[inline]
pub fn client_to_surface(client: DVec2, rect: Rect, backing: (u32, u32)) -> Option<DVec2> {
    if !rect.is_drawable() {
        return None;
    }
    let sx = backing.0 as f64 / rect.width;
    let sy = backing.1 as f64 / rect.height;
    Some((client - DVec2::new(rect.x, rect.y)) * DVec2::new(sx, sy))
}

/// Speed for a move of `distance` pixels over `elapsed_ms`, in [0, 1].
#[inline]
pub fn normalized_speed(distance: f64, elapsed_ms: f64) -> f64 {
    let dt = if elapsed_ms.is_finite() {
        elapsed_ms.max(POINTER_MIN_ELAPSED_MS)
    } else {
        POINTER_MIN_ELAPSED_MS
    };
    let speed = distance / (dt * POINTER_SPEED_SCALE);
    if speed.is_finite() {
        speed.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Per-surface pointer sampler. Owns the state the scenes read each frame.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    state: PointerState,
    last_sample_ms: f64,
}

impl PointerTracker {
    pub fn new(start: DVec2, now_ms: f64) -> Self {
        Self {
            state: PointerState {
                x: start.x,
                y: start.y,
                down: false,
                speed: 0.0,
            },
            last_sample_ms: now_ms,
        }
    }

    #[inline]
    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn on_move(&mut self, pos: DVec2, now_ms: f64) {
        let distance = pos.distance(self.state.pos());
        self.state.speed = normalized_speed(distance, now_ms - self.last_sample_ms);
        self.state.x = pos.x;
        self.state.y = pos.y;
        self.last_sample_ms = now_ms;
    }

    pub fn on_down(&mut self, pos: DVec2, now_ms: f64) {
        self.state.down = true;
        self.on_move(pos, now_ms);
    }

    pub fn on_up(&mut self) {
        self.state.down = false;
    }

    pub fn on_leave(&mut self) {
        self.state.down = false;
    }
}

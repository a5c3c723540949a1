use crate::color::{BLUE_400, SLATE_900, SLATE_950, VIOLET_400};
use crate::constants::*;
use crate::state::FrameInput;
use crate::surface::{Paint, Painter};
use glam::DVec2;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub pos: DVec2,
}

/// Newest-first history of pointer positions, drawn as shrinking discs over
/// a translucent fade so older frames smear out.
pub struct MirrorScene {
    trail: VecDeque<TrailPoint>,
}

impl MirrorScene {
    pub fn new(center: DVec2) -> Self {
        let trail = std::iter::repeat(TrailPoint { pos: center })
            .take(TRAIL_CAPACITY)
            .collect();
        Self { trail }
    }

    /// Index 0 is the newest sample.
    pub fn trail(&self) -> &VecDeque<TrailPoint> {
        &self.trail
    }

    pub fn push(&mut self, pos: DVec2) {
        self.trail.push_front(TrailPoint { pos });
        self.trail.truncate(TRAIL_CAPACITY);
    }

    #[inline]
    pub fn disc_radius(index: usize) -> f64 {
        TRAIL_HEAD_RADIUS - index as f64 * TRAIL_RADIUS_STEP
    }

    #[inline]
    pub fn disc_alpha(index: usize, len: usize) -> f64 {
        (1.0 - index as f64 / len.max(1) as f64) * TRAIL_MAX_ALPHA
    }

    pub fn draw<P: Painter>(&mut self, painter: &mut P, input: &FrameInput) {
        let tone_alt = input.shared.tone_alt;
        let fade = if tone_alt { SLATE_950 } else { SLATE_900 };
        painter.fill_rect(
            painter.bounds(),
            &Paint::Solid(fade.with_alpha(MIRROR_FADE_ALPHA)),
        );

        self.push(input.pointer.pos());

        let base = if tone_alt { BLUE_400 } else { VIOLET_400 };
        let len = self.trail.len();
        for (i, p) in self.trail.iter().enumerate() {
            let radius = Self::disc_radius(i);
            if radius <= 0.0 {
                continue;
            }
            painter.fill_circle(p.pos, radius, base.with_alpha(Self::disc_alpha(i, len)));
        }
    }
}

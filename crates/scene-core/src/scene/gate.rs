use crate::color::{Color, SLATE_400, TEAL_300, VIOLET_400};
use crate::constants::*;
use crate::error::SceneError;
use crate::state::{FrameInput, SharedState};
use crate::surface::{Paint, Painter, Rect};
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Hue-drifting backdrop with a rotatable hatch and a border raster that is
/// painted once and composited last every frame.
pub struct GateScene<P> {
    edges: P,
}

#[inline]
pub fn gate_hue(time_ms: f64) -> f64 {
    (time_ms * GATE_HUE_RATE + GATE_HUE_OFFSET).rem_euclid(360.0)
}

#[inline]
pub fn hatch_rotation(shared: &SharedState) -> f64 {
    shared.hatch_angle_rad()
}

impl<P: Painter> GateScene<P> {
    pub fn new(surface: &P) -> Result<Self, SceneError> {
        let (w, h) = surface.size();
        let mut edges = surface.create_layer(w, h)?;
        let inset = GATE_EDGE_INSET;
        let (iw, ih) = (w as f64 - 2.0 * inset, h as f64 - 2.0 * inset);
        edges.stroke_rect(
            Rect::new(inset, inset, iw, ih),
            SLATE_400.with_alpha(0.35),
            GATE_EDGE_WIDTH,
        );
        Ok(Self { edges })
    }

    pub fn edges(&self) -> &P {
        &self.edges
    }

    fn draw_hatch(painter: &mut P, angle: f64) {
        let (w, h) = painter.size();
        let (w, h) = (w as f64, h as f64);
        let center = painter.center();
        let color = VIOLET_400.with_alpha(0.6);
        painter.with_transform(center, angle, |p| {
            let mut x = -w;
            while x < w {
                p.stroke_line(DVec2::new(x, -h), DVec2::new(x, h), color, 1.0);
                x += GATE_HATCH_PITCH;
            }
        });
    }

    pub fn draw<R: Rng + ?Sized>(&mut self, painter: &mut P, input: &FrameInput, rng: &mut R) {
        let hue = gate_hue(input.time_ms);
        painter.fill_rect(painter.bounds(), &Paint::Solid(Color::hsl(hue, 40.0, 10.0)));

        Self::draw_hatch(painter, hatch_rotation(&input.shared));

        let pointer = input.pointer;
        if pointer.down {
            let spark = Paint::Solid(TEAL_300.with_alpha(0.7));
            for _ in 0..GATE_SPARK_COUNT {
                let a = rng.gen::<f64>() * TAU;
                let r = rng.gen::<f64>() * GATE_SPARK_RADIUS;
                let at = pointer.pos() + DVec2::from_angle(a) * r;
                painter.fill_rect(
                    Rect::new(at.x, at.y, GATE_SPARK_SIZE, GATE_SPARK_SIZE),
                    &spark,
                );
            }
        }

        painter.draw_layer(&self.edges);
    }
}

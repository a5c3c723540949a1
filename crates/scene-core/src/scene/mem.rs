use crate::color::{Color, TEAL_300, WHITE};
use crate::constants::*;
use crate::state::FrameInput;
use crate::surface::{Font, Paint, Painter, Rect, TextAnchor};
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineParticle {
    pub origin: DVec2,
    /// Remaining life in (0, 1] while the particle exists.
    pub life: f64,
    pub length: f64,
    pub angle: f64,
}

impl LineParticle {
    pub fn tip(&self) -> DVec2 {
        self.origin + DVec2::from_angle(self.angle) * self.length
    }
}

/// Short-lived strokes spawned while dragging, over a slowly swinging
/// gradient band. Stray "1" glyphs thicken with pointer speed.
pub struct MemScene {
    phase: f64,
    particles: Vec<LineParticle>,
    glyph_font: Font,
}

impl Default for MemScene {
    fn default() -> Self {
        Self::new()
    }
}

impl MemScene {
    pub fn new() -> Self {
        Self {
            phase: 0.0,
            particles: Vec::new(),
            glyph_font: Font::canvas_default(),
        }
    }

    pub fn particles(&self) -> &[LineParticle] {
        &self.particles
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    #[inline]
    pub fn band_hue(phase: f64, tone_alt: bool) -> f64 {
        let base = if tone_alt {
            MEM_HUE_BASE_ALT
        } else {
            MEM_HUE_BASE
        };
        phase.sin() * MEM_HUE_SWING + base
    }

    /// 1 glyph at rest, 9 at full speed.
    #[inline]
    pub fn glyph_count(speed: f64) -> usize {
        (1.0 + speed.clamp(0.0, 1.0) * MEM_MAX_EXTRA_GLYPHS).floor() as usize
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, origin: DVec2, rng: &mut R) {
        self.particles.push(LineParticle {
            origin,
            life: 1.0,
            length: rng.gen_range(MEM_MIN_LENGTH..MEM_MAX_LENGTH),
            angle: rng.gen::<f64>() * TAU,
        });
    }

    fn draw_band<P: Painter>(&mut self, painter: &mut P, tone_alt: bool) {
        self.phase += MEM_PHASE_STEP;
        let hue = Self::band_hue(self.phase, tone_alt);
        let (w, _) = painter.size();
        let band = Paint::LinearGradient {
            start: DVec2::ZERO,
            end: DVec2::new(w as f64, 0.0),
            stops: [
                (0.0, Color::hsl(hue, 70.0, 12.0)),
                (1.0, Color::hsl(hue + MEM_HUE_SPREAD, 70.0, 8.0)),
            ],
        };
        painter.fill_rect(painter.bounds(), &band);
    }

    /// Draws every live particle, then ages it; dead ones are dropped in the
    /// same pass.
    fn step_particles<P: Painter>(&mut self, painter: &mut P) {
        for i in (0..self.particles.len()).rev() {
            let p = &mut self.particles[i];
            painter.stroke_line(p.origin, p.tip(), WHITE.with_alpha(p.life), 1.0);
            p.life -= MEM_LIFE_STEP;
            if p.life <= 0.0 {
                self.particles.remove(i);
            }
        }
    }

    fn draw_shatter<P: Painter, R: Rng + ?Sized>(
        &self,
        painter: &mut P,
        center: DVec2,
        rng: &mut R,
    ) {
        let paint = Paint::Solid(TEAL_300.with_alpha(0.6));
        for k in 0..MEM_SHATTER_POINTS {
            let at = center + DVec2::from_angle(k as f64) * MEM_SHATTER_RADIUS;
            let w = 2.0 + rng.gen::<f64>() * 2.0;
            let h = 2.0 + rng.gen::<f64>() * 2.0;
            painter.fill_rect(Rect::new(at.x, at.y, w, h), &paint);
        }
    }

    pub fn draw<P: Painter, R: Rng + ?Sized>(
        &mut self,
        painter: &mut P,
        input: &FrameInput,
        rng: &mut R,
    ) {
        let tone_alt = input.shared.tone_alt;
        let pointer = input.pointer;
        self.draw_band(painter, tone_alt);

        if pointer.down {
            self.spawn(pointer.pos(), rng);
        }
        self.step_particles(painter);

        let (w, h) = painter.size();
        painter.set_font(&self.glyph_font);
        let glyph = WHITE.with_alpha(0.6);
        for _ in 0..Self::glyph_count(pointer.speed) {
            let at = DVec2::new(
                rng.gen::<f64>() * w as f64,
                rng.gen::<f64>() * h as f64,
            );
            painter.fill_text("1", at, glyph, TextAnchor::Start);
        }

        if tone_alt && rng.gen::<f64>() < MEM_SHATTER_PROBABILITY {
            self.draw_shatter(painter, pointer.pos(), rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_count_spans_one_to_nine() {
        assert_eq!(MemScene::glyph_count(0.0), 1);
        assert_eq!(MemScene::glyph_count(0.5), 5);
        assert_eq!(MemScene::glyph_count(1.0), 9);
    }

    #[test]
    fn band_hue_swings_around_tone_base() {
        assert_eq!(MemScene::band_hue(0.0, false), 300.0);
        assert_eq!(MemScene::band_hue(0.0, true), 200.0);
        let peak = MemScene::band_hue(std::f64::consts::FRAC_PI_2, false);
        assert!((peak - 330.0).abs() < 1e-9);
    }
}

use crate::color::{GRAY_900, SLATE_300};
use crate::constants::*;
use crate::error::SceneError;
use crate::state::FrameInput;
use crate::surface::{Font, Paint, Painter, Rect};
use crate::text::layout_lines;
use glam::DVec2;
use rand::Rng;

/// Text hidden under an opaque mask. Dragging erodes the mask; random
/// re-darkening grows it back. There is no revealed end state.
pub struct SeScene<P> {
    mask: P,
    text: P,
}

impl<P: Painter> SeScene<P> {
    pub fn new(surface: &P) -> Result<Self, SceneError> {
        let (w, h) = surface.size();
        let mut text = surface.create_layer(w, h)?;
        let mut mask = surface.create_layer(w, h)?;

        let (wf, hf) = (w as f64, h as f64);
        let mut font = Font::new(
            700,
            (hf * SE_FONT_HEIGHT_RATIO).floor() as u32,
            "Inter, sans-serif",
        );
        layout_lines(
            &mut text,
            &SE_TEXT_LINES,
            DVec2::new(wf * 0.5, hf * SE_TEXT_CENTER_Y_RATIO),
            wf * SE_TEXT_MAX_WIDTH_RATIO,
            hf * SE_LINE_HEIGHT_RATIO,
            &mut font,
            SLATE_300,
        );

        mask.fill_rect(Rect::from_size(w, h), &Paint::Solid(GRAY_900));
        Ok(Self { mask, text })
    }

    pub fn mask(&self) -> &P {
        &self.mask
    }

    pub fn text(&self) -> &P {
        &self.text
    }

    /// Lays a low-alpha film over the whole mask.
    pub fn redarken(&mut self) {
        let bounds = self.mask.bounds();
        let film = Paint::Solid(GRAY_900.with_alpha(SE_REDARKEN_ALPHA));
        self.mask.fill_rect(bounds, &film);
    }

    #[inline]
    pub fn erase_radius(speed: f64) -> f64 {
        SE_ERASE_BASE_RADIUS + speed * SE_ERASE_SPEED_RADIUS
    }

    pub fn draw<R: Rng + ?Sized>(&mut self, painter: &mut P, input: &FrameInput, rng: &mut R) {
        if rng.gen::<f64>() < SE_REDARKEN_PROBABILITY {
            self.redarken();
        }

        let pointer = input.pointer;
        if pointer.down {
            let radius = Self::erase_radius(pointer.speed);
            self.mask.erase_circle(pointer.pos(), radius);
        }

        painter.clear();
        painter.draw_layer(&self.text);
        painter.draw_layer(&self.mask);

        let (w, h) = painter.size();
        let speck = Paint::Solid(SLATE_300.with_alpha(0.05));
        for _ in 0..SE_SPECK_COUNT {
            let x = rng.gen::<f64>() * w as f64;
            let y = rng.gen::<f64>() * h as f64;
            painter.fill_rect(Rect::new(x, y, 1.0, 1.0), &speck);
        }
    }
}

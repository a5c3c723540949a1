use crate::constants::CONTEXT_2D;
use glam::DVec2;
use scene_core::{Color, Font, Paint, Painter, Rect, SceneError, TextAnchor};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Painter` over a canvas element and its 2D context. Offscreen layers are
/// detached canvases of the same kind.
#[derive(Clone)]
pub struct CanvasPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

fn js_err(e: impl std::fmt::Debug) -> SceneError {
    SceneError::Surface(format!("{:?}", e))
}

impl CanvasPainter {
    pub fn new(canvas: web::HtmlCanvasElement) -> Result<Self, SceneError> {
        let ctx = canvas
            .get_context(CONTEXT_2D)
            .map_err(js_err)?
            .ok_or_else(|| SceneError::Surface("2d context unavailable".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(js_err)?;
        Ok(Self { canvas, ctx })
    }

    fn apply_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.to_css()),
            Paint::LinearGradient { start, end, stops } => {
                let ctx = &self.ctx;
                let grad = ctx.create_linear_gradient(start.x, start.y, end.x, end.y);
                for (offset, color) in stops {
                    _ = grad.add_color_stop(*offset, &color.to_css());
                }
                ctx.set_fill_style_canvas_gradient(&grad);
            }
        }
    }
}

impl Painter for CanvasPainter {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn create_layer(&self, width: u32, height: u32) -> Result<Self, SceneError> {
        let document = self
            .canvas
            .owner_document()
            .ok_or_else(|| SceneError::Surface("canvas has no document".into()))?;
        let layer = document
            .create_element("canvas")
            .map_err(js_err)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(js_err)?;
        layer.set_width(width);
        layer.set_height(height);
        Self::new(layer)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.apply_fill(paint);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&color.to_css());
        ctx.set_line_width(line_width);
        ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn erase_circle(&mut self, center: DVec2, radius: f64) {
        _ = self.ctx.set_global_composite_operation("destination-out");
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
        _ = self.ctx.set_global_composite_operation("source-over");
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Color, line_width: f64) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn set_font(&mut self, font: &Font) {
        self.ctx.set_font(&font.to_css());
    }

    fn measure_text(&self, text: &str) -> f64 {
        self.ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or(0.0)
    }

    fn fill_text(&mut self, text: &str, at: DVec2, color: Color, anchor: TextAnchor) {
        let (align, baseline) = match anchor {
            TextAnchor::Start => ("start", "alphabetic"),
            TextAnchor::Center => ("center", "middle"),
        };
        self.ctx.set_text_align(align);
        self.ctx.set_text_baseline(baseline);
        self.ctx.set_fill_style_str(&color.to_css());
        _ = self.ctx.fill_text(text, at.x, at.y);
    }

    fn draw_layer(&mut self, layer: &Self) {
        _ = self
            .ctx
            .draw_image_with_html_canvas_element(&layer.canvas, 0.0, 0.0);
    }

    fn with_transform(&mut self, translate: DVec2, rotate: f64, draw: impl FnOnce(&mut Self)) {
        self.ctx.save();
        _ = self.ctx.translate(translate.x, translate.y);
        _ = self.ctx.rotate(rotate);
        draw(self);
        self.ctx.restore();
    }
}

// Recording painter shared by the host-side scene tests.
#![allow(dead_code)]

use glam::DVec2;
use scene_core::{
    Color, Font, FrameInput, Paint, Painter, PointerState, Rect, SceneError, SharedState,
    TextAnchor,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    FillRect(Rect, Paint),
    StrokeRect(Rect, Color, f64),
    FillCircle(DVec2, f64, Color),
    EraseCircle(DVec2, f64),
    Line(DVec2, DVec2, Color, f64),
    SetFont(Font),
    FillText(String, DVec2, Color, TextAnchor),
    /// Number of ops the composited layer held at the time.
    DrawLayer(usize),
    PushTransform(DVec2, f64),
    PopTransform,
}

#[derive(Clone, Debug)]
pub struct RecordingPainter {
    pub width: u32,
    pub height: u32,
    pub font: Font,
    pub ops: Vec<Op>,
}

impl RecordingPainter {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            font: Font::canvas_default(),
            ops: Vec::new(),
        }
    }

    pub fn take_ops(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }

    pub fn fill_rects(&self) -> Vec<(Rect, Paint)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillRect(r, p) => Some((*r, p.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Painter for RecordingPainter {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn create_layer(&self, width: u32, height: u32) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::Surface("empty layer".into()));
        }
        Ok(Self::new(width, height))
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.ops.push(Op::FillRect(rect, paint.clone()));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64) {
        self.ops.push(Op::StrokeRect(rect, color, line_width));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.ops.push(Op::FillCircle(center, radius, color));
    }

    fn erase_circle(&mut self, center: DVec2, radius: f64) {
        self.ops.push(Op::EraseCircle(center, radius));
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Color, line_width: f64) {
        self.ops.push(Op::Line(from, to, color, line_width));
    }

    fn set_font(&mut self, font: &Font) {
        self.font = font.clone();
        self.ops.push(Op::SetFont(font.clone()));
    }

    fn measure_text(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.font.size_px as f64 * 0.6
    }

    fn fill_text(&mut self, text: &str, at: DVec2, color: Color, anchor: TextAnchor) {
        let text = text.to_string();
        self.ops.push(Op::FillText(text, at, color, anchor));
    }

    fn draw_layer(&mut self, layer: &Self) {
        self.ops.push(Op::DrawLayer(layer.ops.len()));
    }

    fn with_transform(&mut self, translate: DVec2, rotate: f64, draw: impl FnOnce(&mut Self)) {
        self.ops.push(Op::PushTransform(translate, rotate));
        draw(self);
        self.ops.push(Op::PopTransform);
    }
}

pub fn frame(pointer: PointerState, shared: SharedState, time_ms: f64) -> FrameInput {
    FrameInput {
        pointer,
        shared,
        time_ms,
    }
}

/// Default shared state at `t = 0`.
pub fn frame_of(pointer: PointerState) -> FrameInput {
    frame(pointer, SharedState::default(), 0.0)
}

pub fn pointer_at(x: f64, y: f64, down: bool, speed: f64) -> PointerState {
    PointerState { x, y, down, speed }
}

pub fn is_solid_fill(op: &Op, color: Color) -> bool {
    matches!(op, Op::FillRect(_, Paint::Solid(c)) if *c == color)
}

impl RecordingPainter {
    /// Sets the active font without recording an op.
    pub fn set_font_for_test(&mut self, font: &Font) {
        self.font = font.clone();
    }
}

//! Drawing seam between the scenes and whatever raster they end up on.
//!
//! Scenes only ever talk to a [`Painter`]. The web frontend implements it on
//! top of `CanvasRenderingContext2d`; offscreen layers (the SE mask, the GATE
//! edge raster) are just more painters of the same type, created through
//! [`Painter::create_layer`] and owned by the scene that needs them.

use crate::color::Color;
use crate::error::SceneError;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f64, height as f64)
    }

    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient {
        start: DVec2,
        end: DVec2,
        stops: [(f32, Color); 2],
    },
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

/// A canvas font shorthand. Size is whole pixels so it can be shrunk in steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Font {
    pub weight: u16,
    pub size_px: u32,
    pub family: String,
}

impl Font {
    pub fn new(weight: u16, size_px: u32, family: impl Into<String>) -> Self {
        Self {
            weight,
            size_px,
            family: family.into(),
        }
    }

    /// The 2D canvas default, `10px sans-serif`.
    pub fn canvas_default() -> Self {
        Self::new(400, 10, "sans-serif")
    }

    pub fn to_css(&self) -> String {
        if self.weight == 400 {
            format!("{}px {}", self.size_px, self.family)
        } else {
            format!("{} {}px {}", self.weight, self.size_px, self.family)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// `textAlign = start`, `textBaseline = alphabetic`
    Start,
    /// `textAlign = center`, `textBaseline = middle`
    Center,
}

pub trait Painter: Sized {
    /// Backing size in pixels.
    fn size(&self) -> (u32, u32);

    /// Allocates an offscreen raster of the same kind.
    fn create_layer(&self, width: u32, height: u32) -> Result<Self, SceneError>;

    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);
    /// Punches a fully transparent disc (`destination-out`).
    fn erase_circle(&mut self, center: DVec2, radius: f64);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Color, line_width: f64);

    fn set_font(&mut self, font: &Font);
    /// Width of `text` in the active font.
    fn measure_text(&self, text: &str) -> f64;
    fn fill_text(&mut self, text: &str, at: DVec2, color: Color, anchor: TextAnchor);

    /// Composites `layer` at the origin with `source-over`.
    fn draw_layer(&mut self, layer: &Self);

    /// Runs `draw` with the origin moved to `translate` and rotated by
    /// `rotate` radians; the previous transform is restored afterwards.
    fn with_transform(&mut self, translate: DVec2, rotate: f64, draw: impl FnOnce(&mut Self));

    fn center(&self) -> DVec2 {
        let (w, h) = self.size();
        DVec2::new(w as f64 / 2.0, h as f64 / 2.0)
    }

    fn bounds(&self) -> Rect {
        let (w, h) = self.size();
        Rect::from_size(w, h)
    }
}

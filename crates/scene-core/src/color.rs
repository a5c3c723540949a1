use std::fmt;

/// A CSS color as understood by the 2D canvas `fillStyle`/`strokeStyle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    Hsl { h: f64, s: f64, l: f64 },
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// `s` and `l` are percentages.
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Color::Hsl { h, s, l }
    }

    /// Replaces the alpha of an rgba color; hsl colors are always opaque.
    pub fn with_alpha(self, a: f64) -> Self {
        match self {
            Color::Rgba { r, g, b, .. } => Color::Rgba { r, g, b, a },
            hsl => hsl,
        }
    }

    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgba { a, .. } => *a,
            Color::Hsl { .. } => 1.0,
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgba { r, g, b, a } if *a >= 1.0 => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({},{},{},{})", r, g, b, a),
            Color::Hsl { h, s, l } => write!(f, "hsl({}, {}%, {}%)", h, s, l),
        }
    }
}

// Palette
pub const SLATE_300: Color = Color::rgb(203, 213, 225); // #cbd5e1
pub const GRAY_900: Color = Color::rgb(17, 24, 39); // #111827
pub const SLATE_900: Color = Color::rgb(15, 23, 42);
pub const SLATE_950: Color = Color::rgb(2, 6, 23);
pub const SLATE_400: Color = Color::rgb(148, 163, 184);
pub const VIOLET_400: Color = Color::rgb(167, 139, 250);
pub const BLUE_400: Color = Color::rgb(96, 165, 250);
pub const TEAL_300: Color = Color::rgb(94, 234, 212);
pub const WHITE: Color = Color::rgb(255, 255, 255);

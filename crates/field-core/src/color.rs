//! Colors as understood by a 2D canvas.

use std::fmt;

/// 8-bit RGB with a floating-point alpha, formatted as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Colors used by the field renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub backdrop_inner: Rgba,
    pub backdrop_outer: Rgba,
    pub link: Rgba,
    pub glow: Rgba,
    pub core: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            backdrop_inner: Rgba::new(35, 25, 80, 0.75), // violet
            backdrop_outer: Rgba::new(2, 3, 10, 1.0),    // near-black
            link: Rgba::new(123, 92, 255, 1.0),
            glow: Rgba::new(54, 226, 179, 0.85), // teal
            core: Rgba::new(2, 10, 18, 0.9),
        }
    }
}

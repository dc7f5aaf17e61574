//! Drawing contract between the simulator and its host.
//!
//! The simulator only ever talks to a [`Surface`]; the web front end backs it
//! with a `CanvasRenderingContext2d` and tests back it with a recorder.

use crate::color::Rgba;
use glam::DVec2;

/// A radial gradient between two circles, with color stops in `0.0..=1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: DVec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub stops: Vec<(f64, Rgba)>,
}

impl RadialGradient {
    /// Gradient from `center` out to `radius`, fading `from` into `to`.
    pub fn two_stop(center: DVec2, radius: f64, from: Rgba, to: Rgba) -> Self {
        Self {
            center,
            inner_radius: 0.0,
            outer_radius: radius,
            stops: vec![(0.0, from), (1.0, to)],
        }
    }
}

pub trait Surface {
    /// Clear the rectangle `(0, 0, width, height)`.
    fn clear(&mut self, width: f64, height: f64);
    fn set_fill_color(&mut self, color: Rgba);
    fn set_fill_gradient(&mut self, gradient: &RadialGradient);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_stroke_color(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);
    /// Stroke a single segment with the current stroke style.
    fn line(&mut self, from: DVec2, to: DVec2);
    /// Fill a full circle with the current fill style.
    fn fill_circle(&mut self, center: DVec2, radius: f64);
}

//! Spring-smoothed 3D tilt for hoverable cards.
//!
//! Each frame the current pose moves a fixed fraction of the way toward the
//! target pose (exponential smoothing). The host keeps requesting frames
//! while [`TiltState::step`] returns `true`.

use crate::constants::*;
use crate::error::ConfigError;
use crate::params::{positive, unit_interval};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Rotation about X, degrees.
    pub rx: f64,
    /// Rotation about Y, degrees.
    pub ry: f64,
    pub scale: f64,
}

impl Pose {
    pub const NEUTRAL: Pose = Pose {
        rx: 0.0,
        ry: 0.0,
        scale: 1.0,
    };
}

impl Default for Pose {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TiltParams {
    pub max_rotation_deg: f64,
    pub hover_scale: f64,
    pub easing: f64,
    pub rotation_epsilon_deg: f64,
    pub scale_epsilon: f64,
    pub perspective_px: f64,
}

impl Default for TiltParams {
    fn default() -> Self {
        Self {
            max_rotation_deg: TILT_MAX_ROTATION_DEG,
            hover_scale: TILT_HOVER_SCALE,
            easing: TILT_EASING,
            rotation_epsilon_deg: TILT_ROTATION_EPSILON_DEG,
            scale_epsilon: TILT_SCALE_EPSILON,
            perspective_px: TILT_PERSPECTIVE_PX,
        }
    }
}

impl TiltParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("easing", self.easing)?;
        unit_interval("easing", self.easing)?;
        positive("hover_scale", self.hover_scale)?;
        positive("rotation_epsilon_deg", self.rotation_epsilon_deg)?;
        positive("scale_epsilon", self.scale_epsilon)?;
        positive("perspective_px", self.perspective_px)?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct TiltState {
    pub params: TiltParams,
    pub current: Pose,
    pub target: Pose,
}

impl TiltState {
    pub fn new(params: TiltParams) -> Self {
        Self {
            params,
            current: Pose::NEUTRAL,
            target: Pose::NEUTRAL,
        }
    }

    /// Aim at the pose for a pointer at `(x, y)` inside a `width × height`
    /// element, with offsets measured from its top-left corner.
    pub fn pointer_move(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (nx, ny) = normalized_offset(x, y, width, height);
        let max = self.params.max_rotation_deg;
        self.target = Pose {
            rx: -ny * max,
            ry: nx * max,
            scale: self.params.hover_scale,
        };
    }

    pub fn pointer_leave(&mut self) {
        self.target = Pose::NEUTRAL;
    }

    /// Ease one frame toward the target. Returns `true` while not yet settled.
    pub fn step(&mut self) -> bool {
        let k = self.params.easing;
        let (c, t) = (&mut self.current, &self.target);
        c.rx += (t.rx - c.rx) * k;
        c.ry += (t.ry - c.ry) * k;
        c.scale += (t.scale - c.scale) * k;
        !self.is_settled()
    }

    pub fn is_settled(&self) -> bool {
        let (c, t, p) = (&self.current, &self.target, &self.params);
        (t.rx - c.rx).abs() < p.rotation_epsilon_deg
            && (t.ry - c.ry).abs() < p.rotation_epsilon_deg
            && (t.scale - c.scale).abs() < p.scale_epsilon
    }

    /// CSS `transform` value for the current pose.
    pub fn transform_css(&self) -> String {
        let Pose { rx, ry, scale } = self.current;
        format!(
            "perspective({}px) rotateX({rx}deg) rotateY({ry}deg) scale3d({scale}, {scale}, {scale})",
            self.params.perspective_px
        )
    }
}

/// Pointer offset from the element center, in `-1.0..=1.0` per axis when
/// the pointer is inside. A degenerate element maps to the center.
#[inline]
pub fn normalized_offset(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let nx = if cx > 0.0 { (x - cx) / cx } else { 0.0 };
    let ny = if cy > 0.0 { (y - cy) / cy } else { 0.0 };
    (nx, ny)
}

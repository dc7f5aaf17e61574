use glam::DVec2;
use rand::Rng;

use crate::params::FieldParams;

/// A single particle. `r` is fixed for the node's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub pos: DVec2,
    pub vel: DVec2,
    pub r: f64,
}

impl Node {
    /// Sample a node uniformly inside `[0, width) × [0, height)`.
    pub fn sample<R: Rng>(rng: &mut R, width: f64, height: f64, params: &FieldParams) -> Self {
        let pos = DVec2::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height);
        let vel = DVec2::new(
            (rng.gen::<f64>() - 0.5) * params.speed_scale,
            (rng.gen::<f64>() - 0.5) * params.speed_scale,
        );
        // half-open: r < radius_max
        let r = if params.radius_min < params.radius_max {
            rng.gen_range(params.radius_min..params.radius_max)
        } else {
            params.radius_min
        };
        Self { pos, vel, r }
    }

    #[inline]
    pub fn glow_radius(&self, params: &FieldParams) -> f64 {
        self.r * params.glow_radius_multiplier
    }
}

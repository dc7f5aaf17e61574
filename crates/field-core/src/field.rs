//! The particle field: a fixed population of drifting nodes, linked by
//! proximity and redrawn every tick.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{BACKDROP_CENTER, BACKDROP_RADIUS_OF_WIDTH};
use crate::node::Node;
use crate::params::FieldParams;
use crate::surface::{RadialGradient, Surface};

/// Pixel size of the drawing surface. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Negative, NaN and infinite extents clamp to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: clamp_extent(width),
            height: clamp_extent(height),
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[inline]
fn clamp_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// A pair of nodes close enough to be connected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub alpha: f64,
}

/// Number of nodes for a surface: one per `area_per_node`, capped at `max_nodes`.
pub fn population_count(dims: Dimensions, params: &FieldParams) -> usize {
    let n = (dims.area() / params.area_per_node).floor();
    // float -> usize saturates, so huge surfaces still hit the cap
    (n as usize).min(params.max_nodes)
}

/// Stroke alpha for a link of the given length; 0 at and beyond `link_distance`.
pub fn link_alpha(distance: f64, params: &FieldParams) -> f64 {
    let closeness = (1.0 - distance / params.link_distance).max(0.0);
    closeness * params.link_alpha_max * params.link_alpha_scale
}

/// Soft wrap of one coordinate into `[-margin, extent + margin]`.
#[inline]
pub fn wrap_coord(v: f64, extent: f64, margin: f64) -> f64 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}

pub struct Field<R = StdRng> {
    params: FieldParams,
    dims: Dimensions,
    nodes: Vec<Node>,
    rng: R,
    state: RunState,
    ticks: u64,
}

impl Field<StdRng> {
    pub fn seeded(params: FieldParams, seed: u64) -> Self {
        Self::new(params, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(params: FieldParams) -> Self {
        Self::new(params, StdRng::from_entropy())
    }
}

impl<R: Rng> Field<R> {
    /// An empty, running field. Call [`Field::initialize`] to populate it.
    pub fn new(params: FieldParams, rng: R) -> Self {
        Self {
            params,
            dims: Dimensions::default(),
            nodes: Vec::new(),
            rng,
            state: RunState::Running,
            ticks: 0,
        }
    }

    /// Set the surface size and replace every node with a fresh sample.
    pub fn initialize(&mut self, width: f64, height: f64) {
        self.dims = Dimensions::new(width, height);
        let count = population_count(self.dims, &self.params);
        let Dimensions { width, height } = self.dims;
        self.nodes.clear();
        self.nodes.reserve(count);
        for _ in 0..count {
            let node = Node::sample(&mut self.rng, width, height, &self.params);
            self.nodes.push(node);
        }
        log::debug!("[field] {width}x{height} -> {count} nodes");
    }

    /// The surface changed size. Nodes are resampled, not carried over.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.initialize(width, height);
    }

    /// Integrate one tick and wrap nodes that drifted past the margin.
    pub fn advance(&mut self) {
        let Dimensions { width, height } = self.dims;
        let margin = self.params.wrap_margin;
        for n in &mut self.nodes {
            n.pos += n.vel;
            n.pos.x = wrap_coord(n.pos.x, width, margin);
            n.pos.y = wrap_coord(n.pos.y, height, margin);
        }
    }

    /// Advance and draw one frame. Returns whether another frame should be
    /// scheduled; a stopped field draws nothing.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.state == RunState::Stopped {
            return false;
        }
        self.advance();
        self.render(surface);
        self.ticks += 1;
        self.is_running()
    }

    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            log::info!("[field] stopped after {} ticks", self.ticks);
        }
        self.state = RunState::Stopped;
    }

    pub fn resume(&mut self) {
        self.state = RunState::Running;
    }
}

impl<R> Field<R> {
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let Dimensions { width, height } = self.dims;
        let params = &self.params;
        let palette = &params.palette;

        surface.clear(width, height);
        let backdrop = RadialGradient::two_stop(
            DVec2::new(width * BACKDROP_CENTER[0], height * BACKDROP_CENTER[1]),
            width * BACKDROP_RADIUS_OF_WIDTH,
            palette.backdrop_inner,
            palette.backdrop_outer,
        );
        surface.set_fill_gradient(&backdrop);
        surface.fill_rect(0.0, 0.0, width, height);

        surface.set_line_width(params.link_line_width);
        for link in self.links() {
            surface.set_stroke_color(palette.link.with_alpha(link.alpha));
            surface.line(self.nodes[link.a].pos, self.nodes[link.b].pos);
        }

        let glow_fade = palette.glow.with_alpha(0.0);
        for n in &self.nodes {
            let glow_r = n.glow_radius(params);
            let glow = RadialGradient::two_stop(n.pos, glow_r, palette.glow, glow_fade);
            surface.set_fill_gradient(&glow);
            surface.fill_circle(n.pos, glow_r);

            surface.set_fill_color(palette.core);
            surface.fill_circle(n.pos, n.r);
        }
    }

    /// Every pair `a < b` closer than `link_distance`, in scan order.
    ///
    /// This is a full pairwise scan; with the population capped at 90 it is
    /// at most 4005 distance checks per frame.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let nodes = &self.nodes;
        let params = &self.params;
        nodes.iter().enumerate().flat_map(move |(i, a)| {
            nodes[i + 1..]
                .iter()
                .enumerate()
                .filter_map(move |(k, b)| {
                    let distance = a.pos.distance(b.pos);
                    (distance < params.link_distance).then(|| Link {
                        a: i,
                        b: i + 1 + k,
                        distance,
                        alpha: link_alpha(distance, params),
                    })
                })
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable view of the population. The slice cannot grow or shrink.
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

// Tuning constants for the background field and card tilt.
//
// The values are visual taste, not physics. `FieldParams` and `TiltParams`
// take them as defaults.

// Population density
pub const MAX_NODES: usize = 90;
pub const AREA_PER_NODE: f64 = 14_000.0; // px² of surface per node
pub const MAX_NODES_LIMIT: usize = 500; // hard ceiling for overrides; links are O(n²)

// Motion
pub const SPEED_SCALE: f64 = 0.3; // full width of the velocity range, px/tick
pub const WRAP_MARGIN: f64 = 50.0; // off-screen buffer before a node wraps

// Node sizing
pub const RADIUS_MIN: f64 = 1.4;
pub const RADIUS_MAX: f64 = 3.0;
pub const GLOW_RADIUS_MULTIPLIER: f64 = 3.0;

// Links
pub const LINK_DISTANCE: f64 = 150.0;
pub const LINK_ALPHA_MAX: f64 = 0.6;
pub const LINK_ALPHA_SCALE: f64 = 0.7;
pub const LINK_LINE_WIDTH: f64 = 0.6;

// Background gradient geometry, as fractions of the surface size
pub const BACKDROP_CENTER: [f64; 2] = [0.1, 0.0];
pub const BACKDROP_RADIUS_OF_WIDTH: f64 = 0.9;

// Card tilt
pub const TILT_MAX_ROTATION_DEG: f64 = 12.0;
pub const TILT_HOVER_SCALE: f64 = 1.03;
pub const TILT_EASING: f64 = 0.14; // fraction of remaining distance per frame
pub const TILT_ROTATION_EPSILON_DEG: f64 = 0.01;
pub const TILT_SCALE_EPSILON: f64 = 0.001;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

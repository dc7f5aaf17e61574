// DOM hooks and front-end timing.

// Element ids / selectors the page is expected to provide
pub const CANVAS_ID: &str = "nn-bg";
pub const TILT_SELECTOR: &str = ".item, .cert";
pub const GLASS_SELECTOR: &str = ".nav-dock";
pub const GLASS_HOST_CLASS: &str = "glass-surface-host";

// Prefix of the canvas data attributes read into `FieldParams`
pub const FIELD_DATA_PREFIX: &str = "data-field-";

// How often the frame loop logs its throughput (debug level)
pub const FRAME_STATS_INTERVAL_SEC: f32 = 5.0;

// Root-element attribute selecting the console log level, e.g. `debug`
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

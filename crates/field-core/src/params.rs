use crate::color::Palette;
use crate::constants::*;
use crate::error::ConfigError;

/// Tuning for the particle field. `Default` reproduces the stock look.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub max_nodes: usize,
    pub area_per_node: f64,
    pub speed_scale: f64,
    pub wrap_margin: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub glow_radius_multiplier: f64,
    pub link_distance: f64,
    pub link_alpha_max: f64,
    pub link_alpha_scale: f64,
    pub link_line_width: f64,
    pub palette: Palette,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_nodes: MAX_NODES,
            area_per_node: AREA_PER_NODE,
            speed_scale: SPEED_SCALE,
            wrap_margin: WRAP_MARGIN,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            glow_radius_multiplier: GLOW_RADIUS_MULTIPLIER,
            link_distance: LINK_DISTANCE,
            link_alpha_max: LINK_ALPHA_MAX,
            link_alpha_scale: LINK_ALPHA_SCALE,
            link_line_width: LINK_LINE_WIDTH,
            palette: Palette::default(),
        }
    }
}

impl FieldParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nodes > MAX_NODES_LIMIT {
            return Err(ConfigError::OutOfRange {
                name: "max_nodes",
                value: self.max_nodes as f64,
                min: 0.0,
                max: MAX_NODES_LIMIT as f64,
            });
        }
        positive("area_per_node", self.area_per_node)?;
        positive("link_distance", self.link_distance)?;
        positive("link_line_width", self.link_line_width)?;
        positive("glow_radius_multiplier", self.glow_radius_multiplier)?;
        non_negative("speed_scale", self.speed_scale)?;
        non_negative("wrap_margin", self.wrap_margin)?;
        positive("radius_min", self.radius_min)?;
        if self.radius_min >= self.radius_max {
            return Err(ConfigError::EmptyRadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        unit_interval("link_alpha_max", self.link_alpha_max)?;
        unit_interval("link_alpha_scale", self.link_alpha_scale)?;
        Ok(())
    }

    /// Defaults with overrides from a key lookup, such as an element's
    /// `data-*` attributes. Unparseable values are logged and skipped.
    pub fn with_overrides(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut p = Self::default();
        override_with(&lookup, "max-nodes", &mut p.max_nodes);
        override_with(&lookup, "area-per-node", &mut p.area_per_node);
        override_with(&lookup, "speed-scale", &mut p.speed_scale);
        override_with(&lookup, "wrap-margin", &mut p.wrap_margin);
        override_with(&lookup, "radius-min", &mut p.radius_min);
        override_with(&lookup, "radius-max", &mut p.radius_max);
        override_with(&lookup, "link-distance", &mut p.link_distance);
        override_with(&lookup, "link-width", &mut p.link_line_width);
        p
    }

    /// Validated params, or the defaults when `self` is rejected.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("invalid field params ({e}); using defaults");
                Self::default()
            }
        }
    }
}

fn override_with<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
) {
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(v) => *slot = v,
        Err(_) => log::warn!("ignoring unparseable {key}={raw:?}"),
    }
}

/// Logger level from a page setting such as `data-log-level="debug"`.
/// Missing or unknown values give `Info`.
pub fn log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(log::Level::Info)
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // `!(x > 0)` also rejects NaN
    if !(value > 0.0) {
        return Err(ConfigError::NotPositive { name, value });
    }
    Ok(())
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(value >= 0.0) || !value.is_finite() {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            min: 0.0,
            max: f64::INFINITY,
        });
    }
    Ok(())
}

pub(crate) fn unit_interval(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}

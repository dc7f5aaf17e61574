//! Markup for the frosted-glass navigation surface.
//!
//! A glass surface is an SVG filter chain (displacement map, per-channel
//! chromatic offset, screen blends, blur) applied as a backdrop filter. The
//! displacement map is itself a generated SVG image sized to the element, so
//! it is rebuilt whenever the element is resized. Everything here is plain
//! string building; DOM wiring lives in the web front end.

use std::fmt;
use std::fmt::Write as _;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const MAP_DATA_URL_PREFIX: &str = "data:image/svg+xml,";

// Map size used before the element has been laid out
pub const FALLBACK_MAP_WIDTH: f64 = 400.0;
pub const FALLBACK_MAP_HEIGHT: f64 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    R,
    G,
    B,
    A,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Channel::R => "R",
            Channel::G => "G",
            Channel::B => "B",
            Channel::A => "A",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlassOptions {
    pub border_radius: f64,
    /// Edge band as a fraction of the shorter side.
    pub border_width: f64,
    /// Lightness of the inner map rect, percent.
    pub brightness: f64,
    pub opacity: f64,
    /// Blur of the inner map rect, px.
    pub blur: f64,
    /// Final gaussian blur of the filter output.
    pub displace: f64,
    pub background_opacity: f64,
    pub saturation: f64,
    pub distortion_scale: f64,
    pub red_offset: f64,
    pub green_offset: f64,
    pub blue_offset: f64,
    pub x_channel: Channel,
    pub y_channel: Channel,
    pub mix_blend_mode: String,
}

impl Default for GlassOptions {
    fn default() -> Self {
        Self {
            border_radius: 20.0,
            border_width: 0.07,
            brightness: 50.0,
            opacity: 0.93,
            blur: 11.0,
            displace: 0.0,
            background_opacity: 0.0,
            saturation: 1.0,
            distortion_scale: -180.0,
            red_offset: 0.0,
            green_offset: 10.0,
            blue_offset: 20.0,
            x_channel: Channel::R,
            y_channel: Channel::G,
            mix_blend_mode: "difference".to_string(),
        }
    }
}

impl GlassOptions {
    /// Preset for the pill-shaped navigation dock: a faint frost so the
    /// backdrop does not echo the page.
    pub fn nav_dock() -> Self {
        Self {
            border_radius: 50.0,
            background_opacity: 0.03,
            saturation: 1.1,
            brightness: 0.0,
            opacity: 0.92,
            blur: 7.0,
            displace: 2.0,
            distortion_scale: -60.0,
            red_offset: 0.0,
            green_offset: 5.0,
            blue_offset: 5.0,
            mix_blend_mode: "screen".to_string(),
            ..Self::default()
        }
    }

    /// `feDisplacementMap` scale for the red, green and blue passes.
    pub fn channel_scales(&self) -> [f64; 3] {
        [
            self.distortion_scale + self.red_offset,
            self.distortion_scale + self.green_offset,
            self.distortion_scale + self.blue_offset,
        ]
    }
}

/// Element ids for one glass surface; `unique` must be unique per page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlassIds {
    pub filter: String,
    pub map: String,
    pub red_grad: String,
    pub blue_grad: String,
}

impl GlassIds {
    pub fn new(unique: &str) -> Self {
        Self {
            filter: format!("glass-filter-{unique}"),
            map: format!("glass-map-{unique}"),
            red_grad: format!("red-grad-{unique}"),
            blue_grad: format!("blue-grad-{unique}"),
        }
    }

    /// CSS `url(#…)` reference to the filter.
    pub fn filter_url(&self) -> String {
        format!("url(#{})", self.filter)
    }
}

fn gradient_defs(out: &mut String, ids: &GlassIds) {
    let _ = write!(
        out,
        r##"<linearGradient id="{red}" x1="100%" y1="0%" x2="0%" y2="0%"><stop offset="0%" stop-color="#0000"/><stop offset="100%" stop-color="red"/></linearGradient><linearGradient id="{blue}" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="#0000"/><stop offset="100%" stop-color="blue"/></linearGradient>"##,
        red = ids.red_grad,
        blue = ids.blue_grad,
    );
}

/// The hidden `<svg>` holding the filter chain and gradient defs.
pub fn filter_svg(ids: &GlassIds, opts: &GlassOptions) -> String {
    // (channel name, colour matrix isolating that channel)
    const PASSES: [(&str, &str); 3] = [
        ("Red", "1 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1 0"),
        ("Green", "0 0 0 0 0 0 1 0 0 0 0 0 0 0 0 0 0 0 1 0"),
        ("Blue", "0 0 0 0 0 0 0 0 0 0 0 0 1 0 0 0 0 0 1 0"),
    ];

    let mut out = String::with_capacity(2048);
    let _ = write!(
        out,
        r#"<svg class="glass-surface__filter" xmlns="{SVG_NS}"><defs><filter id="{}" color-interpolation-filters="sRGB" x="0%" y="0%" width="100%" height="100%">"#,
        ids.filter
    );
    let _ = write!(
        out,
        r#"<feImage id="{}" x="0" y="0" width="100%" height="100%" preserveAspectRatio="none" result="map"/>"#,
        ids.map
    );
    for ((name, matrix), scale) in PASSES.iter().zip(opts.channel_scales()) {
        let lower = name.to_ascii_lowercase();
        let _ = write!(
            out,
            r#"<feDisplacementMap in="SourceGraphic" in2="map" id="{lower}channel" result="disp{name}" scale="{scale}" xChannelSelector="{x}" yChannelSelector="{y}"/><feColorMatrix in="disp{name}" type="matrix" values="{matrix}" result="{lower}"/>"#,
            x = opts.x_channel,
            y = opts.y_channel,
        );
    }
    let _ = write!(
        out,
        r#"<feBlend in="red" in2="green" mode="screen" result="rg"/><feBlend in="rg" in2="blue" mode="screen" result="output"/><feGaussianBlur in="output" stdDeviation="{}"/></filter>"#,
        opts.displace
    );
    gradient_defs(&mut out, ids);
    out.push_str("</defs></svg>");
    out
}

/// Map image dimensions; an element with no layout yet gets the fallback size.
pub fn map_size(width: f64, height: f64) -> (f64, f64) {
    let w = if width > 0.0 { width } else { FALLBACK_MAP_WIDTH };
    let h = if height > 0.0 { height } else { FALLBACK_MAP_HEIGHT };
    (w, h)
}

/// Inset of the blurred inner rect from the map edges.
#[inline]
pub fn edge_size(width: f64, height: f64, opts: &GlassOptions) -> f64 {
    width.min(height) * (opts.border_width * 0.5)
}

/// The displacement map image as raw SVG markup. The red gradient encodes
/// horizontal displacement and the blue gradient vertical; the blurred
/// inner rect flattens displacement away from the border.
pub fn displacement_map_svg(
    width: f64,
    height: f64,
    ids: &GlassIds,
    opts: &GlassOptions,
) -> String {
    let (w, h) = map_size(width, height);
    let edge = edge_size(w, h, opts);
    let rx = opts.border_radius;

    let mut out = String::with_capacity(1024);
    let _ = write!(out, r#"<svg viewBox="0 0 {w} {h}" xmlns="{SVG_NS}"><defs>"#);
    gradient_defs(&mut out, ids);
    let _ = write!(
        out,
        r#"</defs><rect x="0" y="0" width="{w}" height="{h}" fill="black"></rect><rect x="0" y="0" width="{w}" height="{h}" rx="{rx}" fill="url(#{red})" /><rect x="0" y="0" width="{w}" height="{h}" rx="{rx}" fill="url(#{blue})" style="mix-blend-mode: {blend}" /><rect x="{edge}" y="{edge}" width="{iw}" height="{ih}" rx="{rx}" fill="hsl(0 0% {bright}% / {opacity})" style="filter:blur({blur}px)" /></svg>"#,
        red = ids.red_grad,
        blue = ids.blue_grad,
        blend = opts.mix_blend_mode,
        iw = w - edge * 2.0,
        ih = h - edge * 2.0,
        bright = opts.brightness,
        opacity = opts.opacity,
        blur = opts.blur,
    );
    out
}

/// Whether the browser renders SVG backdrop filters. WebKit (Safari without
/// Chrome) and Firefox accept the property but do not draw it, so they are
/// rejected by user agent before any feature probe.
pub fn supports_svg_filters(user_agent: &str) -> bool {
    let webkit = user_agent.contains("Safari") && !user_agent.contains("Chrome");
    let firefox = user_agent.contains("Firefox");
    !(webkit || firefox)
}

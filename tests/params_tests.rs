// Host-side tests for field configuration.

use field_core::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_validate() {
    let p = FieldParams::default();
    assert!(p.validate().is_ok());
    assert_eq!(p.max_nodes, 90);
    assert_eq!(p.link_distance, 150.0);
    assert_eq!(p.palette, Palette::default());
}

#[test]
fn invalid_params_are_reported() {
    let p = FieldParams {
        link_distance: 0.0,
        ..FieldParams::default()
    };
    assert_eq!(
        p.validate(),
        Err(ConfigError::NotPositive {
            name: "link_distance",
            value: 0.0
        })
    );

    let p = FieldParams {
        radius_min: 3.0,
        radius_max: 2.0,
        ..FieldParams::default()
    };
    assert_eq!(
        p.validate(),
        Err(ConfigError::EmptyRadiusRange { min: 3.0, max: 2.0 })
    );

    let p = FieldParams {
        area_per_node: f64::NAN,
        ..FieldParams::default()
    };
    assert!(matches!(
        p.validate(),
        Err(ConfigError::NotPositive {
            name: "area_per_node",
            ..
        })
    ));

    let p = FieldParams {
        link_alpha_max: 1.5,
        ..FieldParams::default()
    };
    let err = p.validate().unwrap_err();
    assert_eq!(err.to_string(), "link_alpha_max must be within 0..=1, got 1.5");
}

#[test]
fn or_default_replaces_rejected_params() {
    let bad = FieldParams {
        speed_scale: -1.0,
        ..FieldParams::default()
    };
    assert_eq!(bad.or_default(), FieldParams::default());

    let good = FieldParams {
        max_nodes: 40,
        ..FieldParams::default()
    };
    assert_eq!(good.clone().or_default(), good);
}

#[test]
fn overrides_are_parsed_from_lookup() {
    let p = FieldParams::with_overrides(lookup(&[
        ("max-nodes", "40"),
        ("link-distance", " 120.5 "),
        ("speed-scale", "0.5"),
    ]));
    assert_eq!(p.max_nodes, 40);
    assert_eq!(p.link_distance, 120.5);
    assert_eq!(p.speed_scale, 0.5);
    assert_eq!(p.area_per_node, 14_000.0);
}

#[test]
fn unparseable_overrides_are_skipped() {
    let p = FieldParams::with_overrides(lookup(&[("max-nodes", "lots"), ("radius-min", "2")]));
    assert_eq!(p.max_nodes, 90);
    assert_eq!(p.radius_min, 2.0);
}

#[test]
fn overridden_cap_limits_population() {
    let params = FieldParams::with_overrides(lookup(&[("max-nodes", "12")]));
    let mut field = Field::seeded(params, 11);
    field.initialize(2000.0, 2000.0);
    assert_eq!(field.nodes().len(), 12);
}

#[test]
fn max_nodes_above_limit_is_rejected() {
    let p = FieldParams {
        max_nodes: MAX_NODES_LIMIT + 1,
        ..FieldParams::default()
    };
    assert_eq!(
        p.validate(),
        Err(ConfigError::OutOfRange {
            name: "max_nodes",
            value: 501.0,
            min: 0.0,
            max: 500.0,
        })
    );

    let at_limit = FieldParams {
        max_nodes: MAX_NODES_LIMIT,
        ..FieldParams::default()
    };
    assert!(at_limit.validate().is_ok());
}

#[test]
fn huge_max_nodes_override_falls_back_to_defaults() {
    let p = FieldParams::with_overrides(lookup(&[("max-nodes", "100000")])).or_default();
    assert_eq!(p.max_nodes, 90);
    assert_eq!(p, FieldParams::default());
}

#[test]
fn log_level_reads_page_setting() {
    use field_core::params::log_level;
    assert_eq!(log_level(None), log::Level::Info);
    assert_eq!(log_level(Some("debug")), log::Level::Debug);
    assert_eq!(log_level(Some(" TRACE ")), log::Level::Trace);
    assert_eq!(log_level(Some("Warn")), log::Level::Warn);
    assert_eq!(log_level(Some("loud")), log::Level::Info);
    assert_eq!(log_level(Some("")), log::Level::Info);
}

// Host-side tests for the particle field simulation.

use field_core::*;
use glam::DVec2;

fn make_field(width: f64, height: f64) -> Field {
    let mut field = Field::seeded(FieldParams::default(), 42);
    field.initialize(width, height);
    field
}

#[test]
fn population_follows_density_heuristic() {
    let params = FieldParams::default();
    assert_eq!(population_count(Dimensions::new(400.0, 350.0), &params), 10);
    assert_eq!(population_count(Dimensions::new(2000.0, 2000.0), &params), 90);
    assert_eq!(population_count(Dimensions::new(1.0, 1.0), &params), 0);
    assert_eq!(population_count(Dimensions::new(0.0, 900.0), &params), 0);

    assert_eq!(make_field(400.0, 350.0).nodes().len(), 10);
    assert_eq!(make_field(2000.0, 2000.0).nodes().len(), 90);
}

#[test]
fn degenerate_dimensions_clamp_to_zero() {
    let field = make_field(-300.0, 200.0);
    assert_eq!(field.dimensions(), Dimensions::new(0.0, 200.0));
    assert_eq!(field.dimensions().width, 0.0);
    assert!(field.nodes().is_empty());

    let dims = Dimensions::new(f64::NAN, f64::INFINITY);
    assert_eq!(dims.width, 0.0);
    assert_eq!(dims.height, 0.0);
}

#[test]
fn sampled_nodes_respect_ranges() {
    let field = make_field(1920.0, 1080.0);
    assert_eq!(field.nodes().len(), 90);
    for n in field.nodes() {
        assert!(n.pos.x >= 0.0 && n.pos.x < 1920.0, "x out of range: {}", n.pos.x);
        assert!(n.pos.y >= 0.0 && n.pos.y < 1080.0, "y out of range: {}", n.pos.y);
        assert!(n.vel.x >= -0.15 && n.vel.x <= 0.15, "vx out of range: {}", n.vel.x);
        assert!(n.vel.y >= -0.15 && n.vel.y <= 0.15, "vy out of range: {}", n.vel.y);
        assert!(n.r >= 1.4 && n.r < 3.0, "radius out of range: {}", n.r);
    }
}

#[test]
fn same_seed_gives_same_population() {
    let a = make_field(800.0, 600.0);
    let b = make_field(800.0, 600.0);
    assert_eq!(a.nodes(), b.nodes());

    let mut c = Field::seeded(FieldParams::default(), 7);
    c.initialize(800.0, 600.0);
    assert_eq!(c.nodes().len(), a.nodes().len());
    assert_ne!(c.nodes(), a.nodes());
}

#[test]
fn reinitialize_keeps_count_but_resamples() {
    let mut field = make_field(800.0, 600.0);
    let first = field.nodes().to_vec();
    field.initialize(800.0, 600.0);
    assert_eq!(field.nodes().len(), first.len());
    assert_ne!(field.nodes(), &first[..]);
}

#[test]
fn advance_is_euler_step() {
    let mut field = make_field(1200.0, 900.0);
    let before = field.nodes().to_vec();
    field.advance();
    for (old, new) in before.iter().zip(field.nodes()) {
        // freshly sampled nodes are well inside the margin, so nothing wraps
        assert_eq!(new.pos, old.pos + old.vel);
        assert_eq!(new.vel, old.vel);
        assert_eq!(new.r, old.r);
    }
}

#[test]
fn wrap_teleports_exactly() {
    let mut field = make_field(400.0, 350.0);
    {
        let nodes = field.nodes_mut();
        nodes[0].pos = DVec2::new(450.001, 100.0);
        nodes[0].vel = DVec2::ZERO;
        nodes[1].pos = DVec2::new(-50.001, 100.0);
        nodes[1].vel = DVec2::ZERO;
        nodes[2].pos = DVec2::new(100.0, 400.5);
        nodes[2].vel = DVec2::ZERO;
        nodes[3].pos = DVec2::new(100.0, -50.5);
        nodes[3].vel = DVec2::ZERO;
        nodes[4].pos = DVec2::new(450.0, -50.0);
        nodes[4].vel = DVec2::ZERO;
    }
    field.advance();
    let n = field.nodes();
    assert_eq!(n[0].pos.x, -50.0);
    assert_eq!(n[1].pos.x, 450.0);
    assert_eq!(n[2].pos.y, -50.0);
    assert_eq!(n[3].pos.y, 400.0);
    // exactly on the margin stays put
    assert_eq!(n[4].pos, DVec2::new(450.0, -50.0));
}

#[test]
fn wrap_coord_only_moves_out_of_bounds_values() {
    assert_eq!(wrap_coord(10.0, 100.0, 50.0), 10.0);
    assert_eq!(wrap_coord(-50.0, 100.0, 50.0), -50.0);
    assert_eq!(wrap_coord(150.0, 100.0, 50.0), 150.0);
    assert_eq!(wrap_coord(150.001, 100.0, 50.0), -50.0);
    assert_eq!(wrap_coord(-50.001, 100.0, 50.0), 150.0);
}

#[test]
fn nodes_stay_within_buffered_bounds() {
    let (w, h) = (640.0, 480.0);
    let mut field = make_field(w, h);
    for tick in 0..5000 {
        field.advance();
        for n in field.nodes() {
            assert!(
                n.pos.x >= -50.0 && n.pos.x <= w + 50.0,
                "tick {tick}: x escaped to {}",
                n.pos.x
            );
            assert!(
                n.pos.y >= -50.0 && n.pos.y <= h + 50.0,
                "tick {tick}: y escaped to {}",
                n.pos.y
            );
        }
    }
}

#[test]
fn resize_replaces_population() {
    let mut field = make_field(1600.0, 1200.0);
    let before = field.nodes().to_vec();
    assert_eq!(before.len(), 90);

    field.on_resize(400.0, 350.0);
    assert_eq!(field.dimensions(), Dimensions::new(400.0, 350.0));
    assert_eq!(field.nodes().len(), 10);
    for n in field.nodes() {
        assert!(!before.contains(n), "node survived resize: {n:?}");
        assert!(n.pos.x < 400.0 && n.pos.y < 350.0);
    }

    field.on_resize(1.0, 1.0);
    assert!(field.nodes().is_empty());
}

#[test]
fn link_alpha_falls_off_linearly_to_zero() {
    let params = FieldParams::default();
    assert!((link_alpha(0.0, &params) - 0.42).abs() < 1e-12);
    assert_eq!(link_alpha(150.0, &params), 0.0);
    assert_eq!(link_alpha(400.0, &params), 0.0);
    assert!((link_alpha(75.0, &params) - 0.21).abs() < 1e-12);

    let mut prev = link_alpha(0.0, &params);
    for d in 1..=150 {
        let a = link_alpha(d as f64, &params);
        assert!(a < prev, "alpha not decreasing at {d}: {a} >= {prev}");
        prev = a;
    }
}

#[test]
fn links_only_join_close_pairs() {
    // 210 x 200 = 42000 px² -> three nodes
    let mut field = make_field(210.0, 200.0);
    assert_eq!(field.nodes().len(), 3);
    {
        let nodes = field.nodes_mut();
        nodes[0].pos = DVec2::new(0.0, 0.0);
        nodes[1].pos = DVec2::new(100.0, 0.0);
        nodes[2].pos = DVec2::new(0.0, 150.0);
    }
    let links: Vec<Link> = field.links().collect();
    assert_eq!(links.len(), 1, "{links:?}");
    let link = links[0];
    assert_eq!((link.a, link.b), (0, 1));
    assert_eq!(link.distance, 100.0);
    assert!((link.alpha - (1.0 - 100.0 / 150.0) * 0.6 * 0.7).abs() < 1e-12);

    // exactly at the threshold: no link
    field.nodes_mut()[1].pos = DVec2::new(150.0, 0.0);
    assert_eq!(field.links().count(), 0);
}

#[test]
fn links_cover_every_pair_once() {
    let mut field = make_field(2000.0, 2000.0);
    for n in field.nodes_mut() {
        n.pos = DVec2::new(10.0, 10.0);
    }
    let links: Vec<Link> = field.links().collect();
    assert_eq!(links.len(), 90 * 89 / 2);
    assert!(links.iter().all(|l| l.a < l.b));
    assert!(links.iter().all(|l| (l.alpha - 0.42).abs() < 1e-12));
}

#[test]
fn stop_and_resume_gate_ticks() {
    struct NullSurface;
    impl Surface for NullSurface {
        fn clear(&mut self, _: f64, _: f64) {}
        fn set_fill_color(&mut self, _: Rgba) {}
        fn set_fill_gradient(&mut self, _: &RadialGradient) {}
        fn fill_rect(&mut self, _: f64, _: f64, _: f64, _: f64) {}
        fn set_stroke_color(&mut self, _: Rgba) {}
        fn set_line_width(&mut self, _: f64) {}
        fn line(&mut self, _: DVec2, _: DVec2) {}
        fn fill_circle(&mut self, _: DVec2, _: f64) {}
    }

    let mut field = make_field(400.0, 350.0);
    assert_eq!(field.state(), RunState::Running);
    assert!(field.tick(&mut NullSurface));
    assert!(field.tick(&mut NullSurface));
    assert_eq!(field.ticks(), 2);

    field.stop();
    assert_eq!(field.state(), RunState::Stopped);
    let frozen = field.nodes().to_vec();
    assert!(!field.tick(&mut NullSurface));
    assert_eq!(field.ticks(), 2);
    assert_eq!(field.nodes(), &frozen[..]);

    field.resume();
    assert!(field.tick(&mut NullSurface));
    assert_eq!(field.ticks(), 3);
}

// Generator pinned at its largest output
struct MaxRng;

impl rand::RngCore for MaxRng {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }

    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0xff);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[test]
fn radius_stays_below_max_at_top_of_rng_range() {
    let params = FieldParams::default();
    let mut field = Field::new(params.clone(), MaxRng);
    field.initialize(400.0, 350.0);
    assert_eq!(field.nodes().len(), 10);
    for n in field.nodes() {
        assert!(n.r >= params.radius_min, "r = {}", n.r);
        assert!(n.r < params.radius_max, "r = {}", n.r);
        assert!(n.pos.x < 400.0 && n.pos.y < 350.0);
    }
}

#[test]
fn collapsed_radius_range_uses_min() {
    let params = FieldParams {
        radius_min: 2.0,
        radius_max: 2.0,
        ..FieldParams::default()
    };
    let mut field = Field::new(params, MaxRng);
    field.initialize(400.0, 350.0);
    assert!(field.nodes().iter().all(|n| n.r == 2.0));
}

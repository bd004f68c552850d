use wireroute::routing::waypoints::{calculate_waypoints, optimize};
use wireroute::{
    ConnectionStyle, CurvedStyle, EditableStyle, Orientation, OrthogonalStyle, PathSegment, Point,
    Rect, RouterConfig, RoutingParameters, route,
};

/// Deterministic generator for the fuzz passes; keeps the suite
/// reproducible without a randomness dependency.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    fn orientation(&mut self) -> Option<Orientation> {
        match (self.next_f64() * 5.0) as u32 {
            0 => Some(Orientation::Left),
            1 => Some(Orientation::Right),
            2 => Some(Orientation::Top),
            3 => Some(Orientation::Bottom),
            _ => None,
        }
    }
}

fn random_params(rng: &mut Lcg) -> RoutingParameters {
    let config = RouterConfig::default();
    let start = Point::new(rng.range(-200.0, 200.0), rng.range(-200.0, 200.0));
    let end = Point::new(rng.range(-200.0, 200.0), rng.range(-200.0, 200.0));
    let mut params = RoutingParameters::new(start, end, &config);
    params.source_orientation = rng.orientation();
    params.target_orientation = rng.orientation();
    params.source_extension = rng.range(0.0, 30.0);
    params.target_extension = rng.range(0.0, 30.0);
    params.obstacle_clearance = rng.range(10.0, 40.0);
    if rng.next_f64() < 0.5 {
        params.source_bounds = Some(Rect::new(
            start.x - rng.range(20.0, 80.0),
            start.y - rng.range(20.0, 80.0),
            rng.range(40.0, 160.0),
            rng.range(40.0, 160.0),
        ));
    }
    if rng.next_f64() < 0.5 {
        params.target_bounds = Some(Rect::new(
            end.x - rng.range(20.0, 80.0),
            end.y - rng.range(20.0, 80.0),
            rng.range(40.0, 160.0),
            rng.range(40.0, 160.0),
        ));
    }
    params
}

/// Sample points lying exactly on a segment's geometry.
fn sample_segment(cursor: Point, segment: &PathSegment, out: &mut Vec<Point>) {
    let steps = [0.0, 0.25, 0.5, 0.75, 1.0];
    match *segment {
        PathSegment::Line { end } => {
            for t in steps {
                out.push(Point::new(
                    cursor.x + (end.x - cursor.x) * t,
                    cursor.y + (end.y - cursor.y) * t,
                ));
            }
        }
        PathSegment::Quadratic { control, end, .. } => {
            for t in steps {
                let u = 1.0 - t;
                out.push(Point::new(
                    u * u * cursor.x + 2.0 * u * t * control.x + t * t * end.x,
                    u * u * cursor.y + 2.0 * u * t * control.y + t * t * end.y,
                ));
            }
        }
        PathSegment::Cubic {
            control1,
            control2,
            end,
        } => {
            for t in steps {
                let u = 1.0 - t;
                out.push(Point::new(
                    u * u * u * cursor.x
                        + 3.0 * u * u * t * control1.x
                        + 3.0 * u * t * t * control2.x
                        + t * t * t * end.x,
                    u * u * u * cursor.y
                        + 3.0 * u * u * t * control1.y
                        + 3.0 * u * t * t * control2.y
                        + t * t * t * end.y,
                ));
            }
        }
    }
}

#[test]
fn endpoint_fidelity_across_styles() {
    let mut rng = Lcg(0x5eed);
    for _ in 0..250 {
        let params = random_params(&mut rng);
        for result in [
            OrthogonalStyle.create_segments(&params),
            EditableStyle.create_segments(&params),
            CurvedStyle::default().create_segments(&params),
        ] {
            assert_eq!(result.start, params.start);
            assert_eq!(result.end(), params.end);
        }
    }
}

#[test]
fn straight_opposite_ports_scenario() {
    let config = RouterConfig::default();
    let mut params = RoutingParameters::new(Point::new(0.0, 0.0), Point::new(200.0, 0.0), &config);
    params.source_orientation = Some(Orientation::Right);
    params.target_orientation = Some(Orientation::Left);
    params.source_extension = 10.0;
    params.target_extension = 10.0;
    assert_eq!(
        calculate_waypoints(&params),
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(190.0, 0.0),
            Point::new(200.0, 0.0),
        ]
    );
}

#[test]
fn same_side_ports_scenario() {
    let config = RouterConfig::default();
    let mut params = RoutingParameters::new(Point::new(0.0, 0.0), Point::new(0.0, 100.0), &config);
    params.source_orientation = Some(Orientation::Right);
    params.target_orientation = Some(Orientation::Right);
    params.source_extension = 10.0;
    params.target_extension = 10.0;
    params.obstacle_clearance = 20.0;
    assert_eq!(
        calculate_waypoints(&params),
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(30.0, 100.0),
            Point::new(10.0, 100.0),
            Point::new(0.0, 100.0),
        ]
    );
}

#[test]
fn self_connection_scenario_keeps_clearance() {
    let config = RouterConfig::default();
    let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
    let mut params =
        RoutingParameters::new(Point::new(100.0, 10.0), Point::new(100.0, 40.0), &config);
    params.source_orientation = Some(Orientation::Right);
    params.target_orientation = Some(Orientation::Right);
    params.source_extension = 10.0;
    params.target_extension = 10.0;
    params.obstacle_clearance = 20.0;
    params.source_bounds = Some(bounds);
    params.target_bounds = Some(bounds);
    let waypoints = calculate_waypoints(&params);
    // Avoidance resolves to the right side at x = 100 + 20.
    assert_eq!(waypoints[2].x, 120.0);
    assert_eq!(waypoints[3].x, 120.0);
    // No interior route waypoint inside the node; route corners hold the
    // configured clearance from the nearest edge.
    for p in &waypoints[1..waypoints.len() - 1] {
        assert!(!bounds.inflate(-1e-9).contains(*p));
    }
    for p in [waypoints[2], waypoints[3]] {
        assert!((p.x - bounds.right()).abs() >= params.obstacle_clearance - 1e-9);
    }
}

#[test]
fn proximity_override_scenario() {
    let config = RouterConfig::default();
    // Opposite ports 40 units apart with no room along the facing axis,
    // and an overlapping union box that would otherwise force avoidance.
    let mut params =
        RoutingParameters::new(Point::new(0.0, 0.0), Point::new(-30.0, 20.0), &config);
    params.source_orientation = Some(Orientation::Right);
    params.target_orientation = Some(Orientation::Left);
    params.source_extension = 10.0;
    params.target_extension = 10.0;
    params.source_bounds = Some(Rect::new(-60.0, -10.0, 70.0, 40.0));
    params.target_bounds = Some(Rect::new(-60.0, -10.0, 40.0, 40.0));
    let waypoints = calculate_waypoints(&params);
    // Z-bend pattern: both route corners on the midpoint of the other
    // axis, no clearance-offset loop.
    assert_eq!(waypoints.len(), 6);
    assert_eq!(waypoints[2], Point::new(10.0, 10.0));
    assert_eq!(waypoints[3], Point::new(-40.0, 10.0));
}

#[test]
fn optimizer_is_idempotent_over_routed_output() {
    let mut rng = Lcg(0xbadc0de);
    for _ in 0..250 {
        let params = random_params(&mut rng);
        let once = optimize(&calculate_waypoints(&params));
        assert_eq!(optimize(&once), once);
    }
}

#[test]
fn corner_radius_never_exceeds_request() {
    let mut rng = Lcg(0xc0ffee);
    for _ in 0..250 {
        let mut params = random_params(&mut rng);
        params.corner_radius = rng.range(1.0, 24.0);
        let result = route(&params);
        let mut cursor = result.start;
        for segment in &result.segments {
            if let PathSegment::Quadratic { control, .. } = segment {
                let implied = cursor.distance_to(*control);
                assert!(implied <= params.corner_radius + 1e-6);
            }
            cursor = segment.end();
        }
    }
}

#[test]
fn hit_rects_cover_every_sampled_path_point() {
    let mut rng = Lcg(0xfeed);
    for _ in 0..250 {
        let mut params = random_params(&mut rng);
        params.corner_radius = 8.0;
        let tolerance = rng.range(8.0, 20.0);
        for style in [
            &OrthogonalStyle as &dyn ConnectionStyle,
            &EditableStyle,
            &CurvedStyle { curvature: 0.5 },
        ] {
            let result = style.create_segments(&params);
            let rects = style.build_hit_rects(&result, tolerance);
            let mut samples = Vec::new();
            let mut cursor = result.start;
            for segment in &result.segments {
                sample_segment(cursor, segment, &mut samples);
                cursor = segment.end();
            }
            for sample in samples {
                assert!(
                    rects.iter().any(|r| r.contains(sample)),
                    "uncovered point {:?} with tolerance {}",
                    sample,
                    tolerance
                );
            }
        }
    }
}

#[test]
fn svg_path_data_matches_segment_kinds() {
    let config = RouterConfig::default();
    let mut params = RoutingParameters::new(Point::new(0.0, 0.0), Point::new(160.0, 90.0), &config);
    params.source_orientation = Some(Orientation::Right);
    params.target_orientation = Some(Orientation::Left);
    let style = OrthogonalStyle;
    let result = style.create_segments(&params);
    let data = style.build_path(&result).to_svg_data();
    assert!(data.starts_with("M 0.00 0.00"));
    assert!(data.contains('Q'));
    assert!(data.ends_with("160.00 90.00"));

    let curved = CurvedStyle::default().create_segments(&params);
    let curved_data = style.build_path(&curved).to_svg_data();
    assert!(curved_data.contains('C'));
}

#[test]
fn bend_points_reproduce_waypoints_for_sharp_routes() {
    let config = RouterConfig::default();
    let mut params = RoutingParameters::new(Point::new(0.0, 0.0), Point::new(140.0, 60.0), &config);
    params.source_orientation = Some(Orientation::Right);
    params.target_orientation = Some(Orientation::Left);
    params.corner_radius = 0.0;
    let result = route(&params);
    let waypoints = optimize(&calculate_waypoints(&params));
    assert_eq!(result.bend_points(), waypoints);
}

#[test]
fn dragging_endpoint_without_orientation_routes_smoothly() {
    let config = RouterConfig::default();
    // A connection being dragged: no target port yet, zero extension on
    // the free side.
    let mut params = RoutingParameters::new(Point::new(50.0, 50.0), Point::new(210.0, 80.0), &config);
    params.source_orientation = Some(Orientation::Right);
    params.target_orientation = None;
    params.target_extension = 0.0;
    params.source_bounds = Some(Rect::new(0.0, 20.0, 50.0, 60.0));
    let result = route(&params);
    assert_eq!(result.start, params.start);
    assert_eq!(result.end(), params.end);
    assert!(!result.segments.is_empty());
}

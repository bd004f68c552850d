//! Cubic control-point placement for the curved connection style.
//!
//! The curved style draws one cubic Bezier instead of an orthogonal
//! polyline. Each control point sits on its own port's facing axis, so
//! the wire leaves and enters ports straight before bowing.

use crate::geometry::{Orientation, Point};

use super::waypoints;
use super::{PathSegment, RoutingParameters};

/// Build the single cubic segment connecting `start` to `end`.
///
/// Control distance on each side is `max(extension, |axis_delta| *
/// curvature)`: it scales with the span along that port's axis but never
/// collapses below the port's straight-out run. Missing facings are
/// inferred the same way the waypoint calculator infers them.
pub fn cubic_segment(
    start: Point,
    end: Point,
    source_orientation: Option<Orientation>,
    target_orientation: Option<Orientation>,
    curvature: f64,
    source_extension: f64,
    target_extension: f64,
) -> PathSegment {
    let (source, target) =
        waypoints::resolve_orientations(start, end, source_orientation, target_orientation);

    let control1 = control_point(start, source, end, curvature, source_extension);
    let control2 = control_point(end, target, start, curvature, target_extension);
    PathSegment::Cubic {
        control1,
        control2,
        end,
    }
}

fn control_point(
    anchor: Point,
    facing: Orientation,
    remote: Point,
    curvature: f64,
    extension: f64,
) -> Point {
    let axis_delta = if facing.is_horizontal() {
        remote.x - anchor.x
    } else {
        remote.y - anchor.y
    };
    let distance = extension.max(axis_delta.abs() * curvature);
    facing.extend(anchor, distance)
}

/// Curved-style counterpart of the orthogonal pipeline: one cubic built
/// from the routing parameters.
pub fn cubic_from_parameters(params: &RoutingParameters, curvature: f64) -> PathSegment {
    cubic_segment(
        params.start,
        params.end,
        params.source_orientation,
        params.target_orientation,
        curvature,
        params.source_extension,
        params.target_extension,
    )
}

//! Reconciliation of user-pinned control points into an orthogonal
//! polyline.
//!
//! A user dragging bend handles can leave control points anywhere; the
//! adapter threads the route through them with axis-aligned hops so the
//! edited connection keeps the orthogonal look of the computed one.

use crate::geometry::Point;

use super::waypoints;
use super::RoutingParameters;

/// Turn the pinned `control_points` into an orthogonal waypoint list.
///
/// An empty list, or a list holding nothing beyond the two endpoints,
/// means no meaningful manual edit; those defer to the automatic
/// calculator. The result is already optimized.
pub fn reconcile(control_points: &[Point], params: &RoutingParameters) -> Vec<Point> {
    if control_points.len() < 3 {
        return waypoints::optimize(&waypoints::calculate_waypoints(params));
    }

    let mut points = Vec::with_capacity(control_points.len() * 2 + 2);
    points.push(params.start);
    let mut cursor = params.start;
    // Alternate which axis moves first so consecutive pins connect with
    // opposite-handed elbows.
    let mut horizontal_first = true;
    for pin in &control_points[1..control_points.len() - 1] {
        if horizontal_first {
            points.push(Point::new(pin.x, cursor.y));
        } else {
            points.push(Point::new(cursor.x, pin.y));
        }
        points.push(*pin);
        cursor = *pin;
        horizontal_first = !horizontal_first;
    }

    // Close onto the true end along whichever axis still has the larger
    // remaining delta.
    let dx = (params.end.x - cursor.x).abs();
    let dy = (params.end.y - cursor.y).abs();
    if dx >= dy {
        points.push(Point::new(params.end.x, cursor.y));
    } else {
        points.push(Point::new(cursor.x, params.end.y));
    }
    points.push(params.end);

    waypoints::optimize(&points)
}

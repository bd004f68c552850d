//! Segment synthesis: waypoint polyline to drawable segments.
//!
//! Straight legs become [`PathSegment::Line`]; perpendicular corners are
//! rounded into quadratic curves whose control point is the original
//! corner. Corners that are too tight or not axis-aligned degrade to plain
//! lines, so the synthesizer is total over any polyline.

use crate::geometry::Point;

use super::PathSegment;

/// Component tolerance for calling a leg purely horizontal or vertical.
const AXIS_TOLERANCE: f64 = 0.01;
/// Corners whose clamped radius falls below this are not worth curving.
const MIN_CORNER_RADIUS: f64 = 1.0;
/// Zero-length guard for unit-vector computation.
const EPSILON: f64 = 1e-9;

/// Convert `points` into drawable segments, rounding perpendicular
/// corners with `corner_radius`.
///
/// The requested radius is clamped to half of each adjacent leg so
/// neighboring corners never overlap. The final segment always ends at
/// the last input point.
pub fn synthesize(points: &[Point], corner_radius: f64) -> Vec<PathSegment> {
    if points.len() < 2 {
        return Vec::new();
    }
    if corner_radius <= 0.0 || points.len() < 3 {
        return points[1..]
            .iter()
            .map(|p| PathSegment::Line { end: *p })
            .collect();
    }

    let mut segments = Vec::with_capacity(points.len() * 2);
    let mut cursor = points[0];
    for idx in 1..points.len() - 1 {
        let corner = points[idx];
        let next = points[idx + 1];
        // Leg lengths are measured between original waypoints; the radius
        // clamp below keeps adjacent corners from competing for one leg.
        let in_dx = corner.x - points[idx - 1].x;
        let in_dy = corner.y - points[idx - 1].y;
        let out_dx = next.x - corner.x;
        let out_dy = next.y - corner.y;
        let in_len = (in_dx * in_dx + in_dy * in_dy).sqrt();
        let out_len = (out_dx * out_dx + out_dy * out_dy).sqrt();
        if in_len < EPSILON || out_len < EPSILON {
            cursor = push_line(&mut segments, cursor, corner);
            continue;
        }

        let perpendicular = (in_dy.abs() <= AXIS_TOLERANCE && out_dx.abs() <= AXIS_TOLERANCE)
            || (in_dx.abs() <= AXIS_TOLERANCE && out_dy.abs() <= AXIS_TOLERANCE);
        let radius = corner_radius.min(in_len / 2.0).min(out_len / 2.0);
        if !perpendicular || radius < MIN_CORNER_RADIUS {
            cursor = push_line(&mut segments, cursor, corner);
            continue;
        }

        let curve_in = Point::new(
            corner.x - in_dx / in_len * radius,
            corner.y - in_dy / in_len * radius,
        );
        let curve_out = Point::new(
            corner.x + out_dx / out_len * radius,
            corner.y + out_dy / out_len * radius,
        );
        cursor = push_line(&mut segments, cursor, curve_in);
        segments.push(PathSegment::Quadratic {
            control: corner,
            end: curve_out,
            corner: true,
        });
        cursor = curve_out;
    }
    segments.push(PathSegment::Line {
        end: points[points.len() - 1],
    });
    segments
}

/// Append a line unless it would be zero-length; returns the new cursor.
fn push_line(segments: &mut Vec<PathSegment>, cursor: Point, end: Point) -> Point {
    if cursor.distance_to(end) > EPSILON {
        segments.push(PathSegment::Line { end });
    }
    end
}

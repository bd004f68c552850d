//! Waypoint computation: the routing decision tree.
//!
//! [`calculate_waypoints`] turns a parameter snapshot into an ordered list
//! of turn points from start to end. The rules are mutually exclusive and
//! tried in a fixed order; the first match wins. Every branch is total:
//! degenerate input degrades to a straight two-point chain instead of
//! failing.

use crate::geometry::{Orientation, Point, Rect};

use super::RoutingParameters;

// ── Tolerances and thresholds ───────────────────────────────────────
/// Tolerance for treating the four chain points as axis-collinear.
const COLLINEAR_TOLERANCE: f64 = 1.0;
/// Tolerance for the optimizer's redundant-bend removal.
const OPTIMIZE_TOLERANCE: f64 = 0.5;
/// Opposite-facing ports closer than this always take the Z-bend, even
/// through a supplied bounding box. Looping around an obstacle between
/// two ports this close reads worse than crossing it.
const PROXIMITY_THRESHOLD: f64 = 100.0;
/// Coordinates closer than this count as coincident.
const EPSILON: f64 = 1e-6;

/// Compute the turn points for one connection.
///
/// The result has length >= 2, starts at `params.start`, and ends at
/// `params.end`. Interior points may be redundant; run the list through
/// [`optimize`] before synthesis.
pub fn calculate_waypoints(params: &RoutingParameters) -> Vec<Point> {
    let start = params.start;
    let end = params.end;
    let (source, target) = resolve_orientations(
        start,
        end,
        params.source_orientation,
        params.target_orientation,
    );
    let ext_start = source.extend(start, params.source_extension);
    let ext_end = target.extend(end, params.target_extension);

    // Rule 1: self-connection, both ports on the same node.
    if let (Some(source_bounds), Some(target_bounds)) = (params.source_bounds, params.target_bounds)
        && source_bounds == target_bounds
    {
        return self_connection_route(params, &source_bounds, source, target, ext_start, ext_end);
    }

    if start.distance_to(end) < EPSILON {
        return vec![start, end];
    }

    // Rule 2: the whole chain already lies on one axis.
    if let Some(route) = straight_route(params, start, ext_start, ext_end, end) {
        return route;
    }

    // Rule 3: both ports face the same way; an L or Z would clip a node.
    if source == target {
        return same_side_route(params, source, ext_start, ext_end);
    }

    // Rule 5: opposite facings get S/Z treatment.
    if source == target.opposite() {
        return opposite_route(params, source, ext_start, ext_end);
    }

    // Rule 4: perpendicular facings, single bend when it fits.
    if let Some(route) = l_shape_route(params, source, target, ext_start, ext_end) {
        return route;
    }

    // Rule 6: general avoidance fallback.
    fallback_route(params, source, target, ext_start, ext_end)
}

/// Remove interior points that are axis-collinear with their neighbors.
///
/// Single left-to-right pass comparing each point against the previously
/// accepted point and its successor in the input; a removed point is never
/// restored. First and last points are always kept.
pub fn optimize(points: &[Point]) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    out.push(points[0]);
    for idx in 1..points.len() - 1 {
        let prev = out[out.len() - 1];
        let curr = points[idx];
        let next = points[idx + 1];
        let x_run = (curr.x - prev.x).abs() <= OPTIMIZE_TOLERANCE
            && (next.x - curr.x).abs() <= OPTIMIZE_TOLERANCE;
        let y_run = (curr.y - prev.y).abs() <= OPTIMIZE_TOLERANCE
            && (next.y - curr.y).abs() <= OPTIMIZE_TOLERANCE;
        if x_run || y_run {
            continue;
        }
        out.push(curr);
    }
    out.push(points[points.len() - 1]);
    out
}

/// Fill in missing facings. A free endpoint mirrors the attached side so
/// the approach stays visually smooth; with neither side attached the
/// dominant delta axis decides.
pub(crate) fn resolve_orientations(
    start: Point,
    end: Point,
    source_orientation: Option<Orientation>,
    target_orientation: Option<Orientation>,
) -> (Orientation, Orientation) {
    match (source_orientation, target_orientation) {
        (Some(source), Some(target)) => (source, target),
        (Some(source), None) => (source, source.opposite()),
        (None, Some(target)) => (target.opposite(), target),
        (None, None) => {
            let dx = end.x - start.x;
            let dy = end.y - start.y;
            if dx.abs() >= dy.abs() {
                if dx >= 0.0 {
                    (Orientation::Right, Orientation::Left)
                } else {
                    (Orientation::Left, Orientation::Right)
                }
            } else if dy >= 0.0 {
                (Orientation::Bottom, Orientation::Top)
            } else {
                (Orientation::Top, Orientation::Bottom)
            }
        }
    }
}

fn bounds_union(params: &RoutingParameters) -> Option<Rect> {
    match (params.source_bounds, params.target_bounds) {
        (Some(a), Some(b)) => Some(a.union(&b)),
        (Some(a), None) | (None, Some(a)) => Some(a),
        (None, None) => None,
    }
}

/// True when a path departing `from` along `facing` reaches `to`'s
/// coordinate on that axis without doubling back.
fn directional_clear(facing: Orientation, from: Point, to: Point) -> bool {
    match facing {
        Orientation::Right => from.x <= to.x,
        Orientation::Left => from.x >= to.x,
        Orientation::Bottom => from.y <= to.y,
        Orientation::Top => from.y >= to.y,
    }
}

// ── Rule 1: self-connection ─────────────────────────────────────────

fn self_connection_route(
    params: &RoutingParameters,
    bounds: &Rect,
    source: Orientation,
    target: Orientation,
    ext_start: Point,
    ext_end: Point,
) -> Vec<Point> {
    let side = avoidance_side(bounds, source, target, ext_start, ext_end);
    let clearance = params.obstacle_clearance;
    tracing::debug!(?side, clearance, "self-connection loop");
    let (corner1, corner2) = match side {
        Orientation::Right => {
            let x = bounds.right() + clearance;
            (Point::new(x, ext_start.y), Point::new(x, ext_end.y))
        }
        Orientation::Left => {
            let x = bounds.x - clearance;
            (Point::new(x, ext_start.y), Point::new(x, ext_end.y))
        }
        Orientation::Top => {
            let y = bounds.y - clearance;
            (Point::new(ext_start.x, y), Point::new(ext_end.x, y))
        }
        Orientation::Bottom => {
            let y = bounds.bottom() + clearance;
            (Point::new(ext_start.x, y), Point::new(ext_end.x, y))
        }
    };
    vec![
        params.start,
        ext_start,
        corner1,
        corner2,
        ext_end,
        params.end,
    ]
}

/// Which side of its own node a self-connection loops around.
///
/// Two horizontal ports loop left or right of the vertical centerline,
/// whichever side their extended points fall on; two vertical ports loop
/// above or below likewise. A mixed pair takes the side the source port
/// names.
fn avoidance_side(
    bounds: &Rect,
    source: Orientation,
    target: Orientation,
    ext_start: Point,
    ext_end: Point,
) -> Orientation {
    let center = bounds.center();
    if source.is_horizontal() && target.is_horizontal() {
        if (ext_start.x + ext_end.x) / 2.0 >= center.x {
            Orientation::Right
        } else {
            Orientation::Left
        }
    } else if !source.is_horizontal() && !target.is_horizontal() {
        if (ext_start.y + ext_end.y) / 2.0 >= center.y {
            Orientation::Bottom
        } else {
            Orientation::Top
        }
    } else {
        source
    }
}

// ── Rule 2: collinear straight chain ────────────────────────────────

fn straight_route(
    params: &RoutingParameters,
    start: Point,
    ext_start: Point,
    ext_end: Point,
    end: Point,
) -> Option<Vec<Point>> {
    let chain = [start, ext_start, ext_end, end];
    let horizontal = chain
        .iter()
        .all(|p| (p.y - start.y).abs() <= COLLINEAR_TOLERANCE);
    let vertical = chain
        .iter()
        .all(|p| (p.x - start.x).abs() <= COLLINEAR_TOLERANCE);
    if !horizontal && !vertical {
        return None;
    }
    for bounds in [params.source_bounds, params.target_bounds].into_iter().flatten() {
        if bounds.intersects_segment(ext_start, ext_end) {
            return None;
        }
    }
    Some(vec![start, ext_start, ext_end, end])
}

// ── Rule 3: same-side ports ─────────────────────────────────────────

fn same_side_route(
    params: &RoutingParameters,
    side: Orientation,
    ext_start: Point,
    ext_end: Point,
) -> Vec<Point> {
    let clearance = params.obstacle_clearance;
    let union = bounds_union(params);
    let (corner1, corner2) = match side {
        Orientation::Right => {
            let mut base = ext_start.x.max(ext_end.x);
            if let Some(u) = union {
                base = base.max(u.right());
            }
            let x = base + clearance;
            (Point::new(x, ext_start.y), Point::new(x, ext_end.y))
        }
        Orientation::Left => {
            let mut base = ext_start.x.min(ext_end.x);
            if let Some(u) = union {
                base = base.min(u.x);
            }
            let x = base - clearance;
            (Point::new(x, ext_start.y), Point::new(x, ext_end.y))
        }
        Orientation::Top => {
            let mut base = ext_start.y.min(ext_end.y);
            if let Some(u) = union {
                base = base.min(u.y);
            }
            let y = base - clearance;
            (Point::new(ext_start.x, y), Point::new(ext_end.x, y))
        }
        Orientation::Bottom => {
            let mut base = ext_start.y.max(ext_end.y);
            if let Some(u) = union {
                base = base.max(u.bottom());
            }
            let y = base + clearance;
            (Point::new(ext_start.x, y), Point::new(ext_end.x, y))
        }
    };
    vec![
        params.start,
        ext_start,
        corner1,
        corner2,
        ext_end,
        params.end,
    ]
}

// ── Rule 4: L-shape ─────────────────────────────────────────────────

fn l_shape_route(
    params: &RoutingParameters,
    source: Orientation,
    target: Orientation,
    ext_start: Point,
    ext_end: Point,
) -> Option<Vec<Point>> {
    // The departing leg keeps the source's axis, so the corner combines
    // the source row/column with the target column/row.
    let corner = if source.is_horizontal() {
        Point::new(ext_end.x, ext_start.y)
    } else {
        Point::new(ext_start.x, ext_end.y)
    };
    if !directional_clear(source, ext_start, ext_end)
        || !directional_clear(target, ext_end, ext_start)
    {
        return None;
    }
    for bounds in [params.source_bounds, params.target_bounds].into_iter().flatten() {
        if bounds.intersects_segment(ext_start, corner)
            || bounds.intersects_segment(corner, ext_end)
        {
            return None;
        }
    }
    Some(vec![
        params.start,
        ext_start,
        corner,
        ext_end,
        params.end,
    ])
}

// ── Rule 5: opposite-facing ports ───────────────────────────────────

fn opposite_route(
    params: &RoutingParameters,
    source: Orientation,
    ext_start: Point,
    ext_end: Point,
) -> Vec<Point> {
    let horizontal = source.is_horizontal();

    // With room along the facing axis the path jogs once at the midpoint.
    if directional_clear(source, ext_start, ext_end) {
        let (corner1, corner2) = if horizontal {
            let mid_x = (ext_start.x + ext_end.x) / 2.0;
            (Point::new(mid_x, ext_start.y), Point::new(mid_x, ext_end.y))
        } else {
            let mid_y = (ext_start.y + ext_end.y) / 2.0;
            (Point::new(ext_start.x, mid_y), Point::new(ext_end.x, mid_y))
        };
        return vec![
            params.start,
            ext_start,
            corner1,
            corner2,
            ext_end,
            params.end,
        ];
    }

    // No room: loop back through the midpoint of the other axis.
    let (z_corner1, z_corner2) = if horizontal {
        let mid_y = (ext_start.y + ext_end.y) / 2.0;
        (Point::new(ext_start.x, mid_y), Point::new(ext_end.x, mid_y))
    } else {
        let mid_x = (ext_start.x + ext_end.x) / 2.0;
        (Point::new(mid_x, ext_start.y), Point::new(mid_x, ext_end.y))
    };
    let z_bend = vec![
        params.start,
        ext_start,
        z_corner1,
        z_corner2,
        ext_end,
        params.end,
    ];

    // Close ports always take the Z-bend; a loop around an obstacle this
    // near reads as a detour to nowhere.
    if params.start.distance_to(params.end) < PROXIMITY_THRESHOLD {
        return z_bend;
    }
    let Some(union) = bounds_union(params) else {
        return z_bend;
    };
    let crosses = z_bend
        .windows(2)
        .skip(1)
        .take(3)
        .any(|w| union.intersects_segment(w[0], w[1]));
    if !crosses {
        return z_bend;
    }

    // Replace the blocked Z with a loop past the union, choosing the side
    // with the smaller total deviation of both extended points.
    let clearance = params.obstacle_clearance;
    let (corner1, corner2) = if horizontal {
        let above = union.y - clearance;
        let below = union.bottom() + clearance;
        let cost = |y: f64| (ext_start.y - y).abs() + (ext_end.y - y).abs();
        let route_y = if cost(above) <= cost(below) { above } else { below };
        tracing::debug!(route_y, "opposite ports avoidance route");
        (
            Point::new(ext_start.x, route_y),
            Point::new(ext_end.x, route_y),
        )
    } else {
        let left = union.x - clearance;
        let right = union.right() + clearance;
        let cost = |x: f64| (ext_start.x - x).abs() + (ext_end.x - x).abs();
        let route_x = if cost(left) <= cost(right) { left } else { right };
        tracing::debug!(route_x, "opposite ports avoidance route");
        (
            Point::new(route_x, ext_start.y),
            Point::new(route_x, ext_end.y),
        )
    };
    vec![
        params.start,
        ext_start,
        corner1,
        corner2,
        ext_end,
        params.end,
    ]
}

// ── Rule 6: general avoidance fallback ──────────────────────────────

fn fallback_route(
    params: &RoutingParameters,
    source: Orientation,
    target: Orientation,
    ext_start: Point,
    ext_end: Point,
) -> Vec<Point> {
    if let Some(union) = bounds_union(params) {
        // The target facing is a hard constraint: a connection must never
        // enter through the back of a port, so the final approach comes
        // from the side the target names. The source leg bends to comply.
        let clearance = params.obstacle_clearance;
        let (corner1, corner2) = match target {
            Orientation::Top => {
                let y = (union.y - clearance).min(ext_end.y);
                (Point::new(ext_start.x, y), Point::new(ext_end.x, y))
            }
            Orientation::Bottom => {
                let y = (union.bottom() + clearance).max(ext_end.y);
                (Point::new(ext_start.x, y), Point::new(ext_end.x, y))
            }
            Orientation::Left => {
                let x = (union.x - clearance).min(ext_end.x);
                (Point::new(x, ext_start.y), Point::new(x, ext_end.y))
            }
            Orientation::Right => {
                let x = (union.right() + clearance).max(ext_end.x);
                (Point::new(x, ext_start.y), Point::new(x, ext_end.y))
            }
        };
        tracing::debug!(?target, "fallback route around union bounds");
        return vec![
            params.start,
            ext_start,
            corner1,
            corner2,
            ext_end,
            params.end,
        ];
    }

    // No obstacles to honor: midpoint routing on the source's axis.
    let (corner1, corner2) = if source.is_horizontal() {
        let mid_x = (ext_start.x + ext_end.x) / 2.0;
        (Point::new(mid_x, ext_start.y), Point::new(mid_x, ext_end.y))
    } else {
        let mid_y = (ext_start.y + ext_end.y) / 2.0;
        (Point::new(ext_start.x, mid_y), Point::new(ext_end.x, mid_y))
    };
    vec![
        params.start,
        ext_start,
        corner1,
        corner2,
        ext_end,
        params.end,
    ]
}

use serde::{Deserialize, Serialize};

use crate::config::RouterConfig;
use crate::geometry::{Orientation, Point, Rect};

/// Everything one routing call needs, captured as a value snapshot.
///
/// The caller (graph/view layer) rebuilds this whenever node position,
/// size, zoom, or port configuration changes; the engine never mutates or
/// caches it. `PartialEq` is derived so callers can memoize a
/// [`RoutingResult`](crate::routing::RoutingResult) keyed on parameter
/// equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingParameters {
    pub start: Point,
    pub end: Point,
    /// Facing of the source port. `None` for a free endpoint, e.g. the
    /// pointer position while a connection is being dragged.
    pub source_orientation: Option<Orientation>,
    /// Facing of the target port. `None` for a free endpoint.
    pub target_orientation: Option<Orientation>,
    /// Straight-out run from the source port before the first turn.
    /// Zero on a side with no attached port.
    pub source_extension: f64,
    pub target_extension: f64,
    pub corner_radius: f64,
    /// Gap kept between the routed path and node bodies when looping
    /// around them.
    pub obstacle_clearance: f64,
    /// Occupied area of the source node, absent for unattached endpoints.
    pub source_bounds: Option<Rect>,
    pub target_bounds: Option<Rect>,
    /// Intermediate points the user has pinned, in order. Only the
    /// editable style reads these.
    pub control_points: Vec<Point>,
}

impl RoutingParameters {
    /// Parameters for a plain port-to-port connection with crate-wide
    /// defaults taken from `config`.
    pub fn new(start: Point, end: Point, config: &RouterConfig) -> Self {
        Self {
            start,
            end,
            source_orientation: None,
            target_orientation: None,
            source_extension: config.extension,
            target_extension: config.extension,
            corner_radius: config.corner_radius,
            obstacle_clearance: config.obstacle_clearance,
            source_bounds: None,
            target_bounds: None,
            control_points: Vec::new(),
        }
    }
}

/// One drawable piece of a routed connection.
///
/// Every consumption site matches exhaustively, so adding a segment kind
/// forces the drawable-path, hit-test, and dump code to be updated
/// together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PathSegment {
    Line {
        end: Point,
    },
    Quadratic {
        control: Point,
        end: Point,
        /// Set on synthesized rounded corners: their hit coverage is
        /// subsumed by the padding of the adjacent straight segments, so
        /// the hit-test generator skips them.
        corner: bool,
    },
    Cubic {
        control1: Point,
        control2: Point,
        end: Point,
    },
}

impl PathSegment {
    /// The point this segment ends at.
    pub fn end(&self) -> Point {
        match self {
            PathSegment::Line { end } => *end,
            PathSegment::Quadratic { end, .. } => *end,
            PathSegment::Cubic { end, .. } => *end,
        }
    }
}

/// The canonical result of one routing computation.
///
/// Concatenating `start` with each segment's end point reproduces the full
/// waypoint chain; the final segment ends exactly at the requested end
/// point. The drawable path, hit rectangles, and bend points must all be
/// derived from one cached instance so the three views stay consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingResult {
    pub start: Point,
    pub segments: Vec<PathSegment>,
}

impl RoutingResult {
    /// Segment endpoints including `start`, used by editable-connection UI
    /// to render draggable handles.
    pub fn bend_points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        points.push(self.start);
        for segment in &self.segments {
            points.push(segment.end());
        }
        points
    }

    /// The point the path terminates at, `start` when there are no
    /// segments.
    pub fn end(&self) -> Point {
        self.segments.last().map_or(self.start, |s| s.end())
    }
}

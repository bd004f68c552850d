//! Connection styles: strategies that turn routing parameters into
//! segments.
//!
//! A style owns only the segment computation; the derived views (drawable
//! path, hit rectangles, bend points) are default-implemented over the
//! segment list so all three stay consistent with whichever strategy
//! produced it.

use crate::geometry::{Point, Rect};
use crate::path::Path;
use crate::routing::{self, RoutingParameters, RoutingResult, curve, editable, hit_test, segments};

/// Default control-point weight for the curved style.
const DEFAULT_CURVATURE: f64 = 0.5;

/// Strategy for computing a connection's segments.
///
/// Implementations must be pure: same parameters, same result. Callers
/// cache the [`RoutingResult`] and pass it back into the derived
/// operations rather than recomputing it per view.
pub trait ConnectionStyle {
    fn create_segments(&self, params: &RoutingParameters) -> RoutingResult;

    /// Drawable path for the cached result.
    fn build_path(&self, result: &RoutingResult) -> Path {
        Path::from_result(result)
    }

    /// Padded rectangles for pointer hit-testing.
    fn build_hit_rects(&self, result: &RoutingResult, tolerance: f64) -> Vec<Rect> {
        hit_test::hit_rects(result.start, &result.segments, tolerance)
    }

    /// Handle positions for editable-connection UI.
    fn bend_points(&self, result: &RoutingResult) -> Vec<Point> {
        result.bend_points()
    }
}

/// The default style: orthogonal waypoints with rounded corners. Ignores
/// any user control points.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrthogonalStyle;

impl ConnectionStyle for OrthogonalStyle {
    fn create_segments(&self, params: &RoutingParameters) -> RoutingResult {
        routing::route(params)
    }
}

/// Orthogonal style threading the route through user-pinned control
/// points. Falls back to the automatic calculator while no meaningful
/// edit exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditableStyle;

impl ConnectionStyle for EditableStyle {
    fn create_segments(&self, params: &RoutingParameters) -> RoutingResult {
        let points = editable::reconcile(&params.control_points, params);
        RoutingResult {
            start: params.start,
            segments: segments::synthesize(&points, params.corner_radius),
        }
    }
}

/// Smooth single-cubic style.
#[derive(Debug, Clone, Copy)]
pub struct CurvedStyle {
    /// Scales control-point distance with the axis span between the
    /// endpoints; clamped below by the port extension.
    pub curvature: f64,
}

impl Default for CurvedStyle {
    fn default() -> Self {
        Self {
            curvature: DEFAULT_CURVATURE,
        }
    }
}

impl ConnectionStyle for CurvedStyle {
    fn create_segments(&self, params: &RoutingParameters) -> RoutingResult {
        RoutingResult {
            start: params.start,
            segments: vec![curve::cubic_from_parameters(params, self.curvature)],
        }
    }
}

pub mod curve;
pub mod editable;
pub mod segments;
pub mod waypoints;

mod types;
pub use types::*;

/// Route one connection through the default orthogonal pipeline:
/// waypoints, optimization, corner-rounded synthesis.
///
/// The result is a value; callers memoize it keyed on parameter equality
/// and derive the drawable path, hit rectangles, and bend points from the
/// one cached instance.
pub fn route(params: &RoutingParameters) -> RoutingResult {
    let points = waypoints::optimize(&waypoints::calculate_waypoints(params));
    RoutingResult {
        start: params.start,
        segments: segments::synthesize(&points, params.corner_radius),
    }
}

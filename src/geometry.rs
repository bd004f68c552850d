//! Geometry primitives shared by the routing engine.
//!
//! All coordinates use top-left origin convention: x grows rightward,
//! y grows downward, `Rect.x`/`Rect.y` is the top-left corner. This matches
//! the coordinate system of typical canvas/SVG hosts, so consumers need no
//! conversion when drawing routed paths.

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned rectangle (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing every point in `points`.
    /// Degenerate (zero-area) rectangles are valid results.
    pub fn bounding(points: &[Point]) -> Self {
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        if min_x > max_x {
            return Self::new(0.0, 0.0, 0.0, 0.0);
        }
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Right edge x-coordinate.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Grow (or shrink, for negative `amount`) the rectangle on every side.
    pub fn inflate(&self, amount: f64) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Whether `point` lies inside or on the boundary.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Whether the segment `a`..`b` passes through the rectangle's interior.
    /// Touching an edge from outside does not count, so a stub departing
    /// from a node boundary is not flagged against its own node.
    pub fn intersects_segment(&self, a: Point, b: Point) -> bool {
        // Liang-Barsky clip of the parametric segment against the box.
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let mut t0 = 0.0f64;
        let mut t1 = 1.0f64;
        let checks = [
            (-dx, a.x - self.x),
            (dx, self.right() - a.x),
            (-dy, a.y - self.y),
            (dy, self.bottom() - a.y),
        ];
        for (p, q) in checks {
            if p.abs() < 1e-12 {
                if q < 0.0 {
                    return false;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return false;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return false;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
        if t1 - t0 < 1e-9 {
            return false;
        }
        // The clipped span must have interior extent, not just graze a corner
        // or run along one edge of a zero-thickness overlap.
        let mid = Point::new(a.x + dx * (t0 + t1) / 2.0, a.y + dy * (t0 + t1) / 2.0);
        mid.x > self.x && mid.x < self.right() && mid.y > self.y && mid.y < self.bottom()
    }
}

/// The direction a port faces: the axis a connection departs or arrives
/// along. Also used for avoidance-side selection when looping around nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Left,
    Right,
    Top,
    Bottom,
}

impl Orientation {
    /// The geometrically opposite facing.
    pub fn opposite(&self) -> Orientation {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
            Orientation::Top => Orientation::Bottom,
            Orientation::Bottom => Orientation::Top,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Left | Orientation::Right)
    }

    /// Unit vector pointing out of a port with this facing.
    pub fn unit(&self) -> (f64, f64) {
        match self {
            Orientation::Left => (-1.0, 0.0),
            Orientation::Right => (1.0, 0.0),
            Orientation::Top => (0.0, -1.0),
            Orientation::Bottom => (0.0, 1.0),
        }
    }

    /// `point` moved `distance` units straight out along this facing.
    pub fn extend(&self, point: Point, distance: f64) -> Point {
        let (ux, uy) = self.unit();
        Point::new(point.x + ux * distance, point.y + uy * distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn rect_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!((r.right() - 110.0).abs() < 1e-10);
        assert!((r.bottom() - 70.0).abs() < 1e-10);
        let c = r.center();
        assert!((c.x - 60.0).abs() < 1e-10);
        assert!((c.y - 45.0).abs() < 1e-10);
    }

    #[test]
    fn rect_union_covers_both() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 5.0, 10.0, 30.0);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(0.0, 0.0, 30.0, 35.0));
    }

    #[test]
    fn rect_bounding_points() {
        let r = Rect::bounding(&[Point::new(5.0, 8.0), Point::new(-1.0, 2.0)]);
        assert_eq!(r, Rect::new(-1.0, 2.0, 6.0, 6.0));
    }

    #[test]
    fn rect_inflate_grows_all_sides() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0).inflate(5.0);
        assert_eq!(r, Rect::new(5.0, 5.0, 30.0, 30.0));
    }

    #[test]
    fn segment_through_interior_intersects() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(r.intersects_segment(Point::new(-10.0, 25.0), Point::new(110.0, 25.0)));
    }

    #[test]
    fn segment_outside_misses() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(!r.intersects_segment(Point::new(-10.0, 60.0), Point::new(110.0, 60.0)));
    }

    #[test]
    fn stub_leaving_boundary_does_not_intersect() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        // A port stub departing straight out of the right edge.
        assert!(!r.intersects_segment(Point::new(100.0, 25.0), Point::new(120.0, 25.0)));
    }

    #[test]
    fn segment_grazing_edge_does_not_intersect() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(!r.intersects_segment(Point::new(-10.0, 0.0), Point::new(110.0, 0.0)));
    }

    #[test]
    fn orientation_opposites() {
        assert_eq!(Orientation::Left.opposite(), Orientation::Right);
        assert_eq!(Orientation::Top.opposite(), Orientation::Bottom);
    }

    #[test]
    fn orientation_extend() {
        let p = Orientation::Top.extend(Point::new(5.0, 5.0), 3.0);
        assert_eq!(p, Point::new(5.0, 2.0));
    }
}

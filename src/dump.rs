//! Debug snapshot of one routing computation.
//!
//! Mirrors what the engine handed back for a connection so layout issues
//! can be diffed offline without a rendering host attached.

use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::routing::{PathSegment, RoutingResult, hit_test};

#[derive(Debug, Serialize)]
pub struct RoutingDump {
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub segments: Vec<SegmentDump>,
    pub bend_points: Vec<[f64; 2]>,
    pub hit_rects: Vec<[f64; 4]>,
}

#[derive(Debug, Serialize)]
pub struct SegmentDump {
    pub kind: String,
    /// Control points first (if any), end point last.
    pub points: Vec<[f64; 2]>,
}

impl RoutingDump {
    pub fn from_result(result: &RoutingResult, hit_tolerance: f64) -> Self {
        let segments = result
            .segments
            .iter()
            .map(|segment| match *segment {
                PathSegment::Line { end } => SegmentDump {
                    kind: "line".to_string(),
                    points: vec![[end.x, end.y]],
                },
                PathSegment::Quadratic { control, end, corner } => SegmentDump {
                    kind: if corner { "corner" } else { "quadratic" }.to_string(),
                    points: vec![[control.x, control.y], [end.x, end.y]],
                },
                PathSegment::Cubic {
                    control1,
                    control2,
                    end,
                } => SegmentDump {
                    kind: "cubic".to_string(),
                    points: vec![
                        [control1.x, control1.y],
                        [control2.x, control2.y],
                        [end.x, end.y],
                    ],
                },
            })
            .collect();
        let bend_points = result
            .bend_points()
            .iter()
            .map(|p| [p.x, p.y])
            .collect();
        let hit_rects = hit_test::hit_rects(result.start, &result.segments, hit_tolerance)
            .iter()
            .map(|r| [r.x, r.y, r.width, r.height])
            .collect();
        let end = result.end();
        Self {
            start: [result.start.x, result.start.y],
            end: [end.x, end.y],
            segments,
            bend_points,
            hit_rects,
        }
    }
}

/// Write a pretty-printed JSON dump of `result` to `path`.
pub fn write_routing_dump(
    path: &Path,
    result: &RoutingResult,
    hit_tolerance: f64,
) -> anyhow::Result<()> {
    let dump = RoutingDump::from_result(result, hit_tolerance);
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn sample_result() -> RoutingResult {
        RoutingResult {
            start: Point::new(0.0, 0.0),
            segments: vec![
                PathSegment::Line {
                    end: Point::new(42.0, 0.0),
                },
                PathSegment::Quadratic {
                    control: Point::new(50.0, 0.0),
                    end: Point::new(50.0, 8.0),
                    corner: true,
                },
                PathSegment::Line {
                    end: Point::new(50.0, 50.0),
                },
            ],
        }
    }

    #[test]
    fn dump_captures_all_views() {
        let dump = RoutingDump::from_result(&sample_result(), 6.0);
        assert_eq!(dump.start, [0.0, 0.0]);
        assert_eq!(dump.end, [50.0, 50.0]);
        assert_eq!(dump.segments.len(), 3);
        assert_eq!(dump.segments[1].kind, "corner");
        assert_eq!(dump.bend_points.len(), 4);
        assert_eq!(dump.hit_rects.len(), 2);
    }

    #[test]
    fn dump_writes_json() {
        let path = std::env::temp_dir().join("wireroute_dump_test.json");
        write_routing_dump(&path, &sample_result(), 6.0).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["segments"][0]["kind"], "line");
    }
}

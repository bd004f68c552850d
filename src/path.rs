//! Drawable path assembly.
//!
//! [`Path`] is the bridge between a routed segment list and whatever the
//! host draws with: each command maps one-to-one onto the move/line/quad/
//! cubic primitives of canvas-style APIs, and `to_svg_data` renders the
//! same commands as SVG path data for SVG hosts.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::routing::{PathSegment, RoutingResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, end: Point },
    CubicTo { control1: Point, control2: Point, end: Point },
}

/// An ordered list of drawing commands for one connection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Build the drawable path for a routed result.
    pub fn from_result(result: &RoutingResult) -> Self {
        let mut commands = Vec::with_capacity(result.segments.len() + 1);
        commands.push(PathCommand::MoveTo(result.start));
        for segment in &result.segments {
            commands.push(match *segment {
                PathSegment::Line { end } => PathCommand::LineTo(end),
                PathSegment::Quadratic { control, end, .. } => PathCommand::QuadTo { control, end },
                PathSegment::Cubic {
                    control1,
                    control2,
                    end,
                } => PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                },
            });
        }
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// The initial move-to position, if any.
    pub fn start(&self) -> Option<Point> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Render as SVG path data (`M`/`L`/`Q`/`C`).
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        for command in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            match command {
                PathCommand::MoveTo(p) => {
                    d.push_str(&format!("M {:.2} {:.2}", p.x, p.y));
                }
                PathCommand::LineTo(p) => {
                    d.push_str(&format!("L {:.2} {:.2}", p.x, p.y));
                }
                PathCommand::QuadTo { control, end } => {
                    d.push_str(&format!(
                        "Q {:.2} {:.2} {:.2} {:.2}",
                        control.x, control.y, end.x, end.y
                    ));
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    d.push_str(&format!(
                        "C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                        control1.x, control1.y, control2.x, control2.y, end.x, end.y
                    ));
                }
            }
        }
        d
    }
}

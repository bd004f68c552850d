pub mod config;
pub mod dump;
pub mod geometry;
pub mod path;
pub mod routing;
pub mod style;

pub use config::{RouterConfig, load_config};
pub use geometry::{Orientation, Point, Rect};
pub use path::{Path, PathCommand};
pub use routing::{PathSegment, RoutingParameters, RoutingResult, route};
pub use style::{ConnectionStyle, CurvedStyle, EditableStyle, OrthogonalStyle};

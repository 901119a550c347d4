// geometry/mod.rs
//
// 2D geometry: rectangles, paths, fitting and the polygon builder.
// All values are f64 glam types; nothing here renders.

pub mod fit;
pub mod path;
pub mod polygon;
pub mod rect;

pub use fit::{adjust_to_rect, adjust_transform, fit_to_rect, fit_transform};
pub use path::{Path, PathSegment, SegmentKind};
pub use polygon::{build_polygon, PolygonParams, PolygonStyle};
pub use rect::{aspect_scale_fit, centered_transform, rect_by_fitting_rect, Rect};

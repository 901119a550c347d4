pub mod color;
pub mod error;
pub mod geometry;
pub mod math;
pub mod shading;

// Re-export key types at crate root for convenience
pub use color::{Rgba, Rgba8};
pub use error::{Error, Result};
pub use geometry::{
    adjust_to_rect, build_polygon, fit_to_rect, Path, PathSegment, PolygonParams, PolygonStyle,
    Rect, SegmentKind,
};
pub use math::{catalogue, lookup, Easing, EasingFunction, GradientFunction};
pub use shading::{GradientKind, ShadingGradient};

// Geometry primitives are glam's f64 types.
pub use glam::{DAffine2, DVec2};

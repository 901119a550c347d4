//! Vector path value type.
//!
//! A [`Path`] is an ordered list of drawing commands in `f64` space. It is
//! built incrementally (see [`crate::geometry::polygon`]), then moved, rotated
//! and scaled in place with affine maps about its own bounding-box center.
//!
//! With the `vectors` feature a path converts to a [`lyon::path::Path`] so it
//! can be fed straight to lyon's fill and stroke tessellators.

use glam::{DAffine2, DVec2};

use super::rect::{centered_transform, Rect};

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo { ctrl: DVec2, to: DVec2 },
    CubicTo { ctrl1: DVec2, ctrl2: DVec2, to: DVec2 },
    Close,
}

/// Segment kind without coordinates, for counting and matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    MoveTo,
    LineTo,
    QuadTo,
    CubicTo,
    Close,
}

impl PathSegment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            PathSegment::MoveTo(_) => SegmentKind::MoveTo,
            PathSegment::LineTo(_) => SegmentKind::LineTo,
            PathSegment::QuadTo { .. } => SegmentKind::QuadTo,
            PathSegment::CubicTo { .. } => SegmentKind::CubicTo,
            PathSegment::Close => SegmentKind::Close,
        }
    }

    fn map_points(&mut self, mut f: impl FnMut(DVec2) -> DVec2) {
        match self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => *p = f(*p),
            PathSegment::QuadTo { ctrl, to } => {
                *ctrl = f(*ctrl);
                *to = f(*to);
            }
            PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                *ctrl1 = f(*ctrl1);
                *ctrl2 = f(*ctrl2);
                *to = f(*to);
            }
            PathSegment::Close => {}
        }
    }
}

/// Ordered sequence of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, p: DVec2) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: DVec2) -> &mut Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn quad_to(&mut self, ctrl: DVec2, to: DVec2) -> &mut Self {
        self.segments.push(PathSegment::QuadTo { ctrl, to });
        self
    }

    pub fn cubic_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2) -> &mut Self {
        self.segments.push(PathSegment::CubicTo { ctrl1, ctrl2, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments of the given kind.
    pub fn count(&self, kind: SegmentKind) -> usize {
        self.segments.iter().filter(|s| s.kind() == kind).count()
    }

    /// Every point in the path, control points included.
    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.segments.iter().flat_map(|s| {
            let pts: [Option<DVec2>; 3] = match *s {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => [Some(p), None, None],
                PathSegment::QuadTo { ctrl, to } => [Some(ctrl), Some(to), None],
                PathSegment::CubicTo { ctrl1, ctrl2, to } => [Some(ctrl1), Some(ctrl2), Some(to)],
                PathSegment::Close => [None, None, None],
            };
            pts.into_iter().flatten()
        })
    }

    /// Axis-aligned box over all points, control points included.
    ///
    /// This is the conservative path box: it always contains the curve, and it
    /// transforms exactly under axis-aligned scale and translation.
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::bounding(self.points())
    }

    /// Apply an affine map to every point in place.
    pub fn apply(&mut self, transform: DAffine2) {
        for seg in &mut self.segments {
            seg.map_points(|p| transform.transform_point2(p));
        }
    }

    /// Copy of this path with `transform` applied about the origin.
    /// See [`centered_transformed`](Self::centered_transformed) for the
    /// bounding-box-centered variant.
    pub fn transformed(&self, transform: DAffine2) -> Path {
        let mut out = self.clone();
        out.apply(transform);
        out
    }

    /// Copy of this path with `transform` applied about its bounding-box center.
    pub fn centered_transformed(&self, transform: DAffine2) -> Path {
        let mut out = self.clone();
        out.apply_centered_transform(transform);
        out
    }

    /// Apply `transform` about the center of the bounding box.
    /// Empty paths are left unchanged.
    pub fn apply_centered_transform(&mut self, transform: DAffine2) {
        if let Some(bounds) = self.bounding_box() {
            self.apply(centered_transform(transform, bounds.center()));
        }
    }

    /// Rotate by `theta` radians about the bounding-box center.
    pub fn rotate(&mut self, theta: f64) {
        self.apply_centered_transform(DAffine2::from_angle(theta));
    }

    /// Scale per axis about the bounding-box center.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.apply_centered_transform(DAffine2::from_scale(DVec2::new(sx, sy)));
    }

    /// Translate by `delta`.
    pub fn offset(&mut self, delta: DVec2) {
        self.apply(DAffine2::from_translation(delta));
    }

    /// Translate so the bounding-box origin lands on `dest`.
    pub fn move_to_point(&mut self, dest: DVec2) {
        if let Some(bounds) = self.bounding_box() {
            self.offset(dest - bounds.origin);
        }
    }

    /// Translate so the bounding-box center lands on `dest`.
    pub fn move_center_to_point(&mut self, dest: DVec2) {
        if let Some(bounds) = self.bounding_box() {
            self.offset(dest - bounds.center());
        }
    }

    /// SVG path data, e.g. `"M 0 0 L 10 0 Q 15 5 10 10 Z"`.
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            if !out.is_empty() {
                out.push(' ');
            }
            let cmd = match *seg {
                PathSegment::MoveTo(p) => format!("M {} {}", p.x, p.y),
                PathSegment::LineTo(p) => format!("L {} {}", p.x, p.y),
                PathSegment::QuadTo { ctrl, to } => {
                    format!("Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
                }
                PathSegment::CubicTo { ctrl1, ctrl2, to } => format!(
                    "C {} {} {} {} {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                ),
                PathSegment::Close => "Z".to_string(),
            };
            out.push_str(&cmd);
        }
        out
    }

    /// Convert to a lyon path (`f32`) for tessellation.
    ///
    /// A drawing command without an open sub-path starts one at the last
    /// known point (the origin if there is none).
    #[cfg(feature = "vectors")]
    pub fn to_lyon(&self) -> lyon::path::Path {
        use lyon::math::point;

        let pt = |p: DVec2| point(p.x as f32, p.y as f32);
        let mut builder = lyon::path::Path::builder();
        let mut open = false;
        let mut start = DVec2::ZERO;
        let mut current = DVec2::ZERO;

        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(pt(p));
                    open = true;
                    start = p;
                    current = p;
                }
                PathSegment::Close => {
                    if open {
                        builder.close();
                        open = false;
                    }
                    current = start;
                }
                PathSegment::LineTo(to) => {
                    if !open {
                        builder.begin(pt(current));
                        start = current;
                        open = true;
                    }
                    builder.line_to(pt(to));
                    current = to;
                }
                PathSegment::QuadTo { ctrl, to } => {
                    if !open {
                        builder.begin(pt(current));
                        start = current;
                        open = true;
                    }
                    builder.quadratic_bezier_to(pt(ctrl), pt(to));
                    current = to;
                }
                PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                    if !open {
                        builder.begin(pt(current));
                        start = current;
                        open = true;
                    }
                    builder.cubic_bezier_to(pt(ctrl1), pt(ctrl2), pt(to));
                    current = to;
                }
            }
        }
        if open {
            builder.end(false);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Path {
        let mut p = Path::new();
        p.move_to(DVec2::new(0.0, 0.0))
            .line_to(DVec2::new(10.0, 0.0))
            .line_to(DVec2::new(10.0, 10.0))
            .line_to(DVec2::new(0.0, 10.0))
            .close();
        p
    }

    fn near(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn builder_records_segments() {
        let p = square();
        assert_eq!(p.len(), 5);
        assert_eq!(p.count(SegmentKind::LineTo), 3);
        assert_eq!(p.segments()[0].kind(), SegmentKind::MoveTo);
        assert_eq!(p.segments()[4], PathSegment::Close);
    }

    #[test]
    fn bounding_box_includes_control_points() {
        let mut p = Path::new();
        p.move_to(DVec2::ZERO)
            .quad_to(DVec2::new(5.0, 20.0), DVec2::new(10.0, 0.0));
        let bb = p.bounding_box().unwrap();
        assert_eq!(bb, Rect::new(0.0, 0.0, 10.0, 20.0));
        assert!(Path::new().bounding_box().is_none());
    }

    #[test]
    fn scale_about_center() {
        let mut p = square();
        p.scale(2.0, 3.0);
        let bb = p.bounding_box().unwrap();
        assert!(near(bb.center(), DVec2::new(5.0, 5.0)));
        assert!(near(bb.size, DVec2::new(20.0, 30.0)));
    }

    #[test]
    fn rotate_about_center_keeps_box_for_square() {
        let mut p = square();
        p.rotate(std::f64::consts::FRAC_PI_2);
        let bb = p.bounding_box().unwrap();
        assert!(near(bb.min(), DVec2::ZERO));
        assert!(near(bb.max(), DVec2::new(10.0, 10.0)));
    }

    #[test]
    fn move_helpers() {
        let mut p = square();
        p.move_to_point(DVec2::new(100.0, 50.0));
        assert!(near(p.bounding_box().unwrap().origin, DVec2::new(100.0, 50.0)));

        p.move_center_to_point(DVec2::ZERO);
        assert!(near(p.bounding_box().unwrap().center(), DVec2::ZERO));

        let mut empty = Path::new();
        empty.move_center_to_point(DVec2::ONE);
        assert!(empty.is_empty());
    }

    #[test]
    fn transformed_leaves_source_alone() {
        let p = square();
        let moved = p.transformed(DAffine2::from_translation(DVec2::new(1.0, 2.0)));
        assert_eq!(p, square());
        assert_eq!(moved.segments()[0], PathSegment::MoveTo(DVec2::new(1.0, 2.0)));
    }

    #[test]
    fn centered_transformed_keeps_center() {
        let p = square();
        let scaled = p.centered_transformed(DAffine2::from_scale(DVec2::splat(2.0)));
        assert_eq!(p, square());
        let bb = scaled.bounding_box().unwrap();
        assert!(near(bb.center(), DVec2::new(5.0, 5.0)));
        assert!(near(bb.min(), DVec2::new(-5.0, -5.0)));

        // About the origin the same map moves the center.
        let bb = p.transformed(DAffine2::from_scale(DVec2::splat(2.0))).bounding_box().unwrap();
        assert!(near(bb.center(), DVec2::new(10.0, 10.0)));
    }

    #[test]
    fn svg_path_data() {
        let mut p = Path::new();
        p.move_to(DVec2::new(0.0, 0.0))
            .line_to(DVec2::new(1.0, 0.0))
            .quad_to(DVec2::new(1.5, 0.5), DVec2::new(1.0, 1.0))
            .cubic_to(DVec2::new(0.5, 1.5), DVec2::new(0.0, 1.5), DVec2::new(0.0, 1.0))
            .close();
        assert_eq!(
            p.to_svg_path_data(),
            "M 0 0 L 1 0 Q 1.5 0.5 1 1 C 0.5 1.5 0 1.5 0 1 Z"
        );
    }

    #[cfg(feature = "vectors")]
    #[test]
    fn lyon_conversion_keeps_structure() {
        use lyon::path::PathEvent;

        let lyon_path = square().to_lyon();
        let events: Vec<PathEvent> = lyon_path.iter().collect();
        // Begin, 3 lines, End(close)
        assert_eq!(events.len(), 5);
        assert!(matches!(events[0], PathEvent::Begin { .. }));
        assert!(matches!(events[4], PathEvent::End { close: true, .. }));
    }
}

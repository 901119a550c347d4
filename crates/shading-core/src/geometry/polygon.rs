// geometry/polygon.rs
//
// Regular and star-like polygon paths.
//
// Usage:
//   let path = PolygonParams::new(6)
//       .with_radius(50.0)
//       .with_style(PolygonStyle::CurveSingle)
//       .with_inflection(0.3)
//       .build()?;

use std::f64::consts::TAU;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::fit::fit_to_rect;
use super::path::Path;
use super::rect::Rect;
use crate::error::{check_index, Error, Result};

/// How each polygon edge is drawn once inflection is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolygonStyle {
    /// Line out to the inflected edge midpoint and back: a star.
    FlatSingle,
    /// Two inflected points at 1/3 and 2/3 of the edge.
    FlatDouble,
    /// One quadratic curve per edge, controlled by the inflected midpoint.
    #[default]
    CurveSingle,
    /// One cubic curve per edge, controlled at 1/3 and 2/3.
    CurveDouble,
    /// Inflected 1/3 point, center, inflected 2/3 point.
    FlatTriple,
    /// Two quadratic curves per edge meeting at the center.
    CurveTriple,
}

impl PolygonStyle {
    pub const ALL: [PolygonStyle; 6] = [
        PolygonStyle::FlatSingle,
        PolygonStyle::FlatDouble,
        PolygonStyle::CurveSingle,
        PolygonStyle::CurveDouble,
        PolygonStyle::FlatTriple,
        PolygonStyle::CurveTriple,
    ];

    pub fn from_index(index: i64) -> Result<Self> {
        check_index(index, Self::ALL.len()).map(|i| Self::ALL[i])
    }
}

/// Polygon construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonParams {
    /// Number of sides, at least 3.
    pub sides: usize,
    /// Vertex distance from the center.
    pub radius: f64,
    /// Angle of the first vertex, in radians.
    pub start_angle: f64,
    pub style: PolygonStyle,
    /// Fraction of `radius` added to inflected points. Zero draws a plain
    /// polygon regardless of `style`. Not clamped.
    pub inflection: f64,
}

impl Default for PolygonParams {
    fn default() -> Self {
        Self {
            sides: 5,
            radius: 50.0,
            start_angle: 0.0,
            style: PolygonStyle::CurveSingle,
            inflection: 0.0,
        }
    }
}

impl PolygonParams {
    pub fn new(sides: usize) -> Self {
        Self {
            sides,
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_start_angle(mut self, start_angle: f64) -> Self {
        self.start_angle = start_angle;
        self
    }

    pub fn with_style(mut self, style: PolygonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_inflection(mut self, inflection: f64) -> Self {
        self.inflection = inflection;
        self
    }

    /// Build the path centered on the origin.
    pub fn build(&self) -> Result<Path> {
        build_polygon(self.sides, self.radius, self.start_angle, self.style, self.inflection)
    }

    /// Build the path, fit it into `frame` and center it there.
    pub fn build_in_frame(&self, frame: &Rect) -> Result<Path> {
        let path = self.build()?;
        let mut fitted = fit_to_rect(&path, frame)?;
        fitted.move_center_to_point(frame.center());
        log::debug!(
            "polygon: {} sides, {:?}, inflection {} fitted into {}x{}",
            self.sides,
            self.style,
            self.inflection,
            frame.width(),
            frame.height()
        );
        Ok(fitted)
    }
}

/// Build a closed polygon path centered on the origin.
///
/// Vertex `k` sits at angle `start_angle + k * 2π/sides`. With
/// `inflection == 0` the result is a plain polygon and `style` is ignored;
/// it walks the closing angle inclusively, so it carries `sides + 1` line
/// segments ending on a point coincident with the start. Styled paths emit
/// exactly `sides` per-edge blocks and rely on the final close.
pub fn build_polygon(
    sides: usize,
    radius: f64,
    start_angle: f64,
    style: PolygonStyle,
    inflection: f64,
) -> Result<Path> {
    if sides < 3 {
        return Err(Error::invalid("polygon requires 3+ sides"));
    }
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(Error::invalid(format!("polygon radius must be finite and >= 0, got {radius}")));
    }

    let step = TAU / sides as f64;
    let point_at = |theta: f64| point_on_circle(theta + start_angle, radius);
    let inflected_at = |theta: f64| point_on_circle(theta + start_angle, radius * (1.0 + inflection));
    let centered_at = |theta: f64| point_on_circle(theta + start_angle, 0.0);
    let edge = |k: usize| k as f64 * step;

    let mut path = Path::with_capacity(segment_capacity(sides));
    path.move_to(point_at(0.0));

    if inflection == 0.0 {
        for k in 0..=sides {
            path.line_to(point_at(edge(k)));
        }
        path.close();
        return Ok(path);
    }

    let (third, two_thirds, half) = (step / 3.0, 2.0 * step / 3.0, step / 2.0);
    for k in 0..sides {
        let a = edge(k);
        let next = point_at(a + step);
        match style {
            PolygonStyle::FlatSingle => {
                path.line_to(inflected_at(a + half));
                path.line_to(next);
            }
            PolygonStyle::CurveSingle => {
                path.quad_to(inflected_at(a + half), next);
            }
            PolygonStyle::FlatDouble => {
                path.line_to(inflected_at(a + third));
                path.line_to(inflected_at(a + two_thirds));
                path.line_to(next);
            }
            PolygonStyle::CurveDouble => {
                path.cubic_to(inflected_at(a + third), inflected_at(a + two_thirds), next);
            }
            PolygonStyle::FlatTriple => {
                path.line_to(inflected_at(a + third));
                path.line_to(centered_at(a + half));
                path.line_to(inflected_at(a + two_thirds));
                path.line_to(next);
            }
            PolygonStyle::CurveTriple => {
                path.quad_to(inflected_at(a + third), centered_at(a + half));
                path.quad_to(inflected_at(a + two_thirds), next);
            }
        }
    }
    path.close();
    Ok(path)
}

#[inline]
fn point_on_circle(theta: f64, r: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Upper bound on segments for `sides`, or 0 (grow on demand) when it overflows.
fn segment_capacity(sides: usize) -> usize {
    sides
        .checked_mul(4)
        .and_then(|n| n.checked_add(3))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::path::{PathSegment, SegmentKind};

    #[test]
    fn too_few_sides_is_rejected() {
        let err = build_polygon(2, 10.0, 0.0, PolygonStyle::FlatSingle, 0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref m) if m == "polygon requires 3+ sides"));
        assert!(build_polygon(0, 10.0, 0.0, PolygonStyle::FlatSingle, 0.5).is_err());
        assert!(build_polygon(3, -1.0, 0.0, PolygonStyle::FlatSingle, 0.0).is_err());
    }

    #[test]
    fn capacity_hint_does_not_overflow() {
        assert_eq!(segment_capacity(5), 23);
        assert_eq!(segment_capacity(usize::MAX), 0);
        assert_eq!(segment_capacity(usize::MAX / 4 + 1), 0);

        let star = build_polygon(5, 10.0, 0.0, PolygonStyle::FlatDouble, 0.5).unwrap();
        assert!(star.len() <= segment_capacity(5));
    }

    #[test]
    fn zero_inflection_ignores_style() {
        let flat = build_polygon(4, 10.0, 0.0, PolygonStyle::FlatSingle, 0.0).unwrap();
        let curve = build_polygon(4, 10.0, 0.0, PolygonStyle::CurveSingle, 0.0).unwrap();
        assert_eq!(flat, curve);
    }

    #[test]
    fn zero_inflection_walks_closing_angle() {
        let path = build_polygon(4, 10.0, 0.0, PolygonStyle::CurveTriple, 0.0).unwrap();
        assert_eq!(path.count(SegmentKind::MoveTo), 1);
        assert_eq!(path.count(SegmentKind::LineTo), 5);
        assert_eq!(path.count(SegmentKind::Close), 1);
        assert_eq!(path.len(), 7);

        let PathSegment::MoveTo(start) = path.segments()[0] else { panic!("expected move") };
        let PathSegment::LineTo(last) = path.segments()[5] else { panic!("expected line") };
        assert!((start - DVec2::new(10.0, 0.0)).length() < 1e-12);
        assert!((last - start).length() < 1e-9);
    }

    #[test]
    fn per_style_segment_counts() {
        let sides = 6;
        let build = |style| build_polygon(sides, 50.0, 0.0, style, 0.3).unwrap();

        let p = build(PolygonStyle::CurveSingle);
        assert_eq!(p.count(SegmentKind::QuadTo), 6);
        assert_eq!(p.len(), 6 + 2);

        let p = build(PolygonStyle::FlatSingle);
        assert_eq!(p.count(SegmentKind::LineTo), 12);

        let p = build(PolygonStyle::FlatDouble);
        assert_eq!(p.count(SegmentKind::LineTo), 18);

        let p = build(PolygonStyle::CurveDouble);
        assert_eq!(p.count(SegmentKind::CubicTo), 6);

        let p = build(PolygonStyle::FlatTriple);
        assert_eq!(p.count(SegmentKind::LineTo), 24);

        let p = build(PolygonStyle::CurveTriple);
        assert_eq!(p.count(SegmentKind::QuadTo), 12);

        for style in PolygonStyle::ALL {
            let p = build(style);
            assert_eq!(p.segments()[0].kind(), SegmentKind::MoveTo);
            assert_eq!(p.segments().last().map(|s| s.kind()), Some(SegmentKind::Close));
        }
    }

    #[test]
    fn inflected_points_reach_outward() {
        let path = build_polygon(5, 10.0, 0.0, PolygonStyle::FlatSingle, 0.5).unwrap();
        let PathSegment::LineTo(tip) = path.segments()[1] else { panic!("expected line") };
        assert!((tip.length() - 15.0).abs() < 1e-9);
        let PathSegment::LineTo(vertex) = path.segments()[2] else { panic!("expected line") };
        assert!((vertex.length() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn triple_styles_pass_through_center() {
        let path = build_polygon(3, 10.0, 0.0, PolygonStyle::FlatTriple, 0.2).unwrap();
        let PathSegment::LineTo(mid) = path.segments()[2] else { panic!("expected line") };
        assert!(mid.length() < 1e-12);

        let path = build_polygon(3, 10.0, 0.0, PolygonStyle::CurveTriple, 0.2).unwrap();
        let PathSegment::QuadTo { to, .. } = path.segments()[1] else { panic!("expected quad") };
        assert!(to.length() < 1e-12);
    }

    #[test]
    fn start_angle_rotates_first_vertex() {
        let path = build_polygon(3, 2.0, std::f64::consts::FRAC_PI_2, PolygonStyle::FlatSingle, 0.0).unwrap();
        let PathSegment::MoveTo(start) = path.segments()[0] else { panic!("expected move") };
        assert!((start - DVec2::new(0.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn build_in_frame_centers_path() {
        let frame = Rect::new(10.0, 20.0, 200.0, 100.0);
        let path = PolygonParams::new(7)
            .with_style(PolygonStyle::CurveDouble)
            .with_inflection(0.4)
            .build_in_frame(&frame)
            .unwrap();
        let bb = path.bounding_box().unwrap();
        assert!((bb.center() - frame.center()).length() < 1e-6);
        assert!(bb.width() <= frame.width() + 1e-9);
        assert!(bb.height() <= frame.height() + 1e-9);
    }

    #[test]
    fn style_index_and_params_json() {
        assert_eq!(PolygonStyle::from_index(5).unwrap(), PolygonStyle::CurveTriple);
        assert!(PolygonStyle::from_index(6).is_err());

        let params: PolygonParams =
            serde_json::from_str(r#"{ "sides": 8, "style": "flat_double", "inflection": 0.25 }"#).unwrap();
        assert_eq!(params.sides, 8);
        assert_eq!(params.radius, 50.0);
        assert_eq!(params.style, PolygonStyle::FlatDouble);
    }
}

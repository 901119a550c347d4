// geometry/rect.rs
//
// Axis-aligned rectangles and the aspect-fit helpers built on them.
// Points and sizes are glam `DVec2`, affine maps are `DAffine2`.

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle described by its minimum corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    pub fn from_min_max(min: DVec2, max: DVec2) -> Self {
        Self {
            origin: min,
            size: max - min,
        }
    }

    /// Rectangle of `size` centered on `center`.
    pub fn around_center(center: DVec2, size: DVec2) -> Self {
        Self {
            origin: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn min(&self) -> DVec2 {
        self.origin
    }

    #[inline]
    pub fn max(&self) -> DVec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.origin + self.size / 2.0
    }

    /// True when either side is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.size.x.is_finite() && self.size.y.is_finite() && self.size.x > 0.0 && self.size.y > 0.0)
    }

    /// Smallest rectangle containing every point, or `None` for an empty iterator.
    pub fn bounding(points: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::from_min_max(min, max))
    }
}

/// Uniform scale that fits `source` inside `dest` while preserving aspect.
pub fn aspect_scale_fit(source: DVec2, dest: &Rect) -> f64 {
    let scale_w = dest.width() / source.x;
    let scale_h = dest.height() / source.y;
    scale_w.min(scale_h)
}

/// `source` scaled by [`aspect_scale_fit`] and centered in `dest`.
pub fn rect_by_fitting_rect(source: &Rect, dest: &Rect) -> Rect {
    let aspect = aspect_scale_fit(source.size, dest);
    Rect::around_center(dest.center(), source.size * aspect)
}

/// Conjugate `transform` so it acts about `center` instead of the origin:
/// `translate(center) * transform * translate(-center)`.
pub fn centered_transform(transform: DAffine2, center: DVec2) -> DAffine2 {
    DAffine2::from_translation(center) * transform * DAffine2::from_translation(-center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_and_extents() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.center(), DVec2::new(60.0, 45.0));
        assert_eq!(r.max(), DVec2::new(110.0, 70.0));
        assert!(!r.is_degenerate());
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, f64::NAN, 10.0).is_degenerate());
    }

    #[test]
    fn bounding_of_points() {
        let r = Rect::bounding([DVec2::new(1.0, 5.0), DVec2::new(-2.0, 3.0), DVec2::new(4.0, -1.0)]).unwrap();
        assert_eq!(r.min(), DVec2::new(-2.0, -1.0));
        assert_eq!(r.max(), DVec2::new(4.0, 5.0));
        assert!(Rect::bounding(std::iter::empty()).is_none());
    }

    #[test]
    fn aspect_fit_uses_smaller_ratio() {
        let dest = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(aspect_scale_fit(DVec2::new(10.0, 10.0), &dest), 10.0);

        let fitted = rect_by_fitting_rect(&Rect::new(5.0, 5.0, 10.0, 10.0), &dest);
        assert_eq!(fitted, Rect::new(50.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn centered_transform_keeps_center_fixed() {
        let center = DVec2::new(30.0, -7.0);
        let t = centered_transform(DAffine2::from_scale(DVec2::splat(3.0)), center);
        assert!((t.transform_point2(center) - center).length() < 1e-12);
        let p = t.transform_point2(center + DVec2::new(1.0, 0.0));
        assert!((p - (center + DVec2::new(3.0, 0.0))).length() < 1e-12);

        let r = centered_transform(DAffine2::from_angle(std::f64::consts::FRAC_PI_2), center);
        assert!((r.transform_point2(center) - center).length() < 1e-12);
    }
}

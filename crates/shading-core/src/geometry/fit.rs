// geometry/fit.rs
//
// Fit a path into a target rectangle.
//
// `fit_to_rect` keeps aspect (uniform scale), `adjust_to_rect` stretches each
// axis independently. Both compose a single affine map
//   translate(dest center) * scale * translate(-bbox center)
// so scaling happens about the path's own center and never drifts.

use glam::{DAffine2, DVec2};

use super::path::Path;
use super::rect::{aspect_scale_fit, Rect};
use crate::error::{Error, Result};

/// Bounding box of `path`, rejecting empty or zero-area paths.
fn fit_bounds(path: &Path) -> Result<Rect> {
    let bounds = path
        .bounding_box()
        .ok_or_else(|| Error::invalid("cannot fit an empty path"))?;
    if bounds.is_degenerate() {
        return Err(Error::invalid(format!(
            "cannot fit a degenerate path (bounding box {} x {})",
            bounds.width(),
            bounds.height()
        )));
    }
    Ok(bounds)
}

fn map_into(bounds: &Rect, dest: &Rect, scale: DVec2) -> DAffine2 {
    DAffine2::from_translation(dest.center())
        * DAffine2::from_scale(scale)
        * DAffine2::from_translation(-bounds.center())
}

/// The affine map used by [`fit_to_rect`].
pub fn fit_transform(path: &Path, dest: &Rect) -> Result<DAffine2> {
    let bounds = fit_bounds(path)?;
    let s = aspect_scale_fit(bounds.size, dest);
    Ok(map_into(&bounds, dest, DVec2::splat(s)))
}

/// The affine map used by [`adjust_to_rect`].
pub fn adjust_transform(path: &Path, dest: &Rect) -> Result<DAffine2> {
    let bounds = fit_bounds(path)?;
    Ok(map_into(&bounds, dest, dest.size / bounds.size))
}

/// Uniformly scale and center `path` inside `dest`, preserving aspect ratio.
///
/// Fails with `InvalidArgument` when the path is empty or its bounding box has
/// zero width or height.
pub fn fit_to_rect(path: &Path, dest: &Rect) -> Result<Path> {
    fit_transform(path, dest).map(|t| path.transformed(t))
}

/// Stretch `path` so its bounding box exactly fills `dest`.
///
/// Same failure conditions as [`fit_to_rect`].
pub fn adjust_to_rect(path: &Path, dest: &Rect) -> Result<Path> {
    adjust_transform(path, dest).map(|t| path.transformed(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_path(w: f64, h: f64) -> Path {
        let mut p = Path::new();
        p.move_to(DVec2::new(-3.0, 7.0))
            .line_to(DVec2::new(-3.0 + w, 7.0))
            .line_to(DVec2::new(-3.0 + w, 7.0 + h))
            .line_to(DVec2::new(-3.0, 7.0 + h))
            .close();
        p
    }

    #[test]
    fn fit_centers_and_preserves_aspect() {
        let path = rect_path(20.0, 10.0);
        let dest = Rect::new(100.0, 100.0, 300.0, 300.0);
        let fitted = fit_to_rect(&path, &dest).unwrap();
        let bb = fitted.bounding_box().unwrap();

        assert!((bb.center() - dest.center()).length() < 1e-6);
        // min(300/20, 300/10) = 15
        assert!((bb.width() - 300.0).abs() < 1e-9);
        assert!((bb.height() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn adjust_fills_both_axes() {
        let path = rect_path(20.0, 10.0);
        let dest = Rect::new(0.0, 0.0, 40.0, 90.0);
        let adjusted = adjust_to_rect(&path, &dest).unwrap();
        let bb = adjusted.bounding_box().unwrap();
        assert!((bb.min() - dest.min()).length() < 1e-9);
        assert!((bb.max() - dest.max()).length() < 1e-9);
    }

    #[test]
    fn fit_does_not_mutate_input() {
        let path = rect_path(20.0, 10.0);
        let _ = fit_to_rect(&path, &Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();
        assert_eq!(path, rect_path(20.0, 10.0));
    }

    #[test]
    fn degenerate_paths_are_rejected() {
        let mut line = Path::new();
        line.move_to(DVec2::ZERO).line_to(DVec2::new(10.0, 0.0));
        let dest = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert!(matches!(fit_to_rect(&line, &dest), Err(Error::InvalidArgument(_))));
        assert!(matches!(adjust_to_rect(&line, &dest), Err(Error::InvalidArgument(_))));
        assert!(matches!(fit_to_rect(&Path::new(), &dest), Err(Error::InvalidArgument(_))));
    }
}

//! Axial and radial shading gradients.
//!
//! A [`ShadingGradient`] maps a point (in the unit coordinate space of the
//! shaded area) to a gradient parameter `t`, remaps `t` through an easing
//! curve, then blends between color stops with a [`GradientFunction`].
//! Rasterizing the result is left to the host.
//!
//! Gradients are plain configuration values and load from JSON:
//!
//! ```ignore
//! let g = ShadingGradient::from_json(r#"{
//!     "kind": "radial",
//!     "colors": [{ "r": 1, "g": 0, "b": 0 }, { "r": 0, "g": 0, "b": 1 }],
//!     "slope": "CubicEaseInOut",
//!     "function": "cosine"
//! }"#)?;
//! let ramp = g.ramp(256);
//! ```

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::color::{Rgba, Rgba8};
use crate::error::Result;
use crate::math::easing::Easing;
use crate::math::interpolation::GradientFunction;

/// Geometry of the gradient parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    /// `t` runs along the line from `start_point` to `end_point`.
    #[default]
    Axial,
    /// `t` selects the circle interpolated between the start and end circles.
    Radial,
}

/// A shading gradient description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingGradient {
    pub kind: GradientKind,
    pub colors: Vec<Rgba>,
    /// Stop positions in [0, 1], one per color. Evenly spaced when absent.
    pub locations: Option<Vec<f64>>,
    pub start_point: DVec2,
    pub end_point: DVec2,
    /// Radial only.
    pub start_radius: f64,
    /// Radial only.
    pub end_radius: f64,
    pub extends_before_start: bool,
    pub extends_past_end: bool,
    /// Curve applied to `t` before stop lookup.
    pub slope: Easing,
    /// Blend between adjacent stops.
    pub function: GradientFunction,
}

impl Default for ShadingGradient {
    fn default() -> Self {
        Self {
            kind: GradientKind::Axial,
            colors: Vec::new(),
            locations: None,
            start_point: DVec2::new(0.0, 0.0),
            end_point: DVec2::new(0.0, 1.0),
            start_radius: 0.0,
            end_radius: 1.0,
            extends_before_start: true,
            extends_past_end: true,
            slope: Easing::Linear,
            function: GradientFunction::Linear,
        }
    }
}

impl ShadingGradient {
    pub fn axial(colors: Vec<Rgba>, start_point: DVec2, end_point: DVec2) -> Self {
        Self {
            kind: GradientKind::Axial,
            colors,
            start_point,
            end_point,
            ..Self::default()
        }
    }

    pub fn radial(colors: Vec<Rgba>, center: DVec2, start_radius: f64, end_radius: f64) -> Self {
        Self {
            kind: GradientKind::Radial,
            colors,
            start_point: center,
            end_point: center,
            start_radius,
            end_radius,
            ..Self::default()
        }
    }

    pub fn with_slope(mut self, slope: Easing) -> Self {
        self.slope = slope;
        self
    }

    pub fn with_function(mut self, function: GradientFunction) -> Self {
        self.function = function;
        self
    }

    pub fn with_locations(mut self, locations: Vec<f64>) -> Self {
        self.locations = Some(locations);
        self
    }

    pub fn with_extends(mut self, before_start: bool, past_end: bool) -> Self {
        self.extends_before_start = before_start;
        self.extends_past_end = past_end;
        self
    }

    /// Parse a gradient from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Stop positions actually used: the configured ones when their count
    /// matches `colors`, otherwise evenly spaced over [0, 1].
    pub fn effective_locations(&self) -> Vec<f64> {
        let n = self.colors.len();
        match &self.locations {
            Some(locs) if locs.len() == n => return locs.clone(),
            Some(locs) => log::warn!(
                "gradient has {} locations for {} colors; using even spacing",
                locs.len(),
                n
            ),
            None => {}
        }
        match n {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
        }
    }

    /// Color at gradient parameter `t`, or `None` outside the extended range
    /// or when there are no colors.
    pub fn color_at(&self, t: f64) -> Option<Rgba> {
        self.color_at_with(t, &self.effective_locations())
    }

    fn color_at_with(&self, t: f64, locations: &[f64]) -> Option<Rgba> {
        if !t.is_finite() {
            return None;
        }
        let t = if t < 0.0 {
            if !self.extends_before_start {
                return None;
            }
            0.0
        } else if t > 1.0 {
            if !self.extends_past_end {
                return None;
            }
            1.0
        } else {
            t
        };

        let first = *self.colors.first()?;
        let last = *self.colors.last()?;
        if self.colors.len() == 1 {
            return Some(first);
        }

        let t = self.slope.apply(t);
        let n = locations.len();
        if t <= locations[0] {
            return Some(first);
        }
        if t >= locations[n - 1] {
            return Some(last);
        }

        let Some(i) = locations.windows(2).position(|w| t >= w[0] && t <= w[1]) else {
            // Unsorted stops that do not bracket `t`.
            return Some(last);
        };
        let span = locations[i + 1] - locations[i];
        if span <= 0.0 {
            return Some(self.colors[i + 1]);
        }
        let local = (t - locations[i]) / span;
        Some(self.colors[i].interpolate(self.colors[i + 1], local, self.function))
    }

    /// Gradient parameter at `point`, before extension and easing.
    ///
    /// Axial: projection onto the start→end axis (`None` if the axis has zero
    /// length). Radial: the largest `t` whose interpolated circle passes
    /// through `point` with a non-negative radius, among the `t` the extend
    /// flags allow (`None` if there is none).
    pub fn parameter_at(&self, point: DVec2) -> Option<f64> {
        match self.kind {
            GradientKind::Axial => {
                let axis = self.end_point - self.start_point;
                let len2 = axis.length_squared();
                if len2 == 0.0 {
                    return None;
                }
                Some((point - self.start_point).dot(axis) / len2)
            }
            GradientKind::Radial => self.radial_parameter(point),
        }
    }

    // |p - c(t)| = r(t) with c(t) = c0 + t*dc, r(t) = r0 + t*dr
    //   => a t^2 - 2 b t + c = 0
    fn radial_parameter(&self, point: DVec2) -> Option<f64> {
        let r0 = self.start_radius;
        let dr = self.end_radius - self.start_radius;
        let dc = self.end_point - self.start_point;
        let pc = point - self.start_point;

        let a = dc.length_squared() - dr * dr;
        let b = pc.dot(dc) + r0 * dr;
        let c = pc.length_squared() - r0 * r0;
        // A root outside [0, 1] only counts when that side is extended.
        let accepted = |t: f64| {
            r0 + t * dr >= 0.0
                && (t >= 0.0 || self.extends_before_start)
                && (t <= 1.0 || self.extends_past_end)
        };

        if a.abs() < 1e-12 {
            if b == 0.0 {
                return None;
            }
            let t = c / (2.0 * b);
            return accepted(t).then_some(t);
        }

        let disc = b * b - a * c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let (t1, t2) = ((b + root) / a, (b - root) / a);
        let (hi, lo) = if t1 >= t2 { (t1, t2) } else { (t2, t1) };
        if accepted(hi) {
            Some(hi)
        } else if accepted(lo) {
            Some(lo)
        } else {
            None
        }
    }

    /// Color at `point`, combining [`parameter_at`](Self::parameter_at) and
    /// [`color_at`](Self::color_at).
    pub fn color_at_point(&self, point: DVec2) -> Option<Rgba> {
        self.parameter_at(point).and_then(|t| self.color_at(t))
    }

    /// Sample `width` colors at evenly spaced `t` over [0, 1], packed as RGBA8.
    /// Unshaded samples are transparent.
    pub fn ramp(&self, width: usize) -> Vec<Rgba8> {
        let locations = self.effective_locations();
        let denom = width.saturating_sub(1).max(1) as f64;
        (0..width)
            .map(|i| {
                self.color_at_with(i as f64 / denom, &locations)
                    .unwrap_or(Rgba::TRANSPARENT)
                    .to_rgba8()
            })
            .collect()
    }
}

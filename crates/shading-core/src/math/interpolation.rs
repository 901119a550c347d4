// math/interpolation.rs
//
// Scalar interpolation helpers and the gradient function selector.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{check_index, Result};

/// Floor applied before taking logarithms in [`eerp`].
const EERP_FLOOR: f64 = 0.01;

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cosine interpolation: same endpoints as [`lerp`], zero slope at both ends.
#[inline]
pub fn coserp(a: f64, b: f64, t: f64) -> f64 {
    let w = (1.0 - (t * PI).cos()) / 2.0;
    a * (1.0 - w) + b * w
}

/// Exponential (geometric) interpolation.
///
/// Inputs below 0.01 are floored so zero channels stay finite.
#[inline]
pub fn eerp(a: f64, b: f64, t: f64) -> f64 {
    let la = a.max(EERP_FLOOR).ln();
    let lb = b.max(EERP_FLOOR).ln();
    lerp(la, lb, t).exp()
}

/// Bilinear interpolation: `y0..y1` and `y2..y3` along `t1`, then between them along `t2`.
#[inline]
pub fn bilerp(y0: f64, y1: f64, t1: f64, y2: f64, y3: f64, t2: f64) -> f64 {
    lerp(lerp(y0, y1, t1), lerp(y2, y3, t1), t2)
}

/// Clamp `x` into `[lo, hi]`.
#[inline]
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

/// How a shading gradient blends between adjacent color stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientFunction {
    #[default]
    Linear,
    Exponential,
    Cosine,
}

impl GradientFunction {
    pub const ALL: [GradientFunction; 3] = [
        GradientFunction::Linear,
        GradientFunction::Exponential,
        GradientFunction::Cosine,
    ];

    /// Select by segment index (0 = linear, 1 = exponential, 2 = cosine).
    ///
    /// # Panics
    ///
    /// Panics when `index > 2`. Selectors are fixed three-way controls, so any
    /// other index is a caller bug.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => GradientFunction::Linear,
            1 => GradientFunction::Exponential,
            2 => GradientFunction::Cosine,
            _ => panic!("gradient function index {index} out of range (0..3)"),
        }
    }

    /// Checked variant of [`from_index`](Self::from_index).
    pub fn try_from_index(index: i64) -> Result<Self> {
        check_index(index, Self::ALL.len()).map(|i| Self::ALL[i])
    }

    /// Interpolate a scalar between `a` and `b` at `t`.
    #[inline]
    pub fn interpolate(self, a: f64, b: f64, t: f64) -> f64 {
        match self {
            GradientFunction::Linear => lerp(a, b, t),
            GradientFunction::Exponential => eerp(a, b, t),
            GradientFunction::Cosine => coserp(a, b, t),
        }
    }
}

//! RGBA colors and per-channel color interpolation.
//!
//! Colors are straight (non-premultiplied) alpha with `f64` channels nominally
//! in [0, 1]. [`Rgba8`] is the packed form handed to hosts as raw bytes.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::math::interpolation::{bilerp, clamp, coserp, eerp, lerp, GradientFunction};

/// Straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

/// Packed 8-bit RGBA pixel.
/// 4 bytes, no padding, so a `&[Rgba8]` casts straight to `&[u8]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA u8 values (0-255).
    pub fn from_rgba8(c: Rgba8) -> Self {
        Self {
            r: c.r as f64 / 255.0,
            g: c.g as f64 / 255.0,
            b: c.b as f64 / 255.0,
            a: c.a as f64 / 255.0,
        }
    }

    /// Quantize to 8 bits per channel, clamping out-of-range channels.
    pub fn to_rgba8(self) -> Rgba8 {
        let q = |v: f64| (clamp(v, 0.0, 1.0) * 255.0).round() as u8;
        Rgba8 {
            r: q(self.r),
            g: q(self.g),
            b: q(self.b),
            a: q(self.a),
        }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    fn map2(self, other: Rgba, f: impl Fn(f64, f64) -> f64) -> Rgba {
        Rgba {
            r: f(self.r, other.r),
            g: f(self.g, other.g),
            b: f(self.b, other.b),
            a: f(self.a, other.a),
        }
    }

    /// Per-channel linear interpolation.
    pub fn lerp(self, end: Rgba, t: f64) -> Rgba {
        self.map2(end, |a, b| lerp(a, b, t))
    }

    /// Per-channel cosine interpolation.
    pub fn coserp(self, end: Rgba, t: f64) -> Rgba {
        self.map2(end, |a, b| coserp(a, b, t))
    }

    /// Per-channel exponential interpolation, clamped to [0, 1].
    pub fn eerp(self, end: Rgba, t: f64) -> Rgba {
        self.map2(end, |a, b| clamp(eerp(a, b, t), 0.0, 1.0))
    }

    /// Bilinear blend of two color pairs: `start[i]..end[i]` along `t[0]`,
    /// then between the two results along `t[1]`.
    pub fn bilerp(start: [Rgba; 2], end: [Rgba; 2], t: [f64; 2]) -> Rgba {
        let ch = |f: fn(&Rgba) -> f64| {
            bilerp(f(&start[0]), f(&end[0]), t[0], f(&start[1]), f(&end[1]), t[1])
        };
        Rgba {
            r: ch(|c| c.r),
            g: ch(|c| c.g),
            b: ch(|c| c.b),
            a: ch(|c| c.a),
        }
    }

    /// Interpolate towards `end` with the given gradient function.
    pub fn interpolate(self, end: Rgba, t: f64, function: GradientFunction) -> Rgba {
        match function {
            GradientFunction::Linear => self.lerp(end, t),
            GradientFunction::Exponential => self.eerp(end, t),
            GradientFunction::Cosine => self.coserp(end, t),
        }
    }

    // Named color constants
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    fn close(a: Rgba, b: Rgba) -> bool {
        (a.r - b.r).abs() < 1e-9
            && (a.g - b.g).abs() < 1e-9
            && (a.b - b.b).abs() < 1e-9
            && (a.a - b.a).abs() < 1e-9
    }

    #[test]
    fn rgba8_is_four_bytes() {
        assert_eq!(size_of::<Rgba8>(), 4);
        let px = [Rgba8 { r: 1, g: 2, b: 3, a: 4 }, Rgba8 { r: 5, g: 6, b: 7, a: 8 }];
        let bytes: &[u8] = bytemuck::cast_slice(&px);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn quantize_clamps_and_rounds() {
        let c = Rgba::new(1.2, 0.5, -0.3, 1.0).to_rgba8();
        assert_eq!(c, Rgba8 { r: 255, g: 128, b: 0, a: 255 });

        let back = Rgba::from_rgba8(Rgba8 { r: 255, g: 0, b: 0, a: 255 });
        assert_eq!(back, Rgba::RED);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert!(close(mid, Rgba::rgb(0.5, 0.5, 0.5)));
        assert!(close(Rgba::RED.lerp(Rgba::BLUE, 0.0), Rgba::RED));
        assert!(close(Rgba::RED.lerp(Rgba::BLUE, 1.0), Rgba::BLUE));
    }

    #[test]
    fn coserp_endpoints() {
        assert!(close(Rgba::RED.coserp(Rgba::GREEN, 0.0), Rgba::RED));
        assert!(close(Rgba::RED.coserp(Rgba::GREEN, 1.0), Rgba::GREEN));
        assert!(close(Rgba::RED.coserp(Rgba::GREEN, 0.5), Rgba::RED.lerp(Rgba::GREEN, 0.5)));
    }

    #[test]
    fn eerp_stays_in_unit_range() {
        for i in 0..=10 {
            let c = Rgba::BLACK.eerp(Rgba::WHITE, i as f64 / 10.0);
            for v in [c.r, c.g, c.b, c.a] {
                assert!((0.0..=1.0).contains(&v), "channel out of range: {v}");
            }
        }
    }

    #[test]
    fn bilerp_picks_corners() {
        let start = [Rgba::RED, Rgba::GREEN];
        let end = [Rgba::BLUE, Rgba::WHITE];
        assert!(close(Rgba::bilerp(start, end, [0.0, 0.0]), Rgba::RED));
        assert!(close(Rgba::bilerp(start, end, [1.0, 0.0]), Rgba::BLUE));
        assert!(close(Rgba::bilerp(start, end, [0.0, 1.0]), Rgba::GREEN));
        assert!(close(Rgba::bilerp(start, end, [1.0, 1.0]), Rgba::WHITE));
    }

    #[test]
    fn alpha_defaults_to_opaque_in_json() {
        let c: Rgba = serde_json::from_str(r#"{ "r": 0.1, "g": 0.2, "b": 0.3 }"#).unwrap();
        assert_eq!(c.a, 1.0);
    }
}

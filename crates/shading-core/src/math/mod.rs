// math/mod.rs
//
// Pure scalar math: the easing catalogue and interpolation helpers.
// Nothing here touches geometry, colors or allocation.

pub mod easing;
pub mod interpolation;

pub use easing::{catalogue, lookup, Easing, EasingFunction};
pub use interpolation::{bilerp, clamp, coserp, eerp, lerp, GradientFunction};

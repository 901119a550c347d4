// math/easing.rs
//
// Easing catalogue: a fixed, ordered table of scalar transfer functions.
// No dependencies on geometry or color — just math.
//
// Formulas follow the Penner closed forms from the Auerhaus easing.c
// collection. Constants are kept verbatim so curves stay bit-reproducible.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{check_index, Error, Result};

/// A pure scalar easing function, conventionally evaluated on [0, 1].
pub type EasingFunction = fn(f64) -> f64;

/// Named easing curve. Declaration order is the catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuarticIn,
    QuarticOut,
    QuarticInOut,
    QuinticIn,
    QuinticOut,
    QuinticInOut,
    /// Quarter and half sine waves.
    SineIn,
    SineOut,
    SineInOut,
    /// Shifted quadrants of the unit circle.
    CircularIn,
    CircularOut,
    CircularInOut,
    ExponentialIn,
    ExponentialOut,
    ExponentialInOut,
    /// Damped sine wave. Overshoots [0, 1].
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    /// Overshooting cubic. Leaves [0, 1] transiently.
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

/// The catalogue: every curve as a `(name, function)` pair, in index order.
static CATALOGUE: [(&str, EasingFunction); Easing::COUNT] = [
    ("Linear", linear),
    ("QuadraticEaseIn", quadratic_ease_in),
    ("QuadraticEaseOut", quadratic_ease_out),
    ("QuadraticEaseInOut", quadratic_ease_in_out),
    ("CubicEaseIn", cubic_ease_in),
    ("CubicEaseOut", cubic_ease_out),
    ("CubicEaseInOut", cubic_ease_in_out),
    ("QuarticEaseIn", quartic_ease_in),
    ("QuarticEaseOut", quartic_ease_out),
    ("QuarticEaseInOut", quartic_ease_in_out),
    ("QuinticEaseIn", quintic_ease_in),
    ("QuinticEaseOut", quintic_ease_out),
    ("QuinticEaseInOut", quintic_ease_in_out),
    ("SineEaseIn", sine_ease_in),
    ("SineEaseOut", sine_ease_out),
    ("SineEaseInOut", sine_ease_in_out),
    ("CircularEaseIn", circular_ease_in),
    ("CircularEaseOut", circular_ease_out),
    ("CircularEaseInOut", circular_ease_in_out),
    ("ExponentialEaseIn", exponential_ease_in),
    ("ExponentialEaseOut", exponential_ease_out),
    ("ExponentialEaseInOut", exponential_ease_in_out),
    ("ElasticEaseIn", elastic_ease_in),
    ("ElasticEaseOut", elastic_ease_out),
    ("ElasticEaseInOut", elastic_ease_in_out),
    ("BackEaseIn", back_ease_in),
    ("BackEaseOut", back_ease_out),
    ("BackEaseInOut", back_ease_in_out),
    ("BounceEaseIn", bounce_ease_in),
    ("BounceEaseOut", bounce_ease_out),
    ("BounceEaseInOut", bounce_ease_in_out),
];

impl Easing {
    /// Number of curves in the catalogue.
    pub const COUNT: usize = 31;

    /// Every curve, in catalogue order.
    pub const ALL: [Easing; Self::COUNT] = [
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuarticIn,
        Easing::QuarticOut,
        Easing::QuarticInOut,
        Easing::QuinticIn,
        Easing::QuinticOut,
        Easing::QuinticInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::CircularIn,
        Easing::CircularOut,
        Easing::CircularInOut,
        Easing::ExponentialIn,
        Easing::ExponentialOut,
        Easing::ExponentialInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
    ];

    /// Position of this curve in the catalogue.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a curve by catalogue position.
    pub fn from_index(index: i64) -> Result<Self> {
        check_index(index, Self::COUNT).map(|i| Self::ALL[i])
    }

    /// Stable display name, e.g. `"CubicEaseInOut"`.
    #[inline]
    pub fn name(self) -> &'static str {
        CATALOGUE[self.index()].0
    }

    /// The free function backing this curve.
    #[inline]
    pub fn function(self) -> EasingFunction {
        CATALOGUE[self.index()].1
    }

    /// Whether the curve may leave [0, 1] inside the unit domain.
    pub fn overshoots(self) -> bool {
        matches!(
            self,
            Easing::ElasticIn
                | Easing::ElasticOut
                | Easing::ElasticInOut
                | Easing::BackIn
                | Easing::BackOut
                | Easing::BackInOut
        )
    }

    /// Apply the curve to `t`. The input is not clamped.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        (self.function())(t)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.name() == s)
            .ok_or_else(|| Error::invalid(format!("unknown easing function '{s}'")))
    }
}

impl TryFrom<String> for Easing {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Easing> for &'static str {
    fn from(e: Easing) -> Self {
        e.name()
    }
}

/// The full ordered catalogue of `(name, function)` pairs.
pub fn catalogue() -> &'static [(&'static str, EasingFunction); Easing::COUNT] {
    &CATALOGUE
}

/// Fetch a curve's function by catalogue position.
pub fn lookup(index: i64) -> Result<EasingFunction> {
    Easing::from_index(index).map(Easing::function)
}

// ── Formulas ─────────────────────────────────────────────────────────────

/// y = x
pub fn linear(t: f64) -> f64 {
    t
}

/// y = x^2
pub fn quadratic_ease_in(t: f64) -> f64 {
    t * t
}

/// y = -x^2 + 2x
pub fn quadratic_ease_out(t: f64) -> f64 {
    -(t * (t - 2.0))
}

/// y = (1/2)((2x)^2)             ; [0, 0.5)
/// y = -(1/2)((2x-1)*(2x-3) - 1) ; [0.5, 1]
pub fn quadratic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        (-2.0 * t * t) + (4.0 * t) - 1.0
    }
}

/// y = x^3
pub fn cubic_ease_in(t: f64) -> f64 {
    t * t * t
}

/// y = (x - 1)^3 + 1
pub fn cubic_ease_out(t: f64) -> f64 {
    let f = t - 1.0;
    f * f * f + 1.0
}

/// y = (1/2)((2x)^3)       ; [0, 0.5)
/// y = (1/2)((2x-2)^3 + 2) ; [0.5, 1]
pub fn cubic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let f = (2.0 * t) - 2.0;
        0.5 * f * f * f + 1.0
    }
}

/// y = x^4
pub fn quartic_ease_in(t: f64) -> f64 {
    t * t * t * t
}

/// y = 1 - (x - 1)^4
pub fn quartic_ease_out(t: f64) -> f64 {
    let f = t - 1.0;
    f * f * f * (1.0 - t) + 1.0
}

/// y = (1/2)((2x)^4)        ; [0, 0.5)
/// y = -(1/2)((2x-2)^4 - 2) ; [0.5, 1]
pub fn quartic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        let f = t - 1.0;
        -8.0 * f * f * f * f + 1.0
    }
}

/// y = x^5
pub fn quintic_ease_in(t: f64) -> f64 {
    t * t * t * t * t
}

/// y = (x - 1)^5 + 1
pub fn quintic_ease_out(t: f64) -> f64 {
    let f = t - 1.0;
    f * f * f * f * f + 1.0
}

/// y = (1/2)((2x)^5)       ; [0, 0.5)
/// y = (1/2)((2x-2)^5 + 2) ; [0.5, 1]
pub fn quintic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t * t * t * t * t
    } else {
        let f = (2.0 * t) - 2.0;
        0.5 * f * f * f * f * f + 1.0
    }
}

/// Quarter-cycle of a sine wave.
pub fn sine_ease_in(t: f64) -> f64 {
    ((t - 1.0) * PI / 2.0).sin() + 1.0
}

/// Quarter-cycle of a sine wave, different phase.
pub fn sine_ease_out(t: f64) -> f64 {
    (t * PI / 2.0).sin()
}

/// Half sine wave.
pub fn sine_ease_in_out(t: f64) -> f64 {
    0.5 * (1.0 - (t * PI).cos())
}

/// Shifted quadrant IV of the unit circle.
pub fn circular_ease_in(t: f64) -> f64 {
    1.0 - (1.0 - (t * t)).sqrt()
}

/// Shifted quadrant II of the unit circle.
pub fn circular_ease_out(t: f64) -> f64 {
    ((2.0 - t) * t).sqrt()
}

/// y = (1/2)(1 - sqrt(1 - 4x^2))           ; [0, 0.5)
/// y = (1/2)(sqrt(-(2x - 3)*(2x - 1)) + 1) ; [0.5, 1]
pub fn circular_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        0.5 * (1.0 - (1.0 - 4.0 * (t * t)).sqrt())
    } else {
        0.5 * ((-((2.0 * t) - 3.0) * ((2.0 * t) - 1.0)).sqrt() + 1.0)
    }
}

/// y = 2^(10(x - 1)), pinned to 0 at x = 0.
pub fn exponential_ease_in(t: f64) -> f64 {
    if t == 0.0 {
        t
    } else {
        2.0_f64.powf(10.0 * (t - 1.0))
    }
}

/// y = -2^(-10x) + 1, pinned to 1 at x = 1.
pub fn exponential_ease_out(t: f64) -> f64 {
    if t == 1.0 {
        t
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// y = (1/2)2^(10(2x - 1))         ; [0, 0.5)
/// y = -(1/2)*2^(-10(2x - 1))) + 1 ; [0.5, 1]
pub fn exponential_ease_in_out(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    if t < 0.5 {
        0.5 * 2.0_f64.powf((20.0 * t) - 10.0)
    } else {
        -0.5 * 2.0_f64.powf((-20.0 * t) + 10.0) + 1.0
    }
}

/// y = sin(13pi/2*x)*pow(2, 10 * (x - 1))
pub fn elastic_ease_in(t: f64) -> f64 {
    (13.0 * PI / 2.0 * t).sin() * 2.0_f64.powf(10.0 * (t - 1.0))
}

/// y = sin(-13pi/2*(x + 1))*pow(2, -10x) + 1
pub fn elastic_ease_out(t: f64) -> f64 {
    (-13.0 * PI / 2.0 * (t + 1.0)).sin() * 2.0_f64.powf(-10.0 * t) + 1.0
}

/// y = (1/2)*sin(13pi/2*(2*x))*pow(2, 10 * ((2*x) - 1))      ; [0, 0.5)
/// y = (1/2)*(sin(-13pi/2*((2x-1)+1))*pow(2,-10(2*x-1)) + 2) ; [0.5, 1]
pub fn elastic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        0.5 * (13.0 * PI / 2.0 * (2.0 * t)).sin() * 2.0_f64.powf(10.0 * ((2.0 * t) - 1.0))
    } else {
        0.5 * ((-13.0 * PI / 2.0 * ((2.0 * t - 1.0) + 1.0)).sin()
            * 2.0_f64.powf(-10.0 * (2.0 * t - 1.0))
            + 2.0)
    }
}

/// y = x^3 - x*sin(x*pi)
pub fn back_ease_in(t: f64) -> f64 {
    t * t * t - t * (t * PI).sin()
}

/// y = 1 - ((1-x)^3 - (1-x)*sin((1-x)*pi))
pub fn back_ease_out(t: f64) -> f64 {
    let f = 1.0 - t;
    1.0 - (f * f * f - f * (f * PI).sin())
}

/// y = (1/2)*((2x)^3-(2x)*sin(2*x*pi))           ; [0, 0.5)
/// y = (1/2)*(1-((1-x)^3-(1-x)*sin((1-x)*pi))+1) ; [0.5, 1]
pub fn back_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        let f = 2.0 * t;
        0.5 * (f * f * f - f * (f * PI).sin())
    } else {
        let f = 1.0 - (2.0 * t - 1.0);
        0.5 * (1.0 - (f * f * f - f * (f * PI).sin())) + 0.5
    }
}

/// Mirror of [`bounce_ease_out`].
pub fn bounce_ease_in(t: f64) -> f64 {
    1.0 - bounce_ease_out(1.0 - t)
}

/// Four parabolic arcs with breakpoints at 4/11, 8/11 and 9/10.
pub fn bounce_ease_out(t: f64) -> f64 {
    if t < 4.0 / 11.0 {
        (121.0 * t * t) / 16.0
    } else if t < 8.0 / 11.0 {
        (363.0 / 40.0 * t * t) - (99.0 / 10.0 * t) + 17.0 / 5.0
    } else if t < 9.0 / 10.0 {
        (4356.0 / 361.0 * t * t) - (35442.0 / 1805.0 * t) + 16061.0 / 1805.0
    } else {
        (54.0 / 5.0 * t * t) - (513.0 / 25.0 * t) + 268.0 / 25.0
    }
}

pub fn bounce_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        0.5 * bounce_ease_in(t * 2.0)
    } else {
        0.5 * bounce_ease_out(t * 2.0 - 1.0) + 0.5
    }
}

// File: crates/linechart-core/src/easing.rs
// Summary: Easing curves for transitions, including CSS-style cubic beziers.

/// Easing curve mapping linear progress in [0, 1] to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// cubic-bezier(0.42, 0, 1, 1)
    EaseIn,
    /// cubic-bezier(0, 0, 0.58, 1)
    EaseOut,
    /// cubic-bezier(0.42, 0, 0.58, 1)
    EaseInOut,
    /// Bezier through (0,0), (x1,y1), (x2,y2), (1,1). `x1` and `x2` must lie in [0, 1].
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Curve used by transitions that do not name one.
    pub const DEFAULT: Easing = Easing::EaseInOut;

    /// Evaluate at progress `t`. Input is clamped to [0, 1]; endpoints map exactly.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier { x1, y1, x2, y2 } => bezier(x1, y1, x2, y2, t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// One coordinate of the bezier with endpoints 0 and 1.
#[inline]
fn sample(p1: f32, p2: f32, s: f32) -> f32 {
    let omt = 1.0 - s;
    3.0 * omt * omt * s * p1 + 3.0 * omt * s * s * p2 + s * s * s
}

#[inline]
fn sample_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let omt = 1.0 - s;
    3.0 * omt * omt * p1 + 6.0 * omt * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solve x(s) = x for the curve parameter, then return y(s).
fn bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut s = x;
    for _ in 0..8 {
        let err = sample(x1, x2, s) - x;
        if err.abs() < EPSILON {
            return sample(y1, y2, s);
        }
        let slope = sample_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    // Newton stalled; x(s) is monotone on [0, 1] so bisection converges.
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..64 {
        let v = sample(x1, x2, s);
        if (v - x).abs() < EPSILON {
            break;
        }
        if v < x { lo = s; } else { hi = s; }
        s = 0.5 * (lo + hi);
    }
    sample(y1, y2, s)
}

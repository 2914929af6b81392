use std::str::FromStr;

use crate::foundation::error::{PixmotionError, PixmotionResult};

/// Upper bound on bisection steps when solving a cubic Bézier for its parameter.
const MAX_BISECTION_STEPS: usize = 64;
const BISECTION_EPSILON: f64 = 0.0001;

/// CSS `cubic-bezier(a, b, c, d)` timing function.
///
/// The x-progression uses control points `a` and `c`, the y-progression `b` and `d`.
/// `x(s)` must be monotonic on `[0, 1]`; non-monotonic curves resolve to whatever
/// midpoint the bounded bisection ends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CubicBezier {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    fn bezier(s: f64, e: f64, f: f64) -> f64 {
        3.0 * e * (1.0 - s) * (1.0 - s) * s + 3.0 * f * (1.0 - s) * s * s + s * s * s
    }

    /// Eased value at `t`; the endpoints `0` and `1` map exactly onto themselves.
    pub fn transform(&self, t: f64) -> f64 {
        if t == 0.0 || t == 1.0 {
            return t;
        }

        let (mut start, mut end) = (0.0_f64, 1.0_f64);
        let mut mid = 0.5;

        for _ in 0..MAX_BISECTION_STEPS {
            mid = start + (end - start) / 2.0;
            let x = Self::bezier(mid, self.a, self.c);
            if (x - t).abs() < BISECTION_EPSILON {
                break;
            }
            if x < t {
                start = mid;
            } else {
                end = mid;
            }
        }

        Self::bezier(mid, self.b, self.d)
    }

    /// Point reflection through `(0.5, 0.5)`.
    pub fn reverse(&self) -> Self {
        Self::new(1.0 - self.c, 1.0 - self.d, 1.0 - self.a, 1.0 - self.b)
    }
}

/// Easing curve mapping normalized progress to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Curve {
    /// Identity mapping; extrapolates outside `[0, 1]`.
    #[default]
    Linear,
    /// Numerically solved cubic Bézier.
    CubicBezier(CubicBezier),
}

/// `ease_in` preset.
pub const EASE_IN: Curve = Curve::CubicBezier(CubicBezier::new(0.3, 0.0, 1.0, 1.0));
/// `ease_out` preset.
pub const EASE_OUT: Curve = Curve::CubicBezier(CubicBezier::new(0.0, 0.0, 0.0, 1.0));
/// `ease_in_out` preset.
pub const EASE_IN_OUT: Curve = Curve::CubicBezier(CubicBezier::new(0.65, 0.0, 0.35, 1.0));

impl Curve {
    /// Apply the curve to progress `t`.
    pub fn transform(&self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::CubicBezier(cb) => cb.transform(t),
        }
    }

    /// Mirrored curve, used for the return leg of oscillating motion.
    ///
    /// This is unrelated to [`Direction::Reverse`](crate::Direction::Reverse), which flips
    /// overall animation progress.
    pub fn reverse(&self) -> Self {
        match self {
            Self::Linear => Self::Linear,
            Self::CubicBezier(cb) => Self::CubicBezier(cb.reverse()),
        }
    }
}

impl FromStr for Curve {
    type Err = PixmotionError;

    fn from_str(s: &str) -> PixmotionResult<Self> {
        match s {
            "linear" => Ok(Self::Linear),
            "ease_in" => Ok(EASE_IN),
            "ease_out" => Ok(EASE_OUT),
            "ease_in_out" => Ok(EASE_IN_OUT),
            _ => parse_cubic_bezier(s)
                .map(Self::CubicBezier)
                .ok_or_else(|| PixmotionError::parse(format!("invalid curve string: '{s}'"))),
        }
    }
}

fn parse_cubic_bezier(s: &str) -> Option<CubicBezier> {
    let args = s
        .trim()
        .strip_prefix("cubic-bezier")?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    let mut values = [0.0_f64; 4];
    let mut parts = args.split(',');
    for slot in &mut values {
        *slot = parse_float(parts.next()?.trim())?;
    }
    if parts.next().is_some() {
        return None;
    }

    let [a, b, c, d] = values;
    Some(CubicBezier::new(a, b, c, d))
}

fn parse_float(s: &str) -> Option<f64> {
    // Only plain decimal literals; rejects `inf`, `nan` and friends.
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    let valid = !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+'));
    if !valid {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

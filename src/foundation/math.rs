use crate::foundation::core::Vec2;

/// Linear interpolation from `from` to `to`; `t` is not clamped.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Map `v` from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// A degenerate source range maps everything to `to_max`.
pub fn rescale(from_min: f64, from_max: f64, to_min: f64, to_max: f64, v: f64) -> f64 {
    if from_max == from_min {
        return to_max;
    }
    to_min + (v - from_min) / (from_max - from_min) * (to_max - to_min)
}

/// Interpolation contract for animatable values.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t` (extrapolates outside `[0, 1]`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

//! 2D affine decomposition and interpolation.
//!
//! Follows the CSS Transforms decomposition of a 2D matrix into translation, per-axis
//! scale and a rotation angle, and interpolation of the decomposed values.

use crate::animation::transform::Transform;
use crate::foundation::core::{Affine, Vec2};
use crate::foundation::math::{Lerp, lerp};

/// Matrix split into translation, scale and rotation (degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decomposed {
    pub translate: Vec2,
    pub scale: Vec2,
    pub angle: f64,
}

/// Fold translate/scale/rotate entries into one matrix, in list order.
///
/// `Matrix` entries are skipped.
pub fn compose(transforms: &[Transform]) -> Affine {
    transforms
        .iter()
        .fold(Affine::IDENTITY, |acc, t| match *t {
            Transform::Translate(v) => acc * Affine::translate(v),
            Transform::Scale(s) => acc * Affine::scale_non_uniform(s.x, s.y),
            Transform::Rotate(angle) => acc * Affine::rotate(angle.to_radians()),
            Transform::Matrix(_) => acc,
        })
}

pub fn decompose(m: Affine) -> Decomposed {
    let [xx, yx, xy, yy, x0, y0] = m.as_coeffs();

    let mut scale = Vec2::new(xx.hypot(yx), xy.hypot(yy));

    // A negative determinant means one axis is mirrored.
    if xx * yy - yx * xy < 0.0 {
        if xx < yy {
            scale.x = -scale.x;
        } else {
            scale.y = -scale.y;
        }
    }

    Decomposed {
        translate: Vec2::new(x0, y0),
        scale,
        angle: yx.atan2(xx).to_degrees(),
    }
}

/// Rotation, then scale, then translation, all composed in local space.
pub fn recompose(d: &Decomposed) -> Affine {
    Affine::rotate(d.angle.to_radians())
        * Affine::scale_non_uniform(d.scale.x, d.scale.y)
        * Affine::translate(d.translate)
}

pub fn interpolate_matrix(from: &Decomposed, to: &Decomposed, progress: f64) -> Decomposed {
    let mut s0 = from.scale;
    let mut a0 = from.angle;
    let s1 = to.scale;
    let mut a1 = to.angle;

    // Opposite mirrored axes on each side are the same as an unmirrored half-turn.
    if (s0.x < 0.0 && s1.y < 0.0) || (s0.y < 0.0 && s1.x < 0.0) {
        s0 = -s0;
        if a0 < 0.0 {
            a0 += 180.0;
        } else {
            a0 -= 180.0;
        }
    }

    if a0 == 0.0 {
        a0 = 360.0;
    }
    if a1 == 0.0 {
        a1 = 360.0;
    }

    // Take the short way around.
    if (a0 - a1).abs() > 180.0 {
        if a0 > a1 {
            a0 -= 360.0;
        } else {
            a1 -= 360.0;
        }
    }

    Decomposed {
        translate: <Vec2 as Lerp>::lerp(&from.translate, &to.translate, progress),
        scale: <Vec2 as Lerp>::lerp(&s0, &s1, progress),
        angle: lerp(a0, a1, progress),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/matrix.rs"]
mod tests;

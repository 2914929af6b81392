use crate::animation::matrix::{decompose, interpolate_matrix, recompose};
use crate::animation::rounding::Rounding;
use crate::foundation::core::{Affine, Vec2};
use crate::foundation::math::{Lerp, lerp};
use crate::render::surface::Surface;

/// One CSS-style 2D transform primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// Offset in pixels; rounded on application.
    Translate(Vec2),
    /// Per-axis factor about the origin.
    Scale(Vec2),
    /// Angle in degrees about the origin.
    Rotate(f64),
    /// Decomposed on application; its translation is always rounded half away from zero.
    Matrix(Affine),
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self::Translate(Vec2::new(x, y))
    }

    pub fn scale(x: f64, y: f64) -> Self {
        Self::Scale(Vec2::new(x, y))
    }

    pub fn rotate(degrees: f64) -> Self {
        Self::Rotate(degrees)
    }

    /// The no-op transform of the same kind.
    pub fn identity_like(&self) -> Self {
        match self {
            Self::Translate(_) => Self::Translate(Vec2::ZERO),
            Self::Scale(_) => Self::Scale(Vec2::new(1.0, 1.0)),
            Self::Rotate(_) => Self::Rotate(0.0),
            Self::Matrix(_) => Self::Matrix(Affine::IDENTITY),
        }
    }

    /// Apply onto the surface's current transform.
    pub fn apply(&self, surface: &mut dyn Surface, origin: Vec2, rounding: Rounding) {
        match *self {
            Self::Translate(v) => surface.translate(rounding.apply(v.x), rounding.apply(v.y)),
            Self::Scale(s) => surface.scale_about(s.x, s.y, origin),
            Self::Rotate(angle) => surface.rotate_about(angle.to_radians(), origin),
            Self::Matrix(m) => {
                let d = decompose(m);
                surface.rotate_about(d.angle.to_radians(), origin);
                surface.scale_about(d.scale.x, d.scale.y, origin);
                // Matrix translation always rounds, whatever the widget's mode.
                surface.translate(
                    Rounding::Round.apply(d.translate.x),
                    Rounding::Round.apply(d.translate.y),
                );
            }
        }
    }

    /// Interpolate towards `other`; `None` when the kinds differ.
    ///
    /// Rotation is a plain lerp of the angle, so progress outside `[0, 1]` keeps turning.
    pub fn interpolate(&self, other: &Self, progress: f64) -> Option<Self> {
        match (self, other) {
            (Self::Translate(a), Self::Translate(b)) => {
                Some(Self::Translate(<Vec2 as Lerp>::lerp(a, b, progress)))
            }
            (Self::Scale(a), Self::Scale(b)) => {
                Some(Self::Scale(<Vec2 as Lerp>::lerp(a, b, progress)))
            }
            (Self::Rotate(a), Self::Rotate(b)) => Some(Self::Rotate(lerp(*a, *b, progress))),
            (Self::Matrix(a), Self::Matrix(b)) => {
                let d = interpolate_matrix(&decompose(*a), &decompose(*b), progress);
                Some(Self::Matrix(recompose(&d)))
            }
            _ => None,
        }
    }
}

/// Pad `short` to the length of `long` with the no-op of each corresponding kind.
pub fn extend_transforms(short: &[Transform], long: &[Transform]) -> Vec<Transform> {
    let mut out = short.to_vec();
    out.extend(long.iter().skip(short.len()).map(Transform::identity_like));
    out
}

/// Pairwise interpolation of two transform lists.
///
/// The shorter list is padded first. Any pair of differing kinds fails the whole call;
/// there is no fallback to interpolating the composed matrices.
pub fn interpolate_transforms(
    lhs: &[Transform],
    rhs: &[Transform],
    progress: f64,
) -> Option<Vec<Transform>> {
    let (lhs, rhs) = if lhs.len() < rhs.len() {
        (extend_transforms(lhs, rhs), rhs.to_vec())
    } else {
        (lhs.to_vec(), extend_transforms(rhs, lhs))
    };

    lhs.iter()
        .zip(&rhs)
        .map(|(a, b)| a.interpolate(b, progress))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transform.rs"]
mod tests;

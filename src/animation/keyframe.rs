use crate::animation::ease::Curve;
use crate::animation::transform::{Transform, interpolate_transforms};
use crate::animation::value::Percentage;
use crate::foundation::math::rescale;

/// Transforms in effect at one point of the animation.
///
/// `curve` eases the segment that starts at this keyframe.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keyframe {
    pub percentage: Percentage,
    pub transforms: Vec<Transform>,
    pub curve: Curve,
}

impl Keyframe {
    pub fn new(percentage: Percentage, transforms: Vec<Transform>, curve: Curve) -> Self {
        Self {
            percentage,
            transforms,
            curve,
        }
    }

    fn boundary(percentage: Percentage) -> Self {
        Self::new(percentage, Vec::new(), Curve::Linear)
    }
}

/// Sort by percentage (stable) and make sure the list starts at 0% and ends at 100%.
///
/// Idempotent.
pub fn normalize(mut keyframes: Vec<Keyframe>) -> Vec<Keyframe> {
    if keyframes.is_empty() {
        return vec![
            Keyframe::boundary(Percentage::ZERO),
            Keyframe::boundary(Percentage::FULL),
        ];
    }

    keyframes.sort_by(|a, b| a.percentage.value().total_cmp(&b.percentage.value()));

    if keyframes.first().is_some_and(|k| k.percentage.value() != 0.0) {
        keyframes.insert(0, Keyframe::boundary(Percentage::ZERO));
    }
    if keyframes.last().is_some_and(|k| k.percentage.value() != 1.0) {
        keyframes.push(Keyframe::boundary(Percentage::FULL));
    }

    keyframes
}

/// First adjacent pair whose percentages enclose `progress`.
pub fn find_adjacent(keyframes: &[Keyframe], progress: f64) -> Option<(&Keyframe, &Keyframe)> {
    if keyframes.len() < 2 || !(0.0..=1.0).contains(&progress) {
        return None;
    }

    keyframes
        .windows(2)
        .find(|w| w[0].percentage.value() <= progress && progress <= w[1].percentage.value())
        .map(|w| (&w[0], &w[1]))
}

/// Normalized keyframe list.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    keyframes: Vec<Keyframe>,
}

impl Timeline {
    pub fn new(keyframes: Vec<Keyframe>) -> Self {
        Self {
            keyframes: normalize(keyframes),
        }
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Interpolated transforms at animation `progress`.
    ///
    /// `None` when no segment encloses `progress` or the segment's lists cannot be paired.
    pub fn transforms_at(&self, progress: f64) -> Option<Vec<Transform>> {
        let (from, to) = find_adjacent(&self.keyframes, progress)?;
        let local = rescale(
            from.percentage.value(),
            to.percentage.value(),
            0.0,
            1.0,
            progress,
        );
        interpolate_transforms(&from.transforms, &to.transforms, from.curve.transform(local))
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframe.rs"]
mod tests;

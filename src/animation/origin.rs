use crate::animation::value::{NumberOrPercentage, Percentage};
use crate::foundation::core::{Bounds, Vec2};

/// Anchor point for scale and rotation, relative to the animated child's bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub x: NumberOrPercentage,
    pub y: NumberOrPercentage,
}

impl Origin {
    pub const CENTER: Self = Self {
        x: NumberOrPercentage::Percentage(Percentage(0.5)),
        y: NumberOrPercentage::Percentage(Percentage(0.5)),
    };

    pub fn new(x: impl Into<NumberOrPercentage>, y: impl Into<NumberOrPercentage>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Absolute anchor for a child occupying `bounds`.
    ///
    /// Only the extent of `bounds` is used; the anchor is local to the child's top-left.
    pub fn resolve(&self, bounds: Bounds) -> Vec2 {
        Vec2::new(self.x.resolve(bounds.dx()), self.y.resolve(bounds.dy()))
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/origin.rs"]
mod tests;

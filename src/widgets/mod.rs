//! Widget protocol and the widget set.
//!
//! Widgets paint in local coordinates: `(0, 0)` is the top-left of the area the parent
//! assigned, and `bounds` only carries the available extent. Painting is a pure function
//! of `(bounds, frame)`; any frame index is valid, including ones past `frame_count`.

use std::fmt::Debug;

use crate::foundation::core::Bounds;
use crate::render::surface::Surface;

pub mod bounce;
pub mod image;
pub mod layout;
pub mod marquee;
pub mod positioned;
pub mod sequence;
pub mod transformation;

pub use self::bounce::Bounce;
pub use self::image::Image;
pub use self::layout::{Block, Column, Insets, Padding, Row, Stack};
pub use self::marquee::{Align, Marquee};
pub use self::positioned::AnimatedPositioned;
pub use self::sequence::{Animation, Sequence};
pub use self::transformation::Transformation;

/// A renderable node of the widget tree.
pub trait Widget: Debug + Send + Sync {
    /// Area actually painted when given `bounds`, anchored at the origin.
    fn paint_bounds(&self, bounds: Bounds, _frame: usize) -> Bounds {
        Bounds::sized(bounds.dx(), bounds.dy())
    }

    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize);

    fn frame_count(&self) -> usize {
        1
    }
}

/// Shared, immutable widget handle.
pub type WidgetRef = std::sync::Arc<dyn Widget>;

/// Largest frame count among `widgets`, at least 1.
pub fn max_frame_count(widgets: &[WidgetRef]) -> usize {
    widgets
        .iter()
        .map(|w| w.frame_count())
        .fold(1, usize::max)
}

/// Scroll/bounce axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl std::str::FromStr for Axis {
    type Err = crate::foundation::error::PixmotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(crate::foundation::error::PixmotionError::parse(format!(
                "invalid direction '{s}' (expected 'horizontal' or 'vertical')"
            ))),
        }
    }
}

impl Axis {
    /// Length of `b` along this axis.
    pub fn length(self, b: Bounds) -> i32 {
        match self {
            Self::Horizontal => b.dx(),
            Self::Vertical => b.dy(),
        }
    }

    /// `(dx, dy)` for a shift of `offset` along this axis.
    pub fn offset(self, offset: i32) -> (f64, f64) {
        match self {
            Self::Horizontal => (f64::from(offset), 0.0),
            Self::Vertical => (0.0, f64::from(offset)),
        }
    }
}

//! Frame-indexed timing, easing and transform interpolation.

pub mod ease;
pub mod keyframe;
pub mod matrix;
pub mod origin;
pub mod rounding;
pub mod timing;
pub mod transform;
pub mod value;

pub use ease::{CubicBezier, Curve, EASE_IN, EASE_IN_OUT, EASE_OUT};
pub use keyframe::{Keyframe, Timeline};
pub use origin::Origin;
pub use rounding::Rounding;
pub use timing::{Direction, FillMode};
pub use transform::Transform;
pub use value::{NumberOrPercentage, Percentage};

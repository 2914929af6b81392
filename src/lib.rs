#![forbid(unsafe_code)]
//! Frame-indexed widget animation for small fixed-size pixel displays.
//!
//! A widget tree is painted once per frame index onto a [`Surface`]. Animated widgets
//! ([`Transformation`], [`Bounce`], [`Marquee`], [`Sequence`], [`Animation`]) derive their
//! state purely from the frame index, so [`Root::render`] can paint frames in parallel.

pub mod animation;
pub mod foundation;
pub mod render;
pub mod scene;
pub mod widgets;

pub use animation::{
    CubicBezier, Curve, Direction, FillMode, Keyframe, NumberOrPercentage, Origin, Percentage,
    Rounding, Timeline, Transform,
};
pub use foundation::core::{
    Bounds, DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH, Display, Rgba8, parse_color,
};
pub use foundation::error::{PixmotionError, PixmotionResult};
pub use render::encode::{write_gif, write_png_frames};
pub use render::{
    CpuSurface, DEFAULT_DELAY_MS, DEFAULT_MAX_FRAME_COUNT, FrameRGBA, RenderOpts, Root, Surface,
};
pub use scene::{RootDef, WidgetDef, build_root, root_from_json, root_from_path};
pub use widgets::{
    Align, AnimatedPositioned, Animation, Axis, Block, Bounce, Column, Image, Insets, Marquee,
    Padding, Row, Sequence, Stack, Transformation, Widget, WidgetRef,
};

#[cfg(test)]
#[path = "../tests/unit/testutil.rs"]
pub(crate) mod testutil;

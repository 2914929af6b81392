use std::str::FromStr;

use crate::foundation::core::{Bounds, DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH};
use crate::foundation::error::{PixmotionError, PixmotionResult};
use crate::render::surface::Surface;
use crate::widgets::{Axis, Widget, WidgetRef};

/// Placement of a marquee child that fits without scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    fn offset(self, free: i32) -> i32 {
        match self {
            Self::Start => 0,
            Self::Center => free / 2,
            Self::End => free,
        }
    }
}

impl FromStr for Align {
    type Err = PixmotionError;

    fn from_str(s: &str) -> PixmotionResult<Self> {
        match s {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            _ => Err(PixmotionError::parse(format!(
                "invalid align '{s}' (expected 'start', 'center' or 'end')"
            ))),
        }
    }
}

/// Scrolls its child through a fixed-length window.
///
/// The child scrolls out starting `offset_start` pixels from the leading edge, then back in
/// until it rests `offset_end` pixels from it. Only frame 0 of the child is shown.
#[derive(Clone, Debug)]
pub struct Marquee {
    pub child: WidgetRef,
    pub width: i32,
    pub height: i32,
    pub offset_start: i32,
    pub offset_end: i32,
    pub direction: Axis,
    pub align: Align,
    pub scroll_always: bool,
}

impl Marquee {
    pub fn new(child: WidgetRef, direction: Axis, length: i32) -> Self {
        let (width, height) = match direction {
            Axis::Horizontal => (length, 0),
            Axis::Vertical => (0, length),
        };
        Self {
            child,
            width,
            height,
            offset_start: 0,
            offset_end: 0,
            direction,
            align: Align::default(),
            scroll_always: false,
        }
    }

    pub fn offsets(mut self, start: i32, end: i32) -> Self {
        self.offset_start = start;
        self.offset_end = end;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn scroll_always(mut self, scroll_always: bool) -> Self {
        self.scroll_always = scroll_always;
        self
    }

    fn size(&self) -> i32 {
        match self.direction {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Bounds the child is measured and painted in; `cross` is the other axis' extent.
    fn child_bounds(&self, cross: i32) -> Bounds {
        match self.direction {
            Axis::Horizontal => Bounds::sized(self.width.saturating_mul(2), cross),
            Axis::Vertical => Bounds::sized(cross, self.height.saturating_mul(2)),
        }
    }

    fn cross(&self, bounds: Bounds) -> i32 {
        match self.direction {
            Axis::Horizontal => bounds.dy(),
            Axis::Vertical => bounds.dx(),
        }
    }

    fn scrolls(&self, child_len: i32) -> bool {
        child_len > self.size() || self.scroll_always
    }

    /// Offset of the child along the axis at `frame`, given its length.
    fn offset_for(&self, child_len: i32, frame: usize) -> i32 {
        let size = self.size();
        if !self.scrolls(child_len) {
            return self.align.offset(size.saturating_sub(child_len));
        }

        let start = self.offset_start.max(-child_len);
        let end = self.offset_end.max(-child_len);
        let loop_idx = i64::from(child_len) + i64::from(start);
        let end_idx = loop_idx + i64::from(size) - i64::from(end);
        let f = i64::try_from(frame).unwrap_or(i64::MAX);

        let offset = if f <= loop_idx {
            i64::from(start) - f
        } else if f <= end_idx {
            i64::from(end) + (end_idx - f)
        } else {
            i64::from(end)
        };
        i32::try_from(offset).unwrap_or(i32::MIN)
    }

    fn child_len(&self, cross: i32) -> i32 {
        let cb = self.child.paint_bounds(self.child_bounds(cross), 0);
        self.direction.length(cb)
    }

    /// Pixel offset of the child at `frame` when painted in `bounds`.
    pub fn offset(&self, bounds: Bounds, frame: usize) -> i32 {
        let len = self.child_len(self.cross(bounds));
        self.offset_for(len, frame)
    }
}

impl Widget for Marquee {
    fn paint_bounds(&self, bounds: Bounds, _frame: usize) -> Bounds {
        let cb = self
            .child
            .paint_bounds(self.child_bounds(self.cross(bounds)), 0);
        match self.direction {
            Axis::Horizontal => Bounds::sized(self.width, cb.dy()),
            Axis::Vertical => Bounds::sized(cb.dx(), self.height),
        }
    }

    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize) {
        let own = self.paint_bounds(bounds, frame);
        let cross = self.cross(bounds);
        let (dx, dy) = self
            .direction
            .offset(self.offset_for(self.child_len(cross), frame));

        surface.push();
        surface.clip_rect(own.to_rect());
        surface.translate(dx, dy);
        self.child.paint(surface, self.child_bounds(cross), 0);
        surface.pop();
    }

    fn frame_count(&self) -> usize {
        let cross = match self.direction {
            Axis::Horizontal => DEFAULT_DISPLAY_HEIGHT,
            Axis::Vertical => DEFAULT_DISPLAY_WIDTH,
        };
        let len = self.child_len(i32::try_from(cross).unwrap_or(i32::MAX));
        if !self.scrolls(len) {
            return 1;
        }

        let start = self.offset_start.max(-len);
        let end = self.offset_end.max(-len);
        let seam = usize::from(start != end);
        let total = i64::from(len) + i64::from(start) + i64::from(self.size()) - i64::from(end);
        (usize::try_from(total).unwrap_or(0) + seam).max(1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/marquee.rs"]
mod tests;

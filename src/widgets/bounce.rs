use crate::animation::Curve;
use crate::foundation::core::{Bounds, DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH};
use crate::render::surface::Surface;
use crate::widgets::{Axis, Widget, WidgetRef};

/// Moves its child back and forth along one axis when it does not fit.
///
/// The box is `width` wide and as tall as the child horizontally, or `height` tall and as
/// wide as the child vertically. A fitting child stays put unless `always` is set.
#[derive(Clone, Debug)]
pub struct Bounce {
    pub child: WidgetRef,
    pub width: i32,
    pub height: i32,
    pub direction: Axis,
    pub always: bool,
    /// Frames held at the start and at the turning point; at least 1.
    pub pause: usize,
    pub curve: Curve,
}

/// Boundaries of one bounce cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Phases {
    begin: usize,
    mid: usize,
    turn: usize,
    end: usize,
}

impl Phases {
    fn new(pause: usize, dist: usize) -> Self {
        let hold = pause.max(1) - 1;
        let begin = hold;
        let mid = begin + dist;
        let turn = mid + hold;
        Self {
            begin,
            mid,
            turn,
            end: turn + dist,
        }
    }
}

impl Bounce {
    pub fn new(child: WidgetRef, direction: Axis, length: i32) -> Self {
        let (width, height) = match direction {
            Axis::Horizontal => (length, 0),
            Axis::Vertical => (0, length),
        };
        Self {
            child,
            width,
            height,
            direction,
            always: false,
            pause: 1,
            curve: Curve::Linear,
        }
    }

    pub fn always(mut self, always: bool) -> Self {
        self.always = always;
        self
    }

    pub fn pause(mut self, pause: usize) -> Self {
        self.pause = pause;
        self
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    fn length(&self) -> i32 {
        match self.direction {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Generous bounds the child is measured and painted in.
    fn child_bounds(&self) -> Bounds {
        let cross = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        match self.direction {
            Axis::Horizontal => Bounds::sized(
                self.width.saturating_mul(10),
                cross(DEFAULT_DISPLAY_HEIGHT),
            ),
            Axis::Vertical => Bounds::sized(
                cross(DEFAULT_DISPLAY_WIDTH),
                self.height.saturating_mul(10),
            ),
        }
    }

    /// Free space along the axis; negative when the child overflows.
    fn diff(&self, frame: usize) -> i32 {
        let cb = self.child.paint_bounds(self.child_bounds(), frame);
        self.length().saturating_sub(self.direction.length(cb))
    }

    fn is_static(&self, diff: i32) -> bool {
        diff >= 0 && !self.always
    }

    /// Eased position in `[0, 1]` of the child along its path at `frame`.
    fn value(&self, dist: usize, frame: usize) -> f64 {
        let p = Phases::new(self.pause, dist);
        let ramp = |from: usize| (frame - from) as f64 / dist as f64;

        if frame < p.begin {
            self.curve.transform(0.0)
        } else if frame < p.mid {
            self.curve.transform(ramp(p.begin))
        } else if frame < p.turn {
            self.curve.transform(1.0)
        } else if frame < p.end {
            1.0 - self.curve.reverse().transform(ramp(p.turn))
        } else {
            self.curve.transform(0.0)
        }
    }

    /// Pixel offset of the child along the axis at `frame`.
    pub fn offset(&self, frame: usize) -> i32 {
        let diff = self.diff(frame);
        if self.is_static(diff) {
            return 0;
        }
        let dist = diff.unsigned_abs() as usize;
        let value = self.value(dist, frame);
        diff.signum() * (dist as f64 * value).round() as i32
    }
}

impl Widget for Bounce {
    fn paint_bounds(&self, _bounds: Bounds, frame: usize) -> Bounds {
        let cb = self.child.paint_bounds(self.child_bounds(), frame);
        match self.direction {
            Axis::Horizontal => Bounds::sized(self.width, cb.dy()),
            Axis::Vertical => Bounds::sized(cb.dx(), self.height),
        }
    }

    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize) {
        let own = self.paint_bounds(bounds, frame);
        let (dx, dy) = self.direction.offset(self.offset(frame));

        surface.push();
        surface.clip_rect(own.to_rect());
        surface.translate(dx, dy);
        self.child.paint(surface, self.child_bounds(), frame);
        surface.pop();
    }

    fn frame_count(&self) -> usize {
        let diff = self.diff(0);
        if self.is_static(diff) {
            return 1;
        }
        let dist = diff.unsigned_abs() as usize;
        Phases::new(self.pause, dist).end.max(1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/bounce.rs"]
mod tests;

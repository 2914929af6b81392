use crate::animation::Curve;
use crate::foundation::core::Bounds;
use crate::render::surface::Surface;
use crate::widgets::{Widget, WidgetRef};

/// Moves its child from `(x_start, y_start)` to `(x_end, y_end)` over `duration` frames.
///
/// The child keeps animating with its own frame index while it moves. Past
/// `delay + duration` the child rests at the end position; `hold` only pads the frame
/// count. Content outside the incoming bounds is clipped.
#[derive(Clone, Debug)]
pub struct AnimatedPositioned {
    pub child: WidgetRef,
    pub x_start: i32,
    pub x_end: i32,
    pub y_start: i32,
    pub y_end: i32,
    pub duration: usize,
    pub curve: Curve,
    pub delay: usize,
    pub hold: usize,
}

impl AnimatedPositioned {
    pub fn new(child: WidgetRef, duration: usize) -> Self {
        Self {
            child,
            x_start: 0,
            x_end: 0,
            y_start: 0,
            y_end: 0,
            duration,
            curve: Curve::Linear,
            delay: 0,
            hold: 0,
        }
    }

    pub fn x(mut self, start: i32, end: i32) -> Self {
        self.x_start = start;
        self.x_end = end;
        self
    }

    pub fn y(mut self, start: i32, end: i32) -> Self {
        self.y_start = start;
        self.y_end = end;
        self
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn delay(mut self, delay: usize) -> Self {
        self.delay = delay;
        self
    }

    pub fn hold(mut self, hold: usize) -> Self {
        self.hold = hold;
        self
    }

    /// Eased progress along the path; exactly `1.0` once the motion is over.
    fn progress(&self, frame: usize) -> f64 {
        if frame < self.delay {
            0.0
        } else if frame - self.delay >= self.duration {
            1.0
        } else {
            self.curve
                .transform((frame - self.delay) as f64 / self.duration as f64)
        }
    }

    /// Top-left corner of the child at `frame`.
    ///
    /// Each axis steps towards its end by `ceil(distance * progress)` pixels.
    pub fn position(&self, frame: usize) -> (i32, i32) {
        let progress = self.progress(frame);
        let step = |start: i32, end: i32| -> i32 {
            let dist = (i64::from(end) - i64::from(start)).abs();
            let moved = ((dist as f64) * progress).ceil() as i64;
            let pos = if start > end {
                i64::from(start) - moved
            } else {
                i64::from(start) + moved
            };
            i32::try_from(pos).unwrap_or(end)
        };
        (
            step(self.x_start, self.x_end),
            step(self.y_start, self.y_end),
        )
    }
}

impl Widget for AnimatedPositioned {
    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize) {
        let own = self.paint_bounds(bounds, frame);
        let (x, y) = self.position(frame);

        surface.push();
        surface.clip_rect(own.to_rect());
        surface.translate(f64::from(x), f64::from(y));
        self.child.paint(surface, bounds, frame);
        surface.pop();
    }

    fn frame_count(&self) -> usize {
        self.duration
            .saturating_add(self.delay)
            .saturating_add(self.hold)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/positioned.rs"]
mod tests;

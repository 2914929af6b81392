use crate::animation::{Direction, FillMode, Keyframe, Origin, Rounding, Timeline};
use crate::foundation::core::Bounds;
use crate::render::surface::Surface;
use crate::widgets::{Widget, WidgetRef};

/// Animates the transform of its child through a keyframe timeline.
///
/// The child keeps its own frame index: child animation and transform animation run
/// side by side.
#[derive(Clone, Debug)]
pub struct Transformation {
    pub child: WidgetRef,
    pub timeline: Timeline,
    /// Frames per ramp.
    pub duration: usize,
    /// Hold frames before the ramp and again after it.
    pub delay: usize,
    /// Fixed canvas width; zero takes the incoming bounds.
    pub width: i32,
    pub height: i32,
    pub origin: Origin,
    pub direction: Direction,
    pub fill_mode: FillMode,
    pub rounding: Rounding,
    /// Extend the frame count to cover the child's.
    pub wait_for_child: bool,
}

impl Transformation {
    pub fn new(child: WidgetRef, keyframes: Vec<Keyframe>, duration: usize) -> Self {
        Self {
            child,
            timeline: Timeline::new(keyframes),
            duration,
            delay: 0,
            width: 0,
            height: 0,
            origin: Origin::default(),
            direction: Direction::default(),
            fill_mode: FillMode::default(),
            rounding: Rounding::default(),
            wait_for_child: false,
        }
    }

    pub fn delay(mut self, delay: usize) -> Self {
        self.delay = delay;
        self
    }

    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn wait_for_child(mut self, wait: bool) -> Self {
        self.wait_for_child = wait;
        self
    }

    /// Un-eased timeline progress at `frame`.
    pub fn progress(&self, frame: usize) -> f64 {
        self.direction
            .progress(self.delay, self.duration, self.fill_mode.value(), frame)
    }
}

impl Widget for Transformation {
    fn paint_bounds(&self, bounds: Bounds, _frame: usize) -> Bounds {
        let w = if self.width == 0 { bounds.dx() } else { self.width };
        let h = if self.height == 0 { bounds.dy() } else { self.height };
        Bounds::sized(w, h)
    }

    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize) {
        let bounds = self.paint_bounds(bounds, frame);
        let child_bounds = self.child.paint_bounds(bounds, frame);
        let origin = self.origin.resolve(child_bounds);
        let progress = self.progress(frame);

        surface.push();
        match self.timeline.transforms_at(progress) {
            Some(transforms) => {
                for t in &transforms {
                    t.apply(surface, origin, self.rounding);
                }
            }
            None => tracing::trace!(frame, progress, "no transforms resolved, painting untransformed"),
        }
        self.child.paint(surface, bounds, frame);
        surface.pop();
    }

    fn frame_count(&self) -> usize {
        let own = self.direction.frame_count(self.delay, self.duration);
        if self.wait_for_child {
            own.max(self.child.frame_count())
        } else {
            own
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/transformation.rs"]
mod tests;

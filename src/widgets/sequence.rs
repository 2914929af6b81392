use crate::foundation::core::Bounds;
use crate::render::surface::Surface;
use crate::widgets::{Widget, WidgetRef};

/// Children played back to back, each for its own frame count.
#[derive(Clone, Debug, Default)]
pub struct Sequence {
    pub children: Vec<WidgetRef>,
}

impl Sequence {
    pub fn new(children: Vec<WidgetRef>) -> Self {
        Self { children }
    }

    /// Child active at `frame` and its local frame index.
    ///
    /// Frames past the end stay on the last child, which gets the overflowing local index.
    fn locate(&self, frame: usize) -> Option<(&WidgetRef, usize)> {
        let mut start = 0;
        for child in &self.children {
            let count = child.frame_count();
            if frame < start + count {
                return Some((child, frame - start));
            }
            start += count;
        }

        let last = self.children.last()?;
        let last_start = start - last.frame_count();
        Some((last, frame - last_start))
    }
}

impl Widget for Sequence {
    fn paint_bounds(&self, bounds: Bounds, frame: usize) -> Bounds {
        self.locate(frame)
            .map_or(Bounds::default(), |(child, local)| child.paint_bounds(bounds, local))
    }

    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize) {
        if let Some((child, local)) = self.locate(frame) {
            surface.push();
            child.paint(surface, bounds, local);
            surface.pop();
        }
    }

    fn frame_count(&self) -> usize {
        self.children.iter().map(|c| c.frame_count()).sum()
    }
}

/// One child per frame, cycling.
#[derive(Clone, Debug, Default)]
pub struct Animation {
    pub children: Vec<WidgetRef>,
}

impl Animation {
    pub fn new(children: Vec<WidgetRef>) -> Self {
        Self { children }
    }

    fn child_at(&self, frame: usize) -> Option<&WidgetRef> {
        if self.children.is_empty() {
            return None;
        }
        self.children.get(frame % self.children.len())
    }
}

impl Widget for Animation {
    fn paint_bounds(&self, bounds: Bounds, frame: usize) -> Bounds {
        self.child_at(frame)
            .map_or(Bounds::default(), |c| c.paint_bounds(bounds, frame))
    }

    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize) {
        if let Some(child) = self.child_at(frame) {
            child.paint(surface, bounds, frame);
        }
    }

    fn frame_count(&self) -> usize {
        self.children.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/sequence.rs"]
mod tests;

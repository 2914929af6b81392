use crate::foundation::core::{Bounds, Rect, Rgba8};
use crate::render::surface::Surface;
use crate::widgets::{Widget, WidgetRef, max_frame_count};

/// Pixel rect; negative extents collapse to empty.
fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
    let (w, h) = (w.max(0), h.max(0));
    Rect::new(
        f64::from(x),
        f64::from(y),
        f64::from(x + w),
        f64::from(y + h),
    )
}

/// Rectangle with an optional background color and a centered child.
///
/// A zero `width`/`height` expands to the available bounds.
#[derive(Clone, Debug, Default)]
pub struct Block {
    pub child: Option<WidgetRef>,
    pub width: i32,
    pub height: i32,
    pub padding: i32,
    pub color: Rgba8,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    pub fn padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    pub fn child(mut self, child: WidgetRef) -> Self {
        self.child = Some(child);
        self
    }

    fn resolved_size(&self, bounds: Bounds) -> (i32, i32) {
        let w = if self.width == 0 { bounds.dx() } else { self.width };
        let h = if self.height == 0 { bounds.dy() } else { self.height };
        (w, h)
    }
}

impl Widget for Block {
    fn paint_bounds(&self, bounds: Bounds, _frame: usize) -> Bounds {
        let (w, h) = self.resolved_size(bounds);
        Bounds::sized(w, h)
    }

    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize) {
        let (w, h) = self.resolved_size(bounds);

        if !self.color.is_transparent() && w > 0 && h > 0 {
            surface.set_color(self.color);
            surface.fill_rect(rect(0, 0, w, h));
        }

        let Some(child) = &self.child else {
            return;
        };
        let (cw, ch) = (w - self.padding * 2, h - self.padding * 2);
        if cw < 0 || ch < 0 {
            return;
        }

        surface.push();
        surface.clip_rect(rect(self.padding, self.padding, cw, ch));
        let inner = Bounds::sized(cw, ch);
        let cb = child.paint_bounds(inner, frame);
        let x = w / 2 - cb.dx() / 2;
        let y = h / 2 - cb.dy() / 2;
        surface.translate(f64::from(x), f64::from(y));
        child.paint(surface, inner, frame);
        surface.pop();
    }

    fn frame_count(&self) -> usize {
        self.child.as_ref().map_or(1, |c| c.frame_count())
    }
}

/// Children packed along one axis, start-aligned.
#[derive(Clone, Debug)]
struct Vector<'a> {
    children: &'a [WidgetRef],
    expanded: bool,
    vertical: bool,
}

struct Placed {
    available: Bounds,
    painted: Bounds,
}

impl Vector<'_> {
    fn axes(&self) -> (i32, i32) {
        if self.vertical { (0, 1) } else { (1, 0) }
    }

    fn measure(&self, bounds: Bounds, frame: usize) -> (Vec<Placed>, Bounds) {
        let (dx, dy) = self.axes();
        let (bw, bh) = (bounds.dx(), bounds.dy());
        let (mut max_w, mut max_h, mut sum_w, mut sum_h) = (0, 0, 0, 0);
        let mut placed = Vec::with_capacity(self.children.len());

        for child in self.children {
            let available = Bounds::sized(bw - dx * sum_w, bh - dy * sum_h);
            let painted = child.paint_bounds(available, frame);
            sum_w += painted.dx();
            sum_h += painted.dy();
            max_w = max_w.max(painted.dx());
            max_h = max_h.max(painted.dy());
            placed.push(Placed { available, painted });

            if sum_w * dx >= bw || sum_h * dy >= bh {
                break;
            }
        }

        let (mut width, mut height) = if self.expanded {
            (dx * bw + dy * max_w, dx * max_h + dy * bh)
        } else {
            (dx * sum_w + dy * max_w, dx * max_h + dy * sum_h)
        };
        width = width.min(bw);
        height = height.min(bh);

        (placed, Bounds::sized(width, height))
    }

    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize) {
        let (dx, dy) = self.axes();
        let (placed, own) = self.measure(bounds, frame);
        let limit = dx * bounds.dx() + dy * bounds.dy();

        surface.push();
        surface.clip_rect(own.to_rect());
        let mut offset = 0;
        for (child, p) in self.children.iter().zip(&placed) {
            surface.push();
            surface.translate(f64::from(dx * offset), f64::from(dy * offset));
            child.paint(surface, p.available, frame);
            surface.pop();

            offset += dx * p.painted.dx() + dy * p.painted.dy();
            if offset >= limit {
                break;
            }
        }
        surface.pop();
    }
}

/// Children laid out left to right.
#[derive(Clone, Debug, Default)]
pub struct Row {
    pub children: Vec<WidgetRef>,
    /// Take the full available width.
    pub expanded: bool,
}

impl Row {
    pub fn new(children: Vec<WidgetRef>) -> Self {
        Self {
            children,
            expanded: false,
        }
    }

    fn vector(&self) -> Vector<'_> {
        Vector {
            children: &self.children,
            expanded: self.expanded,
            vertical: false,
        }
    }
}

impl Widget for Row {
    fn paint_bounds(&self, bounds: Bounds, frame: usize) -> Bounds {
        self.vector().measure(bounds, frame).1
    }

    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize) {
        self.vector().paint(surface, bounds, frame);
    }

    fn frame_count(&self) -> usize {
        max_frame_count(&self.children)
    }
}

/// Children laid out top to bottom.
#[derive(Clone, Debug, Default)]
pub struct Column {
    pub children: Vec<WidgetRef>,
    /// Take the full available height.
    pub expanded: bool,
}

impl Column {
    pub fn new(children: Vec<WidgetRef>) -> Self {
        Self {
            children,
            expanded: false,
        }
    }

    fn vector(&self) -> Vector<'_> {
        Vector {
            children: &self.children,
            expanded: self.expanded,
            vertical: true,
        }
    }
}

impl Widget for Column {
    fn paint_bounds(&self, bounds: Bounds, frame: usize) -> Bounds {
        self.vector().measure(bounds, frame).1
    }

    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize) {
        self.vector().paint(surface, bounds, frame);
    }

    fn frame_count(&self) -> usize {
        max_frame_count(&self.children)
    }
}

/// Children painted on top of each other, first at the bottom.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    pub children: Vec<WidgetRef>,
}

impl Stack {
    pub fn new(children: Vec<WidgetRef>) -> Self {
        Self { children }
    }
}

impl Widget for Stack {
    fn paint_bounds(&self, bounds: Bounds, frame: usize) -> Bounds {
        let (w, h) = self
            .children
            .iter()
            .map(|c| c.paint_bounds(bounds, frame))
            .fold((0, 0), |(w, h), b| (w.max(b.dx()), h.max(b.dy())));
        Bounds::sized(w.min(bounds.dx()), h.min(bounds.dy()))
    }

    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize) {
        let own = self.paint_bounds(bounds, frame);
        surface.push();
        surface.clip_rect(own.to_rect());
        for child in &self.children {
            surface.push();
            child.paint(surface, bounds, frame);
            surface.pop();
        }
        surface.pop();
    }

    fn frame_count(&self) -> usize {
        max_frame_count(&self.children)
    }
}

/// Per-edge padding in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Insets {
    #[serde(default)]
    pub left: i32,
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub right: i32,
    #[serde(default)]
    pub bottom: i32,
}

impl Insets {
    pub fn uniform(v: i32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    fn horizontal(self) -> i32 {
        self.left + self.right
    }

    fn vertical(self) -> i32 {
        self.top + self.bottom
    }
}

/// Child inset by [`Insets`], with an optional background color.
#[derive(Clone, Debug)]
pub struct Padding {
    pub child: WidgetRef,
    pub pad: Insets,
    /// Take the full available bounds instead of wrapping the child.
    pub expanded: bool,
    pub color: Rgba8,
}

impl Padding {
    pub fn new(child: WidgetRef, pad: Insets) -> Self {
        Self {
            child,
            pad,
            expanded: false,
            color: Rgba8::TRANSPARENT,
        }
    }

    fn inner(&self, bounds: Bounds) -> Bounds {
        Bounds::sized(
            bounds.dx() - self.pad.horizontal(),
            bounds.dy() - self.pad.vertical(),
        )
    }
}

impl Widget for Padding {
    fn paint_bounds(&self, bounds: Bounds, frame: usize) -> Bounds {
        if self.expanded {
            return Bounds::sized(bounds.dx(), bounds.dy());
        }
        let cb = self.child.paint_bounds(self.inner(bounds), frame);
        Bounds::sized(
            cb.dx() + self.pad.horizontal(),
            cb.dy() + self.pad.vertical(),
        )
    }

    fn paint(&self, surface: &mut dyn Surface, bounds: Bounds, frame: usize) {
        let own = self.paint_bounds(bounds, frame);
        let (w, h) = (own.dx(), own.dy());

        if !self.color.is_transparent() && w > 0 && h > 0 {
            surface.set_color(self.color);
            surface.fill_rect(rect(0, 0, w, h));
        }

        surface.push();
        surface.clip_rect(rect(
            self.pad.left.max(0),
            self.pad.top.max(0),
            w - self.pad.horizontal(),
            h - self.pad.vertical(),
        ));
        surface.translate(f64::from(self.pad.left), f64::from(self.pad.top));
        self.child.paint(surface, self.inner(bounds), frame);
        surface.pop();
    }

    fn frame_count(&self) -> usize {
        self.child.frame_count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/layout.rs"]
mod tests;

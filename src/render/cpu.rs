use kurbo::Shape;

use crate::{
    foundation::core::{Affine, BezPath, Rect, Rgba8},
    foundation::error::{PixmotionError, PixmotionResult},
    render::{frame::FrameRGBA, surface::Surface},
};

/// Software [`Surface`] backed by a `vello_cpu` render context.
pub struct CpuSurface {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
    transform: Affine,
    color: Rgba8,
    clip_layers: usize,
    stack: Vec<SavedState>,
}

#[derive(Clone, Copy, Debug)]
struct SavedState {
    transform: Affine,
    color: Rgba8,
    clip_layers: usize,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("transform", &self.transform)
            .field("depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    pub fn new(width: u32, height: u32) -> PixmotionResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| PixmotionError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| PixmotionError::render("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(PixmotionError::render(format!(
                "surface must be non-empty, got {width}x{height}"
            )));
        }

        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
            width: width_u16,
            height: height_u16,
            transform: Affine::IDENTITY,
            color: Rgba8::BLACK,
            clip_layers: 0,
            stack: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Fill the whole surface, ignoring the current transform.
    pub fn fill_background(&mut self, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    /// Rasterize everything drawn so far.
    pub fn finish(mut self) -> PixmotionResult<FrameRGBA> {
        for _ in 0..self.clip_layers {
            self.ctx.pop_layer();
        }
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA::new(
            u32::from(self.width),
            u32::from(self.height),
            pixmap.data_as_u8_slice().to_vec(),
        )
    }

    fn prepare_fill(&mut self) -> bool {
        if self.color.is_transparent() {
            return false;
        }
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx.set_paint(color_to_cpu(self.color));
        true
    }
}

impl Surface for CpuSurface {
    fn push(&mut self) {
        self.stack.push(SavedState {
            transform: self.transform,
            color: self.color,
            clip_layers: self.clip_layers,
        });
    }

    fn pop(&mut self) {
        let Some(saved) = self.stack.pop() else {
            tracing::trace!("pop on an empty surface stack ignored");
            return;
        };
        while self.clip_layers > saved.clip_layers {
            self.ctx.pop_layer();
            self.clip_layers -= 1;
        }
        self.transform = saved.transform;
        self.color = saved.color;
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn set_color(&mut self, color: Rgba8) {
        self.color = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        if self.prepare_fill() {
            self.ctx.fill_rect(&rect_to_cpu(rect));
        }
    }

    fn fill_path(&mut self, path: &BezPath) {
        if self.prepare_fill() {
            self.ctx.fill_path(&bezpath_to_cpu(path));
        }
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx.push_clip_layer(&bezpath_to_cpu(&rect.to_path(0.1)));
        self.clip_layers += 1;
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

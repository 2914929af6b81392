use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Vec2};

/// Drawing capability set consumed by widgets and transforms.
///
/// Transform operations compose in local space: `translate` followed by `scale` scales
/// first, then translates, matching canvas-style APIs. `push`/`pop` save and restore the
/// transform, the current color and any clips added since the `push`.
pub trait Surface {
    fn push(&mut self);
    fn pop(&mut self);

    /// Current user-to-device transform.
    fn transform(&self) -> Affine;
    fn set_transform(&mut self, transform: Affine);

    fn set_color(&mut self, color: Rgba8);
    fn fill_rect(&mut self, rect: Rect);
    fn fill_path(&mut self, path: &BezPath);

    /// Intersect the clip with `rect` (in local coordinates) until the matching `pop`.
    fn clip_rect(&mut self, rect: Rect);

    fn translate(&mut self, dx: f64, dy: f64) {
        let t = self.transform() * Affine::translate((dx, dy));
        self.set_transform(t);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        let t = self.transform() * Affine::scale_non_uniform(sx, sy);
        self.set_transform(t);
    }

    fn rotate(&mut self, radians: f64) {
        let t = self.transform() * Affine::rotate(radians);
        self.set_transform(t);
    }

    fn rotate_about(&mut self, radians: f64, origin: Vec2) {
        self.translate(origin.x, origin.y);
        self.rotate(radians);
        self.translate(-origin.x, -origin.y);
    }

    fn scale_about(&mut self, sx: f64, sy: f64, origin: Vec2) {
        self.translate(origin.x, origin.y);
        self.scale(sx, sy);
        self.translate(-origin.x, -origin.y);
    }

    fn draw_pixel(&mut self, x: i32, y: i32) {
        let (x, y) = (f64::from(x), f64::from(y));
        self.fill_rect(Rect::new(x, y, x + 1.0, y + 1.0));
    }

    /// Map a local point through the current transform.
    fn transform_point(&self, p: Point) -> Point {
        self.transform() * p
    }
}

use crate::foundation::error::{PixmotionError, PixmotionResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Default display width in pixels.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 64;
/// Default display height in pixels.
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 32;

/// Integer pixel rectangle, `x1`/`y1` exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Bounds anchored at the origin with the given size.
    pub fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn dx(self) -> i32 {
        self.x1 - self.x0
    }

    pub fn dy(self) -> i32 {
        self.y1 - self.y0
    }

    pub fn is_empty(self) -> bool {
        self.dx() <= 0 || self.dy() <= 0
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// Parse a hex color (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`; the `#` is optional).
pub fn parse_color(s: &str) -> PixmotionResult<Rgba8> {
    let hex = s.trim().trim_start_matches('#');
    let invalid = || PixmotionError::parse(format!("color '{s}' is not a hex color"));
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let nibble = |i: usize| -> PixmotionResult<u8> {
        let v = u8::from_str_radix(&hex[i..=i], 16).map_err(|_| invalid())?;
        Ok(v | (v << 4))
    };
    let byte = |i: usize| -> PixmotionResult<u8> {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid())
    };

    match hex.len() {
        3 => Ok(Rgba8::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Ok(Rgba8::new(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Ok(Rgba8::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => Ok(Rgba8::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => Err(invalid()),
    }
}

/// Pixel dimensions of the target display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Display {
    pub width: u32,
    pub height: u32,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            width: DEFAULT_DISPLAY_WIDTH,
            height: DEFAULT_DISPLAY_HEIGHT,
        }
    }
}

impl Display {
    pub fn new(width: u32, height: u32) -> PixmotionResult<Self> {
        if width == 0 || height == 0 {
            return Err(PixmotionError::validation(
                "display width and height must be > 0",
            ));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(PixmotionError::validation(
                "display width and height must fit in u16",
            ));
        }
        Ok(Self { width, height })
    }

    pub fn bounds(self) -> Bounds {
        Bounds::sized(self.width as i32, self.height as i32)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

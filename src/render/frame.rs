use crate::foundation::error::{PixmotionError, PixmotionResult};

/// One rendered frame: row-major RGBA8, premultiplied alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGBA {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> PixmotionResult<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(PixmotionError::render(format!(
                "frame buffer for {width}x{height} must hold {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Premultiplied pixel at `(x, y)`, `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data
            .get(i..i + 4)
            .and_then(|px| <[u8; 4]>::try_from(px).ok())
    }

    /// Straight-alpha copy for encoders.
    pub fn to_rgba_image(&self) -> PixmotionResult<image::RgbaImage> {
        let mut straight = self.data.clone();
        for px in straight.chunks_exact_mut(4) {
            unpremultiply(px);
        }
        image::RgbaImage::from_raw(self.width, self.height, straight).ok_or_else(|| {
            PixmotionError::render(format!(
                "frame buffer does not match {}x{}",
                self.width, self.height
            ))
        })
    }
}

fn unpremultiply(px: &mut [u8]) {
    let a = u16::from(px[3]);
    if a == 0 || a == 255 {
        return;
    }
    for c in &mut px[..3] {
        *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
    }
}

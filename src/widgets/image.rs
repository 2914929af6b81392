use std::io::Cursor;
use std::sync::{Arc, OnceLock};

use ::image::{AnimationDecoder, ImageFormat, RgbaImage, codecs::gif::GifDecoder, imageops};
use anyhow::Context;

use crate::foundation::core::{Bounds, Rect, Rgba8};
use crate::foundation::error::{PixmotionError, PixmotionResult};
use crate::render::surface::Surface;
use crate::widgets::Widget;

/// Decoded frames shared by every paint of an [`Image`].
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub frames: Vec<RgbaImage>,
    /// Delay of the first GIF frame in milliseconds, 0 for still images.
    pub delay_ms: u32,
}

/// Raster image from encoded bytes (PNG, JPEG, GIF or WebP).
///
/// Bytes are decoded once on first use, shared across threads. Animated GIFs yield one
/// frame each and the frame index wraps. `width`/`height` resize with nearest-neighbour
/// sampling; a single zero dimension keeps the aspect ratio.
#[derive(Clone)]
pub struct Image {
    src: Arc<[u8]>,
    pub width: u32,
    pub height: u32,
    decoded: OnceLock<Result<DecodedImage, String>>,
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("src_len", &self.src.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("decoded", &self.decoded.get().map(|d| d.is_ok()))
            .finish()
    }
}

impl Image {
    pub fn new(src: impl Into<Arc<[u8]>>) -> Self {
        Self {
            src: src.into(),
            width: 0,
            height: 0,
            decoded: OnceLock::new(),
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self.decoded = OnceLock::new();
        self
    }

    /// Decode now and report failures; later calls reuse the result.
    pub fn prepare(&self) -> PixmotionResult<&DecodedImage> {
        self.decoded
            .get_or_init(|| self.decode().map_err(|e| format!("{e:#}")))
            .as_ref()
            .map_err(|msg| PixmotionError::validation(format!("image: {msg}")))
    }

    fn frames(&self) -> &[RgbaImage] {
        match self.prepare() {
            Ok(d) => &d.frames,
            Err(err) => {
                tracing::debug!(%err, "image not painted");
                Default::default()
            }
        }
    }

    fn frame(&self, frame: usize) -> Option<&RgbaImage> {
        let frames = self.frames();
        if frames.is_empty() {
            return None;
        }
        frames.get(frame % frames.len())
    }

    pub fn delay_ms(&self) -> u32 {
        self.prepare().map_or(0, |d| d.delay_ms)
    }

    fn decode(&self) -> anyhow::Result<DecodedImage> {
        let bytes: &[u8] = &self.src;
        let (frames, delay_ms) = if ::image::guess_format(bytes).ok() == Some(ImageFormat::Gif) {
            decode_gif(bytes)?
        } else {
            let img = ::image::load_from_memory(bytes).context("decode image from memory")?;
            (vec![img.to_rgba8()], 0)
        };
        let Some(first) = frames.first() else {
            anyhow::bail!("image has no frames");
        };

        let (w, h) = first.dimensions();
        let target = resized_dimensions(w, h, self.width, self.height);
        let frames = match target {
            Some((nw, nh)) => frames
                .iter()
                .map(|f| imageops::resize(f, nw, nh, imageops::FilterType::Nearest))
                .collect(),
            None => frames,
        };
        tracing::debug!(frames = frames.len(), delay_ms, "decoded image");

        Ok(DecodedImage { frames, delay_ms })
    }
}

fn decode_gif(bytes: &[u8]) -> anyhow::Result<(Vec<RgbaImage>, u32)> {
    let decoder = GifDecoder::new(Cursor::new(bytes)).context("open gif")?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .context("decode gif frames")?;
    let delay_ms = frames.first().map_or(0, |f| {
        let (numer, denom) = f.delay().numer_denom_ms();
        if denom == 0 { 0 } else { numer / denom }
    });
    Ok((frames.into_iter().map(|f| f.into_buffer()).collect(), delay_ms))
}

/// Target size for a requested `(width, height)`, `None` when no resize is asked for.
fn resized_dimensions(w: u32, h: u32, width: u32, height: u32) -> Option<(u32, u32)> {
    if width == 0 && height == 0 {
        return None;
    }
    let aspect = |num: u32, a: u32, b: u32| {
        if b == 0 {
            0
        } else {
            (f64::from(num) * (f64::from(a) / f64::from(b))) as u32
        }
    };
    let nw = if width == 0 { aspect(height, w, h) } else { width };
    let nh = if height == 0 { aspect(width, h, w) } else { height };
    Some((nw, nh))
}

impl Widget for Image {
    fn paint_bounds(&self, _bounds: Bounds, frame: usize) -> Bounds {
        self.frame(frame).map_or(Bounds::default(), |img| {
            let (w, h) = img.dimensions();
            Bounds::sized(
                i32::try_from(w).unwrap_or(i32::MAX),
                i32::try_from(h).unwrap_or(i32::MAX),
            )
        })
    }

    fn paint(&self, surface: &mut dyn Surface, _bounds: Bounds, frame: usize) {
        let Some(img) = self.frame(frame) else {
            return;
        };

        // One rect per horizontal run of identical pixels.
        for (y, row) in img.rows().enumerate() {
            let mut run: Option<(usize, Rgba8)> = None;
            let pixels = row.map(|p| Rgba8::new(p[0], p[1], p[2], p[3]));
            for (x, px) in pixels.chain(std::iter::once(Rgba8::TRANSPARENT)).enumerate() {
                match run {
                    Some((_, color)) if color == px => continue,
                    Some((start, color)) => {
                        surface.set_color(color);
                        let (x0, x1, y) = (start as f64, x as f64, y as f64);
                        surface.fill_rect(Rect::new(x0, y, x1, y + 1.0));
                    }
                    None => {}
                }
                run = (!px.is_transparent()).then_some((x, px));
            }
        }
    }

    fn frame_count(&self) -> usize {
        self.frames().len().max(1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/image.rs"]
mod tests;

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::{
    Delay, Frame, ImageFormat,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::{
    foundation::error::{PixmotionError, PixmotionResult},
    render::frame::FrameRGBA,
};

/// Write one PNG per frame as `<dir>/<stem>_0000.png`, ... and return the paths.
pub fn write_png_frames(
    frames: &[FrameRGBA],
    dir: &Path,
    stem: &str,
) -> PixmotionResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;

    let mut paths = Vec::with_capacity(frames.len());
    for (i, frame) in frames.iter().enumerate() {
        let path = dir.join(format!("{stem}_{i:04}.png"));
        frame
            .to_rgba_image()?
            .save_with_format(&path, ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        paths.push(path);
    }
    Ok(paths)
}

/// Write `frames` as an infinitely looping animated GIF.
pub fn write_gif<W: Write>(frames: &[FrameRGBA], delay_ms: u32, writer: W) -> PixmotionResult<()> {
    if frames.is_empty() {
        return Err(PixmotionError::validation("gif needs at least one frame"));
    }

    let delay = Delay::from_numer_denom_ms(delay_ms, 1);
    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite).context("set gif repeat")?;
    for (i, frame) in frames.iter().enumerate() {
        let img = frame.to_rgba_image()?;
        encoder
            .encode_frame(Frame::from_parts(img, 0, 0, delay))
            .with_context(|| format!("encode gif frame {i}"))?;
    }
    tracing::debug!(frames = frames.len(), delay_ms, "wrote gif");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;

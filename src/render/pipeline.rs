use rayon::prelude::*;

use crate::{
    foundation::core::{Display, Rgba8},
    foundation::error::{PixmotionError, PixmotionResult},
    render::{cpu::CpuSurface, frame::FrameRGBA, surface::Surface},
    widgets::WidgetRef,
};

/// Upper bound on frames rendered for one root unless overridden.
pub const DEFAULT_MAX_FRAME_COUNT: usize = 2000;

/// Frame delay used when a root does not set one.
pub const DEFAULT_DELAY_MS: u32 = 50;

/// Options for [`Root::render`].
#[derive(Clone, Debug)]
pub struct RenderOpts {
    pub display: Display,
    /// Paint a black background under the widget tree.
    pub solid_background: bool,
    pub max_frame_count: usize,
    /// Worker threads; `None` uses rayon's default.
    pub max_parallel_frames: Option<usize>,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            display: Display::default(),
            solid_background: false,
            max_frame_count: DEFAULT_MAX_FRAME_COUNT,
            max_parallel_frames: None,
        }
    }
}

/// Top of a widget tree plus playback metadata.
#[derive(Clone, Debug)]
pub struct Root {
    pub child: WidgetRef,
    /// Milliseconds between frames.
    pub delay_ms: u32,
    /// Seconds the rendered output stays valid; 0 means unspecified.
    pub max_age: u32,
    /// Ask the player to show every frame before moving on.
    pub show_full_animation: bool,
}

impl Root {
    pub fn new(child: WidgetRef) -> Self {
        Self {
            child,
            delay_ms: DEFAULT_DELAY_MS,
            max_age: 0,
            show_full_animation: false,
        }
    }

    pub fn delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Frames produced by [`Root::render`] under `opts`.
    pub fn frame_count(&self, opts: &RenderOpts) -> usize {
        self.child
            .frame_count()
            .min(opts.max_frame_count)
            .max(1)
    }

    /// Render one frame on a fresh surface the size of the display.
    pub fn render_frame(&self, opts: &RenderOpts, frame: usize) -> PixmotionResult<FrameRGBA> {
        let mut surface = CpuSurface::new(opts.display.width, opts.display.height)?;
        if opts.solid_background {
            surface.fill_background(Rgba8::BLACK);
        }
        surface.push();
        self.child
            .paint(&mut surface, opts.display.bounds(), frame);
        surface.pop();
        surface.finish()
    }

    /// Render every frame in parallel, ordered by frame index.
    ///
    /// The first failing frame aborts the whole batch.
    #[tracing::instrument(skip(self, opts), fields(width = opts.display.width, height = opts.display.height))]
    pub fn render(&self, opts: &RenderOpts) -> PixmotionResult<Vec<FrameRGBA>> {
        // Validate before fan-out.
        Display::new(opts.display.width, opts.display.height)?;

        let count = self.frame_count(opts);
        tracing::debug!(frames = count, "rendering frame set");

        let pool = build_thread_pool(opts.max_parallel_frames)?;
        pool.install(|| {
            (0..count)
                .into_par_iter()
                .map(|f| self.render_frame(opts, f))
                .collect()
        })
    }
}

fn build_thread_pool(threads: Option<usize>) -> PixmotionResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PixmotionError::validation(
            "max_parallel_frames must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PixmotionError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;

//! Drawing surfaces, frame buffers and frame-set rendering.

pub mod cpu;
pub mod encode;
pub mod frame;
pub mod pipeline;
pub mod surface;

pub use cpu::CpuSurface;
pub use frame::FrameRGBA;
pub use pipeline::{DEFAULT_DELAY_MS, DEFAULT_MAX_FRAME_COUNT, RenderOpts, Root};
pub use surface::Surface;

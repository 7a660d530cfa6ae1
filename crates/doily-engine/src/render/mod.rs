//! GPU presentation.
//!
//! Frames are rasterised on the CPU; the GPU only uploads the finished
//! RGBA8 image and draws it as a fullscreen textured triangle.

mod ctx;
mod pixmap;

pub use ctx::{RenderCtx, RenderTarget};
pub use pixmap::PixmapPresenter;

/// Surface clear colour, linear RGBA in `0.0..=1.0`.
pub use wgpu::Color as ClearColor;

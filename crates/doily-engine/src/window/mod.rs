//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single application window, and wires
//! them to the GPU layer. Frames are drawn on demand: after input, resize,
//! or an explicit [`RuntimeCtx::request_redraw`].

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
pub use winit::dpi::LogicalSize;
pub use winit::window::CursorIcon;

//! Doily engine crate.
//!
//! Platform and GPU runtime used by the UI layer: window + event loop,
//! wgpu device and surface, presentation of CPU-rendered frames, input
//! translation, fonts and logging.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod text;
pub mod window;

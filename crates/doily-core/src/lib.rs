//! Headless drawing engine for **Digital Doily**.
//!
//! A drawing is a history of freehand strokes in centre-relative canvas
//! space. The renderer replicates every stroke into each of N angular
//! sectors (optionally mirrored) and rasterises the result with tiny-skia.
//! Nothing here touches a window or a GPU.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`drawing`] | `Drawing`, `Repaint` |
//! | [`history`] | `History`, `UndoStep` (two-tier undo) |
//! | [`stroke`] | `Stroke`, `StrokeStyle`, `StrokeShape` |
//! | [`input`] | `CanvasInput` pointer adapter |
//! | [`render`] | `Renderer`, `RendererConfig`, `FrameKind` |
//! | [`cache`] | `RasterCache`, `CacheCursor` |
//! | [`sectors`] | `SectorTransforms` |
//! | [`settings`] | `Settings`, `DrawingDefaults`, `Limits` |
//!
//! # Quick start
//!
//! ```rust
//! use doily_core::{Drawing, Point, Renderer, Rgba};
//!
//! let mut drawing = Drawing::default();
//! drawing.set_pen_color(Rgba::RED);
//! drawing.start_stroke(Point::new(0.0, -50.0));
//! drawing.finish_stroke();
//!
//! let mut pixmap = doily_core::tiny_skia::Pixmap::new(200, 200).unwrap();
//! Renderer::default().render(&mut drawing, &mut pixmap.as_mut());
//! assert_eq!(pixmap.pixel(100, 50).unwrap().red(), 255);
//! ```

pub mod cache;
pub mod color;
pub mod drawing;
pub mod error;
pub mod geom;
pub mod history;
pub mod input;
pub mod render;
pub mod sectors;
pub mod settings;
pub mod stroke;

pub use cache::{CacheCursor, RasterCache};
pub use color::Rgba;
pub use drawing::{Drawing, Repaint};
pub use error::RenderError;
pub use geom::Point;
pub use history::{History, UndoStep};
pub use input::CanvasInput;
pub use render::{FrameKind, Renderer, RendererConfig};
pub use sectors::SectorTransforms;
pub use settings::{DrawingDefaults, Limits, Settings};
pub use stroke::{Stroke, StrokeShape, StrokeStyle};

/// Re-exported so downstream crates rasterise against the same version.
pub use tiny_skia;

//! Doily UI: the application window around `doily-core`.
//!
//! The canvas, the control strip and the gallery are all rasterised on the
//! CPU into one `tiny_skia::Pixmap` per frame, which the engine uploads and
//! presents. Widgets never mutate the drawing directly; they queue typed
//! [`Action`]s that the application applies after routing each event.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use doily_ui::Application;
//!
//! Application::new()
//!     .title("Digital Doily")
//!     .font(std::fs::read("DejaVuSans.ttf")?)
//!     .run()?;
//! ```

pub mod action;
pub mod app;
pub mod clipboard;
pub mod controls;
pub mod event;
pub mod gallery;
pub mod layout;
pub mod painter;
pub mod raster;
pub mod state;
pub mod theme;
pub mod widget;
pub mod widgets;

pub use action::{Action, ActionQueue};
pub use app::Application;
pub use state::DoilyState;

/// Everything needed to build and extend the controls.
pub mod prelude {
    pub use crate::action::{Action, ActionQueue};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::{Border, Painter};
    pub use crate::widget::{LayoutCtx, Widget};
    pub use crate::widgets::{Button, Checkbox, Palette, Slider, Stepper};

    pub use doily_core::{DrawingDefaults, Rgba};
    pub use doily_engine::coords::{Rect, Vec2};
    pub use doily_engine::text::FontId;
}

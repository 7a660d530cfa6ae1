use anyhow::Result;
use winit::dpi::LogicalSize;

use doily_core::tiny_skia::Pixmap;
use doily_core::DrawingDefaults;
use doily_engine::coords::Viewport;
use doily_engine::core::{App as EngineApp, AppControl, FrameCtx};
use doily_engine::device::GpuInit;
use doily_engine::input::InputEvent;
use doily_engine::render::{ClearColor, PixmapPresenter};
use doily_engine::text::{FontId, FontSystem};
use doily_engine::window::{Runtime, RuntimeConfig};

use crate::state::DoilyState;

// ── Application ───────────────────────────────────────────────────────────

/// Top-level application builder.
///
/// ```rust,ignore
/// Application::new()
///     .title("Digital Doily")
///     .font(load_font())
///     .defaults(DrawingDefaults::default().sector_count(8))
///     .run()?;
/// ```
pub struct Application {
    config: RuntimeConfig,
    gpu: GpuInit,
    font: Option<Vec<u8>>,
    defaults: DrawingDefaults,
}

impl Application {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            gpu: GpuInit::default(),
            font: None,
            defaults: DrawingDefaults::default(),
        }
    }

    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.config.title = t.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.config.initial_size = LogicalSize::new(width, height);
        self
    }

    /// UI font. Without one the controls still work but show no labels.
    pub fn font(mut self, data: Vec<u8>) -> Self {
        self.font = Some(data);
        self
    }

    pub fn defaults(mut self, defaults: DrawingDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn gpu(mut self, init: GpuInit) -> Self {
        self.gpu = init;
        self
    }

    /// Opens the window and runs the event loop until it closes.
    pub fn run(self) -> Result<()> {
        let Self { config, gpu, font, defaults } = self;
        let state = UiAppState::new(font.as_deref(), &defaults);
        Runtime::run(config, gpu, state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Implements `doily_engine::core::App`. User code never sees this type.
struct UiAppState {
    state: DoilyState,
    fonts: FontSystem,
    presenter: PixmapPresenter,
    frame: Option<Pixmap>,
    viewport: Viewport,
}

impl UiAppState {
    fn new(font: Option<&[u8]>, defaults: &DrawingDefaults) -> Self {
        let mut fonts = FontSystem::new();
        let font_id: Option<FontId> = font.and_then(|bytes| match fonts.load_font(bytes) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("{e}; controls will have no labels");
                None
            }
        });
        Self {
            state: DoilyState::new(defaults, font_id),
            fonts,
            presenter: PixmapPresenter::new(),
            frame: None,
            viewport: Viewport::default(),
        }
    }
}

impl EngineApp for UiAppState {
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        self.state.handle_input(event);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();
        if viewport != self.viewport {
            self.viewport = viewport;
            self.state.resize(viewport);
        }
        let Some((w, h)) = viewport.pixel_size() else {
            return AppControl::Continue;
        };

        if self.frame.as_ref().is_none_or(|f| (f.width(), f.height()) != (w, h)) {
            self.frame = Pixmap::new(w, h);
        }
        let Some(frame) = self.frame.as_mut() else {
            log::warn!("cannot allocate a {w}x{h} frame");
            return AppControl::Continue;
        };

        let kind = self.state.paint(frame, &self.fonts);
        log::trace!("canvas frame: {kind:?}");
        ctx.window.set_cursor(self.state.cursor_icon());

        let presenter = &mut self.presenter;
        let rgba = frame.data();
        ctx.render(ClearColor::BLACK, |rctx, target| {
            presenter.present(rctx, target, rgba, w, h);
        })
    }
}

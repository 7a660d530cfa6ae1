use doily_engine::coords::{Rect, Viewport};

/// Width of the gallery side panel.
pub const GALLERY_WIDTH: f32 = 220.0;
/// Height of the control strip under the canvas.
pub const CONTROLS_HEIGHT: f32 = 3.0 * 26.0 + 4.0 * 8.0;

/// Window regions: canvas top-left, control strip below it, gallery on the
/// right at full height.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AppLayout {
    pub canvas: Rect,
    pub controls: Rect,
    pub gallery: Rect,
}

impl AppLayout {
    pub fn new(viewport: Viewport) -> Self {
        let window = Rect::new(0.0, 0.0, viewport.width.max(0.0), viewport.height.max(0.0));
        let (main, gallery) = window.split_right(GALLERY_WIDTH);
        let (canvas, controls) = main.split_bottom(CONTROLS_HEIGHT);
        Self { canvas, controls, gallery }
    }

    /// Canvas size in whole pixels, `None` if it has no area.
    pub fn canvas_pixels(&self) -> Option<(u32, u32)> {
        Viewport::new(self.canvas.width(), self.canvas.height()).pixel_size()
    }
}

/// Left-to-right placement of fixed-height items inside a row.
pub(crate) struct RowCursor {
    x: f32,
    y: f32,
    height: f32,
    gap: f32,
}

impl RowCursor {
    pub(crate) fn new(x: f32, y: f32, height: f32, gap: f32) -> Self {
        Self { x, y, height, gap }
    }

    pub(crate) fn next(&mut self, width: f32) -> Rect {
        let r = Rect::new(self.x, self.y, width, self.height);
        self.x += width + self.gap;
        r
    }

    pub(crate) fn skip(&mut self, width: f32) {
        self.x += width;
    }
}

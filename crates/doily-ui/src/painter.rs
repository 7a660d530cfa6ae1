use doily_core::Rgba;
use doily_core::tiny_skia::{
    self, ColorU8, FillRule, Mask, Path, PathBuilder, PixmapMut, PixmapPaint, PixmapRef, Transform,
};
use doily_engine::coords::{Rect, Vec2};
use doily_engine::text::{FontId, FontSystem};

use crate::widget::LayoutCtx;

/// Outline drawn inside a filled shape's edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Rgba,
}

impl Border {
    pub const fn new(width: f32, color: Rgba) -> Self {
        Self { width, color }
    }
}

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Rasterises straight into the frame pixmap with tiny-skia and exposes the
/// pointer state so widgets can express hover / pressed visuals directly.
pub struct Painter<'a> {
    target: PixmapMut<'a>,
    fonts: &'a FontSystem,
    clip_stack: Vec<Rect>,
    clip_mask: Option<Mask>,
    /// Current pointer position in logical pixels.
    pub mouse_pos: Vec2,
    /// True while the primary button is held down.
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub fn new(target: PixmapMut<'a>, fonts: &'a FontSystem, mouse_pos: Vec2, mouse_pressed: bool) -> Self {
        Self { target, fonts, clip_stack: Vec::new(), clip_mask: None, mouse_pos, mouse_pressed }
    }

    // ── input queries ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_pos)
    }

    #[inline]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && rect.contains(self.mouse_pos)
    }

    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'_> {
        LayoutCtx { fonts: self.fonts }
    }

    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.fonts.measure_text(text, font, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let Some(r) = to_skia_rect(rect) else { return };
        let mut paint = color.paint();
        paint.anti_alias = false;
        self.target.fill_rect(r, &paint, Transform::identity(), self.clip_mask.as_ref());
    }

    /// Rounded rectangle with optional border. `radius = 0.0` gives sharp
    /// corners.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgba, border: Option<Border>) {
        let Some(path) = rounded_rect_path(rect, radius) else { return };
        self.fill_path(&path, color);
        if let Some(b) = border {
            let inner = rect.inset(b.width * 0.5);
            if let Some(edge) = rounded_rect_path(inner, (radius - b.width * 0.5).max(0.0)) {
                self.stroke_path(&edge, b.width, b.color);
            }
        }
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, border: Option<Border>) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else { return };
        self.fill_path(&path, color);
        if let Some(b) = border {
            if let Some(edge) = PathBuilder::from_circle(center.x, center.y, (radius - b.width * 0.5).max(0.1)) {
                self.stroke_path(&edge, b.width, b.color);
            }
        }
    }

    /// Rectangular outline of `width` drawn inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, color: Rgba) {
        if width <= 0.0 || rect.is_empty() {
            return;
        }
        let w = width.min(rect.width() * 0.5).min(rect.height() * 0.5);
        let (x, y, r, b) = (rect.x(), rect.y(), rect.right(), rect.bottom());
        self.fill_rect(Rect::new(x, y, rect.width(), w), color);
        self.fill_rect(Rect::new(x, b - w, rect.width(), w), color);
        self.fill_rect(Rect::new(x, y + w, w, rect.height() - 2.0 * w), color);
        self.fill_rect(Rect::new(r - w, y + w, w, rect.height() - 2.0 * w), color);
    }

    /// Single-line text with its top-left at `origin`.
    pub fn text(&mut self, text: &str, font: FontId, size: f32, color: Rgba, origin: Vec2) {
        for glyph in self.fonts.rasterize(text, font, size) {
            let Some(mut bitmap) = tiny_skia::Pixmap::new(glyph.width as u32, glyph.height as u32) else {
                continue;
            };
            for (px, &cov) in bitmap.pixels_mut().iter_mut().zip(&glyph.coverage) {
                let a = (u16::from(color.a) * u16::from(cov) / 255) as u8;
                *px = ColorU8::from_rgba(color.r, color.g, color.b, a).premultiply();
            }
            self.target.draw_pixmap(
                origin.x.round() as i32 + glyph.x,
                origin.y.round() as i32 + glyph.y,
                bitmap.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                self.clip_mask.as_ref(),
            );
        }
    }

    /// Text centred in `rect` on both axes.
    pub fn text_centered(&mut self, text: &str, font: FontId, size: f32, color: Rgba, rect: Rect) {
        let m = self.measure_text(text, font, size);
        let origin = Vec2::new(
            rect.x() + (rect.width() - m.x) * 0.5,
            rect.y() + (rect.height() - m.y) * 0.5,
        );
        self.text(text, font, size, color, origin);
    }

    /// Copies `pixmap` with its top-left at `origin`.
    pub fn draw_pixmap(&mut self, pixmap: PixmapRef<'_>, origin: Vec2) {
        self.target.draw_pixmap(
            origin.x.round() as i32,
            origin.y.round() as i32,
            pixmap,
            &PixmapPaint::default(),
            Transform::identity(),
            self.clip_mask.as_ref(),
        );
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begins a clip region, intersected with the current one. Must be paired
    /// with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        let clipped = match self.clip_stack.last() {
            Some(top) => top.intersect(rect).unwrap_or_default(),
            None => rect,
        };
        self.clip_stack.push(clipped);
        self.rebuild_mask();
    }

    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
        self.rebuild_mask();
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn fill_path(&mut self, path: &Path, color: Rgba) {
        self.target.fill_path(path, &color.paint(), FillRule::Winding, Transform::identity(), self.clip_mask.as_ref());
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: Rgba) {
        let stroke = tiny_skia::Stroke { width, ..Default::default() };
        self.target.stroke_path(path, &color.paint(), &stroke, Transform::identity(), self.clip_mask.as_ref());
    }

    fn rebuild_mask(&mut self) {
        self.clip_mask = self.clip_stack.last().and_then(|&rect| {
            let mut mask = Mask::new(self.target.width(), self.target.height())?;
            // empty clip: a blank mask hides everything
            if let Some(path) = to_skia_rect(rect).map(PathBuilder::from_rect) {
                mask.fill_path(&path, FillRule::Winding, false, Transform::identity());
            }
            Some(mask)
        });
    }
}

fn to_skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(rect.x(), rect.y(), rect.width(), rect.height())
}

fn rounded_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    if rect.is_empty() {
        return None;
    }
    let r = radius.min(rect.width() * 0.5).min(rect.height() * 0.5).max(0.0);
    if r == 0.0 {
        return to_skia_rect(rect).map(PathBuilder::from_rect);
    }
    let (x0, y0, x1, y1) = (rect.x(), rect.y(), rect.right(), rect.bottom());
    let mut pb = PathBuilder::new();
    pb.move_to(x0 + r, y0);
    pb.line_to(x1 - r, y0);
    pb.quad_to(x1, y0, x1, y0 + r);
    pb.line_to(x1, y1 - r);
    pb.quad_to(x1, y1, x1 - r, y1);
    pb.line_to(x0 + r, y1);
    pb.quad_to(x0, y1, x0, y1 - r);
    pb.line_to(x0, y0 + r);
    pb.quad_to(x0, y0, x0 + r, y0);
    pb.close();
    pb.finish()
}

//! Sector renderer.
//!
//! Each frame is composed bottom-up:
//!
//! 1. background fill
//! 2. sector guides (aliased hairlines, if visible)
//! 3. the [`RasterCache`] holding every finished stroke
//! 4. the unflushed tail of the live stroke, in every sector
//! 5. the cursor preview, once, in canvas space
//!
//! The cache is rebuilt from history only when the drawing asks for a
//! [`Repaint::Full`] or the target size changes. Otherwise finished strokes
//! are painted into it exactly once, and a long opaque live stroke has its
//! head flushed into it so per-frame work stays bounded. A flushed stroke is
//! painted in pieces that overlap at the join, so once it finishes the cache
//! is rebuilt and the stroke lands in it as a single path.

use log::{trace, warn};
use tiny_skia::{Color, PathBuilder, Pixmap, PixmapMut, PixmapPaint, Transform};

use crate::cache::{CacheCursor, RasterCache};
use crate::color::Rgba;
use crate::drawing::{Drawing, Repaint};
use crate::error::RenderError;
use crate::geom::{panel_center, Point};
use crate::sectors::SectorTransforms;
use crate::settings::{DrawingDefaults, Limits};
use crate::stroke::{StrokeShape, StrokeStyle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    pub background: Rgba,
    pub guide_color: Rgba,
    /// Unflushed live points allowed before the head goes into the cache.
    pub flush_threshold: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::from(&DrawingDefaults::default())
    }
}

impl From<&DrawingDefaults> for RendererConfig {
    fn from(d: &DrawingDefaults) -> Self {
        Self {
            background: d.background,
            guide_color: d.guide_color,
            flush_threshold: Limits::FLUSH_THRESHOLD,
        }
    }
}

/// What a call to [`Renderer::render`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Cache reused; only new geometry was painted into it.
    Incremental,
    /// Cache rebuilt from the whole history.
    Full,
    /// Nothing drawn (cache could not be allocated).
    Skipped,
}

#[derive(Debug, Default)]
pub struct Renderer {
    config: RendererConfig,
    cache: RasterCache,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config, cache: RasterCache::new() }
    }

    #[inline] pub fn config(&self) -> &RendererConfig { &self.config }
    #[inline] pub fn cache(&self) -> &RasterCache { &self.cache }

    /// Renders the on-screen frame into `target`, consuming the drawing's
    /// pending repaint request.
    pub fn render(&mut self, drawing: &mut Drawing, target: &mut PixmapMut<'_>) -> FrameKind {
        let (w, h) = (target.width(), target.height());
        let requested = drawing.take_repaint();

        let reallocated = match self.cache.ensure_size(w, h) {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping frame: {e}");
                drawing.invalidate();
                return FrameKind::Skipped;
            }
        };

        let sectors = sector_layout(w, h, drawing);
        let finished = drawing.finished_strokes().len();
        let cursor = self.cache.cursor();
        let full = reallocated
            || requested == Repaint::Full
            || cursor.strokes > finished
            || (cursor.points > 0 && cursor.strokes < finished);

        if full {
            self.rebuild(drawing, &sectors);
        } else {
            self.catch_up(drawing, &sectors);
        }
        self.flush_live(drawing, &sectors);

        paint_base(target, &self.config, drawing, &sectors);
        if let Some(cache) = self.cache.pixmap() {
            target.draw_pixmap(0, 0, cache, &PixmapPaint::default(), Transform::identity(), None);
        }
        if let Some(live) = drawing.live_stroke() {
            if let Some(tail) = unflushed(live.points(), self.cache.cursor().points) {
                paint_points(target, tail, live.style(), &sectors);
            }
        }
        if let Some(cursor) = drawing.cursor_preview() {
            if let Some(shape) = cursor.shape() {
                let c = sectors.center();
                shape.paint(target, &cursor.color().paint(), Transform::from_translate(c.x, c.y));
            }
        }

        let kind = if full { FrameKind::Full } else { FrameKind::Incremental };
        trace!("{kind:?} frame {w}x{h}, cache at {:?}", self.cache.cursor());
        kind
    }

    /// Renders every stroke straight into `target`, bypassing the cache.
    ///
    /// Used for snapshots: no cursor preview, and the live stroke (if any) is
    /// included in full.
    pub fn render_into(&self, drawing: &Drawing, target: &mut PixmapMut<'_>) {
        let sectors = sector_layout(target.width(), target.height(), drawing);
        paint_base(target, &self.config, drawing, &sectors);
        for stroke in drawing.strokes() {
            paint_points(target, stroke.points(), stroke.style(), &sectors);
        }
    }

    /// Full-resolution render of the drawing into a fresh pixmap.
    pub fn snapshot(&self, drawing: &Drawing, width: u32, height: u32) -> Result<Pixmap, RenderError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError { width, height })?;
        self.render_into(drawing, &mut pixmap.as_mut());
        Ok(pixmap)
    }

    fn rebuild(&mut self, drawing: &Drawing, sectors: &SectorTransforms) {
        self.cache.reset();
        let strokes = drawing.finished_strokes();
        if let Some(mut cache) = self.cache.pixmap_mut() {
            for stroke in strokes {
                paint_points(&mut cache, stroke.points(), stroke.style(), sectors);
            }
        }
        self.cache.set_cursor(CacheCursor { strokes: strokes.len(), points: 0 });
    }

    /// Paints strokes finished since the last frame. None of them were
    /// flushed; those go through `rebuild`.
    fn catch_up(&mut self, drawing: &Drawing, sectors: &SectorTransforms) {
        let cursor = self.cache.cursor();
        let strokes = drawing.finished_strokes();
        if cursor.strokes >= strokes.len() {
            return;
        }
        if let Some(mut cache) = self.cache.pixmap_mut() {
            for stroke in &strokes[cursor.strokes..] {
                paint_points(&mut cache, stroke.points(), stroke.style(), sectors);
            }
        }
        self.cache.set_cursor(CacheCursor { strokes: strokes.len(), points: 0 });
    }

    /// Bakes the head of a long live stroke into the cache.
    ///
    /// Translucent strokes stay live in full: the seam would be covered twice.
    fn flush_live(&mut self, drawing: &Drawing, sectors: &SectorTransforms) {
        let Some(live) = drawing.live_stroke() else { return };
        if !live.color().is_opaque() {
            return;
        }
        let cursor = self.cache.cursor();
        if live.len().saturating_sub(cursor.points) <= self.config.flush_threshold {
            return;
        }
        if let Some(mut cache) = self.cache.pixmap_mut() {
            if let Some(head) = unflushed(live.points(), cursor.points) {
                paint_points(&mut cache, head, live.style(), sectors);
            }
        }
        trace!("flushed live stroke up to point {}", live.len());
        self.cache.set_cursor(CacheCursor { strokes: cursor.strokes, points: live.len() });
    }
}

fn sector_layout(w: u32, h: u32, drawing: &Drawing) -> SectorTransforms {
    SectorTransforms::new(panel_center(w as f32, h as f32), drawing.settings().sector_count())
}

/// Points of a stroke not yet in the cache, starting at the last flushed
/// point so the painted path stays connected.
fn unflushed(points: &[Point], flushed: usize) -> Option<&[Point]> {
    match flushed {
        0 if !points.is_empty() => Some(points),
        0 => None,
        n if n >= points.len() => None,
        n => Some(&points[n - 1..]),
    }
}

fn paint_points(target: &mut PixmapMut<'_>, points: &[Point], style: StrokeStyle, sectors: &SectorTransforms) {
    let Some(shape) = StrokeShape::build(points, style.diameter) else { return };
    let paint = style.color.paint();
    for transform in sectors.placements(style.mirrored) {
        shape.paint(target, &paint, transform);
    }
}

fn paint_base(target: &mut PixmapMut<'_>, config: &RendererConfig, drawing: &Drawing, sectors: &SectorTransforms) {
    fill(target, config.background.to_skia());
    if drawing.settings().guides_visible() {
        let len = target.width().max(target.height()) as f32 * 0.5;
        paint_guides(target, sectors, config.guide_color, len);
    }
}

fn fill(target: &mut PixmapMut<'_>, color: Color) {
    let c = color.premultiply().to_color_u8();
    for px in target.pixels_mut() {
        *px = c;
    }
}

fn paint_guides(target: &mut PixmapMut<'_>, sectors: &SectorTransforms, color: Rgba, len: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(0.0, -len);
    let Some(path) = pb.finish() else { return };

    let mut paint = color.paint();
    paint.anti_alias = false;
    let stroke = tiny_skia::Stroke { width: 1.0, ..tiny_skia::Stroke::default() };
    for transform in sectors.rotations() {
        target.stroke_path(&path, &paint, &stroke, transform, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: (u8, u8, u8) = (255, 0, 0);
    const BLACK: (u8, u8, u8) = (0, 0, 0);
    const WHITE: (u8, u8, u8) = (255, 255, 255);

    fn rgb(p: &Pixmap, x: i64, y: i64) -> (u8, u8, u8) {
        let c = p.pixel(x as u32, y as u32).unwrap().demultiply();
        (c.red(), c.green(), c.blue())
    }

    /// Any pixel in the 3×3 block around (x, y) has colour `c`. Aliased
    /// hairlines may land on either side of a pixel boundary.
    fn near(p: &Pixmap, x: f32, y: f32, c: (u8, u8, u8)) -> bool {
        let (x, y) = (x.floor() as i64, y.floor() as i64);
        (-1..=1).any(|dy| (-1..=1).any(|dx| rgb(p, x + dx, y + dy) == c))
    }

    fn polar(cx: f32, cy: f32, r: f32, deg: f32) -> (f32, f32) {
        let t = deg.to_radians();
        (cx + r * t.sin(), cy - r * t.cos())
    }

    fn frame(renderer: &mut Renderer, d: &mut Drawing, w: u32, h: u32) -> (Pixmap, FrameKind) {
        let mut pixmap = Pixmap::new(w, h).unwrap();
        let kind = renderer.render(d, &mut pixmap.as_mut());
        (pixmap, kind)
    }

    fn red_pen(d: &mut Drawing) {
        d.set_pen_color(Rgba::RED);
        d.set_pen_diameter(5);
    }

    #[test]
    fn twelve_sectors_single_dot() {
        let mut d = Drawing::default();
        red_pen(&mut d);
        d.start_stroke(Point::new(0.0, -50.0));
        d.finish_stroke();

        let (p, _) = frame(&mut Renderer::default(), &mut d, 200, 200);
        for i in 0..12 {
            let (x, y) = polar(100.0, 100.0, 50.0, 30.0 * i as f32);
            assert_eq!(rgb(&p, x as i64, y as i64), RED, "dot {i} at ({x}, {y})");
            let (gx, gy) = polar(100.0, 100.0, 80.0, 30.0 * i as f32);
            assert!(near(&p, gx, gy, WHITE), "guide {i}");
        }
        // past the guides' reach
        assert_eq!(rgb(&p, 1, 198), BLACK);
        // between two dots on the same ring
        let (x, y) = polar(100.0, 100.0, 50.0, 15.0);
        assert_eq!(rgb(&p, x as i64, y as i64), BLACK);
    }

    #[test]
    fn empty_drawing_shows_guides_only() {
        let mut d = Drawing::default();
        let (p, _) = frame(&mut Renderer::default(), &mut d, 120, 80);
        let mut lit = 0;
        for px in p.pixels() {
            let c = px.demultiply();
            if (c.red(), c.green(), c.blue()) != BLACK {
                assert_eq!((c.red(), c.green(), c.blue()), WHITE);
                lit += 1;
            }
        }
        assert!(lit > 0);
    }

    #[test]
    fn hidden_guides_leave_background() {
        let mut d = Drawing::default();
        d.set_guides_visible(false);
        let (p, _) = frame(&mut Renderer::default(), &mut d, 50, 50);
        assert!(p.pixels().iter().all(|px| (px.red(), px.green(), px.blue()) == BLACK));
    }

    #[test]
    fn mirrored_stroke_is_symmetric() {
        let mut d = Drawing::default();
        red_pen(&mut d);
        d.set_sector_count(2);
        d.set_guides_visible(false);
        d.set_mirror(true);
        d.start_stroke(Point::new(30.0, -60.0));
        d.extend_stroke(Point::new(40.0, -70.0));
        d.finish_stroke();

        let (p, _) = frame(&mut Renderer::default(), &mut d, 200, 200);
        for (x, y) in [(135, 35), (65, 35), (65, 165), (135, 165)] {
            assert_eq!(rgb(&p, x, y), RED, "({x}, {y})");
        }
        for y in 0..200 {
            for x in 0..200 {
                if rgb(&p, x, y) == RED {
                    assert!(rgb(&p, 199 - x, y).0 >= 128, "mirror of ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn unmirrored_stroke_has_no_reflection() {
        let mut d = Drawing::default();
        red_pen(&mut d);
        d.set_sector_count(2);
        d.set_guides_visible(false);
        d.start_stroke(Point::new(30.0, -60.0));
        d.extend_stroke(Point::new(40.0, -70.0));
        d.finish_stroke();

        let (p, _) = frame(&mut Renderer::default(), &mut d, 200, 200);
        assert_eq!(rgb(&p, 135, 35), RED);
        assert_eq!(rgb(&p, 65, 35), BLACK);
    }

    #[test]
    fn full_renders_are_deterministic() {
        let mut d = Drawing::default();
        d.set_mirror(true);
        d.start_stroke(Point::new(-20.0, -40.0));
        d.extend_stroke(Point::new(15.0, -70.0));
        d.extend_stroke(Point::new(33.0, -12.0));
        d.finish_stroke();
        red_pen(&mut d);
        d.start_stroke(Point::new(5.0, 5.0));

        let r = Renderer::default();
        let a = r.snapshot(&d, 160, 120).unwrap();
        let b = r.snapshot(&d, 160, 120).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn resize_recentres_drawing() {
        let mut d = Drawing::default();
        red_pen(&mut d);
        d.start_stroke(Point::new(0.0, -50.0));
        d.finish_stroke();

        let mut r = Renderer::default();
        let (small, _) = frame(&mut r, &mut d, 200, 200);
        assert_eq!(rgb(&small, 100, 50), RED);

        let (large, kind) = frame(&mut r, &mut d, 300, 300);
        assert_eq!(kind, FrameKind::Full);
        assert_eq!(rgb(&large, 150, 100), RED);
        assert_ne!(rgb(&large, 100, 50), RED);
    }

    #[test]
    fn undo_removes_stroke_from_next_frame() {
        let mut d = Drawing::default();
        red_pen(&mut d);
        d.set_guides_visible(false);
        d.start_stroke(Point::new(0.0, -50.0));
        d.finish_stroke();

        let mut r = Renderer::default();
        let (before, _) = frame(&mut r, &mut d, 200, 200);
        assert_eq!(rgb(&before, 100, 50), RED);

        d.undo();
        let (after, kind) = frame(&mut r, &mut d, 200, 200);
        assert_eq!(kind, FrameKind::Full);
        assert_eq!(rgb(&after, 100, 50), BLACK);
    }

    #[test]
    fn finished_strokes_land_in_cache_incrementally() {
        let mut d = Drawing::default();
        let mut r = Renderer::default();
        assert_eq!(frame(&mut r, &mut d, 100, 100).1, FrameKind::Full);

        d.start_stroke(Point::new(0.0, -20.0));
        assert_eq!(frame(&mut r, &mut d, 100, 100).1, FrameKind::Incremental);
        assert_eq!(r.cache().cursor(), CacheCursor { strokes: 0, points: 0 });

        d.finish_stroke();
        assert_eq!(frame(&mut r, &mut d, 100, 100).1, FrameKind::Incremental);
        assert_eq!(r.cache().cursor(), CacheCursor { strokes: 1, points: 0 });
    }

    #[test]
    fn long_live_stroke_is_flushed() {
        let mut d = Drawing::default();
        red_pen(&mut d);
        d.set_guides_visible(false);
        let mut r = Renderer::new(RendererConfig { flush_threshold: 8, ..RendererConfig::default() });

        d.start_stroke(Point::new(0.0, -10.0));
        for k in 1..=20 {
            d.extend_stroke(Point::new(0.0, -10.0 - 2.0 * k as f32));
            frame(&mut r, &mut d, 200, 200);
        }
        let cursor = r.cache().cursor();
        assert_eq!(cursor.strokes, 0);
        assert!(cursor.points > 8);

        let cache = r.cache().pixmap().unwrap();
        assert_eq!(cache.pixel(100, 85).unwrap().alpha(), 255);

        d.extend_stroke(Point::new(0.0, -60.0));
        let (p, _) = frame(&mut r, &mut d, 200, 200);
        assert_eq!(rgb(&p, 100, 85), RED);
        assert_eq!(rgb(&p, 100, 55), RED);

        d.finish_stroke();
        let (_, kind) = frame(&mut r, &mut d, 200, 200);
        assert_eq!(kind, FrameKind::Full);
        assert_eq!(r.cache().cursor(), CacheCursor { strokes: 1, points: 0 });
    }

    #[test]
    fn translucent_live_stroke_stays_out_of_cache() {
        let mut d = Drawing::default();
        d.set_pen_color(Rgba::RED.with_alpha(128));
        d.set_guides_visible(false);
        let mut r = Renderer::new(RendererConfig { flush_threshold: 8, ..RendererConfig::default() });

        d.start_stroke(Point::new(0.0, -10.0));
        for k in 1..=20 {
            d.extend_stroke(Point::new(0.0, -10.0 - 2.0 * k as f32));
            frame(&mut r, &mut d, 200, 200);
        }
        assert_eq!(r.cache().cursor(), CacheCursor { strokes: 0, points: 0 });
        assert_eq!(r.cache().pixmap().unwrap().pixel(100, 70).unwrap().alpha(), 0);

        let (p, _) = frame(&mut r, &mut d, 200, 200);
        let s = r.snapshot(&d, 200, 200).unwrap();
        assert_eq!(p.data(), s.data());
    }

    /// Drags `points` as one stroke, rendering a frame after every event.
    fn drag(r: &mut Renderer, d: &mut Drawing, points: &[Point]) {
        d.start_stroke(points[0]);
        frame(r, d, 240, 240);
        for p in &points[1..] {
            d.extend_stroke(*p);
            frame(r, d, 240, 240);
        }
        d.finish_stroke();
        frame(r, d, 240, 240);
    }

    #[test]
    fn cached_frames_match_snapshot() {
        let mut d = Drawing::default();
        d.set_sector_count(6);
        d.set_pen_diameter(6);
        let mut r = Renderer::new(RendererConfig { flush_threshold: 8, ..RendererConfig::default() });

        // long opaque, flushed several times while live
        d.set_pen_color(Rgba::RED);
        let long: Vec<Point> = (0..=30).map(|i| Point::new(10.0, -20.0 - i as f32)).collect();
        drag(&mut r, &mut d, &long);

        // long translucent, kept live in full
        d.set_pen_color(Rgba::RED.with_alpha(128));
        let long: Vec<Point> = (0..=30).map(|i| Point::new(10.0, -60.0 - i as f32)).collect();
        drag(&mut r, &mut d, &long);

        // short ones, painted straight into the cache on release
        d.set_pen_color(Rgba::WHITE);
        drag(&mut r, &mut d, &[Point::new(0.0, -105.0)]);
        d.set_pen_color(Rgba::opaque(0, 128, 255).with_alpha(128));
        drag(&mut r, &mut d, &[Point::new(-52.0, -90.0), Point::new(-50.0, -92.0), Point::new(-48.0, -95.0)]);

        assert_eq!(d.strokes().len(), 4);
        let (p, kind) = frame(&mut r, &mut d, 240, 240);
        assert_eq!(kind, FrameKind::Incremental);
        let s = r.snapshot(&d, 240, 240).unwrap();
        assert_eq!(p.data(), s.data());
    }

    #[test]
    fn cursor_preview_is_drawn_once_and_not_cached() {
        let mut d = Drawing::default();
        red_pen(&mut d);
        d.set_guides_visible(false);
        d.set_sector_count(4);
        d.set_cursor_preview(Point::new(0.0, -50.0));

        let mut r = Renderer::default();
        let (p, _) = frame(&mut r, &mut d, 200, 200);
        assert_eq!(rgb(&p, 100, 50), RED);
        assert_eq!(rgb(&p, 150, 100), BLACK);
        assert_eq!(r.cache().pixmap().unwrap().pixel(100, 50).unwrap().alpha(), 0);
    }

    #[test]
    fn snapshot_excludes_cursor_and_includes_live() {
        let mut d = Drawing::default();
        red_pen(&mut d);
        d.set_guides_visible(false);
        d.set_cursor_preview(Point::new(0.0, 40.0));
        d.start_stroke(Point::new(0.0, -50.0));

        let p = Renderer::default().snapshot(&d, 200, 200).unwrap();
        assert_eq!(rgb(&p, 100, 50), RED);
        assert_eq!(rgb(&p, 100, 140), BLACK);
    }

    #[test]
    fn zero_sized_snapshot_is_an_error() {
        let d = Drawing::default();
        let err = Renderer::default().snapshot(&d, 0, 100).unwrap_err();
        assert_eq!(err, RenderError { width: 0, height: 100 });
    }

    #[test]
    fn unflushed_restarts_at_last_flushed_point() {
        let pts: Vec<Point> = (0..5).map(|i| Point::new(i as f32, 0.0)).collect();
        assert_eq!(unflushed(&pts, 0).unwrap().len(), 5);
        assert_eq!(unflushed(&pts, 3).unwrap()[0], Point::new(2.0, 0.0));
        assert!(unflushed(&pts, 5).is_none());
        assert!(unflushed(&[], 0).is_none());
    }
}

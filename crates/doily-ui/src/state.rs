//! Application state shared by the event and frame callbacks.
//!
//! Everything here is headless: it consumes engine `InputEvent`s and paints
//! into a `tiny_skia::Pixmap`, so the whole interaction loop can be driven
//! from tests.

use std::cell::Cell;
use std::rc::Rc;

use doily_core::tiny_skia::{Pixmap, PixmapRef};
use doily_core::{CanvasInput, Drawing, DrawingDefaults, FrameKind, Limits, RenderError, Renderer, RendererConfig};
use doily_engine::coords::{Vec2, Viewport};
use doily_engine::input::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent};
use doily_engine::text::{FontId, FontSystem};
use doily_engine::window::CursorIcon;
use log::{debug, warn};

use crate::action::{Action, ActionQueue};
use crate::clipboard;
use crate::controls::ControlPanel;
use crate::event::UiEvent;
use crate::gallery::Gallery;
use crate::layout::AppLayout;
use crate::painter::Painter;
use crate::raster;
use crate::theme;
use crate::widget::{LayoutCtx, Widget};

/// Pointer travel below which a press and release count as a click.
const CLICK_SLOP: f32 = 4.0;

/// Maps a key press to its shortcut, if any.
pub fn shortcut(key: Key, modifiers: Modifiers) -> Option<Action> {
    match key {
        Key::Char('z') if modifiers.command() => Some(Action::Undo),
        Key::Char('c') if modifiers.command() => Some(Action::CopyToClipboard),
        Key::Delete => Some(Action::Clear),
        _ => None,
    }
}

pub struct DoilyState {
    drawing: Drawing,
    renderer: Renderer,
    canvas_input: CanvasInput,
    controls: ControlPanel,
    gallery: Gallery,
    actions: ActionQueue,
    undo_available: Rc<Cell<bool>>,

    layout: AppLayout,
    canvas: Option<Pixmap>,
    pointer: Vec2,
    /// Where a press outside the canvas began.
    ui_press: Option<Vec2>,
}

impl DoilyState {
    pub fn new(defaults: &DrawingDefaults, font: Option<FontId>) -> Self {
        let mut drawing = Drawing::new(defaults);
        let undo_available = Rc::new(Cell::new(false));
        let flag = Rc::clone(&undo_available);
        drawing.set_undo_observer(move |available| flag.set(available));

        let mut state = Self {
            drawing,
            renderer: Renderer::new(RendererConfig::from(defaults)),
            canvas_input: CanvasInput::new(0.0, 0.0),
            controls: ControlPanel::new(font),
            gallery: Gallery::new(Limits::GALLERY_CAPACITY).font(font),
            actions: ActionQueue::new(),
            undo_available,
            layout: AppLayout::default(),
            canvas: None,
            pointer: Vec2::zero(),
            ui_press: None,
        };
        state.sync_controls();
        state
    }

    #[inline] pub fn drawing(&self) -> &Drawing { &self.drawing }
    #[inline] pub fn gallery(&self) -> &Gallery { &self.gallery }
    #[inline] pub fn controls(&self) -> &ControlPanel { &self.controls }
    #[inline] pub fn layout(&self) -> &AppLayout { &self.layout }

    pub fn resize(&mut self, viewport: Viewport) {
        self.layout = AppLayout::new(viewport);
        let (w, h) = self.layout.canvas_pixels().unwrap_or((0, 0));
        self.canvas_input.resize(w as f32, h as f32);
        debug!("layout for {}x{}: canvas {w}x{h}", viewport.width, viewport.height);
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        if self.canvas_input.is_pressed() || self.layout.canvas.contains(self.pointer) {
            CursorIcon::Crosshair
        } else {
            CursorIcon::Default
        }
    }

    // ── input ─────────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerMoved { x, y } => self.pointer_moved(Vec2::new(x, y)),
            InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y, .. }) => {
                let pos = Vec2::new(x, y);
                self.pointer = pos;
                match state {
                    MouseButtonState::Pressed => self.pointer_pressed(pos),
                    MouseButtonState::Released => self.pointer_released(pos),
                }
            }
            InputEvent::MouseWheel { delta, .. } => {
                let ev = UiEvent::ScrollWheel { pos: self.pointer, delta: delta.pixels_y() };
                self.dispatch(&ev);
            }
            InputEvent::PointerLeft => self.canvas_input.exit(&mut self.drawing),
            InputEvent::Focused(false) => {
                let (x, y) = self.canvas_local(self.pointer);
                self.canvas_input.release(&mut self.drawing, x, y);
                self.ui_press = None;
            }
            InputEvent::Key { key, state: KeyState::Pressed, modifiers, .. } => {
                if let Some(action) = shortcut(key, modifiers) {
                    self.actions.push(action);
                }
            }
            _ => {}
        }
        self.apply_actions();
    }

    fn canvas_local(&self, pos: Vec2) -> (f32, f32) {
        let local = pos - self.layout.canvas.origin;
        (local.x, local.y)
    }

    fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
        let (x, y) = self.canvas_local(pos);
        if self.canvas_input.is_pressed() {
            self.canvas_input.drag(&mut self.drawing, x, y);
        } else {
            self.canvas_input.hover(&mut self.drawing, x, y);
        }
        if let Some(start) = self.ui_press {
            self.dispatch(&UiEvent::Drag { pos, start });
        }
    }

    fn pointer_pressed(&mut self, pos: Vec2) {
        let (x, y) = self.canvas_local(pos);
        if !self.canvas_input.press(&mut self.drawing, x, y) {
            self.ui_press = Some(pos);
        }
    }

    fn pointer_released(&mut self, pos: Vec2) {
        let (x, y) = self.canvas_local(pos);
        self.canvas_input.release(&mut self.drawing, x, y);
        if let Some(start) = self.ui_press.take() {
            self.dispatch(&UiEvent::DragEnd { pos, start });
            let moved = pos - start;
            if moved.x.abs() <= CLICK_SLOP && moved.y.abs() <= CLICK_SLOP {
                self.dispatch(&UiEvent::Click { pos });
            }
        }
    }

    fn dispatch(&mut self, event: &UiEvent) {
        if self.controls.on_event(event, &mut self.actions).is_consumed() {
            return;
        }
        self.gallery.on_event(event, self.layout.gallery, &mut self.actions);
    }

    // ── actions ───────────────────────────────────────────────────────────

    /// Queues `action` and applies everything pending.
    pub fn perform(&mut self, action: Action) {
        self.actions.push(action);
        self.apply_actions();
    }

    fn apply_actions(&mut self) {
        if self.actions.is_empty() {
            return;
        }
        let pending: Vec<Action> = self.actions.drain().collect();
        for action in pending {
            self.apply(action);
        }
        self.sync_controls();
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Undo => self.drawing.undo(),
            Action::Clear => self.drawing.clear(),
            Action::SetSectors(n) => self.drawing.set_sector_count(n),
            Action::SetDiameter(d) => self.drawing.set_pen_diameter(d),
            Action::SetColor(c) => self.drawing.set_pen_color(c),
            Action::SetTranslucent(on) => {
                let alpha = if on { theme::TRANSLUCENT_ALPHA } else { 255 };
                let pen = self.drawing.settings().pen_color();
                self.drawing.set_pen_color(pen.with_alpha(alpha));
            }
            Action::SetMirror(on) => self.drawing.set_mirror(on),
            Action::SetGuides(on) => self.drawing.set_guides_visible(on),
            Action::SaveToGallery => self.save_to_gallery(),
            Action::RemoveSelected => {
                if self.gallery.remove_selected().is_some() {
                    debug!("removed thumbnail, {} left", self.gallery.len());
                }
            }
            Action::SelectThumbnail(i) => {
                self.gallery.select(i);
            }
            Action::CopyToClipboard => self.copy_to_clipboard(),
        }
    }

    fn sync_controls(&mut self) {
        let full = self.gallery.is_full();
        self.controls.sync(self.drawing.settings(), self.undo_available.get(), full);
    }

    /// Full-resolution render of the current drawing at canvas size.
    pub fn snapshot(&self) -> Result<Pixmap, RenderError> {
        let (w, h) = self.layout.canvas_pixels().unwrap_or((0, 0));
        self.renderer.snapshot(&self.drawing, w, h)
    }

    fn save_to_gallery(&mut self) {
        if self.gallery.is_full() {
            warn!("gallery is full ({} images)", self.gallery.capacity());
            return;
        }
        let snapshot = match self.snapshot() {
            Ok(p) => p,
            Err(e) => {
                warn!("cannot save to gallery: {e}");
                return;
            }
        };
        let width = Gallery::thumbnail_width(self.layout.gallery.width());
        match raster::scale_to_width(snapshot.as_ref(), width) {
            Some(thumb) => {
                self.gallery.push(thumb);
                debug!("saved thumbnail {}/{}", self.gallery.len(), self.gallery.capacity());
            }
            None => warn!("cannot scale snapshot to {width}px"),
        }
    }

    fn copy_to_clipboard(&self) {
        match self.snapshot() {
            Ok(p) => {
                if let Err(e) = clipboard::copy_image(p.as_ref()) {
                    warn!("clipboard unavailable: {e}");
                }
            }
            Err(e) => warn!("cannot copy drawing: {e}"),
        }
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Renders the canvas and paints the whole window into `frame`.
    pub fn paint(&mut self, frame: &mut Pixmap, fonts: &FontSystem) -> FrameKind {
        frame.fill(theme::PANEL_BG.to_skia());
        let kind = self.render_canvas();

        self.controls.arrange(self.layout.controls, &LayoutCtx { fonts });

        let mut painter = Painter::new(frame.as_mut(), fonts, self.pointer, self.ui_press.is_some());
        if let Some(canvas) = self.canvas_pixmap() {
            painter.draw_pixmap(canvas, self.layout.canvas.origin);
        }
        self.controls.paint(&mut painter, self.layout.controls);
        self.gallery.paint(&mut painter, self.layout.gallery);
        kind
    }

    fn render_canvas(&mut self) -> FrameKind {
        let Some((w, h)) = self.layout.canvas_pixels() else {
            return FrameKind::Skipped;
        };
        let stale = self.canvas.as_ref().is_none_or(|p| (p.width(), p.height()) != (w, h));
        if stale {
            self.canvas = Pixmap::new(w, h);
        }
        match self.canvas.as_mut() {
            Some(canvas) => self.renderer.render(&mut self.drawing, &mut canvas.as_mut()),
            None => FrameKind::Skipped,
        }
    }

    fn canvas_pixmap(&self) -> Option<PixmapRef<'_>> {
        self.canvas.as_ref().map(Pixmap::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doily_core::Rgba;

    fn state() -> DoilyState {
        let mut s = DoilyState::new(&DrawingDefaults::default(), None);
        s.resize(Viewport::new(800.0, 600.0));
        let mut frame = Pixmap::new(800, 600).unwrap();
        s.paint(&mut frame, &FontSystem::new());
        s
    }

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn click(s: &mut DoilyState, pos: Vec2) {
        s.handle_input(&button(MouseButtonState::Pressed, pos.x, pos.y));
        s.handle_input(&button(MouseButtonState::Released, pos.x, pos.y));
    }

    fn stroke(s: &mut DoilyState) {
        s.handle_input(&button(MouseButtonState::Pressed, 100.0, 100.0));
        s.handle_input(&InputEvent::PointerMoved { x: 120.0, y: 110.0 });
        s.handle_input(&button(MouseButtonState::Released, 120.0, 110.0));
    }

    fn ctrl() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers { meta: true, ..Modifiers::default() }
        } else {
            Modifiers { ctrl: true, ..Modifiers::default() }
        }
    }

    #[test]
    fn shortcuts() {
        assert_eq!(shortcut(Key::Char('z'), ctrl()), Some(Action::Undo));
        assert_eq!(shortcut(Key::Char('z'), Modifiers::default()), None);
        assert_eq!(shortcut(Key::Delete, Modifiers::default()), Some(Action::Clear));
        assert_eq!(shortcut(Key::Char('c'), ctrl()), Some(Action::CopyToClipboard));
    }

    #[test]
    fn canvas_drag_records_one_stroke_and_enables_undo() {
        let mut s = state();
        assert!(!s.controls().undo_enabled());
        stroke(&mut s);
        assert_eq!(s.drawing().strokes().len(), 1);
        assert_eq!(s.drawing().strokes()[0].len(), 2);
        assert!(!s.drawing().is_stroke_live());
        assert!(s.controls().undo_enabled());
    }

    #[test]
    fn press_outside_canvas_draws_nothing() {
        let mut s = state();
        s.handle_input(&button(MouseButtonState::Pressed, 700.0, 100.0));
        s.handle_input(&InputEvent::PointerMoved { x: 100.0, y: 100.0 });
        assert!(s.drawing().strokes().is_empty());
    }

    #[test]
    fn keyboard_undo_and_clear() {
        let mut s = state();
        stroke(&mut s);
        stroke(&mut s);
        let key = |key, modifiers| InputEvent::Key { key, state: KeyState::Pressed, modifiers, repeat: false };
        s.handle_input(&key(Key::Delete, Modifiers::default()));
        assert!(s.drawing().strokes().is_empty());
        s.handle_input(&key(Key::Char('z'), ctrl()));
        assert_eq!(s.drawing().strokes().len(), 2);
    }

    #[test]
    fn undo_button_disables_when_exhausted() {
        let mut s = state();
        stroke(&mut s);
        s.perform(Action::Undo);
        assert!(!s.controls().undo_enabled());
    }

    #[test]
    fn save_fills_gallery_and_disables_save() {
        let mut s = state();
        stroke(&mut s);
        for _ in 0..Limits::GALLERY_CAPACITY + 2 {
            s.perform(Action::SaveToGallery);
        }
        assert_eq!(s.gallery().len(), Limits::GALLERY_CAPACITY);
        assert!(!s.controls().save_enabled());
        let thumb = &s.gallery().thumbnails()[0];
        assert_eq!(thumb.width(), 200);
        let canvas = s.layout().canvas;
        assert_eq!(thumb.height(), (200.0 * canvas.height() / canvas.width()) as u32);

        s.perform(Action::SelectThumbnail(3));
        s.perform(Action::RemoveSelected);
        assert_eq!(s.gallery().len(), Limits::GALLERY_CAPACITY - 1);
        assert!(s.controls().save_enabled());
    }

    #[test]
    fn clicking_clear_button_clears() {
        let mut s = state();
        stroke(&mut s);
        let clear = s.controls.slot(1).center();
        click(&mut s, clear);
        assert!(s.drawing().strokes().is_empty());
        assert!(s.controls().undo_enabled());
    }

    #[test]
    fn translucent_toggle_keeps_hue() {
        let mut s = state();
        s.perform(Action::SetColor(Rgba::RED));
        s.perform(Action::SetTranslucent(true));
        assert_eq!(s.drawing().settings().pen_color(), Rgba::RED.with_alpha(theme::TRANSLUCENT_ALPHA));
        s.perform(Action::SetTranslucent(false));
        assert_eq!(s.drawing().settings().pen_color(), Rgba::RED);
    }

    #[test]
    fn paint_shows_canvas_background_and_stroke() {
        let mut s = state();
        s.perform(Action::SetColor(Rgba::RED));
        s.perform(Action::SetDiameter(12));
        s.perform(Action::SetGuides(false));
        let canvas = s.layout().canvas;
        let c = canvas.center();
        s.handle_input(&button(MouseButtonState::Pressed, c.x, c.y - 40.0));
        s.handle_input(&button(MouseButtonState::Released, c.x, c.y - 40.0));

        let mut frame = Pixmap::new(800, 600).unwrap();
        s.paint(&mut frame, &FontSystem::new());
        let at = |x: f32, y: f32| frame.pixel(x as u32, y as u32).unwrap().demultiply();
        let dot = at(c.x, c.y - 40.0);
        assert_eq!((dot.red(), dot.green(), dot.blue()), (255, 0, 0));
        let corner = at(canvas.x() + 2.0, canvas.y() + 2.0);
        assert_eq!((corner.red(), corner.green(), corner.blue()), (0, 0, 0));
    }

    #[test]
    fn leaving_window_clears_preview() {
        let mut s = state();
        s.handle_input(&InputEvent::PointerMoved { x: 100.0, y: 100.0 });
        assert!(s.drawing().cursor_preview().is_some());
        assert_eq!(s.cursor_icon(), CursorIcon::Crosshair);
        s.handle_input(&InputEvent::PointerLeft);
        assert!(s.drawing().cursor_preview().is_none());
    }
}

//! The drawing model: stroke history, live input state and settings.

use log::debug;

use crate::color::Rgba;
use crate::geom::Point;
use crate::history::History;
use crate::settings::{DrawingDefaults, Settings};
use crate::stroke::{Stroke, StrokeStyle};

/// Kind of repaint the model is waiting for.
///
/// Requests merge towards the most expensive one: a pending `Full` is never
/// downgraded by a later `Incremental`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Repaint {
    #[default]
    None,
    /// Cache is still valid; only overlays changed.
    Incremental,
    /// Cache must be rebuilt from history.
    Full,
}

type UndoObserver = Box<dyn FnMut(bool)>;

/// A radial drawing.
///
/// Owns the stroke history and the settings applied to new strokes. All
/// coordinates are canvas space (origin at the panel centre). The renderer
/// reads the model and consumes its pending [`Repaint`].
pub struct Drawing {
    history: History,
    /// The top of `history` is still being extended by a drag.
    live: bool,
    cursor: Option<Stroke>,
    settings: Settings,
    repaint: Repaint,
    undo_observer: Option<UndoObserver>,
}

impl Drawing {
    pub fn new(defaults: &DrawingDefaults) -> Self {
        Self {
            history: History::new(),
            live: false,
            cursor: None,
            settings: Settings::from_defaults(defaults),
            repaint: Repaint::Full,
            undo_observer: None,
        }
    }

    // ── observers ─────────────────────────────────────────────────────────

    /// Registers the undo-availability callback and immediately reports the
    /// current state to it.
    pub fn set_undo_observer(&mut self, mut observer: impl FnMut(bool) + 'static) {
        observer(self.can_undo());
        self.undo_observer = Some(Box::new(observer));
    }

    fn notify_undo(&mut self) {
        let available = self.can_undo();
        if let Some(observer) = self.undo_observer.as_mut() {
            observer(available);
        }
    }

    fn request(&mut self, r: Repaint) {
        self.repaint = self.repaint.max(r);
    }

    // ── stroke input ──────────────────────────────────────────────────────

    /// Starts a new stroke with the current pen settings. Any stroke still
    /// live is finished first.
    pub fn start_stroke(&mut self, at: Point) {
        self.finish_stroke();
        let style = StrokeStyle {
            diameter: self.settings.pen_diameter(),
            color: self.settings.pen_color(),
            mirrored: self.settings.mirror(),
        };
        self.history.push(Stroke::new(at, style));
        self.live = true;
        self.notify_undo();
        self.request(Repaint::Incremental);
    }

    /// Appends to the live stroke. No-op when nothing is live.
    pub fn extend_stroke(&mut self, to: Point) {
        if !self.live {
            return;
        }
        if let Some(stroke) = self.history.last_mut() {
            stroke.push(to);
            self.request(Repaint::Incremental);
        }
    }

    /// Ends the live stroke; it becomes an ordinary history entry.
    pub fn finish_stroke(&mut self) {
        if self.live {
            self.live = false;
            self.request(Repaint::Incremental);
        }
    }

    pub fn set_cursor_preview(&mut self, at: Point) {
        let style = StrokeStyle {
            diameter: self.settings.pen_diameter(),
            color: self.settings.pen_color(),
            mirrored: false,
        };
        self.cursor = Some(Stroke::new(at, style));
        self.request(Repaint::Incremental);
    }

    pub fn clear_cursor_preview(&mut self) {
        if self.cursor.take().is_some() {
            self.request(Repaint::Incremental);
        }
    }

    // ── settings ──────────────────────────────────────────────────────────

    pub fn set_sector_count(&mut self, n: u32) {
        if self.settings.set_sector_count(n) {
            debug!("sector count -> {}", self.settings.sector_count());
        }
        self.request(Repaint::Full);
    }

    pub fn set_guides_visible(&mut self, on: bool) {
        self.settings.set_guides_visible(on);
        self.request(Repaint::Full);
    }

    pub fn set_mirror(&mut self, on: bool) {
        self.settings.set_mirror(on);
    }

    pub fn set_pen_diameter(&mut self, d: u32) {
        self.settings.set_pen_diameter(d);
    }

    pub fn set_pen_color(&mut self, c: Rgba) {
        self.settings.set_pen_color(c);
    }

    // ── history ───────────────────────────────────────────────────────────

    /// Moves the visible drawing onto the cleared stack. No-op when empty.
    pub fn clear(&mut self) {
        self.live = false;
        if self.history.clear() {
            debug!("cleared drawing ({} generations stored)", self.history.cleared().len());
            self.request(Repaint::Full);
            self.notify_undo();
        }
    }

    pub fn undo(&mut self) {
        self.live = false;
        let step = self.history.undo();
        debug!("undo: {step:?}, {} strokes visible", self.history.len());
        self.request(Repaint::Full);
        self.notify_undo();
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline] pub fn can_undo(&self) -> bool { self.history.can_undo() }
    #[inline] pub fn settings(&self) -> &Settings { &self.settings }
    #[inline] pub fn history(&self) -> &History { &self.history }
    #[inline] pub fn strokes(&self) -> &[Stroke] { self.history.strokes() }
    #[inline] pub fn cursor_preview(&self) -> Option<&Stroke> { self.cursor.as_ref() }
    #[inline] pub fn pending_repaint(&self) -> Repaint { self.repaint }
    #[inline] pub fn is_stroke_live(&self) -> bool { self.live }

    /// The stroke currently being dragged, if any.
    pub fn live_stroke(&self) -> Option<&Stroke> {
        if self.live { self.history.strokes().last() } else { None }
    }

    /// Strokes that can no longer change.
    pub fn finished_strokes(&self) -> &[Stroke] {
        let all = self.history.strokes();
        if self.live { &all[..all.len() - 1] } else { all }
    }

    /// Returns the pending repaint and resets it.
    pub fn take_repaint(&mut self) -> Repaint {
        std::mem::take(&mut self.repaint)
    }

    /// Forces a full repaint on the next frame (resize, cache loss).
    pub fn invalidate(&mut self) {
        self.request(Repaint::Full);
    }
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new(&DrawingDefaults::default())
    }
}

impl std::fmt::Debug for Drawing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Drawing")
            .field("strokes", &self.history.len())
            .field("cleared", &self.history.cleared().len())
            .field("live", &self.live)
            .field("settings", &self.settings)
            .field("repaint", &self.repaint)
            .finish_non_exhaustive()
    }
}

use doily_engine::coords::{Rect, Vec2};
use doily_engine::text::FontId;

use crate::action::{Action, ActionQueue};
use crate::event::{EventResult, UiEvent};
use crate::painter::{Border, Painter};
use crate::theme;
use crate::widget::{LayoutCtx, Widget};

const LABEL_WIDTH: f32 = 64.0;
const TRACK_HEIGHT: f32 = 4.0;
const THUMB_RADIUS: f32 = 7.0;

/// Horizontal integer slider with a caption showing the current value.
///
/// Dragging or clicking the track moves the thumb; every change to the
/// integer value emits `on_change(value)`.
pub struct Slider {
    caption: String,
    font: Option<FontId>,
    value: u32,
    min: u32,
    max: u32,
    track_width: f32,
    on_change: fn(u32) -> Action,
}

impl Slider {
    pub fn new(caption: impl Into<String>, min: u32, max: u32, on_change: fn(u32) -> Action) -> Self {
        let (min, max) = (min.min(max), min.max(max));
        Self { caption: caption.into(), font: None, value: min, min, max, track_width: 140.0, on_change }
    }

    pub fn font(mut self, font: Option<FontId>) -> Self { self.font = font; self }
    pub fn track_width(mut self, w: f32) -> Self { self.track_width = w; self }

    #[inline] pub fn value(&self) -> u32 { self.value }

    pub fn set_value(&mut self, v: u32) {
        self.value = v.clamp(self.min, self.max);
    }

    fn normalized(&self) -> f32 {
        if self.max == self.min {
            0.0
        } else {
            (self.value - self.min) as f32 / (self.max - self.min) as f32
        }
    }

    fn track_rect(&self, rect: Rect) -> Rect {
        let x = rect.x() + LABEL_WIDTH + THUMB_RADIUS;
        let w = (rect.width() - LABEL_WIDTH - 2.0 * THUMB_RADIUS).max(0.0);
        Rect::new(x, rect.center().y - TRACK_HEIGHT * 0.5, w, TRACK_HEIGHT)
    }

    fn value_at(&self, track: Rect, x: f32) -> u32 {
        let t = if track.width() > 0.0 { ((x - track.x()) / track.width()).clamp(0.0, 1.0) } else { 0.0 };
        self.min + (t * (self.max - self.min) as f32).round() as u32
    }

    fn drag_to(&mut self, rect: Rect, x: f32, actions: &mut ActionQueue) {
        let v = self.value_at(self.track_rect(rect), x);
        if v != self.value {
            self.value = v;
            actions.push((self.on_change)(v));
        }
    }
}

impl Widget for Slider {
    fn measure(&self, _ctx: &LayoutCtx<'_>) -> Vec2 {
        Vec2::new(LABEL_WIDTH + self.track_width + 2.0 * THUMB_RADIUS, theme::ROW_HEIGHT)
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        if let Some(font) = self.font {
            let caption = format!("{} {}", self.caption, self.value);
            let label = Rect::new(rect.x(), rect.y(), LABEL_WIDTH, rect.height());
            let h = painter.measure_text(&caption, font, theme::FONT_SIZE).y;
            painter.text(&caption, font, theme::FONT_SIZE, theme::TEXT, Vec2::new(label.x(), label.center().y - h * 0.5));
        }

        let track = self.track_rect(rect);
        painter.fill_rounded_rect(track, 2.0, theme::TRACK, None);
        let thumb_x = track.x() + self.normalized() * track.width();
        let filled = Rect::new(track.x(), track.y(), thumb_x - track.x(), track.height());
        if !filled.is_empty() {
            painter.fill_rounded_rect(filled, 2.0, theme::ACCENT, None);
        }

        let r = if painter.is_hovered(rect) { THUMB_RADIUS + 1.0 } else { THUMB_RADIUS };
        painter.fill_circle(Vec2::new(thumb_x, track.center().y), r, theme::TEXT, Some(Border::new(2.0, theme::BORDER)));
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, actions: &mut ActionQueue) -> EventResult {
        match event {
            UiEvent::Drag { pos, start } | UiEvent::DragEnd { pos, start } if rect.contains(*start) => {
                self.drag_to(rect, pos.x, actions);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Slider { Slider::new("Pen", 2, 200, Action::SetDiameter) }

    const RECT: Rect = Rect::new(0.0, 0.0, 64.0 + 14.0 + 198.0, 26.0);

    #[test]
    fn drag_emits_on_change_only() {
        let mut s = pen();
        let mut q = ActionQueue::new();
        let track = s.track_rect(RECT);
        let start = Vec2::new(track.x(), 10.0);
        let to_end = UiEvent::Drag { pos: Vec2::new(track.right() + 50.0, 10.0), start };
        s.on_event(&to_end, RECT, &mut q);
        s.on_event(&to_end, RECT, &mut q);
        assert_eq!(s.value(), 200);
        assert_eq!(q.drain().collect::<Vec<_>>(), vec![Action::SetDiameter(200)]);
    }

    #[test]
    fn release_at_track_start_is_min() {
        let mut s = pen();
        s.set_value(50);
        let mut q = ActionQueue::new();
        let track = s.track_rect(RECT);
        let p = Vec2::new(track.x() - 3.0, 10.0);
        s.on_event(&UiEvent::DragEnd { pos: p, start: Vec2::new(track.x(), 10.0) }, RECT, &mut q);
        assert_eq!(s.value(), 2);
    }

    #[test]
    fn drag_started_elsewhere_ignored() {
        let mut s = pen();
        let mut q = ActionQueue::new();
        let ev = UiEvent::Drag { pos: Vec2::new(100.0, 10.0), start: Vec2::new(-5.0, 10.0) };
        assert_eq!(s.on_event(&ev, RECT, &mut q), EventResult::Ignored);
    }

    #[test]
    fn set_value_clamps() {
        let mut s = pen();
        s.set_value(1000);
        assert_eq!(s.value(), 200);
    }
}

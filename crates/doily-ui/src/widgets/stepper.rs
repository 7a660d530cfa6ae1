use doily_engine::coords::{Rect, Vec2};
use doily_engine::text::FontId;

use crate::action::{Action, ActionQueue};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::theme;
use crate::widget::{LayoutCtx, Widget};

const ARROW_WIDTH: f32 = 22.0;
const VALUE_WIDTH: f32 = 30.0;

/// Integer spinner: `caption  [-] value [+]`, stepping by one within
/// `[min, max]`. The wheel steps too.
pub struct Stepper {
    caption: String,
    font: Option<FontId>,
    value: u32,
    min: u32,
    max: u32,
    on_change: fn(u32) -> Action,
}

impl Stepper {
    pub fn new(caption: impl Into<String>, min: u32, max: u32, on_change: fn(u32) -> Action) -> Self {
        let (min, max) = (min.min(max), min.max(max));
        Self { caption: caption.into(), font: None, value: min, min, max, on_change }
    }

    pub fn font(mut self, font: Option<FontId>) -> Self { self.font = font; self }

    #[inline] pub fn value(&self) -> u32 { self.value }

    pub fn set_value(&mut self, v: u32) {
        self.value = v.clamp(self.min, self.max);
    }

    fn caption_width(&self, ctx: &LayoutCtx<'_>) -> f32 {
        self.font
            .map(|f| ctx.fonts.measure_text(&self.caption, f, theme::FONT_SIZE).x + theme::GAP)
            .unwrap_or(0.0)
    }

    /// `(minus, value, plus)` cells, right-aligned in `rect`.
    fn cells(rect: Rect) -> (Rect, Rect, Rect) {
        let (rest, plus) = rect.split_right(ARROW_WIDTH);
        let (rest, value) = rest.split_right(VALUE_WIDTH);
        let (_, minus) = rest.split_right(ARROW_WIDTH);
        (minus, value, plus)
    }

    fn step(&mut self, up: bool, actions: &mut ActionQueue) {
        let next = if up { self.value.saturating_add(1) } else { self.value.saturating_sub(1) };
        let next = next.clamp(self.min, self.max);
        if next != self.value {
            self.value = next;
            actions.push((self.on_change)(next));
        }
    }
}

impl Widget for Stepper {
    fn measure(&self, ctx: &LayoutCtx<'_>) -> Vec2 {
        Vec2::new(self.caption_width(ctx) + 2.0 * ARROW_WIDTH + VALUE_WIDTH, theme::ROW_HEIGHT)
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let (minus, value, plus) = Self::cells(rect);
        for (cell, sign, enabled) in [(minus, "-", self.value > self.min), (plus, "+", self.value < self.max)] {
            let bg = if enabled && painter.is_hovered(cell) { theme::BUTTON_HOVER } else { theme::BUTTON_BG };
            painter.fill_rounded_rect(cell, theme::CORNER_RADIUS, bg, None);
            if let Some(font) = self.font {
                let fg = if enabled { theme::TEXT } else { theme::TEXT_DISABLED };
                painter.text_centered(sign, font, theme::FONT_SIZE, fg, cell);
            }
        }
        painter.fill_rect(value, theme::GALLERY_BG);

        if let Some(font) = self.font {
            painter.text_centered(&self.value.to_string(), font, theme::FONT_SIZE, theme::TEXT, value);
            let h = painter.measure_text(&self.caption, font, theme::FONT_SIZE).y;
            let origin = Vec2::new(rect.x(), rect.center().y - h * 0.5);
            painter.text(&self.caption, font, theme::FONT_SIZE, theme::TEXT, origin);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, actions: &mut ActionQueue) -> EventResult {
        let (minus, _, plus) = Self::cells(rect);
        match event {
            UiEvent::Click { pos } if minus.contains(*pos) => self.step(false, actions),
            UiEvent::Click { pos } if plus.contains(*pos) => self.step(true, actions),
            UiEvent::ScrollWheel { pos, delta } if rect.contains(*pos) && *delta != 0.0 => {
                self.step(*delta > 0.0, actions)
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(0.0, 0.0, 74.0, 26.0);

    fn sectors(v: u32) -> Stepper {
        let mut s = Stepper::new("Sectors", 2, 36, Action::SetSectors);
        s.set_value(v);
        s
    }

    fn click(x: f32) -> UiEvent { UiEvent::Click { pos: Vec2::new(x, 10.0) } }

    #[test]
    fn plus_and_minus_step() {
        let mut s = sectors(12);
        let mut q = ActionQueue::new();
        s.on_event(&click(70.0), RECT, &mut q);
        s.on_event(&click(70.0), RECT, &mut q);
        s.on_event(&click(5.0), RECT, &mut q);
        assert_eq!(s.value(), 13);
        assert_eq!(
            q.drain().collect::<Vec<_>>(),
            vec![Action::SetSectors(13), Action::SetSectors(14), Action::SetSectors(13)]
        );
    }

    #[test]
    fn stops_at_bounds_without_action() {
        let mut s = sectors(2);
        let mut q = ActionQueue::new();
        assert!(s.on_event(&click(5.0), RECT, &mut q).is_consumed());
        assert_eq!(s.value(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn wheel_steps() {
        let mut s = sectors(36);
        let mut q = ActionQueue::new();
        s.on_event(&UiEvent::ScrollWheel { pos: Vec2::new(30.0, 10.0), delta: -40.0 }, RECT, &mut q);
        assert_eq!(s.value(), 35);
    }

    #[test]
    fn clicking_value_cell_ignored() {
        let mut s = sectors(12);
        let mut q = ActionQueue::new();
        assert_eq!(s.on_event(&click(35.0), RECT, &mut q), EventResult::Ignored);
    }
}

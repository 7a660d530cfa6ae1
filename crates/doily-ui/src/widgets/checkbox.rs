use doily_engine::coords::{Rect, Vec2};
use doily_engine::text::FontId;

use crate::action::{Action, ActionQueue};
use crate::event::{EventResult, UiEvent};
use crate::painter::{Border, Painter};
use crate::theme;
use crate::widget::{LayoutCtx, Widget};

const BOX_SIZE: f32 = 16.0;

/// Labelled check box. Toggles on click and emits `on_change(checked)`.
pub struct Checkbox {
    checked: bool,
    label: String,
    font: Option<FontId>,
    on_change: fn(bool) -> Action,
}

impl Checkbox {
    pub fn new(label: impl Into<String>, on_change: fn(bool) -> Action) -> Self {
        Self { checked: false, label: label.into(), font: None, on_change }
    }

    pub fn font(mut self, font: Option<FontId>) -> Self { self.font = font; self }
    pub fn checked(mut self, v: bool) -> Self { self.checked = v; self }

    #[inline] pub fn is_checked(&self) -> bool { self.checked }
    pub fn set_checked(&mut self, v: bool) { self.checked = v; }
}

impl Widget for Checkbox {
    fn measure(&self, ctx: &LayoutCtx<'_>) -> Vec2 {
        let text = self
            .font
            .map(|f| ctx.fonts.measure_text(&self.label, f, theme::FONT_SIZE))
            .unwrap_or_default();
        let w = if text.x > 0.0 { BOX_SIZE + theme::GAP + text.x } else { BOX_SIZE };
        Vec2::new(w, theme::ROW_HEIGHT)
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let hovered = painter.is_hovered(rect);
        let box_rect = Rect::new(rect.x(), rect.y() + (rect.height() - BOX_SIZE) * 0.5, BOX_SIZE, BOX_SIZE);

        let bg = if self.checked { theme::ACCENT } else { theme::BUTTON_BG };
        let border = if hovered { theme::TEXT } else { theme::BORDER };
        painter.fill_rounded_rect(box_rect, 3.0, bg, Some(Border::new(1.5, border)));
        if self.checked {
            painter.fill_rounded_rect(box_rect.inset(4.5), 1.0, theme::TEXT, None);
        }

        if let Some(font) = self.font {
            let text_h = painter.measure_text(&self.label, font, theme::FONT_SIZE).y;
            let origin = Vec2::new(box_rect.right() + theme::GAP, rect.y() + (rect.height() - text_h) * 0.5);
            painter.text(&self.label, font, theme::FONT_SIZE, theme::TEXT, origin);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, actions: &mut ActionQueue) -> EventResult {
        if let UiEvent::Click { pos } = event {
            if rect.contains(*pos) {
                self.checked = !self.checked;
                actions.push((self.on_change)(self.checked));
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_toggles_and_reports() {
        let mut cb = Checkbox::new("Reflect drawing", Action::SetMirror);
        let mut q = ActionQueue::new();
        let rect = Rect::new(0.0, 0.0, 120.0, 26.0);
        let click = UiEvent::Click { pos: Vec2::new(5.0, 5.0) };
        cb.on_event(&click, rect, &mut q);
        cb.on_event(&click, rect, &mut q);
        assert!(!cb.is_checked());
        assert_eq!(q.drain().collect::<Vec<_>>(), vec![Action::SetMirror(true), Action::SetMirror(false)]);
    }
}

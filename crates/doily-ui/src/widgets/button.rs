use doily_engine::coords::{Rect, Vec2};
use doily_engine::text::FontId;

use crate::action::{Action, ActionQueue};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::theme;
use crate::widget::{LayoutCtx, Widget};

/// A text push button that emits one [`Action`] per click.
///
/// Visual state (hover, press) is read from the `Painter` during `paint`.
/// A disabled button ignores clicks and greys out.
pub struct Button {
    label: String,
    font: Option<FontId>,
    action: Action,
    enabled: bool,
    min_width: f32,
}

impl Button {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self { label: label.into(), font: None, action, enabled: true, min_width: 64.0 }
    }

    pub fn font(mut self, font: Option<FontId>) -> Self { self.font = font; self }
    pub fn min_width(mut self, w: f32) -> Self { self.min_width = w; self }

    #[inline] pub fn is_enabled(&self) -> bool { self.enabled }
    pub fn set_enabled(&mut self, enabled: bool) { self.enabled = enabled; }
}

impl Widget for Button {
    fn measure(&self, ctx: &LayoutCtx<'_>) -> Vec2 {
        let text = self
            .font
            .map(|f| ctx.fonts.measure_text(&self.label, f, theme::FONT_SIZE))
            .unwrap_or_default();
        Vec2::new((text.x + 24.0).max(self.min_width), theme::ROW_HEIGHT)
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let (bg, fg) = if !self.enabled {
            (theme::BUTTON_DISABLED, theme::TEXT_DISABLED)
        } else if painter.is_pressed(rect) {
            (theme::BUTTON_PRESS, theme::TEXT)
        } else if painter.is_hovered(rect) {
            (theme::BUTTON_HOVER, theme::TEXT)
        } else {
            (theme::BUTTON_BG, theme::TEXT)
        };
        painter.fill_rounded_rect(rect, theme::CORNER_RADIUS, bg, None);
        if let Some(font) = self.font {
            painter.text_centered(&self.label, font, theme::FONT_SIZE, fg, rect);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, actions: &mut ActionQueue) -> EventResult {
        match event {
            UiEvent::Click { pos } if rect.contains(*pos) => {
                if self.enabled {
                    actions.push(self.action);
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(10.0, 10.0, 60.0, 26.0);

    fn click(x: f32, y: f32) -> UiEvent { UiEvent::Click { pos: Vec2::new(x, y) } }

    #[test]
    fn click_inside_emits_action() {
        let mut b = Button::new("Undo", Action::Undo);
        let mut q = ActionQueue::new();
        assert!(b.on_event(&click(20.0, 20.0), RECT, &mut q).is_consumed());
        assert_eq!(q.drain().collect::<Vec<_>>(), vec![Action::Undo]);
    }

    #[test]
    fn click_outside_ignored() {
        let mut b = Button::new("Undo", Action::Undo);
        let mut q = ActionQueue::new();
        assert_eq!(b.on_event(&click(0.0, 0.0), RECT, &mut q), EventResult::Ignored);
        assert!(q.is_empty());
    }

    #[test]
    fn disabled_swallows_click() {
        let mut b = Button::new("Save", Action::SaveToGallery);
        b.set_enabled(false);
        let mut q = ActionQueue::new();
        assert!(b.on_event(&click(20.0, 20.0), RECT, &mut q).is_consumed());
        assert!(q.is_empty());
    }
}

//! Bottom control strip.

use doily_core::{Limits, Settings};
use doily_engine::coords::{Rect, Vec2};
use doily_engine::text::FontId;

use crate::action::{Action, ActionQueue};
use crate::event::{EventResult, UiEvent};
use crate::layout::RowCursor;
use crate::painter::Painter;
use crate::theme;
use crate::widget::{LayoutCtx, Widget};
use crate::widgets::{Button, Checkbox, Palette, Slider, Stepper};

const SLOTS: usize = 9;

/// Undo / Clear / Save buttons, sector spinner, pen slider, guide and mirror
/// toggles, colour palette and translucency toggle.
///
/// Widget state is a view of the model: [`sync`](Self::sync) copies it back
/// after every batch of actions.
pub struct ControlPanel {
    undo: Button,
    clear: Button,
    save: Button,
    sectors: Stepper,
    pen: Slider,
    guides: Checkbox,
    mirror: Checkbox,
    palette: Palette,
    translucent: Checkbox,
    slots: [Rect; SLOTS],
}

impl ControlPanel {
    pub fn new(font: Option<FontId>) -> Self {
        Self {
            undo: Button::new("Undo", Action::Undo).font(font),
            clear: Button::new("Clear", Action::Clear).font(font),
            save: Button::new("Save", Action::SaveToGallery).font(font),
            sectors: Stepper::new("Sectors", Limits::MIN_SECTORS, Limits::MAX_SECTORS, Action::SetSectors).font(font),
            pen: Slider::new("Pen", Limits::MIN_DIAMETER, Limits::MAX_DIAMETER, Action::SetDiameter).font(font),
            guides: Checkbox::new("Show sector lines", Action::SetGuides).font(font),
            mirror: Checkbox::new("Reflect drawing", Action::SetMirror).font(font),
            palette: Palette::default(),
            translucent: Checkbox::new("Translucent", Action::SetTranslucent).font(font),
            slots: [Rect::default(); SLOTS],
        }
    }

    pub fn sync(&mut self, settings: &Settings, undo_available: bool, gallery_full: bool) {
        self.undo.set_enabled(undo_available);
        self.save.set_enabled(!gallery_full);
        self.sectors.set_value(settings.sector_count());
        self.pen.set_value(settings.pen_diameter());
        self.guides.set_checked(settings.guides_visible());
        self.mirror.set_checked(settings.mirror());
        self.palette.sync(settings.pen_color());
        self.translucent.set_checked(!settings.pen_color().is_opaque());
    }

    #[inline] pub fn undo_enabled(&self) -> bool { self.undo.is_enabled() }
    #[inline] pub fn save_enabled(&self) -> bool { self.save.is_enabled() }
    #[inline] pub fn sector_value(&self) -> u32 { self.sectors.value() }
    #[inline] pub fn pen_value(&self) -> u32 { self.pen.value() }

    /// Lays the widgets out in three rows inside `rect`.
    pub fn arrange(&mut self, rect: Rect, ctx: &LayoutCtx<'_>) {
        let sizes: Vec<Vec2> = self.widgets().iter().map(|w| w.measure(ctx)).collect();
        let row_y = |i: f32| rect.y() + theme::GAP + i * (theme::ROW_HEIGHT + theme::GAP);
        let x0 = rect.x() + theme::GAP * 1.5;

        let mut row = RowCursor::new(x0, row_y(0.0), theme::ROW_HEIGHT, theme::GAP);
        self.slots[0] = row.next(sizes[0].x);
        self.slots[1] = row.next(sizes[1].x);
        self.slots[2] = row.next(sizes[2].x);
        row.skip(theme::GAP * 2.0);
        self.slots[3] = row.next(sizes[3].x);

        let mut row = RowCursor::new(x0, row_y(1.0), theme::ROW_HEIGHT, theme::GAP * 2.0);
        self.slots[4] = row.next(sizes[4].x);
        self.slots[5] = row.next(sizes[5].x);
        self.slots[6] = row.next(sizes[6].x);

        let mut row = RowCursor::new(x0, row_y(2.0), theme::ROW_HEIGHT, theme::GAP * 2.0);
        self.slots[7] = row.next(sizes[7].x);
        self.slots[8] = row.next(sizes[8].x);
    }

    #[cfg(test)]
    pub(crate) fn slot(&self, i: usize) -> Rect {
        self.slots[i]
    }

    fn widgets(&self) -> [&dyn Widget; SLOTS] {
        [
            &self.undo, &self.clear, &self.save, &self.sectors, &self.pen,
            &self.guides, &self.mirror, &self.palette, &self.translucent,
        ]
    }

    fn widgets_mut(&mut self) -> [&mut dyn Widget; SLOTS] {
        [
            &mut self.undo, &mut self.clear, &mut self.save, &mut self.sectors, &mut self.pen,
            &mut self.guides, &mut self.mirror, &mut self.palette, &mut self.translucent,
        ]
    }

    pub fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        painter.fill_rect(rect, theme::PANEL_BG);
        painter.fill_rect(Rect::new(rect.x(), rect.y(), rect.width(), 1.0), theme::DIVIDER);
        painter.push_clip(rect);
        for (w, slot) in self.widgets().into_iter().zip(self.slots) {
            w.paint(painter, slot);
        }
        painter.pop_clip();
    }

    pub fn on_event(&mut self, event: &UiEvent, actions: &mut ActionQueue) -> EventResult {
        let slots = self.slots;
        for (w, slot) in self.widgets_mut().into_iter().zip(slots) {
            if w.on_event(event, slot, actions).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doily_core::{DrawingDefaults, Rgba};
    use doily_engine::text::FontSystem;

    fn arranged() -> ControlPanel {
        let fonts = FontSystem::new();
        let mut panel = ControlPanel::new(None);
        panel.arrange(Rect::new(0.0, 490.0, 580.0, 110.0), &LayoutCtx { fonts: &fonts });
        panel
    }

    #[test]
    fn sync_mirrors_settings() {
        let mut panel = arranged();
        let settings = Settings::from_defaults(&DrawingDefaults::default().sector_count(7).pen_diameter(40));
        panel.sync(&settings, false, true);
        assert_eq!(panel.sector_value(), 7);
        assert_eq!(panel.pen_value(), 40);
        assert!(!panel.undo_enabled());
        assert!(!panel.save_enabled());
        assert!(panel.guides.is_checked());
        assert!(!panel.mirror.is_checked());
    }

    #[test]
    fn translucent_follows_pen_alpha() {
        let mut panel = arranged();
        let settings = Settings::from_defaults(&DrawingDefaults::default().pen_color(Rgba::RED.with_alpha(90)));
        panel.sync(&settings, true, false);
        assert!(panel.translucent.is_checked());
        assert_eq!(panel.palette.selected(), Some(2));
    }

    #[test]
    fn routes_click_to_the_slot_under_pointer() {
        let mut panel = arranged();
        panel.sync(&Settings::default(), true, false);
        let mut q = ActionQueue::new();
        let clear = panel.slots[1].center();
        assert!(panel.on_event(&UiEvent::Click { pos: clear }, &mut q).is_consumed());
        assert_eq!(q.drain().collect::<Vec<_>>(), vec![Action::Clear]);
    }

    #[test]
    fn click_on_empty_strip_ignored() {
        let mut panel = arranged();
        let mut q = ActionQueue::new();
        let ev = UiEvent::Click { pos: Vec2::new(570.0, 500.0) };
        assert_eq!(panel.on_event(&ev, &mut q), EventResult::Ignored);
    }
}

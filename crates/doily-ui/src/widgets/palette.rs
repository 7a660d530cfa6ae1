use doily_core::Rgba;
use doily_engine::coords::{Rect, Vec2};

use crate::action::{Action, ActionQueue};
use crate::event::{EventResult, UiEvent};
use crate::painter::{Border, Painter};
use crate::theme;
use crate::widget::{LayoutCtx, Widget};

const CELL: f32 = 20.0;
const SPACING: f32 = 4.0;

/// Preset pen colours.
pub const PRESETS: [Rgba; 10] = [
    Rgba::WHITE,
    Rgba::opaque(0x80, 0x80, 0x80),
    Rgba::RED,
    Rgba::opaque(0xff, 0x80, 0x00),
    Rgba::opaque(0xff, 0xe0, 0x00),
    Rgba::opaque(0x00, 0xc8, 0x3c),
    Rgba::opaque(0x00, 0xc0, 0xff),
    Rgba::opaque(0x30, 0x50, 0xff),
    Rgba::opaque(0xa0, 0x40, 0xff),
    Rgba::opaque(0xff, 0x40, 0xb0),
];

/// Row of colour swatches. Clicking one emits [`Action::SetColor`] with the
/// palette's current alpha, so translucency survives a colour change.
pub struct Palette {
    colors: Vec<Rgba>,
    selected: Option<usize>,
    alpha: u8,
}

impl Palette {
    pub fn new(colors: impl Into<Vec<Rgba>>) -> Self {
        Self { colors: colors.into(), selected: None, alpha: 255 }
    }

    #[inline] pub fn selected(&self) -> Option<usize> { self.selected }
    #[inline] pub fn alpha(&self) -> u8 { self.alpha }

    /// Mirrors the pen colour: highlights the matching swatch (if any) and
    /// adopts its alpha.
    pub fn sync(&mut self, pen: Rgba) {
        self.alpha = pen.a;
        self.selected = self.colors.iter().position(|c| c.with_alpha(pen.a) == pen);
    }

    fn cell(rect: Rect, i: usize) -> Rect {
        let x = rect.x() + i as f32 * (CELL + SPACING);
        Rect::new(x, rect.center().y - CELL * 0.5, CELL, CELL)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(PRESETS)
    }
}

impl Widget for Palette {
    fn measure(&self, _ctx: &LayoutCtx<'_>) -> Vec2 {
        let n = self.colors.len() as f32;
        Vec2::new((n * (CELL + SPACING) - SPACING).max(0.0), theme::ROW_HEIGHT)
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        for (i, &color) in self.colors.iter().enumerate() {
            let cell = Self::cell(rect, i);
            let border = if self.selected == Some(i) {
                Border::new(2.0, theme::TEXT)
            } else if painter.is_hovered(cell) {
                Border::new(1.5, theme::BORDER)
            } else {
                Border::new(1.0, theme::DIVIDER)
            };
            painter.fill_rounded_rect(cell, 3.0, color.with_alpha(self.alpha), Some(border));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, actions: &mut ActionQueue) -> EventResult {
        let UiEvent::Click { pos } = event else { return EventResult::Ignored };
        let hit = (0..self.colors.len()).find(|&i| Self::cell(rect, i).contains(*pos));
        match hit {
            Some(i) => {
                self.selected = Some(i);
                actions.push(Action::SetColor(self.colors[i].with_alpha(self.alpha)));
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(0.0, 0.0, 236.0, 26.0);

    #[test]
    fn click_picks_swatch_with_alpha() {
        let mut p = Palette::default();
        p.sync(Rgba::WHITE.with_alpha(128));
        let mut q = ActionQueue::new();
        // third cell starts at 48
        p.on_event(&UiEvent::Click { pos: Vec2::new(50.0, 13.0) }, RECT, &mut q);
        assert_eq!(p.selected(), Some(2));
        assert_eq!(q.drain().collect::<Vec<_>>(), vec![Action::SetColor(Rgba::RED.with_alpha(128))]);
    }

    #[test]
    fn gap_between_cells_ignored() {
        let mut p = Palette::default();
        let mut q = ActionQueue::new();
        assert_eq!(p.on_event(&UiEvent::Click { pos: Vec2::new(21.0, 13.0) }, RECT, &mut q), EventResult::Ignored);
    }

    #[test]
    fn sync_matches_preset() {
        let mut p = Palette::default();
        p.sync(Rgba::WHITE);
        assert_eq!(p.selected(), Some(0));
        p.sync(Rgba::opaque(1, 2, 3));
        assert_eq!(p.selected(), None);
    }
}

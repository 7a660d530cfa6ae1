//! Thumbnail gallery side panel.

use doily_core::tiny_skia::Pixmap;
use doily_engine::coords::{Rect, Vec2};
use doily_engine::text::FontId;

use crate::action::{Action, ActionQueue};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::theme;
use crate::widget::{LayoutCtx, Widget};
use crate::widgets::Button;

/// Margin around and between thumbnails.
const PADDING: f32 = 10.0;
const FOOTER_HEIGHT: f32 = theme::ROW_HEIGHT + 2.0 * PADDING;
const REMOVE_WIDTH: f32 = 96.0;

/// Saved snapshots, newest last, with at most one selected.
pub struct Gallery {
    items: Vec<Pixmap>,
    selected: Option<usize>,
    capacity: usize,
    /// Distance scrolled down from the top of the list.
    scroll: f32,
    remove: Button,
}

impl Gallery {
    pub fn new(capacity: usize) -> Self {
        let mut remove = Button::new("Remove", Action::RemoveSelected).min_width(REMOVE_WIDTH);
        remove.set_enabled(false);
        Self { items: Vec::new(), selected: None, capacity, scroll: 0.0, remove }
    }

    pub fn font(mut self, font: Option<FontId>) -> Self {
        self.remove = self.remove.font(font);
        self
    }

    /// Thumbnail width for a panel `panel_width` wide.
    pub fn thumbnail_width(panel_width: f32) -> u32 {
        (panel_width - 2.0 * PADDING).max(1.0) as u32
    }

    #[inline] pub fn len(&self) -> usize { self.items.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.items.is_empty() }
    #[inline] pub fn is_full(&self) -> bool { self.items.len() >= self.capacity }
    #[inline] pub fn capacity(&self) -> usize { self.capacity }
    #[inline] pub fn selected(&self) -> Option<usize> { self.selected }
    #[inline] pub fn thumbnails(&self) -> &[Pixmap] { &self.items }

    /// Appends a thumbnail. Returns `false` (and drops it) when full.
    pub fn push(&mut self, thumbnail: Pixmap) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(thumbnail);
        true
    }

    /// Selects exactly one thumbnail; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.selected = Some(index);
        self.remove.set_enabled(true);
        true
    }

    /// Removes the selected thumbnail, leaving nothing selected.
    pub fn remove_selected(&mut self) -> Option<Pixmap> {
        let index = self.selected.take()?;
        self.remove.set_enabled(false);
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    fn split(rect: Rect) -> (Rect, Rect) {
        rect.split_bottom(FOOTER_HEIGHT)
    }

    fn content_height(&self) -> f32 {
        let thumbs: f32 = self.items.iter().map(|p| p.height() as f32 + PADDING).sum();
        thumbs + PADDING
    }

    fn max_scroll(&self, view_height: f32) -> f32 {
        (self.content_height() - view_height).max(0.0)
    }

    fn offset(&self, view_height: f32) -> f32 {
        self.scroll.clamp(0.0, self.max_scroll(view_height))
    }

    /// Screen rects of every thumbnail for a list area `list`.
    fn item_rects(&self, list: Rect) -> Vec<Rect> {
        let mut y = list.y() + PADDING - self.offset(list.height());
        self.items
            .iter()
            .map(|p| {
                let r = Rect::new(list.x() + PADDING, y, p.width() as f32, p.height() as f32);
                y += r.height() + PADDING;
                r
            })
            .collect()
    }

    fn remove_rect(footer: Rect) -> Rect {
        let w = REMOVE_WIDTH.min(footer.width() - 2.0 * PADDING).max(0.0);
        Rect::new(footer.center().x - w * 0.5, footer.y() + PADDING, w, theme::ROW_HEIGHT)
    }
}

impl Widget for Gallery {
    fn measure(&self, _ctx: &LayoutCtx<'_>) -> Vec2 {
        Vec2::new(crate::layout::GALLERY_WIDTH, self.content_height() + FOOTER_HEIGHT)
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        painter.fill_rect(rect, theme::GALLERY_BG);
        painter.fill_rect(Rect::new(rect.x(), rect.y(), 1.0, rect.height()), theme::DIVIDER);
        let (list, footer) = Self::split(rect);

        painter.push_clip(list);
        for (i, (item, r)) in self.items.iter().zip(self.item_rects(list)).enumerate() {
            if r.intersect(list).is_none() {
                continue;
            }
            painter.draw_pixmap(item.as_ref(), r.origin);
            if self.selected == Some(i) {
                painter.stroke_rect(r, theme::SELECTION_WIDTH, theme::SELECTION);
            }
        }
        painter.pop_clip();

        self.remove.paint(painter, Self::remove_rect(footer));
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, actions: &mut ActionQueue) -> EventResult {
        let (list, footer) = Self::split(rect);
        match event {
            UiEvent::ScrollWheel { pos, delta } if list.contains(*pos) => {
                // wheel up (positive) reveals earlier thumbnails
                self.scroll = (self.offset(list.height()) - delta).clamp(0.0, self.max_scroll(list.height()));
                EventResult::Consumed
            }
            UiEvent::Click { pos } if list.contains(*pos) => {
                if let Some(i) = self.item_rects(list).iter().position(|r| r.contains(*pos)) {
                    actions.push(Action::SelectThumbnail(i));
                }
                EventResult::Consumed
            }
            UiEvent::Click { pos } if footer.contains(*pos) => {
                self.remove.on_event(event, Self::remove_rect(footer), actions)
            }
            _ => EventResult::Ignored,
        }
    }
}

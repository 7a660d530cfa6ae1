use doily_engine::coords::{Rect, Vec2};
use doily_engine::text::FontSystem;

use crate::action::ActionQueue;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// Read-only context for measuring widgets.
#[derive(Copy, Clone)]
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
}

/// The trait every control implements.
///
/// Widgets own their visual state only. Anything that changes the drawing
/// goes out through the [`ActionQueue`] passed to [`on_event`](Self::on_event).
pub trait Widget {
    /// Preferred size. Must be deterministic.
    fn measure(&self, ctx: &LayoutCtx<'_>) -> Vec2;

    /// Draw into `painter` within `rect`.
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect);

    /// Route a pointer event. Return [`EventResult::Consumed`] to stop
    /// propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _actions: &mut ActionQueue) -> EventResult {
        EventResult::Ignored
    }
}

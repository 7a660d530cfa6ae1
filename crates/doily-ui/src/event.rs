use doily_engine::coords::Vec2;

/// Pointer events routed through the control widgets.
///
/// Positions are window-local logical pixels. The canvas never sees these;
/// it is driven through `doily_core::CanvasInput` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Primary button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// Pointer moved while the primary button is held.
    /// `start` is where the press began.
    Drag { pos: Vec2, start: Vec2 },
    /// Primary button released after a press at `start`.
    ///
    /// Fires even when `pos` is outside the widget; use `rect.contains(start)`
    /// to check ownership.
    DragEnd { pos: Vec2, start: Vec2 },
    /// Wheel or trackpad scroll over `pos`; `delta` > 0 scrolls up.
    ScrollWheel { pos: Vec2, delta: f32 },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

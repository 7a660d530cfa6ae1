use std::collections::VecDeque;

use doily_core::Rgba;

/// A user request produced by a widget or shortcut.
///
/// Widgets never touch the drawing; they push actions that the application
/// applies to its single `Drawing` after event routing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Undo,
    Clear,
    SetSectors(u32),
    SetDiameter(u32),
    SetColor(Rgba),
    /// Switches the pen between opaque and half-transparent.
    SetTranslucent(bool),
    SetMirror(bool),
    SetGuides(bool),
    SaveToGallery,
    RemoveSelected,
    SelectThumbnail(usize),
    CopyToClipboard,
}

/// FIFO of pending actions.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: VecDeque<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        log::trace!("queued {action:?}");
        self.pending.push_back(action);
    }

    #[inline] pub fn is_empty(&self) -> bool { self.pending.is_empty() }
    #[inline] pub fn len(&self) -> usize { self.pending.len() }

    /// Removes and yields every pending action, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = Action> + '_ {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_order() {
        let mut q = ActionQueue::new();
        q.push(Action::Clear);
        q.push(Action::SetSectors(6));
        assert_eq!(q.drain().collect::<Vec<_>>(), vec![Action::Clear, Action::SetSectors(6)]);
        assert!(q.is_empty());
    }
}

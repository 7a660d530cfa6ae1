use std::mem;

use crate::stroke::Stroke;

/// What a single [`History::undo`] step removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoStep {
    /// The most recent stroke was dropped.
    Stroke,
    /// History was empty; the most recently cleared drawing came back.
    Restored,
    /// Both stacks were empty.
    Nothing,
}

/// Two-tier undo store.
///
/// `strokes` is the visible drawing, most recent last. `cleared` holds whole
/// drawings removed by [`clear`](History::clear), most recent last. Undo
/// drains `strokes` one at a time, then brings back cleared drawings one
/// snapshot at a time.
#[derive(Debug, Clone, Default)]
pub struct History {
    strokes: Vec<Stroke>,
    cleared: Vec<Vec<Stroke>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline] pub fn strokes(&self) -> &[Stroke] { &self.strokes }
    #[inline] pub fn cleared(&self) -> &[Vec<Stroke>] { &self.cleared }
    #[inline] pub fn len(&self) -> usize { self.strokes.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.strokes.is_empty() }

    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Stroke> {
        self.strokes.last_mut()
    }

    /// Moves the visible drawing onto the cleared stack.
    /// Returns `false` (and does nothing) if there is nothing to clear.
    pub fn clear(&mut self) -> bool {
        if self.strokes.is_empty() {
            return false;
        }
        let snapshot = mem::take(&mut self.strokes);
        self.cleared.push(snapshot);
        true
    }

    pub fn undo(&mut self) -> UndoStep {
        if self.strokes.pop().is_some() {
            return UndoStep::Stroke;
        }
        match self.cleared.pop() {
            Some(snapshot) => {
                self.strokes = snapshot;
                UndoStep::Restored
            }
            None => UndoStep::Nothing,
        }
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty() || !self.cleared.is_empty()
    }
}

//! Per-actor binding of "current state".
//!
//! A [`Cursor`] is the only mutable piece of the state machine: the graph is
//! shared read-only between every actor using the same behavior, and each
//! actor owns one cursor that [`crate::StateGraph::tick`] advances.

use crate::state::StateId;

/// A controller's current position in a [`crate::StateGraph`].
///
/// The cursor may be idle (no current state); ticking an idle cursor is a
/// no-op. Only the tick driver reassigns a cursor during evaluation, but
/// owners may [`Cursor::clear`] or re-seat it between ticks (e.g. when an
/// actor is stunned or respawned).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Cursor {
    current: Option<StateId>,
}

impl Cursor {
    /// A cursor bound to no state.
    pub fn idle() -> Self {
        Self { current: None }
    }

    /// A cursor positioned on the given state.
    pub fn at(state: StateId) -> Self {
        Self {
            current: Some(state),
        }
    }

    /// The state this cursor sits on, if any.
    #[inline]
    pub fn current(&self) -> Option<StateId> {
        self.current
    }

    /// Detaches the cursor; subsequent ticks are no-ops until re-seated.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Moves the cursor to the given state.
    pub fn reassign(&mut self, state: StateId) {
        self.current = Some(state);
    }
}

/// What one call to [`crate::StateGraph::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The cursor had no current state; nothing ran.
    Idle,
    /// Actions ran and the cursor is still on the same state (including
    /// self-loop transitions).
    Stayed(StateId),
    /// Actions ran and a transition moved the cursor.
    Moved { from: StateId, to: StateId },
}

impl TickOutcome {
    /// Returns `true` if a transition changed the current state.
    #[inline]
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cursor_is_idle() {
        let cursor = Cursor::default();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn clear_detaches() {
        let mut cursor = Cursor::at(StateId(3));
        assert_eq!(cursor.current(), Some(StateId(3)));
        cursor.clear();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn reassign_moves() {
        let mut cursor = Cursor::idle();
        cursor.reassign(StateId(1));
        assert_eq!(cursor.current(), Some(StateId(1)));
    }
}

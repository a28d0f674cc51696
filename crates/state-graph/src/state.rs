//! Graph nodes and edges.
//!
//! [`State`] bundles the actions and transitions active while a controller
//! sits on it; [`Transition`] is a guarded edge to another state. Both are
//! configuration data: created once while building the graph, immutable at
//! runtime.

use std::fmt;

use crate::node::{Action, Decision};

/// Index of a state inside its owning [`crate::StateGraph`].
///
/// Ids are handed out by [`crate::GraphBuilder::add_state`] and are only
/// meaningful for the graph that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub(crate) u32);

impl StateId {
    /// Slot index of this state in the graph arena.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state#{}", self.0)
    }
}

/// A guarded edge between states.
///
/// Each tick, the owning state's transitions are evaluated in list order.
/// The transition's [`Decision`] picks a branch: `on_pass` when it returns
/// `true`, `on_fail` otherwise. A branch of `None` means "no change" and
/// evaluation continues with the next transition; a branch of `Some` moves
/// the cursor and stops evaluation for this tick.
///
/// Either branch may name the owning state itself, producing a self-loop
/// that still counts as a match.
pub struct Transition<C> {
    decision: Box<dyn Decision<C>>,
    on_pass: Option<StateId>,
    on_fail: Option<StateId>,
}

impl<C> Transition<C> {
    /// Creates a transition with explicit branches for both outcomes.
    pub fn new(
        decision: impl Decision<C> + 'static,
        on_pass: Option<StateId>,
        on_fail: Option<StateId>,
    ) -> Self {
        Self {
            decision: Box::new(decision),
            on_pass,
            on_fail,
        }
    }

    /// Creates a transition that moves to `target` when the decision passes
    /// and otherwise leaves the cursor alone.
    ///
    /// This is the common case: "go to Chase when a contact is in range".
    pub fn when(decision: impl Decision<C> + 'static, target: StateId) -> Self {
        Self::new(decision, Some(target), None)
    }

    /// Creates a transition that moves to `target` when the decision fails
    /// and otherwise leaves the cursor alone.
    ///
    /// Useful for bail-out edges: "fall back to Patrol when the target is
    /// no longer alive".
    pub fn unless(decision: impl Decision<C> + 'static, target: StateId) -> Self {
        Self::new(decision, None, Some(target))
    }

    pub(crate) fn decision(&self) -> &dyn Decision<C> {
        &*self.decision
    }

    pub(crate) fn on_pass(&self) -> Option<StateId> {
        self.on_pass
    }

    pub(crate) fn on_fail(&self) -> Option<StateId> {
        self.on_fail
    }

    /// Both branch targets, for build-time validation.
    pub(crate) fn targets(&self) -> impl Iterator<Item = StateId> {
        self.on_pass.into_iter().chain(self.on_fail)
    }
}

/// A named node in the graph: per-tick actions plus guarded exits.
///
/// A state with no transitions is terminal-per-tick: the cursor stays on it
/// indefinitely unless reassigned from outside. A state with no actions is a
/// legal no-op.
pub struct State<C> {
    name: String,
    actions: Vec<Box<dyn Action<C>>>,
    transitions: Vec<Transition<C>>,
}

impl<C> State<C> {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            actions: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Debug name given to [`crate::GraphBuilder::add_state`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Actions executed each tick, in order.
    pub fn actions(&self) -> &[Box<dyn Action<C>>] {
        &self.actions
    }

    /// Guarded exits evaluated each tick, in order.
    pub fn transitions(&self) -> &[Transition<C>] {
        &self.transitions
    }

    pub(crate) fn push_action(&mut self, action: Box<dyn Action<C>>) {
        self.actions.push(action);
    }

    pub(crate) fn push_transition(&mut self, transition: Transition<C>) {
        self.transitions.push(transition);
    }
}

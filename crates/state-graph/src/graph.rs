//! Graph arena, builder, and the tick driver.
//!
//! [`StateGraph`] owns every state of one behavior definition and is shared
//! read-only between all controllers using that behavior. [`GraphBuilder`]
//! is the only way to construct one; it rejects malformed graphs (unknown
//! transition targets, unknown initial state) at build time so that ticking
//! never has to cope with dangling edges.

use std::fmt;

use crate::cursor::{Cursor, TickOutcome};
use crate::node::{Action, Decision};
use crate::state::{State, StateId, Transition};

/// Error produced by [`GraphBuilder::build`].
///
/// All variants are programmer/configuration errors: a graph that builds
/// successfully can be ticked forever without structural failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// The builder contained no states.
    Empty,
    /// The requested initial state was not created by this builder.
    UnknownInitial(StateId),
    /// A transition branch points at a state not in this graph.
    UnknownTarget { from: StateId, target: StateId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "graph has no states"),
            Self::UnknownInitial(id) => {
                write!(f, "initial {id} does not exist in this graph")
            }
            Self::UnknownTarget { from, target } => {
                write!(f, "transition from {from} points at unknown {target}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// An immutable directed graph of states.
///
/// The graph holds no per-actor data; drive it by pairing it with one
/// [`Cursor`] per controlled actor and calling [`StateGraph::tick`] once per
/// simulation frame.
pub struct StateGraph<C> {
    states: Vec<State<C>>,
    initial: StateId,
}

impl<C> StateGraph<C> {
    /// The state new cursors should start on.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Creates a cursor positioned on the initial state.
    pub fn cursor(&self) -> Cursor {
        Cursor::at(self.initial)
    }

    /// Looks up a state by id.
    pub fn state(&self, id: StateId) -> Option<&State<C>> {
        self.states.get(id.index())
    }

    /// Number of states in the graph.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: [`GraphBuilder::build`] rejects empty graphs.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Executes one tick for the given cursor.
    ///
    /// Runs every action of the current state in list order, then evaluates
    /// transitions in list order. The first transition whose taken branch
    /// names a target reassigns the cursor and ends evaluation; a taken
    /// branch of `None` leaves the cursor alone and evaluation continues.
    ///
    /// A cursor with no current state is a no-op ([`TickOutcome::Idle`]).
    /// A cursor pointing outside this graph (stale id from another graph)
    /// is cleared and treated the same way rather than panicking.
    pub fn tick(&self, cursor: &mut Cursor, ctx: &mut C) -> TickOutcome {
        let Some(current) = cursor.current() else {
            return TickOutcome::Idle;
        };
        let Some(state) = self.states.get(current.index()) else {
            cursor.clear();
            return TickOutcome::Idle;
        };

        // Actions first: a decision's cached result is visible to actions
        // on the *next* tick, never the current one.
        for action in state.actions() {
            action.act(ctx);
        }

        for transition in state.transitions() {
            let taken = if transition.decision().decide(ctx) {
                transition.on_pass()
            } else {
                transition.on_fail()
            };
            if let Some(next) = taken {
                cursor.reassign(next);
                return if next == current {
                    TickOutcome::Stayed(current)
                } else {
                    TickOutcome::Moved {
                        from: current,
                        to: next,
                    }
                };
            }
        }

        TickOutcome::Stayed(current)
    }
}

/// Incremental constructor for [`StateGraph`].
///
/// # Example
///
/// ```rust,ignore
/// let mut builder = GraphBuilder::new();
/// let patrol = builder.add_state("patrol");
/// let chase = builder.add_state("chase");
/// builder.add_action(patrol, FollowRoute { speed: 40.0 });
/// builder.add_transition(patrol, Transition::when(ContactNear, chase));
/// builder.add_transition(chase, Transition::unless(ContactNear, patrol));
/// let graph = builder.build(patrol)?;
/// ```
pub struct GraphBuilder<C> {
    states: Vec<State<C>>,
}

impl<C> GraphBuilder<C> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Adds a state and returns its id.
    ///
    /// The name is only used for diagnostics and logging; it does not have
    /// to be unique.
    pub fn add_state(&mut self, name: impl Into<String>) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(State::new(name.into()));
        id
    }

    /// Appends an action to a state's per-tick action list.
    ///
    /// # Panics
    ///
    /// Panics if `state` was not created by this builder. Source ids come
    /// straight from [`GraphBuilder::add_state`], so an unknown id is a
    /// programming error, not configuration data.
    pub fn add_action(&mut self, state: StateId, action: impl Action<C> + 'static) -> &mut Self {
        self.state_mut(state).push_action(Box::new(action));
        self
    }

    /// Appends a transition to a state's exit list.
    ///
    /// # Panics
    ///
    /// Panics if `state` was not created by this builder. Branch *targets*
    /// are validated later, in [`GraphBuilder::build`], because they are
    /// configuration data that may arrive from a scenario file.
    pub fn add_transition(&mut self, state: StateId, transition: Transition<C>) -> &mut Self {
        self.state_mut(state).push_transition(transition);
        self
    }

    /// Appends a transition built from its parts; see [`Transition::new`].
    pub fn add_edge(
        &mut self,
        state: StateId,
        decision: impl Decision<C> + 'static,
        on_pass: Option<StateId>,
        on_fail: Option<StateId>,
    ) -> &mut Self {
        self.add_transition(state, Transition::new(decision, on_pass, on_fail))
    }

    /// Validates the graph and seals it.
    ///
    /// # Errors
    ///
    /// - [`GraphError::Empty`] if no states were added
    /// - [`GraphError::UnknownInitial`] if `initial` is out of range
    /// - [`GraphError::UnknownTarget`] if any transition branch points at a
    ///   state this builder never created
    pub fn build(self, initial: StateId) -> Result<StateGraph<C>, GraphError> {
        if self.states.is_empty() {
            return Err(GraphError::Empty);
        }
        let count = self.states.len();
        if initial.index() >= count {
            return Err(GraphError::UnknownInitial(initial));
        }
        for (index, state) in self.states.iter().enumerate() {
            for transition in state.transitions() {
                if let Some(target) = transition.targets().find(|t| t.index() >= count) {
                    return Err(GraphError::UnknownTarget {
                        from: StateId(index as u32),
                        target,
                    });
                }
            }
        }
        Ok(StateGraph {
            states: self.states,
            initial,
        })
    }

    fn state_mut(&mut self, id: StateId) -> &mut State<C> {
        let count = self.states.len();
        self.states
            .get_mut(id.index())
            .unwrap_or_else(|| panic!("{id} does not exist in this builder ({count} states)"))
    }
}

impl<C> Default for GraphBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        ticks: Vec<&'static str>,
        armed: bool,
    }

    impl TestContext {
        fn new(armed: bool) -> Self {
            Self {
                ticks: Vec::new(),
                armed,
            }
        }
    }

    struct Record(&'static str);
    impl Action<TestContext> for Record {
        fn act(&self, ctx: &mut TestContext) {
            ctx.ticks.push(self.0);
        }
    }

    struct Armed;
    impl Decision<TestContext> for Armed {
        fn decide(&self, ctx: &mut TestContext) -> bool {
            ctx.armed
        }
    }

    struct Never;
    impl Decision<TestContext> for Never {
        fn decide(&self, _ctx: &mut TestContext) -> bool {
            false
        }
    }

    #[test]
    fn build_rejects_empty_graph() {
        let builder = GraphBuilder::<TestContext>::new();
        let err = builder.build(StateId(0)).err().expect("should fail");
        assert_eq!(err, GraphError::Empty);
    }

    #[test]
    fn build_rejects_unknown_initial() {
        let mut builder = GraphBuilder::<TestContext>::new();
        builder.add_state("only");
        let err = builder.build(StateId(7)).err().expect("should fail");
        assert_eq!(err, GraphError::UnknownInitial(StateId(7)));
    }

    #[test]
    fn build_rejects_unknown_transition_target() {
        let mut builder = GraphBuilder::<TestContext>::new();
        let a = builder.add_state("a");
        builder.add_transition(a, Transition::when(Armed, StateId(9)));
        let err = builder.build(a).err().expect("should fail");
        assert_eq!(
            err,
            GraphError::UnknownTarget {
                from: a,
                target: StateId(9)
            }
        );
    }

    #[test]
    fn actions_run_in_order_before_transitions() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_state("a");
        let b = builder.add_state("b");
        builder.add_action(a, Record("first"));
        builder.add_action(a, Record("second"));
        builder.add_transition(a, Transition::when(Armed, b));
        let graph = builder.build(a).expect("valid graph");

        let mut cursor = graph.cursor();
        let mut ctx = TestContext::new(true);
        let outcome = graph.tick(&mut cursor, &mut ctx);

        // Both actions ran this tick even though the state changed.
        assert_eq!(ctx.ticks, vec!["first", "second"]);
        assert_eq!(outcome, TickOutcome::Moved { from: a, to: b });
        assert_eq!(cursor.current(), Some(b));
    }

    #[test]
    fn first_matching_transition_wins() {
        // [T1 pass->a2, T2 fail->a3]: T1 matches, T2 must not be consulted,
        // so the cursor lands on a2 rather than being overwritten to a3.
        let mut builder = GraphBuilder::new();
        let a1 = builder.add_state("a1");
        let a2 = builder.add_state("a2");
        let a3 = builder.add_state("a3");
        builder.add_transition(a1, Transition::when(Armed, a2));
        builder.add_transition(a1, Transition::unless(Never, a3));
        let graph = builder.build(a1).expect("valid graph");

        let mut cursor = graph.cursor();
        let mut ctx = TestContext::new(true);
        graph.tick(&mut cursor, &mut ctx);
        assert_eq!(cursor.current(), Some(a2));
    }

    #[test]
    fn none_branch_means_no_change_and_keeps_evaluating() {
        let mut builder = GraphBuilder::new();
        let a1 = builder.add_state("a1");
        let a2 = builder.add_state("a2");
        // T1 fails with no fail branch; T2's fail branch should still fire.
        builder.add_transition(a1, Transition::when(Never, a2));
        builder.add_transition(a1, Transition::unless(Never, a2));
        let graph = builder.build(a1).expect("valid graph");

        let mut cursor = graph.cursor();
        let mut ctx = TestContext::new(false);
        graph.tick(&mut cursor, &mut ctx);
        assert_eq!(cursor.current(), Some(a2));
    }

    #[test]
    fn state_without_transitions_is_terminal() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_state("a");
        builder.add_action(a, Record("tick"));
        let graph = builder.build(a).expect("valid graph");

        let mut cursor = graph.cursor();
        let mut ctx = TestContext::new(true);
        for _ in 0..3 {
            assert_eq!(graph.tick(&mut cursor, &mut ctx), TickOutcome::Stayed(a));
        }
        assert_eq!(ctx.ticks.len(), 3);
    }

    #[test]
    fn self_loop_counts_as_a_match() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_state("a");
        let b = builder.add_state("b");
        builder.add_transition(a, Transition::when(Armed, a));
        // Would fire if the self-loop above did not stop evaluation.
        builder.add_transition(a, Transition::when(Armed, b));
        let graph = builder.build(a).expect("valid graph");

        let mut cursor = graph.cursor();
        let mut ctx = TestContext::new(true);
        assert_eq!(graph.tick(&mut cursor, &mut ctx), TickOutcome::Stayed(a));
        assert_eq!(cursor.current(), Some(a));
    }

    #[test]
    fn idle_cursor_is_a_noop() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_state("a");
        builder.add_action(a, Record("tick"));
        let graph = builder.build(a).expect("valid graph");

        let mut cursor = Cursor::idle();
        let mut ctx = TestContext::new(true);
        assert_eq!(graph.tick(&mut cursor, &mut ctx), TickOutcome::Idle);
        assert!(ctx.ticks.is_empty());
    }

    #[test]
    fn foreign_cursor_is_cleared_not_panicking() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_state("a");
        let graph = builder.build(a).expect("valid graph");

        let mut cursor = Cursor::at(StateId(42));
        let mut ctx = TestContext::new(true);
        assert_eq!(graph.tick(&mut cursor, &mut ctx), TickOutcome::Idle);
        assert_eq!(cursor.current(), None);
    }
}

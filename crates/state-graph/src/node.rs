//! Core node traits.
//!
//! This module defines the two leaf abstractions of the graph: [`Decision`]
//! (boolean predicates guarding transitions) and [`Action`] (per-tick
//! behaviors). Both are generic over a context type `C`, allowing nodes to
//! read actor and world state and stash transient results.

/// A boolean predicate evaluated when a transition is considered.
///
/// Decisions should be pure from the state machine's point of view: the only
/// permitted side effect is caching a transient result in the context (e.g.
/// "target acquired") for use by actions on later ticks.
pub trait Decision<C>: Send + Sync {
    /// Evaluate this decision against the given context.
    ///
    /// Returns `true` to take the transition's pass branch, `false` to take
    /// its fail branch. A decision that cannot be evaluated (missing actor,
    /// dangling target) must degrade to `false`, never panic.
    fn decide(&self, ctx: &mut C) -> bool;
}

/// A unit of per-tick behavior executed while its owning state is active.
pub trait Action<C>: Send + Sync {
    /// Execute this action against the given context.
    ///
    /// Actions run in list order, before any transition is evaluated, so an
    /// action that consumes a cached target sees the value a decision stored
    /// on a *previous* tick.
    fn act(&self, ctx: &mut C);
}

/// Blanket implementation for boxed decisions.
///
/// This allows `Box<dyn Decision<C>>` to also implement `Decision<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Decision<C> for Box<dyn Decision<C>> {
    #[inline]
    fn decide(&self, ctx: &mut C) -> bool {
        (**self).decide(ctx)
    }
}

/// Blanket implementation for boxed actions.
impl<C> Action<C> for Box<dyn Action<C>> {
    #[inline]
    fn act(&self, ctx: &mut C) {
        (**self).act(ctx)
    }
}

//! Concrete AI behaviors: decisions, actions, and ready-made graphs.
//!
//! A "brain" is a [`state_graph::StateGraph`] over [`crate::AiContext`].
//! Graphs are built once per archetype by [`presets`] and shared read-only
//! between every controller of that archetype; all per-actor state lives in
//! the controller's scratch.

pub mod actions;
pub mod decisions;
pub mod presets;

pub use presets::{Brain, BrainKind};

//! Minimal decision-graph state machine library for game AI.
//!
//! This library implements a small, deterministic finite state machine
//! driver: a directed graph of [`State`]s, each holding an ordered list of
//! [`Action`]s executed every tick and an ordered list of guarded
//! [`Transition`]s to other states.
//!
//! - **Single active state**: each controlled actor holds one [`Cursor`]
//!   pointing at exactly one state (or none)
//! - **One evaluation per tick**: actions run first, transitions after
//! - **First match wins**: transition evaluation short-circuits on the first
//!   transition whose taken branch names a target state
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Decision`]: boolean predicate gating a transition
//! - [`Action`]: per-tick behavior executed while a state is active
//! - [`State`] / [`Transition`]: immutable graph nodes and edges
//! - [`StateGraph`]: the arena owning all states, built via [`GraphBuilder`]
//! - [`Cursor`]: a controller's mutable "current state" binding

pub mod cursor;
pub mod graph;
pub mod node;
pub mod state;

// Re-export core types for ergonomic API
pub use cursor::{Cursor, TickOutcome};
pub use graph::{GraphBuilder, GraphError, StateGraph};
pub use node::{Action, Decision};
pub use state::{State, StateId, Transition};

//! Simulation runtime for the Starbreak combat sandbox.
//!
//! This crate binds the two core subsystems together: AI controllers walk
//! [`state_graph`] graphs whose actions emit effect commands, and the
//! [`PoolRegistry`] services those commands from bounded
//! [`starbreak_core::Pool`]s. The [`Simulation`] drives everything on a
//! fixed single-threaded tick.
//!
//! Modules are organized by responsibility:
//! - [`context`] defines the per-tick AI blackboard and command queue
//! - [`brains`] holds the concrete decisions, actions, and graph presets
//! - [`registry`] owns the per-kind effect pools
//! - [`scenario`] loads designer-authored setups from RON
//! - [`simulation`] hosts the fixed-timestep driver

pub mod brains;
pub mod context;
pub mod error;
pub mod registry;
pub mod scenario;
pub mod simulation;

pub use brains::{Brain, BrainKind};
pub use context::{AiContext, Command, Contact, Scratch, SensorSnapshot};
pub use error::RuntimeError;
pub use registry::PoolRegistry;
pub use scenario::{Scenario, ScenarioError, ShipPlacement};
pub use simulation::{SimStats, Simulation};

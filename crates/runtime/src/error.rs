//! Runtime error types.

use starbreak_core::{ConfigError, ShipId};
use state_graph::GraphError;

/// Errors surfaced while assembling or steering a simulation.
///
/// Tick execution itself never errors: expected-capacity conditions resolve
/// through eviction and missing targets degrade to no-ops inside the graph
/// nodes. Everything here is a construction-time rejection.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The game configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A controller was attached to a ship the world does not contain.
    #[error("cannot attach controller: {0} is not in the world")]
    UnknownShip(ShipId),

    /// A behavior graph failed validation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

//! Core simulation data types for the Starbreak combat sandbox.
//!
//! `starbreak-core` owns the recyclable-entity layer (bounded pools with
//! least-recently-dispensed recycling, the pooled effect kinds, explicit
//! timers) plus the shared value types the AI runtime reads: ships, hull
//! meters, world state, and tunable configuration. Everything here is pure
//! data and synchronous logic; logging, scheduling, and scenario I/O live in
//! the runtime crate.

pub mod config;
pub mod effects;
pub mod error;
pub mod pool;
pub mod state;
pub mod timer;

pub use config::{GameConfig, PoolSizes};
pub use effects::{
    CreditDrop, EffectKind, ExhaustParticle, FloatingText, Pickup, PickupKind, Projectile,
};
pub use error::ConfigError;
pub use pool::{Acquired, Pool, Recyclable, SlotId};
pub use state::{Faction, Meter, Ship, ShipClass, ShipId, Tick, WorldState};
pub use timer::{Cooldown, Timer};

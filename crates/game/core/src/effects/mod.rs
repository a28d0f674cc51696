//! Pooled effect entities.
//!
//! Each kind here is a short-lived, endlessly recycled object: dispensed
//! from a [`crate::Pool`], initialized by its `spawn` method, advanced by
//! `update(dt)` until a timer expires, then left inactive for the next
//! dispense. None of them allocate on spawn (the floating-text buffer is
//! reused), so recycling is allocation-free in steady state.

pub mod particle;
pub mod pickup;
pub mod projectile;
pub mod text;

pub use particle::ExhaustParticle;
pub use pickup::{CreditDrop, Pickup, PickupKind};
pub use projectile::Projectile;
pub use text::FloatingText;

/// Closed set of pooled effect kinds.
///
/// Used to address pools in the registry and to name them in configuration
/// and log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    Projectile,
    Exhaust,
    Pickup,
    Credit,
    FloatingText,
}

//! Error types for core configuration.
//!
//! Pool and timer operations never fail: capacity exhaustion resolves
//! through eviction and a zero-capacity pool dispenses `None`. The only
//! thing core can reject is a configuration that no pool could honor.

use crate::effects::EffectKind;

/// Invalid [`crate::GameConfig`] values.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A pool capacity exceeds [`crate::GameConfig::MAX_POOL_CAPACITY`].
    #[error("{kind} pool capacity {requested} exceeds maximum {max}")]
    PoolTooLarge {
        kind: EffectKind,
        requested: usize,
        max: usize,
    },

    /// The fixed timestep must be a positive number of seconds.
    #[error("fixed timestep must be positive, got {0}")]
    NonPositiveTimestep(f32),
}

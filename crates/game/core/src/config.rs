//! Game configuration constants and tunable parameters.

use crate::effects::EffectKind;
use crate::error::ConfigError;

/// Per-kind pool capacities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolSizes {
    pub projectiles: usize,
    pub exhaust: usize,
    pub pickups: usize,
    pub credits: usize,
    pub floating_text: usize,
}

impl PoolSizes {
    /// Capacity configured for one kind.
    pub fn for_kind(&self, kind: EffectKind) -> usize {
        match kind {
            EffectKind::Projectile => self.projectiles,
            EffectKind::Exhaust => self.exhaust,
            EffectKind::Pickup => self.pickups,
            EffectKind::Credit => self.credits,
            EffectKind::FloatingText => self.floating_text,
        }
    }

    /// All kinds with their configured capacities.
    pub fn entries(&self) -> [(EffectKind, usize); 5] {
        [
            (EffectKind::Projectile, self.projectiles),
            (EffectKind::Exhaust, self.exhaust),
            (EffectKind::Pickup, self.pickups),
            (EffectKind::Credit, self.credits),
            (EffectKind::FloatingText, self.floating_text),
        ]
    }
}

impl Default for PoolSizes {
    fn default() -> Self {
        Self {
            projectiles: GameConfig::DEFAULT_PROJECTILE_POOL,
            exhaust: GameConfig::DEFAULT_EXHAUST_POOL,
            pickups: GameConfig::DEFAULT_PICKUP_POOL,
            credits: GameConfig::DEFAULT_CREDIT_POOL,
            floating_text: GameConfig::DEFAULT_TEXT_POOL,
        }
    }
}

/// Tunable simulation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Capacities the pool registry is built with.
    pub pool_sizes: PoolSizes,
    /// Seconds advanced per simulation tick.
    pub fixed_dt: f32,
}

impl GameConfig {
    // ===== compile-time bounds =====
    /// Hard ceiling on any single pool's capacity. A scenario asking for
    /// more than this is a configuration mistake, not a tuning choice.
    pub const MAX_POOL_CAPACITY: usize = 4096;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PROJECTILE_POOL: usize = 64;
    pub const DEFAULT_EXHAUST_POOL: usize = 128;
    pub const DEFAULT_PICKUP_POOL: usize = 32;
    pub const DEFAULT_CREDIT_POOL: usize = 32;
    pub const DEFAULT_TEXT_POOL: usize = 16;
    /// 60 simulation ticks per second.
    pub const DEFAULT_FIXED_DT: f32 = 1.0 / 60.0;

    pub fn new() -> Self {
        Self {
            pool_sizes: PoolSizes::default(),
            fixed_dt: Self::DEFAULT_FIXED_DT,
        }
    }

    /// Rejects configurations no pool or tick loop could honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (kind, requested) in self.pool_sizes.entries() {
            if requested > Self::MAX_POOL_CAPACITY {
                return Err(ConfigError::PoolTooLarge {
                    kind,
                    requested,
                    max: Self::MAX_POOL_CAPACITY,
                });
            }
        }
        if self.fixed_dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimestep(self.fixed_dt));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn oversized_pool_is_rejected() {
        let mut config = GameConfig::default();
        config.pool_sizes.exhaust = GameConfig::MAX_POOL_CAPACITY + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PoolTooLarge {
                kind: EffectKind::Exhaust,
                ..
            })
        ));
    }

    #[test]
    fn zero_timestep_is_rejected() {
        let mut config = GameConfig::default();
        config.fixed_dt = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveTimestep(_))
        ));
    }
}

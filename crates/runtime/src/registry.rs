//! Dependency-injected registry of effect pools.
//!
//! One [`PoolRegistry`] per simulation owns a bounded
//! [`starbreak_core::Pool`] for each [`EffectKind`]. Consumers receive the
//! registry by reference instead of reaching for globals, so two
//! simulations in one process never share recycled state.
//!
//! Spawn helpers log evictions here: an evicted slot means an effect was
//! reclaimed while its previous holder considered it in flight, which is
//! accepted but worth seeing in a trace when pools are undersized.

use glam::Vec2;
use starbreak_core::{
    CreditDrop, EffectKind, ExhaustParticle, Faction, FloatingText, GameConfig, Pickup,
    PickupKind, Pool, PoolSizes, Projectile, Recyclable, ShipId, SlotId,
};

/// The full set of effect pools for one simulation.
#[derive(Debug, Default)]
pub struct PoolRegistry {
    projectiles: Pool<Projectile>,
    exhaust: Pool<ExhaustParticle>,
    pickups: Pool<Pickup>,
    credits: Pool<CreditDrop>,
    floating_text: Pool<FloatingText>,
}

impl PoolRegistry {
    /// Builds pools at the configured capacities.
    pub fn from_config(config: &GameConfig) -> Self {
        let mut registry = Self::default();
        registry.resize(&config.pool_sizes);
        registry
    }

    /// Applies new capacities to every pool.
    ///
    /// Shrinking destroys tail entities even when they are active; that is
    /// logged per kind so an undersized configuration shows up in traces
    /// rather than only as visual pops.
    pub fn resize(&mut self, sizes: &PoolSizes) {
        resize_pool(
            &mut self.projectiles,
            EffectKind::Projectile,
            sizes.projectiles,
            Projectile::dormant,
        );
        resize_pool(
            &mut self.exhaust,
            EffectKind::Exhaust,
            sizes.exhaust,
            ExhaustParticle::dormant,
        );
        resize_pool(
            &mut self.pickups,
            EffectKind::Pickup,
            sizes.pickups,
            Pickup::dormant,
        );
        resize_pool(
            &mut self.credits,
            EffectKind::Credit,
            sizes.credits,
            CreditDrop::dormant,
        );
        resize_pool(
            &mut self.floating_text,
            EffectKind::FloatingText,
            sizes.floating_text,
            FloatingText::dormant,
        );
    }

    /// Advances every pooled entity's timers and motion.
    pub fn update(&mut self, dt: f32) {
        for bolt in self.projectiles.iter_mut() {
            bolt.update(dt);
        }
        for puff in self.exhaust.iter_mut() {
            puff.update(dt);
        }
        for pickup in self.pickups.iter_mut() {
            pickup.update(dt);
        }
        for drop in self.credits.iter_mut() {
            drop.update(dt);
        }
        for label in self.floating_text.iter_mut() {
            label.update(dt);
        }
    }

    // ========================================================================
    // Spawn helpers
    // ========================================================================

    /// Launches a projectile. Returns `None` when the pool has no capacity.
    pub fn spawn_projectile(
        &mut self,
        owner: ShipId,
        faction: Faction,
        position: Vec2,
        velocity: Vec2,
        damage: u32,
        lifespan: f32,
    ) -> Option<SlotId> {
        let acquired = self.projectiles.acquire()?;
        log_eviction(EffectKind::Projectile, acquired.evicted);
        let bolt = self
            .projectiles
            .get_mut(acquired.slot)
            .expect("acquired slot is in range");
        bolt.spawn(owner, faction, position, velocity, damage, lifespan);
        Some(acquired.slot)
    }

    /// Leaves an exhaust puff.
    pub fn spawn_exhaust(&mut self, position: Vec2, velocity: Vec2, fade: f32) -> Option<SlotId> {
        let acquired = self.exhaust.acquire()?;
        log_eviction(EffectKind::Exhaust, acquired.evicted);
        let puff = self
            .exhaust
            .get_mut(acquired.slot)
            .expect("acquired slot is in range");
        puff.spawn(position, velocity, fade);
        Some(acquired.slot)
    }

    /// Drops a collectible at a world position.
    pub fn spawn_pickup(
        &mut self,
        kind: PickupKind,
        position: Vec2,
        despawn_after: f32,
    ) -> Option<SlotId> {
        let acquired = self.pickups.acquire()?;
        log_eviction(EffectKind::Pickup, acquired.evicted);
        let pickup = self
            .pickups
            .get_mut(acquired.slot)
            .expect("acquired slot is in range");
        pickup.spawn(kind, position, despawn_after);
        Some(acquired.slot)
    }

    /// Scatters credits at a world position.
    pub fn spawn_credits(
        &mut self,
        value: u32,
        position: Vec2,
        velocity: Vec2,
        despawn_after: f32,
    ) -> Option<SlotId> {
        let acquired = self.credits.acquire()?;
        log_eviction(EffectKind::Credit, acquired.evicted);
        let drop = self
            .credits
            .get_mut(acquired.slot)
            .expect("acquired slot is in range");
        drop.spawn(value, position, velocity, despawn_after);
        Some(acquired.slot)
    }

    /// Posts floating text at a world position.
    pub fn spawn_text(
        &mut self,
        message: &str,
        position: Vec2,
        rise_speed: f32,
        hold: f32,
    ) -> Option<SlotId> {
        let acquired = self.floating_text.acquire()?;
        log_eviction(EffectKind::FloatingText, acquired.evicted);
        let label = self
            .floating_text
            .get_mut(acquired.slot)
            .expect("acquired slot is in range");
        label.spawn(message, position, rise_speed, hold);
        Some(acquired.slot)
    }

    // ========================================================================
    // Pool access
    // ========================================================================

    pub fn projectiles(&self) -> &Pool<Projectile> {
        &self.projectiles
    }

    pub fn projectiles_mut(&mut self) -> &mut Pool<Projectile> {
        &mut self.projectiles
    }

    pub fn exhaust(&self) -> &Pool<ExhaustParticle> {
        &self.exhaust
    }

    pub fn pickups(&self) -> &Pool<Pickup> {
        &self.pickups
    }

    pub fn credits(&self) -> &Pool<CreditDrop> {
        &self.credits
    }

    pub fn floating_text(&self) -> &Pool<FloatingText> {
        &self.floating_text
    }

    /// Active entity count per kind, for end-of-run summaries.
    pub fn active_counts(&self) -> [(EffectKind, usize); 5] {
        [
            (EffectKind::Projectile, self.projectiles.active_count()),
            (EffectKind::Exhaust, self.exhaust.active_count()),
            (EffectKind::Pickup, self.pickups.active_count()),
            (EffectKind::Credit, self.credits.active_count()),
            (EffectKind::FloatingText, self.floating_text.active_count()),
        ]
    }
}

fn resize_pool<T: Recyclable>(
    pool: &mut Pool<T>,
    kind: EffectKind,
    new_size: usize,
    fill: impl FnMut() -> T,
) {
    let old_size = pool.capacity();
    if new_size < old_size {
        let destroyed_active = pool
            .iter()
            .skip(new_size)
            .filter(|entity| entity.is_active())
            .count();
        if destroyed_active > 0 {
            tracing::warn!(
                %kind,
                old_size,
                new_size,
                destroyed_active,
                "pool shrink destroyed in-flight entities"
            );
        }
    }
    pool.resize_with(new_size, fill);
}

fn log_eviction(kind: EffectKind, evicted: bool) {
    if evicted {
        tracing::warn!(%kind, "pool exhausted, recycling least-recently-dispensed entity");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_registry() -> PoolRegistry {
        let mut config = GameConfig::default();
        config.pool_sizes = PoolSizes {
            projectiles: 2,
            exhaust: 2,
            pickups: 1,
            credits: 1,
            floating_text: 1,
        };
        PoolRegistry::from_config(&config)
    }

    #[test]
    fn pools_come_up_at_configured_capacity() {
        let registry = small_registry();
        assert_eq!(registry.projectiles().capacity(), 2);
        assert_eq!(registry.pickups().capacity(), 1);
    }

    #[test]
    fn spawns_activate_and_expiry_frees() {
        let mut registry = small_registry();
        registry
            .spawn_exhaust(Vec2::ZERO, Vec2::ZERO, 0.2)
            .expect("capacity available");
        assert_eq!(registry.exhaust().active_count(), 1);

        registry.update(0.3);
        assert_eq!(registry.exhaust().active_count(), 0);
    }

    #[test]
    fn overflow_recycles_instead_of_failing() {
        let mut registry = small_registry();
        let first = registry
            .spawn_text("-1", Vec2::ZERO, 1.0, 10.0)
            .expect("capacity available");
        let second = registry
            .spawn_text("-2", Vec2::ZERO, 1.0, 10.0)
            .expect("recycled");
        assert_eq!(first, second);
        let label = registry.floating_text().get(second).expect("valid slot");
        assert_eq!(label.text(), "-2");
        assert_eq!(registry.floating_text().active_count(), 1);
    }

    #[test]
    fn resize_applies_new_sizes() {
        let mut registry = small_registry();
        let mut sizes = PoolSizes::default();
        sizes.projectiles = 8;
        registry.resize(&sizes);
        assert_eq!(registry.projectiles().capacity(), 8);
    }
}

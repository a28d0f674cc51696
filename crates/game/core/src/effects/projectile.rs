//! Pooled projectile.

use glam::Vec2;

use crate::pool::Recyclable;
use crate::state::{Faction, ShipId};
use crate::timer::Timer;

/// A cannon bolt in flight.
///
/// Spawned by an attack command, integrated every tick, and deactivated
/// when its lifespan runs out. Collision resolution is the simulation's
/// job; the projectile only carries the data a hit needs (owner, faction,
/// damage).
#[derive(Clone, Debug)]
pub struct Projectile {
    active: bool,
    pub owner: ShipId,
    pub faction: Faction,
    pub position: Vec2,
    pub velocity: Vec2,
    pub damage: u32,
    life: Timer,
}

impl Projectile {
    /// An inactive projectile for pool pre-fill.
    pub fn dormant() -> Self {
        Self {
            active: false,
            owner: ShipId(0),
            faction: Faction::Terran,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            damage: 0,
            life: Timer::elapsed(),
        }
    }

    /// Initializes a dispensed slot and raises its active flag.
    pub fn spawn(
        &mut self,
        owner: ShipId,
        faction: Faction,
        position: Vec2,
        velocity: Vec2,
        damage: u32,
        lifespan: f32,
    ) {
        self.active = true;
        self.owner = owner;
        self.faction = faction;
        self.position = position;
        self.velocity = velocity;
        self.damage = damage;
        self.life.reset(lifespan);
    }

    /// Integrates motion and expires the lifespan timer.
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.position += self.velocity * dt;
        if self.life.tick(dt) {
            self.active = false;
        }
    }
}

impl Recyclable for Projectile {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_lifespan() {
        let mut bolt = Projectile::dormant();
        bolt.spawn(
            ShipId(1),
            Faction::Terran,
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            10,
            0.3,
        );
        bolt.update(0.2);
        assert!(bolt.is_active());
        assert_eq!(bolt.position, Vec2::new(20.0, 0.0));
        bolt.update(0.2);
        assert!(!bolt.is_active());
    }

    #[test]
    fn inactive_projectile_does_not_move() {
        let mut bolt = Projectile::dormant();
        bolt.update(1.0);
        assert_eq!(bolt.position, Vec2::ZERO);
    }
}

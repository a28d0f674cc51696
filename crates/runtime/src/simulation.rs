//! Fixed-timestep simulation driver.
//!
//! The [`Simulation`] owns the world, the effect pools, and every AI
//! controller. One [`Simulation::step`] is the whole per-frame contract:
//! controllers think (graph tick), their commands are serviced, motion
//! integrates, projectiles resolve, pooled entities age. Everything runs
//! synchronously on the calling thread; there is nothing to lock.

use std::sync::Arc;

use glam::Vec2;
use starbreak_core::{
    Faction, GameConfig, PickupKind, Recyclable, Ship, ShipId, Tick, WorldState,
};
use state_graph::Cursor;

use crate::brains::Brain;
use crate::context::{AiContext, Command, Contact, Scratch, SensorSnapshot};
use crate::error::RuntimeError;
use crate::registry::PoolRegistry;

/// Distance at which a bolt connects with a hull.
const HIT_RADIUS: f32 = 3.0;
/// Exhaust puffs drift backwards at this fraction of the ship's speed.
const EXHAUST_TRAIL_FACTOR: f32 = -0.4;
/// Damage numbers rise this fast, in units per second.
const TEXT_RISE_SPEED: f32 = 6.0;
/// Damage numbers stay visible this long.
const TEXT_HOLD: f32 = 0.8;
/// Wreck drops linger this long before despawning.
const DROP_DESPAWN: f32 = 20.0;

/// One AI-controlled ship: shared brain, private cursor and scratch.
struct Controller {
    ship: ShipId,
    brain: Arc<Brain>,
    cursor: Cursor,
    scratch: Scratch,
}

/// Counters accumulated across a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    pub shots_fired: u64,
    pub ships_destroyed: u64,
}

/// The single-threaded game simulation.
pub struct Simulation {
    config: GameConfig,
    world: WorldState,
    registry: PoolRegistry,
    controllers: Vec<Controller>,
    tick: Tick,
    stats: SimStats,
}

impl Simulation {
    /// Creates an empty simulation from a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, RuntimeError> {
        config.validate()?;
        Ok(Self {
            registry: PoolRegistry::from_config(&config),
            config,
            world: WorldState::new(),
            controllers: Vec::new(),
            tick: Tick::ZERO,
            stats: SimStats::default(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    pub fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PoolRegistry {
        &mut self.registry
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Adds a ship to the world.
    pub fn spawn_ship(&mut self, ship: Ship) {
        self.world.spawn(ship);
    }

    /// Attaches an AI controller to a ship already in the world.
    ///
    /// The brain is shared; the controller gets its own cursor seated on
    /// the brain's initial state and its own scratch (route, weapon gate).
    pub fn add_controller(
        &mut self,
        ship: ShipId,
        brain: Arc<Brain>,
        route: Vec<Vec2>,
        trigger_period: f32,
    ) -> Result<(), RuntimeError> {
        if self.world.ship(ship).is_none() {
            return Err(RuntimeError::UnknownShip(ship));
        }
        let cursor = brain.cursor();
        self.controllers.push(Controller {
            ship,
            brain,
            cursor,
            scratch: Scratch::new(route, trigger_period),
        });
        Ok(())
    }

    /// Advances the simulation by `ticks` fixed steps.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Executes one fixed step.
    pub fn step(&mut self) {
        let dt = self.config.fixed_dt;
        self.think(dt);
        self.world.integrate(dt);
        self.resolve_hits();
        self.registry.update(dt);
        self.tick = self.tick.next();
    }

    /// Runs every controller's graph and services the commands it queued.
    fn think(&mut self, dt: f32) {
        for controller in &mut self.controllers {
            let (position, velocity, faction, alive) = match self.world.ship(controller.ship) {
                Some(ship) => (ship.position, ship.velocity, ship.faction, ship.is_alive()),
                None => continue,
            };
            if !alive {
                // Dead ships stop thinking; an idle cursor ticks as a no-op
                // if the controller is ever re-seated.
                controller.cursor.clear();
                continue;
            }

            controller.scratch.trigger.tick(dt);

            let sensors = SensorSnapshot {
                position,
                velocity,
                contacts: sense_contacts(&self.world, controller.ship, faction),
            };
            let mut ctx = AiContext::new(
                controller.ship,
                dt,
                sensors,
                std::mem::take(&mut controller.scratch),
            );

            let outcome = controller.brain.tick(&mut controller.cursor, &mut ctx);
            if let state_graph::TickOutcome::Moved { from, to } = outcome {
                tracing::debug!(
                    ship = %controller.ship,
                    from = controller.brain.state(from).map(|s| s.name()).unwrap_or("?"),
                    to = controller.brain.state(to).map(|s| s.name()).unwrap_or("?"),
                    "state change"
                );
            }

            let (scratch, commands) = ctx.finish();
            controller.scratch = scratch;

            for command in commands {
                match command {
                    Command::Steer { velocity } => {
                        if let Some(ship) = self.world.ship_mut(controller.ship) {
                            ship.velocity = velocity;
                        }
                    }
                    Command::Fire {
                        toward,
                        damage,
                        speed,
                        lifespan,
                    } => {
                        let aim = (toward - position).normalize_or_zero();
                        if aim == Vec2::ZERO {
                            continue;
                        }
                        let launched = self.registry.spawn_projectile(
                            controller.ship,
                            faction,
                            position,
                            aim * speed,
                            damage,
                            lifespan,
                        );
                        if launched.is_some() {
                            self.stats.shots_fired += 1;
                        }
                    }
                    Command::EmitExhaust { fade } => {
                        let _ = self
                            .registry
                            .spawn_exhaust(position, velocity * EXHAUST_TRAIL_FACTOR, fade);
                    }
                }
            }
        }
    }

    /// Connects active bolts with hostile hulls and applies the damage.
    fn resolve_hits(&mut self) {
        let mut hits: Vec<(ShipId, u32)> = Vec::new();
        for bolt in self.registry.projectiles_mut().iter_mut() {
            if !bolt.is_active() {
                continue;
            }
            let struck = self.world.ships().iter().find(|ship| {
                ship.is_alive()
                    && ship.faction.is_hostile_to(bolt.faction)
                    && ship.position.distance_squared(bolt.position) <= HIT_RADIUS * HIT_RADIUS
            });
            if let Some(ship) = struck {
                hits.push((ship.id, bolt.damage));
                bolt.deactivate();
            }
        }

        for (id, damage) in hits {
            let Some(ship) = self.world.ship_mut(id) else {
                continue;
            };
            let was_alive = ship.is_alive();
            ship.hull.apply_damage(damage);
            let destroyed = was_alive && !ship.is_alive();
            let position = ship.position;
            let bounty = ship.class.base_hull() / 2;

            let _ = self
                .registry
                .spawn_text(&format!("-{damage}"), position, TEXT_RISE_SPEED, TEXT_HOLD);

            if destroyed {
                self.stats.ships_destroyed += 1;
                tracing::info!(ship = %id, "ship destroyed");
                let _ = self.registry.spawn_credits(
                    bounty,
                    position,
                    Vec2::new(0.0, 2.0),
                    DROP_DESPAWN,
                );
                let _ = self
                    .registry
                    .spawn_pickup(PickupKind::OreChunk, position, DROP_DESPAWN);
            }
        }
    }
}

/// Every ship hostile to `faction`, as the actor senses it this tick.
///
/// Dead contacts are included with their flag down so liveness decisions
/// can observe a kill instead of the target silently vanishing.
fn sense_contacts(world: &WorldState, actor: ShipId, faction: Faction) -> Vec<Contact> {
    world
        .ships()
        .iter()
        .filter(|ship| ship.id != actor && ship.faction.is_hostile_to(faction))
        .map(|ship| Contact {
            id: ship.id,
            position: ship.position,
            alive: ship.is_alive(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brains::presets;
    use starbreak_core::ShipClass;

    fn two_ship_sim() -> Simulation {
        let mut sim = Simulation::new(GameConfig::default()).expect("valid config");
        sim.spawn_ship(Ship::new(
            ShipId(0),
            ShipClass::Hauler,
            Faction::Terran,
            Vec2::new(20.0, 0.0),
        ));
        sim.spawn_ship(Ship::new(
            ShipId(1),
            ShipClass::Interceptor,
            Faction::Raider,
            Vec2::ZERO,
        ));
        sim
    }

    #[test]
    fn controller_requires_a_known_ship() {
        let mut sim = two_ship_sim();
        let brain = Arc::new(presets::sentry(90.0, 60.0));
        let err = sim
            .add_controller(ShipId(9), brain, Vec::new(), 1.0)
            .err()
            .expect("should fail");
        assert!(matches!(err, RuntimeError::UnknownShip(ShipId(9))));
    }

    #[test]
    fn sentry_opens_fire_on_an_intruder() {
        let mut sim = two_ship_sim();
        let brain = Arc::new(presets::sentry(90.0, 60.0));
        sim.add_controller(ShipId(1), brain, Vec::new(), 0.5)
            .expect("ship exists");

        // Tick 1 moves hold -> engage; tick 2 fires.
        sim.run(2);
        assert!(sim.stats().shots_fired >= 1);
        assert!(sim.registry().projectiles().active_count() >= 1);
    }

    #[test]
    fn bolts_wear_down_and_destroy_the_target() {
        let mut sim = two_ship_sim();
        // Park the raider on top of the hauler so every bolt connects.
        sim.world_mut().ship_mut(ShipId(1)).expect("raider").position = Vec2::new(18.0, 0.0);
        let brain = Arc::new(presets::sentry(90.0, 60.0));
        sim.add_controller(ShipId(1), brain, Vec::new(), 0.1)
            .expect("ship exists");

        sim.run(600);
        let hauler = sim.world().ship(ShipId(0)).expect("hauler");
        assert!(!hauler.is_alive());
        assert_eq!(sim.stats().ships_destroyed, 1);
        // The wreck dropped loot from the pickup and credit pools.
        assert_eq!(sim.registry().pickups().active_count(), 1);
        assert_eq!(sim.registry().credits().active_count(), 1);
    }
}

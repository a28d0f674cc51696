//! AI blackboard for graph decisions and actions.
//!
//! The [`AiContext`] is the context type every Starbreak state graph is
//! generic over. It is rebuilt each tick from three pieces:
//!
//! - a [`SensorSnapshot`] of the world as the actor perceives it
//! - the controller's [`Scratch`] slots, which survive across ticks
//! - an empty [`Command`] queue that actions fill
//!
//! Owning a snapshot instead of borrowing the world keeps
//! `StateGraph<AiContext>` free of lifetime parameters, and makes the
//! read-only contract of decisions structural: nothing in the context can
//! reach the live world at all.

use glam::Vec2;
use starbreak_core::{Cooldown, ShipId};

/// One sensed ship: position and liveness at the start of the tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub id: ShipId,
    pub position: Vec2,
    pub alive: bool,
}

/// What the actor perceives this tick: its own pose plus every hostile
/// contact (dead contacts included, so liveness checks can observe a kill).
#[derive(Clone, Debug, Default)]
pub struct SensorSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub contacts: Vec<Contact>,
}

/// Transient per-actor slots surviving across ticks.
///
/// Decisions and actions communicate through these by convention: a sensing
/// decision caches the target it locked, a later chase action reads it.
#[derive(Clone, Debug)]
pub struct Scratch {
    /// Target locked by the most recent successful sensing decision.
    pub target: Option<ShipId>,
    /// Patrol route for this actor, in visit order.
    pub route: Vec<Vec2>,
    /// Index of the waypoint currently being approached.
    pub waypoint: usize,
    /// Weapon gate; ticked by the simulation, consumed by attack nodes.
    pub trigger: Cooldown,
}

impl Scratch {
    /// Scratch for an actor with the given patrol route and weapon period.
    pub fn new(route: Vec<Vec2>, trigger_period: f32) -> Self {
        Self {
            target: None,
            route,
            waypoint: 0,
            trigger: Cooldown::new(trigger_period),
        }
    }
}

impl Default for Scratch {
    fn default() -> Self {
        Self::new(Vec::new(), 0.0)
    }
}

/// A deferred request emitted by an action and serviced by the simulation
/// in the same tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Set the actor's velocity for this tick.
    Steer { velocity: Vec2 },
    /// Launch a projectile from the actor toward a world position.
    Fire {
        toward: Vec2,
        damage: u32,
        speed: f32,
        lifespan: f32,
    },
    /// Leave an exhaust puff behind the actor.
    EmitExhaust { fade: f32 },
}

/// Per-tick context handed to every decision and action of one actor.
pub struct AiContext {
    pub actor: ShipId,
    pub dt: f32,
    pub sensors: SensorSnapshot,
    pub scratch: Scratch,
    commands: Vec<Command>,
}

impl AiContext {
    pub fn new(actor: ShipId, dt: f32, sensors: SensorSnapshot, scratch: Scratch) -> Self {
        Self {
            actor,
            dt,
            sensors,
            scratch,
            commands: Vec::new(),
        }
    }

    /// Queues a command for the simulation to service after the graph tick.
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Tears the context down, returning the scratch to its controller and
    /// the queued commands to the simulation.
    pub fn finish(self) -> (Scratch, Vec<Command>) {
        (self.scratch, self.commands)
    }

    // ========================================================================
    // Sensor queries shared by decisions and actions
    // ========================================================================

    /// Looks up a sensed contact by id.
    pub fn contact(&self, id: ShipId) -> Option<&Contact> {
        self.sensors.contacts.iter().find(|c| c.id == id)
    }

    /// The nearest living hostile contact, if any.
    pub fn nearest_hostile(&self) -> Option<&Contact> {
        self.sensors
            .contacts
            .iter()
            .filter(|c| c.alive)
            .min_by(|a, b| {
                let da = a.position.distance_squared(self.sensors.position);
                let db = b.position.distance_squared(self.sensors.position);
                da.total_cmp(&db)
            })
    }

    /// Position of the locked target, when it is still being sensed.
    pub fn locked_target(&self) -> Option<&Contact> {
        self.scratch.target.and_then(|id| self.contact(id))
    }

    /// Squared distance from the actor to a world position.
    pub fn distance_squared_to(&self, point: Vec2) -> f32 {
        self.sensors.position.distance_squared(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(contacts: Vec<Contact>) -> SensorSnapshot {
        SensorSnapshot {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            contacts,
        }
    }

    #[test]
    fn nearest_hostile_ignores_dead_contacts() {
        let ctx = AiContext::new(
            ShipId(0),
            1.0 / 60.0,
            snapshot_with(vec![
                Contact {
                    id: ShipId(1),
                    position: Vec2::new(1.0, 0.0),
                    alive: false,
                },
                Contact {
                    id: ShipId(2),
                    position: Vec2::new(5.0, 0.0),
                    alive: true,
                },
            ]),
            Scratch::default(),
        );
        assert_eq!(ctx.nearest_hostile().map(|c| c.id), Some(ShipId(2)));
    }

    #[test]
    fn locked_target_requires_a_current_contact() {
        let mut ctx = AiContext::new(
            ShipId(0),
            1.0 / 60.0,
            snapshot_with(Vec::new()),
            Scratch::default(),
        );
        ctx.scratch.target = Some(ShipId(9));
        assert!(ctx.locked_target().is_none());
    }

    #[test]
    fn finish_returns_scratch_and_commands() {
        let mut ctx = AiContext::new(
            ShipId(0),
            1.0 / 60.0,
            snapshot_with(Vec::new()),
            Scratch::new(vec![Vec2::ONE], 2.0),
        );
        ctx.push_command(Command::EmitExhaust { fade: 0.5 });
        let (scratch, commands) = ctx.finish();
        assert_eq!(scratch.route, vec![Vec2::ONE]);
        assert_eq!(commands, vec![Command::EmitExhaust { fade: 0.5 }]);
    }
}

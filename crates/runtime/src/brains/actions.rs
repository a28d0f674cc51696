//! Action nodes for AI state graphs.
//!
//! Actions turn the current state into concrete per-tick requests: steering
//! commands and pooled-effect spawns. They never touch the world or the
//! pools directly; everything goes through the context's command queue.

use glam::Vec2;
use state_graph::Action;

use crate::context::{AiContext, Command};

/// Squared distance at which a waypoint counts as reached.
const WAYPOINT_REACHED_SQ: f32 = 0.2;

/// Cycles through the actor's patrol route at cruise speed.
///
/// Advances to the next waypoint (wrapping at the end of the route) once
/// the actor is within the reach threshold of the current one, then steers
/// toward whatever waypoint is current. An empty route is a no-op.
pub struct FollowRoute {
    /// Patrol speed in units per second.
    pub speed: f32,
}

impl Action<AiContext> for FollowRoute {
    fn act(&self, ctx: &mut AiContext) {
        if ctx.scratch.route.is_empty() {
            return;
        }
        let count = ctx.scratch.route.len();
        ctx.scratch.waypoint %= count;
        if ctx.distance_squared_to(ctx.scratch.route[ctx.scratch.waypoint]) <= WAYPOINT_REACHED_SQ
        {
            ctx.scratch.waypoint = (ctx.scratch.waypoint + 1) % count;
        }
        let goal = ctx.scratch.route[ctx.scratch.waypoint];
        ctx.push_command(Command::Steer {
            velocity: steer_toward(ctx.sensors.position, goal, self.speed),
        });
    }
}

/// Seeks the locked target's last sensed position.
///
/// With no live lock this is a no-op; the graph's liveness transition is
/// responsible for leaving the chasing state.
pub struct Chase {
    /// Pursuit speed in units per second.
    pub speed: f32,
}

impl Action<AiContext> for Chase {
    fn act(&self, ctx: &mut AiContext) {
        let goal = match ctx.locked_target() {
            Some(contact) => contact.position,
            None => return,
        };
        ctx.push_command(Command::Steer {
            velocity: steer_toward(ctx.sensors.position, goal, self.speed),
        });
    }
}

/// Fires at the locked target when in range and off cooldown.
///
/// The range and gate are re-checked here rather than trusted to the state
/// that scheduled the attack, because the target keeps moving between the
/// transition that entered this state and later ticks spent in it.
pub struct Attack {
    /// Maximum firing distance in world units.
    pub range: f32,
    /// Hull damage per hit.
    pub damage: u32,
    /// Bolt speed in units per second.
    pub projectile_speed: f32,
    /// Bolt lifespan in seconds.
    pub lifespan: f32,
}

impl Action<AiContext> for Attack {
    fn act(&self, ctx: &mut AiContext) {
        let target = match ctx.locked_target() {
            Some(contact) if contact.alive => *contact,
            _ => return,
        };
        if !ctx.scratch.trigger.ready()
            || ctx.distance_squared_to(target.position) > self.range * self.range
        {
            return;
        }
        ctx.scratch.trigger.trigger();
        ctx.push_command(Command::Fire {
            toward: target.position,
            damage: self.damage,
            speed: self.projectile_speed,
            lifespan: self.lifespan,
        });
    }
}

/// Leaves an exhaust puff each tick; pairs with high-thrust states.
pub struct EmitExhaust {
    /// Seconds a puff takes to fade out.
    pub fade: f32,
}

impl Action<AiContext> for EmitExhaust {
    fn act(&self, ctx: &mut AiContext) {
        ctx.push_command(Command::EmitExhaust { fade: self.fade });
    }
}

/// Kills thrust; pairs with station-keeping states.
pub struct HoldPosition;

impl Action<AiContext> for HoldPosition {
    fn act(&self, ctx: &mut AiContext) {
        ctx.push_command(Command::Steer {
            velocity: Vec2::ZERO,
        });
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Velocity of magnitude `speed` pointing from `from` to `goal`.
///
/// Returns zero when the two positions coincide, rather than normalizing a
/// zero-length vector.
fn steer_toward(from: Vec2, goal: Vec2, speed: f32) -> Vec2 {
    (goal - from).normalize_or_zero() * speed
}

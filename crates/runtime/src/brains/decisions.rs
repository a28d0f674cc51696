//! Decision nodes for AI state graphs.
//!
//! Decisions check the sensor snapshot and return a verdict. The only state
//! they may touch is the scratch target lock; anything they cannot resolve
//! (no contacts, dangling lock) degrades to `false` instead of faulting.

use state_graph::Decision;

use crate::context::AiContext;

/// Passes when a living hostile is within the detection ring, locking the
/// nearest one as the actor's target.
///
/// # Example
///
/// ```rust,ignore
/// // Leave patrol as soon as something hostile shows up.
/// builder.add_transition(patrol, Transition::when(ContactInRange { range: 120.0 }, chase));
/// ```
pub struct ContactInRange {
    /// Detection radius in world units.
    pub range: f32,
}

impl Decision<AiContext> for ContactInRange {
    fn decide(&self, ctx: &mut AiContext) -> bool {
        let nearest = match ctx.nearest_hostile() {
            Some(contact) => *contact,
            None => return false,
        };
        if ctx.distance_squared_to(nearest.position) > self.range * self.range {
            return false;
        }
        ctx.scratch.target = Some(nearest.id);
        true
    }
}

/// Passes while the locked target is still sensed and alive.
///
/// A stale lock (target destroyed or out of sensor coverage) is released
/// here so later sensing starts clean.
pub struct TargetAlive;

impl Decision<AiContext> for TargetAlive {
    fn decide(&self, ctx: &mut AiContext) -> bool {
        match ctx.locked_target() {
            Some(contact) if contact.alive => true,
            _ => {
                ctx.scratch.target = None;
                false
            }
        }
    }
}

/// Passes when the locked target is close enough to shoot and the weapon
/// gate is open.
pub struct TargetInAttackRange {
    /// Maximum firing distance in world units.
    pub range: f32,
}

impl Decision<AiContext> for TargetInAttackRange {
    fn decide(&self, ctx: &mut AiContext) -> bool {
        let target = match ctx.locked_target() {
            Some(contact) if contact.alive => *contact,
            _ => return false,
        };
        ctx.scratch.trigger.ready()
            && ctx.distance_squared_to(target.position) <= self.range * self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Contact, Scratch, SensorSnapshot};
    use glam::Vec2;
    use starbreak_core::ShipId;

    fn context(contacts: Vec<Contact>) -> AiContext {
        AiContext::new(
            ShipId(0),
            1.0 / 60.0,
            SensorSnapshot {
                position: Vec2::ZERO,
                velocity: Vec2::ZERO,
                contacts,
            },
            Scratch::new(Vec::new(), 1.0),
        )
    }

    fn hostile(id: u32, x: f32, alive: bool) -> Contact {
        Contact {
            id: ShipId(id),
            position: Vec2::new(x, 0.0),
            alive,
        }
    }

    #[test]
    fn contact_in_range_locks_the_nearest() {
        let mut ctx = context(vec![hostile(1, 80.0, true), hostile(2, 40.0, true)]);
        assert!(ContactInRange { range: 100.0 }.decide(&mut ctx));
        assert_eq!(ctx.scratch.target, Some(ShipId(2)));
    }

    #[test]
    fn contact_out_of_range_fails_without_locking() {
        let mut ctx = context(vec![hostile(1, 200.0, true)]);
        assert!(!ContactInRange { range: 100.0 }.decide(&mut ctx));
        assert_eq!(ctx.scratch.target, None);
    }

    #[test]
    fn dead_contacts_never_trip_detection() {
        let mut ctx = context(vec![hostile(1, 10.0, false)]);
        assert!(!ContactInRange { range: 100.0 }.decide(&mut ctx));
    }

    #[test]
    fn dangling_lock_degrades_to_false_and_releases() {
        let mut ctx = context(Vec::new());
        ctx.scratch.target = Some(ShipId(7));
        assert!(!TargetAlive.decide(&mut ctx));
        assert_eq!(ctx.scratch.target, None);
    }

    #[test]
    fn destroyed_target_releases_the_lock() {
        let mut ctx = context(vec![hostile(1, 10.0, false)]);
        ctx.scratch.target = Some(ShipId(1));
        assert!(!TargetAlive.decide(&mut ctx));
        assert_eq!(ctx.scratch.target, None);
    }

    #[test]
    fn attack_range_is_gated_by_the_cooldown() {
        let mut ctx = context(vec![hostile(1, 10.0, true)]);
        ctx.scratch.target = Some(ShipId(1));
        assert!(TargetInAttackRange { range: 50.0 }.decide(&mut ctx));

        ctx.scratch.trigger.trigger();
        assert!(!TargetInAttackRange { range: 50.0 }.decide(&mut ctx));
    }
}

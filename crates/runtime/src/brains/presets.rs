//! Complete brain definitions for ship archetypes.
//!
//! Each preset wires decisions and actions into a full graph handling all
//! situations the archetype can reach:
//!
//! ```text
//! raider()
//!   patrol ── ContactInRange ──▶ chase
//!   chase  ── !TargetAlive ────▶ patrol
//!   chase  ── TargetInAttackRange ──▶ attack
//!   attack ── !TargetAlive ────▶ patrol
//!   attack ── !TargetInAttackRange ▶ chase
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let brain = Arc::new(presets::raider(120.0, 45.0));
//! simulation.add_controller(ship_id, brain, route, 0.8)?;
//! ```

use state_graph::{GraphBuilder, StateGraph, Transition};

use super::actions::{Attack, Chase, EmitExhaust, FollowRoute, HoldPosition};
use super::decisions::{ContactInRange, TargetAlive, TargetInAttackRange};
use crate::context::AiContext;

/// A complete behavior graph over the AI context.
pub type Brain = StateGraph<AiContext>;

/// Closed set of shippable brain archetypes, used by scenario files.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BrainKind {
    Raider,
    Sentry,
}

impl BrainKind {
    /// Builds the preset graph for this archetype with default tuning.
    pub fn build(self) -> Brain {
        match self {
            Self::Raider => raider(120.0, 45.0),
            Self::Sentry => sentry(90.0, 60.0),
        }
    }
}

/// Raider: patrols a route, chases anything hostile it senses, and shoots
/// once close enough.
///
/// # Arguments
///
/// * `detection_range` - radius at which patrol breaks into pursuit
/// * `attack_range` - firing distance; also the fall-back-to-chase bound
///
/// # Behavior
///
/// 1. Patrol the route until a living hostile enters detection range
/// 2. Chase the locked target, trailing exhaust
/// 3. Attack while in range and off cooldown
/// 4. Return to patrol the moment the target dies or the lock goes stale
pub fn raider(detection_range: f32, attack_range: f32) -> Brain {
    let mut builder = GraphBuilder::new();
    let patrol = builder.add_state("patrol");
    let chase = builder.add_state("chase");
    let attack = builder.add_state("attack");

    builder.add_action(patrol, FollowRoute { speed: 40.0 });
    builder.add_transition(
        patrol,
        Transition::when(
            ContactInRange {
                range: detection_range,
            },
            chase,
        ),
    );

    builder.add_action(chase, Chase { speed: 70.0 });
    builder.add_action(chase, EmitExhaust { fade: 0.6 });
    builder.add_transition(chase, Transition::unless(TargetAlive, patrol));
    builder.add_transition(
        chase,
        Transition::when(
            TargetInAttackRange {
                range: attack_range,
            },
            attack,
        ),
    );

    // Brake to fire; chase velocity would otherwise carry the raider
    // straight through its own engagement ring.
    builder.add_action(attack, HoldPosition);
    builder.add_action(
        attack,
        Attack {
            range: attack_range,
            damage: 12,
            projectile_speed: 220.0,
            lifespan: 1.2,
        },
    );
    builder.add_transition(attack, Transition::unless(TargetAlive, patrol));
    builder.add_transition(
        attack,
        Transition::unless(
            TargetInAttackRange {
                range: attack_range,
            },
            chase,
        ),
    );

    builder.build(patrol).expect("raider graph is well-formed")
}

/// Sentry: holds position and fires on anything that strays into range.
///
/// Sentries never pursue; a target leaving the engagement ring is simply
/// dropped and the turret goes back to station-keeping.
pub fn sentry(detection_range: f32, attack_range: f32) -> Brain {
    let mut builder = GraphBuilder::new();
    let hold = builder.add_state("hold");
    let engage = builder.add_state("engage");

    builder.add_action(hold, HoldPosition);
    builder.add_transition(
        hold,
        Transition::when(
            ContactInRange {
                range: detection_range,
            },
            engage,
        ),
    );

    builder.add_action(
        engage,
        Attack {
            range: attack_range,
            damage: 8,
            projectile_speed: 260.0,
            lifespan: 0.9,
        },
    );
    builder.add_transition(engage, Transition::unless(TargetAlive, hold));
    builder.add_transition(
        engage,
        Transition::unless(
            ContactInRange {
                range: detection_range,
            },
            hold,
        ),
    );

    builder.build(hold).expect("sentry graph is well-formed")
}

//! Scenario system for ship placement and simulation setup.
//!
//! Scenarios are designer-authored RON documents: a configuration block
//! plus a list of ship placements with optional brains and patrol routes.
//! Loading is a thin layer over the in-memory construction API: everything
//! a scenario does can also be done directly against [`Simulation`].

use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use starbreak_core::{Faction, GameConfig, Ship, ShipClass, ShipId};

use crate::brains::{Brain, BrainKind};
use crate::error::RuntimeError;
use crate::simulation::Simulation;

/// One ship to place at simulation start.
///
/// Ids are allocated in list order at build time; scenario files never name
/// them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipPlacement {
    pub class: ShipClass,
    pub faction: Faction,
    pub position: Vec2,
    /// Archetype brain to attach; `None` leaves the ship uncontrolled.
    #[serde(default)]
    pub brain: Option<BrainKind>,
    /// Patrol route in visit order; empty for ships that hold station.
    #[serde(default)]
    pub route: Vec<Vec2>,
    /// Seconds between weapon triggers.
    #[serde(default = "default_trigger_period")]
    pub trigger_period: f32,
}

fn default_trigger_period() -> f32 {
    0.8
}

/// A loadable simulation setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub config: GameConfig,
    pub ships: Vec<ShipPlacement>,
}

/// Errors loading or instantiating a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to parse scenario: {0}")]
    Parse(String),

    #[error("scenario must place at least one ship")]
    NoShips,

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Scenario {
    /// Parses a scenario from RON text.
    pub fn from_ron(text: &str) -> Result<Self, ScenarioError> {
        ron::from_str(text).map_err(|e| ScenarioError::Parse(e.to_string()))
    }

    /// Instantiates a simulation with every placement spawned and wired.
    ///
    /// Brains are built once per archetype and shared between all ships of
    /// that archetype.
    pub fn build(&self) -> Result<Simulation, ScenarioError> {
        if self.ships.is_empty() {
            return Err(ScenarioError::NoShips);
        }
        let mut simulation = Simulation::new(self.config)?;
        let mut brains: HashMap<BrainKind, Arc<Brain>> = HashMap::new();

        for (index, placement) in self.ships.iter().enumerate() {
            let id = ShipId(index as u32);
            simulation.spawn_ship(Ship::new(
                id,
                placement.class,
                placement.faction,
                placement.position,
            ));
            if let Some(kind) = placement.brain {
                let brain = brains
                    .entry(kind)
                    .or_insert_with(|| Arc::new(kind.build()))
                    .clone();
                simulation.add_controller(
                    id,
                    brain,
                    placement.route.clone(),
                    placement.trigger_period,
                )?;
            }
        }

        tracing::info!(
            scenario = %self.name,
            ships = self.ships.len(),
            "scenario instantiated"
        );
        Ok(simulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = r#"
        Scenario(
            name: "ambush lane",
            ships: [
                ShipPlacement(
                    class: Hauler,
                    faction: Terran,
                    position: (60.0, 0.0),
                ),
                ShipPlacement(
                    class: Interceptor,
                    faction: Raider,
                    position: (0.0, 0.0),
                    brain: Some(Raider),
                    route: [(0.0, 0.0), (40.0, 0.0)],
                    trigger_period: 0.5,
                ),
            ],
        )
    "#;

    #[test]
    fn demo_scenario_parses_and_builds() {
        let scenario = Scenario::from_ron(DEMO).expect("parses");
        assert_eq!(scenario.name, "ambush lane");
        assert_eq!(scenario.ships.len(), 2);
        assert_eq!(scenario.ships[1].brain, Some(BrainKind::Raider));

        let simulation = scenario.build().expect("builds");
        assert_eq!(simulation.world().ships().len(), 2);
    }

    #[test]
    fn defaults_fill_in_missing_fields() {
        let scenario = Scenario::from_ron(DEMO).expect("parses");
        assert!(scenario.ships[0].brain.is_none());
        assert!(scenario.ships[0].route.is_empty());
        assert_eq!(scenario.config, GameConfig::default());
    }

    #[test]
    fn empty_roster_is_rejected() {
        let scenario = Scenario {
            name: "nothing".into(),
            config: GameConfig::default(),
            ships: Vec::new(),
        };
        assert!(matches!(scenario.build(), Err(ScenarioError::NoShips)));
    }

    #[test]
    fn malformed_ron_reports_a_parse_error() {
        let err = Scenario::from_ron("Scenario(name: )").err().expect("fails");
        assert!(matches!(err, ScenarioError::Parse(_)));
    }
}

//! Shared value types: ships, hull meters, world state.
//!
//! The world model here is deliberately thin. Decisions and actions in the
//! runtime read it through per-tick sensor snapshots; the only mutation
//! paths are motion integration and damage application, both driven by the
//! simulation loop.

use std::fmt;

use glam::Vec2;

/// Unique identifier for a ship tracked in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShipId(pub u32);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ship#{}", self.0)
    }
}

/// Discrete simulation frame counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    /// The next frame.
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer resource meter (hull integrity, shields) tracked per ship.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Meter {
    pub current: u32,
    pub maximum: u32,
}

impl Meter {
    /// A full meter.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Saturating damage application.
    pub fn apply_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Whether the meter is drained.
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

/// Allegiance of a ship; ships of different factions are hostile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Faction {
    /// The player's side.
    Terran,
    /// Pirate raiders.
    Raider,
}

impl Faction {
    /// Factions are hostile to every faction but their own.
    #[inline]
    pub fn is_hostile_to(self, other: Faction) -> bool {
        self != other
    }
}

/// Hull archetype; fixes baseline hull and thrust for a ship.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    /// Fast, fragile attack craft.
    Interceptor,
    /// Balanced patrol hull.
    Corvette,
    /// Slow freight hull, mining and cargo runs.
    Hauler,
}

impl ShipClass {
    /// Baseline hull points for the class.
    pub fn base_hull(self) -> u32 {
        match self {
            Self::Interceptor => 60,
            Self::Corvette => 120,
            Self::Hauler => 200,
        }
    }

    /// Baseline cruise speed in units per second.
    pub fn cruise_speed(self) -> f32 {
        match self {
            Self::Interceptor => 90.0,
            Self::Corvette => 55.0,
            Self::Hauler => 30.0,
        }
    }
}

/// One ship in the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub id: ShipId,
    pub class: ShipClass,
    pub faction: Faction,
    pub position: Vec2,
    pub velocity: Vec2,
    pub hull: Meter,
}

impl Ship {
    /// Creates a stationary ship with a full hull for its class.
    pub fn new(id: ShipId, class: ShipClass, faction: Faction, position: Vec2) -> Self {
        Self {
            id,
            class,
            faction,
            position,
            velocity: Vec2::ZERO,
            hull: Meter::full(class.base_hull()),
        }
    }

    /// Whether the ship still has hull left.
    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.hull.is_depleted()
    }

    /// Advances position by the current velocity. Dead ships drift no
    /// further.
    pub fn integrate(&mut self, dt: f32) {
        if self.is_alive() {
            self.position += self.velocity * dt;
        }
    }
}

/// All ships currently in the world.
///
/// Lookup is a linear scan; rosters are a handful of ships and the id space
/// is sparse once ships die, so an index map would buy nothing here.
#[derive(Clone, Debug, Default)]
pub struct WorldState {
    ships: Vec<Ship>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a ship to the world.
    pub fn spawn(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    /// Looks up a ship by id.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.id == id)
    }

    /// Looks up a ship by id for mutation.
    pub fn ship_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|ship| ship.id == id)
    }

    /// Every ship, dead or alive.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Moves every living ship by its velocity.
    pub fn integrate(&mut self, dt: f32) {
        for ship in &mut self.ships {
            ship.integrate(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_damage_saturates() {
        let mut hull = Meter::full(50);
        hull.apply_damage(30);
        hull.apply_damage(30);
        assert_eq!(hull.current, 0);
        assert!(hull.is_depleted());
    }

    #[test]
    fn factions_hostile_across_not_within() {
        assert!(Faction::Terran.is_hostile_to(Faction::Raider));
        assert!(!Faction::Raider.is_hostile_to(Faction::Raider));
    }

    #[test]
    fn dead_ships_stop_drifting() {
        let mut ship = Ship::new(
            ShipId(1),
            ShipClass::Interceptor,
            Faction::Raider,
            Vec2::ZERO,
        );
        ship.velocity = Vec2::new(10.0, 0.0);
        ship.integrate(1.0);
        assert_eq!(ship.position, Vec2::new(10.0, 0.0));

        ship.hull.apply_damage(u32::MAX);
        ship.integrate(1.0);
        assert_eq!(ship.position, Vec2::new(10.0, 0.0));
    }
}

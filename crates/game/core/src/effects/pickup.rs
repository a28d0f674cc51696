//! Pooled item pickups and credit drops.

use glam::Vec2;

use crate::pool::Recyclable;
use crate::timer::Timer;

/// What a destroyed ship or mined asteroid leaves behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickupKind {
    OreChunk,
    RepairKit,
    WeaponCell,
}

/// A collectible floating in space until someone grabs it or it despawns.
#[derive(Clone, Debug)]
pub struct Pickup {
    active: bool,
    pub kind: PickupKind,
    pub position: Vec2,
    despawn: Timer,
}

impl Pickup {
    pub fn dormant() -> Self {
        Self {
            active: false,
            kind: PickupKind::OreChunk,
            position: Vec2::ZERO,
            despawn: Timer::elapsed(),
        }
    }

    pub fn spawn(&mut self, kind: PickupKind, position: Vec2, despawn_after: f32) {
        self.active = true;
        self.kind = kind;
        self.position = position;
        self.despawn.reset(despawn_after);
    }

    pub fn update(&mut self, dt: f32) {
        if self.active && self.despawn.tick(dt) {
            self.active = false;
        }
    }
}

impl Recyclable for Pickup {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// A scatter of credits that drifts briefly and then despawns.
#[derive(Clone, Debug)]
pub struct CreditDrop {
    active: bool,
    pub value: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    despawn: Timer,
}

impl CreditDrop {
    pub fn dormant() -> Self {
        Self {
            active: false,
            value: 0,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            despawn: Timer::elapsed(),
        }
    }

    pub fn spawn(&mut self, value: u32, position: Vec2, velocity: Vec2, despawn_after: f32) {
        self.active = true;
        self.value = value;
        self.position = position;
        self.velocity = velocity;
        self.despawn.reset(despawn_after);
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.position += self.velocity * dt;
        if self.despawn.tick(dt) {
            self.active = false;
        }
    }
}

impl Recyclable for CreditDrop {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

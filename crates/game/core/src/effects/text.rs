//! Pooled floating combat text.

use glam::Vec2;

use crate::pool::Recyclable;
use crate::timer::Timer;

/// A short-lived text label rising from a world position.
///
/// The text buffer is owned by the slot and reused across spawns, so
/// recycling a label does not allocate unless the new message is longer
/// than any message the slot has held before.
#[derive(Clone, Debug)]
pub struct FloatingText {
    active: bool,
    pub position: Vec2,
    pub rise_speed: f32,
    text: String,
    life: Timer,
}

impl FloatingText {
    pub fn dormant() -> Self {
        Self {
            active: false,
            position: Vec2::ZERO,
            rise_speed: 0.0,
            text: String::new(),
            life: Timer::elapsed(),
        }
    }

    pub fn spawn(&mut self, message: &str, position: Vec2, rise_speed: f32, hold: f32) {
        self.active = true;
        self.position = position;
        self.rise_speed = rise_speed;
        self.text.clear();
        self.text.push_str(message);
        self.life.reset(hold);
    }

    /// The displayed message.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.position.y += self.rise_speed * dt;
        if self.life.tick(dt) {
            self.active = false;
        }
    }
}

impl Recyclable for FloatingText {
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
    fn rises_then_expires() {
        let mut label = FloatingText::dormant();
        label.spawn("-12", Vec2::ZERO, 4.0, 0.5);
        label.update(0.25);
        assert_eq!(label.text(), "-12");
        assert_eq!(label.position, Vec2::new(0.0, 1.0));
        label.update(0.3);
        assert!(!label.is_active());
    }

    #[test]
    fn respawn_replaces_previous_message() {
        let mut label = FloatingText::dormant();
        label.spawn("-120", Vec2::ZERO, 4.0, 0.5);
        label.deactivate();
        label.spawn("+5", Vec2::ZERO, 4.0, 0.5);
        assert_eq!(label.text(), "+5");
    }
}

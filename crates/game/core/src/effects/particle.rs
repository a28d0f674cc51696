//! Pooled exhaust particle.

use glam::Vec2;

use crate::pool::Recyclable;
use crate::timer::Timer;

/// One puff of engine exhaust.
///
/// Drifts opposite the emitting ship's thrust and fades out over its
/// lifetime; `intensity` is what a renderer would use as alpha.
#[derive(Clone, Debug)]
pub struct ExhaustParticle {
    active: bool,
    pub position: Vec2,
    pub velocity: Vec2,
    fade: Timer,
}

impl ExhaustParticle {
    pub fn dormant() -> Self {
        Self {
            active: false,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            fade: Timer::elapsed(),
        }
    }

    pub fn spawn(&mut self, position: Vec2, velocity: Vec2, fade_time: f32) {
        self.active = true;
        self.position = position;
        self.velocity = velocity;
        self.fade.reset(fade_time);
    }

    /// Remaining fade fraction, 1.0 at spawn down to 0.0 at expiry.
    pub fn intensity(&self) -> f32 {
        self.fade.fraction_remaining()
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.position += self.velocity * dt;
        if self.fade.tick(dt) {
            self.active = false;
        }
    }
}

impl Recyclable for ExhaustParticle {
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
    fn fades_then_deactivates() {
        let mut puff = ExhaustParticle::dormant();
        puff.spawn(Vec2::ZERO, Vec2::new(0.0, -5.0), 0.4);
        puff.update(0.2);
        assert!(puff.is_active());
        assert!((puff.intensity() - 0.5).abs() < 1e-6);
        puff.update(0.3);
        assert!(!puff.is_active());
        assert_eq!(puff.intensity(), 0.0);
    }
}

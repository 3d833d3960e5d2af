//! Movement seam between patrol control and navigation

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Movement capability a patrol controller drives.
///
/// The controller only ever reads a position and forwards move-toward
/// commands. Whatever actually does the walking (a kinematic mover, a
/// physics body, a test double) lives behind this seam.
pub trait MovementActor {
    /// Current world-space position
    fn position(&self) -> Vec2;

    /// Advance toward `target` for one tick of duration `dt`
    fn move_toward(&mut self, target: Vec2, dt: f32);
}

/// Straight-line constant-speed mover.
///
/// Steps directly at the target each tick. The final step is clamped so the
/// actor lands on the target instead of oscillating across it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinematicActor {
    pub position: Vec2,
    /// Movement speed in world units per tick
    pub speed: f32,
}

impl KinematicActor {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self { position, speed }
    }
}

impl MovementActor for KinematicActor {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn move_toward(&mut self, target: Vec2, dt: f32) {
        let offset = target - self.position;
        let distance = offset.length();
        if distance <= 1e-4 {
            self.position = target;
            return;
        }
        let step = (self.speed * dt).min(distance);
        self.position += offset / distance * step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_steps_at_speed_toward_target() {
        let mut actor = KinematicActor::new(Vec2::ZERO, 2.0);
        actor.move_toward(Vec2::new(10.0, 0.0), 1.0);
        assert!((actor.position.x - 2.0).abs() < 1e-5);
        assert_eq!(actor.position.y, 0.0);
    }

    #[test]
    fn test_final_step_is_clamped_to_target() {
        let mut actor = KinematicActor::new(Vec2::new(9.5, 0.0), 2.0);
        actor.move_toward(Vec2::new(10.0, 0.0), 1.0);
        assert!((actor.position.x - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_move_toward_own_position_is_a_noop() {
        let mut actor = KinematicActor::new(Vec2::new(3.0, 4.0), 2.0);
        actor.move_toward(Vec2::new(3.0, 4.0), 1.0);
        assert_eq!(actor.position, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_dt_scales_the_step() {
        let mut actor = KinematicActor::new(Vec2::ZERO, 2.0);
        actor.move_toward(Vec2::new(10.0, 0.0), 0.5);
        assert!((actor.position.x - 1.0).abs() < 1e-5);
    }
}

//! Pooled projectiles and the emplacements that fire them

pub mod emplacement;

pub use emplacement::Emplacement;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, PoolId};
use crate::pool::Poolable;

/// A pooled projectile.
///
/// Position, velocity, and a tick-denominated lifetime are the whole of its
/// domain state. All three are stale after a trip through the pool;
/// [`launch`](Self::launch) overwrites them before the next flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: EntityId,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining flight time in ticks; the projectile expires at zero
    pub lifetime: u32,
    active: bool,
    home: Option<PoolId>,
}

impl Projectile {
    /// Build an inert projectile. This is the pool factory entry point.
    pub fn new() -> Self {
        Self {
            id: EntityId::new(),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            lifetime: 0,
            active: false,
            home: None,
        }
    }

    /// Caller-side reinitialization after acquire.
    ///
    /// The pool hands entities back with whatever state their last flight
    /// left behind; launching replaces all of it.
    pub fn launch(&mut self, origin: Vec2, velocity: Vec2, lifetime: u32) {
        self.position = origin;
        self.velocity = velocity;
        self.lifetime = lifetime;
    }

    /// Integrate one tick of flight and burn one tick of lifetime
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.lifetime = self.lifetime.saturating_sub(1);
    }

    /// Whether the projectile has used up its flight time
    pub fn expired(&self) -> bool {
        self.lifetime == 0
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new()
    }
}

impl Poolable for Projectile {
    fn activate(&mut self) {
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn assign_home(&mut self, pool: PoolId) {
        self.home = Some(pool);
    }

    fn home(&self) -> Option<PoolId> {
        self.home
    }
}

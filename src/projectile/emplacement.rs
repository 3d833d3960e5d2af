//! Fixed emplacements that fire projectile volleys on a timer

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::Tick;
use crate::pool::ObjectPool;
use crate::projectile::Projectile;

/// A stationary volley gun.
///
/// The emplacement is the pool's spawner-side caller: when a volley is due
/// it acquires projectiles, performs the caller-side launch
/// reinitialization, and hands the live projectiles to whoever owns the
/// in-flight set. It never keeps a projectile for itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emplacement {
    pub position: Vec2,
    /// Point the volley is aimed at
    pub aim: Vec2,
    /// Ticks between volleys
    pub fire_interval: Tick,
    /// Projectiles per volley
    pub volley_size: usize,
    /// Half-angle of the spread cone in radians
    pub spread: f32,
    next_volley_at: Tick,
}

impl Emplacement {
    pub fn new(
        position: Vec2,
        aim: Vec2,
        fire_interval: Tick,
        volley_size: usize,
        spread: f32,
    ) -> Self {
        Self {
            position,
            aim,
            fire_interval,
            volley_size,
            spread,
            next_volley_at: 0,
        }
    }

    /// Whether a volley is due at `tick`
    pub fn ready(&self, tick: Tick) -> bool {
        tick >= self.next_volley_at
    }

    /// Acquire, launch, and return one volley.
    ///
    /// Each projectile's heading is the aim direction jittered by a uniform
    /// draw from [-spread, spread]. The volley timer resets relative to
    /// `tick`, not to the last scheduled time, so a stalled emplacement
    /// does not fire a burst of make-up volleys.
    pub fn fire(
        &mut self,
        pool: &mut ObjectPool<Projectile>,
        speed: f32,
        lifetime: u32,
        tick: Tick,
        rng: &mut ChaCha8Rng,
    ) -> Vec<Projectile> {
        let heading = (self.aim - self.position).normalize_or_zero();
        let mut volley = Vec::with_capacity(self.volley_size);

        for _ in 0..self.volley_size {
            let jitter = if self.spread > 0.0 {
                rng.gen_range(-self.spread..=self.spread)
            } else {
                0.0
            };
            let direction = Vec2::from_angle(jitter).rotate(heading);

            let mut projectile = pool.acquire();
            projectile.launch(self.position, direction * speed, lifetime);
            volley.push(projectile);
        }

        self.next_volley_at = tick + self.fire_interval;
        tracing::debug!(
            "emplacement at {:?} fired {} projectiles, next volley at tick {}",
            self.position,
            volley.len(),
            self.next_volley_at
        );
        volley
    }
}

//! Simulation world - owns every long-lived piece of the watch

use ahash::AHashMap;
use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::core::types::{EntityId, Tick};
use crate::patrol::{KinematicActor, PatrolAgent, PatrolRoute};
use crate::pool::ObjectPool;
use crate::projectile::{Emplacement, Projectile};

/// One patrol unit: a movement actor plus the controller driving it
#[derive(Debug, Clone)]
pub struct Sentry {
    pub id: EntityId,
    pub name: String,
    pub actor: KinematicActor,
    pub agent: PatrolAgent,
}

/// The perimeter watch.
///
/// Owns the sentries, the emplacements, the projectile pool, and the
/// in-flight set. The in-flight set is the pool's external caller: every
/// projectile the pool hands out lives here until it expires and is
/// released back.
pub struct World {
    pub current_tick: Tick,
    pub config: SimulationConfig,
    pub sentries: Vec<Sentry>,
    pub emplacements: Vec<Emplacement>,
    pub projectile_pool: ObjectPool<Projectile>,
    pub in_flight: Vec<Projectile>,
    pub rng: ChaCha8Rng,
    sentry_registry: AHashMap<EntityId, usize>,
}

impl World {
    /// Build a world from a config and a deterministic seed.
    ///
    /// The pool is preloaded per the config so early volleys reuse instead
    /// of construct.
    pub fn new(config: SimulationConfig, seed: u64) -> Self {
        let mut projectile_pool = ObjectPool::new("projectiles", Projectile::new);
        projectile_pool.preload(config.pool_preload);

        Self {
            current_tick: 0,
            config,
            sentries: Vec::new(),
            emplacements: Vec::new(),
            projectile_pool,
            in_flight: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            sentry_registry: AHashMap::new(),
        }
    }

    /// Add a sentry walking `route`, posted at waypoint `start_index`.
    ///
    /// The actor is placed on its starting waypoint, so its first tick is
    /// an arrival that swings it toward the next one.
    pub fn spawn_sentry(
        &mut self,
        name: impl Into<String>,
        route: PatrolRoute,
        start_index: usize,
    ) -> EntityId {
        let id = EntityId::new();
        let post = route.waypoint(start_index);
        let agent = PatrolAgent::with_start_index(route, self.config.arrival_threshold, start_index);
        let actor = KinematicActor::new(post, self.config.sentry_speed);

        self.sentry_registry.insert(id, self.sentries.len());
        self.sentries.push(Sentry {
            id,
            name: name.into(),
            actor,
            agent,
        });
        id
    }

    /// Add an emplacement firing from `position` toward `aim`.
    ///
    /// Cadence, volley size, and spread come from the config. Returns the
    /// emplacement's index.
    pub fn spawn_emplacement(&mut self, position: Vec2, aim: Vec2) -> usize {
        self.emplacements.push(Emplacement::new(
            position,
            aim,
            self.config.fire_interval,
            self.config.volley_size,
            self.config.volley_spread,
        ));
        self.emplacements.len() - 1
    }

    /// Look up a sentry by id
    pub fn sentry(&self, id: EntityId) -> Option<&Sentry> {
        self.sentry_registry
            .get(&id)
            .and_then(|&index| self.sentries.get(index))
    }

    /// Index of a sentry in the sentries list
    pub fn sentry_index(&self, id: EntityId) -> Option<usize> {
        self.sentry_registry.get(&id).copied()
    }

    pub fn sentry_count(&self) -> usize {
        self.sentries.len()
    }

    /// Advance the tick counter
    pub fn advance_tick(&mut self) {
        self.current_tick += 1;
    }
}

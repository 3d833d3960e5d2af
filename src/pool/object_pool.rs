//! Reusable-entity allocator with a LIFO free list
//!
//! The pool trades steady-state allocation for reuse: entities that finish
//! their lifetime come back to the free list instead of being dropped, and
//! the next acquire hands the most recently returned one out again. The
//! pool never fails to produce an entity and never shrinks; its footprint
//! is the high-water mark of concurrent demand.
//!
//! Ownership moves with the entity. Acquire transfers the entity to the
//! caller, release transfers it back, so holding a stale handle to a
//! released entity is not representable.

use std::fmt;

use crate::core::types::PoolId;
use crate::pool::poolable::Poolable;
use crate::pool::snapshot::PoolSnapshot;

/// Grow-only pool of reusable entities.
///
/// Entities are built by the factory on demand, tagged with this pool's id,
/// and cycled through the free list as callers acquire and release them.
pub struct ObjectPool<T: Poolable> {
    id: PoolId,
    label: String,
    free: Vec<T>,
    factory: Box<dyn FnMut() -> T>,
    total_built: usize,
    live: usize,
    high_water: usize,
}

impl<T: Poolable> ObjectPool<T> {
    /// Create an empty pool around a factory.
    ///
    /// The label shows up in logs and snapshots; it has no behavioral role.
    pub fn new(label: impl Into<String>, factory: impl FnMut() -> T + 'static) -> Self {
        Self {
            id: PoolId::new(),
            label: label.into(),
            free: Vec::new(),
            factory: Box::new(factory),
            total_built: 0,
            live: 0,
            high_water: 0,
        }
    }

    /// Build `count` inert entities into the free list up front.
    ///
    /// Moves factory work to startup so the first volleys reuse instead of
    /// construct. The pool still grows on demand if demand outruns this.
    pub fn preload(&mut self, count: usize) {
        self.free.reserve(count);
        for _ in 0..count {
            let mut entity = (self.factory)();
            entity.assign_home(self.id);
            entity.deactivate();
            self.free.push(entity);
            self.total_built += 1;
        }
        tracing::debug!(
            "pool '{}' preloaded {} entities ({} built total)",
            self.label,
            count,
            self.total_built
        );
    }

    /// Hand out an entity, most recently returned first.
    ///
    /// Pops the free list when it has stock and runs the factory when it
    /// does not, so acquisition never fails. The entity comes back activated
    /// but otherwise untouched: reinitializing domain state is the caller's
    /// job.
    pub fn acquire(&mut self) -> T {
        let mut entity = match self.free.pop() {
            Some(entity) => entity,
            None => {
                let mut built = (self.factory)();
                built.assign_home(self.id);
                self.total_built += 1;
                tracing::debug!(
                    "pool '{}' grew: {} entities built",
                    self.label,
                    self.total_built
                );
                built
            }
        };
        entity.activate();
        self.live += 1;
        if self.live > self.high_water {
            self.high_water = self.live;
        }
        entity
    }

    /// Take an entity back into the free list.
    ///
    /// Deactivates it and pushes it on top, making it first in line for the
    /// next acquire. Domain state is left as the caller's last use wrote it.
    pub fn release(&mut self, mut entity: T) {
        debug_assert_eq!(
            entity.home(),
            Some(self.id),
            "entity released into a pool that did not build it"
        );
        entity.deactivate();
        self.free.push(entity);
        self.live = self.live.saturating_sub(1);
    }

    /// Capture the pool's persistent state.
    ///
    /// Only the free list is the pool's to save. Entities out with callers
    /// are owned by those callers and must be persisted by whoever holds
    /// them.
    pub fn snapshot(&self) -> PoolSnapshot<T>
    where
        T: Clone,
    {
        PoolSnapshot {
            id: self.id,
            label: self.label.clone(),
            free: self.free.clone(),
        }
    }

    /// Rebuild a pool from a snapshot.
    ///
    /// Every stored entry comes back in its saved stack position, re-tagged
    /// and deactivated so the free-list invariants hold no matter what the
    /// serialized entities carried. Counters restart: nothing is live, and
    /// total_built counts only what the snapshot holds.
    pub fn restore(snapshot: PoolSnapshot<T>, factory: impl FnMut() -> T + 'static) -> Self {
        let PoolSnapshot { id, label, free } = snapshot;
        let total_built = free.len();
        let mut pool = Self {
            id,
            label,
            free,
            factory: Box::new(factory),
            total_built,
            live: 0,
            high_water: 0,
        };
        for entity in &mut pool.free {
            entity.assign_home(id);
            entity.deactivate();
        }
        tracing::debug!(
            "pool '{}' restored with {} entities on the free list",
            pool.label,
            pool.total_built
        );
        pool
    }

    pub fn id(&self) -> PoolId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Entities currently sitting on the free list
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Entities currently out with callers
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Entities the factory has ever built for this pool (monotonic)
    pub fn total_built(&self) -> usize {
        self.total_built
    }

    /// Peak concurrent live count over the pool's lifetime
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Iterate the free list from oldest to most recently returned
    pub fn free_entities(&self) -> impl Iterator<Item = &T> {
        self.free.iter()
    }
}

// Manual impl: the factory closure has no Debug
impl<T: Poolable> fmt::Debug for ObjectPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("free", &self.free.len())
            .field("live", &self.live)
            .field("total_built", &self.total_built)
            .field("high_water", &self.high_water)
            .finish()
    }
}

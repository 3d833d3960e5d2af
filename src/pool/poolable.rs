//! Capability contract for pool-managed entities

use crate::core::types::PoolId;

/// Behavior an entity must expose to live in an object pool.
///
/// The pool only ever touches activation state and the home tag. Domain
/// state (position, velocity, timers) is deliberately left alone: an entity
/// coming out of the pool carries whatever its last use wrote, and the
/// caller reinitializes it before use.
pub trait Poolable {
    /// Bring the entity into service. The pool calls this during acquire.
    fn activate(&mut self);

    /// Take the entity out of service. The pool calls this during release.
    fn deactivate(&mut self);

    /// Whether the entity is currently in service
    fn is_active(&self) -> bool;

    /// Record the pool this entity returns to when its lifetime ends
    fn assign_home(&mut self, pool: PoolId);

    /// The pool this entity returns to, if it has ever been pooled
    fn home(&self) -> Option<PoolId>;
}

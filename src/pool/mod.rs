//! Object pooling - reusable entities behind a LIFO free list

pub mod object_pool;
pub mod poolable;
pub mod snapshot;

pub use object_pool::ObjectPool;
pub use poolable::Poolable;
pub use snapshot::PoolSnapshot;

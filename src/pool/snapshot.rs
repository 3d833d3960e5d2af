//! Serialized pool state
//!
//! The pool itself holds a factory closure and so cannot derive serde.
//! Persistence goes through this plain-data snapshot instead: capture with
//! [`ObjectPool::snapshot`], store it however you like (the simulation uses
//! JSON), and rebuild with [`ObjectPool::restore`] plus a fresh factory.
//!
//! [`ObjectPool::snapshot`]: crate::pool::ObjectPool::snapshot
//! [`ObjectPool::restore`]: crate::pool::ObjectPool::restore

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::PoolId;

/// The persistent half of an object pool: its identity and free list.
///
/// Live entities are owned by their callers and are not part of this
/// snapshot. The free list is stored bottom-up, so restore preserves LIFO
/// order exactly: the entity on top of the stack going in is the first one
/// acquired coming out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSnapshot<T> {
    pub id: PoolId,
    pub label: String,
    pub free: Vec<T>,
}

impl<T> PoolSnapshot<T> {
    /// Number of entities stored in the snapshot
    pub fn stored(&self) -> usize {
        self.free.len()
    }
}

impl<T: Serialize> PoolSnapshot<T> {
    /// Serialize the snapshot to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> PoolSnapshot<T> {
    /// Parse a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

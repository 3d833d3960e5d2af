//! Closed waypoint circuits

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::error::{PalisadeError, Result};

/// An ordered, cyclic sequence of patrol positions.
///
/// Non-empty by construction. Indexing wraps modulo the circuit length, so
/// a patrol walks the circuit forever instead of running off the end.
/// Serde round-trips the route as a bare waypoint list, funneled through
/// the same non-empty check as [`new`](Self::new), so a persisted circuit
/// cannot come back empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct PatrolRoute {
    waypoints: Vec<Vec2>,
}

impl PatrolRoute {
    /// Build a circuit from a waypoint list. Rejects an empty list: a
    /// patrol with nowhere to go is a setup error, not a runtime state.
    pub fn new(waypoints: Vec<Vec2>) -> Result<Self> {
        if waypoints.is_empty() {
            return Err(PalisadeError::EmptyCircuit);
        }
        Ok(Self { waypoints })
    }

    /// Number of waypoints on the circuit
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false: construction and deserialization both reject the
    /// empty list
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoint at `index`, wrapping modulo the circuit length
    pub fn waypoint(&self, index: usize) -> Vec2 {
        self.waypoints[index % self.waypoints.len()]
    }

    /// Index that follows `index` on the closed circuit
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.waypoints.len()
    }

    /// Iterate the circuit in patrol order
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.waypoints.iter()
    }
}

impl TryFrom<Vec<Vec2>> for PatrolRoute {
    type Error = PalisadeError;

    fn try_from(waypoints: Vec<Vec2>) -> Result<Self> {
        Self::new(waypoints)
    }
}

impl From<PatrolRoute> for Vec<Vec2> {
    fn from(route: PatrolRoute) -> Self {
        route.waypoints
    }
}

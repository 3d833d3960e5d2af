//! Palisade - Perimeter Watch Simulation

pub mod core;
pub mod patrol;
pub mod pool;
pub mod projectile;
pub mod simulation;

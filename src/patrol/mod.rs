//! Waypoint patrols - circuits, the movement seam, and the controller

pub mod actor;
pub mod agent;
pub mod route;

pub use actor::{KinematicActor, MovementActor};
pub use agent::{PatrolAgent, PatrolStep};
pub use route::PatrolRoute;

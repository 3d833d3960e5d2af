pub mod tick;
pub mod world;

pub use tick::{run_simulation_tick, SimulationEvent};
pub use world::{Sentry, World};

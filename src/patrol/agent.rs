//! Patrol controller
//!
//! One behavior with a self-loop: approach the current waypoint until the
//! actor is within the arrival threshold, then advance the target index
//! (wrapping at the end of the circuit) and approach the next. Arrival and
//! advancement happen on the same tick, and that tick issues no move
//! command; the actor starts toward the new target on the following tick.

use glam::Vec2;

use crate::patrol::actor::MovementActor;
use crate::patrol::route::PatrolRoute;

/// What happened during one patrol tick
#[derive(Debug, Clone, Default)]
pub struct PatrolStep {
    /// First tick of this patrol
    pub started: bool,
    /// Waypoint index the agent arrived at this tick
    pub reached: Option<usize>,
    /// New target index after an arrival
    pub advanced_to: Option<usize>,
    /// The arrival closed a full lap of the circuit
    pub completed_circuit: bool,
}

/// Drives a movement actor around a closed waypoint circuit.
///
/// The agent holds the circuit, the current target index, and the arrival
/// threshold. It owns no position of its own; the actor passed to
/// [`tick`](Self::tick) is the thing that moves.
#[derive(Debug, Clone)]
pub struct PatrolAgent {
    route: PatrolRoute,
    current_waypoint: usize,
    arrival_threshold: f32,
    circuits_completed: u32,
    started: bool,
}

impl PatrolAgent {
    /// Create an agent targeting waypoint 0 of `route`
    pub fn new(route: PatrolRoute, arrival_threshold: f32) -> Self {
        Self {
            route,
            current_waypoint: 0,
            arrival_threshold,
            circuits_completed: 0,
            started: false,
        }
    }

    /// Create an agent starting partway around the circuit.
    ///
    /// Useful for staggering several sentries along one route. The start
    /// index wraps like any other.
    pub fn with_start_index(route: PatrolRoute, arrival_threshold: f32, start: usize) -> Self {
        let current_waypoint = start % route.len();
        Self {
            route,
            current_waypoint,
            arrival_threshold,
            circuits_completed: 0,
            started: false,
        }
    }

    pub fn route(&self) -> &PatrolRoute {
        &self.route
    }

    /// Index of the waypoint currently being approached
    pub fn current_waypoint(&self) -> usize {
        self.current_waypoint
    }

    /// Position of the waypoint currently being approached
    pub fn current_target(&self) -> Vec2 {
        self.route.waypoint(self.current_waypoint)
    }

    /// Full laps of the circuit closed so far
    pub fn circuits_completed(&self) -> u32 {
        self.circuits_completed
    }

    /// Advance the patrol by one tick.
    ///
    /// Within the arrival threshold of the target: record the arrival,
    /// advance the index, and leave the actor where it stands. Otherwise:
    /// command the actor toward the target. Exactly one of the two happens
    /// per tick.
    pub fn tick(&mut self, actor: &mut impl MovementActor, dt: f32) -> PatrolStep {
        let mut step = PatrolStep::default();

        if !self.started {
            self.started = true;
            step.started = true;
            tracing::debug!(
                "patrol starting toward waypoint {} of {}",
                self.current_waypoint,
                self.route.len()
            );
        }

        let target = self.route.waypoint(self.current_waypoint);
        if actor.position().distance(target) <= self.arrival_threshold {
            step.reached = Some(self.current_waypoint);
            if self.current_waypoint == self.route.len() - 1 {
                self.circuits_completed += 1;
                step.completed_circuit = true;
            }
            self.current_waypoint = self.route.next_index(self.current_waypoint);
            step.advanced_to = Some(self.current_waypoint);
            // No move command on the arrival tick
        } else {
            actor.move_toward(target, dt);
        }

        step
    }
}

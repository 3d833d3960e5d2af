//! Tick system - orchestrates simulation updates
//!
//! One tick runs the systems in a fixed order:
//! patrol movement -> volley fire -> flight integration -> reclamation
//!
//! Everything runs synchronously on the caller's thread; calling
//! `run_simulation_tick` in a loop is the whole simulation.

use crate::core::types::Tick;
use crate::simulation::world::World;

/// How often pool gauges are logged, in ticks
const POOL_LOG_INTERVAL: Tick = 100;

/// Events generated during a simulation tick
///
/// Returned by `run_simulation_tick` for the runner's event log.
#[derive(Debug, Clone)]
pub enum SimulationEvent {
    /// A sentry's patrol ran its first tick
    PatrolStarted {
        sentry_name: String,
        /// Index into the sentries list (names may repeat)
        sentry_idx: usize,
        /// Waypoints on the sentry's circuit
        route_len: usize,
        tick: Tick,
    },
    /// A sentry came within the arrival threshold of its target waypoint
    WaypointReached {
        sentry_name: String,
        sentry_idx: usize,
        /// Waypoint that was reached
        waypoint: usize,
        /// Waypoint the sentry turns toward next
        next_target: usize,
        tick: Tick,
    },
    /// A sentry closed a full lap of its circuit
    CircuitCompleted {
        sentry_name: String,
        sentry_idx: usize,
        /// Total laps this sentry has closed
        circuits: u32,
        tick: Tick,
    },
    /// An emplacement fired a volley
    VolleyFired {
        emplacement_idx: usize,
        launched: usize,
        /// Projectiles that came off the pool's free list
        reused: usize,
        /// Projectiles the pool factory had to build
        constructed: usize,
        tick: Tick,
    },
    /// Expired projectiles were returned to their home pool
    ProjectilesReclaimed {
        reclaimed: usize,
        /// Projectiles still in flight after reclamation
        in_flight: usize,
        tick: Tick,
    },
}

/// Run a single simulation tick
///
/// Fire happens after patrol movement so a volley's projectiles integrate
/// their first step on the tick they launch. Reclamation runs last, so a
/// projectile with a lifetime of N ticks is reclaimed at the end of its
/// Nth tick of flight.
pub fn run_simulation_tick(world: &mut World) -> Vec<SimulationEvent> {
    let mut events = Vec::new();

    advance_patrols(world, &mut events);
    fire_due_emplacements(world, &mut events);
    advance_projectiles(world);
    reclaim_expired(world, &mut events);

    if world.current_tick % POOL_LOG_INTERVAL == 0 {
        let pool = &world.projectile_pool;
        tracing::debug!(
            "tick {}: pool '{}' free={} live={} built={} high_water={}",
            world.current_tick,
            pool.label(),
            pool.free_count(),
            pool.live_count(),
            pool.total_built(),
            pool.high_water()
        );
    }

    world.advance_tick();
    events
}

/// Advance every sentry's patrol by one tick
fn advance_patrols(world: &mut World, events: &mut Vec<SimulationEvent>) {
    let tick = world.current_tick;

    for (sentry_idx, sentry) in world.sentries.iter_mut().enumerate() {
        let step = sentry.agent.tick(&mut sentry.actor, 1.0);

        if step.started {
            events.push(SimulationEvent::PatrolStarted {
                sentry_name: sentry.name.clone(),
                sentry_idx,
                route_len: sentry.agent.route().len(),
                tick,
            });
        }

        if let (Some(waypoint), Some(next_target)) = (step.reached, step.advanced_to) {
            tracing::debug!(
                "{} reached waypoint {}, turning toward {}",
                sentry.name,
                waypoint,
                next_target
            );
            events.push(SimulationEvent::WaypointReached {
                sentry_name: sentry.name.clone(),
                sentry_idx,
                waypoint,
                next_target,
                tick,
            });
        }

        if step.completed_circuit {
            events.push(SimulationEvent::CircuitCompleted {
                sentry_name: sentry.name.clone(),
                sentry_idx,
                circuits: sentry.agent.circuits_completed(),
                tick,
            });
        }
    }
}

/// Fire every emplacement whose volley timer has come due
fn fire_due_emplacements(world: &mut World, events: &mut Vec<SimulationEvent>) {
    let tick = world.current_tick;

    for emplacement_idx in 0..world.emplacements.len() {
        if !world.emplacements[emplacement_idx].ready(tick) {
            continue;
        }

        let built_before = world.projectile_pool.total_built();
        let volley = world.emplacements[emplacement_idx].fire(
            &mut world.projectile_pool,
            world.config.projectile_speed,
            world.config.projectile_lifetime,
            tick,
            &mut world.rng,
        );
        let constructed = world.projectile_pool.total_built() - built_before;
        let launched = volley.len();

        events.push(SimulationEvent::VolleyFired {
            emplacement_idx,
            launched,
            reused: launched - constructed,
            constructed,
            tick,
        });
        world.in_flight.extend(volley);
    }
}

/// Integrate one tick of flight for every projectile in the air
fn advance_projectiles(world: &mut World) {
    for projectile in world.in_flight.iter_mut() {
        projectile.advance(1.0);
    }
}

/// Release expired projectiles back to the pool that built them
fn reclaim_expired(world: &mut World, events: &mut Vec<SimulationEvent>) {
    let tick = world.current_tick;
    let mut reclaimed = 0usize;

    let mut index = 0;
    while index < world.in_flight.len() {
        if world.in_flight[index].expired() {
            let projectile = world.in_flight.swap_remove(index);
            world.projectile_pool.release(projectile);
            reclaimed += 1;
        } else {
            index += 1;
        }
    }

    if reclaimed > 0 {
        events.push(SimulationEvent::ProjectilesReclaimed {
            reclaimed,
            in_flight: world.in_flight.len(),
            tick,
        });
    }
}

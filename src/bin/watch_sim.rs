//! Headless Watch Runner
//!
//! Runs the perimeter watch for a fixed number of ticks and outputs patrol
//! and pool statistics as JSON for tuning runs.

use clap::Parser;
use glam::Vec2;
use palisade::core::config::SimulationConfig;
use palisade::patrol::PatrolRoute;
use palisade::simulation::{run_simulation_tick, SimulationEvent, World};
use serde::Serialize;

/// Headless Watch Runner - patrol and pool statistics over a fixed run
#[derive(Parser, Debug)]
#[command(name = "watch_sim")]
#[command(about = "Run the perimeter watch headless and output pool/patrol statistics")]
struct Args {
    /// Ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Sentries posted on the perimeter
    #[arg(long, default_value_t = 3)]
    sentries: usize,

    /// Half-extent of the square perimeter in world units
    #[arg(long, default_value_t = 40.0)]
    perimeter: f32,

    /// Emplacements firing across the yard
    #[arg(long, default_value_t = 1)]
    emplacements: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file overriding simulation defaults
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print every simulation event to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct WatchReport {
    ticks: u64,
    sentries: usize,
    emplacements: usize,
    waypoints_reached: usize,
    circuits_completed: usize,
    volleys_fired: usize,
    projectiles_launched: usize,
    projectiles_reused: usize,
    projectiles_constructed: usize,
    projectiles_reclaimed: usize,
    pool_free: usize,
    pool_live: usize,
    pool_total_built: usize,
    pool_high_water: usize,
    seed: u64,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    // Determine seed
    let seed = args.seed.unwrap_or_else(|| rand::random());

    // Load config
    let config = match &args.config {
        Some(path) => SimulationConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Warning: failed to load config {:?}: {}", path, e);
            eprintln!("Using default configuration");
            SimulationConfig::default()
        }),
        None => SimulationConfig::default(),
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let mut world = World::new(config, seed);

    // Square perimeter circuit, sentries staggered around its corners
    let half = args.perimeter;
    let corners = vec![
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ];
    for i in 0..args.sentries {
        let route = PatrolRoute::new(corners.clone()).expect("perimeter circuit is non-empty");
        world.spawn_sentry(format!("Sentry-{}", i + 1), route, i % corners.len());
    }

    // Emplacements in the yard, each aimed at a different corner
    for i in 0..args.emplacements {
        let aim = corners[i % corners.len()];
        world.spawn_emplacement(Vec2::ZERO, aim);
    }

    // Run the watch
    let mut waypoints_reached = 0usize;
    let mut circuits_completed = 0usize;
    let mut volleys_fired = 0usize;
    let mut projectiles_launched = 0usize;
    let mut projectiles_reused = 0usize;
    let mut projectiles_constructed = 0usize;
    let mut projectiles_reclaimed = 0usize;

    for _ in 0..args.ticks {
        let events = run_simulation_tick(&mut world);
        for event in &events {
            if args.verbose {
                eprintln!("  {:?}", event);
            }
            match event {
                SimulationEvent::PatrolStarted { .. } => {}
                SimulationEvent::WaypointReached { .. } => waypoints_reached += 1,
                SimulationEvent::CircuitCompleted { .. } => circuits_completed += 1,
                SimulationEvent::VolleyFired {
                    launched,
                    reused,
                    constructed,
                    ..
                } => {
                    volleys_fired += 1;
                    projectiles_launched += launched;
                    projectiles_reused += reused;
                    projectiles_constructed += constructed;
                }
                SimulationEvent::ProjectilesReclaimed { reclaimed, .. } => {
                    projectiles_reclaimed += reclaimed;
                }
            }
        }
    }

    // Output result
    let report = WatchReport {
        ticks: args.ticks,
        sentries: world.sentry_count(),
        emplacements: world.emplacements.len(),
        waypoints_reached,
        circuits_completed,
        volleys_fired,
        projectiles_launched,
        projectiles_reused,
        projectiles_constructed,
        projectiles_reclaimed,
        pool_free: world.projectile_pool.free_count(),
        pool_live: world.projectile_pool.live_count(),
        pool_total_built: world.projectile_pool.total_built(),
        pool_high_water: world.projectile_pool.high_water(),
        seed,
    };

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
        "text" => {
            println!("Watch Report");
            println!("============");
            println!("Ticks: {}", report.ticks);
            println!(
                "Sentries: {} ({} waypoints reached, {} circuits completed)",
                report.sentries, report.waypoints_reached, report.circuits_completed
            );
            println!(
                "Volleys: {} ({} launched, {} reused, {} constructed)",
                report.volleys_fired,
                report.projectiles_launched,
                report.projectiles_reused,
                report.projectiles_constructed
            );
            println!("Reclaimed: {}", report.projectiles_reclaimed);
            println!(
                "Pool: {} free, {} live, {} built, high water {}",
                report.pool_free, report.pool_live, report.pool_total_built, report.pool_high_water
            );
            println!("Seed: {}", report.seed);
        }
        _ => {
            eprintln!("Unknown format '{}', defaulting to json", args.format);
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
    }
}

//! Criterion micro-benchmarks for pool cycling and the simulation tick.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use palisade::core::config::SimulationConfig;
use palisade::pool::ObjectPool;
use palisade::projectile::Projectile;
use palisade::simulation::{run_simulation_tick, World};

/// Build a watch world with one emplacement firing every tick.
fn make_firing_world() -> World {
    let config = SimulationConfig {
        fire_interval: 1,
        volley_size: 8,
        projectile_lifetime: 4,
        pool_preload: 64,
        ..Default::default()
    };
    let mut world = World::new(config, 7);
    world.spawn_emplacement(Vec2::ZERO, Vec2::new(50.0, 0.0));
    world
}

/// Benchmark: steady-state acquire/release round trip on a warm pool.
fn bench_pool_cycle_reuse(c: &mut Criterion) {
    let mut pool = ObjectPool::new("bench", Projectile::new);
    pool.preload(1);

    c.bench_function("pool_cycle_reuse", |b| {
        b.iter(|| {
            let projectile = pool.acquire();
            black_box(projectile.id);
            pool.release(projectile);
        });
    });
}

/// Benchmark: cold growth, 64 factory constructions against an empty pool.
fn bench_pool_cold_growth_64(c: &mut Criterion) {
    c.bench_function("pool_cold_growth_64", |b| {
        b.iter(|| {
            let mut pool = ObjectPool::new("bench", Projectile::new);
            let held: Vec<Projectile> = (0..64).map(|_| pool.acquire()).collect();
            black_box(held.len());
        });
    });
}

/// Benchmark: one full simulation tick with volleys in flight.
fn bench_watch_tick(c: &mut Criterion) {
    let mut world = make_firing_world();
    // Warm the in-flight set so every measured tick fires and reclaims
    for _ in 0..8 {
        run_simulation_tick(&mut world);
    }

    c.bench_function("watch_tick", |b| {
        b.iter(|| {
            let events = run_simulation_tick(&mut world);
            black_box(events.len());
        });
    });
}

criterion_group!(
    benches,
    bench_pool_cycle_reuse,
    bench_pool_cold_growth_64,
    bench_watch_tick
);
criterion_main!(benches);

//! Long-run motion and animation invariants.
//!
//! These scenarios run whole populations for thousands of gated ticks
//! and assert the properties the per-unit tests state locally: sprites
//! never escape their bounds, reflections never change speed, and
//! animation timers never sit at or above their duration.

use spritemark_core::Command;
use spritemark_sim::{Bounds, SimConfig, World};

// ── Helpers ─────────────────────────────────────────────────────

fn config(capacity: usize) -> SimConfig {
    let mut cfg = SimConfig::default();
    cfg.capacity = capacity;
    cfg.initial_population = capacity;
    cfg
}

fn assert_in_bounds(world: &World, bounds: &Bounds) {
    for sprite in world.sprites() {
        assert!(
            sprite.x >= bounds.left && sprite.x <= bounds.right,
            "x {} outside [{}, {}]",
            sprite.x,
            bounds.left,
            bounds.right
        );
        assert!(
            sprite.y >= bounds.top && sprite.y <= bounds.bottom,
            "y {} outside [{}, {}]",
            sprite.y,
            bounds.top,
            bounds.bottom
        );
    }
}

// ── Scenarios ───────────────────────────────────────────────────

/// Full population, 3000 ticks of steady cadence: positions stay inside
/// the reflection bounds the whole way.
#[test]
fn bounds_hold_over_a_long_run() {
    let cfg = config(2_000);
    let bounds = Bounds::from_config(&cfg);
    let mut world = World::new(cfg).unwrap();
    for step in 1..=3_000u64 {
        world.advance(step * 16, []);
        if step % 50 == 0 {
            assert_in_bounds(&world, &bounds);
        }
    }
    assert_in_bounds(&world, &bounds);
}

/// Reflections flip signs but never alter a sprite's per-axis speed.
#[test]
fn speeds_survive_thousands_of_reflections() {
    let mut world = World::new(config(500)).unwrap();
    let initial: Vec<_> = world
        .sprites()
        .iter()
        .map(|s| (s.dx.abs(), s.dy.abs()))
        .collect();
    for step in 1..=3_000u64 {
        world.advance(step * 16, []);
    }
    let final_speeds: Vec<_> = world
        .sprites()
        .iter()
        .map(|s| (s.dx.abs(), s.dy.abs()))
        .collect();
    assert_eq!(initial, final_speeds);
}

/// After every tick, each frame index is in range and each timer holds
/// a residual strictly below its duration.
#[test]
fn animation_residuals_stay_below_duration() {
    let cfg = config(500);
    let frame_count = cfg.frame_count;
    let mut world = World::new(cfg).unwrap();
    // Irregular deltas, including multi-duration stalls.
    for step in 1..=500u64 {
        let now = step * 16 + (step % 7) * 200;
        world.advance(now, []);
        for sprite in world.sprites() {
            assert!(sprite.frame < frame_count);
            assert!(sprite.frame_timer_ms < sprite.frame_duration_ms);
        }
    }
}

/// Pausing movement freezes positions while animation keeps running;
/// resuming picks the trajectory back up.
#[test]
fn movement_pause_freezes_positions_only() {
    let mut world = World::new(config(300)).unwrap();
    world.advance(16, []);

    world.apply(Command::ToggleMovement);
    let frozen: Vec<_> = world.sprites().iter().map(|s| (s.x, s.y)).collect();
    let frames_before: Vec<_> = world.sprites().iter().map(|s| s.frame).collect();
    for step in 2..=200u64 {
        world.advance(step * 16, []);
    }
    let held: Vec<_> = world.sprites().iter().map(|s| (s.x, s.y)).collect();
    assert_eq!(frozen, held);
    let frames_after: Vec<_> = world.sprites().iter().map(|s| s.frame).collect();
    assert_ne!(frames_before, frames_after);

    world.apply(Command::ToggleMovement);
    world.advance(201 * 16, []);
    let moved: Vec<_> = world.sprites().iter().map(|s| (s.x, s.y)).collect();
    assert_ne!(frozen, moved);
}

/// Population churn mid-run never exposes an out-of-bounds sprite and
/// never lets the count leave `[0, capacity]`.
#[test]
fn churn_preserves_bounds_and_count() {
    let mut cfg = config(1_000);
    cfg.initial_population = 100;
    let bounds = Bounds::from_config(&cfg);
    let capacity = cfg.capacity;
    let mut world = World::new(cfg).unwrap();

    for step in 1..=1_000u64 {
        let batch = match step % 13 {
            0 => vec![Command::AdjustPopulation(250)],
            7 => vec![Command::AdjustPopulation(-400)],
            _ => vec![],
        };
        world.advance(step * 16, batch);
        assert!(world.active_count() <= capacity);
        assert_in_bounds(&world, &bounds);
    }
}

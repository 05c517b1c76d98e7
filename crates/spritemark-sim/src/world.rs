//! The owning simulation context.
//!
//! [`World`] is the primary API for running the benchmark simulation.
//! Each call to [`advance()`](World::advance) applies that frame's
//! commands, counts the frame for the fps estimate, and runs one gated
//! scheduler invocation, returning [`StepMetrics`] for the step.
//!
//! # Ownership model
//!
//! `World` owns the pool, scheduler, sampler, mode flags, and the seeded
//! random stream; nothing lives in process-wide storage, so independent
//! worlds coexist and unit tests need no global setup. `World` is
//! [`Send`] (movable between threads) and all mutation goes through
//! `&mut self`; no method blocks or yields internally.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use spritemark_core::{Command, GamepadId};

use crate::config::{ConfigError, SimConfig};
use crate::metrics::StepMetrics;
use crate::pool::{PoolError, SpritePool};
use crate::sampler::RateSampler;
use crate::scheduler::Scheduler;
use crate::sprite::Sprite;

// Compile-time assertion: World is Send. Fails to compile if any field
// is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<World>();
    }
};

// ── InitError ──────────────────────────────────────────────────────

/// Errors from [`World::new`]. Construction is the only fallible entry
/// point; per-frame operations clamp or no-op instead of failing.
#[derive(Debug, PartialEq)]
pub enum InitError {
    /// Configuration validation failed.
    Config(ConfigError),
    /// The sprite pool could not be allocated.
    Pool(PoolError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Pool(e) => write!(f, "pool: {e}"),
        }
    }
}

impl Error for InitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Pool(e) => Some(e),
        }
    }
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PoolError> for InitError {
    fn from(e: PoolError) -> Self {
        Self::Pool(e)
    }
}

// ── World ──────────────────────────────────────────────────────────

/// Complete simulation state for one benchmark instance.
///
/// Timestamps passed to [`advance()`](World::advance) are milliseconds
/// on any caller-chosen epoch; the world's clocks start at zero, so the
/// first gated tick fires once `now_ms` reaches the update interval.
///
/// # Example
///
/// ```rust
/// use spritemark_core::Command;
/// use spritemark_sim::{SimConfig, World};
///
/// let mut world = World::new(SimConfig::default())?;
/// let metrics = world.advance(10, [Command::AdjustPopulation(100)]);
/// assert!(metrics.ticked);
/// assert_eq!(world.active_count(), 200);
/// # Ok::<(), spritemark_sim::InitError>(())
/// ```
pub struct World {
    config: SimConfig,
    pool: SpritePool,
    scheduler: Scheduler,
    sampler: RateSampler,
    movement_enabled: bool,
    rotation_enabled: bool,
    gamepad: Option<GamepadId>,
    overlay_dirty: bool,
    seed: u64,
}

impl World {
    /// Validates `config`, seeds the random stream, and allocates the
    /// fully initialized pool. The overlay starts dirty so the first
    /// frame rasterizes it.
    pub fn new(config: SimConfig) -> Result<Self, InitError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let pool = SpritePool::new(&config, &mut rng)?;
        let scheduler = Scheduler::new(&config);
        Ok(Self {
            movement_enabled: config.movement_enabled,
            rotation_enabled: config.rotation_enabled,
            seed: config.seed,
            config,
            pool,
            scheduler,
            sampler: RateSampler::new(),
            gamepad: None,
            overlay_dirty: true,
        })
    }

    /// Applies one command immediately.
    ///
    /// Population changes always mark the overlay dirty, even when the
    /// count saturated unchanged at a pool limit.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::AdjustPopulation(delta) => {
                self.pool.adjust_active(delta);
                self.overlay_dirty = true;
            }
            Command::ToggleMovement => {
                self.movement_enabled = !self.movement_enabled;
            }
            Command::ToggleRotation => {
                self.rotation_enabled = !self.rotation_enabled;
            }
            Command::SetGamepad(pad) => {
                self.gamepad = pad;
            }
        }
    }

    /// Runs one simulation step at `now_ms`.
    ///
    /// Order within the step: commands apply first, so a population
    /// change is visible to this step's tick and overlay; the frame is
    /// counted and the fps window rolled if due; then the gated
    /// scheduler runs. By the time this returns, no active sprite is
    /// partially updated.
    pub fn advance<I>(&mut self, now_ms: u64, commands: I) -> StepMetrics
    where
        I: IntoIterator<Item = Command>,
    {
        let step_start = Instant::now();
        let mut metrics = StepMetrics::default();

        let commands_start = Instant::now();
        for command in commands {
            self.apply(command);
            metrics.commands_applied += 1;
        }
        metrics.commands_us = commands_start.elapsed().as_micros() as u64;

        if self.sampler.note_frame(now_ms) {
            self.overlay_dirty = true;
            metrics.window_rolled = true;
        }

        let tick_start = Instant::now();
        let outcome = self
            .scheduler
            .advance(now_ms, &mut self.pool, self.movement_enabled);
        metrics.tick_us = tick_start.elapsed().as_micros() as u64;
        metrics.ticked = outcome.ticked;
        metrics.tick_delta_ms = outcome.delta_ms;

        metrics.total_us = step_start.elapsed().as_micros() as u64;
        metrics
    }

    /// Resets the world to time zero with a new seed.
    ///
    /// Re-draws every pool slot, restores the initial population and the
    /// configured mode flags, and restarts the fps window. The attached
    /// gamepad is device state, not simulation state, and survives the
    /// reset. Nothing is reallocated, so this cannot fail.
    pub fn reset(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.pool.reinit(&self.config, &mut rng);
        self.scheduler.reset(0);
        self.sampler.reset(0);
        self.movement_enabled = self.config.movement_enabled;
        self.rotation_enabled = self.config.rotation_enabled;
        self.overlay_dirty = true;
        self.seed = seed;
    }

    /// The diagnostic overlay text for the current state.
    pub fn overlay_line(&self) -> String {
        format!(
            "fps {}   sprites {}",
            self.sampler.fps(),
            self.pool.active_count()
        )
    }

    /// Takes the overlay dirty flag, clearing it. The caller should
    /// re-rasterize the overlay when this returns `true`.
    pub fn take_overlay_dirty(&mut self) -> bool {
        std::mem::take(&mut self.overlay_dirty)
    }

    /// Forces overlay re-rasterization on the next frame.
    pub fn mark_overlay_dirty(&mut self) {
        self.overlay_dirty = true;
    }

    /// The active sprites, fully updated for the current step.
    pub fn sprites(&self) -> &[Sprite] {
        self.pool.active()
    }

    /// The validated configuration this world was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of active sprites.
    pub fn active_count(&self) -> usize {
        self.pool.active_count()
    }

    /// The most recent fps estimate.
    pub fn fps(&self) -> u32 {
        self.sampler.fps()
    }

    /// Whether positions advance on gated ticks.
    pub fn movement_enabled(&self) -> bool {
        self.movement_enabled
    }

    /// Whether sprites should draw rotated.
    pub fn rotation_enabled(&self) -> bool {
        self.rotation_enabled
    }

    /// The currently attached gamepad, if any.
    pub fn gamepad(&self) -> Option<GamepadId> {
        self.gamepad
    }

    /// The seed the current pool contents were drawn from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("active", &self.pool.active_count())
            .field("capacity", &self.pool.capacity())
            .field("fps", &self.sampler.fps())
            .field("movement_enabled", &self.movement_enabled)
            .field("rotation_enabled", &self.rotation_enabled)
            .field("gamepad", &self.gamepad)
            .field("seed", &self.seed)
            .finish()
    }
}

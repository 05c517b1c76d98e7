//! Fixed-capacity sprite pool and the active-population boundary.
//!
//! Every slot is drawn once at construction; population commands only
//! move the boundary between active and dormant sprites. Growing the
//! population therefore re-exposes sprites exactly where they were
//! left, and no per-frame path ever allocates.

use std::error::Error;
use std::fmt;

use rand::Rng;

use crate::config::SimConfig;
use crate::sprite::Sprite;

// ── PoolError ──────────────────────────────────────────────────────

/// Errors from pool construction.
#[derive(Debug, PartialEq)]
pub enum PoolError {
    /// The backing allocation could not be obtained.
    AllocationFailed {
        /// Requested capacity in sprites.
        capacity: usize,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { capacity } => {
                write!(f, "could not allocate pool of {capacity} sprites")
            }
        }
    }
}

impl Error for PoolError {}

// ── SpritePool ─────────────────────────────────────────────────────

/// Fixed-capacity sprite storage with a movable active boundary.
///
/// Sprites at indices `[0, active_count)` are simulated and rendered;
/// the rest are dormant but fully initialized.
#[derive(Clone, Debug)]
pub struct SpritePool {
    sprites: Vec<Sprite>,
    active: usize,
}

impl SpritePool {
    /// Allocates and draws `config.capacity` sprites from `rng`, then
    /// activates the first `config.initial_population`.
    ///
    /// This is the one fallible allocation in the crate; it is checked
    /// rather than aborting because a stress-sized pool on a small
    /// target is an expected configuration error.
    ///
    /// `config` must have passed [`SimConfig::validate`], which caps
    /// the initial population at the capacity.
    pub fn new<R: Rng>(config: &SimConfig, rng: &mut R) -> Result<Self, PoolError> {
        let mut sprites = Vec::new();
        sprites
            .try_reserve_exact(config.capacity)
            .map_err(|_| PoolError::AllocationFailed {
                capacity: config.capacity,
            })?;
        sprites.extend((0..config.capacity).map(|_| Sprite::random(config, rng)));
        Ok(Self {
            sprites,
            active: config.initial_population,
        })
    }

    /// Re-draws every slot in place from `rng` and resets the active
    /// boundary to `config.initial_population`. Capacity is unchanged;
    /// nothing is reallocated.
    pub fn reinit<R: Rng>(&mut self, config: &SimConfig, rng: &mut R) {
        for sprite in &mut self.sprites {
            *sprite = Sprite::random(config, rng);
        }
        self.active = config.initial_population.min(self.sprites.len());
    }

    /// Moves the active boundary by `delta` sprites, clamping to
    /// `[0, capacity]`, and returns the resulting count. Out-of-range
    /// requests saturate; there is no error path.
    pub fn adjust_active(&mut self, delta: i32) -> usize {
        let target = self.active as i64 + i64::from(delta);
        self.active = target.clamp(0, self.sprites.len() as i64) as usize;
        self.active
    }

    /// Sprites currently simulated and rendered.
    pub fn active(&self) -> &[Sprite] {
        &self.sprites[..self.active]
    }

    /// Mutable view of the active sprites.
    pub fn active_mut(&mut self) -> &mut [Sprite] {
        &mut self.sprites[..self.active]
    }

    /// Every slot, dormant ones included.
    pub fn all(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Number of active sprites.
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Total slot count, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.sprites.len()
    }
}

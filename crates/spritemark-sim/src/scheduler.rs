//! Gated advancement of sprite motion and animation.
//!
//! The scheduler decouples simulation cadence from render cadence: the
//! caller invokes it every frame, but sprites advance only when at
//! least the configured interval has elapsed since the last advance.
//! Between ticks, sprites render with their prior state.

use crate::config::{MotionModel, SimConfig};
use crate::pool::SpritePool;
use crate::sprite::Bounds;

// ── TickOutcome ────────────────────────────────────────────────────

/// What one scheduler invocation did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the gate opened and the active sprites were updated.
    pub ticked: bool,
    /// Elapsed milliseconds the gate saw. Zero when gated off.
    pub delta_ms: u64,
}

// ── Scheduler ──────────────────────────────────────────────────────

/// Advances the active population as a function of wall time, at most
/// once per configured interval.
#[derive(Clone, Debug)]
pub struct Scheduler {
    last_update_ms: u64,
    interval_ms: u32,
    motion: MotionModel,
    bounds: Bounds,
    frame_count: u32,
}

impl Scheduler {
    /// Builds a scheduler from a validated `config`, with its gate clock
    /// at zero. The first tick fires once the caller's clock reaches the
    /// update interval.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            last_update_ms: 0,
            interval_ms: config.update_interval_ms,
            motion: config.motion,
            bounds: Bounds::from_config(config),
            frame_count: config.frame_count,
        }
    }

    /// Runs one invocation at `now_ms`.
    ///
    /// When the gate opens, every active sprite's position (unless
    /// movement is paused) and animation advance before this returns, so
    /// the caller never renders a partially updated population. Pausing
    /// movement does not stop animation and does not touch the gate
    /// clock.
    pub fn advance(
        &mut self,
        now_ms: u64,
        pool: &mut SpritePool,
        movement_enabled: bool,
    ) -> TickOutcome {
        // 1. Gate on the elapsed interval. A clock that jumped backwards
        //    reads as zero elapsed, never as negative motion.
        let delta = now_ms.saturating_sub(self.last_update_ms);
        if delta < u64::from(self.interval_ms) {
            return TickOutcome {
                ticked: false,
                delta_ms: 0,
            };
        }
        self.last_update_ms = now_ms;

        // 2. Advance the active range under the configured motion model.
        match self.motion {
            MotionModel::TimeScaled => {
                for sprite in pool.active_mut() {
                    if movement_enabled {
                        sprite.advance_position(delta, self.interval_ms, &self.bounds);
                    }
                    sprite.advance_animation(delta, self.frame_count);
                }
            }
            MotionModel::FixedStep => {
                // One nominal interval per tick, whatever the clock says.
                let step_ms = u64::from(self.interval_ms);
                for sprite in pool.active_mut() {
                    if movement_enabled {
                        sprite.step_position(&self.bounds);
                    }
                    sprite.advance_animation(step_ms, self.frame_count);
                }
            }
        }

        TickOutcome {
            ticked: true,
            delta_ms: delta,
        }
    }

    /// Rebases the gate clock to `now_ms` without touching sprites.
    pub fn reset(&mut self, now_ms: u64) {
        self.last_update_ms = now_ms;
    }

    /// The bounds active sprites reflect at.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

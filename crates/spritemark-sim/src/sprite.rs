//! Sprite state, fixed-point motion, and animation catch-up.
//!
//! A [`Sprite`] is plain data; the laws that move it live in the methods
//! here and are driven by the [`Scheduler`](crate::Scheduler). Positions
//! and velocities are 24.8 fixed point throughout (see
//! [`Fixed`](spritemark_core::Fixed)).

use rand::Rng;

use spritemark_core::fixed::FRAC_BITS;
use spritemark_core::Fixed;

use crate::config::SimConfig;

// ── Bounds ─────────────────────────────────────────────────────────

/// Reflection bounds for a sprite's top-left corner, in subunits.
///
/// Each bound sits half a sprite extent past the screen edge, so a
/// sprite reverses when its center reaches the edge rather than when
/// its border does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest legal x.
    pub left: Fixed,
    /// Largest legal x.
    pub right: Fixed,
    /// Smallest legal y.
    pub top: Fixed,
    /// Largest legal y.
    pub bottom: Fixed,
}

impl Bounds {
    /// Derives bounds from `config`'s screen and sprite dimensions.
    ///
    /// `config` must have passed [`SimConfig::validate`]; that is what
    /// guarantees every bound fits the `i32` subunit range and that
    /// `left <= right` and `top <= bottom`.
    pub fn from_config(config: &SimConfig) -> Self {
        let half_w = (config.sprite_w / 2) as i32;
        let half_h = (config.sprite_h / 2) as i32;
        Self {
            left: Fixed::from_int(-half_w),
            right: Fixed::from_int(config.screen_w as i32 - half_w),
            top: Fixed::from_int(-half_h),
            bottom: Fixed::from_int(config.screen_h as i32 - half_h),
        }
    }
}

// ── Sprite ─────────────────────────────────────────────────────────

/// One animated entity.
///
/// Fields are public plain data: the pool hands out slices and the
/// scheduler mutates them in place, so there is no invariant a setter
/// could protect that the update laws do not already maintain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    /// Horizontal position of the top-left corner, in subunits.
    pub x: Fixed,
    /// Vertical position of the top-left corner, in subunits.
    pub y: Fixed,
    /// Horizontal velocity in subunits per update interval.
    pub dx: Fixed,
    /// Vertical velocity in subunits per update interval.
    pub dy: Fixed,
    /// Current animation frame, always below the configured frame count.
    pub frame: u32,
    /// Milliseconds accumulated toward the next frame flip.
    pub frame_timer_ms: u32,
    /// Milliseconds per frame for this sprite, drawn once at creation.
    pub frame_duration_ms: u32,
}

impl Sprite {
    /// Draws a fresh sprite from `rng`.
    ///
    /// Position is uniform over the subunit span that keeps the whole
    /// sprite on screen. Each velocity axis gets a nonzero magnitude in
    /// `[1, max_speed]` and an independent coin-flip sign, so every
    /// sprite starts moving on both axes. The frame duration is the base
    /// plus up to half the base, staggering flips across the population.
    ///
    /// `config` must have passed [`SimConfig::validate`]; only then are
    /// the draw ranges non-empty and within `i32`.
    pub fn random<R: Rng>(config: &SimConfig, rng: &mut R) -> Self {
        let x_span = ((config.screen_w - config.sprite_w) as i32) << FRAC_BITS;
        let y_span = ((config.screen_h - config.sprite_h) as i32) << FRAC_BITS;
        let x = Fixed::from_raw(rng.random_range(0..=x_span));
        let y = Fixed::from_raw(rng.random_range(0..=y_span));
        let mut dx = rng.random_range(1..=config.max_speed.raw());
        let mut dy = rng.random_range(1..=config.max_speed.raw());
        if rng.random_bool(0.5) {
            dx = -dx;
        }
        if rng.random_bool(0.5) {
            dy = -dy;
        }
        let frame = rng.random_range(0..config.frame_count);
        let frame_duration_ms = config.base_frame_duration_ms
            + rng.random_range(0..=config.base_frame_duration_ms / 2);
        Self {
            x,
            y,
            dx: Fixed::from_raw(dx),
            dy: Fixed::from_raw(dy),
            frame,
            frame_timer_ms: 0,
            frame_duration_ms,
        }
    }

    /// Advances position by `velocity * delta / interval`, then clamps
    /// and reflects at `bounds`.
    ///
    /// The displacement is computed in 128-bit so an arbitrarily late
    /// delta cannot overflow; the clamp brings the result back into
    /// `i32` range before narrowing. Scaling by the actual delta keeps
    /// visible speed independent of how late the update runs.
    pub fn advance_position(&mut self, delta_ms: u64, interval_ms: u32, bounds: &Bounds) {
        let delta = i128::from(delta_ms);
        let interval = i128::from(interval_ms);
        let step_x = i128::from(self.dx.raw()) * delta / interval;
        let step_y = i128::from(self.dy.raw()) * delta / interval;
        self.travel(step_x, step_y, bounds);
    }

    /// Advances position by exactly one velocity step, ignoring the
    /// actual elapsed time ([`MotionModel::FixedStep`](crate::MotionModel::FixedStep)).
    pub fn step_position(&mut self, bounds: &Bounds) {
        self.travel(i128::from(self.dx.raw()), i128::from(self.dy.raw()), bounds);
    }

    /// Applies a displacement, clamping per axis and negating a velocity
    /// component only when it still points further out of bounds. A
    /// component already pointing back in is left alone so a sprite
    /// never sticks to an edge.
    fn travel(&mut self, step_x: i128, step_y: i128, bounds: &Bounds) {
        let mut x = i128::from(self.x.raw()) + step_x;
        let mut y = i128::from(self.y.raw()) + step_y;

        if x < i128::from(bounds.left.raw()) {
            x = i128::from(bounds.left.raw());
            if self.dx.raw() < 0 {
                self.dx = -self.dx;
            }
        }
        if x > i128::from(bounds.right.raw()) {
            x = i128::from(bounds.right.raw());
            if self.dx.raw() > 0 {
                self.dx = -self.dx;
            }
        }
        if y < i128::from(bounds.top.raw()) {
            y = i128::from(bounds.top.raw());
            if self.dy.raw() < 0 {
                self.dy = -self.dy;
            }
        }
        if y > i128::from(bounds.bottom.raw()) {
            y = i128::from(bounds.bottom.raw());
            if self.dy.raw() > 0 {
                self.dy = -self.dy;
            }
        }

        // Both axes are now clamped into bounds, so narrowing is lossless.
        self.x = Fixed::from_raw(x as i32);
        self.y = Fixed::from_raw(y as i32);
    }

    /// Accumulates `delta_ms` on the frame timer and folds every due
    /// frame flip in one division, leaving the residual timer below the
    /// duration. Identical in outcome to flipping one frame per elapsed
    /// duration, but a multi-second stall costs one division instead of
    /// one iteration per missed flip.
    ///
    /// # Panics
    ///
    /// Panics if `frame_count` or this sprite's `frame_duration_ms` is
    /// zero. Validated configs and [`Sprite::random`] never produce
    /// either.
    pub fn advance_animation(&mut self, delta_ms: u64, frame_count: u32) {
        let total = u64::from(self.frame_timer_ms).saturating_add(delta_ms);
        let duration = u64::from(self.frame_duration_ms);
        let flips = (total / duration) % u64::from(frame_count);
        self.frame = ((u64::from(self.frame) + flips) % u64::from(frame_count)) as u32;
        self.frame_timer_ms = (total % duration) as u32;
    }
}

//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the input for constructing a [`World`](crate::World).
//! [`validate()`](SimConfig::validate) checks structural invariants at
//! startup so the per-frame path never has to re-check them.

use std::error::Error;
use std::fmt;

use spritemark_core::fixed::FRAC_BITS;
use spritemark_core::Fixed;

// ── MotionModel ────────────────────────────────────────────────────

/// How sprite positions advance on a gated update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionModel {
    /// Displacement is scaled by the elapsed delta relative to the update
    /// interval, so visible speed is independent of how late the update
    /// runs. This is the canonical model.
    #[default]
    TimeScaled,
    /// Exactly one velocity step per gated update regardless of how much
    /// time actually elapsed. Visible speed then depends on the driver's
    /// call rate; useful for comparing against fixed-step ports.
    FixedStep,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Screen width or height is zero.
    ZeroScreenDimension,
    /// Sprite width or height is zero.
    ZeroSpriteDimension,
    /// Sprite does not fit on the screen.
    SpriteLargerThanScreen {
        /// Configured sprite dimensions.
        sprite: (u32, u32),
        /// Configured screen dimensions.
        screen: (u32, u32),
    },
    /// A screen coordinate does not fit the fixed-point range.
    CoordinateOverflow {
        /// The raw subunit value that overflowed.
        value: i64,
    },
    /// Animation strip has zero frames.
    ZeroFrameCount,
    /// Base frame duration is zero milliseconds.
    ZeroFrameDuration,
    /// Update interval is zero milliseconds.
    ZeroUpdateInterval,
    /// Maximum speed is zero or negative.
    NonPositiveMaxSpeed {
        /// The configured raw subunit value.
        raw: i32,
    },
    /// Pool capacity is zero.
    ZeroCapacity,
    /// Initial population exceeds pool capacity.
    InitialExceedsCapacity {
        /// Requested initial population.
        initial: usize,
        /// Configured capacity.
        capacity: usize,
    },
    /// Population step is zero or negative.
    NonPositivePopulationStep {
        /// The configured step.
        step: i32,
    },
    /// Rotation angle is NaN or infinite.
    InvalidRotationAngle {
        /// The invalid value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroScreenDimension => write!(f, "screen dimensions must be nonzero"),
            Self::ZeroSpriteDimension => write!(f, "sprite dimensions must be nonzero"),
            Self::SpriteLargerThanScreen { sprite, screen } => {
                write!(
                    f,
                    "sprite {}x{} does not fit screen {}x{}",
                    sprite.0, sprite.1, screen.0, screen.1
                )
            }
            Self::CoordinateOverflow { value } => {
                write!(f, "coordinate {value} exceeds the fixed-point range")
            }
            Self::ZeroFrameCount => write!(f, "frame_count must be at least 1"),
            Self::ZeroFrameDuration => {
                write!(f, "base_frame_duration_ms must be at least 1")
            }
            Self::ZeroUpdateInterval => {
                write!(f, "update_interval_ms must be at least 1")
            }
            Self::NonPositiveMaxSpeed { raw } => {
                write!(f, "max_speed must be positive, got {raw} subunits")
            }
            Self::ZeroCapacity => write!(f, "capacity must be at least 1"),
            Self::InitialExceedsCapacity { initial, capacity } => {
                write!(
                    f,
                    "initial_population {initial} exceeds capacity {capacity}"
                )
            }
            Self::NonPositivePopulationStep { step } => {
                write!(f, "population_step must be positive, got {step}")
            }
            Self::InvalidRotationAngle { value } => {
                write!(f, "rotation_angle_deg must be finite, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation world.
///
/// Defaults reproduce the stock benchmark scene: a 480x272 screen, 48x48
/// two-frame sprites, and one hundred initial sprites from seed 2026.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Screen width in pixels. Default: 480.
    pub screen_w: u32,
    /// Screen height in pixels. Default: 272.
    pub screen_h: u32,
    /// Sprite width in pixels. Default: 48.
    pub sprite_w: u32,
    /// Sprite height in pixels. Default: 48.
    pub sprite_h: u32,
    /// Frames in the horizontal animation strip. Default: 2.
    pub frame_count: u32,
    /// Base animation frame duration in milliseconds. Each sprite draws
    /// its own duration near this value. Default: 70.
    pub base_frame_duration_ms: u32,
    /// Maximum axis speed in subunits per update interval. Default: 3 px.
    pub max_speed: Fixed,
    /// Pool capacity in sprites; allocated once at startup. Default: 10000.
    pub capacity: usize,
    /// Sprites active immediately after construction. Default: 100.
    pub initial_population: usize,
    /// Sprites added or removed per population command. Default: 100.
    pub population_step: i32,
    /// Minimum milliseconds between gated updates. Default: 10.
    pub update_interval_ms: u32,
    /// Whether positions advance at startup. Default: true.
    pub movement_enabled: bool,
    /// Whether sprites draw rotated at startup. Default: false.
    pub rotation_enabled: bool,
    /// Rotation angle in degrees when rotation is on. Default: 22.0.
    pub rotation_angle_deg: f32,
    /// Position advancement model. Default: [`MotionModel::TimeScaled`].
    pub motion: MotionModel,
    /// RNG seed for deterministic sprite placement. Default: 2026.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_w: 480,
            screen_h: 272,
            sprite_w: 48,
            sprite_h: 48,
            frame_count: 2,
            base_frame_duration_ms: 70,
            max_speed: Fixed::from_int(3),
            capacity: 10_000,
            initial_population: 100,
            population_step: 100,
            update_interval_ms: 10,
            movement_enabled: true,
            rotation_enabled: false,
            rotation_angle_deg: 22.0,
            motion: MotionModel::TimeScaled,
            seed: 2026,
        }
    }
}

impl SimConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Screen must have area.
        if self.screen_w == 0 || self.screen_h == 0 {
            return Err(ConfigError::ZeroScreenDimension);
        }
        // 2. Sprites must have area.
        if self.sprite_w == 0 || self.sprite_h == 0 {
            return Err(ConfigError::ZeroSpriteDimension);
        }
        // 3. Sprite must fit on screen, else the bounce bounds invert.
        if self.sprite_w > self.screen_w || self.sprite_h > self.screen_h {
            return Err(ConfigError::SpriteLargerThanScreen {
                sprite: (self.sprite_w, self.sprite_h),
                screen: (self.screen_w, self.screen_h),
            });
        }
        // 4. Every reachable coordinate must fit the i32 subunit range.
        //    The extremes are the right/bottom bounds.
        for extent in [self.screen_w, self.screen_h] {
            let raw = i64::from(extent) << FRAC_BITS;
            if raw > i64::from(i32::MAX) {
                return Err(ConfigError::CoordinateOverflow { value: raw });
            }
        }
        // 5. At least one animation frame.
        if self.frame_count == 0 {
            return Err(ConfigError::ZeroFrameCount);
        }
        // 6. Frame duration >= 1 ms (it is a divisor in catch-up).
        if self.base_frame_duration_ms == 0 {
            return Err(ConfigError::ZeroFrameDuration);
        }
        // 7. Update interval >= 1 ms (it is a divisor in time scaling).
        if self.update_interval_ms == 0 {
            return Err(ConfigError::ZeroUpdateInterval);
        }
        // 8. Speed range must be non-degenerate.
        if self.max_speed.raw() <= 0 {
            return Err(ConfigError::NonPositiveMaxSpeed {
                raw: self.max_speed.raw(),
            });
        }
        // 9. Pool must hold at least one sprite.
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        // 10. Initial population must fit the pool.
        if self.initial_population > self.capacity {
            return Err(ConfigError::InitialExceedsCapacity {
                initial: self.initial_population,
                capacity: self.capacity,
            });
        }
        // 11. Population commands must move the boundary.
        if self.population_step <= 0 {
            return Err(ConfigError::NonPositivePopulationStep {
                step: self.population_step,
            });
        }
        // 12. Rotation angle feeds straight into the render descriptor.
        if !self.rotation_angle_deg.is_finite() {
            return Err(ConfigError::InvalidRotationAngle {
                value: self.rotation_angle_deg,
            });
        }
        Ok(())
    }
}

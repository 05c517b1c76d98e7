//! Deterministic sprite simulation for the spritemark benchmark.
//!
//! Provides the top-level [`World`] that owns the sprite pool, the gated
//! motion and animation scheduler, population control, and the fps
//! sampler. Rendering stays outside: the world exposes fully updated
//! sprite state each step and the render crate turns it into draw calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod pool;
pub mod sampler;
pub mod scheduler;
pub mod sprite;
pub mod world;

pub use config::{ConfigError, MotionModel, SimConfig};
pub use metrics::StepMetrics;
pub use pool::{PoolError, SpritePool};
pub use sampler::RateSampler;
pub use scheduler::{Scheduler, TickOutcome};
pub use sprite::{Bounds, Sprite};
pub use world::{InitError, World};

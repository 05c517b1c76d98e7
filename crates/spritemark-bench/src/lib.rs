//! Benchmark profiles and utilities for the spritemark workspace.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: the reference 480x272 run, 100 active sprites
//! - [`stress_profile`]: the same screen with the pool saturated at 10,000

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use spritemark_sim::SimConfig;

/// The reference benchmark profile: defaults with a caller-chosen seed.
///
/// 480x272 screen, 48x48 two-frame sprites, 100 active of a 10,000
/// capacity, 10 ms scheduler interval.
pub fn reference_profile(seed: u64) -> SimConfig {
    let mut config = SimConfig::default();
    config.seed = seed;
    config
}

/// The stress profile: every pooled sprite active from the first frame.
///
/// Same screen and timing as [`reference_profile`], with all 10,000
/// sprites moving and animating. This is the population the benchmark
/// is expected to buckle under.
pub fn stress_profile(seed: u64) -> SimConfig {
    let mut config = SimConfig::default();
    config.initial_population = config.capacity;
    config.seed = seed;
    config
}

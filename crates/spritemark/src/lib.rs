//! Spritemark: a deterministic sprite benchmark core.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all spritemark sub-crates. For most users, adding `spritemark`
//! as a single dependency is sufficient.
//!
//! The benchmark itself is simple on purpose: a pool of bouncing,
//! animating sprites on a fixed-size screen, a population that grows
//! and shrinks on command, and an fps readout rasterized with an
//! embedded bitmap font. Everything is integer arithmetic from a
//! seeded stream, so two runs fed the same timestamps produce the same
//! pixels; what varies between machines is only how fast the frames
//! come out.
//!
//! # Quick start
//!
//! ```rust
//! use spritemark::prelude::*;
//!
//! // The reference configuration: 480x272, 100 sprites, seed 2026.
//! let config = SimConfig::default();
//! let mut world = World::new(config.clone()).unwrap();
//!
//! // A software backend and a solid-color stand-in for the atlas.
//! let mut backend = HeadlessBackend::new();
//! backend.create_surface(config.screen_w, config.screen_h).unwrap();
//! let strip_w = config.sprite_w * config.frame_count;
//! let pixels = vec![128u8; (strip_w * config.sprite_h * 4) as usize];
//! let atlas = backend.upload_texture(strip_w, config.sprite_h, &pixels).unwrap();
//!
//! // Drive three frames 16 ms apart; grow the population mid-run.
//! let mut runner = FrameRunner::new(atlas);
//! runner.run_frame(&mut world, &mut backend, 0, []).unwrap();
//! runner.run_frame(&mut world, &mut backend, 16, [Command::AdjustPopulation(100)]).unwrap();
//! let metrics = runner.run_frame(&mut world, &mut backend, 32, []).unwrap();
//!
//! assert!(metrics.step.ticked);
//! assert_eq!(world.active_count(), 200);
//! assert_eq!(backend.frames_presented(), 3);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `spritemark-core` | Fixed-point numerics, geometry, ids, commands, input bindings |
//! | [`sim`] | `spritemark-sim` | Configuration, entity pool, scheduler, rate sampler, `World` |
//! | [`font`] | `spritemark-font` | Embedded 8x8 glyphs, RGBA8 surface, rasterizer |
//! | [`render`] | `spritemark-render` | Backend trait, quad extraction, overlay cache, frame driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Vocabulary types (`spritemark-core`).
///
/// Fixed-point numerics ([`types::Fixed`]), pixel geometry
/// ([`types::Rect`], [`types::Color`]), ids, the command set, and the
/// declarative input binding table ([`types::Bindings`]).
pub use spritemark_core as types;

/// The deterministic simulation (`spritemark-sim`).
///
/// [`sim::World`] owns the entity pool, scheduler, and rate sampler;
/// [`sim::SimConfig`] validates and carries the reference defaults.
pub use spritemark_sim as sim;

/// The embedded bitmap font (`spritemark-font`).
///
/// Thirty-seven 8x8 glyphs, the [`font::Surface`] pixel buffer, and
/// the `draw_glyph` / `draw_string` rasterizers.
pub use spritemark_font as font;

/// Backend-agnostic rendering (`spritemark-render`).
///
/// The [`render::RenderBackend`] seam, per-entity
/// [`render::SpriteQuad`] extraction, the dirty-gated overlay, the
/// [`render::FrameRunner`] driver, and a software
/// [`render::HeadlessBackend`].
pub use spritemark_render as render;

/// Common imports for typical spritemark usage.
///
/// ```rust
/// use spritemark::prelude::*;
/// ```
///
/// This imports the most frequently used types: the world and its
/// configuration, commands and input bindings, the backend trait, and
/// the frame driver.
pub mod prelude {
    // Vocabulary
    pub use spritemark_core::input::{pad_attached, pad_removed};
    pub use spritemark_core::{
        Action, Bindings, Color, Command, CommandBatch, Fixed, GamepadId, InputCode, Key,
        PadButton, Rect, TextureId,
    };

    // Errors
    pub use spritemark_render::BackendError;
    pub use spritemark_sim::{ConfigError, InitError, PoolError};

    // Simulation
    pub use spritemark_sim::{MotionModel, SimConfig, StepMetrics, World};

    // Font
    pub use spritemark_font::Surface;

    // Rendering
    pub use spritemark_render::{
        FrameMetrics, FrameRunner, HeadlessBackend, OverlayCache, RenderBackend, SpriteQuad,
    };
}

//! The frame driver: one benchmark iteration end to end.
//!
//! [`FrameRunner`] sequences the work every frontend performs each
//! pass: apply commands, advance the simulation, clear, draw every
//! active sprite, refresh and compose the overlay, present. Sprites
//! draw every frame whether or not the scheduler ticked, so presentation
//! rate and simulation rate stay decoupled.

use std::time::Instant;

use spritemark_core::{Color, Command, TextureId};
use spritemark_sim::{StepMetrics, World};

use crate::backend::{BackendError, RenderBackend};
use crate::descriptor::{sprite_quads, SpriteQuad};
use crate::overlay::OverlayCache;

// ── FrameMetrics ─────────────────────────────────────────────────

/// Timing breakdown for one frame.
///
/// All times are wall-clock microseconds from `std::time::Instant`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameMetrics {
    /// The whole frame, command application through present.
    pub total_us: u64,
    /// Clearing, extracting, and drawing sprite quads.
    pub sprites_us: u64,
    /// Refreshing and composing the overlay.
    pub overlay_us: u64,
    /// Quads drawn this frame, one per active sprite.
    pub quads: usize,
    /// Whether the overlay was re-rasterized this frame.
    pub overlay_refreshed: bool,
    /// The simulation step's own breakdown.
    pub step: StepMetrics,
}

// ── FrameRunner ──────────────────────────────────────────────────

/// Drives complete frames against a world and a backend.
///
/// Owns the per-frame scratch (the quad buffer) and the overlay cache;
/// the caller owns the world, the backend, and the sprite atlas
/// texture.
pub struct FrameRunner {
    atlas: TextureId,
    overlay: OverlayCache,
    quads: Vec<SpriteQuad>,
}

impl FrameRunner {
    /// A runner drawing sprites from the given atlas texture.
    pub fn new(atlas: TextureId) -> Self {
        Self {
            atlas,
            overlay: OverlayCache::new(),
            quads: Vec::new(),
        }
    }

    /// Runs one frame at `now_ms` with this iteration's commands.
    ///
    /// Returns the frame's timing breakdown. Backend failures abort the
    /// frame where they occur; the simulation step has already happened
    /// by then and is not rolled back.
    pub fn run_frame(
        &mut self,
        world: &mut World,
        backend: &mut dyn RenderBackend,
        now_ms: u64,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<FrameMetrics, BackendError> {
        let frame_start = Instant::now();

        // 1. Commands, frame accounting, and the gated tick.
        let step = world.advance(now_ms, commands);

        // 2. Background and sprites.
        let sprites_start = Instant::now();
        backend.clear(Color::WHITE);
        sprite_quads(world, &mut self.quads);
        let angle = world.config().rotation_angle_deg;
        for quad in &self.quads {
            backend.draw_quad(self.atlas, quad.src, quad.dst, quad.rotated.then_some(angle))?;
        }
        let sprites_us = sprites_start.elapsed().as_micros() as u64;

        // 3. Overlay.
        let overlay_start = Instant::now();
        let overlay_refreshed = self.overlay.refresh(world, backend)?;
        self.overlay.compose(backend)?;
        let overlay_us = overlay_start.elapsed().as_micros() as u64;

        // 4. Present.
        backend.present();

        Ok(FrameMetrics {
            total_us: frame_start.elapsed().as_micros() as u64,
            sprites_us,
            overlay_us,
            quads: self.quads.len(),
            overlay_refreshed,
            step,
        })
    }

    /// The atlas texture sprites are drawn from.
    pub fn atlas(&self) -> TextureId {
        self.atlas
    }

    /// The overlay cache, for inspecting the last rasterized readout.
    pub fn overlay(&self) -> &OverlayCache {
        &self.overlay
    }

    /// The quads drawn by the most recent frame.
    pub fn last_quads(&self) -> &[SpriteQuad] {
        &self.quads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessBackend;
    use spritemark_sim::SimConfig;

    const SPRITE_COLOR: Color = Color::rgb(40, 160, 90);

    fn config() -> SimConfig {
        let mut config = SimConfig::default();
        config.capacity = 500;
        config.initial_population = 60;
        config
    }

    fn fixture(config: &SimConfig) -> (World, HeadlessBackend, FrameRunner) {
        let world = match World::new(config.clone()) {
            Ok(w) => w,
            Err(err) => panic!("world construction failed: {err}"),
        };
        let mut backend = HeadlessBackend::new();
        if let Err(err) = backend.create_surface(config.screen_w, config.screen_h) {
            panic!("surface creation failed: {err}");
        }
        let strip_w = config.sprite_w * config.frame_count;
        let pixels = vec![
            [SPRITE_COLOR.r, SPRITE_COLOR.g, SPRITE_COLOR.b, SPRITE_COLOR.a];
            (strip_w * config.sprite_h) as usize
        ]
        .concat();
        let atlas = match backend.upload_texture(strip_w, config.sprite_h, &pixels) {
            Ok(id) => id,
            Err(err) => panic!("atlas upload failed: {err}"),
        };
        (world, backend, FrameRunner::new(atlas))
    }

    #[test]
    fn one_frame_draws_sprites_overlay_and_presents() {
        let config = config();
        let (mut world, mut backend, mut runner) = fixture(&config);

        let metrics = match runner.run_frame(&mut world, &mut backend, 0, []) {
            Ok(m) => m,
            Err(err) => panic!("frame failed: {err}"),
        };

        assert_eq!(metrics.quads, 60);
        assert!(metrics.overlay_refreshed);
        assert_eq!(backend.frames_presented(), 1);
        assert!(backend.pixel_count(SPRITE_COLOR) > 0);
        assert!(backend.pixel_count(Color::BLACK) > 0);
    }

    #[test]
    fn overlay_refresh_happens_once_until_dirty() {
        let config = config();
        let (mut world, mut backend, mut runner) = fixture(&config);

        let first = runner.run_frame(&mut world, &mut backend, 0, []);
        let second = runner.run_frame(&mut world, &mut backend, 5, []);
        assert!(matches!(first, Ok(m) if m.overlay_refreshed));
        assert!(matches!(second, Ok(m) if !m.overlay_refreshed));

        let third = runner.run_frame(
            &mut world,
            &mut backend,
            10,
            [Command::AdjustPopulation(100)],
        );
        assert!(matches!(third, Ok(m) if m.overlay_refreshed && m.quads == 160));
    }

    #[test]
    fn sprites_present_even_when_the_tick_is_gated() {
        let config = config();
        let (mut world, mut backend, mut runner) = fixture(&config);

        // 3 ms since the epoch: under the 10 ms interval, no tick.
        let metrics = match runner.run_frame(&mut world, &mut backend, 3, []) {
            Ok(m) => m,
            Err(err) => panic!("frame failed: {err}"),
        };
        assert!(!metrics.step.ticked);
        assert_eq!(metrics.quads, 60);
        assert_eq!(backend.frames_presented(), 1);

        let metrics = match runner.run_frame(&mut world, &mut backend, 13, []) {
            Ok(m) => m,
            Err(err) => panic!("frame failed: {err}"),
        };
        assert!(metrics.step.ticked);
        assert_eq!(backend.frames_presented(), 2);
    }

    #[test]
    fn rotation_mode_reaches_the_backend() {
        let config = config();
        let (mut world, mut backend, mut runner) = fixture(&config);

        let plain = runner.run_frame(&mut world, &mut backend, 0, []);
        assert!(plain.is_ok());
        assert_eq!(backend.rotated_quads(), 0);

        let rotated = runner.run_frame(&mut world, &mut backend, 10, [Command::ToggleRotation]);
        assert!(rotated.is_ok());
        assert_eq!(backend.rotated_quads(), 60);
    }

    #[test]
    fn a_missing_atlas_fails_the_frame() {
        let config = config();
        let (mut world, mut backend, _) = fixture(&config);
        let mut runner = FrameRunner::new(TextureId(99));

        match runner.run_frame(&mut world, &mut backend, 0, []) {
            Err(BackendError::UnknownTexture(TextureId(99))) => {}
            other => panic!("expected UnknownTexture, got {other:?}"),
        }
    }
}

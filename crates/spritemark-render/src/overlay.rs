//! The dirty-gated diagnostic overlay.
//!
//! One offscreen surface holds the `fps` / `sprites` readout. It is
//! re-rasterized only when the world reports its overlay dirty (a
//! population change or an fps window rollover), then composed onto
//! every frame from the cached texture. Rasterizing thirty-odd glyphs
//! is cheap; doing it once per second instead of once per frame keeps
//! it out of the benchmark's measured hot path.

use spritemark_core::{Color, Rect, TextureId};
use spritemark_font::{draw_string, Surface};
use spritemark_sim::World;

use crate::backend::{BackendError, RenderBackend};

/// Width of the offscreen overlay surface in pixels.
pub const OVERLAY_W: u32 = 230;
/// Height of the offscreen overlay surface in pixels.
pub const OVERLAY_H: u32 = 30;

const TEXT_X: i32 = 10;
const TEXT_Y: i32 = 10;
const TEXT_SCALE: i32 = 1;

// ── OverlayCache ─────────────────────────────────────────────────

/// Offscreen cache for the diagnostic readout.
pub struct OverlayCache {
    surface: Surface,
    texture: Option<TextureId>,
}

impl OverlayCache {
    /// On-screen rectangle the overlay is composed into.
    ///
    /// Slightly narrower than the surface; the backend squeezes the
    /// texture to fit.
    pub const DEST: Rect = Rect::new(10, 10, 200, 30);

    /// A cache with a blank white surface and no texture yet.
    pub fn new() -> Self {
        Self {
            surface: Surface::new(OVERLAY_W, OVERLAY_H, Color::WHITE),
            texture: None,
        }
    }

    /// Re-rasterizes the readout if the world marked it dirty.
    ///
    /// Clears the dirty flag, repaints the surface, and pushes the
    /// pixels to the backend (uploading a texture on first use,
    /// updating it afterwards). Returns whether a repaint happened.
    pub fn refresh(
        &mut self,
        world: &mut World,
        backend: &mut dyn RenderBackend,
    ) -> Result<bool, BackendError> {
        if !world.take_overlay_dirty() {
            return Ok(false);
        }

        self.surface.fill(Color::WHITE);
        let line = world.overlay_line();
        draw_string(
            &mut self.surface,
            &line,
            TEXT_X,
            TEXT_Y,
            Color::BLACK,
            TEXT_SCALE,
        );

        match self.texture {
            Some(texture) => backend.update_texture(texture, self.surface.data())?,
            None => {
                self.texture =
                    Some(backend.upload_texture(OVERLAY_W, OVERLAY_H, self.surface.data())?);
            }
        }
        Ok(true)
    }

    /// Draws the cached overlay into [`Self::DEST`].
    ///
    /// A cache that has never refreshed has nothing to show and
    /// composes nothing.
    pub fn compose(&self, backend: &mut dyn RenderBackend) -> Result<(), BackendError> {
        if let Some(texture) = self.texture {
            let src = Rect::new(0, 0, OVERLAY_W as i32, OVERLAY_H as i32);
            backend.draw_quad(texture, src, Self::DEST, None)?;
        }
        Ok(())
    }

    /// The offscreen surface holding the last rasterized readout.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The backend texture, once one has been uploaded.
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }
}

impl Default for OverlayCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessBackend;
    use spritemark_core::Command;
    use spritemark_sim::SimConfig;

    fn fixture() -> (World, HeadlessBackend, OverlayCache) {
        let mut config = SimConfig::default();
        config.capacity = 200;
        config.initial_population = 50;
        let world = match World::new(config) {
            Ok(w) => w,
            Err(err) => panic!("world construction failed: {err}"),
        };
        let mut backend = HeadlessBackend::new();
        if let Err(err) = backend.create_surface(480, 272) {
            panic!("surface creation failed: {err}");
        }
        (world, backend, OverlayCache::new())
    }

    #[test]
    fn first_refresh_paints_the_initial_readout() {
        let (mut world, mut backend, mut cache) = fixture();

        let repainted = cache.refresh(&mut world, &mut backend);
        assert_eq!(repainted, Ok(true));
        assert!(cache.texture().is_some());
        assert!(cache.surface().count_pixels(Color::BLACK) > 0);
    }

    #[test]
    fn refresh_is_skipped_until_the_world_dirties_again() {
        let (mut world, mut backend, mut cache) = fixture();

        assert_eq!(cache.refresh(&mut world, &mut backend), Ok(true));
        assert_eq!(cache.refresh(&mut world, &mut backend), Ok(false));

        world.apply(Command::AdjustPopulation(100));
        assert_eq!(cache.refresh(&mut world, &mut backend), Ok(true));
        // The texture is updated in place, never re-uploaded.
        assert_eq!(backend.texture_count(), 1);
    }

    #[test]
    fn repaint_replaces_the_old_readout() {
        let (mut world, mut backend, mut cache) = fixture();

        assert_eq!(cache.refresh(&mut world, &mut backend), Ok(true));
        let first = cache.surface().data().to_vec();

        world.apply(Command::AdjustPopulation(100));
        assert_eq!(cache.refresh(&mut world, &mut backend), Ok(true));
        assert_ne!(cache.surface().data(), &first[..]);
    }

    #[test]
    fn compose_lands_inside_the_dest_rect() {
        let (mut world, mut backend, mut cache) = fixture();
        backend.clear(Color::WHITE);

        assert_eq!(cache.refresh(&mut world, &mut backend), Ok(true));
        assert_eq!(cache.compose(&mut backend), Ok(()));

        let dest = OverlayCache::DEST;
        let mut inside = 0usize;
        for y in 0..272 {
            for x in 0..480 {
                if backend.pixel(x, y) == Some(Color::BLACK) {
                    assert!(
                        x >= dest.x && x < dest.x + dest.w && y >= dest.y && y < dest.y + dest.h,
                        "stray overlay pixel at {x},{y}"
                    );
                    inside += 1;
                }
            }
        }
        assert!(inside > 0);
    }

    #[test]
    fn compose_before_any_refresh_draws_nothing() {
        let (_, mut backend, cache) = fixture();
        backend.clear(Color::WHITE);

        assert_eq!(cache.compose(&mut backend), Ok(()));
        assert_eq!(backend.pixel_count(Color::BLACK), 0);
    }
}

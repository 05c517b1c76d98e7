//! Render-descriptor extraction.
//!
//! Turns simulation state into plain draw requests: one [`SpriteQuad`]
//! per active entity, in pool order. The pipeline hands these to the
//! backend's quad primitive; nothing here touches pixels.

use spritemark_core::Rect;
use spritemark_sim::{SimConfig, Sprite, World};

/// One entity's draw request for the current frame.
///
/// `src` selects the entity's animation frame from the horizontal strip
/// atlas; `dst` is the on-screen rectangle; `rotated` asks the backend
/// to spin the quad by the configured fixed angle about the center of
/// `dst`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteQuad {
    /// Atlas region to sample.
    pub src: Rect,
    /// Screen rectangle to cover. May overhang the screen edges by up
    /// to half a sprite; the backend clips.
    pub dst: Rect,
    /// Whether the fixed rotation applies to this quad.
    pub rotated: bool,
}

impl SpriteQuad {
    /// The quad for one sprite under the given configuration.
    ///
    /// The atlas frame is `{frame * sprite_w, 0, sprite_w, sprite_h}`;
    /// the destination truncates the fixed-point position to whole
    /// pixels with an arithmetic shift, so a center just left of zero
    /// lands on pixel -1 rather than snapping to 0.
    pub fn for_sprite(config: &SimConfig, sprite: &Sprite, rotated: bool) -> Self {
        let w = config.sprite_w as i32;
        let h = config.sprite_h as i32;
        Self {
            src: Rect::new(sprite.frame as i32 * w, 0, w, h),
            dst: Rect::new(sprite.x.to_int(), sprite.y.to_int(), w, h),
            rotated,
        }
    }
}

/// Fills `out` with one quad per active sprite, in pool order.
///
/// Clears `out` first and reuses its capacity, so a buffer kept across
/// frames stops allocating once it has seen the peak population. The
/// `rotated` flag on every quad mirrors the world's rotation mode.
pub fn sprite_quads(world: &World, out: &mut Vec<SpriteQuad>) {
    out.clear();
    let config = world.config();
    let rotated = world.rotation_enabled();
    out.extend(
        world
            .sprites()
            .iter()
            .map(|sprite| SpriteQuad::for_sprite(config, sprite, rotated)),
    );
}

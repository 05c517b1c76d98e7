//! Software rendering into an in-memory framebuffer.
//!
//! [`HeadlessBackend`] implements the backend seam with no windowing
//! system behind it: textures are byte vectors, draws are
//! nearest-neighbour blits, presenting bumps a counter. Tests, benches,
//! and the headless example run the full pipeline against it and then
//! inspect the pixels.

use spritemark_core::{Color, Rect, TextureId};

use crate::backend::{BackendError, RenderBackend};

const BYTES_PER_PIXEL: usize = 4;

struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

// ── HeadlessBackend ──────────────────────────────────────────────

/// An in-memory [`RenderBackend`].
///
/// Rotation requests are counted but drawn axis-aligned; the flag's
/// journey through the pipeline is what tests care about, not the
/// trigonometry.
pub struct HeadlessBackend {
    width: u32,
    height: u32,
    framebuffer: Vec<u8>,
    textures: Vec<Texture>,
    frames_presented: u64,
    rotated_quads: u64,
}

impl HeadlessBackend {
    /// A backend with no surface yet.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            framebuffer: Vec::new(),
            textures: Vec::new(),
            frames_presented: 0,
            rotated_quads: 0,
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 framebuffer, row-major.
    pub fn framebuffer(&self) -> &[u8] {
        &self.framebuffer
    }

    /// How many frames have been presented.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// How many quads were drawn with a rotation request.
    pub fn rotated_quads(&self) -> u64 {
        self.rotated_quads
    }

    /// How many textures have been uploaded.
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// The framebuffer pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &self.framebuffer[offset..offset + BYTES_PER_PIXEL];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    /// Number of framebuffer pixels exactly matching `color`.
    pub fn pixel_count(&self, color: Color) -> usize {
        self.framebuffer
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| *px == [color.r, color.g, color.b, color.a])
            .count()
    }

    fn texture(&self, id: TextureId) -> Result<&Texture, BackendError> {
        self.textures
            .get(id.0 as usize)
            .ok_or(BackendError::UnknownTexture(id))
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for HeadlessBackend {
    fn create_surface(&mut self, width: u32, height: u32) -> Result<(), BackendError> {
        if width == 0 || height == 0 {
            return Err(BackendError::SurfaceCreation { width, height });
        }
        self.width = width;
        self.height = height;
        self.framebuffer.clear();
        self.framebuffer
            .resize(width as usize * height as usize * BYTES_PER_PIXEL, 0);
        Ok(())
    }

    fn upload_texture(
        &mut self,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<TextureId, BackendError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(BackendError::TextureSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        let id = TextureId(self.textures.len() as u32);
        self.textures.push(Texture {
            width,
            height,
            pixels: pixels.to_vec(),
        });
        Ok(id)
    }

    fn update_texture(&mut self, texture: TextureId, pixels: &[u8]) -> Result<(), BackendError> {
        let slot = self
            .textures
            .get_mut(texture.0 as usize)
            .ok_or(BackendError::UnknownTexture(texture))?;
        let expected = slot.width as usize * slot.height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(BackendError::TextureSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        slot.pixels.copy_from_slice(pixels);
        Ok(())
    }

    fn clear(&mut self, color: Color) {
        for px in self.framebuffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    fn draw_quad(
        &mut self,
        texture: TextureId,
        src: Rect,
        dst: Rect,
        rotation: Option<f32>,
    ) -> Result<(), BackendError> {
        self.texture(texture)?;
        if rotation.is_some() {
            self.rotated_quads += 1;
        }
        if src.w <= 0 || src.h <= 0 || dst.w <= 0 || dst.h <= 0 {
            return Ok(());
        }

        let tex = &self.textures[texture.0 as usize];
        for dy in 0..dst.h {
            let py = dst.y + dy;
            if py < 0 || py as u32 >= self.height {
                continue;
            }
            let sy = src.y + dy * src.h / dst.h;
            if sy < 0 || sy as u32 >= tex.height {
                continue;
            }
            for dx in 0..dst.w {
                let px = dst.x + dx;
                if px < 0 || px as u32 >= self.width {
                    continue;
                }
                let sx = src.x + dx * src.w / dst.w;
                if sx < 0 || sx as u32 >= tex.width {
                    continue;
                }
                let from = (sy as usize * tex.width as usize + sx as usize) * BYTES_PER_PIXEL;
                let to = (py as usize * self.width as usize + px as usize) * BYTES_PER_PIXEL;
                self.framebuffer[to..to + BYTES_PER_PIXEL]
                    .copy_from_slice(&tex.pixels[from..from + BYTES_PER_PIXEL]);
            }
        }
        Ok(())
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

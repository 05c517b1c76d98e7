//! Plain RGBA8 pixel surface.
//!
//! The rasterizer paints into this buffer and any backend can upload it
//! as a texture, so the font stack never touches a renderer API.

use spritemark_core::Color;

/// Row-major RGBA8 pixel buffer, four bytes per pixel.
///
/// Writes outside the surface are skipped without error; glyphs are
/// allowed to straddle the edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Creates a `width` by `height` surface filled with `color`.
    pub fn new(width: u32, height: u32, color: Color) -> Self {
        let pixels = width as usize * height as usize;
        let mut surface = Self {
            width,
            height,
            data: vec![0; pixels * 4],
        };
        surface.fill(color);
        surface
    }

    /// Overwrites every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Paints one pixel. Coordinates outside the surface are skipped.
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }

    /// Reads one pixel, or `None` outside the surface.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.data[idx..idx + 4];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw bytes, row-major RGBA8.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Count of pixels equal to `color`, for tests and diagnostics.
    pub fn count_pixels(&self, color: Color) -> usize {
        self.data
            .chunks_exact(4)
            .filter(|px| *px == [color.r, color.g, color.b, color.a])
            .count()
    }
}
